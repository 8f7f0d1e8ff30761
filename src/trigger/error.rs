use thiserror::Error;
#[derive(Debug, Error)]
pub enum ScopeError {
    #[error("sample rate must be greater than zero")]
    InvalidSampleRate,
    #[error("timebase must be greater than zero")]
    InvalidTimebase,
    #[error("channel count mismatch: expected {expected}, got {actual}")]
    ChannelMismatch { expected: usize, actual: usize },
    #[error("unknown trigger source {id} (special: {special})")]
    UnknownTriggerSource { special: bool, id: usize },
    #[error("failed to parse scope settings: {0}")]
    Config(#[from] serde_json::Error),
    #[error("failed to read scope settings: {0}")]
    Io(#[from] std::io::Error),
}
