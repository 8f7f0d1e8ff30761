use std::fmt;
/// Diagnostics raised while locating a software trigger.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TriggerEvent {
    /// The screen needs at least as many samples as were captured.
    TooFewSamples {
        samples_display: f64,
        sample_count: usize,
    },
    /// No edge in the search range survived the debounce.
    NotAsserted,
    Asserted { sample: usize },
}
impl fmt::Display for TriggerEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TriggerEvent::TooFewSamples {
                samples_display,
                sample_count,
            } => write!(
                f,
                "Too few samples to make a steady picture ({sample_count} captured, {samples_display:.1} on screen). Decrease sample rate"
            ),
            TriggerEvent::NotAsserted => f.write_str("Trigger not asserted. Data ignored"),
            TriggerEvent::Asserted { sample } => write!(f, "Trigger asserted at sample {sample}"),
        }
    }
}
/// Hook receiving trigger diagnostics. It cannot influence the located window.
pub trait TriggerObserver {
    fn notify(&mut self, event: TriggerEvent);
}
impl<F: FnMut(TriggerEvent)> TriggerObserver for F {
    fn notify(&mut self, event: TriggerEvent) {
        self(event)
    }
}
/// Forwards every event to `log::debug!`.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogObserver;
impl TriggerObserver for LogObserver {
    fn notify(&mut self, event: TriggerEvent) {
        log::debug!("{event}");
    }
}
