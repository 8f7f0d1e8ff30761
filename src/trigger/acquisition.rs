use std::collections::VecDeque;
use std::time::SystemTime;
use crate::trigger::ScopeError;
/// Captured voltages of one channel.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ChannelWaveform {
    pub used: bool,
    pub samples: Vec<f64>, // volts, chronological
}
impl ChannelWaveform {
    pub fn new(samples: Vec<f64>) -> Self {
        Self {
            used: true,
            samples,
        }
    }
    pub fn unused() -> Self {
        Self::default()
    }
    pub fn len(&self) -> usize {
        self.samples.len()
    }
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}
/// One completed acquisition, all channels captured together.
#[derive(Clone, Debug)]
pub struct Acquisition {
    pub captured_at: SystemTime,
    pub channels: Vec<ChannelWaveform>,
}
impl Acquisition {
    pub fn new(channels: Vec<ChannelWaveform>) -> Self {
        Self {
            captured_at: SystemTime::now(),
            channels,
        }
    }
    pub fn validate(&self, physical_channels: usize) -> Result<(), ScopeError> {
        if self.num_channels() != physical_channels {
            return Err(ScopeError::ChannelMismatch {
                expected: physical_channels,
                actual: self.num_channels(),
            });
        }
        Ok(())
    }
    pub fn num_channels(&self) -> usize {
        self.channels.len()
    }
}
/// Something that hands out completed acquisitions on demand.
pub trait AcquisitionSource {
    fn next_acquisition(&mut self) -> Result<Option<Acquisition>, ScopeError>;
}
/// In-memory source useful for tests and deterministic playback.
pub struct ManualSource {
    queue: VecDeque<Acquisition>,
}
impl ManualSource {
    pub fn new(acquisitions: impl IntoIterator<Item = Acquisition>) -> Self {
        Self {
            queue: acquisitions.into_iter().collect(),
        }
    }
}
impl AcquisitionSource for ManualSource {
    fn next_acquisition(&mut self) -> Result<Option<Acquisition>, ScopeError> {
        Ok(self.queue.pop_front())
    }
}
