use std::time::SystemTime;
use crate::trigger::acquisition::{Acquisition, AcquisitionSource, ChannelWaveform};
use crate::trigger::error::ScopeError;
use crate::trigger::locator::locate;
use crate::trigger::settings::ScopeSettings;
use crate::trigger::TriggerWindow;
/// Acquisition after the software trigger stage, ready for display.
#[derive(Clone, Debug)]
pub struct ScopeFrame {
    pub captured_at: SystemTime,
    pub window: TriggerWindow,
    /// Trigger-aligned when `window` is triggered, otherwise the raw capture.
    pub channels: Vec<ChannelWaveform>,
}
impl ScopeFrame {
    pub fn triggered(&self) -> bool {
        self.window.is_triggered()
    }
}
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TriggerStats {
    pub triggered: u64,
    pub untriggered: u64,
}
/// Pulls acquisitions from a source and aligns them on the software trigger.
pub struct TriggerPipeline<S: AcquisitionSource> {
    source: S,
    settings: ScopeSettings,
    stats: TriggerStats,
}
impl<S: AcquisitionSource> TriggerPipeline<S> {
    pub fn new(source: S, settings: ScopeSettings) -> Result<Self, ScopeError> {
        settings.validate()?;
        Ok(Self {
            source,
            settings,
            stats: TriggerStats::default(),
        })
    }
    pub fn settings(&self) -> &ScopeSettings {
        &self.settings
    }
    /// Replaces the settings used for the following acquisitions.
    pub fn apply_settings(&mut self, settings: ScopeSettings) -> Result<(), ScopeError> {
        settings.validate()?;
        self.settings = settings;
        Ok(())
    }
    pub fn stats(&self) -> TriggerStats {
        self.stats
    }
    pub fn pump_once(&mut self) -> Result<Option<ScopeFrame>, ScopeError> {
        let Some(acquisition) = self.source.next_acquisition()? else {
            return Ok(None);
        };
        let frame = self.process(acquisition)?;
        Ok(Some(frame))
    }
    pub fn process(&mut self, acquisition: Acquisition) -> Result<ScopeFrame, ScopeError> {
        acquisition.validate(self.settings.channels)?;
        let window = locate(
            &acquisition.channels,
            &self.settings.trigger,
            &self.settings.horizontal,
            self.settings.channels,
        );
        if window.is_triggered() {
            self.stats.triggered += 1;
        } else {
            self.stats.untriggered += 1;
        }
        let display_samples = self.settings.horizontal.display_sample_count();
        let channels = acquisition
            .channels
            .into_iter()
            .map(|channel| align_channel(channel, &window, display_samples))
            .collect();
        Ok(ScopeFrame {
            captured_at: acquisition.captured_at,
            window,
            channels,
        })
    }
}
fn align_channel(
    channel: ChannelWaveform,
    window: &TriggerWindow,
    display_samples: usize,
) -> ChannelWaveform {
    if !channel.used {
        return channel;
    }
    match window.crop(&channel.samples, display_samples) {
        Some(aligned) => ChannelWaveform::new(aligned.to_vec()),
        None => channel,
    }
}
#[cfg(test)]
mod tests {
    use super::*;
    use crate::trigger::acquisition::ManualSource;
    use crate::trigger::settings::{HorizontalSettings, Slope, TriggerMode};
    fn settings() -> ScopeSettings {
        let mut settings = ScopeSettings::default();
        settings.horizontal = HorizontalSettings {
            timebase: 0.01,
            samplerate: 1000.0,
        };
        settings.trigger.mode = TriggerMode::Software;
        settings.trigger.slope = Slope::Rising;
        settings.trigger.set_level(0, 2.5);
        settings
    }
    fn step_acquisition(at: usize) -> Acquisition {
        let ch1: Vec<f64> = (0..1000).map(|i| if i < at { 0.0 } else { 5.0 }).collect();
        let ch2: Vec<f64> = (0..1000).map(|i| i as f64).collect();
        Acquisition::new(vec![ChannelWaveform::new(ch1), ChannelWaveform::new(ch2)])
    }
    #[test]
    fn pipeline_aligns_every_channel_on_the_trigger() {
        let source = ManualSource::new(vec![step_acquisition(200), step_acquisition(430)]);
        let mut pipeline = TriggerPipeline::new(source, settings()).unwrap();
        for edge in [200usize, 430] {
            let frame = pipeline.pump_once().unwrap().unwrap();
            assert!(frame.triggered());
            assert_eq!(frame.window.trigger_start_sample, edge);
            assert_eq!(frame.channels[0].len(), 100);
            // Trigger point sits at position * screen width.
            assert_eq!(frame.channels[0].samples[49], 0.0);
            assert_eq!(frame.channels[0].samples[50], 5.0);
            assert_eq!(frame.channels[1].samples[0], (edge - 50) as f64);
        }
        assert!(pipeline.pump_once().unwrap().is_none());
        assert_eq!(
            pipeline.stats(),
            TriggerStats {
                triggered: 2,
                untriggered: 0
            }
        );
    }
    #[test]
    fn untriggered_frames_pass_through_raw() {
        let flat = Acquisition::new(vec![
            ChannelWaveform::new(vec![0.0; 1000]),
            ChannelWaveform::unused(),
        ]);
        let source = ManualSource::new(vec![flat]);
        let mut pipeline = TriggerPipeline::new(source, settings()).unwrap();
        let frame = pipeline.pump_once().unwrap().unwrap();
        assert!(!frame.triggered());
        assert_eq!(frame.channels[0].len(), 1000);
        assert!(!frame.channels[1].used);
        assert_eq!(pipeline.stats().untriggered, 1);
    }
    #[test]
    fn rejects_acquisitions_with_wrong_channel_count() {
        let mut pipeline = TriggerPipeline::new(ManualSource::new(Vec::new()), settings()).unwrap();
        let acquisition = Acquisition::new(vec![ChannelWaveform::new(vec![0.0; 10])]);
        let err = pipeline.process(acquisition).unwrap_err();
        assert!(matches!(
            err,
            ScopeError::ChannelMismatch {
                expected: 2,
                actual: 1
            }
        ));
    }
    #[test]
    fn settings_changes_apply_to_the_next_acquisition() {
        let source = ManualSource::new(vec![step_acquisition(200), step_acquisition(200)]);
        let mut pipeline = TriggerPipeline::new(source, settings()).unwrap();
        assert!(pipeline.pump_once().unwrap().unwrap().triggered());
        let mut next = pipeline.settings().clone();
        next.trigger.mode = TriggerMode::Auto;
        pipeline.apply_settings(next).unwrap();
        assert!(!pipeline.pump_once().unwrap().unwrap().triggered());
        let mut broken = pipeline.settings().clone();
        broken.horizontal.samplerate = -1.0;
        assert!(pipeline.apply_settings(broken).is_err());
        assert_eq!(pipeline.settings().trigger.mode, TriggerMode::Auto);
    }
}
