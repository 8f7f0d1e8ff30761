use std::fmt;
use std::fs;
use std::path::Path;
use serde::{Deserialize, Serialize};
use crate::trigger::ScopeError;
/// Number of horizontal divisions shown on the screen.
pub const DIVS_TIME: f64 = 10.0;
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TriggerMode {
    /// Free running, the device forces a trigger after a timeout.
    Auto,
    /// Hardware trigger, waits for the configured edge.
    Normal,
    /// Hardware trigger, stops after the first acquisition.
    Single,
    /// Edge located by post-processing the captured samples.
    #[default]
    Software,
}
impl TriggerMode {
    pub const ALL: [TriggerMode; 4] = [
        TriggerMode::Auto,
        TriggerMode::Normal,
        TriggerMode::Single,
        TriggerMode::Software,
    ];
}
impl fmt::Display for TriggerMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TriggerMode::Auto => "Auto",
            TriggerMode::Normal => "Normal",
            TriggerMode::Single => "Single",
            TriggerMode::Software => "Software",
        };
        f.write_str(name)
    }
}
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Slope {
    #[default]
    Rising,
    Falling,
}
impl Slope {
    pub const ALL: [Slope; 2] = [Slope::Rising, Slope::Falling];
    pub fn opposite(self) -> Self {
        match self {
            Slope::Rising => Slope::Falling,
            Slope::Falling => Slope::Rising,
        }
    }
}
impl fmt::Display for Slope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Slope::Rising => f.write_str("\u{2197}"),
            Slope::Falling => f.write_str("\u{2198}"),
        }
    }
}
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HorizontalSettings {
    /// Seconds per division.
    pub timebase: f64,
    /// Samples per second.
    pub samplerate: f64,
}
impl HorizontalSettings {
    /// Duration of the whole screen in seconds.
    pub fn time_display(&self) -> f64 {
        self.timebase * DIVS_TIME
    }
    /// Samples covering the screen, not rounded.
    pub fn samples_display(&self) -> f64 {
        self.time_display() * self.samplerate
    }
    /// Whole samples covering the screen; non-finite or negative values give zero.
    pub fn display_sample_count(&self) -> usize {
        self.samples_display().floor() as usize
    }
}
impl Default for HorizontalSettings {
    fn default() -> Self {
        Self {
            timebase: 1e-3,
            samplerate: 1e6,
        }
    }
}
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TriggerSettings {
    pub mode: TriggerMode,
    pub slope: Slope,
    /// Channel index, or an index into the device's special sources when `special` is set.
    pub source: usize,
    pub special: bool,
    /// Fraction of the screen left of the trigger point. Expected in [0, 1], not clamped.
    pub position: f64,
    /// Trigger level in volts, one per physical channel.
    pub levels: Vec<f64>,
}
impl TriggerSettings {
    pub fn level(&self, channel: usize) -> f64 {
        self.levels.get(channel).copied().unwrap_or(0.0)
    }
    pub fn set_level(&mut self, channel: usize, volts: f64) {
        if channel >= self.levels.len() {
            self.levels.resize(channel + 1, 0.0);
        }
        self.levels[channel] = volts;
    }
    /// Points the trigger at a physical channel or at one of `special_count` special inputs.
    /// An out of range id leaves the settings untouched.
    pub fn select_source(
        &mut self,
        special: bool,
        id: usize,
        channel_count: usize,
        special_count: usize,
    ) -> Result<(), ScopeError> {
        let limit = if special { special_count } else { channel_count };
        if id >= limit {
            return Err(ScopeError::UnknownTriggerSource { special, id });
        }
        self.special = special;
        self.source = id;
        Ok(())
    }
}
impl Default for TriggerSettings {
    fn default() -> Self {
        Self {
            mode: TriggerMode::Software,
            slope: Slope::Rising,
            source: 0,
            special: false,
            position: 0.5,
            levels: vec![0.0; 2],
        }
    }
}
/// Scope state consumed per acquisition.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScopeSettings {
    /// Number of physical channels the device acquires.
    pub channels: usize,
    pub horizontal: HorizontalSettings,
    pub trigger: TriggerSettings,
}
impl Default for ScopeSettings {
    fn default() -> Self {
        Self {
            channels: 2,
            horizontal: HorizontalSettings::default(),
            trigger: TriggerSettings::default(),
        }
    }
}
impl ScopeSettings {
    pub fn from_json_str(json: &str) -> Result<Self, ScopeError> {
        let settings: ScopeSettings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, ScopeError> {
        let json = fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }
    pub fn validate(&self) -> Result<(), ScopeError> {
        if !is_positive(self.horizontal.samplerate) {
            return Err(ScopeError::InvalidSampleRate);
        }
        if !is_positive(self.horizontal.timebase) {
            return Err(ScopeError::InvalidTimebase);
        }
        if self.trigger.levels.len() != self.channels {
            return Err(ScopeError::ChannelMismatch {
                expected: self.channels,
                actual: self.trigger.levels.len(),
            });
        }
        Ok(())
    }
}
fn is_positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}
#[cfg(test)]
mod tests {
    use super::*;
    #[test]
    fn display_samples_follow_timebase() {
        let horizontal = HorizontalSettings {
            timebase: 0.01,
            samplerate: 1000.0,
        };
        assert!((horizontal.samples_display() - 100.0).abs() < 1e-9);
        assert_eq!(horizontal.display_sample_count(), 100);
    }
    #[test]
    fn parses_partial_json_with_defaults() {
        let json = r#"{
            "channels": 4,
            "horizontal": { "timebase": 0.002 },
            "trigger": { "mode": "software", "slope": "falling", "source": 1, "levels": [0.0, 1.5, 0.0, 0.0] }
        }"#;
        let settings = ScopeSettings::from_json_str(json).unwrap();
        assert_eq!(settings.channels, 4);
        assert_eq!(settings.horizontal.samplerate, 1e6);
        assert_eq!(settings.trigger.slope, Slope::Falling);
        assert_eq!(settings.trigger.level(1), 1.5);
        assert_eq!(settings.trigger.position, 0.5);
    }
    #[test]
    fn rejects_level_table_of_wrong_length() {
        let json = r#"{ "channels": 3, "trigger": { "levels": [0.0] } }"#;
        let err = ScopeSettings::from_json_str(json).unwrap_err();
        assert!(matches!(
            err,
            ScopeError::ChannelMismatch {
                expected: 3,
                actual: 1
            }
        ));
    }
    #[test]
    fn rejects_bad_horizontal_and_malformed_json() {
        let mut settings = ScopeSettings::default();
        settings.horizontal.samplerate = 0.0;
        assert!(matches!(settings.validate(), Err(ScopeError::InvalidSampleRate)));
        settings.horizontal.samplerate = 1e3;
        settings.horizontal.timebase = f64::NAN;
        assert!(matches!(settings.validate(), Err(ScopeError::InvalidTimebase)));
        assert!(matches!(
            ScopeSettings::from_json_str("{ not json"),
            Err(ScopeError::Config(_))
        ));
    }
    #[test]
    fn source_selection_checks_the_right_list() {
        let mut trigger = TriggerSettings::default();
        trigger.select_source(true, 0, 2, 1).unwrap();
        assert!(trigger.special);
        assert_eq!(trigger.source, 0);
        let err = trigger.select_source(false, 2, 2, 1).unwrap_err();
        assert!(matches!(
            err,
            ScopeError::UnknownTriggerSource {
                special: false,
                id: 2
            }
        ));
        assert!(trigger.special);
        trigger.select_source(false, 1, 2, 1).unwrap();
        assert!(!trigger.special);
        assert_eq!(trigger.source, 1);
    }
    #[test]
    fn names_match_the_scope_ui() {
        let names: Vec<String> = TriggerMode::ALL.iter().map(|m| m.to_string()).collect();
        assert_eq!(names, ["Auto", "Normal", "Single", "Software"]);
        assert_eq!(Slope::Rising.to_string(), "\u{2197}");
        assert_eq!(Slope::Falling.opposite(), Slope::Rising);
    }
    #[test]
    fn set_level_grows_the_table() {
        let mut trigger = TriggerSettings::default();
        trigger.set_level(3, -0.25);
        assert_eq!(trigger.levels.len(), 4);
        assert_eq!(trigger.level(3), -0.25);
        assert_eq!(trigger.level(9), 0.0);
    }
}
