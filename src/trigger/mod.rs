// src/trigger/mod.rs
pub mod acquisition;
pub mod error;
pub mod locator;
pub mod observer;
pub mod pipeline;
pub mod settings;
pub mod window;
pub use acquisition::{Acquisition, AcquisitionSource, ChannelWaveform, ManualSource};
pub use error::ScopeError;
pub use locator::{locate, locate_observed, SW_TRIGGER_SAMPLE_SET, SW_TRIGGER_THRESHOLD};
pub use observer::{LogObserver, TriggerEvent, TriggerObserver};
pub use pipeline::{ScopeFrame, TriggerPipeline, TriggerStats};
pub use settings::{
    HorizontalSettings, ScopeSettings, Slope, TriggerMode, TriggerSettings, DIVS_TIME,
};
pub use window::TriggerWindow;
