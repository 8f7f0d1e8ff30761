//! Software trigger stage of an oscilloscope: locates a debounced level
//! crossing in each captured acquisition and aligns the channels on it.
pub mod trigger;
pub use trigger::{
    locate, locate_observed, Acquisition, ChannelWaveform, ScopeError, ScopeFrame, ScopeSettings,
    Slope, TriggerMode, TriggerPipeline, TriggerWindow,
};
