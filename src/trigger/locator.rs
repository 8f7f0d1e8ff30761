//! Software trigger: finds a debounced level crossing in a captured waveform
//! and derives the pre/post trigger window used to align the display.
use crate::trigger::observer::{LogObserver, TriggerEvent, TriggerObserver};
use crate::trigger::settings::{HorizontalSettings, Slope, TriggerMode, TriggerSettings};
use crate::trigger::{ChannelWaveform, TriggerWindow};
/// A crossing needs strictly more confirming samples than this.
pub const SW_TRIGGER_THRESHOLD: usize = 7;
/// Crossing sample plus the lookahead checked for confirmation.
pub const SW_TRIGGER_SAMPLE_SET: usize = 11;
/// Locates the software trigger, reporting diagnostics through `log`.
pub fn locate(
    waveforms: &[ChannelWaveform],
    trigger: &TriggerSettings,
    horizontal: &HorizontalSettings,
    physical_channels: usize,
) -> TriggerWindow {
    locate_observed(
        waveforms,
        trigger,
        horizontal,
        physical_channels,
        &mut LogObserver,
    )
}
/// Same as [`locate`] with a caller supplied diagnostics hook.
///
/// Every unmet precondition, too short a capture and an edge that fails the
/// debounce all yield [`TriggerWindow::NONE`].
pub fn locate_observed<O: TriggerObserver + ?Sized>(
    waveforms: &[ChannelWaveform],
    trigger: &TriggerSettings,
    horizontal: &HorizontalSettings,
    physical_channels: usize,
    observer: &mut O,
) -> TriggerWindow {
    let channel = trigger.source;
    if trigger.mode != TriggerMode::Software || trigger.special || channel >= physical_channels {
        return TriggerWindow::NONE;
    }
    let samples = match waveforms.get(channel) {
        Some(waveform) if waveform.used && !waveform.is_empty() => &waveform.samples,
        _ => return TriggerWindow::NONE,
    };
    let level = trigger.level(channel);
    let sample_count = samples.len();
    let samples_display = horizontal.samples_display();
    if samples_display.is_nan() || samples_display >= sample_count as f64 {
        // Not enough samples to absorb jitter; the frame is ignored.
        observer.notify(TriggerEvent::TooFewSamples {
            samples_display,
            sample_count,
        });
        return TriggerWindow::NONE;
    }
    // `as` truncates toward zero and saturates negatives to zero.
    let display = samples_display as usize;
    let pre = (trigger.position * samples_display) as usize;
    let post = sample_count
        .saturating_add(pre)
        .saturating_sub(display)
        .min(sample_count);
    let start = find_edge(samples, pre, post, level, trigger.slope);
    match start {
        Some(start) if start != 0 => {
            observer.notify(TriggerEvent::Asserted { sample: start });
            TriggerWindow::new(pre, post, start)
        }
        // Index zero cannot be told apart from "not found".
        _ => {
            observer.notify(TriggerEvent::NotAsserted);
            TriggerWindow::NONE
        }
    }
}
/// First index in `[from, to)` whose crossing is confirmed by the lookahead.
fn find_edge(samples: &[f64], from: usize, to: usize, level: f64, slope: Slope) -> Option<usize> {
    let mut prev = None;
    for (i, &value) in samples.iter().enumerate().take(to).skip(from) {
        if crosses(slope, value, level, prev) {
            let lookahead_end = (i + SW_TRIGGER_SAMPLE_SET).min(samples.len());
            let confirmed = samples[i + 1..lookahead_end]
                .iter()
                .filter(|&&sample| confirms(slope, sample, value))
                .count();
            if confirmed > SW_TRIGGER_THRESHOLD {
                return Some(i);
            }
            log::trace!("crossing at {i} rejected, {confirmed} confirming samples");
        }
        prev = Some(value);
    }
    None
}
fn crosses(slope: Slope, value: f64, level: f64, prev: Option<f64>) -> bool {
    let Some(prev) = prev else {
        return false;
    };
    match slope {
        Slope::Rising => value > level && prev <= level,
        Slope::Falling => value < level && prev >= level,
    }
}
fn confirms(slope: Slope, sample: f64, value: f64) -> bool {
    match slope {
        Slope::Rising => sample >= value,
        Slope::Falling => sample < value,
    }
}
