/// Sample offsets produced by the software trigger for one acquisition.
///
/// The all-zero window means "not applicable or no trigger found": the frame
/// must not be cropped or aligned.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct TriggerWindow {
    pub pre_trigger_samples: usize,
    pub post_trigger_samples: usize,
    pub trigger_start_sample: usize,
}
impl TriggerWindow {
    pub const NONE: TriggerWindow = TriggerWindow {
        pre_trigger_samples: 0,
        post_trigger_samples: 0,
        trigger_start_sample: 0,
    };
    pub fn new(pre: usize, post: usize, start: usize) -> Self {
        Self {
            pre_trigger_samples: pre,
            post_trigger_samples: post,
            trigger_start_sample: start,
        }
    }
    pub fn is_triggered(&self) -> bool {
        self.trigger_start_sample != 0 || self.pre_trigger_samples != 0
    }
    /// Index of the first sample shown on screen.
    pub fn display_start(&self) -> Option<usize> {
        if !self.is_triggered() {
            return None;
        }
        self.trigger_start_sample
            .checked_sub(self.pre_trigger_samples)
    }
    /// Trigger-aligned part of `samples`: `display_samples` values starting
    /// `pre_trigger_samples` before the trigger point, clipped to the buffer.
    pub fn crop<'a>(&self, samples: &'a [f64], display_samples: usize) -> Option<&'a [f64]> {
        let start = self.display_start()?;
        if start >= samples.len() {
            return None;
        }
        let end = start.saturating_add(display_samples).min(samples.len());
        Some(&samples[start..end])
    }
}
