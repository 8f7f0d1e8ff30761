// src/main.rs
use anyhow::Context;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use scope_swtrigger::trigger::{Acquisition, ChannelWaveform, ManualSource};
use scope_swtrigger::{ScopeSettings, TriggerPipeline};
const ACQUISITIONS: usize = 8;
const SIGNAL_HZ: f64 = 440.0;
const AMPLITUDE_V: f64 = 1.0;
const NOISE_V: f64 = 0.05;
// Noisy square wave with a random phase so every acquisition needs aligning.
fn synth_acquisition(rng: &mut StdRng, settings: &ScopeSettings, len: usize) -> Acquisition {
    let samplerate = settings.horizontal.samplerate;
    let phase = rng.gen::<f64>();
    let channels = (0..settings.channels)
        .map(|channel| {
            let samples = (0..len)
                .map(|i| {
                    let cycle = (i as f64 * SIGNAL_HZ / samplerate + phase).fract();
                    let base = if cycle < 0.5 { AMPLITUDE_V } else { -AMPLITUDE_V };
                    base / (channel + 1) as f64 + rng.gen_range(-NOISE_V..NOISE_V)
                })
                .collect();
            ChannelWaveform::new(samples)
        })
        .collect();
    Acquisition::new(channels)
}
fn main() -> anyhow::Result<()> {
    env_logger::init();
    let settings = match std::env::args().nth(1) {
        Some(path) => ScopeSettings::from_json_file(&path)
            .with_context(|| format!("loading scope settings from {path}"))?,
        None => ScopeSettings::default(),
    };
    log::info!(
        "mode {} slope {} source CH{} level {} V, {} s/div at {} S/s",
        settings.trigger.mode,
        settings.trigger.slope,
        settings.trigger.source + 1,
        settings.trigger.level(settings.trigger.source),
        settings.horizontal.timebase,
        settings.horizontal.samplerate
    );
    // Capture twice the screen so the trigger has room on both sides.
    let capture_len = settings.horizontal.display_sample_count().max(1) * 2;
    let mut rng = StdRng::seed_from_u64(0x5eed);
    let acquisitions: Vec<Acquisition> = (0..ACQUISITIONS)
        .map(|_| synth_acquisition(&mut rng, &settings, capture_len))
        .collect();
    let mut pipeline = TriggerPipeline::new(ManualSource::new(acquisitions), settings)?;
    while let Some(frame) = pipeline.pump_once()? {
        let window = frame.window;
        if frame.triggered() {
            log::info!(
                "triggered at sample {} (pre {}, post {}), {} samples on screen",
                window.trigger_start_sample,
                window.pre_trigger_samples,
                window.post_trigger_samples,
                frame.channels.first().map_or(0, ChannelWaveform::len)
            );
        } else {
            log::info!("no trigger, showing raw capture");
        }
    }
    let stats = pipeline.stats();
    log::info!(
        "{} triggered, {} untriggered",
        stats.triggered,
        stats.untriggered
    );
    Ok(())
}
