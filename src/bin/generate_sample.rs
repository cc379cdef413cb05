use std::f64::consts::PI;
use std::path::Path;

use anyhow::{Context, Result};
use capture_plot::config;

const SAMPLE_RATE: f64 = 48_000.0;
const WINDOW: usize = 480;
const FRAMES: usize = 40;

/// (frequency Hz, amplitude) of the synthetic tones.
const TONES: [(f64, f64); 2] = [(1_000.0, 0.6), (3_300.0, 0.3)];
const NOISE_LEVEL: f64 = 0.05;

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Box-Muller transform for normal distribution
    fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.next_f64().max(1e-15);
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * PI * u2).cos();
        mean + std_dev * z
    }
}

fn generate_signal(len: usize, rng: &mut SimpleRng) -> Vec<f64> {
    (0..len)
        .map(|n| {
            let t = n as f64 / SAMPLE_RATE;
            let tones: f64 = TONES
                .iter()
                .map(|&(freq, amp)| amp * (2.0 * PI * freq * t).sin())
                .sum();
            tones + rng.gauss(0.0, NOISE_LEVEL)
        })
        .collect()
}

/// One-sided amplitude spectrum of a frame: `|X[k]| * 2 / N` for `k < N / 2`.
fn amplitude_spectrum(frame: &[f64]) -> Vec<f64> {
    let n = frame.len();
    (0..n / 2)
        .map(|k| {
            let (re, im) = frame.iter().enumerate().fold((0.0, 0.0), |(re, im), (i, &x)| {
                let phase = 2.0 * PI * (k * i) as f64 / n as f64;
                (re + x * phase.cos(), im - x * phase.sin())
            });
            re.hypot(im) * 2.0 / n as f64
        })
        .collect()
}

fn bin_frequencies() -> Vec<String> {
    (0..WINDOW / 2)
        .map(|i| (i as f64 * SAMPLE_RATE / WINDOW as f64).to_string())
        .collect()
}

fn write_rows(path: &Path, header: &[String], rows: &[Vec<f64>]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("creating {}", path.display()))?;
    writer.write_record(header)?;
    for row in rows {
        writer.write_record(row.iter().map(|v| v.to_string()))?;
    }
    writer.flush()?;
    Ok(())
}

fn write_samples(path: &Path, samples: &[f64]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("creating {}", path.display()))?;
    for sample in samples {
        writer.write_record([sample.to_string()])?;
    }
    writer.flush()?;
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();

    std::fs::create_dir_all(config::BUILD_DIR)
        .with_context(|| format!("creating {}", config::BUILD_DIR))?;

    let mut rng = SimpleRng::new(42);
    let signal = generate_signal(WINDOW * FRAMES, &mut rng);

    let bins: Vec<Vec<f64>> = signal.chunks(WINDOW).map(amplitude_spectrum).collect();
    let dbs: Vec<Vec<f64>> = bins
        .iter()
        .map(|frame| frame.iter().map(|amp| 20.0 * amp.log10()).collect())
        .collect();
    let header = bin_frequencies();

    write_samples(Path::new(config::LEFT_CHANNEL_CSV_PATH), &signal)?;
    write_rows(Path::new(config::BIN_CSV_PATH), &header, &bins)?;
    write_rows(Path::new(config::DB_CSV_PATH), &header, &dbs)?;

    log::info!(
        "Wrote {} samples and {} frames x {} bins to {}",
        signal.len(),
        bins.len(),
        header.len(),
        config::BUILD_DIR
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pure_tone_peaks_at_its_bin() {
        // 1 kHz sits exactly on bin 10 with a 480-sample window at 48 kHz.
        let frame: Vec<f64> = (0..WINDOW)
            .map(|n| 0.5 * (2.0 * PI * 1_000.0 * n as f64 / SAMPLE_RATE).sin())
            .collect();
        let spectrum = amplitude_spectrum(&frame);

        assert_eq!(spectrum.len(), WINDOW / 2);
        assert!((spectrum[10] - 0.5).abs() < 1e-9);
        assert!(spectrum[20] < 1e-9);
    }

    #[test]
    fn header_lists_bin_frequencies() {
        let header = bin_frequencies();
        assert_eq!(header.len(), 240);
        assert_eq!(header[0], "0");
        assert_eq!(header[3], "300");
    }

    #[test]
    fn signal_is_deterministic() {
        let a = generate_signal(64, &mut SimpleRng::new(7));
        let b = generate_signal(64, &mut SimpleRng::new(7));
        assert_eq!(a, b);
    }
}
