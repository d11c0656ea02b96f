//! Microphone level metering.
//!
//! Works on time-domain sample frames in `-1.0..=1.0` as produced by a Web
//! Audio `AnalyserNode`.

/// Floor for every dBFS value; silence reports this instead of -inf.
pub const MIN_DBFS: f64 = -100.0;

pub fn rms(samples: &[f32]) -> f64 {
    if samples.is_empty() {
        return 0.0;
    }
    let sum: f64 = samples.iter().map(|&s| f64::from(s) * f64::from(s)).sum();
    (sum / samples.len() as f64).sqrt()
}

pub fn peak(samples: &[f32]) -> f64 {
    samples
        .iter()
        .map(|&s| f64::from(s).abs())
        .fold(0.0, f64::max)
}

/// Amplitude (full scale = 1.0) to decibels relative to full scale.
pub fn to_dbfs(amplitude: f64) -> f64 {
    if amplitude <= 0.0 {
        return MIN_DBFS;
    }
    (20.0 * amplitude.log10()).max(MIN_DBFS)
}

/// Position of a dBFS value on a `0.0..=1.0` meter.
pub fn meter_fraction(dbfs: f64) -> f64 {
    ((dbfs - MIN_DBFS) / -MIN_DBFS).clamp(0.0, 1.0)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Level {
    pub rms_db: f64,
    pub peak_db: f64,
    /// Highest recent peak, decaying over time.
    pub hold_db: f64,
    pub clipping: bool,
}

impl Default for Level {
    fn default() -> Self {
        Self {
            rms_db: MIN_DBFS,
            peak_db: MIN_DBFS,
            hold_db: MIN_DBFS,
            clipping: false,
        }
    }
}

/// Level meter with peak hold.
#[derive(Debug, Clone)]
pub struct LevelMeter {
    hold_db: f64,
    decay_db: f64,
}

impl LevelMeter {
    /// `decay_db` is how far the held peak falls per update.
    pub fn new(decay_db: f64) -> Self {
        Self {
            hold_db: MIN_DBFS,
            decay_db: decay_db.abs(),
        }
    }

    pub fn update(&mut self, samples: &[f32]) -> Level {
        let peak_amplitude = peak(samples);
        let peak_db = to_dbfs(peak_amplitude);
        self.hold_db = (self.hold_db - self.decay_db).max(peak_db).max(MIN_DBFS);

        Level {
            rms_db: to_dbfs(rms(samples)),
            peak_db,
            hold_db: self.hold_db,
            clipping: peak_amplitude >= 1.0,
        }
    }

    pub fn reset(&mut self) {
        self.hold_db = MIN_DBFS;
    }
}
