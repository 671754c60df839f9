//! Sampled sinusoids: the single `generate` contract used by every figure.

use std::f64::consts::TAU;

use crate::data::time_range::TimeRange;
use crate::error::{FigureError, Result};

/// A time range paired with one amplitude sample per instant.
#[derive(Debug, Clone, PartialEq)]
pub struct Waveform {
    time: TimeRange,
    samples: Vec<f64>,
    /// Amplitude scale in mV.
    pub amplitude_mv: f64,
    /// Frequency in Hz.
    pub frequency_hz: f64,
    /// Phase offset in radians, applied inside the sine argument.
    pub phase_rad: f64,
}

impl Waveform {
    /// Pair arbitrary samples with a time range.
    ///
    /// Fails when the lengths differ or a sample is not finite.
    pub fn from_samples(
        time: TimeRange,
        samples: Vec<f64>,
        amplitude_mv: f64,
        frequency_hz: f64,
        phase_rad: f64,
    ) -> Result<Self> {
        if samples.len() != time.len() {
            return Err(FigureError::InvalidParameter(format!(
                "{} samples for {} time instants",
                samples.len(),
                time.len()
            )));
        }
        if samples.iter().any(|s| !s.is_finite()) {
            return Err(FigureError::InvalidParameter(
                "waveform samples must be finite".to_string(),
            ));
        }
        Ok(Self {
            time,
            samples,
            amplitude_mv,
            frequency_hz,
            phase_rad,
        })
    }

    pub fn time(&self) -> &TimeRange {
        &self.time
    }

    pub fn samples(&self) -> &[f64] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// `(t, value)` pairs in time order.
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.time.iter().zip(self.samples.iter().copied())
    }

    pub fn min(&self) -> f64 {
        self.samples.iter().copied().fold(f64::INFINITY, f64::min)
    }

    pub fn max(&self) -> f64 {
        self.samples.iter().copied().fold(f64::NEG_INFINITY, f64::max)
    }
}

/// `amplitude_mv * sin(2π · frequency_hz · t + phase_rad)` sampled at every instant of `time`.
///
/// Phase shifts the wave horizontally; amplitude scales it vertically. A negative
/// amplitude is a valid inversion. Negative or non-finite frequencies and
/// non-finite amplitude or phase are rejected.
///
/// ```
/// # use tacs_figures::data::time_range::TimeRange;
/// # use tacs_figures::data::waveform::generate;
/// let t = TimeRange::from_samples(vec![0.0, 0.0625, 0.125, 0.1875]).unwrap();
/// let w = generate(1.0, 4.0, &t, 0.0).unwrap();
/// let expected = [0.0, 1.0, 0.0, -1.0];
/// assert!(w.samples().iter().zip(expected).all(|(s, e)| (s - e).abs() < 1e-9));
/// ```
pub fn generate(
    amplitude_mv: f64,
    frequency_hz: f64,
    time: &TimeRange,
    phase_rad: f64,
) -> Result<Waveform> {
    if !amplitude_mv.is_finite() {
        return Err(FigureError::InvalidParameter(format!(
            "amplitude must be finite, got {amplitude_mv}"
        )));
    }
    if !frequency_hz.is_finite() || frequency_hz < 0.0 {
        return Err(FigureError::InvalidParameter(format!(
            "frequency must be finite and non-negative, got {frequency_hz}"
        )));
    }
    if !phase_rad.is_finite() {
        return Err(FigureError::InvalidParameter(format!(
            "phase must be finite, got {phase_rad}"
        )));
    }
    let samples = time
        .iter()
        .map(|t| amplitude_mv * (TAU * frequency_hz * t + phase_rad).sin())
        .collect();
    Ok(Waveform {
        time: time.clone(),
        samples,
        amplitude_mv,
        frequency_hz,
        phase_rad,
    })
}
