//! Amplitude-modulated cross-frequency coupling (theta envelope on a gamma carrier).

use std::f64::consts::TAU;

use log::warn;

use crate::data::time_range::TimeRange;
use crate::data::waveform::Waveform;
use crate::error::{FigureError, Result};

fn check_frequency(name: &str, hz: f64) -> Result<()> {
    if !hz.is_finite() || hz < 0.0 {
        return Err(FigureError::InvalidParameter(format!(
            "{name} frequency must be finite and non-negative, got {hz}"
        )));
    }
    Ok(())
}

fn check_finite(name: &str, value: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(FigureError::InvalidParameter(format!(
            "{name} must be finite, got {value}"
        )));
    }
    Ok(())
}

/// Envelope `1 + mod_index · cos(2π · modulator_hz · t)` of the modulated carrier.
///
/// Above 1 the envelope dips below zero; below 0 the modulator is inverted.
/// Any index outside `[0, 1]` is passed through unchanged with a warning;
/// keeping it physical is the caller's job.
pub fn envelope(modulator_hz: f64, mod_index: f64, time: &TimeRange) -> Result<Vec<f64>> {
    check_frequency("modulator", modulator_hz)?;
    check_finite("modulation index", mod_index)?;
    if !(0.0..=1.0).contains(&mod_index) {
        warn!("modulation index {mod_index} is outside [0, 1]");
    }
    Ok(time
        .iter()
        .map(|t| 1.0 + mod_index * (TAU * modulator_hz * t).cos())
        .collect())
}

/// `carrier_amplitude / 2 · (1 + mod_index · cos(2π · modulator_hz · t)) · cos(2π · carrier_hz · t)`.
///
/// The returned waveform records the carrier amplitude and frequency with zero phase.
///
/// ```
/// # use tacs_figures::data::time_range::TimeRange;
/// # use tacs_figures::data::modulation::amplitude_modulate;
/// let t = TimeRange::from_samples(vec![0.0]).unwrap();
/// let am = amplitude_modulate(40.0, 6.0, 0.8, &t, 1.0).unwrap();
/// assert!((am.samples()[0] - 0.9).abs() < 1e-12);
/// ```
pub fn amplitude_modulate(
    carrier_hz: f64,
    modulator_hz: f64,
    mod_index: f64,
    time: &TimeRange,
    carrier_amplitude: f64,
) -> Result<Waveform> {
    check_frequency("carrier", carrier_hz)?;
    check_finite("carrier amplitude", carrier_amplitude)?;
    let env = envelope(modulator_hz, mod_index, time)?;
    let half = carrier_amplitude / 2.0;
    let samples = time
        .iter()
        .zip(env)
        .map(|(t, e)| half * e * (TAU * carrier_hz * t).cos())
        .collect();
    Waveform::from_samples(time.clone(), samples, carrier_amplitude, carrier_hz, 0.0)
}
