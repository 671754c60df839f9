//! Sample instants shared by every waveform.

use crate::error::{FigureError, Result};

/// Upper bound on the number of instants a constructed range may hold.
pub const MAX_SAMPLES: usize = 10_000_000;

fn check_count(count: f64) -> Result<usize> {
    if !count.is_finite() || count > MAX_SAMPLES as f64 {
        return Err(FigureError::InvalidParameter(format!(
            "time range would hold {count} samples, limit is {MAX_SAMPLES}"
        )));
    }
    Ok(count as usize)
}

/// Ordered, strictly increasing, non-empty sequence of sample instants in seconds.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeRange {
    instants: Vec<f64>,
}

impl TimeRange {
    /// Half-open range `[start, stop)` with a fixed step.
    ///
    /// The sample count is `ceil((stop - start) / step)` and sample `i` is
    /// `start + i * step`, so `arange(0.0, 1.0, 0.01)` yields 100 instants.
    /// Counts above [`MAX_SAMPLES`] and steps that vanish next to `start`
    /// are rejected.
    ///
    /// ```
    /// # use tacs_figures::data::time_range::TimeRange;
    /// let t = TimeRange::arange(0.0, 1.0, 0.25).unwrap();
    /// assert_eq!(t.as_slice(), &[0.0, 0.25, 0.5, 0.75]);
    /// ```
    pub fn arange(start: f64, stop: f64, step: f64) -> Result<Self> {
        if !(start.is_finite() && stop.is_finite() && step.is_finite()) {
            return Err(FigureError::InvalidParameter(format!(
                "time range bounds must be finite (start={start}, stop={stop}, step={step})"
            )));
        }
        if step <= 0.0 {
            return Err(FigureError::InvalidParameter(format!(
                "time step must be positive, got {step}"
            )));
        }
        let count = ((stop - start) / step).ceil();
        if count < 1.0 {
            return Err(FigureError::InvalidParameter(format!(
                "empty time range [{start}, {stop}) with step {step}"
            )));
        }
        let instants = (0..check_count(count)?)
            .map(|i| start + i as f64 * step)
            .collect();
        Self::from_samples(instants)
    }

    /// `count` evenly spaced instants from `start` to `stop` inclusive.
    pub fn linspace(start: f64, stop: f64, count: usize) -> Result<Self> {
        if !(start.is_finite() && stop.is_finite()) {
            return Err(FigureError::InvalidParameter(format!(
                "time range bounds must be finite (start={start}, stop={stop})"
            )));
        }
        match count {
            0 => Err(FigureError::InvalidParameter(
                "linspace needs at least one sample".to_string(),
            )),
            1 => Ok(Self {
                instants: vec![start],
            }),
            _ => {
                if stop <= start {
                    return Err(FigureError::InvalidParameter(format!(
                        "linspace stop {stop} must exceed start {start}"
                    )));
                }
                check_count(count as f64)?;
                let step = (stop - start) / (count - 1) as f64;
                let mut instants: Vec<f64> =
                    (0..count).map(|i| start + i as f64 * step).collect();
                instants[count - 1] = stop;
                Self::from_samples(instants)
            }
        }
    }

    /// Wrap explicit instants, checking the ordering invariant.
    pub fn from_samples(instants: Vec<f64>) -> Result<Self> {
        if instants.is_empty() {
            return Err(FigureError::InvalidParameter(
                "time range must not be empty".to_string(),
            ));
        }
        if let Some(bad) = instants.iter().find(|t| !t.is_finite()) {
            return Err(FigureError::InvalidParameter(format!(
                "time instant {bad} is not finite"
            )));
        }
        if let Some(w) = instants.windows(2).find(|w| w[1] <= w[0]) {
            return Err(FigureError::InvalidParameter(format!(
                "time instants must be strictly increasing ({} then {})",
                w[0], w[1]
            )));
        }
        Ok(Self { instants })
    }

    pub fn len(&self) -> usize {
        self.instants.len()
    }

    /// Always false: a `TimeRange` is never empty.
    pub fn is_empty(&self) -> bool {
        self.instants.is_empty()
    }

    pub fn start(&self) -> f64 {
        self.instants[0]
    }

    pub fn end(&self) -> f64 {
        self.instants[self.instants.len() - 1]
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.instants
    }

    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.instants.iter().copied()
    }
}
