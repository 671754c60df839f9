//! Axis ticks: nice-number tick placement and decimal tick labels.

/// Pick "nice" tick positions covering `[lo, hi]` with at most about `max_ticks` intervals.
///
/// Steps are drawn from `{1, 2, 2.5, 5, 10} × 10^k`.
///
/// ```
/// # use tacs_figures::data::ticks::nice_ticks;
/// let ticks = nice_ticks(0.0, 2.0, 5);
/// assert_eq!(ticks.len(), 5);
/// assert!((ticks[1] - 0.5).abs() < 1e-12);
/// ```
pub fn nice_ticks(lo: f64, hi: f64, max_ticks: usize) -> Vec<f64> {
    if !(lo.is_finite() && hi.is_finite()) || hi <= lo || max_ticks == 0 {
        return Vec::new();
    }
    let step = nice_step(hi - lo, max_ticks);
    let first = (lo / step - 1e-9).ceil() as i64;
    let last = (hi / step + 1e-9).floor() as i64;
    (first..=last)
        .map(|k| {
            let v = k as f64 * step;
            // Snap -0.0 and float dust to clean values.
            if v.abs() < step * 1e-9 {
                0.0
            } else {
                v
            }
        })
        .collect()
}

/// Step between ticks for a span split into roughly `max_ticks` intervals.
pub fn nice_step(span: f64, max_ticks: usize) -> f64 {
    let raw = span / max_ticks.max(1) as f64;
    let magnitude = 10f64.powi(raw.log10().floor() as i32);
    [1.0, 2.0, 2.5, 5.0, 10.0]
        .iter()
        .map(|m| m * magnitude)
        .find(|s| *s >= raw * (1.0 - 1e-9))
        .unwrap_or(10.0 * magnitude)
}

/// Number of decimal places needed to tell ticks `step` apart.
pub fn decimals_for_step(step: f64) -> usize {
    if !step.is_finite() || step <= 0.0 {
        return 0;
    }
    let mut places = (-step.log10().floor()).max(0.0) as usize;
    // 2.5, 0.25, ... need one more digit than their magnitude suggests.
    while places < 12 {
        let scaled = step * 10f64.powi(places as i32);
        if (scaled - scaled.round()).abs() < 1e-6 {
            break;
        }
        places += 1;
    }
    places
}

/// Plain decimal tick-label formatter with a typographic minus sign.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DecimalFormatter {
    /// Fixed number of decimal places, or `None` to derive it from the tick step.
    pub decimal_places: Option<usize>,
    /// Optional unit suffix appended after the number (e.g. `"mV"`).
    pub unit: Option<String>,
}

impl DecimalFormatter {
    /// Format `value` for an axis whose ticks are `step` apart.
    ///
    /// ```
    /// # use tacs_figures::data::ticks::DecimalFormatter;
    /// let f = DecimalFormatter::default();
    /// assert_eq!(f.format(-0.5, 0.5), "\u{2212}0.5");
    /// assert_eq!(f.format(2.0, 1.0), "2");
    /// ```
    pub fn format(&self, value: f64, step: f64) -> String {
        let places = self
            .decimal_places
            .unwrap_or_else(|| decimals_for_step(step));
        let s = format!("{:.*}", places, value.abs());
        let is_zero = s.chars().all(|c| c == '0' || c == '.');
        let signed = if value < 0.0 && !is_zero {
            format!("\u{2212}{s}")
        } else {
            s
        };
        match &self.unit {
            Some(u) => format!("{} {}", signed, u),
            None => signed,
        }
    }
}
