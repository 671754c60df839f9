//! The three article figures.

use std::f64::consts::FRAC_PI_2;
use std::str::FromStr;

use crate::composer::{Layout, Orientation, PanelRef};
use crate::config::FigureConfig;
use crate::data::modulation::amplitude_modulate;
use crate::data::time_range::TimeRange;
use crate::data::trace_look::{LineStyle, Rgba, TraceLook};
use crate::data::waveform::generate;
use crate::error::Result;
use crate::figure::FigureSpec;

const TIME_LABEL: &str = "time (sec)";
const AMPLITUDE_LABEL: &str = "Amplitude (mV)";
const ONSET_LABEL: &str = "Onset of tACS";
/// Samples across the one-second cross-frequency-coupling window.
const AM_SAMPLES: usize = 500;

/// Which figure to build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FigureKind {
    /// Amplitude, frequency and phase effects of stimulation.
    TacsEffects,
    /// Out-of-phase versus in-phase 4 Hz waves.
    Phase,
    /// Theta-gamma amplitude modulation.
    Am,
}

impl FigureKind {
    pub const ALL: [FigureKind; 3] = [FigureKind::TacsEffects, FigureKind::Phase, FigureKind::Am];

    pub fn name(&self) -> &'static str {
        match self {
            FigureKind::TacsEffects => "figure-output",
            FigureKind::Phase => "phase",
            FigureKind::Am => "am",
        }
    }

    pub fn file_name(&self) -> String {
        format!("{}.png", self.name())
    }

    pub fn build(&self, cfg: &FigureConfig) -> Result<FigureSpec> {
        match self {
            FigureKind::TacsEffects => tacs_effects(cfg.time_resolution),
            FigureKind::Phase => phase(cfg.time_resolution),
            FigureKind::Am => am(),
        }
    }
}

impl std::fmt::Display for FigureKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FigureKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        FigureKind::ALL
            .into_iter()
            .find(|k| k.name() == s)
            .ok_or_else(|| {
                format!("unknown figure '{s}' (expected figure-output, phase or am)")
            })
    }
}

/// 2×2 "Effects of tACS": amplitude (A), frequency (B) and phase (C) changes at
/// stimulation onset, top-right slot left free for the legend.
pub fn tacs_effects(step: f64) -> Result<FigureSpec> {
    let before = TimeRange::arange(0.0, 1.0, step)?;
    let after = TimeRange::arange(1.0, 2.0, step)?;

    let a = PanelRef::new(0, 0);
    let legend_slot = PanelRef::new(0, 1);
    let b = PanelRef::new(1, 0);
    let c = PanelRef::new(1, 1);

    let mut layout = Layout::compose((2, 2))?;
    layout.hide(legend_slot)?;

    layout.add_cycled_trace(a, generate(1.0, 4.0, &before, 0.0)?)?;
    layout.add_cycled_trace(a, generate(2.0, 4.0, &after, 0.0)?)?;
    layout.set_title(a, "A", true, 0.1)?;

    layout.add_cycled_trace(b, generate(1.0, 4.0, &before, 0.0)?)?;
    layout.add_cycled_trace(b, generate(1.0, 6.0, &after, 0.0)?)?;
    layout.set_title(b, "B", true, 0.1)?;
    layout.set_y_limits(b, (-1.0, 2.0))?;
    layout.annotate(b, "4 Hz", (0.1, 1.5), 12.0)?;
    layout.annotate(b, "6 Hz", (1.25, 1.5), 12.0)?;

    layout.add_cycled_trace(c, generate(1.0, 4.0, &before, 0.0)?)?;
    layout.add_cycled_trace(c, generate(1.0, 4.0, &before, FRAC_PI_2)?)?;
    layout.set_title(c, "C", true, 0.1)?;
    layout.add_trace(c, generate(1.0, 4.0, &after, 0.0)?, TraceLook::colored(Rgba::BLUE))?;
    layout.add_trace(
        c,
        generate(1.0, 4.0, &after, 0.0)?,
        TraceLook::colored(Rgba::BLACK).with_style(LineStyle::Dotted),
    )?;

    layout.set_axis_labels_all(TIME_LABEL, AMPLITUDE_LABEL);

    let onset = TraceLook::colored(Rgba::RED).with_style(LineStyle::DashDot);
    for at in [a, b, c] {
        layout.add_marker(at, Orientation::Vertical, 1.0, onset.clone(), Some(ONSET_LABEL))?;
    }
    layout.set_legend_source(a)?;

    Ok(FigureSpec::new(layout)
        .with_suptitle("Effects of tACS", 0.98)
        .with_hspace(0.3)
        .with_legend_anchor(0.57, 0.8))
}

/// 2×1: two 4 Hz waves 8 rad out of phase, then in phase (0.9 mV so both stay visible).
pub fn phase(step: f64) -> Result<FigureSpec> {
    let t = TimeRange::arange(0.0, 1.0, step)?;
    let top = PanelRef::new(0, 0);
    let bottom = PanelRef::new(1, 0);

    let mut layout = Layout::compose((2, 1))?;
    layout.add_cycled_trace(top, generate(1.0, 4.0, &t, 0.0)?)?;
    layout.add_cycled_trace(top, generate(1.0, 4.0, &t, 8.0)?)?;
    layout.add_cycled_trace(bottom, generate(1.0, 4.0, &t, 0.0)?)?;
    layout.add_cycled_trace(bottom, generate(0.9, 4.0, &t, 0.0)?)?;
    layout.set_axis_labels(bottom, Some(TIME_LABEL), Some(AMPLITUDE_LABEL))?;

    Ok(FigureSpec::new(layout))
}

/// 1×1: a 6 Hz theta oscillation and the 40 Hz gamma carrier whose envelope it modulates.
pub fn am() -> Result<FigureSpec> {
    let t = TimeRange::linspace(0.0, 1.0, AM_SAMPLES)?;
    let panel = PanelRef::new(0, 0);

    let mut layout = Layout::compose((1, 1))?;
    // Cosine theta: sine shifted a quarter cycle.
    layout.add_cycled_trace(panel, generate(1.0, 6.0, &t, FRAC_PI_2)?)?;
    layout.add_cycled_trace(panel, amplitude_modulate(40.0, 6.0, 0.8, &t, 1.0)?)?;

    Ok(FigureSpec::new(layout))
}
