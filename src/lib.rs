//! tacs-figures crate root: module wiring and re-exports.
//!
//! Builds the three figures of a review article on transcranial alternating
//! current stimulation:
//! - `data`: time ranges, sinusoid generation, amplitude modulation, trace styling, ticks
//! - `composer`: panel grid with label suppression, markers and annotations
//! - `legend`: one deduplicated legend from a designated panel
//! - `figure`: figure-level title, spacing, size and legend placement
//! - `render`: drawing backend seam and the SVG backend
//! - `export`: PNG rasterization and atomic file writes
//! - `figures`: the three fixed figures
//! - `config`: run configuration

pub mod composer;
pub mod config;
pub mod data;
pub mod error;
pub mod export;
pub mod figure;
pub mod figures;
pub mod legend;
pub mod render;

// Public re-exports for a compact external API
pub use composer::{Layout, LegendEntry, Orientation, Panel, PanelRef};
pub use config::FigureConfig;
pub use data::modulation::amplitude_modulate;
pub use data::time_range::TimeRange;
pub use data::trace_look::{LineStyle, Rgba, TraceLook};
pub use data::waveform::{generate, Waveform};
pub use error::FigureError;
pub use export::Exporter;
pub use figure::FigureSpec;
pub use figures::FigureKind;
pub use legend::consolidate;
pub use render::RenderBackend;
