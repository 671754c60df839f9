//! TraceLook: visual styling for traces and marker lines.

use serde::{Deserialize, Serialize};

/// Straight RGBA colour, components in `0..=255`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgba(pub u8, pub u8, pub u8, pub u8);

impl Rgba {
    pub const BLACK: Rgba = Rgba(0, 0, 0, 255);
    pub const WHITE: Rgba = Rgba(255, 255, 255, 255);
    pub const RED: Rgba = Rgba(255, 0, 0, 255);
    pub const BLUE: Rgba = Rgba(0, 0, 255, 255);
    pub const GRAY: Rgba = Rgba(127, 127, 127, 255);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Rgba(r, g, b, 255)
    }

    /// `#rrggbb` hex string (alpha is emitted separately as opacity).
    pub fn hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }

    pub fn opacity(&self) -> f64 {
        f64::from(self.3) / 255.0
    }
}

/// Stroke pattern of a line.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum LineStyle {
    Solid,
    Dashed,
    Dotted,
    DashDot,
}

impl LineStyle {
    /// On/off lengths in points for a stroke of the given width, empty for solid lines.
    pub fn dash_pattern(&self, width: f64) -> Vec<f64> {
        let unit: &[f64] = match self {
            LineStyle::Solid => &[],
            LineStyle::Dashed => &[3.7, 1.6],
            LineStyle::Dotted => &[1.0, 1.65],
            LineStyle::DashDot => &[6.4, 1.6, 1.0, 1.6],
        };
        unit.iter().map(|u| u * width).collect()
    }
}

/// The visual presentation of a trace (color, width, line style).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TraceLook {
    pub color: Rgba,
    pub width: f64,
    pub style: LineStyle,
}

impl Default for TraceLook {
    fn default() -> Self {
        Self {
            color: Rgba::GRAY,
            width: 1.5,
            style: LineStyle::Solid,
        }
    }
}

impl TraceLook {
    /// Create a new TraceLook with a color allocated based on the trace index.
    pub fn new(index: usize) -> Self {
        Self {
            color: Self::alloc_color(index),
            ..Default::default()
        }
    }

    /// Solid line in an explicit colour.
    pub fn colored(color: Rgba) -> Self {
        Self {
            color,
            ..Default::default()
        }
    }

    pub fn with_style(mut self, style: LineStyle) -> Self {
        self.style = style;
        self
    }

    pub fn with_width(mut self, width: f64) -> Self {
        self.width = width;
        self
    }

    /// Allocate a distinct color for the given trace index.
    pub fn alloc_color(index: usize) -> Rgba {
        const PALETTE: [Rgba; 10] = [
            Rgba::rgb(31, 119, 180),
            Rgba::rgb(255, 127, 14),
            Rgba::rgb(44, 160, 44),
            Rgba::rgb(214, 39, 40),
            Rgba::rgb(148, 103, 189),
            Rgba::rgb(140, 86, 75),
            Rgba::rgb(227, 119, 194),
            Rgba::rgb(127, 127, 127),
            Rgba::rgb(188, 189, 34),
            Rgba::rgb(23, 190, 207),
        ];
        PALETTE[index % PALETTE.len()]
    }
}
