//! Rendering seam: the drawing primitives a figure needs, and the painter that issues them.
//!
//! The painter never produces output bytes. It walks a [`FigureSpec`](crate::figure::FigureSpec)
//! and calls a [`RenderBackend`]; [`svg::SvgBackend`] is the backend used for export.

pub mod paint;
pub mod svg;

use crate::data::trace_look::{Rgba, TraceLook};
use crate::figure::Rect;

pub use paint::paint;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HAlign {
    Left,
    Center,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VAlign {
    Top,
    Center,
    Baseline,
}

/// How a piece of text is drawn relative to its anchor point.
#[derive(Debug, Clone, PartialEq)]
pub struct TextStyle {
    /// Font size in points.
    pub size: f64,
    pub bold: bool,
    pub color: Rgba,
    pub h_align: HAlign,
    pub v_align: VAlign,
    /// Clockwise rotation in degrees about the anchor.
    pub rotation: f64,
}

impl TextStyle {
    pub fn new(size: f64) -> Self {
        Self {
            size,
            bold: false,
            color: Rgba::BLACK,
            h_align: HAlign::Left,
            v_align: VAlign::Baseline,
            rotation: 0.0,
        }
    }

    pub fn bold(mut self, bold: bool) -> Self {
        self.bold = bold;
        self
    }

    pub fn align(mut self, h_align: HAlign, v_align: VAlign) -> Self {
        self.h_align = h_align;
        self.v_align = v_align;
        self
    }

    pub fn rotated(mut self, degrees: f64) -> Self {
        self.rotation = degrees;
        self
    }
}

/// Drawing primitives in figure points (origin top-left, y down).
pub trait RenderBackend {
    /// Start a new canvas of the given size, discarding anything drawn before.
    fn begin(&mut self, width: f64, height: f64);

    fn rect(&mut self, rect: Rect, fill: Option<Rgba>, stroke: Option<&TraceLook>);

    fn polyline(&mut self, points: &[(f64, f64)], look: &TraceLook);

    fn text(&mut self, text: &str, x: f64, y: f64, style: &TextStyle);

    /// Clip subsequent polylines to `clip`, or stop clipping with `None`.
    fn set_clip(&mut self, clip: Option<Rect>);
}

/// Rough advance width of `text` in points, for layout decisions only.
pub fn estimate_text_width(text: &str, size: f64) -> f64 {
    text.chars().count() as f64 * 0.6 * size
}
