//! FigureSpec: a composed layout plus everything around it (title, spacing, legend, size).

use crate::composer::{Layout, PanelRef};
use crate::error::{FigureError, Result};

/// Points per inch of the figure coordinate system.
pub const POINTS_PER_INCH: f64 = 72.0;

/// Axis-aligned rectangle in figure points, origin top-left, y growing down.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl Rect {
    pub fn right(&self) -> f64 {
        self.x + self.w
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.h
    }
}

/// Subplot area and spacing as fractions.
///
/// `left`/`right`/`bottom`/`top` are figure fractions measured from the
/// bottom-left corner; `wspace`/`hspace` are fractions of the average panel
/// width/height.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SubplotParams {
    pub left: f64,
    pub right: f64,
    pub bottom: f64,
    pub top: f64,
    pub wspace: f64,
    pub hspace: f64,
}

impl Default for SubplotParams {
    fn default() -> Self {
        Self {
            left: 0.125,
            right: 0.9,
            bottom: 0.11,
            top: 0.88,
            wspace: 0.2,
            hspace: 0.2,
        }
    }
}

/// Figure-level title.
#[derive(Debug, Clone, PartialEq)]
pub struct Suptitle {
    pub text: String,
    /// Vertical position of the title's top edge as a figure fraction.
    pub y: f64,
}

/// Where the figure legend goes, resolved to figure points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LegendPlacement {
    /// Lower-left corner of the legend box.
    LowerLeft(f64, f64),
    /// Upper-left corner of the legend box.
    UpperLeft(f64, f64),
    /// Upper-right corner of the legend box.
    UpperRight(f64, f64),
}

/// A complete, exportable figure.
#[derive(Debug, Clone)]
pub struct FigureSpec {
    pub layout: Layout,
    pub suptitle: Option<Suptitle>,
    pub spacing: SubplotParams,
    /// Lower-left corner of the legend in normalized figure coordinates (y up).
    pub legend_anchor: Option<(f64, f64)>,
    /// Width and height in inches.
    pub size_in: (f64, f64),
}

impl FigureSpec {
    pub fn new(layout: Layout) -> Self {
        Self {
            layout,
            suptitle: None,
            spacing: SubplotParams::default(),
            legend_anchor: None,
            size_in: (6.4, 4.8),
        }
    }

    pub fn with_suptitle(mut self, text: impl Into<String>, y: f64) -> Self {
        self.suptitle = Some(Suptitle {
            text: text.into(),
            y,
        });
        self
    }

    pub fn with_hspace(mut self, hspace: f64) -> Self {
        self.spacing.hspace = hspace;
        self
    }

    pub fn with_legend_anchor(mut self, x: f64, y: f64) -> Self {
        self.legend_anchor = Some((x, y));
        self
    }

    /// Reject geometry that cannot be drawn.
    pub fn validate(&self) -> Result<()> {
        let (w, h) = self.size_in;
        if !(w.is_finite() && h.is_finite() && w > 0.0 && h > 0.0) {
            return Err(FigureError::InvalidParameter(format!(
                "figure size {w}x{h} in must be positive"
            )));
        }
        let s = &self.spacing;
        let fractions = [s.left, s.right, s.bottom, s.top];
        if fractions.iter().any(|f| !(0.0..=1.0).contains(f))
            || s.left >= s.right
            || s.bottom >= s.top
        {
            return Err(FigureError::InvalidParameter(format!(
                "subplot area {s:?} must lie inside the figure"
            )));
        }
        if !(s.wspace >= 0.0 && s.hspace >= 0.0) {
            return Err(FigureError::InvalidParameter(format!(
                "panel spacing ({}, {}) must be non-negative",
                s.wspace, s.hspace
            )));
        }
        Ok(())
    }

    /// Figure size in points.
    pub fn size_pt(&self) -> (f64, f64) {
        (
            self.size_in.0 * POINTS_PER_INCH,
            self.size_in.1 * POINTS_PER_INCH,
        )
    }

    /// Raster size in pixels at `dpi`.
    pub fn pixel_size(&self, dpi: u32) -> (u32, u32) {
        let dpi = f64::from(dpi);
        (
            (self.size_in.0 * dpi).round() as u32,
            (self.size_in.1 * dpi).round() as u32,
        )
    }

    /// Axes rectangle of a grid slot.
    pub fn panel_rect(&self, at: PanelRef) -> Rect {
        let (fw, fh) = self.size_pt();
        let (rows, cols) = self.layout.shape();
        let s = &self.spacing;

        let total_w = (s.right - s.left) * fw;
        let cell_w = total_w / (cols as f64 + s.wspace * (cols as f64 - 1.0));
        let sep_w = s.wspace * cell_w;

        let total_h = (s.top - s.bottom) * fh;
        let cell_h = total_h / (rows as f64 + s.hspace * (rows as f64 - 1.0));
        let sep_h = s.hspace * cell_h;

        Rect {
            x: s.left * fw + at.col as f64 * (cell_w + sep_w),
            y: (1.0 - s.top) * fh + at.row as f64 * (cell_h + sep_h),
            w: cell_w,
            h: cell_h,
        }
    }

    /// Legend position: explicit anchor, else the first hidden slot, else the
    /// top-right corner of the subplot area.
    pub fn legend_placement(&self) -> LegendPlacement {
        let (fw, fh) = self.size_pt();
        if let Some((x, y)) = self.legend_anchor {
            return LegendPlacement::LowerLeft(x * fw, (1.0 - y) * fh);
        }
        if let Some(slot) = self.layout.hidden_slots().next() {
            let r = self.panel_rect(slot);
            return LegendPlacement::UpperLeft(r.x, r.y);
        }
        LegendPlacement::UpperRight(self.spacing.right * fw, (1.0 - self.spacing.top) * fh)
    }
}
