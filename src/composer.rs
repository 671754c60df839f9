//! Panel composer: a grid of panels, their traces, titles, markers and annotations.
//!
//! A [`Layout`] owns every [`Panel`] of one figure. All mutation goes through
//! `Layout` methods addressed by a [`PanelRef`], which reject hidden or
//! out-of-range slots with [`FigureError::Layout`].
//!
//! Axis labels are suppressed structurally: a panel shows its y label only when
//! it is the first visible panel of its row, and its x label only when it is the
//! last visible panel of its column. Hidden panels never count.
//! Unlike matplotlib's `label_outer`, which keys on grid position alone, a
//! hidden leading slot moves the y label to the next visible panel in the row.

use log::debug;

use crate::data::trace_look::TraceLook;
use crate::data::waveform::Waveform;
use crate::error::{FigureError, Result};

/// Address of one grid slot, row 0 at the top.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PanelRef {
    pub row: usize,
    pub col: usize,
}

impl PanelRef {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl std::fmt::Display for PanelRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}]", self.row, self.col)
    }
}

/// One plotted waveform with its style and optional legend label.
#[derive(Debug, Clone)]
pub struct Trace {
    pub waveform: Waveform,
    pub look: TraceLook,
    pub label: Option<String>,
}

/// Panel title, placed above the axes at a horizontal axes fraction.
#[derive(Debug, Clone, PartialEq)]
pub struct PanelTitle {
    pub text: String,
    pub bold: bool,
    /// Horizontal centre of the title as a fraction of the axes width.
    pub x_offset: f64,
}

/// Free text placed at data coordinates (left/baseline anchored).
#[derive(Debug, Clone, PartialEq)]
pub struct Annotation {
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub font_size: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Line at a fixed x spanning the full panel height.
    Vertical,
    /// Line at a fixed y spanning the full panel width.
    Horizontal,
}

/// Reference line such as "onset of stimulation".
#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    pub orientation: Orientation,
    pub position: f64,
    pub look: TraceLook,
    pub label: Option<String>,
}

/// A handle/label pair the legend can show.
#[derive(Debug, Clone, PartialEq)]
pub struct LegendEntry {
    pub look: TraceLook,
    pub label: String,
}

/// One plotting region.
#[derive(Debug, Clone, Default)]
pub struct Panel {
    pub title: Option<PanelTitle>,
    pub x_label: Option<String>,
    pub y_label: Option<String>,
    pub y_limits: Option<(f64, f64)>,
    pub traces: Vec<Trace>,
    pub annotations: Vec<Annotation>,
    pub markers: Vec<Marker>,
    /// Labeled traces and markers in the order they were added.
    legend_entries: Vec<LegendEntry>,
    hidden: bool,
}

impl Panel {
    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    pub fn legend_entries(&self) -> &[LegendEntry] {
        &self.legend_entries
    }

    fn has_content(&self) -> bool {
        !self.traces.is_empty()
            || !self.markers.is_empty()
            || !self.annotations.is_empty()
            || self.title.is_some()
    }

    /// Data limits over traces, or `None` for an empty panel.
    pub fn data_x_range(&self) -> Option<(f64, f64)> {
        self.traces.iter().fold(None, |acc, tr| {
            let (lo, hi) = (tr.waveform.time().start(), tr.waveform.time().end());
            Some(match acc {
                None => (lo, hi),
                Some((a, b)) => (f64::min(a, lo), f64::max(b, hi)),
            })
        })
    }

    pub fn data_y_range(&self) -> Option<(f64, f64)> {
        self.traces.iter().fold(None, |acc, tr| {
            let (lo, hi) = (tr.waveform.min(), tr.waveform.max());
            Some(match acc {
                None => (lo, hi),
                Some((a, b)) => (f64::min(a, lo), f64::max(b, hi)),
            })
        })
    }
}

/// Rows × columns grid of panel slots.
#[derive(Debug, Clone)]
pub struct Layout {
    rows: usize,
    cols: usize,
    panels: Vec<Panel>,
    legend_source: Option<PanelRef>,
}

impl Layout {
    /// Create a grid of empty, visible panels.
    pub fn compose((rows, cols): (usize, usize)) -> Result<Self> {
        if rows == 0 || cols == 0 {
            return Err(FigureError::Layout(format!(
                "layout needs at least one row and column, got {rows}x{cols}"
            )));
        }
        debug!("composing {rows}x{cols} layout");
        Ok(Self {
            rows,
            cols,
            panels: vec![Panel::default(); rows * cols],
            legend_source: None,
        })
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    fn index(&self, at: PanelRef) -> Result<usize> {
        if at.row >= self.rows || at.col >= self.cols {
            return Err(FigureError::Layout(format!(
                "panel {at} is outside the {}x{} grid",
                self.rows, self.cols
            )));
        }
        Ok(at.row * self.cols + at.col)
    }

    /// Read-only access to any slot, hidden or not.
    pub fn panel(&self, at: PanelRef) -> Result<&Panel> {
        let i = self.index(at)?;
        Ok(&self.panels[i])
    }

    fn visible_mut(&mut self, at: PanelRef) -> Result<&mut Panel> {
        let i = self.index(at)?;
        let panel = &mut self.panels[i];
        if panel.hidden {
            return Err(FigureError::Layout(format!("panel {at} is hidden")));
        }
        Ok(panel)
    }

    /// Append a trace; its colour is the caller's `look`.
    pub fn add_trace(&mut self, at: PanelRef, waveform: Waveform, look: TraceLook) -> Result<()> {
        self.push_trace(at, waveform, look, None)
    }

    /// Append a trace that also contributes a legend entry.
    pub fn add_labeled_trace(
        &mut self,
        at: PanelRef,
        waveform: Waveform,
        look: TraceLook,
        label: impl Into<String>,
    ) -> Result<()> {
        self.push_trace(at, waveform, look, Some(label.into()))
    }

    /// Append a trace styled with the next colour of the panel's cycle.
    pub fn add_cycled_trace(&mut self, at: PanelRef, waveform: Waveform) -> Result<()> {
        let next = self.visible_mut(at)?.traces.len();
        self.push_trace(at, waveform, TraceLook::new(next), None)
    }

    fn push_trace(
        &mut self,
        at: PanelRef,
        waveform: Waveform,
        look: TraceLook,
        label: Option<String>,
    ) -> Result<()> {
        let panel = self.visible_mut(at)?;
        if let Some(label) = &label {
            panel.legend_entries.push(LegendEntry {
                look: look.clone(),
                label: label.clone(),
            });
        }
        panel.traces.push(Trace {
            waveform,
            look,
            label,
        });
        Ok(())
    }

    pub fn set_title(
        &mut self,
        at: PanelRef,
        text: impl Into<String>,
        bold: bool,
        x_offset: f64,
    ) -> Result<()> {
        if !x_offset.is_finite() {
            return Err(FigureError::InvalidParameter(format!(
                "title offset must be finite, got {x_offset}"
            )));
        }
        self.visible_mut(at)?.title = Some(PanelTitle {
            text: text.into(),
            bold,
            x_offset,
        });
        Ok(())
    }

    /// Hide a slot. Its area is freed for the legend.
    ///
    /// Hiding a slot that already holds content, or that is the legend source,
    /// is rejected so nothing drawn is silently dropped.
    pub fn hide(&mut self, at: PanelRef) -> Result<()> {
        if self.legend_source == Some(at) {
            return Err(FigureError::Layout(format!(
                "panel {at} is the legend source and cannot be hidden"
            )));
        }
        let panel = self.visible_mut(at)?;
        if panel.has_content() {
            return Err(FigureError::Layout(format!(
                "panel {at} already has content and cannot be hidden"
            )));
        }
        panel.hidden = true;
        debug!("hid panel {at}");
        Ok(())
    }

    /// Line at `position` across the full extent of the panel.
    pub fn add_marker(
        &mut self,
        at: PanelRef,
        orientation: Orientation,
        position: f64,
        look: TraceLook,
        label: Option<&str>,
    ) -> Result<()> {
        if !position.is_finite() {
            return Err(FigureError::InvalidParameter(format!(
                "marker position must be finite, got {position}"
            )));
        }
        let panel = self.visible_mut(at)?;
        if let Some(label) = label {
            panel.legend_entries.push(LegendEntry {
                look: look.clone(),
                label: label.to_string(),
            });
        }
        panel.markers.push(Marker {
            orientation,
            position,
            look,
            label: label.map(str::to_string),
        });
        Ok(())
    }

    pub fn annotate(
        &mut self,
        at: PanelRef,
        text: impl Into<String>,
        (x, y): (f64, f64),
        font_size: f64,
    ) -> Result<()> {
        if !(x.is_finite() && y.is_finite()) || !(font_size > 0.0) {
            return Err(FigureError::InvalidParameter(format!(
                "annotation at ({x}, {y}) with font size {font_size}"
            )));
        }
        self.visible_mut(at)?.annotations.push(Annotation {
            text: text.into(),
            x,
            y,
            font_size,
        });
        Ok(())
    }

    /// Override autoscaled y-limits, e.g. to leave headroom for annotations.
    pub fn set_y_limits(&mut self, at: PanelRef, (lo, hi): (f64, f64)) -> Result<()> {
        if !(lo.is_finite() && hi.is_finite()) || lo >= hi {
            return Err(FigureError::InvalidParameter(format!(
                "y-limits ({lo}, {hi}) must be finite and increasing"
            )));
        }
        self.visible_mut(at)?.y_limits = Some((lo, hi));
        Ok(())
    }

    pub fn set_axis_labels(
        &mut self,
        at: PanelRef,
        x_label: Option<&str>,
        y_label: Option<&str>,
    ) -> Result<()> {
        let panel = self.visible_mut(at)?;
        panel.x_label = x_label.map(str::to_string);
        panel.y_label = y_label.map(str::to_string);
        Ok(())
    }

    /// Give every visible panel the same axis labels; suppression decides which show.
    pub fn set_axis_labels_all(&mut self, x_label: &str, y_label: &str) {
        for panel in self.panels.iter_mut().filter(|p| !p.hidden) {
            panel.x_label = Some(x_label.to_string());
            panel.y_label = Some(y_label.to_string());
        }
    }

    /// Designate the panel whose labeled markers and traces form the figure legend.
    pub fn set_legend_source(&mut self, at: PanelRef) -> Result<()> {
        self.visible_mut(at)?;
        self.legend_source = Some(at);
        Ok(())
    }

    pub fn legend_source(&self) -> Option<PanelRef> {
        self.legend_source
    }

    pub fn is_hidden(&self, at: PanelRef) -> bool {
        self.index(at)
            .map(|i| self.panels[i].hidden)
            .unwrap_or(false)
    }

    /// Visible panels in row-major order.
    pub fn visible_panels(&self) -> impl Iterator<Item = (PanelRef, &Panel)> + '_ {
        self.panels
            .iter()
            .enumerate()
            .filter(|(_, p)| !p.hidden)
            .map(|(i, p)| (PanelRef::new(i / self.cols, i % self.cols), p))
    }

    /// Hidden slots in row-major order.
    pub fn hidden_slots(&self) -> impl Iterator<Item = PanelRef> + '_ {
        self.panels
            .iter()
            .enumerate()
            .filter(|(_, p)| p.hidden)
            .map(|(i, _)| PanelRef::new(i / self.cols, i % self.cols))
    }

    /// Whether `at` is the bottom-most visible panel of its column.
    pub fn is_bottom_of_column(&self, at: PanelRef) -> bool {
        if self.is_hidden(at) || at.row >= self.rows || at.col >= self.cols {
            return false;
        }
        ((at.row + 1)..self.rows).all(|r| self.is_hidden(PanelRef::new(r, at.col)))
    }

    /// Whether `at` is the left-most visible panel of its row.
    pub fn is_left_of_row(&self, at: PanelRef) -> bool {
        if self.is_hidden(at) || at.row >= self.rows || at.col >= self.cols {
            return false;
        }
        (0..at.col).all(|c| self.is_hidden(PanelRef::new(at.row, c)))
    }

    /// The x-axis label this panel renders after suppression.
    pub fn shown_x_label(&self, at: PanelRef) -> Option<&str> {
        if !self.is_bottom_of_column(at) {
            return None;
        }
        self.panel(at).ok()?.x_label.as_deref()
    }

    /// The y-axis label this panel renders after suppression.
    pub fn shown_y_label(&self, at: PanelRef) -> Option<&str> {
        if !self.is_left_of_row(at) {
            return None;
        }
        self.panel(at).ok()?.y_label.as_deref()
    }
}
