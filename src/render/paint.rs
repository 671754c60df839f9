//! Walk a FigureSpec and draw it through a RenderBackend.

use log::debug;

use crate::composer::{Layout, LegendEntry, Orientation, Panel, PanelRef};
use crate::data::ticks::{nice_ticks, DecimalFormatter};
use crate::data::trace_look::{Rgba, TraceLook};
use crate::error::Result;
use crate::figure::{FigureSpec, LegendPlacement, Rect};
use crate::legend::consolidate;
use crate::render::{estimate_text_width, HAlign, RenderBackend, TextStyle, VAlign};

const TICK_LEN: f64 = 3.5;
const TICK_PAD: f64 = 3.5;
const TICK_FONT: f64 = 10.0;
const LABEL_FONT: f64 = 10.0;
const LABEL_PAD: f64 = 4.0;
const TITLE_FONT: f64 = 12.0;
const TITLE_PAD: f64 = 6.0;
const LEGEND_FONT: f64 = 10.0;
const MARGIN: f64 = 0.05;

/// Linear map from data coordinates onto an axes rectangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxesTransform {
    pub rect: Rect,
    pub x_range: (f64, f64),
    pub y_range: (f64, f64),
}

impl AxesTransform {
    pub fn x(&self, x: f64) -> f64 {
        let (lo, hi) = self.x_range;
        self.rect.x + (x - lo) / (hi - lo) * self.rect.w
    }

    pub fn y(&self, y: f64) -> f64 {
        let (lo, hi) = self.y_range;
        self.rect.bottom() - (y - lo) / (hi - lo) * self.rect.h
    }
}

fn widen(range: Option<(f64, f64)>, value: f64) -> Option<(f64, f64)> {
    Some(match range {
        None => (value, value),
        Some((lo, hi)) => (lo.min(value), hi.max(value)),
    })
}

/// Data range padded by a 5% margin, never degenerate.
fn padded((lo, hi): (f64, f64)) -> (f64, f64) {
    if hi - lo <= f64::EPSILON * lo.abs().max(1.0) {
        let half = if lo == 0.0 { 0.5 } else { lo.abs() * 0.05 };
        return (lo - half, hi + half);
    }
    let pad = (hi - lo) * MARGIN;
    (lo - pad, hi + pad)
}

/// View limits of a panel: y-limit override, else autoscaled data plus markers.
pub fn view_limits(panel: &Panel) -> ((f64, f64), (f64, f64)) {
    let mut x = panel.data_x_range();
    let mut y = panel.data_y_range();
    for m in &panel.markers {
        match m.orientation {
            Orientation::Vertical => x = widen(x, m.position),
            Orientation::Horizontal => y = widen(y, m.position),
        }
    }
    let x_range = x.map(padded).unwrap_or((0.0, 1.0));
    let y_range = panel
        .y_limits
        .unwrap_or_else(|| y.map(padded).unwrap_or((0.0, 1.0)));
    (x_range, y_range)
}

fn max_ticks(extent: f64, per_tick: f64) -> usize {
    ((extent / per_tick) as usize).clamp(3, 9)
}

/// Draw a whole figure.
pub fn paint(figure: &FigureSpec, backend: &mut dyn RenderBackend) -> Result<()> {
    figure.validate()?;
    let (w, h) = figure.size_pt();
    backend.begin(w, h);
    backend.rect(
        Rect {
            x: 0.0,
            y: 0.0,
            w,
            h,
        },
        Some(Rgba::WHITE),
        None,
    );

    for (at, panel) in figure.layout.visible_panels() {
        paint_panel(figure, at, panel, backend);
    }

    if let Some(title) = &figure.suptitle {
        backend.text(
            &title.text,
            w / 2.0,
            (1.0 - title.y) * h,
            &TextStyle::new(TITLE_FONT).align(HAlign::Center, VAlign::Top),
        );
    }

    let entries = consolidate(&figure.layout);
    if !entries.is_empty() {
        paint_legend(&entries, figure.legend_placement(), backend);
    }
    Ok(())
}

fn paint_panel(figure: &FigureSpec, at: PanelRef, panel: &Panel, backend: &mut dyn RenderBackend) {
    let layout: &Layout = &figure.layout;
    let rect = figure.panel_rect(at);
    let (x_range, y_range) = view_limits(panel);
    let tf = AxesTransform {
        rect,
        x_range,
        y_range,
    };
    debug!("panel {at}: x {x_range:?}, y {y_range:?}");

    backend.set_clip(Some(rect));
    for trace in &panel.traces {
        let pts: Vec<(f64, f64)> = trace
            .waveform
            .points()
            .map(|(t, v)| (tf.x(t), tf.y(v)))
            .collect();
        backend.polyline(&pts, &trace.look);
    }
    for marker in &panel.markers {
        let pts = match marker.orientation {
            Orientation::Vertical => {
                let x = tf.x(marker.position);
                [(x, rect.y), (x, rect.bottom())]
            }
            Orientation::Horizontal => {
                let y = tf.y(marker.position);
                [(rect.x, y), (rect.right(), y)]
            }
        };
        backend.polyline(&pts, &marker.look);
    }
    backend.set_clip(None);

    let frame = TraceLook::colored(Rgba::BLACK).with_width(0.8);
    backend.rect(rect, None, Some(&frame));

    let show_x_ticks = layout.is_bottom_of_column(at);
    let show_y_ticks = layout.is_left_of_row(at);
    let fmt = DecimalFormatter::default();

    let x_ticks = nice_ticks(x_range.0, x_range.1, max_ticks(rect.w, 30.0));
    let x_step = step_of(&x_ticks);
    for &t in &x_ticks {
        let x = tf.x(t);
        backend.polyline(&[(x, rect.bottom()), (x, rect.bottom() + TICK_LEN)], &frame);
        if show_x_ticks {
            backend.text(
                &fmt.format(t, x_step),
                x,
                rect.bottom() + TICK_LEN + TICK_PAD,
                &TextStyle::new(TICK_FONT).align(HAlign::Center, VAlign::Top),
            );
        }
    }

    let y_ticks = nice_ticks(y_range.0, y_range.1, max_ticks(rect.h, 25.0));
    let y_step = step_of(&y_ticks);
    let mut widest = 0.0f64;
    for &t in &y_ticks {
        let y = tf.y(t);
        backend.polyline(&[(rect.x - TICK_LEN, y), (rect.x, y)], &frame);
        if show_y_ticks {
            let label = fmt.format(t, y_step);
            widest = widest.max(estimate_text_width(&label, TICK_FONT));
            backend.text(
                &label,
                rect.x - TICK_LEN - TICK_PAD,
                y,
                &TextStyle::new(TICK_FONT).align(HAlign::Right, VAlign::Center),
            );
        }
    }

    if let Some(label) = layout.shown_x_label(at) {
        let tick_block = if show_x_ticks { TICK_FONT } else { 0.0 };
        backend.text(
            label,
            rect.x + rect.w / 2.0,
            rect.bottom() + TICK_LEN + TICK_PAD + tick_block + LABEL_PAD,
            &TextStyle::new(LABEL_FONT).align(HAlign::Center, VAlign::Top),
        );
    }
    if let Some(label) = layout.shown_y_label(at) {
        backend.text(
            label,
            rect.x - TICK_LEN - TICK_PAD - widest - LABEL_PAD,
            rect.y + rect.h / 2.0,
            &TextStyle::new(LABEL_FONT)
                .align(HAlign::Center, VAlign::Baseline)
                .rotated(-90.0),
        );
    }

    for note in &panel.annotations {
        backend.text(
            &note.text,
            tf.x(note.x),
            tf.y(note.y),
            &TextStyle::new(note.font_size),
        );
    }

    if let Some(title) = &panel.title {
        backend.text(
            &title.text,
            rect.x + title.x_offset * rect.w,
            rect.y - TITLE_PAD,
            &TextStyle::new(TITLE_FONT)
                .bold(title.bold)
                .align(HAlign::Center, VAlign::Baseline),
        );
    }
}

fn step_of(ticks: &[f64]) -> f64 {
    match ticks {
        [a, b, ..] => b - a,
        _ => 1.0,
    }
}

/// Box size of a legend, in points.
pub fn legend_size(entries: &[LegendEntry]) -> (f64, f64) {
    let em = LEGEND_FONT;
    let pad = 0.4 * em;
    let text_w = entries
        .iter()
        .map(|e| estimate_text_width(&e.label, em))
        .fold(0.0, f64::max);
    let n = entries.len() as f64;
    let w = pad + 2.0 * em + 0.8 * em + text_w + pad;
    let h = 2.0 * pad + n * em + (n - 1.0).max(0.0) * 0.5 * em;
    (w, h)
}

fn paint_legend(entries: &[LegendEntry], placement: LegendPlacement, backend: &mut dyn RenderBackend) {
    let em = LEGEND_FONT;
    let pad = 0.4 * em;
    let (w, h) = legend_size(entries);
    let (bx, by) = match placement {
        LegendPlacement::LowerLeft(x, y) => (x, y - h),
        LegendPlacement::UpperLeft(x, y) => (x, y),
        LegendPlacement::UpperRight(x, y) => (x - w, y),
    };
    let frame = TraceLook::colored(Rgba::rgb(204, 204, 204)).with_width(0.8);
    backend.rect(
        Rect { x: bx, y: by, w, h },
        Some(Rgba(255, 255, 255, 204)),
        Some(&frame),
    );
    for (i, entry) in entries.iter().enumerate() {
        let cy = by + pad + em / 2.0 + i as f64 * 1.5 * em;
        let x0 = bx + pad;
        backend.polyline(&[(x0, cy), (x0 + 2.0 * em, cy)], &entry.look);
        backend.text(
            &entry.label,
            x0 + 2.8 * em,
            cy,
            &TextStyle::new(em).align(HAlign::Left, VAlign::Center),
        );
    }
}
