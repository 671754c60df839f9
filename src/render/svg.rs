//! SVG backend: accumulates drawing calls into a standalone SVG document.

use std::fmt::Write;

use crate::data::trace_look::{Rgba, TraceLook};
use crate::figure::Rect;
use crate::render::{HAlign, RenderBackend, TextStyle, VAlign};

const FONT_FAMILY: &str = "DejaVu Sans, Liberation Sans, Arial, sans-serif";

/// Builds an SVG document in figure points (one user unit per point).
#[derive(Debug, Default)]
pub struct SvgBackend {
    width: f64,
    height: f64,
    defs: String,
    body: String,
    clip_count: usize,
    clip: Option<String>,
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

fn stroke_attrs(look: &TraceLook) -> String {
    let mut attrs = format!(
        r#"stroke="{}" stroke-width="{:.3}""#,
        look.color.hex(),
        look.width
    );
    if look.color.3 != 255 {
        let _ = write!(attrs, r#" stroke-opacity="{:.3}""#, look.color.opacity());
    }
    let dashes = look.style.dash_pattern(look.width);
    if !dashes.is_empty() {
        let list: Vec<String> = dashes.iter().map(|d| format!("{d:.3}")).collect();
        let _ = write!(attrs, r#" stroke-dasharray="{}""#, list.join(","));
    }
    attrs
}

fn fill_attrs(fill: Option<Rgba>) -> String {
    match fill {
        None => r#"fill="none""#.to_string(),
        Some(c) if c.3 == 255 => format!(r#"fill="{}""#, c.hex()),
        Some(c) => format!(r#"fill="{}" fill-opacity="{:.3}""#, c.hex(), c.opacity()),
    }
}

impl SvgBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Finished document.
    pub fn finish(&self) -> String {
        let mut doc = String::with_capacity(self.body.len() + self.defs.len() + 256);
        let _ = write!(
            doc,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w:.3}" height="{h:.3}" viewBox="0 0 {w:.3} {h:.3}">"#,
            w = self.width,
            h = self.height
        );
        if !self.defs.is_empty() {
            let _ = write!(doc, "<defs>{}</defs>", self.defs);
        }
        doc.push_str(&self.body);
        doc.push_str("</svg>");
        doc
    }

    fn clip_attr(&self) -> String {
        match &self.clip {
            Some(id) => format!(r#" clip-path="url(#{id})""#),
            None => String::new(),
        }
    }
}

impl RenderBackend for SvgBackend {
    fn begin(&mut self, width: f64, height: f64) {
        *self = Self {
            width,
            height,
            ..Self::default()
        };
    }

    fn rect(&mut self, rect: Rect, fill: Option<Rgba>, stroke: Option<&TraceLook>) {
        let stroke = stroke.map(stroke_attrs).unwrap_or_default();
        let _ = write!(
            self.body,
            r#"<rect x="{:.3}" y="{:.3}" width="{:.3}" height="{:.3}" {} {}/>"#,
            rect.x,
            rect.y,
            rect.w,
            rect.h,
            fill_attrs(fill),
            stroke
        );
    }

    fn polyline(&mut self, points: &[(f64, f64)], look: &TraceLook) {
        if points.len() < 2 {
            return;
        }
        let mut coords = String::with_capacity(points.len() * 16);
        for (i, (x, y)) in points.iter().enumerate() {
            if i > 0 {
                coords.push(' ');
            }
            let _ = write!(coords, "{x:.3},{y:.3}");
        }
        let _ = write!(
            self.body,
            r#"<polyline points="{}" fill="none" {} stroke-linejoin="round"{}/>"#,
            coords,
            stroke_attrs(look),
            self.clip_attr()
        );
    }

    fn text(&mut self, text: &str, x: f64, y: f64, style: &TextStyle) {
        let anchor = match style.h_align {
            HAlign::Left => "start",
            HAlign::Center => "middle",
            HAlign::Right => "end",
        };
        // Shift from the anchor to the baseline in the text's own (rotated) frame.
        let dy = match style.v_align {
            VAlign::Top => 0.76 * style.size,
            VAlign::Center => 0.36 * style.size,
            VAlign::Baseline => 0.0,
        };
        let weight = if style.bold { "bold" } else { "normal" };
        let transform = if style.rotation != 0.0 {
            format!(
                r#" transform="rotate({:.3} {:.3} {:.3})""#,
                style.rotation, x, y
            )
        } else {
            String::new()
        };
        let _ = write!(
            self.body,
            r#"<text x="{:.3}" y="{:.3}" font-family="{}" font-size="{:.3}" font-weight="{}" fill="{}" text-anchor="{}"{}>{}</text>"#,
            x,
            y + dy,
            FONT_FAMILY,
            style.size,
            weight,
            style.color.hex(),
            anchor,
            transform,
            escape(text)
        );
    }

    fn set_clip(&mut self, clip: Option<Rect>) {
        let Some(r) = clip else {
            self.clip = None;
            return;
        };
        self.clip_count += 1;
        let id = format!("clip{}", self.clip_count);
        let _ = write!(
            self.defs,
            r#"<clipPath id="{}"><rect x="{:.3}" y="{:.3}" width="{:.3}" height="{:.3}"/></clipPath>"#,
            id, r.x, r.y, r.w, r.h
        );
        self.clip = Some(id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_markup_in_text() {
        assert_eq!(escape("a<b & \"c\""), "a&lt;b &amp; &quot;c&quot;");
    }

    #[test]
    fn clip_applies_to_following_polylines_only() {
        let mut svg = SvgBackend::new();
        svg.begin(100.0, 50.0);
        svg.set_clip(Some(Rect {
            x: 0.0,
            y: 0.0,
            w: 10.0,
            h: 10.0,
        }));
        svg.polyline(&[(0.0, 0.0), (1.0, 1.0)], &TraceLook::default());
        svg.set_clip(None);
        svg.polyline(&[(0.0, 0.0), (2.0, 2.0)], &TraceLook::default());
        let doc = svg.finish();
        assert_eq!(doc.matches("clip-path=").count(), 1);
        assert!(doc.contains(r#"<clipPath id="clip1">"#));
    }
}
