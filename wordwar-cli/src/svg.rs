//! SVG drawing surface
//!
//! Collects one `<g>` element per painted field and wraps them in an `<svg>`
//! document on `finish`. A clear drops everything painted so far.

use std::fmt::Write;

use wordwar_core::{hexagon_boundary, FieldView, Surface};

const SVG_NS: &str = "http://www.w3.org/2000/svg";

#[derive(Debug, Default)]
pub struct SvgSurface {
    elements: Vec<String>,
}

impl SvgSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of fields painted since the last clear
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Complete SVG document for a canvas of the given size
    pub fn finish(&self, width: f64, height: f64) -> String {
        let mut out = String::new();
        let _ = writeln!(
            out,
            r#"<svg xmlns="{}" width="{}" height="{}" viewBox="0 0 {} {}">"#,
            SVG_NS,
            fmt_px(width),
            fmt_px(height),
            fmt_px(width),
            fmt_px(height)
        );
        for element in &self.elements {
            out.push_str(element);
        }
        out.push_str("</svg>\n");
        out
    }
}

impl Surface for SvgSurface {
    fn clear(&mut self) {
        self.elements.clear();
    }

    fn draw_field(&mut self, view: &FieldView) {
        let style = view.style();
        let points: Vec<String> = hexagon_boundary(view.center, view.radius)
            .iter()
            .map(|p| format!("{},{}", fmt_px(p.x), fmt_px(p.y)))
            .collect();

        let mut element = String::new();
        let _ = writeln!(element, r#"<g data-col="{}" data-row="{}">"#, view.coord.col, view.coord.row);
        let _ = writeln!(
            element,
            r#"<polygon points="{}" fill="{}" stroke="{}" stroke-width="{}"/>"#,
            points.join(" "),
            style.fill,
            style.stroke,
            fmt_px(style.line_width)
        );
        if let Some(letter) = view.letter {
            let _ = writeln!(
                element,
                r#"<text x="{}" y="{}" fill="{}" font-family="sans-serif" font-weight="bold" font-size="{}" text-anchor="middle">{}</text>"#,
                fmt_px(view.center.x),
                fmt_px(style.label_baseline),
                style.text,
                fmt_px(style.font_px),
                escape(letter)
            );
        }
        element.push_str("</g>\n");
        self.elements.push(element);
    }
}

fn fmt_px(value: f64) -> String {
    let rounded = (value * 100.0).round() / 100.0;
    format!("{}", rounded)
}

fn escape(letter: char) -> String {
    match letter {
        '<' => "&lt;".to_string(),
        '>' => "&gt;".to_string(),
        '&' => "&amp;".to_string(),
        c => c.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wordwar_core::{Color, Coord, HexBoard};

    #[test]
    fn test_one_group_per_visible_field() {
        let mut board = HexBoard::new(2);
        let mut surface = SvgSurface::new();
        let painted = board.render(&mut surface);

        assert_eq!(painted, 7);
        assert_eq!(surface.len(), 7);
        let doc = surface.finish(1000.0, 1000.0);
        assert!(doc.starts_with("<svg xmlns=\"http://www.w3.org/2000/svg\""));
        assert!(doc.ends_with("</svg>\n"));
        assert_eq!(doc.matches("<polygon").count(), 7);
        assert_eq!(doc.matches("<text").count(), 0);
    }

    #[test]
    fn test_letter_label() {
        let mut board = HexBoard::new(2);
        board.place_letter(Coord::new(2, 2), Color::Black, 'K').unwrap();
        let mut surface = SvgSurface::new();
        board.render(&mut surface);

        let doc = surface.finish(1000.0, 1000.0);
        assert_eq!(doc.matches("<text").count(), 1);
        assert!(doc.contains(">K</text>"));
        assert!(doc.contains(r##"fill="#111""##));
    }

    #[test]
    fn test_clear_drops_previous_paint() {
        let mut board = HexBoard::new(3);
        let mut surface = SvgSurface::new();
        board.render(&mut surface);
        board.invalidate();
        board.render(&mut surface);
        assert_eq!(surface.len(), 19);
    }

    #[test]
    fn test_fmt_px() {
        assert_eq!(fmt_px(12.0), "12");
        assert_eq!(fmt_px(1.23456), "1.23");
    }
}
