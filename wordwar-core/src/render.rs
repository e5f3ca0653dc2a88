//! Render contract between the board and a drawing surface
//!
//! The board never draws by itself. It hands one [`FieldView`] per visible
//! field to a [`Surface`], which turns it into a filled, outlined hexagon with
//! a centred label.

use crate::board::Coord;
use crate::field::{FieldKind, HexField};
use crate::geometry::Point;
use serde::Serialize;

/// Everything a surface needs to paint one field
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct FieldView {
    pub coord: Coord,
    pub center: Point,
    pub radius: f64,
    pub kind: FieldKind,
    pub active: bool,
    pub glow: bool,
    pub letter: Option<char>,
}

impl FieldView {
    pub fn new(coord: Coord, field: &HexField) -> Self {
        Self {
            coord,
            center: field.center,
            radius: field.radius,
            kind: field.kind,
            active: field.active,
            glow: field.glow,
            letter: field.letter,
        }
    }

    /// Colors and sizes for drawing this field
    pub fn style(&self) -> FieldStyle {
        let fill = match self.kind {
            FieldKind::Black => "#111",
            FieldKind::White => "#eee",
            FieldKind::Neutral => "#666",
            FieldKind::Invisible => "#f00",
        };
        let stroke = if self.active {
            "#22a"
        } else if self.glow {
            "#00a"
        } else {
            "#888"
        };
        let text = match self.kind {
            FieldKind::Black => "#eee",
            FieldKind::White => "#111",
            FieldKind::Neutral | FieldKind::Invisible => "#f88",
        };

        FieldStyle {
            fill,
            stroke,
            line_width: (self.radius / 14.0).max(3.0),
            text,
            font_px: (self.radius * 0.8).floor(),
            label_baseline: self.center.y + self.radius / 2.7,
        }
    }
}

/// Palette and sizes for one field
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct FieldStyle {
    pub fill: &'static str,
    pub stroke: &'static str,
    pub line_width: f64,
    pub text: &'static str,
    /// Bold sans-serif label size in pixels
    pub font_px: f64,
    /// Y coordinate of the label's baseline, centred horizontally on the field
    pub label_baseline: f64,
}

/// Anything the board can be painted onto
pub trait Surface {
    /// Wipe the surface before a full repaint
    fn clear(&mut self) {}

    fn draw_field(&mut self, view: &FieldView);
}

/// Surface that keeps every draw call, for shipping to a remote canvas or
/// inspecting in tests
#[derive(Clone, Debug, Default)]
pub struct RecordingSurface {
    pub cleared: bool,
    pub drawn: Vec<FieldView>,
}

impl RecordingSurface {
    pub fn reset(&mut self) {
        self.cleared = false;
        self.drawn.clear();
    }

    pub fn into_views(self) -> Vec<FieldView> {
        self.drawn
    }
}

impl Surface for RecordingSurface {
    fn clear(&mut self) {
        self.cleared = true;
        self.drawn.clear();
    }

    fn draw_field(&mut self, view: &FieldView) {
        self.drawn.push(view.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view(kind: FieldKind, active: bool, glow: bool) -> FieldView {
        FieldView {
            coord: Coord::new(1, 1),
            center: Point::new(100.0, 100.0),
            radius: 70.0,
            kind,
            active,
            glow,
            letter: Some('A'),
        }
    }

    #[test]
    fn test_fill_and_text_are_inverse() {
        let black = view(FieldKind::Black, false, false).style();
        assert_eq!(black.fill, "#111");
        assert_eq!(black.text, "#eee");
        let white = view(FieldKind::White, false, false).style();
        assert_eq!(white.fill, "#eee");
        assert_eq!(white.text, "#111");
    }

    #[test]
    fn test_stroke_priority() {
        assert_eq!(view(FieldKind::Neutral, true, true).style().stroke, "#22a");
        assert_eq!(view(FieldKind::Neutral, false, true).style().stroke, "#00a");
        assert_eq!(view(FieldKind::Neutral, false, false).style().stroke, "#888");
    }

    #[test]
    fn test_sizes() {
        let style = view(FieldKind::Neutral, false, false).style();
        assert_eq!(style.line_width, 5.0);
        assert_eq!(style.font_px, 56.0);
        assert!((style.label_baseline - (100.0 + 70.0 / 2.7)).abs() < 1e-9);

        let mut small = view(FieldKind::Neutral, false, false);
        small.radius = 10.0;
        assert_eq!(small.style().line_width, 3.0);
    }

    #[test]
    fn test_recording_surface_clear() {
        let mut surface = RecordingSurface::default();
        surface.draw_field(&view(FieldKind::Black, false, false));
        surface.clear();
        assert!(surface.cleared);
        assert!(surface.drawn.is_empty());
    }
}
