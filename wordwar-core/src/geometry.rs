//! Hexagon geometry on the canvas
//!
//! Fields are hexagons with a pointed top and bottom: width `r·√3`, height `2r`.
//! Rows are `1.5r` apart and every even row is shifted right by half a field,
//! which gives the brick-like offset tiling the board uses.

use serde::{Deserialize, Serialize};

/// √3
const SQRT_3: f64 = 1.732_050_807_568_877_2;

/// Half the width of a hexagon of radius 1 (√3 / 2)
const HALF_WIDTH: f64 = SQRT_3 / 2.0;

/// Slope of the slanted edges (1 / √3)
const EDGE_SLOPE: f64 = 1.0 / SQRT_3;

/// A position on the canvas in pixels
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Corner points of a hexagon, starting at the upper-right corner and running
/// counter-clockwise on screen.
pub fn hexagon_boundary(center: Point, radius: f64) -> [Point; 6] {
    let half_height = 0.5 * radius;
    let half_width = HALF_WIDTH * radius;
    let Point { x, y } = center;
    [
        Point::new(x + half_width, y - half_height),
        Point::new(x, y - radius),
        Point::new(x - half_width, y - half_height),
        Point::new(x - half_width, y + half_height),
        Point::new(x, y + radius),
        Point::new(x + half_width, y + half_height),
    ]
}

/// Whether `(x, y)` lies inside the hexagon described by `center`/`radius`.
///
/// This is the polygon of [`hexagon_boundary`] expressed as a bounding box
/// plus four slanted half-planes. Upper and left edges are inclusive, lower
/// and right edges exclusive, so a point on an edge shared by two adjacent
/// fields belongs to exactly one of them.
pub fn contains_point(center: Point, radius: f64, x: f64, y: f64) -> bool {
    let half_width = HALF_WIDTH * radius;
    let half_height = 0.5 * radius;
    let dx = x - center.x;
    let dy = y - center.y;

    dy >= -radius
        && dy < radius
        && dx >= -half_width
        && dx < half_width
        // upper-left edge
        && dy >= -half_height - EDGE_SLOPE * (dx + half_width)
        // upper-right edge
        && dy >= -half_height + EDGE_SLOPE * (dx - half_width)
        // lower-left edge
        && dy < half_height + EDGE_SLOPE * (dx + half_width)
        // lower-right edge
        && dy < half_height - EDGE_SLOPE * (dx - half_width)
}

/// Pixel placement of a board on a canvas
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Layout {
    pub x_start: f64,
    pub y_start: f64,
    pub x_spacing: f64,
    pub y_spacing: f64,
    pub radius: f64,
}

impl Layout {
    /// Fit the largest board of the given side length into a canvas.
    ///
    /// The board is as wide as the canvas unless the canvas is too flat, in
    /// which case the height (scaled by 2/√3) limits it. The centre field
    /// lands on the centre of the canvas.
    pub fn fit(side_length: u32, canvas_width: f64, canvas_height: f64) -> Self {
        let side = f64::from(side_length.max(1));
        let x_center = canvas_width / 2.0;
        let y_center = canvas_height / 2.0;

        let max_width = canvas_width.min(canvas_height / SQRT_3 * 2.0);
        let x_spacing = max_width / (side * 2.0);
        let even_offset = if side_length % 2 == 0 { 0.5 * x_spacing } else { 0.0 };
        let x_start = x_center - side * x_spacing - even_offset;
        let radius = x_spacing / SQRT_3;
        let y_spacing = 1.5 * radius;
        let y_start = y_center - side * y_spacing;

        Self {
            x_start,
            y_start,
            x_spacing,
            y_spacing,
            radius,
        }
    }

    /// Canvas centre of the field at column `col`, row `row`
    pub fn center(&self, col: i32, row: i32) -> Point {
        let shift = if row % 2 == 0 { 0.5 * self.x_spacing } else { 0.0 };
        Point::new(
            self.x_start + f64::from(col) * self.x_spacing + shift,
            self.y_start + f64::from(row) * self.y_spacing,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_boundary_dimensions() {
        let pts = hexagon_boundary(Point::new(100.0, 50.0), 20.0);
        let min_x = pts.iter().map(|p| p.x).fold(f64::INFINITY, f64::min);
        let max_x = pts.iter().map(|p| p.x).fold(f64::NEG_INFINITY, f64::max);
        let min_y = pts.iter().map(|p| p.y).fold(f64::INFINITY, f64::min);
        let max_y = pts.iter().map(|p| p.y).fold(f64::NEG_INFINITY, f64::max);
        assert!(close(max_x - min_x, 20.0 * SQRT_3));
        assert!(close(max_y - min_y, 40.0));
        assert!(close(pts[1].y, 30.0));
        assert!(close(pts[4].y, 70.0));
    }

    #[test]
    fn test_center_is_inside() {
        let c = Point::new(10.0, -3.0);
        assert!(contains_point(c, 5.0, c.x, c.y));
    }

    #[test]
    fn test_cardinal_points_outside() {
        let c = Point::new(200.0, 200.0);
        let r = 40.0;
        let d = r * 1.01;
        assert!(!contains_point(c, r, c.x + d, c.y));
        assert!(!contains_point(c, r, c.x - d, c.y));
        assert!(!contains_point(c, r, c.x, c.y + d));
        assert!(!contains_point(c, r, c.x, c.y - d));
    }

    #[test]
    fn test_matches_polygon_near_corners() {
        let c = Point::new(0.0, 0.0);
        let r = 10.0;
        for p in hexagon_boundary(c, r) {
            // Just inside the corner, toward the centre
            assert!(contains_point(c, r, p.x * 0.98, p.y * 0.98), "{:?} should be inside", p);
            // Just outside, away from the centre
            assert!(!contains_point(c, r, p.x * 1.02, p.y * 1.02), "{:?} should be outside", p);
        }
    }

    #[test]
    fn test_slanted_edge() {
        // Midpoint of the upper-right edge, nudged in and out along its normal
        let c = Point::new(0.0, 0.0);
        let r = 10.0;
        let mid = Point::new(HALF_WIDTH * r / 2.0, -0.75 * r);
        assert!(contains_point(c, r, mid.x * 0.99, mid.y * 0.99));
        assert!(!contains_point(c, r, mid.x * 1.01, mid.y * 1.01));
        // Inside the bounding box but outside the slanted edge
        assert!(!contains_point(c, r, HALF_WIDTH * r * 0.9, -0.95 * r));
    }

    #[test]
    fn test_shared_vertical_edge_has_one_owner() {
        let r = 10.0;
        let left = Point::new(0.0, 0.0);
        let right = Point::new(2.0 * HALF_WIDTH * r, 0.0);
        let x = HALF_WIDTH * r;
        assert!(!contains_point(left, r, x, 0.0));
        assert!(contains_point(right, r, x, 0.0));
    }

    #[test]
    fn test_layout_centers_board() {
        for side in [1u32, 2, 3, 4, 11] {
            let layout = Layout::fit(side, 1200.0, 900.0);
            let s = side as i32;
            let c = layout.center(s, s);
            assert!(close(c.x, 600.0), "side {}: x={}", side, c.x);
            assert!(close(c.y, 450.0), "side {}: y={}", side, c.y);
        }
    }

    #[test]
    fn test_layout_spacing() {
        let layout = Layout::fit(4, 800.0, 2000.0);
        // Width-limited canvas
        assert!(close(layout.x_spacing, 100.0));
        assert!(close(layout.radius, 100.0 / SQRT_3));
        assert!(close(layout.y_spacing, 1.5 * layout.radius));

        // Height-limited canvas
        let flat = Layout::fit(4, 4000.0, 600.0);
        assert!(close(flat.x_spacing, 600.0 / SQRT_3 * 2.0 / 8.0));
    }

    #[test]
    fn test_even_rows_shift_right() {
        let layout = Layout::fit(3, 600.0, 600.0);
        let odd = layout.center(2, 1);
        let even = layout.center(2, 2);
        assert!(close(even.x - odd.x, layout.x_spacing / 2.0));
        assert!(close(even.y - odd.y, layout.y_spacing));
    }

    #[test]
    fn test_neighbouring_fields_touch() {
        // Adjacent centres are exactly one field width apart
        let layout = Layout::fit(3, 600.0, 600.0);
        let a = layout.center(2, 1);
        let b = layout.center(2, 2);
        let dist = ((a.x - b.x).powi(2) + (a.y - b.y).powi(2)).sqrt();
        assert!(close(dist, layout.radius * SQRT_3));
    }
}
