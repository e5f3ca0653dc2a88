//! The hexagon-shaped game board
//!
//! Fields live in a `(2L+1) × (2L+1)` array indexed by `(col, row)`. The
//! outermost ring of the array is always Invisible, so neighbour arithmetic
//! around any playable field stays inside the array. Inside that ring the
//! playable fields form a hexagon with `L` fields per side.

use crate::error::GameError;
use crate::field::{Color, FieldKind, HexField};
use crate::geometry::Layout;
use crate::render::{FieldView, Surface};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Canvas size used until the first relayout
const DEFAULT_CANVAS: f64 = 1000.0;

/// Largest supported side length (a 129 × 129 field array)
pub const MAX_SIDE_LENGTH: u32 = 64;

/// Position in the field array: `col` runs left to right, `row` top to bottom
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Coord {
    pub col: i32,
    pub row: i32,
}

impl Coord {
    pub const fn new(col: i32, row: i32) -> Self {
        Self { col, row }
    }

    /// The six adjacent fields.
    ///
    /// Even rows are drawn half a field to the right, so the fields above and
    /// below sit at `col` and `col + 1` on even rows, `col - 1` and `col` on
    /// odd rows.
    pub fn neighbors(&self) -> [Coord; 6] {
        let Coord { col, row } = *self;
        let (left, right) = if row.rem_euclid(2) == 0 {
            (col, col + 1)
        } else {
            (col - 1, col)
        };
        [
            Coord::new(col + 1, row),
            Coord::new(right, row - 1),
            Coord::new(left, row - 1),
            Coord::new(col - 1, row),
            Coord::new(left, row + 1),
            Coord::new(right, row + 1),
        ]
    }

    /// This field followed by its six neighbours
    pub fn neighborhood(&self) -> [Coord; 7] {
        let n = self.neighbors();
        [*self, n[0], n[1], n[2], n[3], n[4], n[5]]
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.col, self.row)
    }
}

/// Fields that need repainting since the last render
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Damage {
    #[default]
    Clean,
    Cells(BTreeSet<Coord>),
    Full,
}

impl Damage {
    fn add<I: IntoIterator<Item = Coord>>(&mut self, coords: I) {
        match self {
            Damage::Full => {}
            Damage::Cells(cells) => cells.extend(coords),
            Damage::Clean => *self = Damage::Cells(coords.into_iter().collect()),
        }
    }

    pub fn is_clean(&self) -> bool {
        matches!(self, Damage::Clean)
    }
}

/// The game board
#[derive(Clone, Debug)]
pub struct HexBoard {
    side_length: u32,
    /// Array width and height (2L + 1)
    size: i32,
    /// Column-major: index = col * size + row
    fields: Vec<HexField>,
    active: Option<Coord>,
    layout: Layout,
    damage: Damage,
}

impl HexBoard {
    // ========================================================================
    // CONSTRUCTION
    // ========================================================================

    /// Build a board with `side_length` fields per side, laid out on a
    /// default square canvas until [`HexBoard::relayout`] is called.
    ///
    /// # Panics
    ///
    /// Panics if `side_length` exceeds [`MAX_SIDE_LENGTH`]. `GameConfig::validate`
    /// rejects such lengths before a game builds its board.
    pub fn new(side_length: u32) -> Self {
        assert!(
            side_length <= MAX_SIDE_LENGTH,
            "side length {} exceeds {}",
            side_length,
            MAX_SIDE_LENGTH
        );
        let size = side_length as i32 * 2 + 1;
        let layout = Layout::fit(side_length, DEFAULT_CANVAS, DEFAULT_CANVAS);

        let mut fields = Vec::with_capacity(size as usize * size as usize);
        for col in 0..size {
            for row in 0..size {
                let kind = if Self::in_shape(side_length, col, row) {
                    FieldKind::Neutral
                } else {
                    FieldKind::Invisible
                };
                fields.push(HexField::new(layout.center(col, row), layout.radius, kind));
            }
        }

        Self {
            side_length,
            size,
            fields,
            active: None,
            layout,
            damage: Damage::Full,
        }
    }

    /// Whether `(col, row)` is a playable field of a board with the given side
    /// length.
    ///
    /// Each row spans `[first, last]` where `first = ⌈(|L − row| + 1) / 2⌉`
    /// and `last = 2L − first`. The half-field shift of even rows is balanced
    /// by trimming one field from the right of even rows when `L` is odd, and
    /// from the left of odd rows when `L` is even.
    fn in_shape(side_length: u32, col: i32, row: i32) -> bool {
        let side = side_length as i32;
        let edge = side * 2;
        if col <= 0 || row <= 0 || col >= edge || row >= edge {
            return false;
        }

        let half = ((side - row).abs() + 2) / 2;
        let mut first = half;
        let mut last = edge - half;
        if side % 2 == 1 && row % 2 == 0 {
            last -= 1;
        }
        if side % 2 == 0 && row % 2 == 1 {
            first += 1;
        }
        col >= first && col <= last
    }

    // ========================================================================
    // ACCESSORS
    // ========================================================================

    pub fn side_length(&self) -> u32 {
        self.side_length
    }

    /// Width and height of the field array
    pub fn size(&self) -> i32 {
        self.size
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Currently active field
    pub fn active(&self) -> Option<Coord> {
        self.active
    }

    pub fn has_active(&self) -> bool {
        self.active.is_some()
    }

    pub fn damage(&self) -> &Damage {
        &self.damage
    }

    fn index(&self, coord: Coord) -> Option<usize> {
        let in_range = |v: i32| (0..self.size).contains(&v);
        if in_range(coord.col) && in_range(coord.row) {
            Some((coord.col * self.size + coord.row) as usize)
        } else {
            None
        }
    }

    fn coord_of(&self, index: usize) -> Coord {
        let index = index as i32;
        Coord::new(index / self.size, index % self.size)
    }

    /// Field at `coord`, including Invisible ones; `None` off the array
    pub fn field(&self, coord: Coord) -> Option<&HexField> {
        self.index(coord).map(|i| &self.fields[i])
    }

    fn field_mut(&mut self, coord: Coord) -> Option<&mut HexField> {
        self.index(coord).map(move |i| &mut self.fields[i])
    }

    /// Kind of the field at `coord`; off-array coordinates read as Invisible
    pub fn kind(&self, coord: Coord) -> FieldKind {
        self.field(coord).map_or(FieldKind::Invisible, |f| f.kind)
    }

    /// All fields in array order
    pub fn fields(&self) -> impl Iterator<Item = (Coord, &HexField)> + '_ {
        self.fields.iter().enumerate().map(|(i, f)| (self.coord_of(i), f))
    }

    /// Fields that are part of the board shape
    pub fn visible_fields(&self) -> impl Iterator<Item = (Coord, &HexField)> + '_ {
        self.fields().filter(|(_, f)| f.is_visible())
    }

    /// Number of fields in the board shape
    pub fn playable_count(&self) -> usize {
        self.fields.iter().filter(|f| f.is_visible()).count()
    }

    /// Number of letters currently placed
    pub fn letters_on_board(&self) -> usize {
        self.fields.iter().filter(|f| f.letter.is_some()).count()
    }

    // ========================================================================
    // HIT TESTING
    // ========================================================================

    /// Field owning the canvas point `(x, y)`, scanning row by row
    pub fn field_at(&self, x: f64, y: f64) -> Option<Coord> {
        for row in 0..self.size {
            for col in 0..self.size {
                let coord = Coord::new(col, row);
                if self.field(coord).is_some_and(|f| f.contains(x, y)) {
                    return Some(coord);
                }
            }
        }
        None
    }

    // ========================================================================
    // STATE CHANGES
    // ========================================================================

    /// Make a Neutral field the placement target.
    ///
    /// A previously active field is deactivated first, so at most one field
    /// is ever active.
    pub fn activate(&mut self, coord: Coord) -> Result<(), GameError> {
        if self.kind(coord) != FieldKind::Neutral {
            return Err(GameError::IllegalTarget(coord));
        }
        if self.active == Some(coord) {
            return Ok(());
        }

        self.deactivate();
        if let Some(field) = self.field_mut(coord) {
            field.active = true;
        }
        self.active = Some(coord);
        self.damage.add(coord.neighborhood());
        Ok(())
    }

    /// Clear the active field, returning where it was
    pub fn deactivate(&mut self) -> Option<Coord> {
        let coord = self.active.take()?;
        if let Some(field) = self.field_mut(coord) {
            field.active = false;
        }
        self.damage.add(coord.neighborhood());
        Some(coord)
    }

    /// Put a letter of `color` on a Neutral field.
    ///
    /// The field does not have to be active; if it is, it stops being active.
    pub fn place_letter(&mut self, coord: Coord, color: Color, letter: char) -> Result<(), GameError> {
        if self.kind(coord) != FieldKind::Neutral {
            return Err(GameError::IllegalTarget(coord));
        }

        if self.active == Some(coord) {
            self.active = None;
        }
        if let Some(field) = self.field_mut(coord) {
            field.kind = color.into();
            field.letter = Some(letter);
            field.active = false;
        }
        self.damage.add(coord.neighborhood());
        Ok(())
    }

    /// Reset a visible field to empty Neutral, returning the letter it held
    pub fn clear_field(&mut self, coord: Coord) -> Result<Option<char>, GameError> {
        if !self.kind(coord).is_visible() {
            return Err(GameError::IllegalTarget(coord));
        }

        if self.active == Some(coord) {
            self.active = None;
        }
        let letter = match self.field_mut(coord) {
            Some(field) => {
                field.kind = FieldKind::Neutral;
                field.active = false;
                field.letter.take()
            }
            None => None,
        };
        self.damage.add(coord.neighborhood());
        Ok(letter)
    }

    /// Turn the highlight of a visible field on or off
    pub fn set_glow(&mut self, coord: Coord, glow: bool) -> Result<(), GameError> {
        if !self.kind(coord).is_visible() {
            return Err(GameError::IllegalTarget(coord));
        }
        if let Some(field) = self.field_mut(coord) {
            field.glow = glow;
        }
        self.damage.add([coord]);
        Ok(())
    }

    /// Recompute every field's position for a new canvas size
    pub fn relayout(&mut self, canvas_width: f64, canvas_height: f64) {
        let layout = Layout::fit(self.side_length, canvas_width, canvas_height);
        let size = self.size;
        for (i, field) in self.fields.iter_mut().enumerate() {
            let i = i as i32;
            field.center = layout.center(i / size, i % size);
            field.radius = layout.radius;
        }
        self.layout = layout;
        self.damage = Damage::Full;
    }

    /// Mark the whole board for repainting
    pub fn invalidate(&mut self) {
        self.damage = Damage::Full;
    }

    // ========================================================================
    // RENDERING
    // ========================================================================

    /// Paint everything damaged since the last render onto `surface`.
    ///
    /// Returns the number of fields drawn. Invisible fields are never drawn.
    pub fn render<S: Surface + ?Sized>(&mut self, surface: &mut S) -> usize {
        match std::mem::take(&mut self.damage) {
            Damage::Clean => 0,
            Damage::Full => {
                surface.clear();
                let mut drawn = 0;
                for (coord, field) in self.visible_fields() {
                    surface.draw_field(&FieldView::new(coord, field));
                    drawn += 1;
                }
                drawn
            }
            Damage::Cells(cells) => {
                let mut drawn = 0;
                for coord in cells {
                    if let Some(field) = self.field(coord).filter(|f| f.is_visible()) {
                        surface.draw_field(&FieldView::new(coord, field));
                        drawn += 1;
                    }
                }
                drawn
            }
        }
    }
}
