//! Terminal rendering of the board and racks
//!
//! Each field takes two characters; even rows start one character further
//! right, matching the half-field shift of the canvas layout.
//!
//! Legend: `.` empty, `*` active, `+` highlighted, uppercase black letter,
//! lowercase white letter.

use std::fmt::Write;

use wordwar_core::{Color, Coord, FieldKind, Game, HexBoard, HexField};

fn cell(field: &HexField) -> char {
    match (field.kind, field.letter) {
        (FieldKind::Invisible, _) => ' ',
        (FieldKind::Black, Some(l)) => l.to_ascii_uppercase(),
        (FieldKind::White, Some(l)) => l.to_ascii_lowercase(),
        _ if field.active => '*',
        _ if field.glow => '+',
        _ => '.',
    }
}

/// Board as text, one line per row of the hexagon
pub fn render_board(board: &HexBoard) -> String {
    let mut out = String::new();
    for row in 0..board.size() {
        let fields: Vec<&HexField> = (0..board.size())
            .filter_map(|col| board.field(Coord::new(col, row)))
            .collect();
        if !fields.iter().any(|f| f.is_visible()) {
            continue;
        }

        let mut line = String::new();
        if row % 2 == 0 {
            line.push(' ');
        }
        for field in fields {
            line.push(cell(field));
            line.push(' ');
        }
        let _ = writeln!(out, "{:>2} {}", row, line.trim_end());
    }
    out
}

fn rack_line(game: &Game, color: Color) -> String {
    let letters: Vec<String> = game.pool().rack(color).iter().map(|l| l.to_string()).collect();
    format!("{:<6} {}", format!("{}:", color), letters.join(" "))
}

/// Racks, bag and the current mode
pub fn render_status(game: &Game) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", rack_line(game, Color::Black));
    let _ = writeln!(out, "{}", rack_line(game, Color::White));
    let _ = write!(out, "bag:   {}   mode: {:?}", game.pool().bag_len(), game.mode());
    if let Some(piece) = game.floating() {
        let _ = write!(out, "   holding {} {}", piece.color, piece.letter);
    }
    out.push('\n');
    out
}
