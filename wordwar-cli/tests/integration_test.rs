//! Integration tests for WordWar
//!
//! Tests the full stack: board shape, letter pool, play protocol and the
//! render contract working together.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use wordwar_core::{
    ActionMode, Color, Coord, FieldKind, Game, GameConfig, GameError, HexBoard, KeyInput, LetterPool,
    Outcome, PlayState, RecordingSurface, TOTAL_LETTERS,
};

// ============================================================================
// TEST FIXTURES
// ============================================================================

fn game(side_length: u32, seed: u64) -> Game {
    Game::new(GameConfig::with_side_length(side_length).with_seed(seed)).unwrap()
}

fn center_of(game: &Game, coord: Coord) -> (f64, f64) {
    let p = game.board().layout().center(coord.col, coord.row);
    (p.x, p.y)
}

fn click_field(game: &mut Game, coord: Coord) -> Result<Outcome, GameError> {
    let (x, y) = center_of(game, coord);
    game.click(x, y)
}

// ============================================================================
// BOARD SHAPE
// ============================================================================

#[test]
fn test_side_two_board_shape() {
    let board = HexBoard::new(2);
    assert_eq!(board.size(), 5);

    let neutral: Vec<Coord> = board
        .fields()
        .filter(|(_, f)| f.kind == FieldKind::Neutral)
        .map(|(c, _)| c)
        .collect();
    assert_eq!(neutral.len(), 7);
    assert!(neutral.contains(&Coord::new(2, 2)));

    // The sentinel ring is never playable
    for i in 0..5 {
        for coord in [Coord::new(i, 0), Coord::new(i, 4), Coord::new(0, i), Coord::new(4, i)] {
            assert_eq!(board.kind(coord), FieldKind::Invisible, "{}", coord);
        }
    }

    // Every neighbour of the centre is on the board
    for n in Coord::new(2, 2).neighbors() {
        assert_eq!(board.kind(n), FieldKind::Neutral, "{}", n);
    }
}

#[test]
fn test_playable_counts() {
    for (side, count) in [(1, 1), (2, 7), (3, 19), (4, 37), (11, 331)] {
        assert_eq!(HexBoard::new(side).playable_count(), count, "side {}", side);
    }
}

// ============================================================================
// LETTER POOL
// ============================================================================

#[test]
fn test_deal_and_place() {
    let mut board = HexBoard::new(2);
    let mut pool = LetterPool::with_seed(12, 3);

    assert_eq!(pool.draw_to(Color::Black, 12), 12);
    assert_eq!(pool.rack(Color::Black).len(), 12);
    assert_eq!(pool.bag_len(), 86);

    let letter = pool.rack(Color::Black)[0];
    let center = Coord::new(2, 2);
    board.activate(center).unwrap();
    board.place_letter(center, Color::Black, letter).unwrap();
    assert!(pool.remove_from_rack(Color::Black, letter));

    let field = board.field(center).unwrap();
    assert_eq!(field.kind, FieldKind::Black);
    assert_eq!(field.letter, Some(letter));
    assert!(!field.active);
    assert!(!board.has_active());
    assert_eq!(pool.rack(Color::Black).len(), 11);
}

#[test]
fn test_rare_letter_round_trip() {
    let mut board = HexBoard::new(2);
    let mut pool = LetterPool::with_seed(12, 8);
    pool.draw_to(Color::White, TOTAL_LETTERS);
    assert_eq!(pool.bag_len(), 0);
    assert!(pool.rack_contains(Color::White, 'Q'));

    let coord = Coord::new(1, 2);
    board.place_letter(coord, Color::White, 'Q').unwrap();
    pool.remove_from_rack(Color::White, 'Q');
    assert!(!pool.rack_contains(Color::White, 'Q'));

    let letter = board.clear_field(coord).unwrap();
    assert_eq!(letter, Some('Q'));
    pool.return_to_bag('Q');

    assert_eq!(pool.bag(), &['Q']);
    assert_eq!(board.kind(coord), FieldKind::Neutral);
    assert_eq!(pool.total(), TOTAL_LETTERS);
}

#[test]
fn test_illegal_targets_change_nothing() {
    let mut board = HexBoard::new(2);
    board.place_letter(Coord::new(2, 2), Color::Black, 'A').unwrap();

    assert_eq!(board.activate(Coord::new(0, 0)), Err(GameError::IllegalTarget(Coord::new(0, 0))));
    assert_eq!(board.activate(Coord::new(2, 2)), Err(GameError::IllegalTarget(Coord::new(2, 2))));
    assert!(board.place_letter(Coord::new(2, 2), Color::White, 'B').is_err());
    assert!(board.place_letter(Coord::new(9, 9), Color::White, 'B').is_err());

    let field = board.field(Coord::new(2, 2)).unwrap();
    assert_eq!(field.kind, FieldKind::Black);
    assert_eq!(field.letter, Some('A'));
    assert!(!board.has_active());
}

// ============================================================================
// PLAY PROTOCOL
// ============================================================================

#[test]
fn test_full_turn_by_pointer_and_keys() {
    let mut game = game(3, 21);
    game.set_mode(ActionMode::PlayWhite);

    let target = Coord::new(3, 3);
    assert_eq!(click_field(&mut game, target), Ok(Outcome::Activated { coord: target }));
    assert_eq!(game.state(), PlayState::FieldActive(target));

    let letter = game.pool().rack(Color::White)[0];
    let outcome = game.key(KeyInput::Letter(letter.to_ascii_lowercase())).unwrap();
    assert_eq!(
        outcome,
        Outcome::Placed {
            coord: target,
            color: Color::White,
            letter
        }
    );
    assert_eq!(game.state(), PlayState::Idle);

    // End of move refills the rack
    assert_eq!(game.draw_letters(), 1);
    assert_eq!(game.pool().rack(Color::White).len(), 12);
    assert_eq!(game.letter_count(), TOTAL_LETTERS);

    // Take it back
    game.set_mode(ActionMode::ReturnToRack);
    let outcome = click_field(&mut game, target).unwrap();
    assert!(matches!(outcome, Outcome::ReturnedToRack { color: Color::White, .. }));
    assert_eq!(game.pool().rack(Color::White).len(), 13);
    assert_eq!(game.letter_count(), TOTAL_LETTERS);
}

#[test]
fn test_floating_piece_drop() {
    let mut game = game(2, 2);
    let letter = game.pool().rack(Color::Black)[3];

    game.lift(Color::Black, letter).unwrap();
    assert!(matches!(game.state(), PlayState::FloatingDrag(_)));

    let outcome = click_field(&mut game, Coord::new(2, 1)).unwrap();
    assert!(matches!(outcome, Outcome::Placed { color: Color::Black, .. }));
    assert_eq!(game.board().kind(Coord::new(2, 1)), FieldKind::Black);
    assert!(game.floating().is_none());

    // Escape with nothing going on changes nothing
    assert_eq!(game.key(KeyInput::Escape), Ok(Outcome::Unchanged));
}

#[test]
fn test_random_play_keeps_invariants() {
    let mut game = game(3, 99);
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    let modes = [
        ActionMode::Select,
        ActionMode::PlayBlack,
        ActionMode::PlayWhite,
        ActionMode::ReturnToBag,
        ActionMode::ReturnToRack,
    ];

    for _ in 0..2000 {
        match rng.gen_range(0..6) {
            0 => game.set_mode(modes[rng.gen_range(0..modes.len())]),
            1 | 2 => {
                let x = rng.gen_range(-50.0..1550.0);
                let y = rng.gen_range(-50.0..1350.0);
                let _ = game.click(x, y);
            }
            3 => {
                let letter = (b'A' + rng.gen_range(0..26u8)) as char;
                let _ = game.key(KeyInput::Letter(letter));
            }
            4 => {
                let color = if rng.gen_bool(0.5) { Color::Black } else { Color::White };
                if let Some(&letter) = game.pool().rack(color).first() {
                    let _ = game.lift(color, letter);
                }
            }
            _ => {
                game.draw_letters();
            }
        }

        assert_eq!(game.letter_count(), TOTAL_LETTERS);
        let active = game.board().fields().filter(|(_, f)| f.active).count();
        assert!(active <= 1);
        for (_, field) in game.board().fields() {
            assert_eq!(field.letter.is_some(), field.kind.color().is_some());
        }
    }
}

// ============================================================================
// RENDER CONTRACT
// ============================================================================

#[test]
fn test_partial_repaint_after_placement() {
    let mut game = game(3, 5);
    let mut surface = RecordingSurface::default();

    assert_eq!(game.render(&mut surface), 19);
    assert!(surface.cleared);
    surface.reset();

    // Nothing changed, nothing to paint
    assert_eq!(game.render(&mut surface), 0);

    game.set_mode(ActionMode::PlayBlack);
    let target = Coord::new(3, 3);
    click_field(&mut game, target).unwrap();
    let letter = game.pool().rack(Color::Black)[0];
    game.key(KeyInput::Letter(letter)).unwrap();

    let painted = game.render(&mut surface);
    assert!(!surface.cleared);
    assert!((1..=7).contains(&painted));
    let view = surface.drawn.iter().find(|v| v.coord == target).unwrap();
    assert_eq!(view.kind, FieldKind::Black);
    assert_eq!(view.letter, Some(letter));
    assert_eq!(view.style().fill, "#111");
}
