//! Render command - write a snapshot of a board
//!
//! ## Architecture (4-layer granularity)
//!
//! - Level 1: run() - orchestration
//! - Level 2: build_game(), write_output()
//! - Level 3: replay_script()
//! - Level 4: draw list collection
//!
//! A script holds play commands, one per line, applied before the snapshot.

use std::fs::File;
use std::io::{self, BufReader};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;

use wordwar_core::{Game, RecordingSurface};
use wordwar_server::DrawCall;

use crate::game_args::GameArgs;
use crate::play::{run_session, write_svg};

// ============================================================================
// COMMAND ARGUMENTS (Level 4 - Configuration)
// ============================================================================

#[derive(Args)]
pub struct RenderArgs {
    #[command(flatten)]
    pub game: GameArgs,

    /// SVG file to write
    #[arg(long, short, default_value = "board.svg")]
    pub output: PathBuf,

    /// Play commands to apply before rendering
    #[arg(long, value_name = "FILE")]
    pub script: Option<PathBuf>,

    /// Print the draw list as JSON instead of writing SVG
    #[arg(long)]
    pub json: bool,
}

// ============================================================================
// LEVEL 1 - ORCHESTRATION
// ============================================================================

/// Run render command
pub fn run(args: RenderArgs, file: Option<&Path>, seed: Option<u64>) -> Result<()> {
    let mut game = build_game(&args, file, seed)?;
    write_output(&mut game, &args)
}

// ============================================================================
// LEVEL 2 - PHASES
// ============================================================================

fn build_game(args: &RenderArgs, file: Option<&Path>, seed: Option<u64>) -> Result<Game> {
    let config = args.game.to_config(file, seed)?;
    let mut game = Game::new(config)?;

    if let Some(script) = &args.script {
        replay_script(&mut game, script)?;
    }

    Ok(game)
}

fn write_output(game: &mut Game, args: &RenderArgs) -> Result<()> {
    if args.json {
        let json = serde_json::to_string_pretty(&draw_list(game))?;
        println!("{}", json);
        return Ok(());
    }

    write_svg(game, &args.output)?;
    tracing::info!(
        "Wrote {} fields to {}",
        game.board().playable_count(),
        args.output.display()
    );
    Ok(())
}

// ============================================================================
// LEVEL 3 - STEPS
// ============================================================================

/// Apply every command in the script file to the game
fn replay_script(game: &mut Game, path: &Path) -> Result<()> {
    let file = File::open(path).with_context(|| format!("Failed to open script: {}", path.display()))?;
    tracing::info!("Replaying {}", path.display());
    run_session(game, BufReader::new(file), io::sink())
}

// ============================================================================
// LEVEL 4 - DRAW LIST
// ============================================================================

/// Every visible field with its resolved style
fn draw_list(game: &mut Game) -> Vec<DrawCall> {
    let mut surface = RecordingSurface::default();
    game.invalidate();
    game.render(&mut surface);
    surface.into_views().into_iter().map(DrawCall::from).collect()
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use wordwar_core::{Color, Coord, FieldKind};

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("wordwar_render_{}_{}", std::process::id(), name))
    }

    fn args(side_length: u32) -> RenderArgs {
        RenderArgs {
            game: GameArgs {
                side_length: Some(side_length),
                ..Default::default()
            },
            output: temp_path("board.svg"),
            script: None,
            json: false,
        }
    }

    #[test]
    fn test_draw_list_covers_board() {
        let mut game = build_game(&args(3), None, Some(1)).unwrap();
        let draws = draw_list(&mut game);
        assert_eq!(draws.len(), 19);
        assert!(draws.iter().all(|d| d.style.fill == "#666"));
    }

    #[test]
    fn test_script_is_replayed() {
        let probe = Game::new(wordwar_core::GameConfig::with_side_length(2).with_seed(9)).unwrap();
        let letter = probe.pool().rack(Color::White)[0];

        let script = temp_path("script.txt");
        fs::write(&script, format!("mode white\nat 1 2\nkey {}\n", letter)).unwrap();
        let mut render_args = args(2);
        render_args.script = Some(script.clone());

        let game = build_game(&render_args, None, Some(9)).unwrap();
        fs::remove_file(&script).ok();

        let field = game.board().field(Coord::new(1, 2)).unwrap();
        assert_eq!(field.kind, FieldKind::White);
        assert_eq!(field.letter, Some(letter));
    }

    #[test]
    fn test_missing_script() {
        let mut render_args = args(2);
        render_args.script = Some(temp_path("missing.txt"));
        assert!(build_game(&render_args, None, None).is_err());
    }

    #[test]
    fn test_writes_svg_file() {
        let render_args = args(2);
        run(args(2), None, Some(4)).unwrap();
        let doc = fs::read_to_string(&render_args.output).unwrap();
        fs::remove_file(&render_args.output).ok();
        assert_eq!(doc.matches("<polygon").count(), 7);
    }
}
