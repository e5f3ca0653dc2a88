//! Play command - interactive game on the terminal
//!
//! ## Architecture (4-layer granularity)
//!
//! - Level 1: run() - orchestration
//! - Level 2: run_session() - read, apply, redraw loop
//! - Level 3: apply() - one command against the game
//! - Level 4: command parsing
//!
//! Commands are read one per line. Stray input (an occupied field, a letter
//! missing from the rack) changes nothing and is only logged at debug level.

use std::fs;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::Args;

use wordwar_core::{ActionMode, Color, Coord, Game, GameError, KeyInput, Outcome};

use crate::game_args::GameArgs;
use crate::svg::SvgSurface;
use crate::text::{render_board, render_status};

const HELP: &str = "\
commands:
  click X Y          click at canvas pixel (X, Y)
  at COL ROW         click the centre of field (COL, ROW)
  key K              press a key (a letter, esc or backspace)
  mode M             select | black | white | bag | rack
  lift COLOR L       pick letter L up from a rack
  cancel             drop the floating piece and the active field
  draw               refill both racks from the bag
  glow COL ROW on|off
  resize W H         lay the board out on a new canvas
  reset N            new game with side length N
  svg PATH           write the board as SVG
  show               print the board again
  help
  quit";

// ============================================================================
// COMMAND ARGUMENTS (Level 4 - Configuration)
// ============================================================================

#[derive(Args)]
pub struct PlayArgs {
    #[command(flatten)]
    pub game: GameArgs,
}

/// One line of input
#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    Click { x: f64, y: f64 },
    At(Coord),
    Key(KeyInput),
    Mode(ActionMode),
    Lift { color: Color, letter: char },
    Cancel,
    Draw,
    Glow { coord: Coord, on: bool },
    Resize { width: f64, height: f64 },
    Reset(u32),
    Svg(PathBuf),
    Show,
    Help,
    Quit,
}

// ============================================================================
// LEVEL 1 - ORCHESTRATION
// ============================================================================

/// Run play command
pub fn run(args: PlayArgs, file: Option<&Path>, seed: Option<u64>) -> Result<()> {
    let config = args.game.to_config(file, seed)?;
    tracing::info!(
        "New game: side length {}, rack size {}",
        config.side_length,
        config.rack_size
    );
    let mut game = Game::new(config)?;
    warn_shortfall(&game);

    let stdin = io::stdin();
    let stdout = io::stdout();
    run_session(&mut game, stdin.lock(), stdout.lock())
}

// ============================================================================
// LEVEL 2 - PHASES
// ============================================================================

/// Read commands until `quit` or end of input, printing the board after
/// every command that changed something
pub fn run_session<R: BufRead, W: Write>(game: &mut Game, input: R, mut output: W) -> Result<()> {
    print_game(game, &mut output)?;

    for line in input.lines() {
        let line = line.context("Failed to read input")?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let command = match parse_command(line) {
            Ok(command) => command,
            Err(e) => {
                writeln!(output, "{}", e)?;
                continue;
            }
        };

        match command {
            Command::Quit => break,
            Command::Help => writeln!(output, "{}", HELP)?,
            Command::Show => print_game(game, &mut output)?,
            Command::Svg(path) => {
                write_svg(game, &path)?;
                writeln!(output, "wrote {}", path.display())?;
            }
            command => match apply(game, command) {
                Ok(Some(outcome)) => {
                    writeln!(output, "{}", describe(&outcome))?;
                    print_game(game, &mut output)?;
                }
                Ok(None) => print_game(game, &mut output)?,
                Err(e) if e.is_silent() => tracing::debug!("Ignored input: {}", e),
                Err(e) => writeln!(output, "error: {}", e)?,
            },
        }
    }

    Ok(())
}

// ============================================================================
// LEVEL 3 - STEPS
// ============================================================================

/// Apply one game command. `Ok(None)` means the command has no outcome of
/// its own, as with a mode switch.
fn apply(game: &mut Game, command: Command) -> Result<Option<Outcome>, GameError> {
    let outcome = match command {
        Command::Click { x, y } => game.click(x, y)?,
        Command::At(coord) => {
            let center = game.board().layout().center(coord.col, coord.row);
            game.click(center.x, center.y)?
        }
        Command::Key(key) => game.key(key)?,
        Command::Mode(mode) => {
            game.set_mode(mode);
            return Ok(None);
        }
        Command::Lift { color, letter } => game.lift(color, letter)?,
        Command::Cancel => game.cancel(),
        Command::Draw => {
            let drawn = game.draw_letters();
            tracing::info!("Drew {} letters, {} left in the bag", drawn, game.pool().bag_len());
            warn_shortfall(game);
            return Ok(None);
        }
        Command::Glow { coord, on } => {
            game.set_glow(coord, on)?;
            return Ok(None);
        }
        Command::Resize { width, height } => {
            game.resize(width, height)?;
            return Ok(None);
        }
        Command::Reset(side_length) => {
            game.reset(side_length)?;
            tracing::info!("New game with side length {}", side_length);
            warn_shortfall(game);
            return Ok(None);
        }
        Command::Svg(_) | Command::Show | Command::Help | Command::Quit => return Ok(None),
    };
    Ok(Some(outcome))
}

/// Write the current board as an SVG document
pub fn write_svg(game: &mut Game, path: &Path) -> Result<()> {
    let mut surface = SvgSurface::new();
    game.invalidate();
    game.render(&mut surface);
    let config = game.config();
    let doc = surface.finish(config.canvas_width, config.canvas_height);
    fs::write(path, doc).with_context(|| format!("Failed to write SVG: {}", path.display()))?;
    tracing::debug!("Wrote {} fields to {}", surface.len(), path.display());
    Ok(())
}

fn print_game<W: Write>(game: &Game, output: &mut W) -> Result<()> {
    write!(output, "{}", render_board(game.board()))?;
    write!(output, "{}", render_status(game))?;
    Ok(())
}

fn warn_shortfall(game: &Game) {
    let shortfall = game.rack_shortfall();
    if shortfall > 0 {
        tracing::warn!("Bag ran out: racks are {} letters short", shortfall);
    }
}

fn describe(outcome: &Outcome) -> String {
    match outcome {
        Outcome::Activated { coord } => format!("activated {}", coord),
        Outcome::Placed { coord, color, letter } => format!("{} played {} on {}", color, letter, coord),
        Outcome::ReturnedToBag { coord, letter } => format!("{} from {} back to the bag", letter, coord),
        Outcome::ReturnedToRack { coord, color, letter } => {
            format!("{} from {} back to the {} rack", letter, coord, color)
        }
        Outcome::Lifted { piece } => format!("holding {} {}", piece.color, piece.letter),
        Outcome::Cancelled => "cancelled".to_string(),
        Outcome::Missed => "missed the board".to_string(),
        Outcome::Unchanged => "nothing to do".to_string(),
    }
}

// ============================================================================
// LEVEL 4 - PARSING
// ============================================================================

/// Parse one input line
pub fn parse_command(line: &str) -> Result<Command> {
    let words: Vec<&str> = line.split_whitespace().collect();
    let Some((&name, rest)) = words.split_first() else {
        bail!("empty command");
    };

    let command = match (name.to_ascii_lowercase().as_str(), rest) {
        ("click", [x, y]) => Command::Click {
            x: number(x)?,
            y: number(y)?,
        },
        ("at", [col, row]) => Command::At(coord(col, row)?),
        ("key", [key]) => match KeyInput::parse(key) {
            Some(key) => Command::Key(key),
            None => bail!("unknown key: {}", key),
        },
        ("mode", [mode]) => Command::Mode(mode.parse().map_err(anyhow::Error::msg)?),
        ("lift", [color, letter]) => Command::Lift {
            color: color.parse()?,
            letter: single_char(letter)?,
        },
        ("cancel", []) => Command::Cancel,
        ("draw", []) => Command::Draw,
        ("glow", [col, row, state]) => Command::Glow {
            coord: coord(col, row)?,
            on: match *state {
                "on" => true,
                "off" => false,
                other => bail!("expected on or off, got {}", other),
            },
        },
        ("resize", [width, height]) => Command::Resize {
            width: number(width)?,
            height: number(height)?,
        },
        ("reset", [side]) => Command::Reset(
            side.parse()
                .with_context(|| format!("invalid side length: {}", side))?,
        ),
        ("svg", [path]) => Command::Svg(PathBuf::from(path)),
        ("show", []) => Command::Show,
        ("help", []) | ("?", []) => Command::Help,
        ("quit", []) | ("exit", []) => Command::Quit,
        _ => bail!("unknown command: {} (try help)", line),
    };
    Ok(command)
}

fn number(word: &str) -> Result<f64> {
    word.parse().with_context(|| format!("invalid number: {}", word))
}

fn coord(col: &str, row: &str) -> Result<Coord> {
    let col = col.parse().with_context(|| format!("invalid column: {}", col))?;
    let row = row.parse().with_context(|| format!("invalid row: {}", row))?;
    Ok(Coord::new(col, row))
}

fn single_char(word: &str) -> Result<char> {
    let mut chars = word.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_ascii_alphabetic() => Ok(c.to_ascii_uppercase()),
        _ => bail!("expected a single letter, got {}", word),
    }
}

// ============================================================================
// TESTS
// ============================================================================
