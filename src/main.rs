//! Rotation tracer (default binary).
//!
//! Spawns one piece on an optional fixture board, applies a script of moves,
//! and prints one JSON line per placement event to stdout. Logs go to stderr;
//! set `RUST_LOG=debug` (or `trace`) to see every kick candidate tried.
//!
//! ```text
//! kick-trace --piece t --anchor 3,0 --board well.txt cw cw ccw to=2 left down
//! ```

use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{Context, Result};
use clap::Parser;
use serde_json::json;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use tetro_kick::board::Board;
use tetro_kick::core::PieceSet;
use tetro_kick::engine::{rotate_to, Controller};
use tetro_kick::types::{CellPos, Direction, Orientation, PieceKind, SPAWN_POSITION};

#[derive(Debug, Parser)]
#[command(name = "kick-trace", version, about = "Trace SRS rotations and wall kicks")]
struct Cli {
    /// JSON table file; the standard SRS tables when omitted
    #[arg(long, value_name = "FILE")]
    tables: Option<PathBuf>,

    /// ASCII board fixture (`.` empty, piece letter or `#` filled)
    #[arg(long, value_name = "FILE")]
    board: Option<PathBuf>,

    /// Piece kind (i, o, t, s, z, j, l)
    #[arg(long, default_value = "t", value_parser = parse_kind)]
    piece: PieceKind,

    /// Spawn anchor as `x,y`
    #[arg(long, value_parser = parse_anchor)]
    anchor: Option<CellPos>,

    /// Lock the piece into the board after the script and print the board
    #[arg(long)]
    lock: bool,

    /// Print the loaded tables as JSON and exit
    #[arg(long)]
    dump_tables: bool,

    /// Moves: `cw`, `ccw`, `to=<0-3>`, `left`, `right`, `down`
    steps: Vec<Step>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    Rotate(Direction),
    RotateTo(Orientation),
    Shift(i8, i8),
}

impl FromStr for Step {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(direction) = Direction::from_str(s) {
            return Ok(Step::Rotate(direction));
        }
        if let Some(index) = s.strip_prefix("to=") {
            let orientation = index
                .parse::<u8>()
                .map_err(|e| e.to_string())
                .and_then(|i| Orientation::from_index(i).map_err(|e| e.to_string()))?;
            return Ok(Step::RotateTo(orientation));
        }
        match s {
            "left" => Ok(Step::Shift(-1, 0)),
            "right" => Ok(Step::Shift(1, 0)),
            "down" => Ok(Step::Shift(0, 1)),
            other => Err(format!("unknown step {other:?}")),
        }
    }
}

fn parse_kind(s: &str) -> Result<PieceKind, String> {
    PieceKind::from_str(&s.to_ascii_lowercase()).ok_or_else(|| format!("unknown piece {s:?}"))
}

fn parse_anchor(s: &str) -> Result<CellPos, String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected x,y, got {s:?}"))?;
    let x = x.trim().parse::<i8>().map_err(|e| e.to_string())?;
    let y = y.trim().parse::<i8>().map_err(|e| e.to_string())?;
    Ok((x, y))
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    run(cli)
}

fn run(cli: Cli) -> Result<()> {
    let pieces = match &cli.tables {
        Some(path) => PieceSet::from_path(path)
            .with_context(|| format!("loading tables from {}", path.display()))?,
        None => PieceSet::standard(),
    };
    info!(kinds = pieces.len(), "tables loaded");

    if cli.dump_tables {
        println!("{}", pieces.to_json().context("serializing tables")?);
        return Ok(());
    }

    let mut board = match &cli.board {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("reading board {}", path.display()))?;
            Board::from_ascii(&text).with_context(|| format!("parsing board {}", path.display()))?
        }
        None => Board::new(),
    };

    let anchor = cli.anchor.unwrap_or(SPAWN_POSITION);
    let mut controller = Controller::with_spawn_anchor(pieces, anchor);
    controller
        .spawn(cli.piece, &board)
        .with_context(|| format!("spawning {} at {},{}", cli.piece.as_str(), anchor.0, anchor.1))?;
    emit_events(&mut controller)?;

    for step in &cli.steps {
        debug!(?step, "applying step");
        match *step {
            Step::Rotate(direction) => {
                // Accepted or rejected, the outcome is printed from the event queue
                let _outcome = controller.rotate(direction, &board)?;
            }
            Step::RotateTo(target) => {
                if let Err(err) = rotate_to(&mut controller, target, &board) {
                    let line = json!({
                        "event": "error",
                        "code": err.code(),
                        "message": err.message(),
                    });
                    println!("{line}");
                }
            }
            Step::Shift(dx, dy) => {
                controller.shift(dx, dy, &board)?;
            }
        }
        emit_events(&mut controller)?;
    }

    if cli.lock {
        let piece = controller.release()?;
        emit_events(&mut controller)?;
        board.lock_piece(piece).context("locking piece")?;
        let rows: Vec<String> = board.to_ascii().lines().map(str::to_string).collect();
        println!("{}", json!({ "event": "locked", "board": rows }));
    }

    Ok(())
}

fn emit_events(controller: &mut Controller) -> Result<()> {
    for event in controller.take_events() {
        println!("{}", serde_json::to_string(&event)?);
    }
    Ok(())
}
