//! Tetromino rotation and wall-kick resolution (workspace facade crate).
//!
//! The implementation lives in dedicated crates under `crates/`; this package
//! re-exports them as `tetro_kick::{types, core, board, engine}` and ships the
//! `kick-trace` binary.

pub use tetro_kick_board as board;
pub use tetro_kick_core as core;
pub use tetro_kick_engine as engine;
pub use tetro_kick_types as types;
