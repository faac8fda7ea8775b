//! Core rotation logic - pure, deterministic, and testable
//!
//! This crate tracks a piece's orientation and resolves rotation requests
//! against an external collision predicate using wall-kick tables. It has
//! **no dependency** on board storage, rendering, or input, making it:
//!
//! - **Deterministic**: the same tables, piece and predicate give the same answer
//! - **Testable**: the predicate is any `Fn(&PieceCells) -> bool`
//! - **Shareable**: tables are immutable and reference-counted
//! - **Fast**: candidate lists are fixed-capacity, no allocation per rotation
//!
//! # Module Structure
//!
//! - [`shapes`]: per-orientation cell offsets, SRS shape data
//! - [`kicks`]: wall-kick tables and the zero-offset convention
//! - [`piece`]: the [`Piece`] state machine
//! - [`resolver`]: candidate walking and the [`CollisionPredicate`] contract
//! - [`piece_set`]: registry/factory of tables per piece kind
//! - [`table_file`]: JSON model for loading tables
//!
//! # Rotation contract
//!
//! - Orientation arithmetic is modulo 4, wrapping 0 → 3 on counter-clockwise.
//! - The transition is looked up from the orientation *before* the turn.
//! - Candidates are tried strictly in table order.
//! - A rejected rotation leaves orientation, transition and anchor unchanged.
//!
//! # Example
//!
//! ```
//! use tetro_kick_core::{PieceSet, PieceCells};
//! use tetro_kick_types::{Direction, Orientation, PieceKind};
//!
//! let set = PieceSet::standard();
//! let board = |cells: &PieceCells| {
//!     cells.iter().all(|&(x, y)| (0..10).contains(&x) && (0..20).contains(&y))
//! };
//!
//! // Hugging the left wall: East fits in place
//! let mut piece = set.spawn(PieceKind::T, (-1, 5)).unwrap();
//! piece.rotate(Direction::Clockwise, &board).unwrap();
//!
//! // South would poke through the wall, so the first kick (+1, 0) is used
//! let placement = piece.rotate(Direction::Clockwise, &board).unwrap();
//! assert_eq!(placement.kick, (1, 0));
//! assert_eq!(piece.orientation(), Orientation::South);
//! assert_eq!(piece.anchor(), (0, 5));
//! ```

pub mod error;
pub mod kicks;
pub mod piece;
pub mod piece_set;
pub mod resolver;
pub mod shapes;
pub mod table_file;

pub use tetro_kick_types as types;

// Re-export commonly used types for convenience
pub use error::TableError;
pub use kicks::{KickConvention, KickList, WallKickTable, MAX_KICKS};
pub use piece::Piece;
pub use piece_set::{PieceSet, PieceSpec};
pub use resolver::{
    attempt_rotation, resolve_rotation, CollisionPredicate, Placement, RotationOutcome,
    RotationRejected,
};
pub use shapes::{standard_shape, PieceShape, ShapeTable};
pub use table_file::{PieceEntry, TableFile};
pub use types::PieceCells;
