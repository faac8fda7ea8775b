//! Wall-kick resolver
//!
//! Given a rotation request, walk the piece's kick candidates in table order and
//! accept the first one the collision predicate calls legal:
//!
//! 1. Target orientation = current ± 1 (mod 4) and the matching [`Transition`].
//! 2. Cells of the target orientation at the current anchor.
//! 3. For each candidate `(dx, dy)`, translate those cells and ask the predicate.
//! 4. First legal candidate wins; orientation, transition and anchor are
//!    committed together. If none is legal the piece is left exactly as it was.
//!
//! A rejection is an ordinary outcome, returned as [`RotationRejected`].

use derive_more::Display;
use serde::Serialize;
use tracing::{debug, instrument, trace};

use crate::piece::{offset_anchor, Piece};
use crate::types::{CellPos, Direction, KickOffset, Orientation, PieceCells, Transition};

/// Legality check supplied by the board subsystem
///
/// Must be a synchronous query without side effects.
pub trait CollisionPredicate {
    /// Whether a piece may occupy these four absolute cells
    fn is_legal_placement(&self, cells: &PieceCells) -> bool;
}

impl<F> CollisionPredicate for F
where
    F: Fn(&PieceCells) -> bool,
{
    fn is_legal_placement(&self, cells: &PieceCells) -> bool {
        self(cells)
    }
}

/// Result of an accepted rotation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Placement {
    pub orientation: Orientation,
    pub transition: Transition,
    pub anchor: CellPos,
    /// Offset that made the rotation fit
    pub kick: KickOffset,
    /// Position of `kick` in resolution order (0 = first candidate)
    pub kick_index: usize,
}

/// Every candidate for the transition was illegal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize)]
#[display("rotation {transition} rejected after {candidates_tried} candidates")]
pub struct RotationRejected {
    pub transition: Transition,
    /// Orientation the piece kept
    pub orientation: Orientation,
    /// Anchor the piece kept
    pub anchor: CellPos,
    pub candidates_tried: usize,
}

pub type RotationOutcome = Result<Placement, RotationRejected>;

/// Find where a rotation would land without touching the piece
#[instrument(
    level = "debug",
    skip(piece, predicate),
    fields(kind = piece.kind().as_str(), from = piece.orientation().index())
)]
pub fn resolve_rotation<P>(piece: &Piece, direction: Direction, predicate: &P) -> RotationOutcome
where
    P: CollisionPredicate + ?Sized,
{
    let from = piece.orientation();
    let transition = Transition::from_parts(from, direction);
    let target = transition.to_orientation();
    let anchor = piece.anchor();

    let mut tried = 0;
    for (index, kick) in piece.wall_kicks().candidates(transition).enumerate() {
        tried = index + 1;

        // Candidates that overflow the coordinate range are simply illegal
        let Some(kicked) = offset_anchor(anchor, kick) else {
            trace!(index, dx = kick.0, dy = kick.1, "kick leaves coordinate range");
            continue;
        };
        // The committed anchor must keep every orientation in range
        if !piece.fits_at(kicked) {
            trace!(index, dx = kick.0, dy = kick.1, "kick leaves coordinate range");
            continue;
        }
        let Some(cells) = piece.cells_at(target, kicked) else {
            continue;
        };

        if predicate.is_legal_placement(&cells) {
            debug!(%transition, index, dx = kick.0, dy = kick.1, "rotation accepted");
            return Ok(Placement {
                orientation: target,
                transition,
                anchor: kicked,
                kick,
                kick_index: index,
            });
        }
        trace!(index, dx = kick.0, dy = kick.1, "kick blocked");
    }

    debug!(%transition, tried, "rotation rejected");
    Err(RotationRejected {
        transition,
        orientation: from,
        anchor,
        candidates_tried: tried,
    })
}

/// Resolve a rotation and commit it to the piece on success
///
/// All three fields (orientation, transition, anchor) change together or not
/// at all.
pub fn attempt_rotation<P>(piece: &mut Piece, direction: Direction, predicate: &P) -> RotationOutcome
where
    P: CollisionPredicate + ?Sized,
{
    let placement = resolve_rotation(piece, direction, predicate)?;

    let transition = piece.rotate_unchecked(direction);
    piece.set_anchor(placement.anchor);
    debug_assert_eq!(transition, placement.transition);
    debug_assert_eq!(piece.orientation(), placement.orientation);

    Ok(placement)
}
