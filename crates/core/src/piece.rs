//! Piece module - orientation state of one falling piece
//!
//! A [`Piece`] owns its orientation, the transition it last took, and its anchor
//! on the board. Shape and kick tables are shared, immutable, and validated
//! before a piece can exist, so a rotation never discovers missing data.
//!
//! The only public way to rotate is [`Piece::rotate`] (or
//! [`crate::resolver::attempt_rotation`]), which consults a collision predicate
//! and either commits or leaves the piece untouched. The unconditional
//! quarter-turn is crate-private.

use std::sync::Arc;

use crate::error::TableError;
use crate::kicks::WallKickTable;
use crate::resolver::{attempt_rotation, CollisionPredicate, RotationOutcome};
use crate::shapes::{PieceShape, ShapeTable};
use crate::types::{CellPos, Direction, Orientation, PieceCells, PieceKind, Transition};

/// Active falling piece
#[derive(Debug, Clone)]
pub struct Piece {
    kind: PieceKind,
    shapes: Arc<ShapeTable>,
    kicks: Arc<WallKickTable>,
    orientation: Orientation,
    /// `None` until the first rotation request
    transition: Option<Transition>,
    anchor: CellPos,
}

impl Piece {
    /// Build a piece at orientation 0 with no transition recorded
    ///
    /// Fails fast if the kick table lacks a transition, breaks its zero-offset
    /// convention, or the shapes repeat a cell.
    pub fn new(
        kind: PieceKind,
        shapes: Arc<ShapeTable>,
        kicks: Arc<WallKickTable>,
        anchor: CellPos,
    ) -> Result<Self, TableError> {
        kicks.validate()?;
        shapes.validate(kind)?;

        if !fits_everywhere(&shapes, anchor) {
            return Err(TableError::AnchorOutOfRange { anchor });
        }

        Ok(Self {
            kind,
            shapes,
            kicks,
            orientation: Orientation::North,
            transition: None,
            anchor,
        })
    }

    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// The edge taken by the last successful rotation, `None` before any
    pub fn transition(&self) -> Option<Transition> {
        self.transition
    }

    pub fn anchor(&self) -> CellPos {
        self.anchor
    }

    pub fn wall_kicks(&self) -> &WallKickTable {
        &self.kicks
    }

    pub fn shapes(&self) -> &ShapeTable {
        &self.shapes
    }

    /// Cell offsets for `orientation`, or the current one when `None`
    pub fn cell_offsets(&self, orientation: Option<Orientation>) -> PieceShape {
        *self.shapes.offsets(orientation.unwrap_or(self.orientation))
    }

    /// Iterate the current cell offsets
    pub fn offsets(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        self.shapes.offsets(self.orientation).iter().copied()
    }

    /// Absolute cells of a hypothetical placement
    ///
    /// Returns `None` when a cell would leave the `i8` coordinate range.
    pub fn cells_at(&self, orientation: Orientation, anchor: CellPos) -> Option<PieceCells> {
        translate(self.shapes.offsets(orientation), anchor)
    }

    /// Absolute cells of the current placement
    pub fn cells(&self) -> PieceCells {
        // Every orientation fits at the anchor, so these sums cannot overflow
        self.shapes
            .offsets(self.orientation)
            .map(|(dx, dy)| (self.anchor.0 + dx, self.anchor.1 + dy))
    }

    /// Whether all four orientations stay in coordinate range at `anchor`
    pub(crate) fn fits_at(&self, anchor: CellPos) -> bool {
        fits_everywhere(&self.shapes, anchor)
    }

    /// Force orientation 0 (spawn, hold swap); the transition is left as is
    pub fn reset_orientation(&mut self) {
        self.orientation = Orientation::North;
    }

    /// Rotate through the wall-kick resolver
    ///
    /// On rejection nothing about the piece changes.
    pub fn rotate<P>(&mut self, direction: Direction, predicate: &P) -> RotationOutcome
    where
        P: CollisionPredicate + ?Sized,
    {
        attempt_rotation(self, direction, predicate)
    }

    /// Move by `(dx, dy)` if the translated cells are legal
    pub fn try_translate<P>(&mut self, dx: i8, dy: i8, predicate: &P) -> bool
    where
        P: CollisionPredicate + ?Sized,
    {
        match offset_anchor(self.anchor, (dx, dy)) {
            Some(anchor) => self.try_relocate(anchor, predicate),
            None => false,
        }
    }

    /// Move to `anchor` keeping the orientation, if that placement is legal
    ///
    /// Anchors where some other orientation would leave the coordinate range
    /// are refused, so a later reset or rotation can never overflow.
    pub fn try_relocate<P>(&mut self, anchor: CellPos, predicate: &P) -> bool
    where
        P: CollisionPredicate + ?Sized,
    {
        if !self.fits_at(anchor) {
            return false;
        }
        match self.cells_at(self.orientation, anchor) {
            Some(cells) if predicate.is_legal_placement(&cells) => {
                self.anchor = anchor;
                true
            }
            _ => false,
        }
    }

    /// Unconditional quarter turn
    ///
    /// Records the transition from the pre-turn orientation, then steps the
    /// orientation. Legality is the caller's problem.
    pub(crate) fn rotate_unchecked(&mut self, direction: Direction) -> Transition {
        let transition = Transition::from_parts(self.orientation, direction);
        self.transition = Some(transition);
        self.orientation = self.orientation.rotated(direction);
        transition
    }

    pub(crate) fn set_anchor(&mut self, anchor: CellPos) {
        self.anchor = anchor;
    }
}

/// Anchor plus offset, `None` on `i8` overflow
pub(crate) fn offset_anchor(anchor: CellPos, (dx, dy): (i8, i8)) -> Option<CellPos> {
    Some((anchor.0.checked_add(dx)?, anchor.1.checked_add(dy)?))
}

fn fits_everywhere(shapes: &ShapeTable, anchor: CellPos) -> bool {
    Orientation::ALL
        .iter()
        .all(|&o| translate(shapes.offsets(o), anchor).is_some())
}

pub(crate) fn translate(shape: &PieceShape, anchor: CellPos) -> Option<PieceCells> {
    let mut cells = [(0, 0); 4];
    for (cell, &offset) in cells.iter_mut().zip(shape) {
        *cell = offset_anchor(anchor, offset)?;
    }
    Some(cells)
}
