//! Active-piece controller
//!
//! Owns at most one falling piece plus the hold slot, and routes every change
//! through the rotation core so the board predicate is always consulted.

use std::fmt;

use derive_more::{Display, Error, From};
use tracing::{debug, instrument};

use tetro_kick_core::{CollisionPredicate, Piece, PieceSet, RotationOutcome, TableError};
use tetro_kick_types::{CellPos, Direction, Orientation, PieceKind, SPAWN_POSITION};

use crate::events::{PlacementEvent, PlacementListener};

#[derive(Debug, Display, Error, From)]
pub enum ControlError {
    #[display("no active piece")]
    NoActive,

    #[display("a piece is already active")]
    AlreadyActive,

    #[display("{} piece cannot spawn: placement blocked", kind.as_str())]
    SpawnBlocked { kind: PieceKind },

    #[display("hold already used for this piece")]
    HoldUnavailable,

    #[display("could not rotate to orientation {}", target.index())]
    RotationBlocked { target: Orientation },

    #[display("table error: {_0}")]
    #[from]
    Table(TableError),
}

impl ControlError {
    pub fn code(&self) -> &'static str {
        match self {
            ControlError::HoldUnavailable => "hold_unavailable",
            ControlError::SpawnBlocked { .. } => "spawn_blocked",
            ControlError::Table(_) => "invalid_tables",
            ControlError::NoActive
            | ControlError::AlreadyActive
            | ControlError::RotationBlocked { .. } => "invalid_move",
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            ControlError::NoActive => "no active piece",
            ControlError::AlreadyActive => "a piece is already in play",
            ControlError::SpawnBlocked { .. } => "spawn position is blocked",
            ControlError::HoldUnavailable => "hold requested when unavailable",
            ControlError::RotationBlocked { .. } => "could not rotate to target orientation",
            ControlError::Table(_) => "piece tables are missing or invalid",
        }
    }
}

pub struct Controller {
    pieces: PieceSet,
    spawn_anchor: CellPos,
    active: Option<Piece>,
    /// Held piece, always stored at orientation 0
    hold: Option<Piece>,
    can_hold: bool,
    listeners: Vec<Box<dyn PlacementListener>>,
    /// Events not yet taken by the host
    pending: Vec<PlacementEvent>,
}

impl fmt::Debug for Controller {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Controller")
            .field("spawn_anchor", &self.spawn_anchor)
            .field("active", &self.active)
            .field("hold", &self.hold.as_ref().map(Piece::kind))
            .field("can_hold", &self.can_hold)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl Controller {
    pub fn new(pieces: PieceSet) -> Self {
        Self::with_spawn_anchor(pieces, SPAWN_POSITION)
    }

    pub fn with_spawn_anchor(pieces: PieceSet, spawn_anchor: CellPos) -> Self {
        Self {
            pieces,
            spawn_anchor,
            active: None,
            hold: None,
            can_hold: true,
            listeners: Vec::new(),
            pending: Vec::new(),
        }
    }

    pub fn pieces(&self) -> &PieceSet {
        &self.pieces
    }

    pub fn spawn_anchor(&self) -> CellPos {
        self.spawn_anchor
    }

    pub fn active(&self) -> Option<&Piece> {
        self.active.as_ref()
    }

    pub fn held(&self) -> Option<PieceKind> {
        self.hold.as_ref().map(Piece::kind)
    }

    pub fn can_hold(&self) -> bool {
        self.can_hold
    }

    pub fn subscribe(&mut self, listener: impl PlacementListener + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Take the events recorded since the last call
    pub fn take_events(&mut self) -> Vec<PlacementEvent> {
        std::mem::take(&mut self.pending)
    }

    /// Bring a new piece into play at the spawn anchor
    #[instrument(level = "debug", skip(self, predicate))]
    pub fn spawn<P>(&mut self, kind: PieceKind, predicate: &P) -> Result<&Piece, ControlError>
    where
        P: CollisionPredicate + ?Sized,
    {
        if self.active.is_some() {
            return Err(ControlError::AlreadyActive);
        }

        let piece = self.pieces.spawn(kind, self.spawn_anchor)?;
        if !predicate.is_legal_placement(&piece.cells()) {
            debug!("spawn blocked");
            return Err(ControlError::SpawnBlocked { kind });
        }

        let anchor = piece.anchor();
        self.emit(PlacementEvent::Spawned { kind, anchor });
        Ok(&*self.active.insert(piece))
    }

    /// Rotate the active piece through the wall-kick resolver
    ///
    /// A rejected rotation is `Ok(Err(_))`: the request was valid, the board
    /// just had no room.
    #[instrument(level = "debug", skip(self, predicate))]
    pub fn rotate<P>(
        &mut self,
        direction: Direction,
        predicate: &P,
    ) -> Result<RotationOutcome, ControlError>
    where
        P: CollisionPredicate + ?Sized,
    {
        let piece = self.active.as_mut().ok_or(ControlError::NoActive)?;
        let outcome = piece.rotate(direction, predicate);
        self.emit(match outcome {
            Ok(placement) => PlacementEvent::Rotated(placement),
            Err(rejected) => PlacementEvent::RotationRejected(rejected),
        });
        Ok(outcome)
    }

    /// Translate the active piece; `Ok(false)` when the move is illegal
    pub fn shift<P>(&mut self, dx: i8, dy: i8, predicate: &P) -> Result<bool, ControlError>
    where
        P: CollisionPredicate + ?Sized,
    {
        let piece = self.active.as_mut().ok_or(ControlError::NoActive)?;
        let from = piece.anchor();
        if !piece.try_translate(dx, dy, predicate) {
            return Ok(false);
        }
        let to = piece.anchor();
        self.emit(PlacementEvent::Shifted { from, to });
        Ok(true)
    }

    /// Swap the active piece with the hold slot
    ///
    /// The outgoing piece is stored at orientation 0. A previously held piece
    /// comes back at the spawn anchor; with an empty slot nothing is active
    /// afterwards and the host spawns the next piece. Returns the kind now in
    /// play. Hold is available again only after a piece is released.
    #[instrument(level = "debug", skip(self, predicate))]
    pub fn hold<P>(&mut self, predicate: &P) -> Result<Option<PieceKind>, ControlError>
    where
        P: CollisionPredicate + ?Sized,
    {
        if !self.can_hold {
            return Err(ControlError::HoldUnavailable);
        }
        if self.active.is_none() {
            return Err(ControlError::NoActive);
        }

        let mut incoming = self.hold.take();
        if let Some(piece) = incoming.as_mut() {
            if !piece.try_relocate(self.spawn_anchor, predicate) {
                let kind = piece.kind();
                self.hold = incoming;
                return Err(ControlError::SpawnBlocked { kind });
            }
        }

        let mut outgoing = self.active.take().ok_or(ControlError::NoActive)?;
        outgoing.reset_orientation();
        let stored = outgoing.kind();
        let active = incoming.as_ref().map(Piece::kind);

        self.hold = Some(outgoing);
        self.active = incoming;
        self.can_hold = false;
        self.emit(PlacementEvent::Held { stored, active });
        Ok(active)
    }

    /// Take the active piece out of play (to lock it, or discard it)
    pub fn release(&mut self) -> Result<Piece, ControlError> {
        let piece = self.active.take().ok_or(ControlError::NoActive)?;
        self.can_hold = true;
        self.emit(PlacementEvent::Released {
            kind: piece.kind(),
            cells: piece.cells(),
        });
        Ok(piece)
    }

    pub(crate) fn active_mut(&mut self) -> Option<&mut Piece> {
        self.active.as_mut()
    }

    pub(crate) fn emit(&mut self, event: PlacementEvent) {
        for listener in &mut self.listeners {
            listener.on_event(&event);
        }
        self.pending.push(event);
    }
}
