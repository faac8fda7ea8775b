//! Placement events
//!
//! The controller reports every committed change (and every rejected
//! rotation) synchronously, in the order it happened. Listeners are plain
//! observers: they cannot veto or alter a change.

use serde::Serialize;
use tetro_kick_core::{Placement, RotationRejected};
use tetro_kick_types::{CellPos, PieceCells, PieceKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum PlacementEvent {
    Spawned {
        kind: PieceKind,
        anchor: CellPos,
    },
    Rotated(Placement),
    /// Hosts typically map this to a "rotation failed" cue
    RotationRejected(RotationRejected),
    Shifted {
        from: CellPos,
        to: CellPos,
    },
    Held {
        /// Kind that went into the hold slot
        stored: PieceKind,
        /// Kind swapped in, `None` when the slot was empty
        active: Option<PieceKind>,
    },
    Released {
        kind: PieceKind,
        cells: PieceCells,
    },
}

/// Observer of placement changes (renderers, sound cues, replays)
pub trait PlacementListener {
    fn on_event(&mut self, event: &PlacementEvent);
}

impl<F> PlacementListener for F
where
    F: FnMut(&PlacementEvent),
{
    fn on_event(&mut self, event: &PlacementEvent) {
        self(event)
    }
}
