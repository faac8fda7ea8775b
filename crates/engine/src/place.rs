use tracing::{debug, instrument};

use tetro_kick_core::{CollisionPredicate, Placement};
use tetro_kick_types::{Direction, Orientation};

use crate::controller::{ControlError, Controller};
use crate::events::PlacementEvent;

/// Turn the active piece to `target`, shorter direction first
///
/// Each plan runs on a copy of the piece; only a plan where every step is
/// accepted is committed, so a failure leaves the piece where it was. Both
/// plans are two steps for a half turn. Returns the placements of the
/// committed plan (empty when already at `target`).
#[instrument(level = "debug", skip(controller, predicate), fields(target = target.index()))]
pub fn rotate_to<P>(
    controller: &mut Controller,
    target: Orientation,
    predicate: &P,
) -> Result<Vec<Placement>, ControlError>
where
    P: CollisionPredicate + ?Sized,
{
    let piece = controller.active_mut().ok_or(ControlError::NoActive)?;

    let cw = piece.orientation().cw_distance(target);
    let ccw = (4 - cw) % 4;
    let mut plans = [(Direction::Clockwise, cw), (Direction::CounterClockwise, ccw)];
    if plans[1].1 < plans[0].1 {
        plans.swap(0, 1);
    }

    let mut committed = None;
    for (direction, steps) in plans {
        let mut trial = piece.clone();
        let placements = (0..steps)
            .map(|_| trial.rotate(direction, predicate))
            .collect::<Result<Vec<_>, _>>();
        match placements {
            Ok(placements) => {
                *piece = trial;
                committed = Some(placements);
                break;
            }
            Err(rejected) => debug!(direction = direction.as_str(), %rejected, "rotation plan failed"),
        }
    }

    let placements = committed.ok_or(ControlError::RotationBlocked { target })?;
    for &placement in &placements {
        controller.emit(PlacementEvent::Rotated(placement));
    }
    Ok(placements)
}
