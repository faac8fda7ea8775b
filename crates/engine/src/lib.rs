//! Engine helpers - the active-piece owner around the rotation core
//!
//! [`Controller`] holds the falling piece and the hold slot, forwards every
//! move to the core with the host's collision predicate, and reports committed
//! changes as [`PlacementEvent`]s. [`rotate_to`] reaches a target orientation
//! in one all-or-nothing step.

pub mod controller;
pub mod events;
pub mod place;

pub use controller::{ControlError, Controller};
pub use events::{PlacementEvent, PlacementListener};
pub use place::rotate_to;
