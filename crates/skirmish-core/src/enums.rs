//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Steering mode governing a craft's per-step motion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CraftMode {
    /// Bounded oscillating drift along a virtual waypoint vector.
    Neutral,
    /// Damped pursuit of a target with range/sight kill resolution.
    Offense,
    /// Evasion. Not implemented in this version; advancing a Defense
    /// craft is a deterministic failure.
    Defense,
}

/// Terminal outcome of a simulation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// No craft was destroyed within the step budget.
    Peace,
    /// At least one craft was destroyed.
    Destruction,
}
