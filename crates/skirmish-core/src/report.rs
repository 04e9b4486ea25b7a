//! Simulation report — the complete result handed to the rendering
//! collaborator after a run resolves.

use serde::{Deserialize, Serialize};

use crate::enums::Outcome;
use crate::types::Vec3;

/// Result of a completed simulation run.
///
/// The rendering collaborator consumes this wholesale; the core has no
/// output obligation beyond producing it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimReport {
    /// How the run resolved.
    pub outcome: Outcome,
    /// Step index at which the outcome was reached. For `Peace` this is
    /// the full step budget; for `Destruction` it is the index of the
    /// step in which the first kill was detected.
    pub end_step: u32,
    /// One snapshot per completed step, each holding the pre-step
    /// position of every craft in roster order.
    pub history: Vec<Vec<Vec3>>,
}
