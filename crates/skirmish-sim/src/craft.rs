//! Craft state and mode-dispatched steering.
//!
//! A craft is plain data; the per-step behavior lives in [`advance`],
//! which operates on the whole roster so offense steering can read the
//! live state of other craft and resolve kills against them.

use serde::{Deserialize, Serialize};

use skirmish_core::constants::{
    DRIFT_BOUND, THROTTLE_RANGE_FACTOR, THROTTLE_SPEED_FACTOR, TURN_DAMPING,
};
use skirmish_core::enums::CraftMode;
use skirmish_core::error::SimError;
use skirmish_core::types::Vec3;

use crate::targeting::TargetSelector;

/// One simulated entity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Craft {
    /// Sight half-angle threshold (radians) gating engagement.
    pub alpha: f64,
    /// Engagement range threshold.
    pub beta: f64,
    /// Per-step displacement magnitude.
    pub speed: f64,
    /// Steering mode, fixed for the craft's lifetime.
    pub mode: CraftMode,
    /// Current position, mutated every step.
    pub position: Vec3,
    /// Current heading; mutated only by offense steering smoothing.
    pub orientation: Vec3,
    /// Starts true; flipped to false by a successful engagement and
    /// never reset.
    pub alive: bool,
    /// Virtual waypoint vector driving neutral drift.
    pub path: Vec3,
    /// Per-step increment applied to `path`; negated when `path`
    /// crosses the drift bound.
    pub path_update: Vec3,
}

impl Craft {
    /// Distance to another craft.
    pub fn distance_to(&self, other: &Craft) -> f64 {
        (other.position - self.position).magnitude()
    }

    /// Angle in radians `[0, π]` between the two crafts' position
    /// vectors, both taken relative to the world origin. This is NOT
    /// an angle-off-nose; the origin-relative measure is the model's
    /// sighting rule.
    pub fn angle_to(&self, other: &Craft) -> Result<f64, SimError> {
        self.position.angle_between(&other.position)
    }

    /// Whether the other craft falls inside this craft's sight cone.
    pub fn is_in_sight(&self, other: &Craft) -> Result<bool, SimError> {
        Ok(self.angle_to(other)? < self.alpha)
    }

    /// One step of bounded oscillating drift.
    fn advance_neutral(&mut self) -> Result<(), SimError> {
        self.position += self.path.to_unit()? * self.speed;
        self.path += self.path_update;
        if self.path.magnitude() > DRIFT_BOUND {
            self.path_update = -self.path_update;
        }
        Ok(())
    }
}

/// Advance the craft at `index` by one step.
///
/// Reads the live roster: motion already applied to earlier craft in
/// the current pass is visible here. The only cross-craft mutation is
/// the kill flag flipped by offense resolution.
pub fn advance(
    roster: &mut [Craft],
    index: usize,
    selector: &dyn TargetSelector,
) -> Result<(), SimError> {
    match roster[index].mode {
        CraftMode::Neutral => roster[index].advance_neutral(),
        CraftMode::Offense => advance_offense(roster, index, selector),
        CraftMode::Defense => Err(SimError::NotImplemented("defense steering")),
    }
}

/// Damped pursuit with range/sight kill resolution.
fn advance_offense(
    roster: &mut [Craft],
    index: usize,
    selector: &dyn TargetSelector,
) -> Result<(), SimError> {
    let target = selector.select(index, roster).ok_or_else(|| {
        SimError::InvariantViolation("offense craft has no distinct target".into())
    })?;
    let target_position = roster[target].position;

    {
        let craft = &mut roster[index];

        // Turn a fixed fraction of the ideal correction per step.
        let normal = craft.position.normal_toward(&target_position)?;
        let desired_turn = craft.orientation.normal_toward(&normal)?;
        craft.orientation += desired_turn * TURN_DAMPING;

        // Throttle down while closing near engagement range.
        let mut throttled = craft.speed;
        if (target_position - craft.position).magnitude() < craft.beta * THROTTLE_RANGE_FACTOR {
            throttled = craft.speed * THROTTLE_SPEED_FACTOR;
        }
        craft.position += craft.orientation.to_unit()? * throttled;
    }

    // Engagement resolution: range and sight must hold together, judged
    // from the post-move position.
    let range = roster[index].distance_to(&roster[target]);
    if range <= roster[index].beta && roster[index].is_in_sight(&roster[target])? {
        roster[target].alive = false;
        tracing::debug!(shooter = index, target, range, "craft destroyed");
    }

    Ok(())
}
