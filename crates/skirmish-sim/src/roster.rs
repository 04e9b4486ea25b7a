//! Craft factories for building the fixed simulation roster.
//!
//! The roster is constructed once before the loop begins and never
//! grows or shrinks; destruction is the `alive` flag, not removal.

use rand::Rng;
use rand_chacha::ChaCha8Rng;

use skirmish_core::constants::{DRIFT_INIT_MAX, DRIFT_STEP_MAX};
use skirmish_core::enums::CraftMode;
use skirmish_core::types::Vec3;

use crate::craft::Craft;

/// Build the roster from parallel per-craft lists. The caller has
/// already validated that the lists match in length.
pub fn build_roster(
    alpha: f64,
    beta: f64,
    speeds: &[f64],
    modes: &[CraftMode],
    positions: &[Vec3],
    rng: &mut ChaCha8Rng,
) -> Vec<Craft> {
    speeds
        .iter()
        .zip(modes)
        .zip(positions)
        .map(|((&speed, &mode), &position)| spawn_craft(alpha, beta, speed, mode, position, rng))
        .collect()
}

/// Spawn a single craft with freshly drawn drift vectors.
///
/// Every craft owns its drift state independently; drawing from the
/// passed RNG keeps runs reproducible by seed.
pub fn spawn_craft(
    alpha: f64,
    beta: f64,
    speed: f64,
    mode: CraftMode,
    position: Vec3,
    rng: &mut ChaCha8Rng,
) -> Craft {
    let path = Vec3::new(
        rng.gen_range(0.0..DRIFT_INIT_MAX),
        rng.gen_range(0.0..DRIFT_INIT_MAX),
        rng.gen_range(0.0..DRIFT_INIT_MAX),
    );
    let path_update = Vec3::new(
        rng.gen_range(-DRIFT_STEP_MAX..DRIFT_STEP_MAX),
        rng.gen_range(-DRIFT_STEP_MAX..DRIFT_STEP_MAX),
        rng.gen_range(-DRIFT_STEP_MAX..DRIFT_STEP_MAX),
    );

    Craft {
        alpha,
        beta,
        speed,
        mode,
        position,
        orientation: Vec3::ZERO,
        alive: true,
        path,
        path_update,
    }
}
