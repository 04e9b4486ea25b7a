//! Simulation engine — validates a scenario, owns the craft roster,
//! and drives the fixed-budget step loop to resolution.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use skirmish_core::constants::MAX_TIME_LIMIT;
use skirmish_core::enums::{CraftMode, Outcome};
use skirmish_core::error::SimError;
use skirmish_core::report::SimReport;
use skirmish_core::types::Vec3;

use crate::craft::{self, Craft};
use crate::roster;
use crate::targeting::{FirstDistinct, TargetSelector};

/// Configuration for a simulation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioConfig {
    /// Sight half-angle threshold shared by all craft (radians).
    pub alpha: f64,
    /// Engagement range threshold shared by all craft.
    pub beta: f64,
    /// Per-craft per-step displacement magnitudes.
    pub speeds: Vec<f64>,
    /// Per-craft steering modes.
    pub modes: Vec<CraftMode>,
    /// Per-craft initial positions.
    pub positions: Vec<Vec3>,
    /// Step budget. Must be positive and below the sanity cap.
    pub time_limit: u32,
    /// RNG seed for drift-vector initialisation. Same seed = same run.
    pub seed: u64,
}

/// The simulation. Owns the roster and all loop state.
pub struct Simulation {
    roster: Vec<Craft>,
    selector: Box<dyn TargetSelector>,
    time_limit: u32,
    step: u32,
    history: Vec<Vec<Vec3>>,
    resolution: Option<(Outcome, u32)>,
}

impl std::fmt::Debug for Simulation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Simulation")
            .field("roster", &self.roster)
            .field("selector", &"<dyn TargetSelector>")
            .field("time_limit", &self.time_limit)
            .field("step", &self.step)
            .field("history", &self.history)
            .field("resolution", &self.resolution)
            .finish()
    }
}

impl Simulation {
    /// Build a simulation with the default target-selection strategy.
    pub fn new(config: ScenarioConfig) -> Result<Self, SimError> {
        Self::with_selector(config, Box::new(FirstDistinct))
    }

    /// Build a simulation with a custom target-selection strategy.
    ///
    /// All inputs are validated before any craft is constructed, so a
    /// rejected scenario leaves no partial state behind.
    pub fn with_selector(
        config: ScenarioConfig,
        selector: Box<dyn TargetSelector>,
    ) -> Result<Self, SimError> {
        if config.modes.len() != config.positions.len() {
            return Err(SimError::InvalidArgument(format!(
                "modes ({}) and positions ({}) differ in length",
                config.modes.len(),
                config.positions.len()
            )));
        }
        if config.speeds.len() != config.positions.len() {
            return Err(SimError::InvalidArgument(format!(
                "speeds ({}) and positions ({}) differ in length",
                config.speeds.len(),
                config.positions.len()
            )));
        }
        if config.time_limit == 0 || config.time_limit >= MAX_TIME_LIMIT {
            return Err(SimError::InvalidArgument(format!(
                "time limit {} outside 1..{MAX_TIME_LIMIT}",
                config.time_limit
            )));
        }

        let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
        let roster = roster::build_roster(
            config.alpha,
            config.beta,
            &config.speeds,
            &config.modes,
            &config.positions,
            &mut rng,
        );

        Ok(Self {
            roster,
            selector,
            time_limit: config.time_limit,
            step: 0,
            history: Vec::with_capacity(config.time_limit as usize),
            resolution: None,
        })
    }

    /// Get a read-only view of the roster.
    pub fn roster(&self) -> &[Craft] {
        &self.roster
    }

    /// Get the recorded per-step position snapshots so far.
    pub fn history(&self) -> &[Vec<Vec3>] {
        &self.history
    }

    /// Advance the simulation by one step and return the outcome if
    /// this step resolved the run. A resolved simulation no longer
    /// steps; further calls return the settled outcome unchanged.
    pub fn step(&mut self) -> Result<Option<Outcome>, SimError> {
        if let Some((outcome, _)) = self.resolution {
            return Ok(Some(outcome));
        }

        // Snapshot taken before the pass; this is what history records.
        let snapshot: Vec<Vec3> = self.roster.iter().map(|craft| craft.position).collect();

        // Sequential pass in roster index order. Motion applied to
        // earlier craft is visible to later craft in the same pass;
        // reordering this changes simulation outcomes.
        for index in 0..self.roster.len() {
            craft::advance(&mut self.roster, index, self.selector.as_ref())?;
        }

        self.history.push(snapshot);

        if self.roster.iter().any(|craft| !craft.alive) {
            self.resolution = Some((Outcome::Destruction, self.step));
        } else {
            self.step += 1;
            if self.step == self.time_limit {
                self.resolution = Some((Outcome::Peace, self.time_limit));
            }
        }

        Ok(self.resolution.map(|(outcome, _)| outcome))
    }

    /// Run to resolution and yield the report for the renderer.
    pub fn run(mut self) -> Result<SimReport, SimError> {
        loop {
            if let Some((outcome, end_step)) = self.resolution {
                tracing::info!(?outcome, end_step, "simulation resolved");
                return Ok(SimReport {
                    outcome,
                    end_step,
                    history: self.history,
                });
            }
            self.step()?;
        }
    }
}
