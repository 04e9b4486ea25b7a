//! Simulation constants and tuning parameters.

/// Magnitude bound on a neutral craft's drift vector. When the drift
/// vector grows past this, its per-step increment is negated, giving a
/// bounded reflecting oscillation.
pub const DRIFT_BOUND: f64 = 150.0;

/// Fraction of the ideal steering correction an offense craft applies
/// per step. Models finite turn agility.
pub const TURN_DAMPING: f64 = 0.2;

/// Multiple of the engagement range inside which an offense craft
/// throttles down while closing.
pub const THROTTLE_RANGE_FACTOR: f64 = 1.2;

/// Speed multiplier applied inside the throttle window.
pub const THROTTLE_SPEED_FACTOR: f64 = 0.5;

/// Upper sanity bound on the step budget (exclusive).
pub const MAX_TIME_LIMIT: u32 = 10_000;

/// Upper bound (exclusive) on each initial drift-vector component.
/// Components are drawn uniformly from `[0, DRIFT_INIT_MAX)`.
pub const DRIFT_INIT_MAX: f64 = 1.0;

/// Half-width of the initial drift-increment component range.
/// Components are drawn uniformly from `[-DRIFT_STEP_MAX, DRIFT_STEP_MAX)`.
pub const DRIFT_STEP_MAX: f64 = 0.5;
