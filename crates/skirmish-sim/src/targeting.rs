//! Target selection strategies for offense steering.

use crate::craft::Craft;

/// Strategy for picking an engagement target from the roster.
///
/// The default first-match rule is only meaningful for two-craft
/// engagements; with larger rosters the pick is roster-order arbitrary.
/// Selection sits behind a trait so a multi-craft rule (nearest,
/// highest threat) is a local change.
pub trait TargetSelector {
    /// Pick a target index for the craft at `shooter`, or `None` when
    /// no craft at a distinct position exists.
    fn select(&self, shooter: usize, roster: &[Craft]) -> Option<usize>;
}

/// Default strategy: the first craft in roster order whose position
/// differs from the shooter's. The shooter itself never matches, and
/// neither does a craft sitting exactly on top of it.
#[derive(Debug, Clone, Copy, Default)]
pub struct FirstDistinct;

impl TargetSelector for FirstDistinct {
    fn select(&self, shooter: usize, roster: &[Craft]) -> Option<usize> {
        let own = roster[shooter].position;
        roster.iter().position(|craft| craft.position != own)
    }
}
