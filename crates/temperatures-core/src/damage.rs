//! Damage decisions handed to the host's tick scheduler.

use serde::Serialize;
use temperatures_types::DamageKind;

/// What the periodic damage check asks the host to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum DamageDecision {
    /// Apply environmental damage.
    Damage {
        /// Source of the damage.
        kind: DamageKind,
        /// Amount of damage.
        amount: u32,
    },
    /// Set the entity on fire instead of dealing damage.
    Ignite {
        /// How long to burn for.
        ticks: u32,
    },
}

/// Everything the host should do to one entity on one tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TickOutcome {
    /// Damage to apply, if the cadence is due and conditions hold.
    pub damage: Option<(DamageKind, u32)>,
    /// Fire duration to set, whenever the entity is burning.
    pub ignite_ticks: Option<u32>,
}

impl TickOutcome {
    /// Whether the host has nothing to do.
    pub const fn is_idle(&self) -> bool {
        self.damage.is_none() && self.ignite_ticks.is_none()
    }
}

/// Whether a check running every `period` ticks is due on `tick`.
///
/// A period of 0 is never due.
pub fn is_due(tick: u64, period: u32) -> bool {
    tick.checked_rem(u64::from(period)) == Some(0)
}
