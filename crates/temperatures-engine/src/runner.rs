//! Deterministic tick loop driving the engine against a scene.
//!
//! Each tick the runner evaluates the scene's entity, applies the tick
//! outcome the way a host would (fire duration only; health is not
//! modelled), tallies damage, and advances the world clock by one tick.

use std::collections::BTreeMap;

use serde::Serialize;
use temperatures_core::ExposureEngine;
use temperatures_types::{ComfortLevel, DamageKind};
use tracing::info;

use crate::scene::Scene;

/// Damage of one kind dealt over a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DamageTally {
    /// Number of times this kind was dealt.
    pub hits: u64,
    /// Total amount dealt.
    pub total: u64,
}

/// Result of running a scene.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunSummary {
    /// Number of ticks executed.
    pub ticks: u64,
    /// Damage dealt, per kind.
    pub damage: BTreeMap<DamageKind, DamageTally>,
    /// Number of ticks on which the entity was (re)ignited.
    pub ignitions: u64,
    /// Exposure after the last tick.
    pub final_exposure: f64,
    /// Comfort band after the last tick.
    pub final_comfort: ComfortLevel,
}

/// Run `scene` for its configured number of ticks.
///
/// The scene is mutated as the run progresses: the clock advances and the
/// entity's fire state follows ignitions.
pub fn run_scene(engine: &ExposureEngine, scene: &mut Scene) -> RunSummary {
    let mut damage: BTreeMap<DamageKind, DamageTally> = BTreeMap::new();
    let mut ignitions = 0_u64;
    let mut fire_ticks = 0_u32;

    for tick in 0..scene.ticks {
        scene.entity.on_fire = fire_ticks > 0;
        let outcome = engine.evaluate(&scene.entity, &scene.world).tick_outcome(tick);

        if let Some((kind, amount)) = outcome.damage {
            let tally = damage.entry(kind).or_default();
            tally.hits = tally.hits.saturating_add(1);
            tally.total = tally.total.saturating_add(u64::from(amount));
            info!(tick, kind = %kind, amount, "damage dealt");
        }

        if let Some(ticks) = outcome.ignite_ticks {
            if fire_ticks == 0 {
                info!(tick, burn_ticks = ticks, "entity ignited");
            }
            ignitions = ignitions.saturating_add(1);
            fire_ticks = fire_ticks.max(ticks);
        }

        fire_ticks = fire_ticks.saturating_sub(1);
        scene.world.advance_time(1);
    }

    let exposure = engine.evaluate(&scene.entity, &scene.world);
    let summary = RunSummary {
        ticks: scene.ticks,
        damage,
        ignitions,
        final_exposure: exposure.compute(),
        final_comfort: exposure.comfort_level(),
    };
    info!(
        ticks = summary.ticks,
        ignitions = summary.ignitions,
        final_exposure = summary.final_exposure,
        final_comfort = ?summary.final_comfort,
        "run complete"
    );
    summary
}
