//! Cold water is immediately freezing.

use crate::factor::{EvaluationContext, FactorProvider, RUN_FIRST};
use crate::factors::{FORCED_PRIORITY, PASSIVE_PRIORITY};
use crate::pipeline::{EXTREME_LIMIT, approx_eq};

/// Values below this make water freezing.
const COLD_WATER_THRESHOLD: f64 = -1.0;

/// Forces the extreme cold boundary when a submerged entity is already
/// colder than -1.
///
/// Runs directly after the biome factor so that warm blocks on the shore
/// cannot warm the water up.
#[derive(Debug, Clone, Copy, Default)]
pub struct IceWaterFactor;

impl FactorProvider for IceWaterFactor {
    fn name(&self) -> &str {
        "ice_water"
    }

    fn order(&self) -> i32 {
        RUN_FIRST.saturating_add(1)
    }

    fn transform(&self, ctx: &EvaluationContext<'_>, value: f64) -> f64 {
        if ctx.entity.submerged && value < COLD_WATER_THRESHOLD {
            -EXTREME_LIMIT
        } else {
            value
        }
    }

    fn override_priority(&self, _ctx: &EvaluationContext<'_>, _old: f64, new: f64) -> Option<i32> {
        if approx_eq(new, -EXTREME_LIMIT) {
            Some(FORCED_PRIORITY)
        } else {
            Some(PASSIVE_PRIORITY)
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use temperatures_types::{BlockPos, EntitySnapshot};
    use temperatures_world::{GridWorld, SpatialSampler};

    use super::*;
    use crate::config::ExposureConfig;

    fn run(entity: &EntitySnapshot, value: f64) -> (f64, Option<i32>) {
        let world = GridWorld::default();
        let config = ExposureConfig::default();
        let sampler = SpatialSampler::default();
        let ctx = EvaluationContext::new(entity, &world, &config, &sampler);
        let new = IceWaterFactor.transform(&ctx, value);
        (new, IceWaterFactor.override_priority(&ctx, value, new))
    }

    #[test]
    fn freezes_submerged_entity_in_cold_water() {
        let entity = EntitySnapshot::at(BlockPos::default()).with_submerged(true);
        assert_eq!(run(&entity, -1.5), (-3.0, Some(FORCED_PRIORITY)));
    }

    #[test]
    fn mild_water_passes_through() {
        let entity = EntitySnapshot::at(BlockPos::default()).with_submerged(true);
        assert_eq!(run(&entity, -1.0), (-1.0, Some(PASSIVE_PRIORITY)));
    }

    #[test]
    fn dry_entity_passes_through() {
        let entity = EntitySnapshot::at(BlockPos::default());
        assert_eq!(run(&entity, -2.0), (-2.0, Some(PASSIVE_PRIORITY)));
    }
}
