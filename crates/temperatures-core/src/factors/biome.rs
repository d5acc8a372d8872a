//! The baseline factor: a blend of nearby biome temperatures.

use temperatures_world::{day_progress, weighted_average};

use crate::factor::{EvaluationContext, FactorProvider, RUN_FIRST};

/// Replaces the running value with the weighted average of the sampled
/// biomes' temperatures at the current time of day.
///
/// Unconfigured biomes count as 0.0. An empty sample yields 0.0.
#[derive(Debug, Clone, Copy, Default)]
pub struct BiomeFactor;

impl FactorProvider for BiomeFactor {
    fn name(&self) -> &str {
        "biome"
    }

    fn order(&self) -> i32 {
        RUN_FIRST
    }

    fn transform(&self, ctx: &EvaluationContext<'_>, _value: f64) -> f64 {
        let progress = day_progress(ctx.world.day_time());
        let samples = ctx
            .sampler
            .sample_weighted_biomes(ctx.world, ctx.entity.position);

        weighted_average(
            samples
                .iter()
                .map(|sample| (ctx.config.biome_temperature(&sample.biome, progress), sample.weight)),
        )
    }

    fn override_priority(&self, _ctx: &EvaluationContext<'_>, _old: f64, _new: f64) -> Option<i32> {
        None
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use temperatures_types::{BlockPos, EntitySnapshot};
    use temperatures_world::{BiomeRegion, GridWorld, SamplerConfig, SpatialSampler};

    use super::*;
    use crate::config::{BiomeTemperature, ExposureConfig};

    fn config() -> ExposureConfig {
        let mut config = ExposureConfig::default();
        config.biomes.insert("minecraft:plains".into(), BiomeTemperature::new(2.0, -2.0));
        config.biomes.insert("minecraft:desert".into(), BiomeTemperature::new(3.0, 1.0));
        config
    }

    #[test]
    fn follows_the_day_cycle() {
        let config = config();
        let sampler = SpatialSampler::default();
        let entity = EntitySnapshot::at(BlockPos::new(0, 64, 0));

        for (time, expected) in [(6_000, 2.0), (18_000, -2.0), (0, 0.0)] {
            let world = GridWorld::default().with_day_time(time);
            let ctx = EvaluationContext::new(&entity, &world, &config, &sampler);
            assert!((BiomeFactor.transform(&ctx, 1.25) - expected).abs() < 1e-9, "at {time}");
        }
    }

    #[test]
    fn blends_across_a_border() {
        let config = config();
        let sampler = SpatialSampler::default();
        let entity = EntitySnapshot::at(BlockPos::new(0, 64, 0));
        let world = GridWorld::default()
            .with_day_time(6_000)
            .with_region(BiomeRegion::columns("minecraft:desert", (0, -100), (100, 100)));
        let ctx = EvaluationContext::new(&entity, &world, &config, &sampler);

        // Half plains (2.0), half desert (3.0).
        assert!((BiomeFactor.transform(&ctx, 0.0) - 2.5).abs() < 1e-9);
    }

    #[test]
    fn unconfigured_biome_and_empty_grid_read_zero() {
        let config = config();
        let entity = EntitySnapshot::at(BlockPos::default());
        let world = GridWorld::new("minecraft:overworld", "minecraft:ocean").with_day_time(6_000);

        let sampler = SpatialSampler::default();
        let ctx = EvaluationContext::new(&entity, &world, &config, &sampler);
        assert_eq!(BiomeFactor.transform(&ctx, 1.0), 0.0);

        let empty = SpatialSampler::new(SamplerConfig {
            samples: 0,
            ..SamplerConfig::default()
        });
        let world = GridWorld::default().with_day_time(6_000);
        let ctx = EvaluationContext::new(&entity, &world, &config, &empty);
        assert_eq!(BiomeFactor.transform(&ctx, 1.0), 0.0);
    }
}
