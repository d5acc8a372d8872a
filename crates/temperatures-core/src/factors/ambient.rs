//! Warmth and cold radiated by nearby blocks.
//!
//! Every cell of a 16 x 16 x 3 neighborhood is checked against the
//! `warm_blocks` table. A source at squared distance `d` contributes
//! `max(0, 1 - d / 16) * warmth`, so sources fade out at a distance of four
//! blocks. Contributions are folded with [`combine_ambient`].

use temperatures_world::{SamplerConfig, SpatialSampler};

use crate::factor::{EvaluationContext, FactorProvider, NO_ORDER};

/// Squared distance at which a source stops contributing.
pub const AMBIENT_RADIUS_SQUARED: f64 = 16.0;

/// Fold one source's contribution into the running ambient delta.
///
/// - Nothing accumulated yet: take the contribution.
/// - Same sign: keep whichever has the larger magnitude, so a row of
///   campfires is no warmer than the warmest one.
/// - Opposite signs: sum, so opposing sources partially cancel.
pub fn combine_ambient(acc: f64, delta: f64) -> f64 {
    if delta == 0.0 {
        return acc;
    }
    if acc == 0.0 {
        return delta;
    }
    if (acc > 0.0) == (delta > 0.0) {
        if delta.abs() > acc.abs() { delta } else { acc }
    } else {
        acc + delta
    }
}

/// Adds the combined delta of warm and cold blocks around the entity.
///
/// The scan grid is fixed at construction and independent of the biome
/// sampling grid.
#[derive(Debug, Clone, Copy)]
pub struct AmbientFactor {
    scan: SpatialSampler,
}

impl Default for AmbientFactor {
    fn default() -> Self {
        Self::new(SamplerConfig::default())
    }
}

impl AmbientFactor {
    /// Create an ambient factor scanning the given grid.
    pub fn new(scan: SamplerConfig) -> Self {
        Self {
            scan: SpatialSampler::new(scan),
        }
    }

    /// The combined delta of every source around the entity.
    pub fn ambient_delta(&self, ctx: &EvaluationContext<'_>) -> f64 {
        let center = ctx.entity.position;
        self.scan
            .grid_positions(center)
            .into_iter()
            .filter_map(|pos| {
                let warmth = ctx.config.warmth(&ctx.world.block_at(pos))?;
                let falloff = (1.0 - center.distance_squared(pos) / AMBIENT_RADIUS_SQUARED).max(0.0);
                Some(falloff * warmth)
            })
            .fold(0.0, combine_ambient)
    }
}

impl FactorProvider for AmbientFactor {
    fn name(&self) -> &str {
        "ambient"
    }

    fn order(&self) -> i32 {
        NO_ORDER
    }

    fn transform(&self, ctx: &EvaluationContext<'_>, value: f64) -> f64 {
        value + self.ambient_delta(ctx)
    }

    fn override_priority(&self, _ctx: &EvaluationContext<'_>, _old: f64, _new: f64) -> Option<i32> {
        None
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use temperatures_types::{BlockPos, EntitySnapshot};
    use temperatures_world::GridWorld;

    use super::*;
    use crate::config::ExposureConfig;

    fn delta(world: &GridWorld, config: &ExposureConfig) -> f64 {
        let entity = EntitySnapshot::at(BlockPos::new(0, 64, 0));
        let sampler = SpatialSampler::default();
        let ctx = EvaluationContext::new(&entity, world, config, &sampler);
        AmbientFactor::default().ambient_delta(&ctx)
    }

    #[test]
    fn opposite_sources_cancel() {
        assert_eq!([1.0, -1.0].into_iter().fold(0.0, combine_ambient), 0.0);
    }

    #[test]
    fn same_sign_keeps_larger_magnitude() {
        assert_eq!([0.5, 1.0].into_iter().fold(0.0, combine_ambient), 1.0);
        assert_eq!([1.0, 0.5].into_iter().fold(0.0, combine_ambient), 1.0);
        assert_eq!([-0.25, -0.75].into_iter().fold(0.0, combine_ambient), -0.75);
    }

    #[test]
    fn zero_contribution_changes_nothing() {
        assert_eq!(combine_ambient(-0.5, 0.0), -0.5);
        assert_eq!(combine_ambient(0.0, 0.0), 0.0);
    }

    #[test]
    fn source_fades_with_distance() {
        let config = ExposureConfig::default();

        // Lava (1.0) two blocks away: 1 - 4/16 = 0.75.
        let world = GridWorld::default().with_block(BlockPos::new(2, 64, 0), "minecraft:lava");
        assert_eq!(delta(&world, &config), 0.75);

        // Four blocks away contributes nothing.
        let world = GridWorld::default().with_block(BlockPos::new(4, 64, 0), "minecraft:lava");
        assert_eq!(delta(&world, &config), 0.0);
    }

    #[test]
    fn row_of_campfires_is_no_warmer_than_one() {
        let config = ExposureConfig::default();
        let world = GridWorld::default()
            .with_block(BlockPos::new(0, 63, 0), "minecraft:campfire")
            .with_block(BlockPos::new(1, 63, 0), "minecraft:campfire")
            .with_block(BlockPos::new(-1, 63, 0), "minecraft:campfire");
        // Closest is directly below: 0.5 * (1 - 1/16).
        assert!((delta(&world, &config) - 0.5 * 15.0 / 16.0).abs() < 1e-12);
    }

    #[test]
    fn cold_source_offsets_warm_source() {
        let mut config = ExposureConfig::default();
        config.warm_blocks.insert("minecraft:blue_ice".into(), -1.0);
        let world = GridWorld::default()
            .with_block(BlockPos::new(2, 64, 0), "minecraft:lava")
            .with_block(BlockPos::new(-2, 64, 0), "minecraft:blue_ice");
        assert!(delta(&world, &config).abs() < 1e-12);
    }

    #[test]
    fn unlisted_blocks_are_ignored() {
        let world = GridWorld::default().with_block(BlockPos::new(0, 64, 1), "minecraft:stone");
        assert_eq!(delta(&world, &ExposureConfig::default()), 0.0);
    }
}
