//! Spatial sampling of the neighborhood around an entity.
//!
//! Biome borders are hard lines in the world, but an entity standing one
//! block from a desert should not feel a step change when it crosses. The
//! sampler looks at a square grid of cells around the entity and reports
//! what share of the grid each biome covers; the biome factor then blends
//! the configured biome temperatures by those shares.
//!
//! # Grid Layout
//!
//! With `samples = 256` and `interval = 1` the grid is 16 x 16 cells, offset
//! so the entity sits just past the middle (offsets `-8..=7` on both
//! horizontal axes). With vertical layers enabled the same grid is taken at
//! the entity's feet, one cell below, and one cell above, for 768 cells.
//!
//! The grid side is `floor(sqrt(samples))`, so sample counts that are not
//! perfect squares are rounded down.

use serde::{Deserialize, Serialize};
use temperatures_types::{BiomeId, BiomeSample, BlockPos};
use tracing::warn;

use crate::view::WorldView;

/// Shape of the sampling grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SamplerConfig {
    /// Target number of cells per horizontal layer.
    #[serde(default = "default_samples")]
    pub samples: u32,

    /// Distance between neighboring sample cells.
    #[serde(default = "default_interval")]
    pub interval: i32,

    /// Whether to also sample one layer below and one above the feet.
    #[serde(default = "default_true")]
    pub vertical_layers: bool,
}

impl Default for SamplerConfig {
    fn default() -> Self {
        Self {
            samples: default_samples(),
            interval: default_interval(),
            vertical_layers: true,
        }
    }
}

impl SamplerConfig {
    /// Number of cells along one side of a horizontal layer.
    pub const fn side(&self) -> u32 {
        self.samples.isqrt()
    }

    /// Total number of cells the grid visits.
    pub const fn total_cells(&self) -> u32 {
        let per_layer = self.side().saturating_mul(self.side());
        if self.vertical_layers {
            per_layer.saturating_mul(3)
        } else {
            per_layer
        }
    }
}

/// Samples neighborhoods of cells and turns them into biome weights.
///
/// Holds no per-call state, so one sampler can be shared by every
/// evaluation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SpatialSampler {
    config: SamplerConfig,
}

impl SpatialSampler {
    /// Create a sampler with the given grid shape.
    pub fn new(config: SamplerConfig) -> Self {
        if config.total_cells() == 0 {
            warn!(
                samples = config.samples,
                "sampler grid has no cells; biome sampling will always be empty"
            );
        }
        Self { config }
    }

    /// Return the grid shape.
    pub const fn config(&self) -> &SamplerConfig {
        &self.config
    }

    /// Every cell the grid visits around `center`, layer by layer
    /// (feet, below, above).
    pub fn grid_positions(&self, center: BlockPos) -> Vec<BlockPos> {
        let mut positions = layer_positions(center, &self.config);
        if self.config.vertical_layers {
            positions.extend(layer_positions(center.below(), &self.config));
            positions.extend(layer_positions(center.above(), &self.config));
        }
        positions
    }

    /// Sample the biomes around `center` and weight each distinct biome by
    /// the share of grid cells it covers.
    ///
    /// Biomes appear in the order they are first encountered in the grid.
    /// Weights of a non-empty result sum to 1.0. A grid with no cells yields
    /// an empty result, which callers treat as a zero contribution.
    pub fn sample_weighted_biomes(&self, world: &dyn WorldView, center: BlockPos) -> Vec<BiomeSample> {
        let positions = self.grid_positions(center);
        let Ok(total) = u32::try_from(positions.len()) else {
            return Vec::new();
        };
        if total == 0 {
            return Vec::new();
        }

        let mut counts: Vec<(BiomeId, u32)> = Vec::new();
        for pos in positions {
            let biome = world.biome_at(pos);
            match counts.iter_mut().find(|(seen, _)| *seen == biome) {
                Some((_, count)) => *count = count.saturating_add(1),
                None => counts.push((biome, 1)),
            }
        }

        let total = f64::from(total);
        counts
            .into_iter()
            .map(|(biome, count)| BiomeSample {
                biome,
                weight: f64::from(count) / total,
            })
            .collect()
    }
}

/// Weighted average of `(value, weight)` pairs.
///
/// Returns 0.0 when there are no pairs or the weights sum to zero, rather
/// than dividing by zero.
pub fn weighted_average(points: impl IntoIterator<Item = (f64, f64)>) -> f64 {
    let (weighted_sum, total_weight) = points
        .into_iter()
        .fold((0.0_f64, 0.0_f64), |(sum, total), (value, weight)| {
            (value.mul_add(weight, sum), total + weight)
        });

    if total_weight > 0.0 {
        weighted_sum / total_weight
    } else {
        0.0
    }
}

/// One horizontal layer of the grid around `center`.
fn layer_positions(center: BlockPos, config: &SamplerConfig) -> Vec<BlockPos> {
    let side = i32::try_from(config.side()).unwrap_or(i32::MAX);
    let interval = config.interval;
    let half_length = interval.saturating_mul(side).checked_div(2).unwrap_or(0);

    let mut positions = Vec::with_capacity(usize::try_from(config.side()).unwrap_or(0).saturating_pow(2));
    for sx in 0..side {
        for sz in 0..side {
            let dx = sx.saturating_mul(interval).saturating_sub(half_length);
            let dz = sz.saturating_mul(interval).saturating_sub(half_length);
            positions.push(center.offset(dx, 0, dz));
        }
    }
    positions
}

const fn default_samples() -> u32 {
    256
}

const fn default_interval() -> i32 {
    1
}

const fn default_true() -> bool {
    true
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use crate::grid::{BiomeRegion, GridWorld};

    fn split_world() -> GridWorld {
        // Plains everywhere, desert for x >= 0.
        GridWorld::new("minecraft:overworld", "minecraft:plains").with_region(BiomeRegion::columns(
            "minecraft:desert",
            (0, i32::MIN),
            (i32::MAX, i32::MAX),
        ))
    }

    #[test]
    fn default_grid_has_768_cells() {
        let sampler = SpatialSampler::default();
        assert_eq!(sampler.grid_positions(BlockPos::new(0, 64, 0)).len(), 768);
        assert_eq!(sampler.config().total_cells(), 768);
    }

    #[test]
    fn grid_spans_minus_eight_to_seven() {
        let sampler = SpatialSampler::new(SamplerConfig {
            vertical_layers: false,
            ..SamplerConfig::default()
        });
        let positions = sampler.grid_positions(BlockPos::new(100, 64, -50));
        let min_x = positions.iter().map(|p| p.x).min().unwrap();
        let max_x = positions.iter().map(|p| p.x).max().unwrap();
        let min_z = positions.iter().map(|p| p.z).min().unwrap();
        let max_z = positions.iter().map(|p| p.z).max().unwrap();
        assert_eq!((min_x, max_x), (92, 107));
        assert_eq!((min_z, max_z), (-58, -43));
        assert!(positions.iter().all(|p| p.y == 64));
    }

    #[test]
    fn vertical_layers_cover_feet_below_and_above() {
        let sampler = SpatialSampler::default();
        let positions = sampler.grid_positions(BlockPos::new(0, 10, 0));
        for y in [9, 10, 11] {
            assert_eq!(positions.iter().filter(|p| p.y == y).count(), 256);
        }
    }

    #[test]
    fn interval_spreads_the_grid() {
        let sampler = SpatialSampler::new(SamplerConfig {
            samples: 64,
            interval: 2,
            vertical_layers: false,
        });
        let positions = sampler.grid_positions(BlockPos::new(0, 0, 0));
        assert_eq!(positions.len(), 64);
        assert_eq!(positions[0], BlockPos::new(-8, 0, -8));
        assert_eq!(positions[1], BlockPos::new(-8, 0, -6));
    }

    #[test]
    fn uniform_world_yields_single_full_weight() {
        let world = GridWorld::new("minecraft:overworld", "minecraft:plains");
        let samples = SpatialSampler::default().sample_weighted_biomes(&world, BlockPos::new(0, 64, 0));
        assert_eq!(samples.len(), 1);
        assert_eq!(samples[0].biome, BiomeId::from("minecraft:plains"));
        assert_eq!(samples[0].weight, 1.0);
    }

    #[test]
    fn border_splits_weight_by_covered_share() {
        let world = split_world();
        let samples = SpatialSampler::default().sample_weighted_biomes(&world, BlockPos::new(0, 64, 0));
        assert_eq!(samples.len(), 2);

        // Offsets -8..=-1 are plains (8 columns), 0..=7 are desert (8 columns).
        let plains = samples.iter().find(|s| s.biome.as_str() == "minecraft:plains").unwrap();
        let desert = samples.iter().find(|s| s.biome.as_str() == "minecraft:desert").unwrap();
        assert!((plains.weight - 0.5).abs() < 1e-12);
        assert!((desert.weight - 0.5).abs() < 1e-12);
    }

    #[test]
    fn weights_sum_to_one() {
        let world = split_world();
        let sampler = SpatialSampler::default();
        for x in [-20, -5, -1, 0, 3, 9] {
            let samples = sampler.sample_weighted_biomes(&world, BlockPos::new(x, 70, 0));
            let total: f64 = samples.iter().map(|s| s.weight).sum();
            assert!((total - 1.0).abs() < 1e-9, "weights sum to {total} at x={x}");
        }
    }

    #[test]
    fn empty_grid_yields_empty_samples() {
        let world = split_world();
        let sampler = SpatialSampler::new(SamplerConfig {
            samples: 0,
            ..SamplerConfig::default()
        });
        assert!(sampler.sample_weighted_biomes(&world, BlockPos::default()).is_empty());
    }

    #[test]
    fn weighted_average_guards_zero_weight() {
        assert_eq!(weighted_average(Vec::new()), 0.0);
        assert_eq!(weighted_average(vec![(5.0, 0.0)]), 0.0);
        assert_eq!(weighted_average(vec![(2.0, 0.25), (-2.0, 0.75)]), -1.0);
    }
}
