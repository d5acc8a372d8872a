//! An in-memory world for scenes, replays and tests.
//!
//! [`GridWorld`] paints biomes as axis-aligned column regions over a default
//! biome, places individual blocks over a default of air, and keeps a single
//! clock and weather state. Scene files describe it in YAML or JSON; loading
//! validates the description and indexes the placed blocks.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use temperatures_types::{BiomeId, BlockId, BlockPos, DimensionId, Precipitation};

use crate::error::WorldError;
use crate::view::WorldView;

/// Block reported for every cell nothing was placed in.
pub const AIR: &str = "minecraft:air";

// ---------------------------------------------------------------------------
// Parts
// ---------------------------------------------------------------------------

/// A box of columns painted with one biome.
///
/// The horizontal bounds are inclusive. Without vertical bounds the region
/// covers every height.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BiomeRegion {
    /// The biome this region paints.
    pub biome: BiomeId,
    /// Smallest covered x.
    pub min_x: i32,
    /// Smallest covered z.
    pub min_z: i32,
    /// Largest covered x.
    pub max_x: i32,
    /// Largest covered z.
    pub max_z: i32,
    /// Smallest covered y, if bounded below.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_y: Option<i32>,
    /// Largest covered y, if bounded above.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_y: Option<i32>,
}

impl BiomeRegion {
    /// A region covering every height between two `(x, z)` corners.
    pub fn columns(biome: impl Into<BiomeId>, min: (i32, i32), max: (i32, i32)) -> Self {
        Self {
            biome: biome.into(),
            min_x: min.0,
            min_z: min.1,
            max_x: max.0,
            max_z: max.1,
            min_y: None,
            max_y: None,
        }
    }

    /// Restrict the region to heights in `min..=max`.
    #[must_use]
    pub fn with_heights(mut self, min: i32, max: i32) -> Self {
        self.min_y = Some(min);
        self.max_y = Some(max);
        self
    }

    /// Whether the region covers `pos`.
    pub fn contains(&self, pos: BlockPos) -> bool {
        (self.min_x..=self.max_x).contains(&pos.x)
            && (self.min_z..=self.max_z).contains(&pos.z)
            && self.min_y.is_none_or(|min| pos.y >= min)
            && self.max_y.is_none_or(|max| pos.y <= max)
    }

    fn check(&self, index: usize) -> Result<(), WorldError> {
        let inverted = |axis| WorldError::InvertedRegion {
            index,
            biome: self.biome.to_string(),
            axis,
        };
        if self.min_x > self.max_x {
            return Err(inverted('x'));
        }
        if self.min_z > self.max_z {
            return Err(inverted('z'));
        }
        if let (Some(min), Some(max)) = (self.min_y, self.max_y) {
            if min > max {
                return Err(inverted('y'));
            }
        }
        Ok(())
    }
}

/// One block placed at one cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacedBlock {
    /// Where the block sits.
    pub pos: BlockPos,
    /// What the block is.
    pub block: BlockId,
}

/// Global weather of the world.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct WeatherState {
    /// Whether it is raining (or snowing, depending on the biome).
    #[serde(default)]
    pub raining: bool,
    /// Strength of the rain in `[0, 1]`.
    #[serde(default)]
    pub intensity: f64,
}

impl WeatherState {
    /// Clear skies.
    pub const fn clear() -> Self {
        Self {
            raining: false,
            intensity: 0.0,
        }
    }

    /// Rain at the given strength.
    ///
    /// # Errors
    ///
    /// Returns [`WorldError::InvalidIntensity`] unless `intensity` is a
    /// finite value in `[0, 1]`.
    pub fn rain(intensity: f64) -> Result<Self, WorldError> {
        let state = Self {
            raining: true,
            intensity,
        };
        state.check()?;
        Ok(state)
    }

    fn check(&self) -> Result<(), WorldError> {
        if self.intensity.is_finite() && (0.0..=1.0).contains(&self.intensity) {
            Ok(())
        } else {
            Err(WorldError::InvalidIntensity(self.intensity))
        }
    }
}

/// Per-biome precipitation behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BiomeClimate {
    /// Whether anything falls in this biome when it rains.
    #[serde(default = "default_true")]
    pub has_precipitation: bool,
    /// Height at and above which rain falls as snow.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub snow_line: Option<i32>,
}

impl Default for BiomeClimate {
    fn default() -> Self {
        Self {
            has_precipitation: true,
            snow_line: None,
        }
    }
}

impl BiomeClimate {
    /// A biome where nothing ever falls (deserts, savannas).
    pub const fn dry() -> Self {
        Self {
            has_precipitation: false,
            snow_line: None,
        }
    }

    /// A biome where rain turns to snow from `height` upward.
    pub const fn snowy_above(height: i32) -> Self {
        Self {
            has_precipitation: true,
            snow_line: Some(height),
        }
    }
}

// ---------------------------------------------------------------------------
// GridWorld
// ---------------------------------------------------------------------------

/// Serialized form of a [`GridWorld`].
#[derive(Debug, Clone, Serialize, Deserialize)]
struct GridWorldSpec {
    #[serde(default = "default_dimension")]
    dimension: DimensionId,
    #[serde(default = "default_biome")]
    default_biome: BiomeId,
    #[serde(default)]
    regions: Vec<BiomeRegion>,
    #[serde(default)]
    blocks: Vec<PlacedBlock>,
    #[serde(default)]
    day_time: i64,
    #[serde(default)]
    weather: WeatherState,
    #[serde(default)]
    climates: BTreeMap<BiomeId, BiomeClimate>,
}

/// An in-memory [`WorldView`].
///
/// When regions overlap, the one listed last wins.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "GridWorldSpec", into = "GridWorldSpec")]
pub struct GridWorld {
    dimension: DimensionId,
    default_biome: BiomeId,
    regions: Vec<BiomeRegion>,
    blocks: BTreeMap<BlockPos, BlockId>,
    day_time: i64,
    weather: WeatherState,
    climates: BTreeMap<BiomeId, BiomeClimate>,
}

impl Default for GridWorld {
    fn default() -> Self {
        Self::new(default_dimension(), default_biome())
    }
}

impl GridWorld {
    /// An empty world at day-time 0 with clear skies, made entirely of one
    /// biome.
    pub fn new(dimension: impl Into<DimensionId>, default_biome: impl Into<BiomeId>) -> Self {
        Self {
            dimension: dimension.into(),
            default_biome: default_biome.into(),
            regions: Vec::new(),
            blocks: BTreeMap::new(),
            day_time: 0,
            weather: WeatherState::clear(),
            climates: BTreeMap::new(),
        }
    }

    /// Paint a region on top of everything painted so far.
    #[must_use]
    pub fn with_region(mut self, region: BiomeRegion) -> Self {
        self.regions.push(region);
        self
    }

    /// Place a block, replacing whatever was at that cell.
    #[must_use]
    pub fn with_block(mut self, pos: BlockPos, block: impl Into<BlockId>) -> Self {
        self.set_block(pos, block);
        self
    }

    /// Set the day-time clock.
    #[must_use]
    pub fn with_day_time(mut self, day_time: i64) -> Self {
        self.day_time = day_time;
        self
    }

    /// Set the weather.
    #[must_use]
    pub fn with_weather(mut self, weather: WeatherState) -> Self {
        self.weather = weather;
        self
    }

    /// Set how a biome behaves when it rains.
    #[must_use]
    pub fn with_climate(mut self, biome: impl Into<BiomeId>, climate: BiomeClimate) -> Self {
        self.climates.insert(biome.into(), climate);
        self
    }

    /// Place a block, replacing whatever was at that cell.
    pub fn set_block(&mut self, pos: BlockPos, block: impl Into<BlockId>) {
        let block = block.into();
        if block.as_str() == AIR {
            self.blocks.remove(&pos);
        } else {
            self.blocks.insert(pos, block);
        }
    }

    /// Move the clock forward by `ticks`.
    pub fn advance_time(&mut self, ticks: i64) {
        self.day_time = self.day_time.saturating_add(ticks);
    }

    /// The biome every unpainted column has.
    pub const fn default_biome(&self) -> &BiomeId {
        &self.default_biome
    }

    /// Every biome this world can report, in first-mentioned order.
    pub fn biomes(&self) -> Vec<BiomeId> {
        let mut biomes = vec![self.default_biome.clone()];
        for region in &self.regions {
            if !biomes.contains(&region.biome) {
                biomes.push(region.biome.clone());
            }
        }
        biomes
    }

    fn climate(&self, biome: &BiomeId) -> BiomeClimate {
        self.climates.get(biome).copied().unwrap_or_default()
    }
}

impl WorldView for GridWorld {
    fn biome_at(&self, pos: BlockPos) -> BiomeId {
        self.regions
            .iter()
            .rev()
            .find(|region| region.contains(pos))
            .map_or_else(|| self.default_biome.clone(), |region| region.biome.clone())
    }

    fn block_at(&self, pos: BlockPos) -> BlockId {
        self.blocks.get(&pos).cloned().unwrap_or_else(|| BlockId::from(AIR))
    }

    fn day_time(&self) -> i64 {
        self.day_time
    }

    fn precipitation_at(&self, pos: BlockPos) -> Precipitation {
        if !self.weather.raining {
            return Precipitation::None;
        }
        let climate = self.climate(&self.biome_at(pos));
        if !climate.has_precipitation {
            return Precipitation::None;
        }
        match climate.snow_line {
            Some(line) if pos.y >= line => Precipitation::Snow,
            _ => Precipitation::Rain,
        }
    }

    fn precipitation_intensity(&self) -> f64 {
        if self.weather.raining {
            self.weather.intensity
        } else {
            0.0
        }
    }

    fn dimension(&self) -> DimensionId {
        self.dimension.clone()
    }
}

impl TryFrom<GridWorldSpec> for GridWorld {
    type Error = WorldError;

    fn try_from(spec: GridWorldSpec) -> Result<Self, Self::Error> {
        spec.weather.check()?;
        for (index, region) in spec.regions.iter().enumerate() {
            region.check(index)?;
        }

        let mut blocks = BTreeMap::new();
        for placed in spec.blocks {
            if blocks.insert(placed.pos, placed.block).is_some() {
                return Err(WorldError::DuplicateBlock(placed.pos));
            }
        }

        Ok(Self {
            dimension: spec.dimension,
            default_biome: spec.default_biome,
            regions: spec.regions,
            blocks,
            day_time: spec.day_time,
            weather: spec.weather,
            climates: spec.climates,
        })
    }
}

impl From<GridWorld> for GridWorldSpec {
    fn from(world: GridWorld) -> Self {
        Self {
            dimension: world.dimension,
            default_biome: world.default_biome,
            regions: world.regions,
            blocks: world
                .blocks
                .into_iter()
                .map(|(pos, block)| PlacedBlock { pos, block })
                .collect(),
            day_time: world.day_time,
            weather: world.weather,
            climates: world.climates,
        }
    }
}

fn default_dimension() -> DimensionId {
    DimensionId::from("minecraft:overworld")
}

fn default_biome() -> BiomeId {
    BiomeId::from("minecraft:plains")
}

const fn default_true() -> bool {
    true
}
