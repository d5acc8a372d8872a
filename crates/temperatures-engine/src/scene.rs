//! Scenes: a world, one entity in it, and how long to run.
//!
//! Scene files are YAML:
//!
//! ```yaml
//! ticks: 600
//! world:
//!   default_biome: minecraft:snowy_plains
//!   day_time: 13000
//!   weather: { raining: true, intensity: 0.8 }
//! entity:
//!   position: { x: 0, y: 64, z: 0 }
//!   submerged: true
//! ```

use std::path::Path;

use serde::Deserialize;
use temperatures_types::{BiomeId, BlockPos, EntitySnapshot, EquipmentSlot};
use temperatures_world::{BiomeClimate, BiomeRegion, GridWorld};

use crate::error::EngineError;

/// One entity in one world, run for a fixed number of ticks.
#[derive(Debug, Clone, Deserialize)]
pub struct Scene {
    /// The world.
    #[serde(default)]
    pub world: GridWorld,

    /// The entity whose exposure is tracked.
    #[serde(default = "default_entity")]
    pub entity: EntitySnapshot,

    /// Number of ticks to run.
    #[serde(default = "default_ticks")]
    pub ticks: u64,
}

impl Default for Scene {
    /// A riverside camp on the edge of a snowfield, starting at dusk.
    fn default() -> Self {
        let world = GridWorld::new("minecraft:overworld", "minecraft:plains")
            .with_region(BiomeRegion::columns("minecraft:snowy_plains", (-64, -64), (-4, 64)))
            .with_region(BiomeRegion::columns("minecraft:frozen_river", (-6, -64), (-2, 64)))
            .with_climate("minecraft:snowy_plains", BiomeClimate::snowy_above(0))
            .with_climate("minecraft:frozen_river", BiomeClimate::snowy_above(0))
            .with_block(BlockPos::new(2, 64, 1), "minecraft:campfire")
            .with_day_time(12_000);

        let entity = default_entity()
            .with_submerged(true)
            .with_enchantment(EquipmentSlot::Chest, "temperatures:cold_resistance", 1);

        Self {
            world,
            entity,
            ticks: default_ticks(),
        }
    }
}

impl Scene {
    /// Load a scene from a YAML file.
    pub fn from_file(path: &Path) -> Result<Self, EngineError> {
        let display = path.display().to_string();
        let contents = std::fs::read_to_string(path).map_err(|source| EngineError::SceneIo {
            path: display.clone(),
            source,
        })?;
        serde_yml::from_str(&contents).map_err(|source| EngineError::SceneParse { path: display, source })
    }

    /// Load the scene at `path`, or the built-in scene without one.
    pub fn load(path: Option<&Path>) -> Result<Self, EngineError> {
        path.map_or_else(|| Ok(Self::default()), Self::from_file)
    }

    /// Every biome the scene's world can report.
    pub fn biomes(&self) -> Vec<BiomeId> {
        self.world.biomes()
    }
}

fn default_entity() -> EntitySnapshot {
    EntitySnapshot::at(BlockPos::new(-3, 64, 0))
}

const fn default_ticks() -> u64 {
    1_200
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use temperatures_world::WorldView;

    use super::*;

    #[test]
    fn default_scene_stands_in_the_river() {
        let scene = Scene::default();
        assert_eq!(
            scene.world.biome_at(scene.entity.position).as_str(),
            "minecraft:frozen_river"
        );
        assert!(scene.entity.submerged);
        assert_eq!(scene.biomes().len(), 3);
    }

    #[test]
    fn parses_minimal_yaml() {
        let scene: Scene = serde_yml::from_str("ticks: 10").unwrap();
        assert_eq!(scene.ticks, 10);
        assert_eq!(scene.entity.position, BlockPos::new(-3, 64, 0));
        assert_eq!(scene.world.dimension().as_str(), "minecraft:overworld");
    }

    #[test]
    fn parses_full_yaml() {
        let yaml = r"
ticks: 600
world:
  default_biome: minecraft:snowy_plains
  day_time: 13000
  weather: { raining: true, intensity: 0.8 }
entity:
  position: { x: 0, y: 64, z: 0 }
  submerged: true
  effects:
    temperatures:ice_breaker: 0
";
        let scene: Scene = serde_yml::from_str(yaml).unwrap();
        assert_eq!(scene.ticks, 600);
        assert_eq!(scene.world.day_time(), 13_000);
        assert!((scene.world.precipitation_intensity() - 0.8).abs() < 1e-12);
        assert_eq!(scene.entity.effects.len(), 1);
    }

    #[test]
    fn rejects_invalid_world() {
        let yaml = "world:\n  weather: { raining: true, intensity: 4.0 }\n";
        assert!(serde_yml::from_str::<Scene>(yaml).is_err());
    }

    #[test]
    fn missing_file_is_a_scene_io_error() {
        let err = Scene::from_file(Path::new("/nonexistent/scene.yaml")).unwrap_err();
        assert!(matches!(err, EngineError::SceneIo { .. }));
    }
}
