//! World boundary for the Temperatures exposure engine.
//!
//! The engine never owns a world. It reads one through [`WorldView`], which
//! a host implements over its own data. This crate provides that trait, the
//! day-cycle math every biome lookup needs, the [`SpatialSampler`] that turns
//! a neighborhood into biome weights, and [`GridWorld`], a small in-memory
//! world for scenes and tests.

pub mod environment;
pub mod error;
pub mod grid;
pub mod sampling;
pub mod view;

pub use environment::{DAY_LENGTH_TICKS, blend_day_night, day_progress, lerp};
pub use error::WorldError;
pub use grid::{AIR, BiomeClimate, BiomeRegion, GridWorld, PlacedBlock, WeatherState};
pub use sampling::{SamplerConfig, SpatialSampler, weighted_average};
pub use view::WorldView;
