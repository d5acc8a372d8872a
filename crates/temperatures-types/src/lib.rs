//! Shared type definitions for the Temperatures exposure engine.
//!
//! This crate is the single source of truth for the values that cross crate
//! boundaries: identifiers handed over by the host world, the entity
//! snapshot read once per evaluation, and the enumerations surfaced to the
//! damage scheduler and overlay.
//!
//! # Modules
//!
//! - [`ids`] -- Type-safe string wrappers for namespaced registry identifiers
//! - [`enums`] -- Precipitation, equipment slots, damage kinds, comfort bands
//! - [`structs`] -- Block positions, entity snapshots, biome samples

pub mod enums;
pub mod ids;
pub mod structs;

// Re-export all public types at crate root for convenience.
pub use enums::{ComfortLevel, DamageKind, EquipmentSlot, Precipitation};
pub use ids::{BiomeId, BlockId, DimensionId, EffectId, EnchantmentId};
pub use structs::{BiomeSample, BlockPos, Enchantments, EntitySnapshot};
