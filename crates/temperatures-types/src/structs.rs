//! Core value structs shared by the world and engine crates.
//!
//! Everything here is a read-only snapshot: the host world owns the real
//! entity and hands the engine a copy once per evaluation.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::enums::EquipmentSlot;
use crate::ids::{BiomeId, EffectId, EnchantmentId};

// ---------------------------------------------------------------------------
// Positions
// ---------------------------------------------------------------------------

/// Integer coordinates of a single world cell.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct BlockPos {
    /// East-west coordinate.
    pub x: i32,
    /// Vertical coordinate.
    pub y: i32,
    /// North-south coordinate.
    pub z: i32,
}

impl BlockPos {
    /// Create a position from its three coordinates.
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// Return this position shifted by the given deltas.
    ///
    /// Coordinates saturate at the `i32` range instead of wrapping.
    pub const fn offset(self, dx: i32, dy: i32, dz: i32) -> Self {
        Self {
            x: self.x.saturating_add(dx),
            y: self.y.saturating_add(dy),
            z: self.z.saturating_add(dz),
        }
    }

    /// The cell directly below.
    pub const fn below(self) -> Self {
        self.offset(0, -1, 0)
    }

    /// The cell directly above.
    pub const fn above(self) -> Self {
        self.offset(0, 1, 0)
    }

    /// Squared euclidean distance to another cell.
    ///
    /// Computed in `f64` so that distant coordinates cannot overflow.
    pub fn distance_squared(self, other: Self) -> f64 {
        let dx = f64::from(self.x) - f64::from(other.x);
        let dy = f64::from(self.y) - f64::from(other.y);
        let dz = f64::from(self.z) - f64::from(other.z);
        dx.mul_add(dx, dy.mul_add(dy, dz * dz))
    }
}

impl core::fmt::Display for BlockPos {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

// ---------------------------------------------------------------------------
// Entities
// ---------------------------------------------------------------------------

/// Enchantment levels carried by one piece of equipped gear.
pub type Enchantments = BTreeMap<EnchantmentId, u32>;

/// Read-only snapshot of the entity whose exposure is being evaluated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntitySnapshot {
    /// The cell the entity's feet are in.
    pub position: BlockPos,

    /// Whether the entity is in water.
    #[serde(default)]
    pub submerged: bool,

    /// Whether the entity is currently on fire.
    #[serde(default)]
    pub on_fire: bool,

    /// Whether the host excludes this entity from environmental damage
    /// (creative or spectator players).
    #[serde(default)]
    pub exempt: bool,

    /// Active status effects: effect id to amplifier (0 for level I).
    #[serde(default)]
    pub effects: BTreeMap<EffectId, u32>,

    /// Enchantments on equipped gear, per slot.
    #[serde(default)]
    pub equipment: BTreeMap<EquipmentSlot, Enchantments>,
}

impl EntitySnapshot {
    /// Create a snapshot of an unremarkable entity standing at `position`.
    pub fn at(position: BlockPos) -> Self {
        Self {
            position,
            ..Self::default()
        }
    }

    /// Set whether the entity is in water.
    #[must_use]
    pub fn with_submerged(mut self, submerged: bool) -> Self {
        self.submerged = submerged;
        self
    }

    /// Set whether the entity is on fire.
    #[must_use]
    pub fn with_on_fire(mut self, on_fire: bool) -> Self {
        self.on_fire = on_fire;
        self
    }

    /// Set whether the entity is exempt from environmental damage.
    #[must_use]
    pub fn with_exempt(mut self, exempt: bool) -> Self {
        self.exempt = exempt;
        self
    }

    /// Add (or replace) an active status effect.
    #[must_use]
    pub fn with_effect(mut self, effect: impl Into<EffectId>, amplifier: u32) -> Self {
        self.effects.insert(effect.into(), amplifier);
        self
    }

    /// Add (or replace) an enchantment on the gear in `slot`.
    #[must_use]
    pub fn with_enchantment(
        mut self,
        slot: EquipmentSlot,
        enchantment: impl Into<EnchantmentId>,
        level: u32,
    ) -> Self {
        self.equipment
            .entry(slot)
            .or_default()
            .insert(enchantment.into(), level);
        self
    }

    /// Amplifier of an active effect, or `None` if the effect is not active.
    pub fn effect_amplifier(&self, effect: &EffectId) -> Option<u32> {
        self.effects.get(effect).copied()
    }

    /// Iterate over every equipped slot and its enchantments.
    pub fn equipped(&self) -> impl Iterator<Item = (EquipmentSlot, &Enchantments)> {
        self.equipment.iter().map(|(slot, enchantments)| (*slot, enchantments))
    }
}

// ---------------------------------------------------------------------------
// Sampling
// ---------------------------------------------------------------------------

/// One biome and the share of the sampled neighborhood it covers.
///
/// A set of samples produced for one entity has weights summing to 1.0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BiomeSample {
    /// The sampled biome.
    pub biome: BiomeId,
    /// Fraction of sample points in this biome, in `[0, 1]`.
    pub weight: f64,
}
