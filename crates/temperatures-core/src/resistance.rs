//! Per-axis resistance from status effects and enchanted gear.
//!
//! Every axis starts at 1.0. An active effect adds its amplifier plus 0.5,
//! and each armor piece carrying the axis enchantment at level I adds 0.5.
//! The total is clamped to `[0, 2]`; anything above 1.0 counts as immunity
//! on the freeze and burn axes.

use serde::Serialize;
use temperatures_types::{EffectId, EnchantmentId, EntitySnapshot};

/// Resistance with no effects and no gear.
pub const BASE_RESISTANCE: f64 = 1.0;

/// Upper bound of any resistance scalar.
pub const MAX_RESISTANCE: f64 = 2.0;

/// Bonus per armor piece carrying the axis enchantment.
const ENCHANTMENT_BONUS: f64 = 0.5;

/// Bonus on top of the amplifier for an active effect.
const EFFECT_BONUS: f64 = 0.5;

/// The four things an entity can resist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ResistanceAxis {
    /// Lowers how cold the entity feels.
    Cold,
    /// Lowers how hot the entity feels.
    Heat,
    /// Immunity to freezing at the extreme cold boundary.
    Freeze,
    /// Immunity to burning at the extreme hot boundary.
    Burn,
}

impl ResistanceAxis {
    /// All axes.
    pub const ALL: [Self; 4] = [Self::Cold, Self::Heat, Self::Freeze, Self::Burn];

    /// Status effect that raises this axis.
    pub fn effect(self) -> EffectId {
        EffectId::from(match self {
            Self::Cold => "temperatures:cold_resistance",
            Self::Heat => "temperatures:heat_resistance",
            Self::Freeze => "temperatures:ice_breaker",
            Self::Burn => "minecraft:fire_resistance",
        })
    }

    /// Armor enchantment that raises this axis.
    pub fn enchantment(self) -> EnchantmentId {
        EnchantmentId::from(match self {
            Self::Cold => "temperatures:cold_resistance",
            Self::Heat => "temperatures:heat_resistance",
            Self::Freeze => "temperatures:ice_breaker",
            Self::Burn => "temperatures:flame_breaker",
        })
    }

    /// Resistance of `entity` on this axis.
    pub fn of(self, entity: &EntitySnapshot) -> f64 {
        resistance(entity, &self.effect(), &self.enchantment())
    }
}

/// Resistance of `entity` against an (effect, enchantment) pair, in `[0, 2]`.
pub fn resistance(entity: &EntitySnapshot, effect: &EffectId, enchantment: &EnchantmentId) -> f64 {
    let mut total = BASE_RESISTANCE;

    if let Some(amplifier) = entity.effect_amplifier(effect) {
        total += f64::from(amplifier) + EFFECT_BONUS;
    }

    for (_, enchantments) in entity.equipped() {
        if enchantments.get(enchantment) == Some(&1) {
            total += ENCHANTMENT_BONUS;
        }
    }

    total.clamp(0.0, MAX_RESISTANCE)
}

/// All four resistance scalars of one entity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Resistances {
    /// Cold resistance.
    pub cold: f64,
    /// Heat resistance.
    pub heat: f64,
    /// Freeze immunity scalar.
    pub freeze: f64,
    /// Burn immunity scalar.
    pub burn: f64,
}

impl Resistances {
    /// Compute every axis for `entity`.
    pub fn of(entity: &EntitySnapshot) -> Self {
        Self {
            cold: ResistanceAxis::Cold.of(entity),
            heat: ResistanceAxis::Heat.of(entity),
            freeze: ResistanceAxis::Freeze.of(entity),
            burn: ResistanceAxis::Burn.of(entity),
        }
    }

    /// Whether the entity cannot freeze.
    pub fn is_freeze_resistant(&self) -> bool {
        self.freeze > BASE_RESISTANCE
    }

    /// Whether the entity cannot burn.
    pub fn is_burn_resistant(&self) -> bool {
        self.burn > BASE_RESISTANCE
    }
}
