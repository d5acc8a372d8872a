//! Enumeration types for the Temperatures exposure engine.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Weather
// ---------------------------------------------------------------------------

/// Precipitation falling at a specific position.
///
/// Hosts resolve this per position: a biome without precipitation reports
/// [`Precipitation::None`] even while it is raining elsewhere, and a biome
/// cold enough to snow at the queried height reports [`Precipitation::Snow`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Precipitation {
    /// Nothing is falling here.
    #[default]
    None,
    /// Rain is falling here.
    Rain,
    /// Snow is falling here.
    Snow,
}

// ---------------------------------------------------------------------------
// Equipment
// ---------------------------------------------------------------------------

/// An armor slot that can carry enchanted gear.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum EquipmentSlot {
    /// Helmet slot.
    Head,
    /// Chestplate slot.
    Chest,
    /// Leggings slot.
    Legs,
    /// Boots slot.
    Feet,
}

impl EquipmentSlot {
    /// All armor slots in head-to-feet order.
    pub const ALL: [Self; 4] = [Self::Head, Self::Chest, Self::Legs, Self::Feet];
}

// ---------------------------------------------------------------------------
// Damage
// ---------------------------------------------------------------------------

/// The kind of environmental damage the engine can ask the host to apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum DamageKind {
    /// Extreme cold: applied on the fast cadence while freezing.
    Freeze,
    /// Uncomfortable cold: applied on the normal cadence.
    Cold,
    /// Uncomfortable heat: applied on the normal cadence.
    Heat,
}

impl core::fmt::Display for DamageKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Freeze => f.write_str("freeze"),
            Self::Cold => f.write_str("cold"),
            Self::Heat => f.write_str("heat"),
        }
    }
}

// ---------------------------------------------------------------------------
// Comfort
// ---------------------------------------------------------------------------

/// How harsh an exposure value feels, used by gauges and overlays.
///
/// | Band                | Exposure magnitude |
/// |---------------------|--------------------|
/// | `Comfortable`       | `<= 1.0`           |
/// | `Uncomfortable`     | `> 1.0`            |
/// | `VeryUncomfortable` | `> 1.5`            |
/// | `Extreme`           | `== 3.0`           |
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ComfortLevel {
    /// No resistance is needed.
    Comfortable,
    /// Unprotected entities start taking periodic damage.
    Uncomfortable,
    /// Close to the accumulation limit.
    VeryUncomfortable,
    /// At the extreme boundary: freezing or burning.
    Extreme,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_precipitation_is_none() {
        assert_eq!(Precipitation::default(), Precipitation::None);
    }

    #[test]
    fn comfort_levels_are_ordered_by_severity() {
        assert!(ComfortLevel::Comfortable < ComfortLevel::Uncomfortable);
        assert!(ComfortLevel::VeryUncomfortable < ComfortLevel::Extreme);
    }

    #[test]
    fn damage_kind_display() {
        assert_eq!(DamageKind::Freeze.to_string(), "freeze");
        assert_eq!(DamageKind::Heat.to_string(), "heat");
    }
}
