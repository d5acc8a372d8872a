//! Type-safe identifier wrappers around namespaced resource names.
//!
//! Every registry-backed thing the engine reads from the host world (biomes,
//! blocks, dimensions, status effects, enchantments) is identified by a
//! namespaced string such as `minecraft:plains`. Wrapping each kind in its own
//! newtype prevents accidentally looking up a block id in the biome table.

use serde::{Deserialize, Serialize};

/// Generates a newtype wrapper around [`String`] with standard derives.
macro_rules! define_id {
    (
        $(#[$meta:meta])*
        $name:ident
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub String);

        impl $name {
            /// Create an identifier from any string-like value.
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Borrow the identifier as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl core::fmt::Display for $name {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_owned())
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

define_id! {
    /// Identifier of a biome (for example `minecraft:snowy_taiga`).
    BiomeId
}

define_id! {
    /// Identifier of a block type (for example `minecraft:campfire`).
    BlockId
}

define_id! {
    /// Identifier of a dimension (for example `minecraft:the_nether`).
    DimensionId
}

define_id! {
    /// Identifier of a status effect (for example `minecraft:fire_resistance`).
    EffectId
}

define_id! {
    /// Identifier of an enchantment (for example `temperatures:ice_breaker`).
    EnchantmentId
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn display_matches_inner_string() {
        let biome = BiomeId::new("minecraft:desert");
        assert_eq!(biome.to_string(), "minecraft:desert");
        assert_eq!(biome.as_str(), "minecraft:desert");
    }

    #[test]
    fn ids_serialize_as_plain_strings() {
        let block = BlockId::from("minecraft:lava");
        let json = serde_json::to_string(&block).unwrap();
        assert_eq!(json, "\"minecraft:lava\"");

        let back: BlockId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, block);
    }

    #[test]
    fn ids_order_lexicographically() {
        let a = DimensionId::from("minecraft:overworld");
        let b = DimensionId::from("minecraft:the_end");
        assert!(a < b);
    }
}
