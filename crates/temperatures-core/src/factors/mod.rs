//! The built-in exposure factors.
//!
//! | Factor      | Order            | Effect                                          |
//! |-------------|------------------|-------------------------------------------------|
//! | `biome`     | `RUN_FIRST`      | Replaces the value with the sampled biome blend |
//! | `ice_water` | `RUN_FIRST + 1`  | Forces -3 when submerged in cold water          |
//! | `ambient`   | `NO_ORDER`       | Adds warmth or cold from nearby blocks          |
//! | `weather`   | `NO_ORDER`       | Adds the rain or snow delta                     |
//! | `dimension` | `RUN_LAST`       | Forces +3 in extreme dimensions                 |

mod ambient;
mod biome;
mod dimension;
mod ice_water;
mod weather;

pub use ambient::{AMBIENT_RADIUS_SQUARED, AmbientFactor, combine_ambient};
pub use biome::BiomeFactor;
pub use dimension::DimensionFactor;
pub use ice_water::IceWaterFactor;
pub use weather::WeatherFactor;

use crate::factor::FactorProvider;

/// Priority claimed by the ice-water and dimension factors when they fire.
pub const FORCED_PRIORITY: i32 = 100;

/// Priority claimed by the ice-water and dimension factors when they do not.
pub const PASSIVE_PRIORITY: i32 = 0;

/// Every built-in factor, in registration order.
///
/// Registration order only matters between factors sharing an order key:
/// `ambient` runs before `weather`.
pub fn builtin() -> Vec<Box<dyn FactorProvider>> {
    vec![
        Box::new(AmbientFactor::default()),
        Box::new(BiomeFactor),
        Box::new(DimensionFactor),
        Box::new(IceWaterFactor),
        Box::new(WeatherFactor),
    ]
}
