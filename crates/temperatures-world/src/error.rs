//! Error types for the `temperatures-world` crate.
//!
//! Only building a [`GridWorld`] from scene data can fail. Queries against a
//! [`WorldView`] are total.
//!
//! [`GridWorld`]: crate::grid::GridWorld
//! [`WorldView`]: crate::view::WorldView

/// Errors that can occur while assembling an in-memory world.
#[derive(Debug, thiserror::Error)]
pub enum WorldError {
    /// Precipitation intensity must be a finite value in `[0, 1]`.
    #[error("precipitation intensity {0} is outside [0, 1]")]
    InvalidIntensity(f64),

    /// A biome region has a minimum corner above its maximum corner.
    #[error("biome region {index} ({biome}) has inverted bounds on the {axis} axis")]
    InvertedRegion {
        /// Position of the region in the region list.
        index: usize,
        /// The biome the region paints.
        biome: String,
        /// The offending axis (`x`, `y` or `z`).
        axis: char,
    },

    /// Two placed blocks occupy the same cell.
    #[error("duplicate block at {0}")]
    DuplicateBlock(temperatures_types::BlockPos),
}
