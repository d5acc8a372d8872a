//! The read-only boundary between the engine and the host world.

use temperatures_types::{BiomeId, BlockId, BlockPos, DimensionId, Precipitation};

/// Read-only view of the world an entity is standing in.
///
/// Implemented by the host (a game server, a replay, a test fixture). Every
/// query is answered on demand and must be total: positions the host knows
/// nothing about still resolve to some biome and some block.
///
/// The engine never mutates the world and never caches answers between
/// evaluations.
pub trait WorldView {
    /// The biome at a cell.
    fn biome_at(&self, pos: BlockPos) -> BiomeId;

    /// The block occupying a cell.
    fn block_at(&self, pos: BlockPos) -> BlockId;

    /// The day-time clock, in ticks. One full day is
    /// [`DAY_LENGTH_TICKS`](crate::environment::DAY_LENGTH_TICKS) ticks.
    fn day_time(&self) -> i64;

    /// What is falling at a cell right now.
    ///
    /// Returns [`Precipitation::None`] when the world is dry or when the
    /// biome at `pos` has no precipitation.
    fn precipitation_at(&self, pos: BlockPos) -> Precipitation;

    /// Current precipitation strength, in `[0, 1]`.
    fn precipitation_intensity(&self) -> f64;

    /// The dimension this view belongs to.
    fn dimension(&self) -> DimensionId;
}
