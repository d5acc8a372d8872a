//! The [`FactorProvider`] trait and the context every factor reads from.
//!
//! A factor is one pluggable calculator in the exposure pipeline. It sees the
//! value accumulated so far, returns a new value, and may then claim that its
//! result should override the accumulated value outright.

use std::fmt;

use temperatures_types::EntitySnapshot;
use temperatures_world::{SpatialSampler, WorldView};

use crate::config::ExposureConfig;

/// Order key of factors that must run before everything else.
pub const RUN_FIRST: i32 = -i32::MAX;

/// Order key of factors indifferent to ordering.
pub const NO_ORDER: i32 = -1;

/// Order key of factors that must run after everything else.
pub const RUN_LAST: i32 = i32::MAX;

/// Everything a factor may read during one evaluation.
///
/// Borrowed for the duration of a single evaluation; nothing in it outlives
/// the call.
#[derive(Clone, Copy)]
pub struct EvaluationContext<'a> {
    /// The entity being evaluated.
    pub entity: &'a EntitySnapshot,
    /// The world the entity is in.
    pub world: &'a dyn WorldView,
    /// Engine configuration.
    pub config: &'a ExposureConfig,
    /// Neighborhood sampler for biome and block scans.
    pub sampler: &'a SpatialSampler,
}

impl<'a> EvaluationContext<'a> {
    /// Bundle the inputs of one evaluation.
    pub fn new(
        entity: &'a EntitySnapshot,
        world: &'a dyn WorldView,
        config: &'a ExposureConfig,
        sampler: &'a SpatialSampler,
    ) -> Self {
        Self {
            entity,
            world,
            config,
            sampler,
        }
    }
}

impl fmt::Debug for EvaluationContext<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EvaluationContext")
            .field("entity", self.entity)
            .field("dimension", &self.world.dimension())
            .field("day_time", &self.world.day_time())
            .finish_non_exhaustive()
    }
}

/// One calculator contributing to (or overriding) the exposure value.
///
/// Implementations must be pure: the same context and input value always
/// produce the same output, and no shared state is mutated. A pipeline holds
/// its factors for the life of the process and may evaluate them from many
/// threads at once.
pub trait FactorProvider: fmt::Debug + Send + Sync {
    /// Stable, unique name used for exclusion and traces.
    fn name(&self) -> &str;

    /// Sort key. Lower runs earlier; see [`RUN_FIRST`], [`NO_ORDER`] and
    /// [`RUN_LAST`].
    fn order(&self) -> i32;

    /// Compute the new running value from the current one.
    fn transform(&self, ctx: &EvaluationContext<'_>, value: f64) -> f64;

    /// Claim an override for the value just produced.
    ///
    /// `None` means no claim. A claim records `new` under the returned
    /// priority; the highest recorded priority wins at the end of the
    /// pipeline.
    fn override_priority(&self, ctx: &EvaluationContext<'_>, old: f64, new: f64) -> Option<i32>;
}
