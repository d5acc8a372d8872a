//! Extreme dimensions pin the exposure at the hot boundary.

use crate::factor::{EvaluationContext, FactorProvider, RUN_LAST};
use crate::factors::{FORCED_PRIORITY, PASSIVE_PRIORITY};
use crate::pipeline::{EXTREME_LIMIT, approx_eq};

/// Forces +3 when the entity's dimension is listed as extreme.
#[derive(Debug, Clone, Copy, Default)]
pub struct DimensionFactor;

impl FactorProvider for DimensionFactor {
    fn name(&self) -> &str {
        "dimension"
    }

    fn order(&self) -> i32 {
        RUN_LAST
    }

    fn transform(&self, ctx: &EvaluationContext<'_>, value: f64) -> f64 {
        if ctx.config.is_extreme_dimension(&ctx.world.dimension()) {
            EXTREME_LIMIT
        } else {
            value
        }
    }

    fn override_priority(&self, _ctx: &EvaluationContext<'_>, old: f64, new: f64) -> Option<i32> {
        if approx_eq(old, new) {
            Some(PASSIVE_PRIORITY)
        } else {
            Some(FORCED_PRIORITY)
        }
    }
}
