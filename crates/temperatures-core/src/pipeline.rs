//! The factor pipeline: ordered accumulation with priority overrides.
//!
//! # Algorithm
//!
//! 1. Factors are sorted by [`FactorProvider::order`] once, at construction.
//!    The sort is stable, so factors sharing an order key run in
//!    registration order.
//! 2. The running value starts at 0.0 and is passed through every factor.
//! 3. After each factor, its override claim (if any) records the value it
//!    just produced under the claimed priority. A later claim at the same
//!    priority replaces the earlier one.
//! 4. With no claims the result is the running value clamped to
//!    [`NORMAL_LIMIT`]. Otherwise it is the value recorded under the highest
//!    priority, clamped to [`EXTREME_LIMIT`].
//!
//! Evaluation is infallible and allocation-light. The pipeline itself is
//! immutable after construction and can be shared across threads.

use std::collections::BTreeMap;

use serde::Serialize;
use tracing::{debug, trace};

use crate::factor::{EvaluationContext, FactorProvider};
use crate::factors;

/// Bound on the value produced by ordinary accumulation.
pub const NORMAL_LIMIT: f64 = 2.0;

/// Bound on every value the pipeline returns; reached only via overrides.
pub const EXTREME_LIMIT: f64 = 3.0;

/// Tolerance for boundary comparisons.
pub const EXPOSURE_EPSILON: f64 = 1e-9;

/// Whether two exposure values are the same within [`EXPOSURE_EPSILON`].
pub fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() <= EXPOSURE_EPSILON
}

/// Errors raised while assembling a pipeline.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    /// Two factors share a name.
    #[error("factor `{0}` is registered more than once")]
    DuplicateFactor(String),
}

/// One factor's contribution, as recorded by [`FactorPipeline::trace`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FactorStep {
    /// Factor name.
    pub name: String,
    /// Factor order key.
    pub order: i32,
    /// Running value before the factor ran.
    pub before: f64,
    /// Running value after the factor ran.
    pub after: f64,
    /// Override priority the factor claimed, if any.
    pub priority: Option<i32>,
}

/// A full record of one pipeline run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PipelineTrace {
    /// Every factor that ran, in execution order.
    pub steps: Vec<FactorStep>,
    /// Override claims after tie-breaking: priority to recorded value.
    pub overrides: BTreeMap<i32, f64>,
    /// The priority whose value was returned, if any override was claimed.
    pub winning_priority: Option<i32>,
    /// The clamped result.
    pub value: f64,
}

/// An ordered, immutable set of factors.
#[derive(Debug)]
pub struct FactorPipeline {
    factors: Vec<Box<dyn FactorProvider>>,
}

impl FactorPipeline {
    /// Build a pipeline from factors in registration order.
    ///
    /// # Errors
    ///
    /// Returns [`PipelineError::DuplicateFactor`] if two factors share a
    /// name.
    pub fn new(factors: Vec<Box<dyn FactorProvider>>) -> Result<Self, PipelineError> {
        for (index, factor) in factors.iter().enumerate() {
            let earlier = factors.get(..index).unwrap_or_default();
            if earlier.iter().any(|other| other.name() == factor.name()) {
                return Err(PipelineError::DuplicateFactor(factor.name().to_owned()));
            }
        }
        Ok(Self::sorted(factors))
    }

    /// A pipeline holding every built-in factor.
    pub fn builtin() -> Self {
        Self::sorted(factors::builtin())
    }

    fn sorted(mut factors: Vec<Box<dyn FactorProvider>>) -> Self {
        factors.sort_by_key(|factor| factor.order());
        Self { factors }
    }

    /// Factor names in execution order.
    pub fn names(&self) -> Vec<&str> {
        self.factors.iter().map(|factor| factor.name()).collect()
    }

    /// Whether a factor with this name is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.factors.iter().any(|factor| factor.name() == name)
    }

    /// Run every factor and return the exposure value.
    pub fn evaluate(&self, ctx: &EvaluationContext<'_>) -> f64 {
        self.run(ctx, None, |_| {}).value
    }

    /// Run every factor except the named one.
    ///
    /// An unknown name excludes nothing.
    pub fn evaluate_excluding(&self, ctx: &EvaluationContext<'_>, excluded: &str) -> f64 {
        self.run(ctx, Some(excluded), |_| {}).value
    }

    /// Run every factor and record each step.
    pub fn trace(&self, ctx: &EvaluationContext<'_>) -> PipelineTrace {
        let mut steps = Vec::with_capacity(self.factors.len());
        let outcome = self.run(ctx, None, |step| steps.push(step));
        PipelineTrace {
            steps,
            overrides: outcome.overrides,
            winning_priority: outcome.winning_priority,
            value: outcome.value,
        }
    }

    fn run(
        &self,
        ctx: &EvaluationContext<'_>,
        excluded: Option<&str>,
        mut on_step: impl FnMut(FactorStep),
    ) -> Outcome {
        let mut value = 0.0;
        let mut overrides = BTreeMap::new();

        for factor in &self.factors {
            if excluded == Some(factor.name()) {
                continue;
            }

            let before = value;
            value = factor.transform(ctx, before);
            let priority = factor.override_priority(ctx, before, value);
            trace!(
                factor = factor.name(),
                before,
                after = value,
                priority = ?priority,
                "factor applied"
            );

            if let Some(priority) = priority {
                overrides.insert(priority, value);
            }
            on_step(FactorStep {
                name: factor.name().to_owned(),
                order: factor.order(),
                before,
                after: value,
                priority,
            });
        }

        match overrides.last_key_value() {
            None => Outcome {
                overrides,
                winning_priority: None,
                value: value.clamp(-NORMAL_LIMIT, NORMAL_LIMIT),
            },
            Some((&priority, &recorded)) => {
                debug!(priority, recorded, accumulated = value, "override selected");
                Outcome {
                    overrides,
                    winning_priority: Some(priority),
                    value: recorded.clamp(-EXTREME_LIMIT, EXTREME_LIMIT),
                }
            }
        }
    }
}

struct Outcome {
    overrides: BTreeMap<i32, f64>,
    winning_priority: Option<i32>,
    value: f64,
}
