//! Exposure evaluation for the Temperatures engine.
//!
//! This crate turns an entity snapshot and a world view into a single
//! exposure value in `[-3, 3]` and answers every question a host asks about
//! it: is the entity cold, hot, freezing, burning, and should it take damage
//! this tick.
//!
//! # Modules
//!
//! - [`config`] -- Typed configuration loaded from `temperatures-config.yaml`,
//!   with validation, audit and fill.
//! - [`factor`] -- The [`FactorProvider`] trait and evaluation context.
//! - [`factors`] -- The five built-in factors.
//! - [`pipeline`] -- Ordered accumulation with priority overrides.
//! - [`resistance`] -- Cold, heat, freeze and burn resistance scalars.
//! - [`engine`] -- [`ExposureEngine`] and its per-snapshot [`Exposure`] view.
//! - [`damage`] -- Damage decisions and tick outcomes.
//! - [`report`] -- Serializable debug snapshot.
//!
//! [`FactorProvider`]: factor::FactorProvider
//! [`ExposureEngine`]: engine::ExposureEngine
//! [`Exposure`]: engine::Exposure

pub mod config;
pub mod damage;
pub mod engine;
pub mod factor;
pub mod factors;
pub mod pipeline;
pub mod report;
pub mod resistance;

pub use config::{ConfigError, ConfigWarning, ExposureConfig};
pub use damage::{DamageDecision, TickOutcome};
pub use engine::{Exposure, ExposureEngine};
pub use factor::{EvaluationContext, FactorProvider, NO_ORDER, RUN_FIRST, RUN_LAST};
pub use pipeline::{FactorPipeline, PipelineError, PipelineTrace};
pub use report::ExposureReport;
pub use resistance::{ResistanceAxis, Resistances};
