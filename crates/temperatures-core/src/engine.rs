//! The exposure engine: threshold queries and damage cadence on top of the
//! factor pipeline.
//!
//! [`ExposureEngine`] is built once at startup and shared. Each call to
//! [`ExposureEngine::evaluate`] borrows one entity snapshot and one world
//! view and returns an [`Exposure`], a short-lived view that answers every
//! query about that snapshot. An `Exposure` computes the pipeline at most
//! once per variant (full, without ambient) and is dropped after the tick;
//! nothing carries over to the next evaluation.

use std::cell::OnceCell;

use temperatures_types::{ComfortLevel, DamageKind, EntitySnapshot};
use temperatures_world::{SpatialSampler, WorldView};
use tracing::debug;

use crate::config::ExposureConfig;
use crate::damage::{DamageDecision, TickOutcome, is_due};
use crate::factor::EvaluationContext;
use crate::pipeline::{EXTREME_LIMIT, FactorPipeline, approx_eq};
use crate::report::{ExposureFlags, ExposureReport};
use crate::resistance::Resistances;

/// Name of the factor excluded by the "ambient" queries.
pub const AMBIENT_FACTOR: &str = "ambient";

/// Exposure magnitude above which an entity is uncomfortable.
const UNCOMFORTABLE: f64 = 1.0;

/// Exposure magnitude above which an entity is very uncomfortable.
const VERY_UNCOMFORTABLE: f64 = 1.5;

/// Comfort band of an exposure value.
pub fn comfort_level(value: f64) -> ComfortLevel {
    let magnitude = value.abs();
    if approx_eq(magnitude, EXTREME_LIMIT) {
        ComfortLevel::Extreme
    } else if magnitude > VERY_UNCOMFORTABLE {
        ComfortLevel::VeryUncomfortable
    } else if magnitude > UNCOMFORTABLE {
        ComfortLevel::Uncomfortable
    } else {
        ComfortLevel::Comfortable
    }
}

/// Owns the pipeline, configuration and sampler shared by every evaluation.
#[derive(Debug)]
pub struct ExposureEngine {
    pipeline: FactorPipeline,
    config: ExposureConfig,
    sampler: SpatialSampler,
}

impl ExposureEngine {
    /// Build an engine around a pipeline and a (validated) configuration.
    pub fn new(pipeline: FactorPipeline, config: ExposureConfig) -> Self {
        let sampler = SpatialSampler::new(config.sampling);
        Self {
            pipeline,
            config,
            sampler,
        }
    }

    /// An engine with every built-in factor.
    pub fn with_builtin_factors(config: ExposureConfig) -> Self {
        Self::new(FactorPipeline::builtin(), config)
    }

    /// Start answering queries about one entity in one world.
    pub fn evaluate<'a>(&'a self, entity: &'a EntitySnapshot, world: &'a dyn WorldView) -> Exposure<'a> {
        Exposure {
            engine: self,
            entity,
            world,
            value: OnceCell::new(),
            without_ambient: OnceCell::new(),
            resistances: OnceCell::new(),
        }
    }
}

/// Queries about one entity snapshot.
///
/// Every query is a pure function of the snapshot, the world view, and the
/// engine.
pub struct Exposure<'a> {
    engine: &'a ExposureEngine,
    entity: &'a EntitySnapshot,
    world: &'a dyn WorldView,
    value: OnceCell<f64>,
    without_ambient: OnceCell<f64>,
    resistances: OnceCell<Resistances>,
}

impl std::fmt::Debug for Exposure<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Exposure")
            .field("entity", self.entity)
            .field("value", &self.value.get())
            .field("without_ambient", &self.without_ambient.get())
            .finish_non_exhaustive()
    }
}

impl<'a> Exposure<'a> {
    fn ctx(&self) -> EvaluationContext<'a> {
        EvaluationContext::new(self.entity, self.world, &self.engine.config, &self.engine.sampler)
    }

    // -- Values ---------------------------------------------------------------

    /// Final exposure in `[-3, 3]`.
    pub fn compute(&self) -> f64 {
        *self.value.get_or_init(|| self.engine.pipeline.evaluate(&self.ctx()))
    }

    /// Exposure with the ambient block factor excluded.
    pub fn compute_without_ambient(&self) -> f64 {
        *self
            .without_ambient
            .get_or_init(|| self.engine.pipeline.evaluate_excluding(&self.ctx(), AMBIENT_FACTOR))
    }

    /// Resistance scalars of the entity.
    pub fn resistances(&self) -> Resistances {
        *self.resistances.get_or_init(|| Resistances::of(self.entity))
    }

    /// Comfort band of [`compute`](Self::compute).
    pub fn comfort_level(&self) -> ComfortLevel {
        comfort_level(self.compute())
    }

    // -- Ambient queries ------------------------------------------------------

    /// Cold enough to freeze unprotected entities, not counting nearby
    /// blocks.
    pub fn is_ambient_freezing(&self) -> bool {
        approx_eq(self.compute_without_ambient(), -EXTREME_LIMIT)
    }

    /// Hot enough to set unprotected entities on fire.
    pub fn is_ambient_burning(&self) -> bool {
        approx_eq(self.compute(), EXTREME_LIMIT)
    }

    /// At either extreme boundary, or burning.
    pub fn is_ambient_extreme(&self) -> bool {
        approx_eq(self.compute().abs(), EXTREME_LIMIT) || self.is_player_considered_burning()
    }

    /// Burning, or already on fire.
    pub fn is_ambient_considered_burning(&self) -> bool {
        self.is_player_burning() || self.entity.on_fire
    }

    // -- Player queries -------------------------------------------------------

    /// Colder than cold resistance can offset.
    pub fn is_player_cold(&self) -> bool {
        self.compute() + self.resistances().cold < 0.0
    }

    /// Hotter than heat resistance can offset.
    pub fn is_player_hot(&self) -> bool {
        self.compute() - self.resistances().heat > 0.0
    }

    /// Ambient freezing and not freeze-immune.
    pub fn is_player_freezing(&self) -> bool {
        self.is_ambient_freezing() && !self.resistances().is_freeze_resistant()
    }

    /// Ambient burning and not burn-immune.
    pub fn is_player_burning(&self) -> bool {
        self.is_ambient_burning() && !self.resistances().is_burn_resistant()
    }

    /// Burning, or on fire and not burn-immune.
    pub fn is_player_considered_burning(&self) -> bool {
        self.is_player_burning() || (self.entity.on_fire && !self.resistances().is_burn_resistant())
    }

    /// Every threshold query at once.
    pub fn flags(&self) -> ExposureFlags {
        ExposureFlags {
            ambient_freezing: self.is_ambient_freezing(),
            ambient_burning: self.is_ambient_burning(),
            ambient_extreme: self.is_ambient_extreme(),
            ambient_considered_burning: self.is_ambient_considered_burning(),
            player_cold: self.is_player_cold(),
            player_hot: self.is_player_hot(),
            player_freezing: self.is_player_freezing(),
            player_burning: self.is_player_burning(),
            player_considered_burning: self.is_player_considered_burning(),
        }
    }

    // -- Damage ---------------------------------------------------------------

    /// The periodic damage decision for `tick`.
    ///
    /// Freezing is checked on the extreme cadence first. On the normal
    /// cadence a cold entity takes cold damage (unless the freeze check
    /// already covers it), and a hot entity either ignites or takes heat
    /// damage.
    pub fn possible_damage(&self, tick: u64) -> Option<DamageDecision> {
        let damage = &self.engine.config.damage;

        if is_due(tick, damage.extreme_damage_tick) && self.is_player_freezing() {
            return Some(self.decide(DamageDecision::Damage {
                kind: DamageKind::Freeze,
                amount: damage.extreme_damage_amount,
            }));
        }

        if !is_due(tick, damage.normal_damage_tick) {
            return None;
        }

        if self.is_player_cold() && !self.is_ambient_freezing() {
            return Some(self.decide(DamageDecision::Damage {
                kind: DamageKind::Cold,
                amount: damage.normal_damage_amount,
            }));
        }

        if self.is_player_hot() {
            if self.is_player_burning() {
                return Some(self.decide(DamageDecision::Ignite {
                    ticks: damage.burn_ticks,
                }));
            }
            if !self.is_ambient_burning() {
                return Some(self.decide(DamageDecision::Damage {
                    kind: DamageKind::Heat,
                    amount: damage.normal_damage_amount,
                }));
            }
        }

        None
    }

    fn decide(&self, decision: DamageDecision) -> DamageDecision {
        debug!(
            position = %self.entity.position,
            exposure = self.compute(),
            ?decision,
            "damage decision"
        );
        decision
    }

    /// What the host should do to the entity on `tick`.
    ///
    /// Exempt entities are left alone. Otherwise damage follows
    /// [`possible_damage`](Self::possible_damage), and a burning entity is
    /// set on fire every tick regardless of the damage cadence.
    pub fn tick_outcome(&self, tick: u64) -> TickOutcome {
        if self.entity.exempt {
            return TickOutcome::default();
        }

        let damage = match self.possible_damage(tick) {
            Some(DamageDecision::Damage { kind, amount }) => Some((kind, amount)),
            Some(DamageDecision::Ignite { .. }) | None => None,
        };
        let ignite_ticks = self
            .is_player_burning()
            .then_some(self.engine.config.damage.burn_ticks);

        TickOutcome { damage, ignite_ticks }
    }

    // -- Report ---------------------------------------------------------------

    /// A full debug snapshot.
    pub fn report(&self) -> ExposureReport {
        let ctx = self.ctx();
        ExposureReport {
            precipitation_intensity: self.world.precipitation_intensity(),
            exposure: self.compute(),
            exposure_without_ambient: self.compute_without_ambient(),
            biomes: self
                .engine
                .sampler
                .sample_weighted_biomes(self.world, self.entity.position),
            trace: self.engine.pipeline.trace(&ctx),
            resistances: self.resistances(),
            flags: self.flags(),
            comfort: self.comfort_level(),
        }
    }
}
