//! Serializable snapshot of everything the engine knows about one entity.

use serde::Serialize;
use temperatures_types::{BiomeSample, ComfortLevel};

use crate::pipeline::PipelineTrace;
use crate::resistance::Resistances;

/// Debug view of one evaluation, for overlays and the `report` command.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExposureReport {
    /// Current precipitation strength.
    pub precipitation_intensity: f64,
    /// Exposure with every factor.
    pub exposure: f64,
    /// Exposure with the ambient factor excluded.
    pub exposure_without_ambient: f64,
    /// Weighted biomes around the entity.
    pub biomes: Vec<BiomeSample>,
    /// Step-by-step pipeline record.
    pub trace: PipelineTrace,
    /// Resistance scalars.
    pub resistances: Resistances,
    /// Threshold queries.
    pub flags: ExposureFlags,
    /// Comfort band of `exposure`.
    pub comfort: ComfortLevel,
}

/// Every boolean threshold query at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[allow(clippy::struct_excessive_bools)]
pub struct ExposureFlags {
    /// Freezing without counting nearby blocks.
    pub ambient_freezing: bool,
    /// At the hot boundary.
    pub ambient_burning: bool,
    /// At either boundary, or burning.
    pub ambient_extreme: bool,
    /// Burning or already on fire.
    pub ambient_considered_burning: bool,
    /// Colder than cold resistance allows.
    pub player_cold: bool,
    /// Hotter than heat resistance allows.
    pub player_hot: bool,
    /// Freezing and not immune.
    pub player_freezing: bool,
    /// Burning and not immune.
    pub player_burning: bool,
    /// Burning, or on fire and not immune.
    pub player_considered_burning: bool,
}
