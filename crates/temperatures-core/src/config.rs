//! Configuration loading and typed config structures for the exposure engine.
//!
//! The canonical configuration lives in `temperatures-config.yaml`. This
//! module defines strongly-typed structs that mirror the YAML structure, a
//! loader, a validator, and the audit used to nudge server owners toward a
//! complete biome table.
//!
//! Every lookup the factors perform is total: a biome or block missing from
//! the tables contributes nothing instead of failing an evaluation.

use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};
use temperatures_types::{BiomeId, BlockId, DimensionId};
use temperatures_world::{SamplerConfig, blend_day_night};
use tracing::warn;

/// Errors that can occur when loading, validating, or writing configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("failed to read config file: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// Failed to parse YAML content.
    #[error("failed to parse config YAML: {source}")]
    Yaml {
        /// The underlying YAML parse error.
        source: serde_yml::Error,
    },

    /// Failed to render configuration as YAML.
    #[error("failed to serialize config YAML: {source}")]
    YamlSerialize {
        /// The underlying YAML serialization error.
        source: serde_yml::Error,
    },

    /// A value is outside its permitted range.
    #[error("invalid config value for {field}: {reason}")]
    Invalid {
        /// Dotted path of the offending field.
        field: String,
        /// What is wrong with it.
        reason: String,
    },
}

impl From<serde_yml::Error> for ConfigError {
    fn from(source: serde_yml::Error) -> Self {
        Self::Yaml { source }
    }
}

/// Lowest temperature a biome may be configured with.
pub const MIN_BIOME_TEMPERATURE: f64 = -2.0;

/// Highest temperature a biome may be configured with.
pub const MAX_BIOME_TEMPERATURE: f64 = 3.0;

/// Largest magnitude a weather delta may have.
pub const MAX_WEATHER_DIFF: f64 = 2.0;

/// Largest accepted `sampling.samples`; bounds the per-evaluation grid.
pub const MAX_SAMPLES: u32 = 4096;

// ---------------------------------------------------------------------------
// ExposureConfig
// ---------------------------------------------------------------------------

/// Top-level engine configuration.
///
/// Mirrors the structure of `temperatures-config.yaml`. Every section has
/// defaults, so an empty file is a valid (if biome-less) configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExposureConfig {
    /// Day and night temperature per biome.
    #[serde(default)]
    pub biomes: BTreeMap<BiomeId, BiomeTemperature>,

    /// Warmth emitted by blocks. Negative values are cold sources.
    #[serde(default = "default_warm_blocks")]
    pub warm_blocks: BTreeMap<BlockId, f64>,

    /// Temperature deltas applied while it rains or snows.
    #[serde(default)]
    pub weather: WeatherConfig,

    /// Damage cadence and amounts.
    #[serde(default)]
    pub damage: DamageConfig,

    /// Dimensions with special handling.
    #[serde(default)]
    pub dimensions: DimensionConfig,

    /// Shape of the biome sampling grid.
    #[serde(default)]
    pub sampling: SamplerConfig,
}

impl Default for ExposureConfig {
    fn default() -> Self {
        Self {
            biomes: BTreeMap::new(),
            warm_blocks: default_warm_blocks(),
            weather: WeatherConfig::default(),
            damage: DamageConfig::default(),
            dimensions: DimensionConfig::default(),
            sampling: SamplerConfig::default(),
        }
    }
}

impl ExposureConfig {
    /// Load configuration from a YAML file at the given path.
    ///
    /// The result is not validated; call [`validate`](Self::validate).
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, or
    /// [`ConfigError::Yaml`] if the content is not valid YAML.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    /// Parse configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Yaml`] if the string is not valid YAML.
    pub fn parse(yaml: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yml::from_str(yaml)?;
        Ok(config)
    }

    /// Render the configuration as YAML.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::YamlSerialize`] if serialization fails.
    pub fn to_yaml(&self) -> Result<String, ConfigError> {
        serde_yml::to_string(self).map_err(|source| ConfigError::YamlSerialize { source })
    }

    /// Check every value against its permitted range.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] naming the first offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (biome, temperature) in &self.biomes {
            check_range(
                &format!("biomes.{biome}.day"),
                temperature.day,
                MIN_BIOME_TEMPERATURE,
                MAX_BIOME_TEMPERATURE,
            )?;
            check_range(
                &format!("biomes.{biome}.night"),
                temperature.night,
                MIN_BIOME_TEMPERATURE,
                MAX_BIOME_TEMPERATURE,
            )?;
        }

        for (block, warmth) in &self.warm_blocks {
            if !warmth.is_finite() {
                return Err(invalid(&format!("warm_blocks.{block}"), "must be a finite number"));
            }
        }

        check_range("weather.rain_diff", self.weather.rain_diff, -MAX_WEATHER_DIFF, MAX_WEATHER_DIFF)?;
        check_range("weather.snow_diff", self.weather.snow_diff, -MAX_WEATHER_DIFF, MAX_WEATHER_DIFF)?;

        let damage = [
            ("damage.normal_damage_tick", self.damage.normal_damage_tick),
            ("damage.extreme_damage_tick", self.damage.extreme_damage_tick),
            ("damage.normal_damage_amount", self.damage.normal_damage_amount),
            ("damage.extreme_damage_amount", self.damage.extreme_damage_amount),
            ("damage.burn_ticks", self.damage.burn_ticks),
        ];
        for (field, value) in damage {
            if value < 1 {
                return Err(invalid(field, "must be at least 1"));
            }
        }

        if self.sampling.samples > MAX_SAMPLES {
            return Err(invalid("sampling.samples", &format!("must be at most {MAX_SAMPLES}")));
        }
        if self.sampling.interval < 1 {
            return Err(invalid("sampling.interval", "must be at least 1"));
        }

        Ok(())
    }

    /// Compare the biome table against the biomes a world actually has.
    ///
    /// Each finding is also logged at `warn` level.
    pub fn audit<'a>(&self, known_biomes: impl IntoIterator<Item = &'a BiomeId>) -> Vec<ConfigWarning> {
        let mut warnings = Vec::new();

        if self.biomes.is_empty() {
            warn!("no biomes are configured; every biome will read as 0.0");
            warnings.push(ConfigWarning::NoBiomesConfigured);
            return warnings;
        }

        let mut missing: Vec<BiomeId> = Vec::new();
        for biome in known_biomes {
            if !self.biomes.contains_key(biome) && !missing.contains(biome) {
                missing.push(biome.clone());
            }
        }
        if !missing.is_empty() {
            warn!(
                count = missing.len(),
                "config does not specify every biome; missing biomes read as 0.0"
            );
            warnings.push(ConfigWarning::MissingBiomes(missing));
        }

        warnings
    }

    /// Return a copy with every missing known biome added at 0.0 / 0.0.
    ///
    /// Existing entries are left untouched.
    #[must_use]
    pub fn fill_missing_biomes<'a>(&self, known_biomes: impl IntoIterator<Item = &'a BiomeId>) -> Self {
        let mut filled = self.clone();
        for biome in known_biomes {
            filled.biomes.entry(biome.clone()).or_default();
        }
        filled
    }

    /// Temperature of a biome at the given day progress, or 0.0 if the biome
    /// is not configured.
    pub fn biome_temperature(&self, biome: &BiomeId, day_progress: f64) -> f64 {
        self.biomes
            .get(biome)
            .map_or(0.0, |temperature| temperature.at(day_progress))
    }

    /// Warmth of a block, or `None` if the block is not a warm (or cold)
    /// source.
    pub fn warmth(&self, block: &BlockId) -> Option<f64> {
        self.warm_blocks.get(block).copied()
    }

    /// Whether a dimension forces the extreme hot boundary.
    pub fn is_extreme_dimension(&self, dimension: &DimensionId) -> bool {
        self.dimensions.extreme.contains(dimension)
    }
}

// ---------------------------------------------------------------------------
// Sections
// ---------------------------------------------------------------------------

/// Configured temperatures of one biome.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct BiomeTemperature {
    /// Temperature at the warmest point of the day.
    pub day: f64,
    /// Temperature at the coldest point of the night.
    pub night: f64,
}

impl BiomeTemperature {
    /// Create a biome temperature pair.
    pub const fn new(day: f64, night: f64) -> Self {
        Self { day, night }
    }

    /// Temperature at the given day progress.
    pub fn at(&self, day_progress: f64) -> f64 {
        blend_day_night(self.night, self.day, day_progress)
    }
}

/// Weather deltas.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeatherConfig {
    /// Added per unit of rain intensity.
    #[serde(default = "default_rain_diff")]
    pub rain_diff: f64,

    /// Added per unit of snow intensity.
    #[serde(default = "default_snow_diff")]
    pub snow_diff: f64,
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            rain_diff: default_rain_diff(),
            snow_diff: default_snow_diff(),
        }
    }
}

/// Damage cadence and amounts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DamageConfig {
    /// Ticks between cold or heat damage checks.
    #[serde(default = "default_normal_damage_tick")]
    pub normal_damage_tick: u32,

    /// Ticks between freeze damage checks.
    #[serde(default = "default_extreme_damage_tick")]
    pub extreme_damage_tick: u32,

    /// Damage dealt by cold or heat.
    #[serde(default = "default_normal_damage_amount")]
    pub normal_damage_amount: u32,

    /// Damage dealt by freezing.
    #[serde(default = "default_extreme_damage_amount")]
    pub extreme_damage_amount: u32,

    /// How long a burning entity is set on fire for.
    #[serde(default = "default_burn_ticks")]
    pub burn_ticks: u32,
}

impl Default for DamageConfig {
    fn default() -> Self {
        Self {
            normal_damage_tick: default_normal_damage_tick(),
            extreme_damage_tick: default_extreme_damage_tick(),
            normal_damage_amount: default_normal_damage_amount(),
            extreme_damage_amount: default_extreme_damage_amount(),
            burn_ticks: default_burn_ticks(),
        }
    }
}

/// Dimension handling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DimensionConfig {
    /// Dimensions that force the extreme hot boundary.
    #[serde(default = "default_extreme_dimensions")]
    pub extreme: Vec<DimensionId>,
}

impl Default for DimensionConfig {
    fn default() -> Self {
        Self {
            extreme: default_extreme_dimensions(),
        }
    }
}

// ---------------------------------------------------------------------------
// Audit findings
// ---------------------------------------------------------------------------

/// A non-fatal finding from [`ExposureConfig::audit`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum ConfigWarning {
    /// The biome table is empty.
    NoBiomesConfigured,
    /// These biomes exist in the world but have no configured temperature.
    MissingBiomes(Vec<BiomeId>),
}

impl fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoBiomesConfigured => f.write_str("no biomes are configured"),
            Self::MissingBiomes(biomes) => {
                write!(f, "{} biome(s) missing from config:", biomes.len())?;
                for biome in biomes {
                    write!(f, " {biome}")?;
                }
                Ok(())
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Helpers and defaults
// ---------------------------------------------------------------------------

fn invalid(field: &str, reason: &str) -> ConfigError {
    ConfigError::Invalid {
        field: field.to_owned(),
        reason: reason.to_owned(),
    }
}

fn check_range(field: &str, value: f64, min: f64, max: f64) -> Result<(), ConfigError> {
    if value.is_finite() && (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(invalid(field, &format!("{value} is outside [{min}, {max}]")))
    }
}

fn default_warm_blocks() -> BTreeMap<BlockId, f64> {
    BTreeMap::from([
        (BlockId::from("minecraft:campfire"), 0.5),
        (BlockId::from("minecraft:fire"), 1.0),
        (BlockId::from("minecraft:lava"), 1.0),
    ])
}

const fn default_rain_diff() -> f64 {
    -0.5
}

const fn default_snow_diff() -> f64 {
    -0.5
}

const fn default_normal_damage_tick() -> u32 {
    60
}

const fn default_extreme_damage_tick() -> u32 {
    5
}

const fn default_normal_damage_amount() -> u32 {
    2
}

const fn default_extreme_damage_amount() -> u32 {
    4
}

const fn default_burn_ticks() -> u32 {
    80
}

fn default_extreme_dimensions() -> Vec<DimensionId> {
    vec![DimensionId::from("minecraft:the_nether")]
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp, clippy::indexing_slicing)]
mod tests {
    use super::*;

    const SAMPLE: &str = r"
biomes:
  minecraft:plains: { day: 0.5, night: -0.5 }
  minecraft:desert: { day: 2.0, night: -1.0 }
weather:
  rain_diff: -0.75
damage:
  normal_damage_tick: 40
";

    #[test]
    fn empty_yaml_yields_defaults() {
        let config = ExposureConfig::parse("{}").unwrap();
        assert_eq!(config, ExposureConfig::default());
        assert_eq!(config.damage.normal_damage_tick, 60);
        assert_eq!(config.damage.extreme_damage_tick, 5);
        assert_eq!(config.damage.burn_ticks, 80);
        assert_eq!(config.weather.snow_diff, -0.5);
        assert_eq!(config.sampling.samples, 256);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn partial_sections_keep_remaining_defaults() {
        let config = ExposureConfig::parse(SAMPLE).unwrap();
        assert_eq!(config.weather.rain_diff, -0.75);
        assert_eq!(config.weather.snow_diff, -0.5);
        assert_eq!(config.damage.normal_damage_tick, 40);
        assert_eq!(config.damage.normal_damage_amount, 2);
        assert_eq!(config.warmth(&BlockId::from("minecraft:lava")), Some(1.0));
    }

    #[test]
    fn biome_lookup_blends_and_defaults_to_zero() {
        let config = ExposureConfig::parse(SAMPLE).unwrap();
        let desert = BiomeId::from("minecraft:desert");
        assert_eq!(config.biome_temperature(&desert, 1.0), 2.0);
        assert_eq!(config.biome_temperature(&desert, 0.0), -1.0);
        assert_eq!(config.biome_temperature(&BiomeId::from("minecraft:ocean"), 1.0), 0.0);
    }

    #[test]
    fn unknown_blocks_are_not_sources() {
        let config = ExposureConfig::default();
        assert_eq!(config.warmth(&BlockId::from("minecraft:stone")), None);
    }

    #[test]
    fn nether_is_extreme_by_default() {
        let config = ExposureConfig::default();
        assert!(config.is_extreme_dimension(&DimensionId::from("minecraft:the_nether")));
        assert!(!config.is_extreme_dimension(&DimensionId::from("minecraft:overworld")));
    }

    #[test]
    fn validate_rejects_out_of_range_biome() {
        let mut config = ExposureConfig::default();
        config
            .biomes
            .insert(BiomeId::from("minecraft:badlands"), BiomeTemperature::new(3.5, 0.0));
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("biomes.minecraft:badlands.day"));
    }

    #[test]
    fn validate_rejects_zero_damage_period() {
        let mut config = ExposureConfig::default();
        config.damage.extreme_damage_tick = 0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Invalid { field, .. }) if field == "damage.extreme_damage_tick"
        ));
    }

    #[test]
    fn validate_caps_sample_count() {
        let config = ExposureConfig::parse("sampling: { samples: 4294967295 }").unwrap();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Invalid { field, .. }) if field == "sampling.samples"
        ));

        let config = ExposureConfig::parse("sampling: { samples: 4096 }").unwrap();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn validate_rejects_weather_outside_range() {
        let mut config = ExposureConfig::default();
        config.weather.snow_diff = -2.5;
        assert!(config.validate().is_err());
        config.weather.snow_diff = f64::NAN;
        assert!(config.validate().is_err());
    }

    #[test]
    fn audit_flags_empty_table() {
        let config = ExposureConfig::default();
        let plains = BiomeId::from("minecraft:plains");
        assert_eq!(config.audit([&plains]), vec![ConfigWarning::NoBiomesConfigured]);
    }

    #[test]
    fn audit_lists_missing_biomes_once() {
        let config = ExposureConfig::parse(SAMPLE).unwrap();
        let plains = BiomeId::from("minecraft:plains");
        let river = BiomeId::from("minecraft:river");
        let warnings = config.audit([&plains, &river, &river]);
        assert_eq!(warnings, vec![ConfigWarning::MissingBiomes(vec![river])]);
        assert_eq!(warnings[0].to_string(), "1 biome(s) missing from config: minecraft:river");
    }

    #[test]
    fn audit_is_quiet_for_complete_table() {
        let config = ExposureConfig::parse(SAMPLE).unwrap();
        let plains = BiomeId::from("minecraft:plains");
        assert!(config.audit([&plains]).is_empty());
    }

    #[test]
    fn fill_adds_missing_biomes_without_touching_existing() {
        let config = ExposureConfig::parse(SAMPLE).unwrap();
        let plains = BiomeId::from("minecraft:plains");
        let river = BiomeId::from("minecraft:river");
        let filled = config.fill_missing_biomes([&plains, &river]);

        assert_eq!(filled.biomes[&plains], BiomeTemperature::new(0.5, -0.5));
        assert_eq!(filled.biomes[&river], BiomeTemperature::new(0.0, 0.0));
        assert!(filled.audit([&plains, &river]).is_empty());
    }

    #[test]
    fn yaml_output_parses_back() {
        let config = ExposureConfig::parse(SAMPLE).unwrap();
        let yaml = config.to_yaml().unwrap();
        assert!(yaml.contains("minecraft:desert"));
        assert_eq!(ExposureConfig::parse(&yaml).unwrap(), config);
    }
}
