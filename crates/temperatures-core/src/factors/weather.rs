//! Rain and snow cool things down.

use temperatures_types::Precipitation;

use crate::factor::{EvaluationContext, FactorProvider, NO_ORDER};

/// Adds the configured rain or snow delta, scaled by precipitation
/// intensity, when something is falling where the entity stands.
#[derive(Debug, Clone, Copy, Default)]
pub struct WeatherFactor;

impl FactorProvider for WeatherFactor {
    fn name(&self) -> &str {
        "weather"
    }

    fn order(&self) -> i32 {
        NO_ORDER
    }

    fn transform(&self, ctx: &EvaluationContext<'_>, value: f64) -> f64 {
        let diff = match ctx.world.precipitation_at(ctx.entity.position) {
            Precipitation::None => return value,
            Precipitation::Rain => ctx.config.weather.rain_diff,
            Precipitation::Snow => ctx.config.weather.snow_diff,
        };
        diff.mul_add(ctx.world.precipitation_intensity(), value)
    }

    fn override_priority(&self, _ctx: &EvaluationContext<'_>, _old: f64, _new: f64) -> Option<i32> {
        None
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use temperatures_types::{BlockPos, EntitySnapshot};
    use temperatures_world::{BiomeClimate, GridWorld, SpatialSampler, WeatherState};

    use super::*;
    use crate::config::ExposureConfig;

    fn run(world: &GridWorld, config: &ExposureConfig, y: i32) -> f64 {
        let entity = EntitySnapshot::at(BlockPos::new(0, y, 0));
        let sampler = SpatialSampler::default();
        let ctx = EvaluationContext::new(&entity, world, config, &sampler);
        WeatherFactor.transform(&ctx, 1.0)
    }

    #[test]
    fn clear_skies_pass_through() {
        assert_eq!(run(&GridWorld::default(), &ExposureConfig::default(), 64), 1.0);
    }

    #[test]
    fn rain_scales_with_intensity() {
        let world = GridWorld::default().with_weather(WeatherState::rain(0.5).unwrap());
        assert_eq!(run(&world, &ExposureConfig::default(), 64), 0.75);
    }

    #[test]
    fn snow_uses_snow_diff() {
        let mut config = ExposureConfig::default();
        config.weather.snow_diff = -1.0;
        let world = GridWorld::default()
            .with_climate("minecraft:plains", BiomeClimate::snowy_above(100))
            .with_weather(WeatherState::rain(1.0).unwrap());
        assert_eq!(run(&world, &config, 120), 0.0);
        assert_eq!(run(&world, &config, 64), 0.5);
    }

    #[test]
    fn dry_biome_ignores_rain() {
        let world = GridWorld::default()
            .with_climate("minecraft:plains", BiomeClimate::dry())
            .with_weather(WeatherState::rain(1.0).unwrap());
        assert_eq!(run(&world, &ExposureConfig::default(), 64), 1.0);
    }
}
