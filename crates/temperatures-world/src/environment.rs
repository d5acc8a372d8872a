//! Day/night cycle math for the Temperatures exposure engine.
//!
//! Biome temperatures are configured as a pair of values, one for the
//! middle of the day and one for the middle of the night. The value used at
//! any moment is a linear blend between the two, driven by a smooth
//! oscillation of the day-time clock.
//!
//! # Day Progress
//!
//! `progress = sin(day_time / (12000 / pi)) / 2 + 0.5`
//!
//! | Day time | Progress | Blend                |
//! |----------|----------|----------------------|
//! | 0        | 0.5      | halfway              |
//! | 6000     | 1.0      | full day value       |
//! | 12000    | 0.5      | halfway              |
//! | 18000    | 0.0      | full night value     |
//!
//! The clock is not reduced modulo the day length first: the sine already
//! repeats every [`DAY_LENGTH_TICKS`].

use std::f64::consts::PI;

/// Number of clock ticks in one full day/night cycle.
pub const DAY_LENGTH_TICKS: i64 = 24_000;

/// Ticks per radian of the day-progress oscillation (`12000 / pi`).
const TICKS_PER_RADIAN: f64 = 12_000.0 / PI;

/// How far into "day" the clock is, in `[0, 1]`.
///
/// 1.0 is the warmest point of the day, 0.0 the coldest point of the night.
#[allow(clippy::cast_precision_loss)] // day-time clocks stay far below 2^52
pub fn day_progress(day_time: i64) -> f64 {
    (day_time as f64 / TICKS_PER_RADIAN).sin() / 2.0 + 0.5
}

/// Linear interpolation from `from` (at `t = 0`) to `to` (at `t = 1`).
pub fn lerp(from: f64, to: f64, t: f64) -> f64 {
    (to - from).mul_add(t, from)
}

/// Blend a night value and a day value using a day-progress value.
pub fn blend_day_night(night: f64, day: f64, progress: f64) -> f64 {
    lerp(night, day, progress)
}
