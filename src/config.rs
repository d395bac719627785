//! Tuning constants for the scroll choreography.
//!
//! Every field has a default matching the live site; a page can override any
//! subset through a JSON blob (see [`SceneConfig::from_json`]).

use serde::Deserialize;

use crate::error::ConfigError;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    /// Exponential smoothing factor applied to the raw scroll offset per tick.
    pub smoothing: f64,
    pub parallax: ParallaxConfig,
    pub shadow: ShadowConfig,
    pub tilt: TiltConfig,
    pub elevator: ElevatorConfig,
    /// Walls and elevator appear once the page scrolls this close to the
    /// bottom of the parallax hero.
    pub reveal_margin: f64,
    /// `log` level filter name: "error", "warn", "info", "debug", "trace".
    pub log_level: String,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            smoothing: 0.1,
            parallax: ParallaxConfig::default(),
            shadow: ShadowConfig::default(),
            tilt: TiltConfig::default(),
            elevator: ElevatorConfig::default(),
            reveal_margin: 40.0,
            log_level: "info".to_owned(),
        }
    }
}

impl SceneConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn level_filter(&self) -> log::LevelFilter {
        self.log_level.parse().unwrap_or(log::LevelFilter::Info)
    }
}

/// Divisors are negative: layers drift upward as the page scrolls down.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ParallaxConfig {
    pub background_divisor: f64,
    pub mid_divisor: f64,
    pub gradient_divisor: f64,
    pub top_divisor: f64,
    pub fade_distance: f64,
    /// Fraction of `fade_distance` over which the gradient fades in.
    pub fade_ramp: f64,
    pub top_max_scale: f64,
    pub top_scale_distance: f64,
}

impl Default for ParallaxConfig {
    fn default() -> Self {
        Self {
            background_divisor: -6.0,
            mid_divisor: -10.0,
            gradient_divisor: -7.1,
            top_divisor: -5.7,
            fade_distance: 600.0,
            fade_ramp: 0.1,
            top_max_scale: 1.1,
            top_scale_distance: 2000.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ShadowConfig {
    pub base_offset: f64,
    pub offset_swing: f64,
    pub base_blur: f64,
    pub depth_swing: f64,
    pub color: String,
}

impl Default for ShadowConfig {
    fn default() -> Self {
        Self {
            base_offset: 4.0,
            offset_swing: 8.0,
            base_blur: 12.0,
            depth_swing: 30.0,
            color: "rgba(0,0,0,0.12)".to_owned(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct TiltConfig {
    /// Angle of the ceiling (negated) and floor panels, and of inactive snaps.
    pub pinned_angle: f64,
    /// Magnet band as a fraction of viewport height.
    pub magnet_band: f64,
    pub t_limit: f64,
    pub max_up: f64,
    pub max_down: f64,
    pub ease: f64,
    pub depth_up: f64,
    pub depth_down: f64,
    /// Pivot is lifted by this fraction of the panel height above the line.
    pub pivot_lift: f64,
}

impl Default for TiltConfig {
    fn default() -> Self {
        Self {
            pinned_angle: 70.0,
            magnet_band: 0.18,
            t_limit: 1.2,
            max_up: 110.0,
            max_down: 15.0,
            ease: 0.12,
            depth_up: 0.4,
            depth_down: 0.2,
            pivot_lift: 0.08,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ElevatorConfig {
    /// Human number of the first floor in document order.
    pub top_floor_number: i64,
    /// Jumps land this far below a floor's top so the locator settles on it.
    pub landing_offset: f64,
}

impl Default for ElevatorConfig {
    fn default() -> Self {
        Self { top_floor_number: 6, landing_offset: 1.0 }
    }
}
