//! Navigation configuration: zoom tuning and overlay marker sizing.
//!
//! Defaults match the editor's built-in behavior. Hosts may override them from
//! environment variables; every override is validated so the camera scale can
//! never leave `[MIN_SCALE, MAX_SCALE]`.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use crate::consts::{FOCUS_PIVOT_SIDE, MAX_SCALE, MIN_SCALE, ZOOM_STEP};

pub const ENV_ZOOM_STEP: &str = "EDITOR_ZOOM_STEP";
pub const ENV_MIN_SCALE: &str = "EDITOR_MIN_SCALE";
pub const ENV_MAX_SCALE: &str = "EDITOR_MAX_SCALE";
pub const ENV_FOCUS_PIVOT_SIZE: &str = "EDITOR_FOCUS_PIVOT_SIZE";

/// Errors produced while building a [`NavigationConfig`].
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    /// A variable was set but is not a finite number.
    #[error("invalid number for {var}: {value:?}")]
    InvalidNumber { var: String, value: String },

    /// A scale bound lies outside the editor's hard limits.
    #[error("{name} {value} outside [0.00001, 10000]")]
    ScaleOutOfRange { name: &'static str, value: f64 },

    /// The minimum scale is not below the maximum.
    #[error("min scale {min} must be below max scale {max}")]
    InvertedScaleBounds { min: f64, max: f64 },

    /// A value that must be strictly positive is not.
    #[error("{name} must be positive, got {value}")]
    NotPositive { name: &'static str, value: f64 },
}

/// Tuning for [`crate::service::ViewportNavigationService`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NavigationConfig {
    /// Fraction of the scale removed per unit of zoom factor.
    pub zoom_step: f64,
    /// Lower scale bound (most zoomed out).
    pub min_scale: f64,
    /// Upper scale bound (most zoomed in).
    pub max_scale: f64,
    /// Side length of the selection-origin pivot while focused.
    pub focus_pivot_side: f64,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            zoom_step: ZOOM_STEP,
            min_scale: MIN_SCALE,
            max_scale: MAX_SCALE,
            focus_pivot_side: FOCUS_PIVOT_SIDE,
        }
    }
}

impl NavigationConfig {
    /// Build config from environment variables.
    ///
    /// Optional:
    /// - `EDITOR_ZOOM_STEP`: default 0.01
    /// - `EDITOR_MIN_SCALE`: default 0.00001
    /// - `EDITOR_MAX_SCALE`: default 10000
    /// - `EDITOR_FOCUS_PIVOT_SIZE`: default 10
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a variable is not a number or the
    /// resulting config fails [`Self::validate`].
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| match std::env::var(key) {
            Ok(value) => Some(value),
            Err(_) => None,
        })
    }

    /// Build config from an arbitrary key lookup. Absent keys take defaults.
    ///
    /// # Errors
    ///
    /// Same as [`Self::from_env`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let config = Self {
            zoom_step: parse_f64(&lookup, ENV_ZOOM_STEP, defaults.zoom_step)?,
            min_scale: parse_f64(&lookup, ENV_MIN_SCALE, defaults.min_scale)?,
            max_scale: parse_f64(&lookup, ENV_MAX_SCALE, defaults.max_scale)?,
            focus_pivot_side: parse_f64(&lookup, ENV_FOCUS_PIVOT_SIZE, defaults.focus_pivot_side)?,
        };
        config.validate()?;
        Ok(config)
    }

    /// Check that every field is usable.
    ///
    /// # Errors
    ///
    /// Returns the first violated constraint.
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_positive("zoom step", self.zoom_step)?;
        check_positive("focus pivot size", self.focus_pivot_side)?;
        check_scale_bound("min scale", self.min_scale)?;
        check_scale_bound("max scale", self.max_scale)?;
        if self.min_scale >= self.max_scale {
            return Err(ConfigError::InvertedScaleBounds { min: self.min_scale, max: self.max_scale });
        }
        Ok(())
    }
}

fn check_positive(name: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NotPositive { name, value })
    }
}

fn check_scale_bound(name: &'static str, value: f64) -> Result<(), ConfigError> {
    if (MIN_SCALE..=MAX_SCALE).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::ScaleOutOfRange { name, value })
    }
}

fn parse_f64<F>(lookup: &F, key: &str, default: f64) -> Result<f64, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let Some(raw) = lookup(key) else {
        return Ok(default);
    };
    match raw.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(ConfigError::InvalidNumber { var: key.to_string(), value: raw }),
    }
}
