//! Wheel configuration
//!
//! Loaded from JSON; any missing field falls back to the default wheel
//! (8 panels, one rare, 3 second spin).

use std::path::Path;

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::wheel::{Easing, PanelTable};
use crate::{Error, Result};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WheelConfig {
    // === Outcome ===
    /// Number of equal panels
    pub panel_count: usize,
    /// Panels that yield a rare banger
    pub rare_panel_indexes: Vec<usize>,

    // === Spin ===
    /// Animation length (seconds)
    pub spin_duration_secs: f64,
    /// Whole turns added to each spin (inclusive range)
    pub min_turns: u32,
    pub max_turns: u32,
    pub easing: Easing,

    // === Rendering only ===
    /// Square view size (logical pixels); the wheel is centered in it
    pub size: f64,
    pub outer_radius: f64,
    /// Hub radius; segments are annular between this and `outer_radius`
    pub inner_radius: f64,
    /// Gap between the rim and the pointer tip
    pub pointer_offset: f64,
    /// Rim light bulbs
    pub bulb_count: usize,
}

impl Default for WheelConfig {
    fn default() -> Self {
        Self {
            panel_count: PANEL_COUNT,
            rare_panel_indexes: RARE_PANEL_INDEXES.to_vec(),

            spin_duration_secs: SPIN_DURATION_SECS,
            min_turns: MIN_SPIN_TURNS,
            max_turns: MAX_SPIN_TURNS,
            easing: Easing::default(),

            size: WHEEL_SIZE,
            outer_radius: WHEEL_OUTER_RADIUS,
            inner_radius: WHEEL_INNER_RADIUS,
            pointer_offset: POINTER_OFFSET,
            bulb_count: BULB_COUNT,
        }
    }
}

impl WheelConfig {
    /// Parse and validate a JSON config
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Read, parse and validate a config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded wheel config from {}", path.display());
        Ok(config)
    }

    /// Like `load`, but any failure falls back to the default wheel
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::load(path) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("Using default wheel config ({}): {}", path.display(), e);
                Self::default()
            }
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.panel_count == 0 {
            return Err(invalid("panel_count must be at least 1"));
        }
        if let Some(&bad) = self.rare_panel_indexes.iter().find(|&&i| i >= self.panel_count) {
            return Err(invalid(format!(
                "rare panel {} out of range for {} panels",
                bad, self.panel_count
            )));
        }
        if !(self.spin_duration_secs.is_finite() && self.spin_duration_secs > 0.0) {
            return Err(invalid(format!(
                "spin_duration_secs must be positive, got {}",
                self.spin_duration_secs
            )));
        }
        if self.min_turns > self.max_turns {
            return Err(invalid(format!(
                "min_turns {} exceeds max_turns {}",
                self.min_turns, self.max_turns
            )));
        }
        if !(self.inner_radius >= 0.0 && self.inner_radius < self.outer_radius) {
            return Err(invalid(format!(
                "need 0 <= inner_radius < outer_radius, got {} / {}",
                self.inner_radius, self.outer_radius
            )));
        }
        if self.outer_radius > self.size / 2.0 {
            return Err(invalid(format!(
                "outer_radius {} does not fit in size {}",
                self.outer_radius, self.size
            )));
        }
        Ok(())
    }

    /// Panel layout for this wheel
    pub fn panel_table(&self) -> PanelTable {
        PanelTable::new(self.panel_count, &self.rare_panel_indexes)
    }

    /// Wheel center in view coordinates
    pub fn center(&self) -> DVec2 {
        DVec2::splat(self.size / 2.0)
    }
}

fn invalid(msg: impl Into<String>) -> Error {
    Error::InvalidConfig(msg.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = WheelConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.panel_table().rare_indexes(), vec![1]);
        assert_eq!(config.center(), DVec2::new(160.0, 160.0));
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = WheelConfig::from_json(r#"{ "panel_count": 12, "rare_panel_indexes": [0, 6] }"#)
            .unwrap();
        assert_eq!(config.panel_count, 12);
        assert_eq!(config.rare_panel_indexes, vec![0, 6]);
        assert_eq!(config.spin_duration_secs, SPIN_DURATION_SECS);
        assert_eq!(config.easing, Easing::EaseOutCubic);
    }

    #[test]
    fn test_easing_parses_snake_case() {
        let config = WheelConfig::from_json(r#"{ "easing": "ease_in_out_quad" }"#).unwrap();
        assert_eq!(config.easing, Easing::EaseInOutQuad);
    }

    #[test]
    fn test_json_roundtrip() {
        let config = WheelConfig {
            panel_count: 6,
            min_turns: 2,
            ..WheelConfig::default()
        };
        let back = WheelConfig::from_json(&config.to_json().unwrap()).unwrap();
        assert_eq!(back, config);
    }

    #[test]
    fn test_rejects_bad_configs() {
        let cases = [
            r#"{ "panel_count": 0 }"#,
            r#"{ "rare_panel_indexes": [8] }"#,
            r#"{ "spin_duration_secs": 0.0 }"#,
            r#"{ "min_turns": 5, "max_turns": 4 }"#,
            r#"{ "inner_radius": 200.0 }"#,
            r#"{ "outer_radius": 500.0, "inner_radius": 10.0 }"#,
        ];
        for json in cases {
            match WheelConfig::from_json(json) {
                Err(Error::InvalidConfig(_)) => {}
                other => panic!("{json} should be invalid, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_malformed_json_is_json_error() {
        assert!(matches!(WheelConfig::from_json("{ nope"), Err(Error::Json(_))));
    }

    #[test]
    fn test_missing_file_falls_back() {
        let config = WheelConfig::load_or_default("/definitely/not/here/wheel.json");
        assert_eq!(config, WheelConfig::default());
        assert!(matches!(
            WheelConfig::load("/definitely/not/here/wheel.json"),
            Err(Error::Io(_))
        ));
    }
}
