//! Playground configuration.
//!
//! The web app embeds `playground.json` with `include_str!` and parses it at
//! startup. Every field is optional; whatever is missing falls back to the
//! built-in defaults below.

use crate::cards::{Card, CardList};
use crate::chart::ChartKind;
use crate::resize::{DeltaTracking, ResizeBounds, Size};
use crate::swatch::DEFAULT_SWATCHES;
use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaygroundConfig {
    pub resize: ResizeBounds,
    pub initial_size: Size,
    pub tracking: DeltaTracking,
    pub swatches: Vec<String>,
    pub cards: CardList,
    pub default_chart: ChartKind,
}

impl Default for PlaygroundConfig {
    fn default() -> Self {
        Self {
            resize: ResizeBounds::default(),
            initial_size: Size::default(),
            tracking: DeltaTracking::default(),
            swatches: DEFAULT_SWATCHES.iter().map(|s| s.to_string()).collect(),
            cards: default_cards(),
            default_chart: ChartKind::Pie,
        }
    }
}

fn default_cards() -> CardList {
    CardList::from(vec![
        Card::new(1, "Write a cool JS library"),
        Card::new(2, "Make it generic enough"),
        Card::new(3, "Write README"),
        Card::new(4, "Create some examples"),
        Card::new(
            5,
            "Spam in Twitter and IRC to promote it (note that this element is taller than the others)",
        ),
        Card::new(6, "???"),
        Card::new(7, "PROFIT"),
    ])
}

impl PlaygroundConfig {
    /// Parse and validate a JSON config. The initial size is clamped into the
    /// resize bounds rather than rejected.
    pub fn from_json(json: &str) -> Result<Self> {
        let mut config: PlaygroundConfig =
            serde_json::from_str(json).context("failed to parse playground config")?;
        config.validate()?;
        config.initial_size = config.resize.clamp(config.initial_size);
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        self.resize.validate().context("invalid resize bounds")?;
        if self.swatches.iter().any(|s| s.trim().is_empty()) {
            bail!("swatch colours must not be empty");
        }
        Ok(())
    }

    /// Parse `json`, falling back to the defaults when it is rejected. The
    /// second value is the rejection's error chain, outermost first, and is
    /// empty on success.
    pub fn load(json: &str) -> (Self, Vec<String>) {
        match Self::from_json(json) {
            Ok(config) => (config, Vec::new()),
            Err(e) => {
                log::warn!("using default playground config: {:#}", e);
                (Self::default(), e.chain().map(|c| c.to_string()).collect())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_object_is_default() {
        let config = PlaygroundConfig::from_json("{}").unwrap();
        assert_eq!(config, PlaygroundConfig::default());
        assert_eq!(config.swatches.len(), 10);
        assert_eq!(config.cards.len(), 7);
    }

    #[test]
    fn test_partial_bounds_keep_other_defaults() {
        let config = PlaygroundConfig::from_json(
            r#"{ "resize": { "max_width": 800 }, "tracking": "anchored", "default_chart": "radar" }"#,
        )
        .unwrap();
        assert_eq!(config.resize.max_width, 800.0);
        assert_eq!(config.resize.min_width, 200.0);
        assert_eq!(config.tracking, DeltaTracking::Anchored);
        assert_eq!(config.default_chart, ChartKind::Radar);
    }

    #[test]
    fn test_initial_size_clamped_into_bounds() {
        let config = PlaygroundConfig::from_json(
            r#"{ "initial_size": { "width": 1000, "height": 10 } }"#,
        )
        .unwrap();
        assert_eq!(config.initial_size, Size::new(600.0, 200.0));
    }

    #[test]
    fn test_inverted_bounds_rejected() {
        let err = PlaygroundConfig::from_json(r#"{ "resize": { "min_height": 700 } }"#)
            .unwrap_err();
        assert_eq!(err.to_string(), "invalid resize bounds");
        assert!(format!("{:#}", err).contains("minimum height 700 exceeds maximum 600"));
    }

    #[test]
    fn test_bad_json_is_an_error() {
        let err = PlaygroundConfig::from_json("{ not json").unwrap_err();
        assert!(err.to_string().contains("failed to parse playground config"));
        assert!(PlaygroundConfig::from_json(r#"{ "default_chart": "bar" }"#).is_err());
        assert!(PlaygroundConfig::from_json(r#"{ "swatches": ["red", " "] }"#).is_err());
    }

    #[test]
    fn test_load_falls_back_with_error_chain() {
        let (config, errors) = PlaygroundConfig::load("{ not json");
        assert_eq!(config, PlaygroundConfig::default());
        assert!(errors.len() >= 2);
        assert_eq!(errors[0], "failed to parse playground config");

        let (config, errors) =
            PlaygroundConfig::load(r#"{ "resize": { "min_width": 0 } }"#);
        assert_eq!(config, PlaygroundConfig::default());
        assert_eq!(errors[0], "invalid resize bounds");
        assert!(errors[1].contains("minimum width must be positive"));
    }

    #[test]
    fn test_load_accepts_valid_config() {
        let (config, errors) = PlaygroundConfig::load(r#"{ "tracking": "anchored" }"#);
        assert!(errors.is_empty());
        assert_eq!(config.tracking, DeltaTracking::Anchored);
    }
}
