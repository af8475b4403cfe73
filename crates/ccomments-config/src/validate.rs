//! Validation rules for overlay configuration documents.

use crate::defaults::MIN_POLL_INTERVAL_MS;
use crate::error::{ConfigError, ConfigResult};
use crate::model::{OverlayConfig, SelectorSet};

impl OverlayConfig {
    /// Check the configuration for values the overlay cannot run with.
    ///
    /// # Errors
    /// Returns [`ConfigError::InvalidField`] naming the first offending field.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.storage_key.trim().is_empty() {
            return Err(ConfigError::invalid("storage_key", None, "empty"));
        }
        validate_selectors("field_selectors", &self.field_selectors)?;
        validate_selectors("container_selectors", &self.container_selectors)?;
        validate_selectors("anchor_selectors", &self.anchor_selectors)?;
        if self.poll_interval_ms < MIN_POLL_INTERVAL_MS {
            return Err(ConfigError::invalid(
                "poll_interval_ms",
                Some(self.poll_interval_ms.to_string()),
                "below_minimum",
            ));
        }
        if let Some(event) = self
            .navigation_events
            .iter()
            .find(|event| event.trim().is_empty())
        {
            return Err(ConfigError::invalid(
                "navigation_events",
                Some(event.clone()),
                "blank",
            ));
        }
        if self.style_element_id.trim().is_empty() {
            return Err(ConfigError::invalid("style_element_id", None, "empty"));
        }
        Ok(())
    }
}

fn validate_selectors(field: &'static str, selectors: &SelectorSet) -> ConfigResult<()> {
    if selectors.is_empty() {
        return Err(ConfigError::invalid(field, None, "empty"));
    }
    if let Some(blank) = selectors
        .as_slice()
        .iter()
        .find(|selector| selector.trim().is_empty())
    {
        return Err(ConfigError::invalid(field, Some(blank.clone()), "blank"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reason(result: ConfigResult<()>) -> Option<(&'static str, &'static str)> {
        match result {
            Err(ConfigError::InvalidField { field, reason, .. }) => Some((field, reason)),
            _ => None,
        }
    }

    #[test]
    fn default_profile_is_valid() {
        assert!(OverlayConfig::default().validate().is_ok());
    }

    #[test]
    fn empty_storage_key_is_rejected() {
        let config = OverlayConfig {
            storage_key: "  ".to_string(),
            ..OverlayConfig::default()
        };
        assert_eq!(reason(config.validate()), Some(("storage_key", "empty")));
    }

    #[test]
    fn empty_field_selectors_are_rejected() {
        let config = OverlayConfig {
            field_selectors: SelectorSet::new(Vec::new()),
            ..OverlayConfig::default()
        };
        assert_eq!(reason(config.validate()), Some(("field_selectors", "empty")));
    }

    #[test]
    fn blank_anchor_selector_is_rejected() {
        let config = OverlayConfig {
            anchor_selectors: SelectorSet::new(vec![".write-content".to_string(), String::new()]),
            ..OverlayConfig::default()
        };
        assert_eq!(reason(config.validate()), Some(("anchor_selectors", "blank")));
    }

    #[test]
    fn short_poll_interval_is_rejected() {
        let config = OverlayConfig {
            poll_interval_ms: 10,
            ..OverlayConfig::default()
        };
        assert_eq!(
            reason(config.validate()),
            Some(("poll_interval_ms", "below_minimum"))
        );
    }

    #[test]
    fn blank_navigation_event_is_rejected() {
        let config = OverlayConfig {
            navigation_events: vec!["turbo:load".to_string(), " ".to_string()],
            ..OverlayConfig::default()
        };
        assert_eq!(reason(config.validate()), Some(("navigation_events", "blank")));
    }

    #[test]
    fn navigation_events_may_be_empty() {
        let config = OverlayConfig {
            navigation_events: Vec::new(),
            ..OverlayConfig::default()
        };
        assert!(config.validate().is_ok());
    }
}
