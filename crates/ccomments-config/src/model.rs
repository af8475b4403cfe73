//! Typed overlay configuration.
//!
//! # Design
//! - Every field has a default so partial documents stay valid.
//! - Unknown fields are rejected to surface typos early.
//! - Selector lists are kept as raw CSS strings; the DOM host joins them.

use serde::{Deserialize, Serialize};

use crate::defaults;
use crate::error::{ConfigError, ConfigResult};

/// Ordered list of CSS selectors evaluated as one selector group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SelectorSet(Vec<String>);

impl SelectorSet {
    /// Build a selector set from owned selectors.
    #[must_use]
    pub const fn new(selectors: Vec<String>) -> Self {
        Self(selectors)
    }

    /// Individual selectors in declaration order.
    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    /// Whether the set has no selectors at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Selector group suitable for `querySelectorAll`, `matches` and `closest`.
    #[must_use]
    pub fn joined(&self) -> String {
        self.0.join(", ")
    }
}

impl From<&[&str]> for SelectorSet {
    fn from(values: &[&str]) -> Self {
        Self(defaults::owned(values))
    }
}

/// Runtime configuration for discovery, placement and persistence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OverlayConfig {
    /// Key the macro collection is stored under in every sink.
    pub storage_key: String,
    /// Selectors identifying comment fields to decorate.
    pub field_selectors: SelectorSet,
    /// Ancestors treated as the field container; the parent is used when none match.
    pub container_selectors: SelectorSet,
    /// Ancestors the toolbar is inserted in front of.
    pub anchor_selectors: SelectorSet,
    /// Period of the full-document discovery poll, in milliseconds.
    pub poll_interval_ms: u32,
    /// Document events that signal an in-place page replacement.
    pub navigation_events: Vec<String>,
    /// Id of the injected stylesheet element.
    pub style_element_id: String,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self::github()
    }
}

impl OverlayConfig {
    /// Built-in profile targeting GitHub pull request and issue pages.
    #[must_use]
    pub fn github() -> Self {
        Self {
            storage_key: defaults::STORAGE_KEY.to_string(),
            field_selectors: SelectorSet::from(defaults::FIELD_SELECTORS),
            container_selectors: SelectorSet::from(defaults::CONTAINER_SELECTORS),
            anchor_selectors: SelectorSet::from(defaults::ANCHOR_SELECTORS),
            poll_interval_ms: defaults::POLL_INTERVAL_MS,
            navigation_events: defaults::owned(defaults::NAVIGATION_EVENTS),
            style_element_id: defaults::STYLE_ELEMENT_ID.to_string(),
        }
    }

    /// Parse and validate a JSON configuration document.
    ///
    /// Missing fields take their GitHub profile defaults.
    ///
    /// # Errors
    /// Returns [`ConfigError::Parse`] for malformed JSON or unknown fields and
    /// [`ConfigError::InvalidField`] when validation fails.
    pub fn from_json(document: &str) -> ConfigResult<Self> {
        let config: Self =
            serde_json::from_str(document).map_err(|source| ConfigError::Parse { source })?;
        config.validate()?;
        Ok(config)
    }
}
