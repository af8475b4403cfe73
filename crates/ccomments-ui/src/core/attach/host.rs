//! Host document contract used by the attachment manager.

use std::fmt;

use ccomments_config::{OverlayConfig, SelectorSet};

use crate::core::selection::FieldEdit;
use crate::error::AttachError;

/// Stable identity the host assigns to a discovered field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FieldId(u64);

impl FieldId {
    /// Wrap a raw host identifier.
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Raw host identifier.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "field-{}", self.0)
    }
}

/// Where a toolbar goes relative to its field.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Placement {
    /// Ancestors that contain the field and its toolbar.
    pub container: SelectorSet,
    /// Ancestors the toolbar is inserted before.
    pub anchor: SelectorSet,
}

impl Placement {
    /// Placement selectors from the overlay configuration.
    #[must_use]
    pub fn from_config(config: &OverlayConfig) -> Self {
        Self {
            container: config.container_selectors.clone(),
            anchor: config.anchor_selectors.clone(),
        }
    }
}

/// Operations the overlay needs from the document it decorates.
///
/// Hosts hand out one [`FieldId`] per field element and keep returning it for
/// as long as the element lives, so repeated scans are cheap to deduplicate.
pub trait DocumentHost {
    /// Subtree root reported by structural change notifications.
    type Node;
    /// Handle to a created toolbar mount point.
    type Mount;

    /// All fields in the document matching `fields`.
    fn scan_document(&mut self, fields: &SelectorSet) -> Vec<FieldId>;

    /// Fields matching `fields` at or below `root`.
    fn scan_subtree(&mut self, root: &Self::Node, fields: &SelectorSet) -> Vec<FieldId>;

    /// Whether the field is still part of the document.
    fn is_attached(&self, field: FieldId) -> bool;

    /// Drop any host bookkeeping for a field that left the document.
    fn forget(&mut self, field: FieldId);

    /// Create the toolbar mount point next to a field.
    ///
    /// # Errors
    /// Returns [`AttachError`] when no container or anchor can be resolved, or
    /// when inserting the mount fails.
    fn mount_toolbar(
        &mut self,
        field: FieldId,
        placement: &Placement,
    ) -> Result<Self::Mount, AttachError>;

    /// Install presentation assets once per document.
    ///
    /// # Errors
    /// Returns [`AttachError::Host`] when the assets cannot be inserted.
    fn inject_assets(&mut self, style_id: &str) -> Result<(), AttachError>;

    /// Current field text.
    ///
    /// # Errors
    /// Returns [`AttachError::UnknownField`] for fields the host does not know.
    fn read_text(&self, field: FieldId) -> Result<String, AttachError>;

    /// Replace the field text, place the cursor and notify listeners.
    ///
    /// # Errors
    /// Returns [`AttachError`] when the field is unknown or the write fails.
    fn write_text(&mut self, field: FieldId, edit: &FieldEdit) -> Result<(), AttachError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_ids_display_and_order() {
        let low = FieldId::new(3);
        let high = FieldId::new(11);
        assert!(low < high);
        assert_eq!(high.get(), 11);
        assert_eq!(low.to_string(), "field-3");
    }

    #[test]
    fn placement_follows_config() {
        let config = OverlayConfig::default();
        let placement = Placement::from_config(&config);
        assert_eq!(placement.container, config.container_selectors);
        assert_eq!(placement.anchor, config.anchor_selectors);
    }
}
