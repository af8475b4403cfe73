//! Macro editing dialog state.
//!
//! # Design
//! - Keep inputs as entered; validate only on submit.
//! - The preview always renders, substituting a placeholder for an empty body.

use crate::core::catalog::{Decoration, DecorationSet, Label};
use crate::core::codec;
use crate::core::macros::model::{Macro, MacroDraft};
use crate::error::MacroError;

/// Placeholder body rendered in the preview when the body is empty.
pub const PREVIEW_PLACEHOLDER: &str = "[your comment here]";

/// Mutable dialog form state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MacroForm {
    /// Id of the macro being edited; `None` when creating.
    pub editing: Option<String>,
    /// Name as entered.
    pub name: String,
    /// Selected label.
    pub label: Label,
    /// Checked decorations.
    pub decorations: DecorationSet,
    /// Body as entered.
    pub body: String,
}

impl Default for MacroForm {
    fn default() -> Self {
        Self {
            editing: None,
            name: String::new(),
            label: Label::Suggestion,
            decorations: DecorationSet::new(),
            body: String::new(),
        }
    }
}

impl MacroForm {
    /// Populate the form from an existing macro.
    #[must_use]
    pub fn from_macro(preset: &Macro) -> Self {
        Self {
            editing: Some(preset.id.clone()),
            name: preset.name.clone(),
            label: preset.label,
            decorations: preset.decorations.clone(),
            body: preset.body.clone(),
        }
    }

    /// Whether the form edits an existing macro.
    #[must_use]
    pub const fn is_edit(&self) -> bool {
        self.editing.is_some()
    }

    /// Dialog heading.
    #[must_use]
    pub const fn title(&self) -> &'static str {
        if self.is_edit() { "Edit Macro" } else { "Create Macro" }
    }

    /// Submit button caption.
    #[must_use]
    pub const fn submit_caption(&self) -> &'static str {
        if self.is_edit() { "Save" } else { "Create" }
    }

    /// Check or uncheck a decoration.
    pub fn set_decoration(&mut self, decoration: Decoration, checked: bool) {
        if checked {
            self.decorations.insert(decoration);
        } else {
            self.decorations.remove(&decoration);
        }
    }

    /// Text the macro would insert.
    #[must_use]
    pub fn preview(&self) -> String {
        let body = if self.body.is_empty() {
            PREVIEW_PLACEHOLDER
        } else {
            self.body.as_str()
        };
        codec::encode(self.label, &self.decorations, body)
    }

    /// Validate the form into a draft.
    ///
    /// # Errors
    /// Returns [`MacroError::EmptyName`] when the trimmed name is empty.
    pub fn to_draft(&self) -> Result<MacroDraft, MacroError> {
        MacroDraft {
            name: self.name.clone(),
            label: self.label,
            decorations: self.decorations.clone(),
            body: self.body.clone(),
        }
        .validated()
    }
}
