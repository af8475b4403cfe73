//! Per-field label/decoration selection state machine.
//!
//! # Design
//! - Transitions are pure; rendering the field text is a separate step so the
//!   caller decides when to write through the host.
//! - Decoration membership is tracked even while no label is selected.

use crate::core::catalog::{Decoration, DecorationSet, Label};
use crate::core::codec::{self, utf16_len};
use crate::core::macros::Macro;

/// User interaction applied to a field's selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transition {
    /// Select the label, or deselect it when already selected.
    ToggleLabel(Label),
    /// Flip membership of the decoration.
    ToggleDecoration(Decoration),
}

/// Field text and cursor produced by a transition or macro application.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldEdit {
    /// Full replacement text for the field.
    pub text: String,
    /// Cursor offset in UTF-16 code units.
    pub cursor: u32,
}

impl FieldEdit {
    /// Replace the whole field with the macro's text.
    ///
    /// The cursor lands at the end when the macro carries a body, otherwise
    /// right after the prefix.
    #[must_use]
    pub fn for_macro(preset: &Macro) -> Self {
        let text = codec::encode(preset.label, &preset.decorations, &preset.body);
        let cursor = if preset.body.is_empty() {
            utf16_len(&codec::prefix(preset.label, &preset.decorations))
        } else {
            utf16_len(&text)
        };
        Self { text, cursor }
    }
}

/// Selection tuple for one field.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SelectionState {
    label: Option<Label>,
    decorations: DecorationSet,
}

impl SelectionState {
    /// Selection matching a macro's label and decorations.
    #[must_use]
    pub fn from_macro(preset: &Macro) -> Self {
        Self {
            label: Some(preset.label),
            decorations: preset.decorations.clone(),
        }
    }

    /// Currently selected label, if any.
    #[must_use]
    pub const fn label(&self) -> Option<Label> {
        self.label
    }

    /// Currently selected decorations.
    #[must_use]
    pub const fn decorations(&self) -> &DecorationSet {
        &self.decorations
    }

    /// Whether `label` is the selected label.
    #[must_use]
    pub fn is_selected(&self, label: Label) -> bool {
        self.label == Some(label)
    }

    /// Whether `decoration` is in the selected set.
    #[must_use]
    pub fn has_decoration(&self, decoration: Decoration) -> bool {
        self.decorations.contains(&decoration)
    }

    /// Apply a transition in place.
    pub fn apply(&mut self, transition: Transition) {
        match transition {
            Transition::ToggleLabel(label) => {
                self.label = if self.label == Some(label) {
                    None
                } else {
                    Some(label)
                };
            }
            Transition::ToggleDecoration(decoration) => {
                if !self.decorations.remove(&decoration) {
                    self.decorations.insert(decoration);
                }
            }
        }
    }

    /// Re-synthesize the field text from the current selection.
    ///
    /// Existing prefixes are stripped from `current` first; the remaining body
    /// is kept. Without a label the field holds just the body.
    #[must_use]
    pub fn render(&self, current: &str) -> FieldEdit {
        let body = codec::decode(current);
        match self.label {
            Some(label) => {
                let prefix = codec::prefix(label, &self.decorations);
                let cursor = utf16_len(&prefix);
                let mut text = prefix;
                text.push_str(body);
                FieldEdit { text, cursor }
            }
            None => FieldEdit {
                text: body.to_string(),
                cursor: utf16_len(body),
            },
        }
    }
}
