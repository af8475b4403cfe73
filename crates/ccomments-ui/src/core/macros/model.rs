//! Persisted macro records.

use serde::{Deserialize, Serialize};

use crate::core::catalog::{DecorationSet, Label};
use crate::core::codec;
use crate::error::MacroError;

/// Placeholder body shown in macro tooltips when the macro has none.
pub const TOOLTIP_PLACEHOLDER: &str = "...";

/// Persisted preset. Field names match the stored JSON layout.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Macro {
    /// Unique identifier within the collection.
    pub id: String,
    /// Display name; non-empty and trimmed.
    pub name: String,
    /// Label applied by the macro.
    pub label: Label,
    /// Decorations applied by the macro.
    #[serde(default)]
    pub decorations: DecorationSet,
    /// Boilerplate body; may be empty.
    #[serde(default)]
    pub body: String,
}

impl Macro {
    /// Attach an id to a validated draft.
    #[must_use]
    pub fn from_draft(id: String, draft: MacroDraft) -> Self {
        Self {
            id,
            name: draft.name,
            label: draft.label,
            decorations: draft.decorations,
            body: draft.body,
        }
    }

    /// Hover text for the macro button.
    #[must_use]
    pub fn tooltip(&self) -> String {
        let body = if self.body.is_empty() {
            TOOLTIP_PLACEHOLDER
        } else {
            self.body.as_str()
        };
        codec::encode(self.label, &self.decorations, body)
    }
}

/// Macro contents before an id is assigned.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MacroDraft {
    /// Display name as entered.
    pub name: String,
    /// Label applied by the macro.
    pub label: Label,
    /// Decorations applied by the macro.
    pub decorations: DecorationSet,
    /// Boilerplate body.
    pub body: String,
}

impl MacroDraft {
    /// Trim the name and reject drafts without one.
    ///
    /// # Errors
    /// Returns [`MacroError::EmptyName`] when the trimmed name is empty.
    pub fn validated(self) -> Result<Self, MacroError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(MacroError::EmptyName);
        }
        Ok(Self {
            name: name.to_string(),
            ..self
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::catalog::Decoration;

    fn draft(name: &str) -> MacroDraft {
        MacroDraft {
            name: name.to_string(),
            label: Label::Praise,
            decorations: DecorationSet::new(),
            body: String::new(),
        }
    }

    #[test]
    fn validation_trims_and_rejects_blank_names() {
        assert_eq!(draft("  \t ").validated(), Err(MacroError::EmptyName));
        let valid = draft("  good-job ").validated();
        assert_eq!(valid.map(|draft| draft.name), Ok("good-job".to_string()));
    }

    #[test]
    fn stored_layout_matches_userscript_format() -> Result<(), serde_json::Error> {
        let stored = r#"[{"id":"1718000000000","name":"needs-tests","label":"issue","decorations":["if-minor","blocking"],"body":"Please add tests."}]"#;
        let macros: Vec<Macro> = serde_json::from_str(stored)?;
        assert_eq!(macros.len(), 1);
        assert_eq!(macros[0].label, Label::Issue);
        assert_eq!(
            macros[0].tooltip(),
            "**issue (blocking, if-minor)**: Please add tests."
        );
        let encoded = serde_json::to_value(&macros[0])?;
        assert_eq!(encoded["decorations"][0], "blocking");
        Ok(())
    }

    #[test]
    fn tooltip_uses_placeholder_for_empty_body() {
        let preset = Macro::from_draft("a".to_string(), draft("praise"));
        assert_eq!(preset.tooltip(), "**praise**: ...");
        let mut decorated = preset;
        decorated.decorations.insert(Decoration::NonBlocking);
        assert_eq!(decorated.tooltip(), "**praise (non-blocking)**: ...");
    }
}
