//! Fixed label and decoration catalogs.
//!
//! # Design
//! - Catalog order is declaration order; `Ord` follows it so sets iterate in
//!   catalog order regardless of selection order.
//! - Serialized names are the stable identifiers stored in macros.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Categorical tag describing a comment's communicative intent.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Label {
    /// Highlights something positive.
    Praise,
    /// Trivial, preference-based request.
    Nitpick,
    /// Proposes an improvement.
    Suggestion,
    /// Identifies a specific problem.
    Issue,
    /// Small, necessary change.
    Todo,
    /// Needs clarification.
    Question,
    /// Non-blocking idea.
    Thought,
    /// Simple task before acceptance.
    Chore,
    /// Non-blocking highlight.
    Note,
    /// Typo or minor text fix.
    Typo,
}

impl Label {
    /// Every label in catalog order.
    #[must_use]
    pub const fn all() -> [Self; 10] {
        [
            Self::Praise,
            Self::Nitpick,
            Self::Suggestion,
            Self::Issue,
            Self::Todo,
            Self::Question,
            Self::Thought,
            Self::Chore,
            Self::Note,
            Self::Typo,
        ]
    }

    /// Stable identifier written into the prefix.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Praise => "praise",
            Self::Nitpick => "nitpick",
            Self::Suggestion => "suggestion",
            Self::Issue => "issue",
            Self::Todo => "todo",
            Self::Question => "question",
            Self::Thought => "thought",
            Self::Chore => "chore",
            Self::Note => "note",
            Self::Typo => "typo",
        }
    }

    /// Emoji shown on toolbar and macro buttons.
    #[must_use]
    pub const fn emoji(self) -> &'static str {
        match self {
            Self::Praise => "🎉",
            Self::Nitpick => "🔍",
            Self::Suggestion => "💡",
            Self::Issue => "⚠️",
            Self::Todo => "📝",
            Self::Question => "❓",
            Self::Thought => "💭",
            Self::Chore => "🧹",
            Self::Note => "📌",
            Self::Typo => "✏️",
        }
    }

    /// Accent color used when the label is active.
    #[must_use]
    pub const fn color(self) -> &'static str {
        match self {
            Self::Praise => "#28a745",
            Self::Nitpick => "#6f42c1",
            Self::Suggestion => "#0366d6",
            Self::Issue => "#d73a49",
            Self::Todo => "#e36209",
            Self::Question => "#005cc5",
            Self::Thought => "#6a737d",
            Self::Chore => "#795548",
            Self::Note => "#17a2b8",
            Self::Typo => "#959da5",
        }
    }

    /// Tooltip text.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Praise => "Highlights something positive",
            Self::Nitpick => "Trivial, preference-based request",
            Self::Suggestion => "Proposes an improvement",
            Self::Issue => "Identifies a specific problem",
            Self::Todo => "Small, necessary change",
            Self::Question => "Needs clarification",
            Self::Thought => "Non-blocking idea",
            Self::Chore => "Simple task before acceptance",
            Self::Note => "Non-blocking highlight",
            Self::Typo => "Typo or minor text fix",
        }
    }

    /// Look up a label by its stable identifier.
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        Self::all().into_iter().find(|label| label.name() == name)
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Modifier indicating priority or blocking-ness of a labeled comment.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Decoration {
    /// Should not prevent acceptance.
    NonBlocking,
    /// Must be resolved before acceptance.
    Blocking,
    /// Author discretion if changes are trivial.
    IfMinor,
}

impl Decoration {
    /// Every decoration in catalog order.
    #[must_use]
    pub const fn all() -> [Self; 3] {
        [Self::NonBlocking, Self::Blocking, Self::IfMinor]
    }

    /// Stable identifier written into the prefix.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::NonBlocking => "non-blocking",
            Self::Blocking => "blocking",
            Self::IfMinor => "if-minor",
        }
    }

    /// Tooltip text.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::NonBlocking => "Should not prevent acceptance",
            Self::Blocking => "Must be resolved before acceptance",
            Self::IfMinor => "Author discretion if changes are trivial",
        }
    }

    /// Look up a decoration by its stable identifier.
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        Self::all().into_iter().find(|decoration| decoration.name() == name)
    }
}

impl fmt::Display for Decoration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Selected decorations; iteration always follows catalog order.
pub type DecorationSet = BTreeSet<Decoration>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip_through_parse() {
        for label in Label::all() {
            assert_eq!(Label::parse(label.name()), Some(label));
        }
        for decoration in Decoration::all() {
            assert_eq!(Decoration::parse(decoration.name()), Some(decoration));
        }
        assert_eq!(Label::parse("bikeshed"), None);
        assert_eq!(Decoration::parse("Blocking"), None);
    }

    #[test]
    fn serde_uses_stable_names() -> Result<(), serde_json::Error> {
        assert_eq!(serde_json::to_string(&Decoration::IfMinor)?, "\"if-minor\"");
        assert_eq!(serde_json::to_string(&Label::Suggestion)?, "\"suggestion\"");
        let parsed: Decoration = serde_json::from_str("\"non-blocking\"")?;
        assert_eq!(parsed, Decoration::NonBlocking);
        Ok(())
    }

    #[test]
    fn decoration_set_iterates_in_catalog_order() {
        let set: DecorationSet = [Decoration::IfMinor, Decoration::NonBlocking, Decoration::Blocking]
            .into_iter()
            .collect();
        let names: Vec<_> = set.iter().map(|decoration| decoration.name()).collect();
        assert_eq!(names, vec!["non-blocking", "blocking", "if-minor"]);
    }
}
