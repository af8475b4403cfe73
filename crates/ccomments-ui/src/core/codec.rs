//! Conventional comment prefix synthesis and stripping.
//!
//! # Design
//! - `encode` always lists decorations in catalog order.
//! - `decode` strips one leading prefix per pass, at most
//!   [`MAX_PREFIX_PASSES`] times. A deeper stack is not treated as a prefix
//!   and the text is returned whole, which keeps `decode` idempotent.
//! - Cursor offsets are UTF-16 code units to match DOM selection APIs.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::core::catalog::{DecorationSet, Label};

/// Most stacked prefixes [`decode`] will strip.
pub const MAX_PREFIX_PASSES: usize = 10;

/// Separator between the prefix and the body.
pub const PREFIX_TERMINATOR: &str = "**: ";

static PREFIX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\*\*[A-Za-z0-9_-]+(?:\s*\([^)]+\))?\*\*: ?")
        .expect("prefix pattern should compile")
});

/// Build the bare prefix for a label and decoration set.
#[must_use]
pub fn prefix(label: Label, decorations: &DecorationSet) -> String {
    let mut out = format!("**{}", label.name());
    if !decorations.is_empty() {
        let names: Vec<&str> = decorations.iter().map(|decoration| decoration.name()).collect();
        out.push_str(" (");
        out.push_str(&names.join(", "));
        out.push(')');
    }
    out.push_str(PREFIX_TERMINATOR);
    out
}

/// Prefix `body` with the conventional comment prefix.
#[must_use]
pub fn encode(label: Label, decorations: &DecorationSet, body: &str) -> String {
    let mut text = prefix(label, decorations);
    text.push_str(body);
    text
}

/// Strip any recognized leading prefixes and return the remaining body.
#[must_use]
pub fn decode(text: &str) -> &str {
    let mut rest = text;
    for _ in 0..MAX_PREFIX_PASSES {
        match PREFIX.find(rest) {
            Some(found) => rest = &rest[found.end()..],
            None => return rest,
        }
    }
    if PREFIX.is_match(rest) { text } else { rest }
}

/// Length of `text` in UTF-16 code units.
#[must_use]
pub fn utf16_len(text: &str) -> u32 {
    u32::try_from(text.encode_utf16().count()).unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::catalog::Decoration;
    use proptest::prelude::*;

    fn set(decorations: &[Decoration]) -> DecorationSet {
        decorations.iter().copied().collect()
    }

    #[test]
    fn encode_without_decorations() {
        assert_eq!(
            encode(Label::Issue, &DecorationSet::new(), "fix it"),
            "**issue**: fix it"
        );
    }

    #[test]
    fn encode_orders_decorations_by_catalog() {
        let decorations = set(&[Decoration::IfMinor, Decoration::Blocking]);
        assert_eq!(
            encode(Label::Issue, &decorations, "fix it"),
            "**issue (blocking, if-minor)**: fix it"
        );
    }

    #[test]
    fn encode_with_empty_body_is_just_the_prefix() {
        assert_eq!(
            encode(Label::Suggestion, &set(&[Decoration::NonBlocking]), ""),
            "**suggestion (non-blocking)**: "
        );
    }

    #[test]
    fn decode_strips_prefixes() {
        assert_eq!(decode("**nitpick**: fix spacing"), "fix spacing");
        assert_eq!(decode("**issue (blocking, if-minor)**: fix it"), "fix it");
        assert_eq!(decode("**praise**: **note**: both"), "both");
        assert_eq!(decode("**todo**:tight"), "tight");
    }

    #[test]
    fn decode_leaves_other_text_untouched() {
        assert_eq!(decode("plain text"), "plain text");
        assert_eq!(decode(" **issue**: indented"), " **issue**: indented");
        assert_eq!(decode("**not a label**: x"), "**not a label**: x");
        assert_eq!(decode("**issue ()**: x"), "**issue ()**: x");
        assert_eq!(decode(""), "");
    }

    #[test]
    fn decode_strips_up_to_the_pass_cap() {
        let text = format!("{}body", "**issue**: ".repeat(MAX_PREFIX_PASSES));
        assert_eq!(decode(&text), "body");
    }

    #[test]
    fn decode_keeps_stacks_deeper_than_the_cap() {
        let text = format!("{}body", "**issue**: ".repeat(MAX_PREFIX_PASSES + 1));
        assert_eq!(decode(&text), text);
        assert_eq!(decode(decode(&text)), decode(&text));
    }

    #[test]
    fn decode_terminates_on_adversarial_input() {
        let text = "**a (b)**:".repeat(10_000);
        assert_eq!(decode(&text), text);
        let broken = format!("{}**x (", "**a**: ".repeat(3));
        assert_eq!(decode(&broken), "**x (");
    }

    fn any_label() -> impl Strategy<Value = Label> {
        proptest::sample::select(Label::all().to_vec())
    }

    fn any_decorations() -> impl Strategy<Value = DecorationSet> {
        proptest::sample::subsequence(Decoration::all().to_vec(), 0..=Decoration::all().len())
            .prop_map(|picked| picked.into_iter().collect())
    }

    proptest! {
        #[test]
        fn decode_is_idempotent(text in "\\PC{0,60}") {
            let once = decode(&text);
            prop_assert_eq!(decode(once), once);
        }

        #[test]
        fn decode_is_idempotent_on_prefix_stacks(
            text in r"(\*\*[a-z_-]{1,8}( ?\([a-z, -]{1,12}\))?\*\*: ?){0,14}[a-z *:()]{0,20}",
        ) {
            let once = decode(&text);
            prop_assert_eq!(decode(once), once);
        }

        #[test]
        fn encode_then_decode_recovers_body(
            label in any_label(),
            decorations in any_decorations(),
            body in "([^*][^\\n]{0,40})?",
        ) {
            let text = encode(label, &decorations, &body);
            prop_assert!(text.starts_with(&prefix(label, &decorations)));
            prop_assert_eq!(decode(&text), body.as_str());
        }
    }

    #[test]
    fn utf16_len_counts_code_units() {
        assert_eq!(utf16_len("abc"), 3);
        assert_eq!(utf16_len("🎉"), 2);
    }
}
