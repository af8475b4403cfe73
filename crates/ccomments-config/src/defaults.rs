//! Built-in defaults for the overlay configuration.
//!
//! # Design
//! - Ship a GitHub profile so the overlay works without any configuration.
//! - Keep selector lists ordered; container and anchor lookups try them in order.

/// Storage key the macro collection is persisted under.
pub const STORAGE_KEY: &str = "cc-macros";
/// Period of the discovery safety-net poll.
pub const POLL_INTERVAL_MS: u32 = 2_000;
/// Lower bound accepted for the poll period.
pub const MIN_POLL_INTERVAL_MS: u32 = 250;
/// Id of the injected stylesheet element.
pub const STYLE_ELEMENT_ID: &str = "cc-styles";

/// Comment textareas rendered by GitHub pull request and issue pages.
pub const FIELD_SELECTORS: &[&str] = &[
    r#"textarea[name="comment[body]"]"#,
    r#"textarea[name="pull_request_review_comment[body]"]"#,
    r#"textarea[name="pull_request_review[body]"]"#,
    r#"textarea[name="issue_comment[body]"]"#,
    "textarea.js-comment-field",
    r#"textarea[id^="new_comment_field"]"#,
    r#"textarea[aria-label="Add a comment"]"#,
    r#"textarea[placeholder*="comment"]"#,
    r#"textarea[placeholder*="Comment"]"#,
    r#"textarea[data-testid="markdown-editor-textarea"]"#,
];

/// Field containers, tried in order; the field's parent is the fallback.
pub const CONTAINER_SELECTORS: &[&str] = &[
    ".js-comment-container",
    ".comment-form-head",
    ".inline-comment-form",
    ".review-comment",
    r#"[data-testid="markdown-editor"]"#,
];

/// Wrappers the toolbar is inserted in front of.
pub const ANCHOR_SELECTORS: &[&str] = &[
    ".js-write-bucket",
    ".write-content",
    r#"[data-testid="markdown-editor"]"#,
];

/// Soft navigation events fired by GitHub's Turbo and legacy pjax stacks.
pub const NAVIGATION_EVENTS: &[&str] = &["turbo:load", "pjax:end"];

pub(crate) fn owned(values: &[&str]) -> Vec<String> {
    values.iter().map(ToString::to_string).collect()
}
