#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::multiple_crate_versions)]
//! Conventional comments overlay for hosted code review pages.
//! The `core` modules hold the prefix grammar, selection state machine, macro
//! persistence and field attachment logic; the browser glue is wasm32-only.

pub mod core;
pub mod error;

#[cfg(target_arch = "wasm32")]
mod app;

#[cfg(target_arch = "wasm32")]
pub use app::{run_overlay, run_overlay_with_config};

#[cfg(test)]
mod tests {
    use crate::core::catalog::{DecorationSet, Label};
    use crate::core::codec;
    use crate::core::selection::{SelectionState, Transition};

    #[test]
    fn toolbar_flow_produces_conventional_prefix() {
        let mut state = SelectionState::default();
        state.apply(Transition::ToggleLabel(Label::Chore));
        let edit = state.render("bump the lockfile");
        assert_eq!(edit.text, "**chore**: bump the lockfile");
        assert_eq!(codec::decode(&edit.text), "bump the lockfile");
    }

    #[test]
    fn empty_decoration_set_has_no_parentheses() {
        assert_eq!(codec::prefix(Label::Todo, &DecorationSet::new()), "**todo**: ");
    }
}
