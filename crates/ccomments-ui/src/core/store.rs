//! Overlay-wide yewdux store.
//!
//! # Design
//! - Every toolbar renders the same macro list, so it lives in one store
//!   instead of per-toolbar props.
//! - The macro dialog is a single instance driven by `dialog`.
//! - Reducers here are plain functions so they are testable without a DOM.

use yewdux::store::Store;

use crate::core::macros::{Macro, MacroForm};
use crate::error::MacroError;

/// Shared overlay state.
#[derive(Clone, Debug, PartialEq, Eq, Store, Default)]
pub struct OverlayStore {
    /// Macro collection as last published by the macro store.
    pub macros: Vec<Macro>,
    /// Open macro dialog, if any.
    pub dialog: Option<DialogState>,
}

/// Macro dialog contents.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct DialogState {
    /// Form being edited.
    pub form: MacroForm,
    /// Validation failure from the last submit attempt.
    pub error: Option<MacroError>,
}

/// Render model for one macro button.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MacroButton {
    /// Macro id.
    pub id: String,
    /// Button caption.
    pub name: String,
    /// Label emoji shown as the icon.
    pub emoji: &'static str,
    /// Hover text.
    pub tooltip: String,
}

/// Buttons for every macro, in collection order.
#[must_use]
pub fn macro_buttons(macros: &[Macro]) -> Vec<MacroButton> {
    macros
        .iter()
        .map(|preset| MacroButton {
            id: preset.id.clone(),
            name: preset.name.clone(),
            emoji: preset.label.emoji(),
            tooltip: preset.tooltip(),
        })
        .collect()
}

/// Open an empty dialog for a new macro.
pub fn open_create(store: &mut OverlayStore) {
    store.dialog = Some(DialogState::default());
}

/// Open the dialog on an existing macro; unknown ids leave the store as is.
pub fn open_edit(store: &mut OverlayStore, id: &str) {
    if let Some(preset) = store.macros.iter().find(|preset| preset.id == id) {
        store.dialog = Some(DialogState {
            form: MacroForm::from_macro(preset),
            error: None,
        });
    }
}

/// Apply an edit to the open form, clearing any stale validation error.
pub fn edit_form(store: &mut OverlayStore, update: impl FnOnce(&mut MacroForm)) {
    if let Some(dialog) = store.dialog.as_mut() {
        update(&mut dialog.form);
        dialog.error = None;
    }
}

/// Record a validation failure on the open dialog.
pub fn reject_form(store: &mut OverlayStore, error: MacroError) {
    if let Some(dialog) = store.dialog.as_mut() {
        dialog.error = Some(error);
    }
}

/// Close the dialog without saving.
pub fn close_dialog(store: &mut OverlayStore) {
    store.dialog = None;
}
