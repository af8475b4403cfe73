//! Ordered in-memory macro collection backed by a [`MacroPort`].
//!
//! # Design
//! - Every mutation writes the entire collection; there is no merge, so the
//!   last writer across tabs wins.
//! - Storage failures never fail a mutation. The outcome is kept for callers
//!   that want to surface it.

use std::collections::HashSet;

use tracing::{debug, info};
use uuid::Uuid;

use crate::core::macros::form::MacroForm;
use crate::core::macros::model::{Macro, MacroDraft};
use crate::core::macros::port::{MacroPort, WriteOutcome};
use crate::error::MacroError;

/// Macro collection plus the storage key it lives under.
pub struct MacroStore {
    port: MacroPort,
    key: String,
    macros: Vec<Macro>,
    last_write: Option<WriteOutcome>,
}

impl MacroStore {
    /// Load the collection stored under `key`.
    #[must_use]
    pub fn open(port: MacroPort, key: impl Into<String>) -> Self {
        let key = key.into();
        let macros = port.load(&key);
        debug!(key = %key, count = macros.len(), "macros loaded");
        Self {
            port,
            key,
            macros,
            last_write: None,
        }
    }

    /// Re-read the collection, discarding in-memory state.
    pub fn reload(&mut self) {
        self.macros = self.port.load(&self.key);
    }

    /// Macros in insertion order.
    #[must_use]
    pub fn list(&self) -> &[Macro] {
        &self.macros
    }

    /// Macro with the given id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Macro> {
        self.macros.iter().find(|preset| preset.id == id)
    }

    /// Outcome of the most recent write, if any.
    #[must_use]
    pub const fn last_write(&self) -> Option<&WriteOutcome> {
        self.last_write.as_ref()
    }

    /// Validate a draft, assign a fresh id, append and persist.
    ///
    /// # Errors
    /// Returns [`MacroError::EmptyName`] for a blank name; nothing is stored.
    pub fn create(&mut self, draft: MacroDraft) -> Result<Macro, MacroError> {
        let draft = draft.validated()?;
        let preset = Macro::from_draft(self.fresh_id(), draft);
        self.macros.push(preset.clone());
        self.persist();
        info!(id = %preset.id, name = %preset.name, "macro created");
        Ok(preset)
    }

    /// Replace the macro with the same id in place and persist.
    ///
    /// Returns `false`, without writing, when no macro has that id.
    ///
    /// # Errors
    /// Returns [`MacroError::EmptyName`] for a blank name.
    pub fn update(&mut self, preset: Macro) -> Result<bool, MacroError> {
        let preset = validate_record(preset)?;
        let Some(slot) = self.macros.iter_mut().find(|slot| slot.id == preset.id) else {
            debug!(id = %preset.id, "update ignored; no such macro");
            return Ok(false);
        };
        *slot = preset;
        self.persist();
        Ok(true)
    }

    /// Remove the macro with the given id and persist.
    ///
    /// The collection is written even when nothing matched. Returns whether a
    /// macro was removed.
    pub fn delete(&mut self, id: &str) -> bool {
        let before = self.macros.len();
        self.macros.retain(|preset| preset.id != id);
        let removed = self.macros.len() != before;
        self.persist();
        if removed {
            info!(id, "macro deleted");
        }
        removed
    }

    /// Submit the editing dialog.
    ///
    /// New forms create a macro. Edit forms update in place, or append under
    /// the edited id when it has vanished from the collection meanwhile.
    ///
    /// # Errors
    /// Returns [`MacroError::EmptyName`] for a blank name; nothing is stored.
    pub fn save_form(&mut self, form: &MacroForm) -> Result<Macro, MacroError> {
        let draft = form.to_draft()?;
        let Some(id) = form.editing.clone() else {
            return self.create(draft);
        };
        let preset = Macro::from_draft(id, draft);
        if !self.update(preset.clone())? {
            self.macros.push(preset.clone());
            self.persist();
        }
        Ok(preset)
    }

    fn fresh_id(&self) -> String {
        let taken: HashSet<&str> = self.macros.iter().map(|preset| preset.id.as_str()).collect();
        loop {
            let id = Uuid::new_v4().to_string();
            if !taken.contains(id.as_str()) {
                return id;
            }
        }
    }

    fn persist(&mut self) {
        self.last_write = Some(self.port.save(&self.key, &self.macros));
    }
}

fn validate_record(preset: Macro) -> Result<Macro, MacroError> {
    let Macro {
        id,
        name,
        label,
        decorations,
        body,
    } = preset;
    let draft = MacroDraft {
        name,
        label,
        decorations,
        body,
    }
    .validated()?;
    Ok(Macro::from_draft(id, draft))
}
