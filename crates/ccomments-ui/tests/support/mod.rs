//! In-memory document host shared by the integration suites.

#![allow(dead_code)]

use std::collections::{BTreeMap, BTreeSet, HashMap};

use ccomments_config::SelectorSet;
use ccomments_ui::core::attach::{DocumentHost, FieldId, Placement};
use ccomments_ui::core::selection::FieldEdit;
use ccomments_ui::error::AttachError;

/// Handle for a subtree inserted into the fake document.
pub type Subtree = u32;

#[derive(Debug)]
struct FakeField {
    text: String,
    cursor: u32,
    attached: bool,
    mountable: bool,
    notifications: usize,
}

/// Document stand-in that records every call the manager makes.
#[derive(Debug, Default)]
pub struct FakeHost {
    fields: BTreeMap<FieldId, FakeField>,
    subtrees: HashMap<Subtree, Vec<FieldId>>,
    next_id: u64,
    styles: BTreeSet<String>,
    pub inject_calls: usize,
    pub mounts: Vec<FieldId>,
    pub forgotten: Vec<FieldId>,
    pub duplicate_scans: bool,
    pub reject_writes: bool,
}

impl FakeHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a field directly to the document.
    pub fn add_field(&mut self, text: &str) -> FieldId {
        self.next_id += 1;
        let id = FieldId::new(self.next_id);
        self.fields.insert(
            id,
            FakeField {
                text: text.to_string(),
                cursor: 0,
                attached: true,
                mountable: true,
                notifications: 0,
            },
        );
        id
    }

    /// Add a field as part of an inserted subtree.
    pub fn insert_subtree(&mut self, subtree: Subtree, texts: &[&str]) -> Vec<FieldId> {
        let ids: Vec<FieldId> = texts.iter().map(|text| self.add_field(text)).collect();
        self.subtrees.entry(subtree).or_default().extend(&ids);
        ids
    }

    pub fn detach(&mut self, field: FieldId) {
        if let Some(entry) = self.fields.get_mut(&field) {
            entry.attached = false;
        }
    }

    pub fn set_mountable(&mut self, field: FieldId, mountable: bool) {
        if let Some(entry) = self.fields.get_mut(&field) {
            entry.mountable = mountable;
        }
    }

    pub fn text(&self, field: FieldId) -> Option<&str> {
        self.fields.get(&field).map(|entry| entry.text.as_str())
    }

    pub fn cursor(&self, field: FieldId) -> Option<u32> {
        self.fields.get(&field).map(|entry| entry.cursor)
    }

    pub fn notifications(&self, field: FieldId) -> usize {
        self.fields.get(&field).map_or(0, |entry| entry.notifications)
    }

    pub fn style_count(&self) -> usize {
        self.styles.len()
    }

    fn attached(&self, ids: impl IntoIterator<Item = FieldId>) -> Vec<FieldId> {
        let found: Vec<FieldId> = ids
            .into_iter()
            .filter(|id| self.fields.get(id).is_some_and(|entry| entry.attached))
            .collect();
        if self.duplicate_scans {
            found.iter().chain(found.iter()).copied().collect()
        } else {
            found
        }
    }
}

impl DocumentHost for FakeHost {
    type Node = Subtree;
    type Mount = String;

    fn scan_document(&mut self, fields: &SelectorSet) -> Vec<FieldId> {
        if fields.is_empty() {
            return Vec::new();
        }
        self.attached(self.fields.keys().copied().collect::<Vec<_>>())
    }

    fn scan_subtree(&mut self, root: &Subtree, fields: &SelectorSet) -> Vec<FieldId> {
        if fields.is_empty() {
            return Vec::new();
        }
        let ids = self.subtrees.get(root).cloned().unwrap_or_default();
        self.attached(ids)
    }

    fn is_attached(&self, field: FieldId) -> bool {
        self.fields.get(&field).is_some_and(|entry| entry.attached)
    }

    fn forget(&mut self, field: FieldId) {
        self.fields.remove(&field);
        self.forgotten.push(field);
    }

    fn mount_toolbar(
        &mut self,
        field: FieldId,
        placement: &Placement,
    ) -> Result<String, AttachError> {
        let entry = self
            .fields
            .get(&field)
            .ok_or(AttachError::UnknownField { field })?;
        if placement.anchor.is_empty() || !entry.mountable {
            return Err(AttachError::MissingAnchor { field });
        }
        self.mounts.push(field);
        Ok(format!("toolbar-{}", field.get()))
    }

    fn inject_assets(&mut self, style_id: &str) -> Result<(), AttachError> {
        self.inject_calls += 1;
        self.styles.insert(style_id.to_string());
        Ok(())
    }

    fn read_text(&self, field: FieldId) -> Result<String, AttachError> {
        self.fields
            .get(&field)
            .map(|entry| entry.text.clone())
            .ok_or(AttachError::UnknownField { field })
    }

    fn write_text(&mut self, field: FieldId, edit: &FieldEdit) -> Result<(), AttachError> {
        if self.reject_writes {
            return Err(AttachError::host("write_text", "rejected"));
        }
        let entry = self
            .fields
            .get_mut(&field)
            .ok_or(AttachError::UnknownField { field })?;
        entry.text.clone_from(&edit.text);
        entry.cursor = edit.cursor;
        entry.notifications += 2;
        Ok(())
    }
}
