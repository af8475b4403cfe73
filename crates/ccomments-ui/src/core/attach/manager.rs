//! Field discovery, toolbar binding and per-field selection ownership.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use ccomments_config::{OverlayConfig, SelectorSet};
use tracing::{debug, warn};

use crate::core::attach::host::{DocumentHost, FieldId, Placement};
use crate::core::macros::Macro;
use crate::core::selection::{FieldEdit, SelectionState, Transition};
use crate::error::AttachError;

/// Signal that started a reconcile pass.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Trigger {
    /// Initial boot.
    Start,
    /// Subtrees were inserted into the document.
    Mutation,
    /// Periodic safety-net scan.
    Poll,
    /// In-app navigation finished.
    Navigation,
}

impl Trigger {
    /// Stable name used in logs.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Mutation => "mutation",
            Self::Poll => "poll",
            Self::Navigation => "navigation",
        }
    }
}

impl fmt::Display for Trigger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Result of one reconcile pass.
#[derive(Debug)]
pub struct ReconcileReport<M> {
    /// Signal that started the pass.
    pub trigger: Trigger,
    /// Fields bound during this pass, with their new mount points.
    pub bound: Vec<(FieldId, M)>,
    /// Fields whose mount failed; they are retried on a later pass.
    pub skipped: usize,
    /// Bound fields dropped because they left the document; their mounts are
    /// stale and should be torn down.
    pub pruned: Vec<FieldId>,
}

impl<M> ReconcileReport<M> {
    const fn new(trigger: Trigger) -> Self {
        Self {
            trigger,
            bound: Vec::new(),
            skipped: 0,
            pruned: Vec::new(),
        }
    }

    /// Whether the pass changed nothing.
    #[must_use]
    pub fn is_quiet(&self) -> bool {
        self.bound.is_empty() && self.skipped == 0 && self.pruned.is_empty()
    }
}

/// Binds one toolbar per field and owns each field's [`SelectionState`].
pub struct AttachmentManager<H: DocumentHost> {
    host: H,
    fields: SelectorSet,
    placement: Placement,
    style_id: String,
    bound: BTreeMap<FieldId, SelectionState>,
}

impl<H: DocumentHost> AttachmentManager<H> {
    /// Manager over `host` using the discovery and placement settings of `config`.
    #[must_use]
    pub fn new(host: H, config: &OverlayConfig) -> Self {
        Self {
            host,
            fields: config.field_selectors.clone(),
            placement: Placement::from_config(config),
            style_id: config.style_element_id.clone(),
            bound: BTreeMap::new(),
        }
    }

    /// Inject assets and bind every field currently in the document.
    pub fn start(&mut self) -> ReconcileReport<H::Mount> {
        self.inject_assets();
        let candidates = self.host.scan_document(&self.fields);
        self.reconcile(Trigger::Start, candidates)
    }

    /// Bind fields found in freshly inserted subtrees.
    pub fn on_mutation(&mut self, inserted: &[H::Node]) -> ReconcileReport<H::Mount> {
        let candidates = inserted
            .iter()
            .flat_map(|root| self.host.scan_subtree(root, &self.fields))
            .collect();
        self.reconcile(Trigger::Mutation, candidates)
    }

    /// Periodic full scan.
    pub fn on_poll(&mut self) -> ReconcileReport<H::Mount> {
        let candidates = self.host.scan_document(&self.fields);
        self.reconcile(Trigger::Poll, candidates)
    }

    /// Re-inject assets and rescan after a soft navigation.
    pub fn on_navigation(&mut self) -> ReconcileReport<H::Mount> {
        self.inject_assets();
        let candidates = self.host.scan_document(&self.fields);
        self.reconcile(Trigger::Navigation, candidates)
    }

    /// Whether a toolbar is bound to the field.
    #[must_use]
    pub fn is_bound(&self, field: FieldId) -> bool {
        self.bound.contains_key(&field)
    }

    /// Number of bound fields.
    #[must_use]
    pub fn bound_count(&self) -> usize {
        self.bound.len()
    }

    /// Selection of a bound field.
    #[must_use]
    pub fn selection(&self, field: FieldId) -> Option<&SelectionState> {
        self.bound.get(&field)
    }

    /// Toggle a label or decoration and rewrite the field.
    ///
    /// The new state is committed only once the host accepted the write.
    ///
    /// # Errors
    /// Returns [`AttachError::UnknownField`] for unbound fields, or the host's
    /// error when reading or writing the field fails.
    pub fn transition(
        &mut self,
        field: FieldId,
        transition: Transition,
    ) -> Result<SelectionState, AttachError> {
        let mut next = self
            .bound
            .get(&field)
            .cloned()
            .ok_or(AttachError::UnknownField { field })?;
        next.apply(transition);
        let current = self.host.read_text(field)?;
        let edit = next.render(&current);
        self.commit(field, next, &edit)
    }

    /// Replace the field with a macro's text and adopt its selection.
    ///
    /// # Errors
    /// Returns [`AttachError::UnknownField`] for unbound fields, or the host's
    /// error when writing the field fails.
    pub fn apply_macro(
        &mut self,
        field: FieldId,
        preset: &Macro,
    ) -> Result<SelectionState, AttachError> {
        if !self.is_bound(field) {
            return Err(AttachError::UnknownField { field });
        }
        let edit = FieldEdit::for_macro(preset);
        self.commit(field, SelectionState::from_macro(preset), &edit)
    }

    /// Underlying host.
    #[must_use]
    pub const fn host(&self) -> &H {
        &self.host
    }

    /// Underlying host, mutably.
    pub const fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    fn commit(
        &mut self,
        field: FieldId,
        next: SelectionState,
        edit: &FieldEdit,
    ) -> Result<SelectionState, AttachError> {
        self.host.write_text(field, edit)?;
        self.bound.insert(field, next.clone());
        Ok(next)
    }

    fn inject_assets(&mut self) {
        if let Err(err) = self.host.inject_assets(&self.style_id) {
            warn!(error = %err, style_id = %self.style_id, "style injection failed");
        }
    }

    fn reconcile(
        &mut self,
        trigger: Trigger,
        candidates: Vec<FieldId>,
    ) -> ReconcileReport<H::Mount> {
        let mut report = ReconcileReport::new(trigger);
        report.pruned = self.prune();

        let mut seen = BTreeSet::new();
        for field in candidates {
            if self.bound.contains_key(&field) || !seen.insert(field) {
                continue;
            }
            match self.host.mount_toolbar(field, &self.placement) {
                Ok(mount) => {
                    self.bound.insert(field, SelectionState::default());
                    report.bound.push((field, mount));
                }
                Err(err) => {
                    debug!(%field, error = %err, "toolbar attachment skipped");
                    report.skipped += 1;
                }
            }
        }

        if !report.is_quiet() {
            debug!(
                trigger = %trigger,
                bound = report.bound.len(),
                skipped = report.skipped,
                pruned = report.pruned.len(),
                total = self.bound.len(),
                "reconciled fields"
            );
        }
        report
    }

    fn prune(&mut self) -> Vec<FieldId> {
        let detached: Vec<FieldId> = self
            .bound
            .keys()
            .copied()
            .filter(|field| !self.host.is_attached(*field))
            .collect();
        for field in &detached {
            self.bound.remove(field);
            self.host.forget(*field);
        }
        detached
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trigger_names_are_stable() {
        let names: Vec<String> = [
            Trigger::Start,
            Trigger::Mutation,
            Trigger::Poll,
            Trigger::Navigation,
        ]
        .iter()
        .map(ToString::to_string)
        .collect();
        assert_eq!(names, ["start", "mutation", "poll", "navigation"]);
    }

    #[test]
    fn empty_report_is_quiet() {
        let mut report = ReconcileReport::<()>::new(Trigger::Poll);
        assert!(report.is_quiet());
        report.skipped = 1;
        assert!(!report.is_quiet());

        report.skipped = 0;
        report.pruned.push(FieldId::new(4));
        assert!(!report.is_quiet());
    }
}
