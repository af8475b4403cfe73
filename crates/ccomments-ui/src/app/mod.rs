//! Browser boot sequence and the shared overlay handle.
//!
//! # Design
//! - One [`OverlayHandle`] owns the attachment manager and the macro store;
//!   components reach it through props.
//! - Observer, poll timer and navigation listeners are installed once and live
//!   for the document lifetime.
//! - Reconcile reports are consumed after the manager borrow is released, so
//!   toolbar rendering never re-enters the manager.
//! - Each bound field owns exactly one toolbar app; pruning a field destroys
//!   the app and removes its mount element.
//! - Selections live only in the manager; toolbars read them on render.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

use ccomments_config::{ConfigError, OverlayConfig};
use ccomments_telemetry::{LoggingConfig, init_logging};
use gloo::console;
use gloo::events::EventListener;
use gloo::timers::callback::Interval;
use js_sys::Array;
use tracing::{debug, info, warn};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{
    Document, DocumentReadyState, Element, MutationObserver, MutationObserverInit, MutationRecord,
    Node,
};
use yew::AppHandle;
use yewdux::prelude::Dispatch;

use crate::core::attach::{AttachmentManager, FieldId, ReconcileReport};
use crate::core::macros::{Macro, MacroForm, MacroPort, MacroStore};
use crate::core::selection::{SelectionState, Transition};
use crate::core::store::OverlayStore;
use crate::error::MacroError;

use dom::{DomHost, MODAL_ROOT_CLASS};
use macro_modal::{MacroModal, MacroModalProps};
use storage::{LocalStorageSink, UserscriptSink};
use toolbar::{Toolbar, ToolbarProps};

mod dom;
mod macro_modal;
mod storage;
mod styles;
mod toolbar;

struct MountedToolbar {
    app: AppHandle<Toolbar>,
    root: Element,
}

impl MountedToolbar {
    fn tear_down(self) {
        self.app.destroy();
        self.root.remove();
    }
}

struct Overlay {
    config: OverlayConfig,
    manager: RefCell<AttachmentManager<DomHost>>,
    macros: RefCell<MacroStore>,
    toolbars: RefCell<BTreeMap<FieldId, MountedToolbar>>,
    modal_root: RefCell<Option<Element>>,
}

/// Cloneable handle to the running overlay.
#[derive(Clone)]
pub(crate) struct OverlayHandle(Rc<Overlay>);

impl PartialEq for OverlayHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl OverlayHandle {
    fn new(config: OverlayConfig, document: Document) -> Self {
        let port = MacroPort::new(Box::new(UserscriptSink), Box::new(LocalStorageSink));
        let macros = MacroStore::open(port, config.storage_key.clone());
        let manager = AttachmentManager::new(DomHost::new(document), &config);
        Self(Rc::new(Overlay {
            config,
            manager: RefCell::new(manager),
            macros: RefCell::new(macros),
            toolbars: RefCell::new(BTreeMap::new()),
            modal_root: RefCell::new(None),
        }))
    }

    /// Current selection of a field; empty once the field is unbound.
    pub(crate) fn selection(&self, field: FieldId) -> SelectionState {
        self.0
            .manager
            .try_borrow()
            .ok()
            .and_then(|manager| manager.selection(field).cloned())
            .unwrap_or_default()
    }

    /// Toggle a label or decoration on a field; `None` when the write failed.
    pub(crate) fn transition(
        &self,
        field: FieldId,
        transition: Transition,
    ) -> Option<SelectionState> {
        let result = self.0.manager.borrow_mut().transition(field, transition);
        result
            .map_err(|err| warn!(%field, error = %err, "field update failed"))
            .ok()
    }

    /// Apply the macro with `id` to a field; `None` when it could not be applied.
    pub(crate) fn apply_macro(&self, field: FieldId, id: &str) -> Option<SelectionState> {
        let preset = self.0.macros.borrow().get(id).cloned()?;
        let result = self.0.manager.borrow_mut().apply_macro(field, &preset);
        result
            .map_err(|err| {
                warn!(%field, macro_id = %preset.id, error = %err, "macro application failed");
            })
            .ok()
    }

    /// Persist the dialog form and publish the new collection.
    pub(crate) fn save_form(&self, form: &MacroForm) -> Result<Macro, MacroError> {
        let saved = self.0.macros.borrow_mut().save_form(form)?;
        self.publish();
        Ok(saved)
    }

    /// Delete a macro and publish the new collection.
    pub(crate) fn delete_macro(&self, id: &str) {
        self.0.macros.borrow_mut().delete(id);
        self.publish();
    }

    fn publish(&self) {
        let macros = self.0.macros.borrow().list().to_vec();
        Dispatch::<OverlayStore>::new().reduce_mut(|store| store.macros = macros);
    }

    fn reconcile(
        &self,
        pass: impl FnOnce(&mut AttachmentManager<DomHost>) -> ReconcileReport<Element>,
    ) {
        let report = pass(&mut self.0.manager.borrow_mut());
        let stale: Vec<MountedToolbar> = {
            let mut toolbars = self.0.toolbars.borrow_mut();
            report
                .pruned
                .iter()
                .filter_map(|field| toolbars.remove(field))
                .collect()
        };
        if !stale.is_empty() {
            debug!(count = stale.len(), "tearing down toolbars of detached fields");
        }
        stale.into_iter().for_each(MountedToolbar::tear_down);

        for (field, root) in report.bound {
            let props = ToolbarProps {
                overlay: self.clone(),
                field,
            };
            let app = yew::Renderer::<Toolbar>::with_root_and_props(root.clone(), props).render();
            let previous = self
                .0
                .toolbars
                .borrow_mut()
                .insert(field, MountedToolbar { app, root });
            if let Some(previous) = previous {
                previous.tear_down();
            }
        }
    }

    fn ensure_modal(&self, document: &Document) {
        if self
            .0
            .modal_root
            .borrow()
            .as_ref()
            .is_some_and(|root| root.is_connected())
        {
            return;
        }
        let Some(body) = document.body() else {
            warn!("document has no body; macro dialog unavailable");
            return;
        };
        let root = match document.create_element("div") {
            Ok(root) => root,
            Err(err) => {
                warn!(error = ?err, "macro dialog root creation failed");
                return;
            }
        };
        root.set_class_name(MODAL_ROOT_CLASS);
        if let Err(err) = body.append_child(&root) {
            warn!(error = ?err, "macro dialog root insertion failed");
            return;
        }
        let props = MacroModalProps {
            overlay: self.clone(),
        };
        yew::Renderer::<MacroModal>::with_root_and_props(root.clone(), props).render();
        *self.0.modal_root.borrow_mut() = Some(root);
    }

    fn observe(&self, document: &Document) {
        let overlay = self.clone();
        let callback = Closure::<dyn FnMut(Array, MutationObserver)>::wrap(Box::new(
            move |records: Array, _observer: MutationObserver| {
                let inserted = inserted_elements(&records);
                if !inserted.is_empty() {
                    overlay.reconcile(|manager| manager.on_mutation(&inserted));
                }
            },
        ));
        let observer = match MutationObserver::new(callback.as_ref().unchecked_ref()) {
            Ok(observer) => observer,
            Err(err) => {
                warn!(error = ?err, "mutation observer unavailable; relying on polling");
                return;
            }
        };
        let Some(root) = document.document_element() else {
            warn!("document has no root element; relying on polling");
            return;
        };
        let options = MutationObserverInit::new();
        options.set_child_list(true);
        options.set_subtree(true);
        if let Err(err) = observer.observe_with_options(&root, &options) {
            warn!(error = ?err, "mutation observer rejected; relying on polling");
            return;
        }
        callback.forget();
    }

    fn poll(&self) {
        let overlay = self.clone();
        Interval::new(self.0.config.poll_interval_ms, move || {
            overlay.reconcile(AttachmentManager::on_poll);
        })
        .forget();
    }

    fn listen_navigation(&self, document: &Document) {
        for event in &self.0.config.navigation_events {
            let overlay = self.clone();
            let document_for_modal = document.clone();
            EventListener::new(document, event.clone(), move |_| {
                overlay.0.macros.borrow_mut().reload();
                overlay.publish();
                overlay.ensure_modal(&document_for_modal);
                overlay.reconcile(AttachmentManager::on_navigation);
            })
            .forget();
        }
    }
}

fn inserted_elements(records: &Array) -> Vec<Node> {
    records
        .iter()
        .filter_map(|record| record.dyn_into::<MutationRecord>().ok())
        .flat_map(|record| {
            let added = record.added_nodes();
            (0..added.length())
                .filter_map(|index| added.item(index))
                .collect::<Vec<_>>()
        })
        .filter(|node| node.node_type() == Node::ELEMENT_NODE)
        .collect()
}

fn boot(config: OverlayConfig) {
    let document = gloo::utils::document();
    let overlay = OverlayHandle::new(config, document.clone());
    overlay.publish();
    overlay.ensure_modal(&document);
    overlay.reconcile(AttachmentManager::start);
    overlay.observe(&document);
    overlay.poll();
    overlay.listen_navigation(&document);
    info!(
        storage_key = %overlay.0.config.storage_key,
        poll_interval_ms = overlay.0.config.poll_interval_ms,
        bound = overlay.0.manager.borrow().bound_count(),
        "conventional comments overlay started"
    );
}

fn document_loading(document: &Document) -> bool {
    document.ready_state() == DocumentReadyState::Loading
}

/// Boot the overlay with the built-in GitHub profile.
pub fn run_overlay() {
    if let Err(err) = run_overlay_with_config(OverlayConfig::github()) {
        console::error!("overlay configuration rejected", err.to_string());
    }
}

/// Boot the overlay with a caller-supplied configuration.
///
/// Booting waits for `DOMContentLoaded` when the document is still loading.
///
/// # Errors
/// Returns the validation failure when `config` is invalid; nothing is
/// installed in that case.
pub fn run_overlay_with_config(config: OverlayConfig) -> Result<(), ConfigError> {
    console_error_panic_hook::set_once();
    config.validate()?;
    if let Err(err) = init_logging(&LoggingConfig::default()) {
        console::warn!("overlay logging not installed", err.to_string());
    }
    let document = gloo::utils::document();
    if document_loading(&document) {
        EventListener::once(&document, "DOMContentLoaded", move |_| boot(config)).forget();
    } else {
        boot(config);
    }
    Ok(())
}
