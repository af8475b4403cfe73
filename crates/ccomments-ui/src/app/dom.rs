//! [`DocumentHost`] over the live browser document.
//!
//! # Design
//! - Field identity is a registry of textarea handles; the element itself is
//!   never tagged.
//! - Placement selectors are tried one at a time, in declaration order.
//! - Fields inside overlay-owned roots are never reported.
//! - Full scans drop registry entries for textareas that left the document.

use ccomments_config::SelectorSet;
use tracing::warn;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, Event, EventInit, HtmlTextAreaElement, Node, NodeList};

use crate::app::styles::STYLESHEET;
use crate::core::attach::{DocumentHost, FieldId, Placement};
use crate::core::selection::FieldEdit;
use crate::error::AttachError;

/// Class of the element each toolbar renders into.
pub(crate) const TOOLBAR_ROOT_CLASS: &str = "cc-toolbar-root";
/// Class of the element the macro dialog renders into.
pub(crate) const MODAL_ROOT_CLASS: &str = "cc-modal-root";

const OVERLAY_ROOTS: &str = ".cc-toolbar-root, .cc-modal-root";

pub(crate) struct DomHost {
    document: Document,
    fields: Vec<(FieldId, HtmlTextAreaElement)>,
    next_id: u64,
}

impl DomHost {
    pub(crate) const fn new(document: Document) -> Self {
        Self {
            document,
            fields: Vec::new(),
            next_id: 0,
        }
    }

    fn register(&mut self, element: HtmlTextAreaElement) -> FieldId {
        if let Some((id, _)) = self.fields.iter().find(|(_, known)| *known == element) {
            return *id;
        }
        self.next_id += 1;
        let id = FieldId::new(self.next_id);
        self.fields.push((id, element));
        id
    }

    fn element(&self, field: FieldId) -> Result<&HtmlTextAreaElement, AttachError> {
        self.fields
            .iter()
            .find(|(id, _)| *id == field)
            .map(|(_, element)| element)
            .ok_or(AttachError::UnknownField { field })
    }

    fn admit(&mut self, element: Element, found: &mut Vec<FieldId>) {
        let Ok(textarea) = element.dyn_into::<HtmlTextAreaElement>() else {
            return;
        };
        if matches!(textarea.closest(OVERLAY_ROOTS), Ok(Some(_))) {
            return;
        }
        found.push(self.register(textarea));
    }

    fn admit_all(&mut self, list: &NodeList, found: &mut Vec<FieldId>) {
        for index in 0..list.length() {
            if let Some(element) = list
                .item(index)
                .and_then(|node| node.dyn_into::<Element>().ok())
            {
                self.admit(element, found);
            }
        }
    }
}

fn first_match(element: &Element, selectors: &SelectorSet) -> Option<Element> {
    selectors
        .as_slice()
        .iter()
        .find_map(|selector| element.closest(selector).ok().flatten())
}

fn host_error(operation: &'static str, err: &JsValue) -> AttachError {
    AttachError::host(operation, format!("{err:?}"))
}

fn notify(element: &HtmlTextAreaElement, kind: &str) -> Result<(), AttachError> {
    let init = EventInit::new();
    init.set_bubbles(true);
    let event = Event::new_with_event_init_dict(kind, &init)
        .map_err(|err| host_error("create_event", &err))?;
    element
        .dispatch_event(&event)
        .map(drop)
        .map_err(|err| host_error("dispatch_event", &err))
}

impl DocumentHost for DomHost {
    type Node = Node;
    type Mount = Element;

    fn scan_document(&mut self, fields: &SelectorSet) -> Vec<FieldId> {
        // Bound fields that left the document stay unknown, so `is_attached`
        // still reports them detached and the manager prunes them.
        self.fields.retain(|(_, element)| element.is_connected());
        let mut found = Vec::new();
        match self.document.query_selector_all(&fields.joined()) {
            Ok(list) => self.admit_all(&list, &mut found),
            Err(err) => warn!(error = ?err, "field scan failed"),
        }
        found
    }

    fn scan_subtree(&mut self, root: &Node, fields: &SelectorSet) -> Vec<FieldId> {
        let mut found = Vec::new();
        let Some(element) = root.dyn_ref::<Element>() else {
            return found;
        };
        let selector = fields.joined();
        if element.matches(&selector).unwrap_or(false) {
            self.admit(element.clone(), &mut found);
        }
        if let Ok(list) = element.query_selector_all(&selector) {
            self.admit_all(&list, &mut found);
        }
        found
    }

    fn is_attached(&self, field: FieldId) -> bool {
        self.element(field).is_ok_and(|element| element.is_connected())
    }

    fn forget(&mut self, field: FieldId) {
        self.fields.retain(|(id, _)| *id != field);
    }

    fn mount_toolbar(
        &mut self,
        field: FieldId,
        placement: &Placement,
    ) -> Result<Element, AttachError> {
        let element: &Element = self.element(field)?;
        if first_match(element, &placement.container)
            .or_else(|| element.parent_element())
            .is_none()
        {
            return Err(AttachError::MissingContainer { field });
        }
        let anchor = first_match(element, &placement.anchor).unwrap_or_else(|| element.clone());
        let parent = anchor
            .parent_node()
            .ok_or(AttachError::MissingAnchor { field })?;
        let mount = self
            .document
            .create_element("div")
            .map_err(|err| host_error("create_element", &err))?;
        mount.set_class_name(TOOLBAR_ROOT_CLASS);
        parent
            .insert_before(&mount, Some(&anchor))
            .map_err(|err| host_error("insert_before", &err))?;
        Ok(mount)
    }

    fn inject_assets(&mut self, style_id: &str) -> Result<(), AttachError> {
        if self.document.get_element_by_id(style_id).is_some() {
            return Ok(());
        }
        let head = self
            .document
            .head()
            .ok_or_else(|| AttachError::host("inject_assets", "document has no head"))?;
        let style = self
            .document
            .create_element("style")
            .map_err(|err| host_error("create_element", &err))?;
        style.set_id(style_id);
        style.set_text_content(Some(STYLESHEET));
        head.append_child(&style)
            .map(drop)
            .map_err(|err| host_error("append_child", &err))
    }

    fn read_text(&self, field: FieldId) -> Result<String, AttachError> {
        self.element(field).map(HtmlTextAreaElement::value)
    }

    fn write_text(&mut self, field: FieldId, edit: &FieldEdit) -> Result<(), AttachError> {
        let element = self.element(field)?;
        element.set_value(&edit.text);
        notify(element, "input")?;
        notify(element, "change")?;
        element
            .set_selection_range(edit.cursor, edit.cursor)
            .map_err(|err| host_error("set_selection_range", &err))?;
        element.focus().map_err(|err| host_error("focus", &err))
    }
}
