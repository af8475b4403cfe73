//! Macro create/edit dialog.
//!
//! # Design
//! - A single instance renders whatever `OverlayStore::dialog` holds.
//! - Form edits go through store reducers; persistence goes through the overlay.
//! - A blank name is reported inline and focuses the name input.

use gloo::dialogs::confirm;
use tracing::debug;
use web_sys::{Event, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement, InputEvent, MouseEvent};
use yew::prelude::*;
use yewdux::prelude::{Dispatch, use_selector};

use crate::app::OverlayHandle;
use crate::core::catalog::{Decoration, Label};
use crate::core::macros::MacroForm;
use crate::core::store::{OverlayStore, close_dialog, edit_form, reject_form};

const DELETE_PROMPT: &str = "Delete this macro?";

#[derive(Properties, PartialEq)]
pub(crate) struct MacroModalProps {
    pub(crate) overlay: OverlayHandle,
}

fn update_form(dispatch: &Dispatch<OverlayStore>, update: impl FnOnce(&mut MacroForm)) {
    dispatch.reduce_mut(|store| edit_form(store, update));
}

#[function_component(MacroModal)]
pub(crate) fn macro_modal(props: &MacroModalProps) -> Html {
    let dialog = use_selector(|store: &OverlayStore| store.dialog.clone());
    let dispatch = Dispatch::<OverlayStore>::new();
    let name_ref = use_node_ref();

    let Some(dialog) = (*dialog).clone() else {
        return html! {};
    };
    let form = dialog.form;

    let on_name = {
        let dispatch = dispatch.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                let name = input.value();
                update_form(&dispatch, |form| form.name = name);
            }
        })
    };

    let on_label = {
        let dispatch = dispatch.clone();
        Callback::from(move |event: Event| {
            if let Some(label) = event
                .target_dyn_into::<HtmlSelectElement>()
                .and_then(|select| Label::parse(&select.value()))
            {
                update_form(&dispatch, |form| form.label = label);
            }
        })
    };

    let on_body = {
        let dispatch = dispatch.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(textarea) = event.target_dyn_into::<HtmlTextAreaElement>() {
                let body = textarea.value();
                update_form(&dispatch, |form| form.body = body);
            }
        })
    };

    let close = {
        let dispatch = dispatch.clone();
        Callback::from(move |_: MouseEvent| dispatch.reduce_mut(close_dialog))
    };

    let on_submit = {
        let dispatch = dispatch.clone();
        let overlay = props.overlay.clone();
        let form = form.clone();
        let name_ref = name_ref.clone();
        Callback::from(move |_: MouseEvent| match overlay.save_form(&form) {
            Ok(_) => dispatch.reduce_mut(close_dialog),
            Err(err) => {
                dispatch.reduce_mut(|store| reject_form(store, err));
                if let Some(Err(err)) = name_ref.cast::<HtmlInputElement>().map(|input| input.focus()) {
                    debug!(error = ?err, "macro name focus skipped");
                }
            }
        })
    };

    let delete = form.editing.clone().map(|id| {
        let dispatch = dispatch.clone();
        let overlay = props.overlay.clone();
        let onclick = Callback::from(move |_: MouseEvent| {
            if confirm(DELETE_PROMPT) {
                overlay.delete_macro(&id);
                dispatch.reduce_mut(close_dialog);
            }
        });
        html! {
            <button type="button" class="cc-action cc-action-danger" {onclick}>{"Delete"}</button>
        }
    });

    let label_options = Label::all()
        .into_iter()
        .map(|label| {
            html! {
                <option value={label.name()} selected={label == form.label}>
                    {format!("{} {}", label.emoji(), label.name())}
                </option>
            }
        })
        .collect::<Html>();

    let decoration_checks = Decoration::all()
        .into_iter()
        .map(|decoration| {
            let dispatch = dispatch.clone();
            let onchange = Callback::from(move |event: Event| {
                if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                    let checked = input.checked();
                    update_form(&dispatch, |form| form.set_decoration(decoration, checked));
                }
            });
            html! {
                <label title={decoration.description()}>
                    <input
                        type="checkbox"
                        checked={form.decorations.contains(&decoration)}
                        {onchange}
                    />
                    {" "}{decoration.name()}
                </label>
            }
        })
        .collect::<Html>();

    let keep_open = Callback::from(|event: MouseEvent| event.stop_propagation());

    html! {
        <div class="cc-backdrop" onclick={close.clone()}>
            <div class="cc-dialog" role="dialog" onclick={keep_open}>
                <h3>{form.title()}</h3>
                <div class="cc-field">
                    <label for="cc-macro-name">{"Name"}</label>
                    <input
                        id="cc-macro-name"
                        type="text"
                        ref={name_ref}
                        class={classes!(dialog.error.is_some().then_some("cc-invalid"))}
                        placeholder="e.g. needs-tests"
                        value={form.name.clone()}
                        oninput={on_name}
                    />
                </div>
                <div class="cc-field">
                    <label for="cc-macro-label">{"Label"}</label>
                    <select id="cc-macro-label" onchange={on_label}>{label_options}</select>
                </div>
                <div class="cc-field">
                    <label>{"Decorations"}</label>
                    <div class="cc-checks">{decoration_checks}</div>
                </div>
                <div class="cc-field">
                    <label for="cc-macro-body">{"Body"}</label>
                    <textarea
                        id="cc-macro-body"
                        placeholder="Optional comment text"
                        value={form.body.clone()}
                        oninput={on_body}
                    />
                </div>
                <div class="cc-field">
                    <label>{"Preview"}</label>
                    <div class="cc-preview">{form.preview()}</div>
                </div>
                <div class="cc-actions">
                    {delete}
                    <button type="button" class="cc-action" onclick={close}>{"Cancel"}</button>
                    <button type="button" class="cc-action cc-action-primary" onclick={on_submit}>
                        {form.submit_caption()}
                    </button>
                </div>
            </div>
        </div>
    }
}
