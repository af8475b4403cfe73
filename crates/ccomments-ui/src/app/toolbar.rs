//! Per-field toolbar: label chips, decoration chips and macro buttons.
//!
//! # Design
//! - The selection is read from the overlay on every render; the toolbar keeps
//!   no copy of its own and never derives state from the field text.
//! - Macro buttons come from the shared store so every toolbar stays in sync.

use web_sys::MouseEvent;
use yew::prelude::*;
use yewdux::prelude::{Dispatch, use_selector};

use crate::app::OverlayHandle;
use crate::core::attach::FieldId;
use crate::core::catalog::{Decoration, Label};
use crate::core::selection::Transition;
use crate::core::store::{OverlayStore, macro_buttons, open_create, open_edit};

#[derive(Properties, PartialEq)]
pub(crate) struct ToolbarProps {
    pub(crate) overlay: OverlayHandle,
    pub(crate) field: FieldId,
}

#[function_component(Toolbar)]
pub(crate) fn toolbar(props: &ToolbarProps) -> Html {
    let refresh = use_force_update();
    let selection = props.overlay.selection(props.field);
    let buttons = use_selector(|store: &OverlayStore| macro_buttons(&store.macros));
    let dispatch = Dispatch::<OverlayStore>::new();

    let on_transition = {
        let overlay = props.overlay.clone();
        let refresh = refresh.clone();
        let field = props.field;
        Callback::from(move |transition: Transition| {
            if overlay.transition(field, transition).is_some() {
                refresh.force_update();
            }
        })
    };

    let on_macro = {
        let overlay = props.overlay.clone();
        let field = props.field;
        Callback::from(move |id: String| {
            if overlay.apply_macro(field, &id).is_some() {
                refresh.force_update();
            }
        })
    };

    let on_edit = {
        let dispatch = dispatch.clone();
        Callback::from(move |id: String| dispatch.reduce_mut(|store| open_edit(store, &id)))
    };

    let on_add = Callback::from(move |_: MouseEvent| dispatch.reduce_mut(open_create));

    let labels = Label::all()
        .into_iter()
        .map(|label| {
            let on_transition = on_transition.clone();
            let onclick =
                Callback::from(move |_: MouseEvent| on_transition.emit(Transition::ToggleLabel(label)));
            html! {
                <button
                    type="button"
                    class={classes!("cc-chip", selection.is_selected(label).then_some("cc-on"))}
                    style={format!("--cc-accent: {}", label.color())}
                    title={label.description()}
                    {onclick}
                >
                    <span>{label.emoji()}</span>
                    <span>{label.name()}</span>
                </button>
            }
        })
        .collect::<Html>();

    let decorations = Decoration::all()
        .into_iter()
        .map(|decoration| {
            let on_transition = on_transition.clone();
            let onclick = Callback::from(move |_: MouseEvent| {
                on_transition.emit(Transition::ToggleDecoration(decoration));
            });
            html! {
                <button
                    type="button"
                    class={classes!(
                        "cc-chip",
                        "cc-chip-small",
                        selection.has_decoration(decoration).then_some("cc-on")
                    )}
                    title={decoration.description()}
                    {onclick}
                >
                    {decoration.name()}
                </button>
            }
        })
        .collect::<Html>();

    let macros = buttons
        .iter()
        .map(|button| {
            let onclick = {
                let on_macro = on_macro.clone();
                let id = button.id.clone();
                Callback::from(move |_: MouseEvent| on_macro.emit(id.clone()))
            };
            let onedit = {
                let on_edit = on_edit.clone();
                let id = button.id.clone();
                Callback::from(move |event: MouseEvent| {
                    event.stop_propagation();
                    on_edit.emit(id.clone());
                })
            };
            html! {
                <button
                    type="button"
                    key={button.id.clone()}
                    class="cc-chip cc-macro"
                    title={button.tooltip.clone()}
                    {onclick}
                >
                    <span>{button.emoji}</span>
                    <span>{button.name.clone()}</span>
                    <span class="cc-macro-edit" title="Edit macro" onclick={onedit}>{"✎"}</span>
                </button>
            }
        })
        .collect::<Html>();

    html! {
        <div class="cc-toolbar">
            <div class="cc-group">{labels}</div>
            <span class="cc-divider"></span>
            <div class="cc-group">{decorations}</div>
            <span class="cc-divider"></span>
            <div class="cc-group">
                {macros}
                <button type="button" class="cc-chip cc-macro-add" title="Create macro" onclick={on_add}>
                    {"+ Macro"}
                </button>
            </div>
        </div>
    }
}
