//! Collapsible article settings panel.
//!
//! # Design
//! - Drafts and visibility live in a reducer; edits never leave the panel until applied.
//! - The document `pointerdown` listener exists only while the panel is open.
//! - Apply and reset publish complete records through `on_change`; neither closes the panel.

use crate::components::atoms::{
    ArrowButton, Button, ButtonRole, OptionSelect, RadioGroup, Separator, Text,
};
use crate::core::dismiss::{DismissListener, ListenerChange};
use crate::core::options::{ControlKind, Dimension, OptionValue};
use crate::core::panel::{PanelAction, PanelState, PointerTarget};
use crate::core::settings::SettingsRecord;
use crate::i18n::TranslationBundle;
use gloo::console;
use gloo::events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::Node;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct SettingsPanelProps {
    pub default_state: SettingsRecord,
    pub on_change: Callback<SettingsRecord>,
    pub bundle: TranslationBundle,
}

#[function_component(SettingsPanel)]
pub(crate) fn settings_panel(props: &SettingsPanelProps) -> Html {
    let state = {
        let defaults = props.default_state;
        use_reducer(move || PanelState::new(defaults))
    };
    let panel_ref = use_node_ref();
    let toggle_ref = use_node_ref();
    let listener = use_mut_ref(DismissListener::<EventListener>::new);

    {
        let listener = listener.clone();
        let panel_ref = panel_ref.clone();
        let toggle_ref = toggle_ref.clone();
        let dispatcher = state.dispatcher();
        use_effect_with_deps(
            move |visibility| {
                let change = listener.borrow_mut().sync(*visibility, || {
                    attach_dismiss_listener(panel_ref, toggle_ref, dispatcher)
                });
                match change {
                    ListenerChange::Attached => console::debug!("dismiss listener attached"),
                    ListenerChange::Released => console::debug!("dismiss listener released"),
                    ListenerChange::Unchanged => {}
                }
                || ()
            },
            state.visibility(),
        );
    }
    {
        let listener = listener.clone();
        use_effect_with_deps(
            move |_| {
                move || {
                    if listener.borrow_mut().release() == ListenerChange::Released {
                        console::debug!("dismiss listener released on teardown");
                    }
                }
            },
            (),
        );
    }

    let on_toggle = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| state.dispatch(PanelAction::Toggle))
    };
    let on_submit = {
        let state = state.clone();
        let on_change = props.on_change.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            on_change.emit(state.apply());
        })
    };
    let on_reset = {
        let state = state.clone();
        let on_change = props.on_change.clone();
        Callback::from(move |event: Event| {
            event.prevent_default();
            let defaults = *state.defaults();
            state.dispatch(PanelAction::Reset);
            on_change.emit(defaults);
        })
    };

    let bundle = &props.bundle;
    let open = state.visibility().is_open();
    let draft = *state.draft();
    let controls = Dimension::all().map(|dimension| {
        let title = AttrValue::from(bundle.text(dimension.title_key(), dimension.default_title()));
        let selected = draft.field(dimension);
        let onchange = {
            let state = state.clone();
            Callback::from(move |value: OptionValue| {
                state.dispatch(PanelAction::SetDraft(dimension, value));
            })
        };
        let control = match dimension.control() {
            ControlKind::Select => html! {
                <OptionSelect
                    dimension={dimension}
                    title={title}
                    selected={selected}
                    onchange={onchange}
                />
            },
            ControlKind::Radio => html! {
                <RadioGroup
                    dimension={dimension}
                    title={title}
                    selected={selected}
                    onchange={onchange}
                />
            },
        };
        if dimension == Dimension::BackgroundColor {
            html! { <><Separator />{control}</> }
        } else {
            control
        }
    });

    html! {
        <>
            <ArrowButton
                node_ref={toggle_ref}
                open={open}
                aria_label={bundle.text("panel.toggle", "Toggle article settings")}
                onclick={on_toggle}
            />
            <aside
                ref={panel_ref}
                class={classes!("settings-panel", open.then_some("settings-panel--open"))}
                aria-hidden={(!open).to_string()}
            >
                <form class="settings-panel__form" onsubmit={on_submit} onreset={on_reset}>
                    <div class="settings-panel__fields">
                        <Text tag="h2" size={31} weight={800} uppercase={true}>
                            {bundle.text("panel.title", "Set parameters")}
                        </Text>
                        {for controls}
                    </div>
                    <div class="settings-panel__actions">
                        <Button
                            title={bundle.text("panel.reset", "Reset")}
                            role={ButtonRole::Clear}
                        />
                        <Button
                            title={bundle.text("panel.apply", "Apply")}
                            role={ButtonRole::Apply}
                        />
                    </div>
                </form>
            </aside>
        </>
    }
}

fn attach_dismiss_listener(
    panel_ref: NodeRef,
    toggle_ref: NodeRef,
    dispatcher: UseReducerDispatcher<PanelState>,
) -> EventListener {
    EventListener::new(&gloo::utils::document(), "pointerdown", move |event| {
        let target = event.target().and_then(|target| target.dyn_into::<Node>().ok());
        let target = PointerTarget::classify(
            contains(&panel_ref, target.as_ref()),
            contains(&toggle_ref, target.as_ref()),
        );
        dispatcher.dispatch(PanelAction::PointerDown(target));
    })
}

fn contains(node_ref: &NodeRef, target: Option<&Node>) -> bool {
    target.is_some() && node_ref.get().is_some_and(|node| node.contains(target))
}
