//! App shell holding the committed article settings.
//!
//! # Design
//! - The shell owns the committed record; the panel only ever sees defaults.
//! - Records arriving from the panel replace the committed one wholesale.
//! - Style variables are re-derived on every render from the committed record.

use crate::components::article::Article;
use crate::components::settings_panel::SettingsPanel;
use crate::core::settings::SettingsRecord;
use crate::core::style::CommittedSettings;
use crate::i18n::TranslationBundle;
use gloo::console;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct ShellProps {
    pub defaults: SettingsRecord,
    pub bundle: TranslationBundle,
}

#[function_component(AppShell)]
pub(crate) fn app_shell(props: &ShellProps) -> Html {
    let committed = {
        let defaults = props.defaults;
        use_state(move || CommittedSettings::new(defaults))
    };
    let on_change = {
        let committed = committed.clone();
        Callback::from(move |record: SettingsRecord| {
            let mut next = *committed;
            let changed = next.commit(record);
            if !changed.is_empty() {
                console::debug!("article styles committed", changed.join(" "));
            }
            committed.set(next);
        })
    };
    let style = committed.style_variables().to_inline_style();

    html! {
        <main class="main" style={style}>
            <SettingsPanel
                default_state={props.defaults}
                on_change={on_change}
                bundle={props.bundle.clone()}
            />
            <Article bundle={props.bundle.clone()} />
        </main>
    }
}
