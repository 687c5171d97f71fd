use crate::components::shell::AppShell;
use crate::core::settings::DEFAULT_SETTINGS;
use crate::i18n::TranslationBundle;
use gloo::console;
use preferences::load_locale;
use yew::prelude::*;

mod preferences;

#[function_component(LecternApp)]
pub(crate) fn lectern_app() -> Html {
    let locale = use_state(load_locale);
    let bundle = {
        let locale = *locale;
        use_memo(move |_| TranslationBundle::new(locale), locale)
    };
    {
        let locale = *locale;
        use_effect_with_deps(
            move |_| {
                if let Some(root) = gloo::utils::document().document_element() {
                    if let Err(err) = root.set_attribute("lang", locale.code()) {
                        console::error!("lang attribute update failed", err);
                    }
                }
                console::debug!("ui locale", locale.code());
                || ()
            },
            locale,
        );
    }

    html! {
        <AppShell defaults={DEFAULT_SETTINGS} bundle={(*bundle).clone()} />
    }
}

/// Entrypoint invoked by Trunk for wasm32 builds.
pub fn run_app() {
    console_error_panic_hook::set_once();
    if let Some(root) = gloo::utils::document().get_element_by_id("root") {
        yew::Renderer::<LecternApp>::with_root(root).render();
    } else {
        yew::Renderer::<LecternApp>::new().render();
    }
}
