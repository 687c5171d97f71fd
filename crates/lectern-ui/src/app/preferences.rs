//! Environment helpers for the app shell.
//!
//! Only the UI locale is resolved here; article settings are never persisted.

use crate::i18n::{DEFAULT_LOCALE, LocaleCode};
use gloo::console;
use gloo::utils::window;
use web_sys::UrlSearchParams;

pub(crate) const LOCALE_QUERY_KEY: &str = "lang";

/// Resolve the locale from `?lang=`, then the browser language, then the default.
pub(crate) fn load_locale() -> LocaleCode {
    if let Some(locale) = query_locale() {
        return locale;
    }
    if let Some(nav) = window().navigator().language() {
        if let Some(locale) = LocaleCode::from_lang_tag(&nav) {
            return locale;
        }
    }
    DEFAULT_LOCALE
}

fn query_locale() -> Option<LocaleCode> {
    let search = window().location().search().ok()?;
    let params = match UrlSearchParams::new_with_str(&search) {
        Ok(params) => params,
        Err(err) => {
            console::error!("query string parse failed", err);
            return None;
        }
    };
    let value = params.get(LOCALE_QUERY_KEY)?;
    let locale = LocaleCode::from_lang_tag(&value);
    if locale.is_none() {
        console::warn!("unsupported locale requested", value);
    }
    locale
}
