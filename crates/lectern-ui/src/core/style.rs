//! Projection of the committed settings onto CSS custom properties.

use crate::core::options::Dimension;
use crate::core::settings::SettingsRecord;
use std::fmt::Write;

/// Named style variables derived from a [`SettingsRecord`], one per dimension.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StyleVariables {
    entries: [(&'static str, &'static str); 5],
}

impl StyleVariables {
    /// Value bound to `name`, if it is one of the five variables.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| *value)
    }

    /// `(variable, value)` pairs in dimension order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &'static str)> + '_ {
        self.entries.iter().copied()
    }

    /// Variables whose values differ from `previous`.
    #[must_use]
    pub fn changed_from(&self, previous: &Self) -> Vec<&'static str> {
        self.entries
            .iter()
            .zip(previous.entries.iter())
            .filter(|(next, prev)| next.1 != prev.1)
            .map(|(next, _)| next.0)
            .collect()
    }

    /// Render as an inline `style` attribute value.
    #[must_use]
    pub fn to_inline_style(&self) -> String {
        let mut out = String::new();
        for (name, value) in self.iter() {
            let _ = write!(out, "{name}: {value};");
        }
        out
    }
}

/// Map every record field to its style variable using the machine value.
#[must_use]
pub fn derive_style_variables(record: &SettingsRecord) -> StyleVariables {
    let entries = Dimension::all().map(|dimension| {
        (
            dimension.style_variable(),
            record.field(dimension).value,
        )
    });
    StyleVariables { entries }
}

/// Committed settings held by the app shell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CommittedSettings {
    record: SettingsRecord,
}

impl CommittedSettings {
    /// Start from `record`.
    #[must_use]
    pub const fn new(record: SettingsRecord) -> Self {
        Self { record }
    }

    /// Record currently reflected in the layout.
    #[must_use]
    pub const fn record(&self) -> &SettingsRecord {
        &self.record
    }

    /// Style variables for the current record.
    #[must_use]
    pub fn style_variables(&self) -> StyleVariables {
        derive_style_variables(&self.record)
    }

    /// Replace the record wholesale; returns the variables that changed.
    pub fn commit(&mut self, next: SettingsRecord) -> Vec<&'static str> {
        let before = self.style_variables();
        self.record = next;
        self.style_variables().changed_from(&before)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::options::{COLOR_GRAY, SIZE_24};
    use crate::core::panel::PanelState;
    use crate::core::settings::DEFAULT_SETTINGS;

    #[test]
    fn default_variables_use_machine_values() {
        let vars = derive_style_variables(&DEFAULT_SETTINGS);
        assert_eq!(vars.get("--font-family"), Some("Arial"));
        assert_eq!(vars.get("--font-size"), Some("18px"));
        assert_eq!(vars.get("--font-color"), Some("#000000"));
        assert_eq!(vars.get("--bg-color"), Some("#FFFFFF"));
        assert_eq!(vars.get("--container-width"), Some("700px"));
        assert_eq!(vars.get("--missing"), None);
    }

    #[test]
    fn inline_style_lists_every_variable() {
        let style = derive_style_variables(&DEFAULT_SETTINGS).to_inline_style();
        assert_eq!(
            style,
            "--font-family: Arial;--font-size: 18px;--font-color: #000000;\
             --bg-color: #FFFFFF;--container-width: 700px;"
        );
    }

    #[test]
    fn commit_replaces_record_wholesale() {
        let mut committed = CommittedSettings::new(DEFAULT_SETTINGS);
        let next = DEFAULT_SETTINGS.with_field(Dimension::FontSize, SIZE_24);
        committed.commit(next);
        assert_eq!(committed.record(), &next);
        assert!(committed.commit(next).is_empty());
    }

    #[test]
    fn apply_then_reset_round_trip_through_the_shell() {
        let mut panel = PanelState::new(DEFAULT_SETTINGS);
        let mut shell = CommittedSettings::new(DEFAULT_SETTINGS);
        let original = shell.style_variables();

        panel.toggle_visibility();
        panel.set_draft_field(Dimension::FontSize, SIZE_24);
        panel.set_draft_field(Dimension::BackgroundColor, COLOR_GRAY);
        let published = panel.apply();
        assert_eq!(
            published,
            DEFAULT_SETTINGS
                .with_field(Dimension::FontSize, SIZE_24)
                .with_field(Dimension::BackgroundColor, COLOR_GRAY)
        );

        let changed = shell.commit(published);
        assert_eq!(changed, vec!["--font-size", "--bg-color"]);
        assert_eq!(shell.style_variables().get("--font-size"), Some("24px"));
        assert_eq!(shell.style_variables().get("--bg-color"), Some("#C4C4C4"));

        let published = panel.reset();
        assert_eq!(published, DEFAULT_SETTINGS);
        let changed = shell.commit(published);
        assert_eq!(changed, vec!["--font-size", "--bg-color"]);
        assert_eq!(shell.style_variables(), original);
    }

    #[test]
    fn drafts_do_not_reach_the_shell_until_applied() {
        let mut panel = PanelState::new(DEFAULT_SETTINGS);
        let shell = CommittedSettings::new(DEFAULT_SETTINGS);
        panel.set_draft_field(Dimension::FontSize, SIZE_24);
        assert_eq!(shell.record(), &DEFAULT_SETTINGS);
    }
}
