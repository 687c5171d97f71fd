//! Settings panel state machine.
//!
//! # Design
//! - Visibility and draft fields live in one reducer so document listeners
//!   dispatch against the latest state, never a captured render snapshot.
//! - The draft is a working copy; nothing here touches the committed record.
//! - Publishing (apply/reset) returns the record; emitting it is the caller's job.

use crate::core::options::{Dimension, OptionValue};
use crate::core::settings::SettingsRecord;
use std::rc::Rc;
use yew::functional::Reducible;

/// Open/closed state of the panel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Visibility {
    /// Panel hidden; outside interactions are ignored.
    #[default]
    Closed,
    /// Panel shown; outside interactions dismiss it.
    Open,
}

impl Visibility {
    /// The opposite state.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Closed => Self::Open,
            Self::Open => Self::Closed,
        }
    }

    /// Whether the panel is shown.
    #[must_use]
    pub const fn is_open(self) -> bool {
        matches!(self, Self::Open)
    }
}

/// Where a pointer-down landed relative to the panel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerTarget {
    /// Inside the panel region.
    Panel,
    /// Inside the toggle control; its own click handler governs visibility.
    Toggle,
    /// Anywhere else in the document.
    Outside,
}

impl PointerTarget {
    /// Classify a target from DOM containment checks.
    #[must_use]
    pub const fn classify(in_panel: bool, in_toggle: bool) -> Self {
        if in_panel {
            Self::Panel
        } else if in_toggle {
            Self::Toggle
        } else {
            Self::Outside
        }
    }
}

/// Panel state: visibility, staged draft, and the construction-time default.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PanelState {
    visibility: Visibility,
    draft: SettingsRecord,
    defaults: SettingsRecord,
}

impl PanelState {
    /// Closed panel whose draft is seeded from `defaults`.
    #[must_use]
    pub const fn new(defaults: SettingsRecord) -> Self {
        Self {
            visibility: Visibility::Closed,
            draft: defaults,
            defaults,
        }
    }

    /// Current visibility.
    #[must_use]
    pub const fn visibility(&self) -> Visibility {
        self.visibility
    }

    /// Staged, uncommitted selections.
    #[must_use]
    pub const fn draft(&self) -> &SettingsRecord {
        &self.draft
    }

    /// Record the panel was constructed with.
    #[must_use]
    pub const fn defaults(&self) -> &SettingsRecord {
        &self.defaults
    }

    /// Flip between open and closed.
    pub const fn toggle_visibility(&mut self) {
        self.visibility = self.visibility.toggled();
    }

    /// Stage `value` for `dimension`. Membership is enforced by the control.
    pub fn set_draft_field(&mut self, dimension: Dimension, value: OptionValue) {
        debug_assert!(
            dimension.contains(&value),
            "{dimension} does not offer {value:?}"
        );
        self.draft = self.draft.with_field(dimension, value);
    }

    /// Record built from the current draft. Visibility is untouched.
    #[must_use]
    pub const fn apply(&self) -> SettingsRecord {
        self.draft
    }

    /// Restore every draft field to the default and return the default record.
    pub const fn reset(&mut self) -> SettingsRecord {
        self.draft = self.defaults;
        self.defaults
    }

    /// Handle a document pointer-down; returns `true` when it closed the panel.
    pub const fn pointer_down(&mut self, target: PointerTarget) -> bool {
        match (self.visibility, target) {
            (Visibility::Open, PointerTarget::Outside) => {
                self.visibility = Visibility::Closed;
                true
            }
            _ => false,
        }
    }
}

/// Reducer actions for [`PanelState`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PanelAction {
    /// Toggle control clicked.
    Toggle,
    /// A control staged a new value.
    SetDraft(Dimension, OptionValue),
    /// Form reset; drafts return to defaults.
    Reset,
    /// Document pointer-down observed by the dismiss listener.
    PointerDown(PointerTarget),
}

impl Reducible for PanelState {
    type Action = PanelAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            PanelAction::Toggle => next.toggle_visibility(),
            PanelAction::SetDraft(dimension, value) => next.set_draft_field(dimension, value),
            PanelAction::Reset => {
                next.reset();
            }
            PanelAction::PointerDown(target) => {
                if !next.pointer_down(target) {
                    return self;
                }
            }
        }
        if next == *self { self } else { Rc::new(next) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::options::{
        COLOR_GRAY, COLOR_PINK, FONT_UBUNTU, SIZE_24, SIZE_38, WIDTH_WIDE,
    };
    use crate::core::settings::DEFAULT_SETTINGS;

    fn open_panel() -> PanelState {
        let mut state = PanelState::new(DEFAULT_SETTINGS);
        state.toggle_visibility();
        state
    }

    #[test]
    fn starts_closed_with_draft_seeded_from_defaults() {
        let state = PanelState::new(DEFAULT_SETTINGS);
        assert_eq!(state.visibility(), Visibility::Closed);
        assert_eq!(state.draft(), &DEFAULT_SETTINGS);
        assert_eq!(state.defaults(), &DEFAULT_SETTINGS);
    }

    #[test]
    fn toggle_is_its_own_inverse() {
        let mut state = PanelState::new(DEFAULT_SETTINGS);
        for _ in 0..3 {
            let before = state.visibility();
            state.toggle_visibility();
            assert_ne!(state.visibility(), before);
            state.toggle_visibility();
            assert_eq!(state.visibility(), before);
        }
    }

    #[test]
    fn apply_publishes_latest_drafts_and_keeps_untouched_defaults() {
        let mut state = open_panel();
        state.set_draft_field(Dimension::FontSize, SIZE_38);
        state.set_draft_field(Dimension::FontSize, SIZE_24);
        state.set_draft_field(Dimension::BackgroundColor, COLOR_GRAY);

        let published = state.apply();
        assert_eq!(published.font_size, SIZE_24);
        assert_eq!(published.background_color, COLOR_GRAY);
        assert_eq!(published.font_family, DEFAULT_SETTINGS.font_family);
        assert_eq!(published.font_color, DEFAULT_SETTINGS.font_color);
        assert_eq!(published.content_width, DEFAULT_SETTINGS.content_width);
        assert_eq!(state.visibility(), Visibility::Open);
    }

    #[test]
    fn apply_is_idempotent() {
        let mut state = open_panel();
        state.set_draft_field(Dimension::FontFamily, FONT_UBUNTU);
        assert_eq!(state.apply(), state.apply());
    }

    #[test]
    fn reset_restores_every_field_regardless_of_edits() {
        let mut state = open_panel();
        state.set_draft_field(Dimension::FontFamily, FONT_UBUNTU);
        state.set_draft_field(Dimension::FontSize, SIZE_38);
        state.set_draft_field(Dimension::FontColor, COLOR_PINK);
        state.set_draft_field(Dimension::BackgroundColor, COLOR_GRAY);
        state.set_draft_field(Dimension::ContentWidth, WIDTH_WIDE);

        let published = state.reset();
        assert_eq!(published, DEFAULT_SETTINGS);
        assert_eq!(state.draft(), &DEFAULT_SETTINGS);
        assert_eq!(state.visibility(), Visibility::Open);
    }

    #[test]
    fn outside_pointer_down_closes_only_when_open() {
        let mut closed = PanelState::new(DEFAULT_SETTINGS);
        for target in [
            PointerTarget::Panel,
            PointerTarget::Toggle,
            PointerTarget::Outside,
        ] {
            assert!(!closed.pointer_down(target));
            assert_eq!(closed.visibility(), Visibility::Closed);
        }

        let mut open = open_panel();
        assert!(!open.pointer_down(PointerTarget::Panel));
        assert!(!open.pointer_down(PointerTarget::Toggle));
        assert_eq!(open.visibility(), Visibility::Open);
        assert!(open.pointer_down(PointerTarget::Outside));
        assert_eq!(open.visibility(), Visibility::Closed);
    }

    #[test]
    fn classify_prefers_panel_then_toggle() {
        assert_eq!(PointerTarget::classify(true, true), PointerTarget::Panel);
        assert_eq!(PointerTarget::classify(false, true), PointerTarget::Toggle);
        assert_eq!(
            PointerTarget::classify(false, false),
            PointerTarget::Outside
        );
    }

    #[test]
    fn pointer_down_from_the_opening_click_does_not_close() {
        // The click that opens the panel lands on the toggle control.
        let state = Rc::new(PanelState::new(DEFAULT_SETTINGS));
        let state = state.reduce(PanelAction::Toggle);
        let state = state.reduce(PanelAction::PointerDown(PointerTarget::Toggle));
        assert_eq!(state.visibility(), Visibility::Open);
    }

    #[test]
    fn reducer_keeps_identity_for_no_op_actions() {
        let state = Rc::new(PanelState::new(DEFAULT_SETTINGS));
        let next = Rc::clone(&state).reduce(PanelAction::PointerDown(PointerTarget::Outside));
        assert!(Rc::ptr_eq(&state, &next));

        let next = Rc::clone(&state).reduce(PanelAction::Reset);
        assert!(Rc::ptr_eq(&state, &next));
    }

    #[test]
    fn reducer_dismiss_preserves_staged_drafts() {
        let state = Rc::new(PanelState::new(DEFAULT_SETTINGS));
        let state = state
            .reduce(PanelAction::Toggle)
            .reduce(PanelAction::SetDraft(Dimension::FontSize, SIZE_24))
            .reduce(PanelAction::PointerDown(PointerTarget::Outside));
        assert_eq!(state.visibility(), Visibility::Closed);
        assert_eq!(state.draft().font_size, SIZE_24);
    }

    #[test]
    fn reducer_reset_does_not_close() {
        let state = Rc::new(open_panel())
            .reduce(PanelAction::SetDraft(Dimension::ContentWidth, WIDTH_WIDE))
            .reduce(PanelAction::Reset);
        assert_eq!(state.draft(), &DEFAULT_SETTINGS);
        assert!(state.visibility().is_open());
    }
}
