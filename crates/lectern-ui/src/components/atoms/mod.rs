//! Form and typography atoms used by the settings panel.

pub(crate) mod arrow_button;
pub(crate) mod button;
pub(crate) mod radio_group;
pub(crate) mod select;
pub(crate) mod separator;
pub(crate) mod text;

pub(crate) use arrow_button::ArrowButton;
pub(crate) use button::{Button, ButtonRole};
pub(crate) use radio_group::RadioGroup;
pub(crate) use select::OptionSelect;
pub(crate) use separator::Separator;
pub(crate) use text::Text;
