pub(crate) mod article;
pub(crate) mod atoms;
pub(crate) mod settings_panel;
pub(crate) mod shell;
