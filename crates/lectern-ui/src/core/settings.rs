//! Article settings record shared between the panel and the shell.

use crate::core::options::{
    COLOR_BLACK, COLOR_WHITE, Dimension, FONT_ARIAL, OptionValue, SIZE_18, WIDTH_COMPACT,
};

/// Complete set of article style choices; always fully populated.
///
/// Records are replaced wholesale. [`SettingsRecord::with_field`] returns a
/// new record instead of patching in place.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SettingsRecord {
    /// Typeface.
    pub font_family: OptionValue,
    /// Base font size.
    pub font_size: OptionValue,
    /// Text color.
    pub font_color: OptionValue,
    /// Background color.
    pub background_color: OptionValue,
    /// Content column width.
    pub content_width: OptionValue,
}

impl SettingsRecord {
    /// Read the value held for `dimension`.
    #[must_use]
    pub const fn field(&self, dimension: Dimension) -> OptionValue {
        match dimension {
            Dimension::FontFamily => self.font_family,
            Dimension::FontSize => self.font_size,
            Dimension::FontColor => self.font_color,
            Dimension::BackgroundColor => self.background_color,
            Dimension::ContentWidth => self.content_width,
        }
    }

    /// Copy of the record with `dimension` replaced by `value`.
    #[must_use]
    pub const fn with_field(mut self, dimension: Dimension, value: OptionValue) -> Self {
        match dimension {
            Dimension::FontFamily => self.font_family = value,
            Dimension::FontSize => self.font_size = value,
            Dimension::FontColor => self.font_color = value,
            Dimension::BackgroundColor => self.background_color = value,
            Dimension::ContentWidth => self.content_width = value,
        }
        self
    }

    /// Whether every field is a member of its dimension's option set.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        Dimension::all()
            .iter()
            .all(|dimension| dimension.contains(&self.field(*dimension)))
    }
}

impl Default for SettingsRecord {
    fn default() -> Self {
        DEFAULT_SETTINGS
    }
}

/// Startup record: Arial, 18px, black on white, 700px column.
pub const DEFAULT_SETTINGS: SettingsRecord = SettingsRecord {
    font_family: FONT_ARIAL,
    font_size: SIZE_18,
    font_color: COLOR_BLACK,
    background_color: COLOR_WHITE,
    content_width: WIDTH_COMPACT,
};
