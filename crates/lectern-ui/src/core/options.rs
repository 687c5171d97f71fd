//! Enumerated option sets for every article style dimension.
//!
//! # Design
//! - Options are `'static` constants; the UI never builds values at runtime.
//! - Each dimension owns its option set, style variable, and control kind.
//! - DOM controls emit raw strings, mapped back through [`find_option`].

use std::fmt::{self, Display, Formatter};
use thiserror::Error;

/// A selectable choice: machine value used in CSS plus a human label.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct OptionValue {
    /// Machine value written into the style variable.
    pub value: &'static str,
    /// Human-readable label shown in controls.
    pub label: &'static str,
}

impl OptionValue {
    /// Build an option from its machine value and label.
    #[must_use]
    pub const fn new(value: &'static str, label: &'static str) -> Self {
        Self { value, label }
    }
}

/// Widget used to render a dimension inside the panel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ControlKind {
    /// Single-choice dropdown.
    Select,
    /// Inline radio group.
    Radio,
}

/// One of the five style dimensions of the article.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Dimension {
    /// Typeface of the article text.
    FontFamily,
    /// Base font size.
    FontSize,
    /// Text color.
    FontColor,
    /// Page background color.
    BackgroundColor,
    /// Maximum width of the content column.
    ContentWidth,
}

impl Dimension {
    /// All dimensions in panel display order.
    #[must_use]
    pub const fn all() -> [Self; 5] {
        [
            Self::FontFamily,
            Self::FontSize,
            Self::FontColor,
            Self::BackgroundColor,
            Self::ContentWidth,
        ]
    }

    /// Stable identifier, also used as the form control name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::FontFamily => "font_family",
            Self::FontSize => "font_size",
            Self::FontColor => "font_color",
            Self::BackgroundColor => "background_color",
            Self::ContentWidth => "content_width",
        }
    }

    /// Enumerated option set for the dimension.
    #[must_use]
    pub const fn options(self) -> &'static [OptionValue] {
        match self {
            Self::FontFamily => FONT_FAMILY_OPTIONS,
            Self::FontSize => FONT_SIZE_OPTIONS,
            Self::FontColor => FONT_COLORS,
            Self::BackgroundColor => BACKGROUND_COLORS,
            Self::ContentWidth => CONTENT_WIDTHS,
        }
    }

    /// CSS custom property driven by the dimension.
    #[must_use]
    pub const fn style_variable(self) -> &'static str {
        match self {
            Self::FontFamily => "--font-family",
            Self::FontSize => "--font-size",
            Self::FontColor => "--font-color",
            Self::BackgroundColor => "--bg-color",
            Self::ContentWidth => "--container-width",
        }
    }

    /// Control rendered for the dimension.
    #[must_use]
    pub const fn control(self) -> ControlKind {
        match self {
            Self::FontSize => ControlKind::Radio,
            _ => ControlKind::Select,
        }
    }

    /// Translation key for the control title.
    #[must_use]
    pub const fn title_key(self) -> &'static str {
        match self {
            Self::FontFamily => "panel.font_family",
            Self::FontSize => "panel.font_size",
            Self::FontColor => "panel.font_color",
            Self::BackgroundColor => "panel.background_color",
            Self::ContentWidth => "panel.content_width",
        }
    }

    /// English title used when no translation resolves.
    #[must_use]
    pub const fn default_title(self) -> &'static str {
        match self {
            Self::FontFamily => "Font",
            Self::FontSize => "Font size",
            Self::FontColor => "Font color",
            Self::BackgroundColor => "Background color",
            Self::ContentWidth => "Content width",
        }
    }

    /// Whether `value` belongs to the dimension's option set.
    #[must_use]
    pub fn contains(self, value: &OptionValue) -> bool {
        self.options().contains(value)
    }
}

impl Display for Dimension {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Failures mapping raw control values back into options.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum OptionError {
    /// The raw value is not a member of the dimension's option set.
    #[error("unknown {dimension} option `{value}`")]
    Unknown {
        /// Dimension the control belongs to.
        dimension: Dimension,
        /// Raw value received from the control.
        value: String,
    },
}

/// Look up the option whose machine value equals `raw`.
///
/// # Errors
///
/// Returns [`OptionError::Unknown`] when no option of `dimension` matches.
pub fn find_option(dimension: Dimension, raw: &str) -> Result<OptionValue, OptionError> {
    dimension
        .options()
        .iter()
        .copied()
        .find(|option| option.value == raw)
        .ok_or_else(|| OptionError::Unknown {
            dimension,
            value: raw.to_string(),
        })
}

/// Arial typeface.
pub const FONT_ARIAL: OptionValue = OptionValue::new("Arial", "Arial");
/// Open Sans typeface.
pub const FONT_OPEN_SANS: OptionValue = OptionValue::new("Open Sans", "Open Sans");
/// Ubuntu typeface.
pub const FONT_UBUNTU: OptionValue = OptionValue::new("Ubuntu", "Ubuntu");
/// Cormorant Garamond typeface.
pub const FONT_CORMORANT: OptionValue =
    OptionValue::new("Cormorant Garamond", "Cormorant Garamond");
/// Days One typeface.
pub const FONT_DAYS_ONE: OptionValue = OptionValue::new("Days One", "Days One");
/// Merriweather typeface.
pub const FONT_MERRIWEATHER: OptionValue = OptionValue::new("Merriweather", "Merriweather");

/// Font family choices.
pub const FONT_FAMILY_OPTIONS: &[OptionValue] = &[
    FONT_ARIAL,
    FONT_OPEN_SANS,
    FONT_UBUNTU,
    FONT_CORMORANT,
    FONT_DAYS_ONE,
    FONT_MERRIWEATHER,
];

/// 18 px text.
pub const SIZE_18: OptionValue = OptionValue::new("18px", "18px");
/// 24 px text.
pub const SIZE_24: OptionValue = OptionValue::new("24px", "24px");
/// 38 px text.
pub const SIZE_38: OptionValue = OptionValue::new("38px", "38px");

/// Font size choices.
pub const FONT_SIZE_OPTIONS: &[OptionValue] = &[SIZE_18, SIZE_24, SIZE_38];

/// Black.
pub const COLOR_BLACK: OptionValue = OptionValue::new("#000000", "Black");
/// White.
pub const COLOR_WHITE: OptionValue = OptionValue::new("#FFFFFF", "White");
/// Gray.
pub const COLOR_GRAY: OptionValue = OptionValue::new("#C4C4C4", "Gray");
/// Pink.
pub const COLOR_PINK: OptionValue = OptionValue::new("#FEAFE8", "Pink");
/// Purple.
pub const COLOR_PURPLE: OptionValue = OptionValue::new("#CFAFFE", "Purple");
/// Beige.
pub const COLOR_BEIGE: OptionValue = OptionValue::new("#FFF4E0", "Beige");
/// Green.
pub const COLOR_GREEN: OptionValue = OptionValue::new("#80D994", "Green");
/// Yellow.
pub const COLOR_YELLOW: OptionValue = OptionValue::new("#FFC802", "Yellow");

/// Text color choices.
pub const FONT_COLORS: &[OptionValue] = &[
    COLOR_BLACK,
    COLOR_WHITE,
    COLOR_GRAY,
    COLOR_PINK,
    COLOR_PURPLE,
    COLOR_BEIGE,
    COLOR_GREEN,
    COLOR_YELLOW,
];

/// Background color choices.
pub const BACKGROUND_COLORS: &[OptionValue] = &[
    COLOR_WHITE,
    COLOR_BLACK,
    COLOR_GRAY,
    COLOR_PINK,
    COLOR_PURPLE,
    COLOR_BEIGE,
    COLOR_GREEN,
    COLOR_YELLOW,
];

/// Compact 700 px column.
pub const WIDTH_COMPACT: OptionValue = OptionValue::new("700px", "Compact");
/// Narrow 948 px column.
pub const WIDTH_NARROW: OptionValue = OptionValue::new("948px", "Narrow");
/// Wide 1394 px column.
pub const WIDTH_WIDE: OptionValue = OptionValue::new("1394px", "Wide");

/// Content width choices.
pub const CONTENT_WIDTHS: &[OptionValue] = &[WIDTH_COMPACT, WIDTH_NARROW, WIDTH_WIDE];
