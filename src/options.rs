//! Host-facing configuration records.
//!
//! Every record is per-key optional: a caller overrides only the keys it
//! cares about and the rest fall back to the built-in defaults. Merging is
//! shallow and per key, never whole-object replacement.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::translations::Translations;

macro_rules! impl_option_record_methods {
    ($type:ty { $($field:ident : $value:ty),* $(,)? }) => {
        impl $type {
            $(
                pub fn $field(mut self, value: impl Into<$value>) -> Self {
                    self.$field = Some(value.into());
                    self
                }
            )*
        }
    };
}
pub(crate) use impl_option_record_methods;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Ios,
    Android,
    Other,
}

impl Platform {
    pub fn current() -> Self {
        if cfg!(target_os = "ios") {
            Platform::Ios
        } else if cfg!(target_os = "android") {
            Platform::Android
        } else {
            Platform::Other
        }
    }

    /// Paged (one-field-at-a-time) entry is only offered on iOS.
    pub const fn supports_paged_entry(self) -> bool {
        matches!(self, Platform::Ios)
    }
}

/// Border/label colors for the three input states.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputColors {
    pub focused: Option<String>,
    pub errored: Option<String>,
    pub regular: Option<String>,
}

impl_option_record_methods!(InputColors {
    focused: String,
    errored: String,
    regular: String,
});

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ResolvedInputColors {
    pub focused: String,
    pub errored: String,
    pub regular: String,
}

impl InputColors {
    pub fn resolve(&self) -> ResolvedInputColors {
        ResolvedInputColors {
            focused: self.focused.clone().unwrap_or_else(|| "#080F9C".into()),
            errored: self.errored.clone().unwrap_or_else(|| "#B00020".into()),
            regular: self.regular.clone().unwrap_or_else(|| "#B9C4CA".into()),
        }
    }
}

/// Font-family names used by the host renderer.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Fonts {
    pub regular: Option<String>,
    pub bold: Option<String>,
}

impl_option_record_methods!(Fonts {
    regular: String,
    bold: String,
});

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ResolvedFonts {
    pub regular: String,
    pub bold: String,
}

impl Fonts {
    pub fn resolve(&self) -> ResolvedFonts {
        ResolvedFonts {
            regular: self
                .regular
                .clone()
                .unwrap_or_else(|| "RobotoMono_400Regular".into()),
            bold: self
                .bold
                .clone()
                .unwrap_or_else(|| "RobotoMono_700Bold".into()),
        }
    }
}

/// One cosmetic style rule: an opaque bag of renderer tokens.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StyleRule {
    tokens: BTreeMap<String, String>,
}

impl StyleRule {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, token: impl Into<String>, value: impl Into<String>) -> Self {
        self.tokens.insert(token.into(), value.into());
        self
    }

    pub fn get(&self, token: &str) -> Option<&str> {
        self.tokens.get(token).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.tokens
            .iter()
            .map(|(token, value)| (token.as_str(), value.as_str()))
    }
}

/// The visual slots a caller may restyle. Purely cosmetic, no behavioral
/// effect on the engine.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum StyleSlot {
    CardPreview,
    LabelText,
    CardHolderPreview,
    ExpirationPreview,
    Outline,
    Input,
    LabelContainer,
    InputLabel,
    ErrorText,
}

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StyleOverrides {
    pub card_preview: Option<StyleRule>,
    pub label_text: Option<StyleRule>,
    pub card_holder_preview: Option<StyleRule>,
    pub expiration_preview: Option<StyleRule>,
    pub outline: Option<StyleRule>,
    pub input: Option<StyleRule>,
    pub label_container: Option<StyleRule>,
    pub input_label: Option<StyleRule>,
    pub error_text: Option<StyleRule>,
}

impl_option_record_methods!(StyleOverrides {
    card_preview: StyleRule,
    label_text: StyleRule,
    card_holder_preview: StyleRule,
    expiration_preview: StyleRule,
    outline: StyleRule,
    input: StyleRule,
    label_container: StyleRule,
    input_label: StyleRule,
    error_text: StyleRule,
});

impl StyleOverrides {
    pub fn rule(&self, slot: StyleSlot) -> Option<&StyleRule> {
        match slot {
            StyleSlot::CardPreview => self.card_preview.as_ref(),
            StyleSlot::LabelText => self.label_text.as_ref(),
            StyleSlot::CardHolderPreview => self.card_holder_preview.as_ref(),
            StyleSlot::ExpirationPreview => self.expiration_preview.as_ref(),
            StyleSlot::Outline => self.outline.as_ref(),
            StyleSlot::Input => self.input.as_ref(),
            StyleSlot::LabelContainer => self.label_container.as_ref(),
            StyleSlot::InputLabel => self.input_label.as_ref(),
            StyleSlot::ErrorText => self.error_text.as_ref(),
        }
    }
}

/// Everything the host passes when mounting the form.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CardFormOptions {
    pub horizontal_start: Option<bool>,
    pub platform: Option<Platform>,
    pub translations: Translations,
    pub input_colors: InputColors,
    pub fonts: Fonts,
    pub overrides: StyleOverrides,
}

impl CardFormOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn horizontal_start(mut self, value: bool) -> Self {
        self.horizontal_start = Some(value);
        self
    }

    pub fn platform(mut self, value: Platform) -> Self {
        self.platform = Some(value);
        self
    }

    pub fn translations(mut self, value: Translations) -> Self {
        self.translations = value;
        self
    }

    pub fn input_colors(mut self, value: InputColors) -> Self {
        self.input_colors = value;
        self
    }

    pub fn fonts(mut self, value: Fonts) -> Self {
        self.fonts = value;
        self
    }

    pub fn overrides(mut self, value: StyleOverrides) -> Self {
        self.overrides = value;
        self
    }

    /// Whether entry starts in the paged horizontal layout.
    pub fn starts_paged(&self) -> bool {
        let platform = self.platform.unwrap_or_else(Platform::current);
        self.horizontal_start.unwrap_or(true) && platform.supports_paged_entry()
    }
}
