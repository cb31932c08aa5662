//! Single-import convenience module for hosts embedding the form.

pub use crate::brand::{BrandProfile, CardBrand};
pub use crate::fields::CardField;
pub use crate::form::{
    CardDetails, CreditCardForm, FormError, FormResult, FormSnapshot, SequencerCommand,
    SubmitState,
};
pub use crate::options::{
    CardFormOptions, Fonts, InputColors, Platform, StyleOverrides, StyleRule, StyleSlot,
};
pub use crate::translations::{TranslationTable, Translations};
pub use crate::validate::{BuiltinValidator, CardValidator, Validity};
