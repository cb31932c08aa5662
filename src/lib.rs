//! Headless credit-card entry form engine.
//!
//! The crate models the behavior of a five-field card entry form — card
//! number, holder name, expiration, security code and zip code — without
//! any rendering of its own. A host UI feeds [`form::CreditCardForm`]
//! discrete events (keystrokes, focus changes, field submits) and executes
//! the [`form::SequencerCommand`]s it returns: scroll requests, focus moves
//! and keyboard dismissal.
//!
//! What the engine covers:
//! - live display formatting (digit grouping for card numbers, `MM/YY`
//!   for expirations) with backspace-aware separator handling ([`format`]),
//! - card brand detection from number prefixes, driving the security-code
//!   length and the formatted number length ([`brand`]),
//! - per-field validation with pluggable rules ([`validate`]),
//! - focus auto-advance through the fixed field order, including the paged
//!   one-field-at-a-time layout used on iOS ([`form`]),
//! - per-key overridable strings and cosmetic styling ([`translations`],
//!   [`options`]).

pub mod brand;
pub mod fields;
pub mod form;
pub mod format;
pub mod options;
pub mod prelude;
pub mod translations;
pub mod validate;

pub use brand::{BrandProfile, CardBrand};
pub use fields::CardField;
pub use form::{
    CardDetails, CardFormController, CreditCardForm, FieldMeta, FormError, FormResult,
    FormSnapshot, SequencerCommand, SubmitState,
};
pub use options::CardFormOptions;
