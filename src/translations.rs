//! Built-in English string table with per-key caller overrides.
//!
//! Every key of [`Translations`] is optional; [`Translations::resolve`]
//! merges the supplied keys over the built-in table one key at a time, so a
//! partial override never blanks the remaining strings.

use serde::{Deserialize, Serialize};

use crate::fields::CardField;
use crate::options::impl_option_record_methods;

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Translations {
    pub card_number: Option<String>,
    pub card_holder_name: Option<String>,
    pub name_surname: Option<String>,
    pub mm_yy: Option<String>,
    pub expiration: Option<String>,
    pub security_code: Option<String>,
    pub zip_code: Option<String>,
    pub next: Option<String>,
    pub done: Option<String>,
    pub card_number_required: Option<String>,
    pub card_number_invalid: Option<String>,
    pub card_holder_name_required: Option<String>,
    pub card_holder_name_invalid: Option<String>,
    pub expiration_required: Option<String>,
    pub expiration_invalid: Option<String>,
    pub security_code_required: Option<String>,
    pub security_code_invalid: Option<String>,
    pub zip_code_required: Option<String>,
    pub zip_code_invalid: Option<String>,
}

impl_option_record_methods!(Translations {
    card_number: String,
    card_holder_name: String,
    name_surname: String,
    mm_yy: String,
    expiration: String,
    security_code: String,
    zip_code: String,
    next: String,
    done: String,
    card_number_required: String,
    card_number_invalid: String,
    card_holder_name_required: String,
    card_holder_name_invalid: String,
    expiration_required: String,
    expiration_invalid: String,
    security_code_required: String,
    security_code_invalid: String,
    zip_code_required: String,
    zip_code_invalid: String,
});

impl Translations {
    pub fn resolve(&self) -> TranslationTable {
        let defaults = TranslationTable::default();
        macro_rules! pick {
            ($field:ident) => {
                self.$field.clone().unwrap_or(defaults.$field)
            };
        }
        TranslationTable {
            card_number: pick!(card_number),
            card_holder_name: pick!(card_holder_name),
            name_surname: pick!(name_surname),
            mm_yy: pick!(mm_yy),
            expiration: pick!(expiration),
            security_code: pick!(security_code),
            zip_code: pick!(zip_code),
            next: pick!(next),
            done: pick!(done),
            card_number_required: pick!(card_number_required),
            card_number_invalid: pick!(card_number_invalid),
            card_holder_name_required: pick!(card_holder_name_required),
            card_holder_name_invalid: pick!(card_holder_name_invalid),
            expiration_required: pick!(expiration_required),
            expiration_invalid: pick!(expiration_invalid),
            security_code_required: pick!(security_code_required),
            security_code_invalid: pick!(security_code_invalid),
            zip_code_required: pick!(zip_code_required),
            zip_code_invalid: pick!(zip_code_invalid),
        }
    }
}

/// Fully-populated string table handed to the engine.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TranslationTable {
    pub card_number: String,
    pub card_holder_name: String,
    pub name_surname: String,
    pub mm_yy: String,
    pub expiration: String,
    pub security_code: String,
    pub zip_code: String,
    pub next: String,
    pub done: String,
    pub card_number_required: String,
    pub card_number_invalid: String,
    pub card_holder_name_required: String,
    pub card_holder_name_invalid: String,
    pub expiration_required: String,
    pub expiration_invalid: String,
    pub security_code_required: String,
    pub security_code_invalid: String,
    pub zip_code_required: String,
    pub zip_code_invalid: String,
}

impl Default for TranslationTable {
    fn default() -> Self {
        Self {
            card_number: "Card Number".into(),
            card_holder_name: "Name on card".into(),
            name_surname: "Name Surname".into(),
            mm_yy: "MM/YY".into(),
            expiration: "Expiration date (MM/YY)".into(),
            security_code: "CVV".into(),
            zip_code: "Zip code".into(),
            next: "Next".into(),
            done: "Done".into(),
            card_number_required: "Card number is required.".into(),
            card_number_invalid: "This card number looks invalid.".into(),
            card_holder_name_required: "Cardholder name is required.".into(),
            card_holder_name_invalid: "This cardholder name looks invalid.".into(),
            expiration_required: "Expiration date is required.".into(),
            expiration_invalid: "This expiration date looks invalid.".into(),
            security_code_required: "Security code is required.".into(),
            security_code_invalid: "This security code looks invalid.".into(),
            zip_code_required: "Zip code is required.".into(),
            zip_code_invalid: "This zip code looks invalid.".into(),
        }
    }
}

impl TranslationTable {
    pub fn label(&self, field: CardField) -> &str {
        match field {
            CardField::CardNumber => &self.card_number,
            CardField::HolderName => &self.card_holder_name,
            CardField::Expiration => &self.expiration,
            CardField::Cvv => &self.security_code,
            CardField::ZipCode => &self.zip_code,
        }
    }

    pub fn required_message(&self, field: CardField) -> &str {
        match field {
            CardField::CardNumber => &self.card_number_required,
            CardField::HolderName => &self.card_holder_name_required,
            CardField::Expiration => &self.expiration_required,
            CardField::Cvv => &self.security_code_required,
            CardField::ZipCode => &self.zip_code_required,
        }
    }

    pub fn invalid_message(&self, field: CardField) -> &str {
        match field {
            CardField::CardNumber => &self.card_number_invalid,
            CardField::HolderName => &self.card_holder_name_invalid,
            CardField::Expiration => &self.expiration_invalid,
            CardField::Cvv => &self.security_code_invalid,
            CardField::ZipCode => &self.zip_code_invalid,
        }
    }
}
