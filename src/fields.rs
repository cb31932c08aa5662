use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::brand::BrandProfile;

/// Identity of one entry field. Declaration order is the advance order.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CardField {
    CardNumber,
    HolderName,
    Expiration,
    Cvv,
    ZipCode,
}

pub const FIELD_ORDER: [CardField; 5] = [
    CardField::CardNumber,
    CardField::HolderName,
    CardField::Expiration,
    CardField::Cvv,
    CardField::ZipCode,
];

impl CardField {
    /// Stable key under which the host reads the final value.
    pub const fn key(self) -> &'static str {
        match self {
            CardField::CardNumber => "cardNumber",
            CardField::HolderName => "holderName",
            CardField::Expiration => "expiration",
            CardField::Cvv => "cvv",
            CardField::ZipCode => "zipCode",
        }
    }

    /// Position of the field in the paged layout.
    pub const fn page_index(self) -> usize {
        match self {
            CardField::CardNumber => 0,
            CardField::HolderName => 1,
            CardField::Expiration => 2,
            CardField::Cvv => 3,
            CardField::ZipCode => 4,
        }
    }

    /// Successor in the advance sequence, or `None` past the last field.
    pub const fn next(self) -> Option<CardField> {
        match self {
            CardField::CardNumber => Some(CardField::HolderName),
            CardField::HolderName => Some(CardField::Expiration),
            CardField::Expiration => Some(CardField::Cvv),
            CardField::Cvv => Some(CardField::ZipCode),
            CardField::ZipCode => None,
        }
    }

    /// Length and advance rules for this field under the detected brand.
    ///
    /// A single table keyed by the field identity; target lengths for the
    /// card number and CVV come from the brand profile, the holder name and
    /// zip code advance only on an explicit submit.
    pub const fn profile(self, brand: BrandProfile) -> FieldProfile {
        match self {
            CardField::CardNumber => FieldProfile {
                max_len: brand.display_len,
                advance_len: Some(brand.display_len),
                advances_on_submit: false,
            },
            CardField::HolderName => FieldProfile {
                max_len: 100,
                advance_len: None,
                advances_on_submit: true,
            },
            CardField::Expiration => FieldProfile {
                max_len: 5,
                advance_len: Some(5),
                advances_on_submit: false,
            },
            CardField::Cvv => FieldProfile {
                max_len: brand.cvv_len,
                advance_len: Some(brand.cvv_len),
                advances_on_submit: false,
            },
            CardField::ZipCode => FieldProfile {
                max_len: 10,
                advance_len: None,
                advances_on_submit: true,
            },
        }
    }
}

impl Display for CardField {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct FieldProfile {
    /// Maximum display length accepted for the field.
    pub max_len: usize,
    /// Display length at which the field validates and auto-advances.
    pub advance_len: Option<usize>,
    /// Whether an explicit submit (return key / next button) advances.
    pub advances_on_submit: bool,
}
