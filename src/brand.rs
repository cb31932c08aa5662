//! Card brand detection and the lengths derived from it.
//!
//! The brand is recomputed from the card-number digits on every change and
//! is never stored; it drives the CVV target length and the formatted
//! card-number target length.

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CardBrand {
    Visa,
    Mastercard,
    AmericanExpress,
    Discover,
    DinersClub,
    Jcb,
    UnionPay,
    Maestro,
    Unknown,
}

impl CardBrand {
    pub const fn label(self) -> &'static str {
        match self {
            CardBrand::Visa => "Visa",
            CardBrand::Mastercard => "Mastercard",
            CardBrand::AmericanExpress => "American Express",
            CardBrand::Discover => "Discover",
            CardBrand::DinersClub => "Diners Club",
            CardBrand::Jcb => "JCB",
            CardBrand::UnionPay => "UnionPay",
            CardBrand::Maestro => "Maestro",
            CardBrand::Unknown => "Unknown",
        }
    }
}

impl Display for CardBrand {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Brand plus the lengths the entry form derives from it.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct BrandProfile {
    pub brand: CardBrand,
    /// Target CVV length: 4 for American Express, 3 otherwise.
    pub cvv_len: usize,
    /// Raw digit count of a complete card number.
    pub digit_len: usize,
    /// Length of the complete *formatted* card number, separators included.
    pub display_len: usize,
}

impl BrandProfile {
    pub const fn of(brand: CardBrand) -> Self {
        match brand {
            CardBrand::AmericanExpress => Self {
                brand,
                cvv_len: 4,
                digit_len: 15,
                display_len: 18,
            },
            _ => Self {
                brand,
                cvv_len: 3,
                digit_len: 16,
                display_len: 19,
            },
        }
    }
}

/// Resolves the brand profile for a card-number value, formatted or raw.
pub fn resolve(card_number: &str) -> BrandProfile {
    let digits: String = card_number.chars().filter(char::is_ascii_digit).collect();
    BrandProfile::of(detect(&digits))
}

/// Issuer prefix table. Longer, more specific prefixes are tried first so a
/// short digit run stays `Unknown` until it becomes decisive.
fn detect(digits: &str) -> CardBrand {
    if digits.is_empty() {
        return CardBrand::Unknown;
    }
    if leading_in_range(digits, 4, 3528, 3589) {
        return CardBrand::Jcb;
    }
    if leading_in_range(digits, 4, 2221, 2720) || leading_in_range(digits, 2, 51, 55) {
        return CardBrand::Mastercard;
    }
    if has_prefix(digits, &["34", "37"]) {
        return CardBrand::AmericanExpress;
    }
    if has_prefix(digits, &["6011", "65"]) || leading_in_range(digits, 3, 644, 649) {
        return CardBrand::Discover;
    }
    if leading_in_range(digits, 3, 300, 305) || has_prefix(digits, &["36", "38", "39"]) {
        return CardBrand::DinersClub;
    }
    if has_prefix(digits, &["62"]) {
        return CardBrand::UnionPay;
    }
    // 493698 is Maestro carved out of the Visa leading-4 space.
    if has_prefix(digits, &["493698", "50", "63", "67"]) || leading_in_range(digits, 2, 56, 59) {
        return CardBrand::Maestro;
    }
    if digits.starts_with('4') {
        return CardBrand::Visa;
    }
    CardBrand::Unknown
}

fn has_prefix(digits: &str, prefixes: &[&str]) -> bool {
    prefixes.iter().any(|prefix| digits.starts_with(prefix))
}

fn leading_in_range(digits: &str, width: usize, low: u32, high: u32) -> bool {
    digits
        .get(..width)
        .and_then(|head| head.parse::<u32>().ok())
        .is_some_and(|value| (low..=high).contains(&value))
}

/// Luhn checksum over a raw digit string.
pub fn luhn_valid(digits: &str) -> bool {
    if digits.is_empty() || !digits.chars().all(|ch| ch.is_ascii_digit()) {
        return false;
    }
    let sum: u32 = digits
        .chars()
        .rev()
        .filter_map(|ch| ch.to_digit(10))
        .enumerate()
        .map(|(index, digit)| {
            if index % 2 == 1 {
                let doubled = digit * 2;
                if doubled > 9 { doubled - 9 } else { doubled }
            } else {
                digit
            }
        })
        .sum();
    sum % 10 == 0
}
