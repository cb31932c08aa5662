//! Field validity checks.
//!
//! [`CardValidator`] is the seam towards the validation collaborator: every
//! check answers with a plain [`Validity`] verdict and never raises. Hosts
//! may plug in their own implementation; [`BuiltinValidator`] covers the
//! stock rules (Luhn checksum, calendar expiry, character sets).

use chrono::{Datelike, NaiveDate, Utc};

use crate::brand;

/// Verdict of a single validity check.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Validity {
    pub is_valid: bool,
}

impl Validity {
    pub const VALID: Self = Self { is_valid: true };
    pub const INVALID: Self = Self { is_valid: false };

    pub const fn of(is_valid: bool) -> Self {
        Self { is_valid }
    }
}

pub trait CardValidator: Send + Sync {
    fn card_number(&self, value: &str) -> Validity;
    fn holder_name(&self, value: &str) -> Validity;
    fn expiration(&self, value: &str) -> Validity;
    fn cvv(&self, value: &str, expected_len: usize) -> Validity;
    fn zip_code(&self, value: &str) -> Validity;
}

/// Stock validator. The reference date used for expiry checks defaults to
/// the current day and is injectable for tests.
#[derive(Clone, Copy, Debug, Default)]
pub struct BuiltinValidator {
    reference_date: Option<NaiveDate>,
}

impl BuiltinValidator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_reference_date(date: NaiveDate) -> Self {
        Self {
            reference_date: Some(date),
        }
    }

    fn today(&self) -> NaiveDate {
        self.reference_date
            .unwrap_or_else(|| Utc::now().date_naive())
    }
}

impl CardValidator for BuiltinValidator {
    fn card_number(&self, value: &str) -> Validity {
        let digits: String = value.chars().filter(char::is_ascii_digit).collect();
        let stripped_len = value.chars().filter(|ch| *ch != ' ').count();
        if digits.len() != stripped_len {
            // Something other than digits and group separators was entered.
            return Validity::INVALID;
        }
        let profile = brand::resolve(&digits);
        let length_ok = if profile.brand == brand::CardBrand::Unknown {
            (12..=19).contains(&digits.len())
        } else {
            digits.len() == profile.digit_len
        };
        Validity::of(length_ok && brand::luhn_valid(&digits))
    }

    fn holder_name(&self, value: &str) -> Validity {
        let trimmed = value.trim();
        let looks_like_a_number = trimmed
            .chars()
            .all(|ch| ch.is_ascii_digit() || ch.is_whitespace());
        Validity::of(!trimmed.is_empty() && trimmed.chars().count() <= 255 && !looks_like_a_number)
    }

    fn expiration(&self, value: &str) -> Validity {
        let Some((month_part, year_part)) = value.split_once('/') else {
            return Validity::INVALID;
        };
        let (Ok(month), Ok(year)) = (month_part.parse::<u32>(), year_part.parse::<i32>()) else {
            return Validity::INVALID;
        };
        if month_part.len() != 2 || year_part.len() != 2 || !(1..=12).contains(&month) {
            return Validity::INVALID;
        }
        let today = self.today();
        let full_year = 2000 + year;
        // The card stays valid through the end of its expiry month.
        Validity::of((full_year, month) >= (today.year(), today.month()))
    }

    fn cvv(&self, value: &str, expected_len: usize) -> Validity {
        Validity::of(value.len() == expected_len && value.chars().all(|ch| ch.is_ascii_digit()))
    }

    fn zip_code(&self, value: &str) -> Validity {
        let len = value.chars().count();
        let charset_ok = value
            .chars()
            .all(|ch| ch.is_ascii_alphanumeric() || ch == ' ' || ch == '-');
        Validity::of((2..=10).contains(&len) && charset_ok)
    }
}
