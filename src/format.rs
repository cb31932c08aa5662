//! Pure keystroke formatters.
//!
//! Each formatter takes the previously displayed value together with the new
//! input and returns the next display value. They are stateless and
//! idempotent on already-formatted input.

use crate::brand::BrandProfile;
use crate::fields::CardField;

/// Formats the raw input of `field` into its display value.
pub fn format_field(
    field: CardField,
    brand: BrandProfile,
    previous: &str,
    input: &str,
) -> String {
    match field {
        CardField::CardNumber => format_card_number(previous, input, brand.digit_len),
        CardField::Expiration => format_expiration(previous, input),
        CardField::Cvv | CardField::HolderName | CardField::ZipCode => {
            clip(input, field.profile(brand).max_len)
        }
    }
}

/// Groups card-number digits by four with a single space separator and no
/// trailing separator, truncated to `max_digits`.
pub fn format_card_number(previous: &str, input: &str, max_digits: usize) -> String {
    let mut digits = digits_of(input);
    delete_through_separator(previous, input, &mut digits);
    digits.truncate(max_digits);
    group_by_four(&digits)
}

/// Formats expiration input as `MM/YY`, inserting the slash after the second
/// digit and truncating to four digits.
pub fn format_expiration(previous: &str, input: &str) -> String {
    let mut digits = digits_of(input);
    delete_through_separator(previous, input, &mut digits);
    digits.truncate(4);
    if digits.len() >= 2 {
        format!("{}/{}", &digits[..2], &digits[2..])
    } else {
        digits
    }
}

/// When a backspace removed only an auto-inserted separator the digit string
/// is unchanged; dropping the digit before the separator deletes through it
/// so the cursor never gets stuck. Detected by comparing the new input length
/// against the previous display and its digit string.
fn delete_through_separator(previous: &str, input: &str, digits: &mut String) {
    if input.len() < previous.len() && *digits == digits_of(previous) {
        digits.pop();
    }
}

fn digits_of(value: &str) -> String {
    value.chars().filter(char::is_ascii_digit).collect()
}

fn group_by_four(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 4);
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && index % 4 == 0 {
            out.push(' ');
        }
        out.push(ch);
    }
    out
}

fn clip(value: &str, max_len: usize) -> String {
    value.chars().take(max_len).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::brand::{BrandProfile, CardBrand};

    #[test]
    fn card_number_grouping_inserts_a_separator_every_four_digits() {
        for len in 0..=19usize {
            let raw: String = "4111111111111111111".chars().take(len).collect();
            let formatted = format_card_number("", &raw, 19);
            let separators = formatted.chars().filter(|ch| *ch == ' ').count();
            assert_eq!(separators, len.div_ceil(4).saturating_sub(1), "len {len}");
            assert_eq!(
                formatted.chars().filter(char::is_ascii_digit).count(),
                len.min(19)
            );
        }
    }

    #[test]
    fn card_number_formatting_is_idempotent() {
        let once = format_card_number("", "4111111111111111", 16);
        assert_eq!(once, "4111 1111 1111 1111");
        let twice = format_card_number(&once, &once, 16);
        assert_eq!(twice, once);
    }

    #[test]
    fn card_number_truncates_to_brand_digit_count() {
        let amex = format_card_number("", "3782822463100051234", 15);
        assert_eq!(amex, "3782 8224 6310 005");
        assert_eq!(amex.len(), 18);
    }

    #[test]
    fn backspace_over_card_number_separator_deletes_through_it() {
        // Cursor right after the separator: backspace removes the separator
        // only, leaving the digit string unchanged, so the preceding digit
        // goes with it and the raw length still drops by one.
        let after_separator_delete = format_card_number("4111 1111", "41111111", 16);
        assert_eq!(after_separator_delete, "4111 111");

        // An ordinary trailing-digit backspace just reformats what is left.
        let plain_digit_delete = format_card_number("4111 1", "4111 ", 16);
        assert_eq!(plain_digit_delete, "4111");
        let tail_delete = format_card_number("4111", "411", 16);
        assert_eq!(tail_delete, "411");
    }

    #[test]
    fn expiration_inserts_slash_after_two_digits() {
        assert_eq!(format_expiration("", ""), "");
        assert_eq!(format_expiration("", "1"), "1");
        assert_eq!(format_expiration("1", "12"), "12/");
        assert_eq!(format_expiration("12/", "12/3"), "12/3");
        assert_eq!(format_expiration("12/3", "12/34"), "12/34");
    }

    #[test]
    fn expiration_never_exceeds_five_characters() {
        assert_eq!(format_expiration("", "123456789"), "12/34");
        for raw_len in 2..=9usize {
            let raw: String = "123456789".chars().take(raw_len).collect();
            let formatted = format_expiration("", &raw);
            assert!(formatted.len() <= 5);
            assert_eq!(formatted.chars().nth(2), Some('/'));
        }
    }

    #[test]
    fn backspace_over_expiration_slash_deletes_the_month_digit() {
        assert_eq!(format_expiration("12/", "12"), "1");
        assert_eq!(format_expiration("12/3", "12/"), "12/");
    }

    #[test]
    fn passthrough_fields_are_only_length_capped() {
        let visa = BrandProfile::of(CardBrand::Visa);
        assert_eq!(
            format_field(CardField::HolderName, visa, "", "Ada Lovelace"),
            "Ada Lovelace"
        );
        assert_eq!(format_field(CardField::Cvv, visa, "", "1234"), "123");
        let amex = BrandProfile::of(CardBrand::AmericanExpress);
        assert_eq!(format_field(CardField::Cvv, amex, "", "1234"), "1234");
        assert_eq!(
            format_field(CardField::ZipCode, visa, "", "12345-67890000"),
            "12345-6789"
        );
    }
}
