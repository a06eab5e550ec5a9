//! Phone number handling for contact details and OTP delivery.

use once_cell::sync::Lazy;
use regex::Regex;

static INDIAN_MOBILE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[6-9]\d{9}$").unwrap());
static UK_NUMBER: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(\+44|0)?[1-9]\d{8,10}$").unwrap());
static INTL_44: Lazy<Regex> = Lazy::new(|| Regex::new(r"(\d{2})(\d{4})(\d{3})(\d{3})").unwrap());
static TRUNK_0: Lazy<Regex> = Lazy::new(|| Regex::new(r"(\d{1})(\d{4})(\d{3})(\d{3})").unwrap());
static LOCAL: Lazy<Regex> = Lazy::new(|| Regex::new(r"(\d{4})(\d{3})(\d{3})").unwrap());

fn strip_whitespace(raw: &str) -> String {
    raw.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Converts user input into the `+`-prefixed form the verification provider expects.
///
/// A leading trunk `0` is replaced with `default_country_code`. Numbers that
/// look Indian (`91...` or a bare 10-digit mobile starting 6-9) get `+91`.
pub fn to_e164(raw: &str, default_country_code: &str) -> String {
    let phone = strip_whitespace(raw);
    if phone.starts_with('+') {
        phone
    } else if let Some(rest) = phone.strip_prefix('0') {
        format!("{}{}", default_country_code, rest)
    } else if phone.starts_with("91") {
        format!("+{}", phone)
    } else if INDIAN_MOBILE.is_match(&phone) {
        format!("+91{}", phone)
    } else {
        format!("+{}", phone)
    }
}

/// Groups digits for display. Input longer than 11 digits is returned untouched.
pub fn format_for_display(raw: &str) -> String {
    let cleaned: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();
    if cleaned.len() > 11 {
        return raw.to_string();
    }
    let formatted = if cleaned.starts_with("44") {
        INTL_44.replacen(&cleaned, 1, "+${1} ${2} ${3} ${4}")
    } else if cleaned.starts_with('0') {
        TRUNK_0.replacen(&cleaned, 1, "${1}${2} ${3} ${4}")
    } else {
        LOCAL.replacen(&cleaned, 1, "${1} ${2} ${3}")
    };
    formatted.into_owned()
}

/// Basic UK number check, whitespace ignored.
pub fn is_valid_uk(raw: &str) -> bool {
    UK_NUMBER.is_match(&strip_whitespace(raw))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn e164_conversion_table() {
        let cases = [
            ("+44 7700 900123", "+447700900123"),
            ("07700 900123", "+447700900123"),
            ("919876543210", "+919876543210"),
            ("9876543210", "+919876543210"),
            ("447700900123", "+447700900123"),
            ("12025550123", "+12025550123"),
        ];
        for (input, expected) in cases {
            assert_eq!(to_e164(input, "+44"), expected, "input {input}");
        }
    }

    #[test]
    fn e164_uses_configured_default_country() {
        assert_eq!(to_e164("0612345678", "+33"), "+33612345678");
    }

    #[test]
    fn display_formats_trunk_numbers() {
        assert_eq!(format_for_display("07700900123"), "07700 900 123");
        assert_eq!(format_for_display("0 7700-900-123"), "07700 900 123");
    }

    #[test]
    fn display_formats_short_local_numbers() {
        assert_eq!(format_for_display("7700900123"), "7700 900 123");
    }

    #[test]
    fn display_leaves_unmatched_digits_cleaned() {
        // 11 digits starting 44 cannot fill the +44 pattern
        assert_eq!(format_for_display("44770090012"), "44770090012");
        assert_eq!(format_for_display("0770"), "0770");
    }

    #[test]
    fn display_returns_long_input_unchanged() {
        assert_eq!(format_for_display("+44 7700 900 1234"), "+44 7700 900 1234");
    }

    #[test]
    fn uk_validation() {
        assert!(is_valid_uk("07700 900123"));
        assert!(is_valid_uk("+447700900123"));
        assert!(is_valid_uk("7700900123"));
        assert!(!is_valid_uk("00123"));
        assert!(!is_valid_uk("+33612345678"));
        assert!(!is_valid_uk("not a number"));
    }
}
