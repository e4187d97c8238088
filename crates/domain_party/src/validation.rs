//! Pure field validators for intake input
//!
//! Every function here is a predicate or normalizer with no side effects.
//! The session loop in the interface crate decides what to do with a
//! rejection (in practice: print the legacy retry message and ask again).
//!
//! # Rules
//!
//! - Name, address, and city fields: non-empty, drawn from the letter /
//!   space / hyphen / apostrophe alphabet
//! - Postal code: normalized to `X#X #X#`, then checked positionally
//! - Phone number: exactly ten ASCII digits

/// Returns true if the character is allowed in a name-like field
fn is_allowed_name_char(c: char) -> bool {
    c.is_ascii_alphabetic() || matches!(c, ' ' | '-' | '\'')
}

/// Validates a free-text name-like field (first name, last name, address,
/// city): non-empty and restricted to the allowed alphabet
pub fn validate_name_field(text: &str) -> bool {
    !text.is_empty() && text.chars().all(is_allowed_name_char)
}

/// Normalizes a raw postal code toward `X#X #X#`
///
/// Strips every space and upper-cases; if exactly six characters remain, a
/// single space is inserted after the third. Anything else is returned
/// compacted and upper-cased, unchanged in length, for the validator to
/// reject.
pub fn format_postal_code(raw: &str) -> String {
    let compact: Vec<char> = raw
        .chars()
        .filter(|c| *c != ' ')
        .flat_map(char::to_uppercase)
        .collect();

    if compact.len() == 6 {
        let mut formatted = String::with_capacity(7);
        formatted.extend(&compact[..3]);
        formatted.push(' ');
        formatted.extend(&compact[3..]);
        formatted
    } else {
        compact.into_iter().collect()
    }
}

/// Validates a normalized postal code
///
/// Requires exactly seven characters with letters at positions 0, 2, 5 and
/// digits at positions 1, 4, 6. Position 3 is left to the formatter.
pub fn validate_postal_code(code: &str) -> bool {
    let chars: Vec<char> = code.chars().collect();
    if chars.len() != 7 {
        return false;
    }
    chars[0].is_ascii_alphabetic()
        && chars[1].is_ascii_digit()
        && chars[2].is_ascii_alphabetic()
        && chars[4].is_ascii_digit()
        && chars[5].is_ascii_alphabetic()
        && chars[6].is_ascii_digit()
}

/// Validates a phone number: exactly ten ASCII digits, nothing else
pub fn validate_phone_number(text: &str) -> bool {
    text.chars().count() == 10 && text.chars().all(|c| c.is_ascii_digit())
}

/// Title-cases a free-text field the way the intake form displays it
///
/// The first letter of every alphabetic run is upper-cased and the rest
/// lower-cased, so `o'neil` becomes `O'Neil` and `ST JOHN'S` becomes
/// `St John'S` (matching the legacy receipts).
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut prev_alphabetic = false;
    for c in text.chars() {
        if c.is_alphabetic() {
            if prev_alphabetic {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_alphabetic = true;
        } else {
            out.push(c);
            prev_alphabetic = false;
        }
    }
    out
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn formatted_postal_code_has_no_internal_spaces_unless_inserted(raw in "\\PC*") {
            let formatted = format_postal_code(&raw);
            let spaces = formatted.chars().filter(|c| *c == ' ').count();
            // The formatter strips every space and inserts at most one.
            prop_assert!(spaces <= 1);
            if spaces == 1 {
                prop_assert_eq!(formatted.chars().count(), 7);
                prop_assert_eq!(formatted.chars().nth(3), Some(' '));
            }
        }

        #[test]
        fn valid_postal_codes_are_always_seven_chars(code in "\\PC*") {
            if validate_postal_code(&code) {
                prop_assert_eq!(code.chars().count(), 7);
            }
        }
    }
}
