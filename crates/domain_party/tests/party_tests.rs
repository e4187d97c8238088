//! Policy Holder Tests
//!
//! Integration-level tests for holder construction, normalization, and the
//! province code set.

use domain_party::{PolicyHolder, Province};

fn build_holder(first: &str, last: &str, postal: &str) -> PolicyHolder {
    PolicyHolder::new(
        first,
        last,
        "one stop lane",
        "corner brook",
        Province::NewfoundlandAndLabrador,
        postal,
        "7095550000",
    )
    .expect("holder should validate")
}

#[test]
fn holder_round_trips_legacy_intake_answers() {
    let holder = build_holder("mary-jane", "o'connor", "a1c5x2");

    assert_eq!(holder.full_name(), "Mary-Jane O'Connor");
    assert_eq!(holder.city, "Corner Brook");
    assert_eq!(holder.address, "One Stop Lane");
    assert_eq!(holder.postal_code, "A1C 5X2");
    assert_eq!(holder.province.code(), "NL");
}

#[test]
fn holder_accepts_already_formatted_postal_code() {
    let holder = build_holder("Ann", "Lee", "A1B 2C3");
    assert_eq!(holder.postal_code, "A1B 2C3");
}

#[test]
fn holder_rejects_digits_in_name() {
    let result = PolicyHolder::new(
        "J0hn",
        "Smith",
        "Main Street",
        "Gander",
        Province::NewfoundlandAndLabrador,
        "A1B 2C3",
        "7095551234",
    );
    assert!(result.is_err());
}

#[test]
fn holder_rejects_empty_city() {
    let result = PolicyHolder::new(
        "John",
        "Smith",
        "Main Street",
        "",
        Province::NewfoundlandAndLabrador,
        "A1B 2C3",
        "7095551234",
    );
    assert!(result.is_err());
}

#[test]
fn province_set_is_exactly_thirteen_codes() {
    let codes: Vec<&str> = Province::ALL.iter().map(|p| p.code()).collect();
    assert_eq!(
        codes,
        vec!["AB", "BC", "MB", "NB", "NL", "NS", "NT", "NU", "ON", "PE", "QC", "SK", "YT"]
    );
}
