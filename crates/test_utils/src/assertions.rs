//! Custom Test Assertions
//!
//! Format checks for the synthetic response fields, with messages that show
//! the offending value.

/// Asserts that `vin` has the 3+5+1+1+1+6 VIN layout
///
/// # Panics
///
/// Panics if the length or any segment alphabet is wrong
pub fn assert_vin_format(vin: &str) {
    let chars: Vec<char> = vin.chars().collect();
    assert_eq!(chars.len(), 17, "VIN must be 17 characters, got {:?}", vin);

    let alnum = |c: &char| c.is_ascii_uppercase() || c.is_ascii_digit();
    assert!(chars[..8].iter().all(alnum), "VIN prefix must be alphanumeric: {:?}", vin);
    assert!(chars[8].is_ascii_digit(), "VIN check digit must be a digit: {:?}", vin);
    assert!(chars[9].is_ascii_uppercase(), "VIN year code must be a letter: {:?}", vin);
    assert!(chars[10].is_ascii_uppercase(), "VIN plant code must be a letter: {:?}", vin);
    assert!(chars[11..].iter().all(char::is_ascii_digit), "VIN sequence must be digits: {:?}", vin);
}

/// Asserts that `license` is `License: XXXXX-ABCD-XXXXX` with four uppercase letters
pub fn assert_license_format(license: &str) {
    let middle = license
        .strip_prefix("License: XXXXX-")
        .and_then(|rest| rest.strip_suffix("-XXXXX"))
        .unwrap_or_else(|| panic!("License does not match template: {:?}", license));

    assert_eq!(middle.len(), 4, "License code must be 4 letters: {:?}", license);
    assert!(
        middle.chars().all(|c| c.is_ascii_uppercase()),
        "License code must be uppercase letters: {:?}",
        license
    );
}

/// Parses `"<int>g/km"` and asserts the integer lies in `low..=high`
///
/// Returns the parsed amount.
pub fn assert_co2_in_range(co2: &str, low: i64, high: i64) -> i64 {
    let grams: i64 = co2
        .strip_suffix("g/km")
        .and_then(|n| n.parse().ok())
        .unwrap_or_else(|| panic!("CO2 value is not '<int>g/km': {:?}", co2));

    assert!(
        (low..=high).contains(&grams),
        "CO2 {} outside expected range {}..={}",
        grams,
        low,
        high
    );
    grams
}
