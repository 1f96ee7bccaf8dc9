//! Brazilian phone number validation and display formatting.

use thiserror::Error;

use crate::core::extract_digits;

/// Error returned when a phone number fails validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum PhoneError {
    /// Not 10 (landline) or 11 (mobile) digits.
    #[error("phone must have 10 or 11 digits, got {0}")]
    WrongLength(usize),

    /// Area codes never start with 0.
    #[error("phone must not start with 0")]
    LeadingZero,

    /// 11-digit numbers are mobiles and carry a 9 after the area code.
    #[error("mobile numbers must have 9 as the third digit")]
    MissingMobileNine,

    /// The two-digit area code (DDD) is not assigned.
    #[error("unknown area code '{0}'")]
    UnknownAreaCode(String),
}

/// Validate a Brazilian phone number and return its bare digits.
///
/// Accepts punctuation and an optional `+55` country prefix. The result has
/// 10 digits (landline) or 11 digits (mobile), area code first.
pub fn validate_phone(phone: &str) -> Result<String, PhoneError> {
    let mut digits = extract_digits(phone);
    if phone.trim_start().starts_with("+55") {
        digits.drain(..2);
    }

    if !(10..=11).contains(&digits.len()) {
        return Err(PhoneError::WrongLength(digits.len()));
    }
    if digits.starts_with('0') {
        return Err(PhoneError::LeadingZero);
    }
    if digits.len() == 11 && digits.as_bytes()[2] != b'9' {
        return Err(PhoneError::MissingMobileNine);
    }

    let area_code = &digits[..2];
    if !is_known_area_code(area_code) {
        return Err(PhoneError::UnknownAreaCode(area_code.into()));
    }

    Ok(digits)
}

/// Format a phone number for display: `(11) 98765-4321` or `(11) 3456-7890`.
///
/// Inputs with neither 10 nor 11 digits are returned as bare digits.
pub fn format_phone(phone: &str) -> String {
    let d = extract_digits(phone);
    match d.len() {
        11 => format!("({}) {}-{}", &d[..2], &d[2..7], &d[7..]),
        10 => format!("({}) {}-{}", &d[..2], &d[2..6], &d[6..]),
        _ => d,
    }
}

/// Check whether `code` is an assigned two-digit area code (DDD).
pub fn is_known_area_code(code: &str) -> bool {
    AREA_CODES.binary_search(&code).is_ok()
}

/// ANATEL area codes (67 entries). Sorted for binary search.
static AREA_CODES: &[&str] = &[
    "11", "12", "13", "14", "15", "16", "17", "18", "19", // SP
    "21", "22", "24", // RJ
    "27", "28", // ES
    "31", "32", "33", "34", "35", "37", "38", // MG
    "41", "42", "43", "44", "45", "46", // PR
    "47", "48", "49", // SC
    "51", "53", "54", "55", // RS
    "61", // DF
    "62", // GO
    "63", // TO
    "64", // GO
    "65", "66", // MT
    "67", // MS
    "68", // AC
    "69", // RO
    "71", "73", "74", "75", "77", // BA
    "79", // SE
    "81", // PE
    "82", // AL
    "83", // PB
    "84", // RN
    "85", // CE
    "86", // PI
    "87", // PE
    "88", // CE
    "89", // PI
    "91", // PA
    "92", // AM
    "93", "94", // PA
    "95", // RR
    "96", // AP
    "97", // AM
    "98", "99", // MA
];
