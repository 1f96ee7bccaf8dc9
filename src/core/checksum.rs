//! Modulo-11 check digits for CPF and CNPJ.
//!
//! Both identifiers end in two check digits computed from the preceding
//! digits with a weighted sum modulo 11. The second check digit covers the
//! first one. All arithmetic is exact integer arithmetic.
//!
//! The `is_valid_*_checksum` functions expect a digit-only string of the
//! right length; route by length first (see [`validate_fiscal_id`]).
//!
//! [`validate_fiscal_id`]: super::validate_fiscal_id

use super::digits::digit_values;

/// Number of digits in a CPF.
pub const CPF_LEN: usize = 11;

/// Number of digits in a CNPJ.
pub const CNPJ_LEN: usize = 14;

/// CNPJ weights for the 13th digit, applied to the 12 base digits.
pub const CNPJ_WEIGHTS_FIRST: [u32; 12] = [5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];

/// CNPJ weights for the 14th digit, applied to the base plus the 13th digit.
pub const CNPJ_WEIGHTS_SECOND: [u32; 13] = [6, 5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];

/// CPF check digit over `digits` (9 or 10 values).
///
/// Weights run from `len + 1` down to 2. The result is
/// `(sum * 10) mod 11`, where 10 maps to 0.
fn cpf_digit(digits: &[u8]) -> u8 {
    let top = digits.len() as u32 + 1;
    let sum: u32 = digits
        .iter()
        .enumerate()
        .map(|(i, &d)| u32::from(d) * (top - i as u32))
        .sum();
    match (sum * 10) % 11 {
        10 => 0,
        d => d as u8,
    }
}

/// CNPJ check digit: remainder below 2 gives 0, otherwise `11 - remainder`.
fn cnpj_digit(digits: &[u8], weights: &[u32]) -> u8 {
    let sum: u32 = digits
        .iter()
        .zip(weights)
        .map(|(&d, &w)| u32::from(d) * w)
        .sum();
    match sum % 11 {
        r if r < 2 => 0,
        r => (11 - r) as u8,
    }
}

/// Compute the two CPF check digits for a 9-digit base.
///
/// Every element of `base` must be in `0..=9`.
pub fn cpf_check_digits(base: &[u8; 9]) -> [u8; 2] {
    let first = cpf_digit(base);
    let mut extended = [0u8; 10];
    extended[..9].copy_from_slice(base);
    extended[9] = first;
    [first, cpf_digit(&extended)]
}

/// Compute the two CNPJ check digits for a 12-digit base.
///
/// Every element of `base` must be in `0..=9`.
pub fn cnpj_check_digits(base: &[u8; 12]) -> [u8; 2] {
    let first = cnpj_digit(base, &CNPJ_WEIGHTS_FIRST);
    let mut extended = [0u8; 13];
    extended[..12].copy_from_slice(base);
    extended[12] = first;
    [first, cnpj_digit(&extended, &CNPJ_WEIGHTS_SECOND)]
}

/// Check the trailing two digits of an 11-digit CPF string.
///
/// Calling this with anything other than 11 ASCII digits is a caller bug:
/// it asserts in debug builds and returns `false` in release builds.
pub fn is_valid_cpf_checksum(digits: &str) -> bool {
    debug_assert!(
        digits.len() == CPF_LEN && digits.bytes().all(|b| b.is_ascii_digit()),
        "CPF checksum requires exactly {CPF_LEN} digits, got {digits:?}"
    );
    let Some(values) = digit_values(digits) else {
        return false;
    };
    let Ok(base) = <[u8; 9]>::try_from(values.get(..9).unwrap_or_default()) else {
        return false;
    };
    values.len() == CPF_LEN && values[9..] == cpf_check_digits(&base)
}

/// Check the trailing two digits of a 14-digit CNPJ string.
///
/// Calling this with anything other than 14 ASCII digits is a caller bug:
/// it asserts in debug builds and returns `false` in release builds.
pub fn is_valid_cnpj_checksum(digits: &str) -> bool {
    debug_assert!(
        digits.len() == CNPJ_LEN && digits.bytes().all(|b| b.is_ascii_digit()),
        "CNPJ checksum requires exactly {CNPJ_LEN} digits, got {digits:?}"
    );
    let Some(values) = digit_values(digits) else {
        return false;
    };
    let Ok(base) = <[u8; 12]>::try_from(values.get(..12).unwrap_or_default()) else {
        return false;
    };
    values.len() == CNPJ_LEN && values[12..] == cnpj_check_digits(&base)
}
