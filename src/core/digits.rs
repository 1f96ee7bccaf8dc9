//! Input normalization: digit extraction and repeated-sequence detection.

/// Strip everything except ASCII `0`-`9`, preserving order.
///
/// Dots, dashes, slashes, and spaces typed by users all disappear, as do
/// letters and non-ASCII digits. Never fails: `""` yields `""`.
pub fn extract_digits(raw: &str) -> String {
    raw.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Whether every character of `digits` is the same (e.g. `"11111111111"`).
///
/// Such sequences satisfy the CPF checksum arithmetic and are the usual
/// placeholder input, so they are rejected before the checksum runs.
/// An empty string is not a sequence and returns `false`.
pub fn is_repeated_sequence(digits: &str) -> bool {
    let mut chars = digits.chars();
    match chars.next() {
        Some(first) => chars.all(|c| c == first),
        None => false,
    }
}

/// Convert a digit-only string into numeric values (0-9).
///
/// Returns `None` if any character is not an ASCII digit.
pub(crate) fn digit_values(digits: &str) -> Option<Vec<u8>> {
    digits
        .bytes()
        .map(|b| b.is_ascii_digit().then(|| b - b'0'))
        .collect()
}
