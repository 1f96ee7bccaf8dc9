//! Canonical display formats for CPF and CNPJ.

use super::checksum::{CNPJ_LEN, CPF_LEN};
use super::digits::extract_digits;

/// Format a CPF as `###.###.###-##`.
///
/// Punctuation in the input is ignored. If the input does not contain
/// exactly 11 digits, the extracted digits are returned unformatted.
pub fn format_cpf(cpf: &str) -> String {
    let d = extract_digits(cpf);
    if d.len() != CPF_LEN {
        return d;
    }
    format!("{}.{}.{}-{}", &d[..3], &d[3..6], &d[6..9], &d[9..])
}

/// Format a CNPJ as `##.###.###/####-##`.
///
/// Punctuation in the input is ignored. If the input does not contain
/// exactly 14 digits, the extracted digits are returned unformatted.
pub fn format_cnpj(cnpj: &str) -> String {
    let d = extract_digits(cnpj);
    if d.len() != CNPJ_LEN {
        return d;
    }
    format!(
        "{}.{}.{}/{}-{}",
        &d[..2],
        &d[2..5],
        &d[5..8],
        &d[8..12],
        &d[12..]
    )
}

/// Mask a CPF for receipts and logs: `***.444.777-**`.
///
/// Only the middle six digits stay visible. Inputs without 11 digits are
/// fully masked.
pub fn mask_cpf(cpf: &str) -> String {
    let d = extract_digits(cpf);
    if d.len() != CPF_LEN {
        return "***.***.***-**".into();
    }
    format!("***.{}.{}-**", &d[3..6], &d[6..9])
}
