//! The `validate_fiscal_id` facade.
//!
//! Runs the pipeline: extract digits, route by length, reject repeated
//! sequences, check digits, format. Malformed input is an ordinary
//! [`FiscalIdKind::Invalid`] result, never an error or a panic.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::checksum::{CNPJ_LEN, CPF_LEN, is_valid_cnpj_checksum, is_valid_cpf_checksum};
use super::digits::{extract_digits, is_repeated_sequence};
use super::error::FiscalIdError;
use super::format::{format_cnpj, format_cpf};

/// Classification of a fiscal identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum FiscalIdKind {
    /// Individual taxpayer number (Cadastro de Pessoas Físicas), 11 digits.
    Cpf,
    /// Company registry number (Cadastro Nacional da Pessoa Jurídica), 14 digits.
    Cnpj,
    /// Wrong length, repeated digits, or failed check digits.
    Invalid,
}

impl FiscalIdKind {
    /// Short uppercase label ("CPF", "CNPJ", "INVALID").
    pub fn label(&self) -> &'static str {
        match self {
            Self::Cpf => "CPF",
            Self::Cnpj => "CNPJ",
            Self::Invalid => "INVALID",
        }
    }
}

impl fmt::Display for FiscalIdKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Outcome of [`validate_fiscal_id`].
///
/// `canonical` is `Some` exactly when `kind` is not [`FiscalIdKind::Invalid`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ValidationResult {
    /// What the input turned out to be.
    pub kind: FiscalIdKind,
    /// Canonically formatted identifier (`###.###.###-##` or `##.###.###/####-##`).
    pub canonical: Option<String>,
}

impl ValidationResult {
    /// The result for anything that is not a valid CPF or CNPJ.
    pub fn invalid() -> Self {
        Self {
            kind: FiscalIdKind::Invalid,
            canonical: None,
        }
    }

    fn valid(kind: FiscalIdKind, digits: &str) -> Self {
        let canonical = match kind {
            FiscalIdKind::Cpf => format_cpf(digits),
            FiscalIdKind::Cnpj => format_cnpj(digits),
            FiscalIdKind::Invalid => return Self::invalid(),
        };
        Self {
            kind,
            canonical: Some(canonical),
        }
    }

    /// Whether the input was a valid CPF or CNPJ.
    pub fn is_valid(&self) -> bool {
        self.kind != FiscalIdKind::Invalid
    }

    /// The canonical string, if valid.
    pub fn canonical(&self) -> Option<&str> {
        self.canonical.as_deref()
    }
}

/// Classify a digit-only string, keeping the rejection reason.
///
/// Shared by the facade and the typed parsers so both always agree.
pub(crate) fn classify_digits(digits: &str) -> Result<FiscalIdKind, FiscalIdError> {
    let kind = match digits.len() {
        CPF_LEN => FiscalIdKind::Cpf,
        CNPJ_LEN => FiscalIdKind::Cnpj,
        found => {
            return Err(FiscalIdError::WrongLength {
                expected: "11 or 14",
                found,
            });
        }
    };

    if is_repeated_sequence(digits) {
        return Err(FiscalIdError::RepeatedDigits);
    }

    let checksum_ok = match kind {
        FiscalIdKind::Cpf => is_valid_cpf_checksum(digits),
        _ => is_valid_cnpj_checksum(digits),
    };
    if checksum_ok {
        Ok(kind)
    } else {
        Err(FiscalIdError::ChecksumMismatch { kind })
    }
}

/// Validate a CPF or CNPJ typed by a user.
///
/// Punctuation is ignored. Returns the identifier kind and its canonical
/// form, or [`FiscalIdKind::Invalid`] for wrong length, repeated digits,
/// or a check-digit mismatch (not distinguished).
///
/// ```
/// use cadastro::core::{FiscalIdKind, validate_fiscal_id};
///
/// let r = validate_fiscal_id("11.222.333/0001-81");
/// assert_eq!(r.kind, FiscalIdKind::Cnpj);
/// assert_eq!(r.canonical(), Some("11.222.333/0001-81"));
/// assert!(!validate_fiscal_id("12345678900").is_valid());
/// ```
pub fn validate_fiscal_id(raw: &str) -> ValidationResult {
    let digits = extract_digits(raw);
    match classify_digits(&digits) {
        Ok(kind) => ValidationResult::valid(kind, &digits),
        Err(reason) => {
            log::debug!("fiscal id rejected ({} digits): {reason}", digits.len());
            ValidationResult::invalid()
        }
    }
}

/// Whether `raw` is a valid CPF (punctuation ignored).
pub fn validate_cpf(raw: &str) -> bool {
    validate_fiscal_id(raw).kind == FiscalIdKind::Cpf
}

/// Whether `raw` is a valid CNPJ (punctuation ignored).
pub fn validate_cnpj(raw: &str) -> bool {
    validate_fiscal_id(raw).kind == FiscalIdKind::Cnpj
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cpf_fixture() {
        let r = validate_fiscal_id("111.444.777-35");
        assert_eq!(r.kind, FiscalIdKind::Cpf);
        assert_eq!(r.canonical(), Some("111.444.777-35"));
    }

    #[test]
    fn cnpj_fixture() {
        let r = validate_fiscal_id("11.222.333/0001-81");
        assert_eq!(r.kind, FiscalIdKind::Cnpj);
        assert_eq!(r.canonical(), Some("11.222.333/0001-81"));
    }

    #[test]
    fn repeated_rejected() {
        assert_eq!(
            validate_fiscal_id("00000000000"),
            ValidationResult::invalid()
        );
        assert_eq!(
            validate_fiscal_id("111.111.111-11"),
            ValidationResult::invalid()
        );
        assert_eq!(
            validate_fiscal_id("00000000000000"),
            ValidationResult::invalid()
        );
    }

    #[test]
    fn checksum_failure() {
        assert!(!validate_fiscal_id("12345678900").is_valid());
    }

    #[test]
    fn empty_and_wrong_lengths() {
        assert!(!validate_fiscal_id("").is_valid());
        assert!(!validate_fiscal_id("1234567890").is_valid());
        assert!(!validate_fiscal_id("123456789012").is_valid());
        assert!(!validate_fiscal_id("1234567890123").is_valid());
    }

    #[test]
    fn punctuation_tolerance() {
        assert_eq!(
            validate_fiscal_id("746.824.890-70"),
            validate_fiscal_id("74682489070")
        );
    }

    #[test]
    fn invalid_has_no_canonical() {
        let r = validate_fiscal_id("abc");
        assert_eq!(r.kind, FiscalIdKind::Invalid);
        assert_eq!(r.canonical(), None);
    }

    #[test]
    fn single_kind_predicates() {
        assert!(validate_cpf("111.444.777-35"));
        assert!(!validate_cpf("11.222.333/0001-81"));
        assert!(validate_cnpj("11.222.333/0001-81"));
        assert!(!validate_cnpj("111.444.777-35"));
    }

    #[test]
    fn classify_reasons() {
        assert_eq!(
            classify_digits("123"),
            Err(FiscalIdError::WrongLength {
                expected: "11 or 14",
                found: 3
            })
        );
        assert_eq!(
            classify_digits("22222222222"),
            Err(FiscalIdError::RepeatedDigits)
        );
        assert_eq!(
            classify_digits("12345678900"),
            Err(FiscalIdError::ChecksumMismatch {
                kind: FiscalIdKind::Cpf
            })
        );
        assert_eq!(classify_digits("11222333000181"), Ok(FiscalIdKind::Cnpj));
    }

    #[test]
    fn kind_display() {
        assert_eq!(FiscalIdKind::Cpf.to_string(), "CPF");
        assert_eq!(FiscalIdKind::Cnpj.to_string(), "CNPJ");
        assert_eq!(FiscalIdKind::Invalid.to_string(), "INVALID");
    }
}
