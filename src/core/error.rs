use thiserror::Error;

use super::validation::FiscalIdKind;

/// Why a string was rejected as a CPF or CNPJ.
///
/// Returned by the typed parsers ([`Cpf`](super::Cpf), [`Cnpj`](super::Cnpj),
/// [`FiscalId`](super::FiscalId)). The [`validate_fiscal_id`](super::validate_fiscal_id)
/// facade collapses all of these into [`FiscalIdKind::Invalid`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum FiscalIdError {
    /// The input did not contain the expected number of digits.
    #[error("expected {expected} digits, found {found}")]
    WrongLength {
        /// Accepted digit count(s), e.g. "11" or "11 or 14".
        expected: &'static str,
        /// Number of digits actually present after stripping punctuation.
        found: usize,
    },

    /// All digits are identical (e.g. "000.000.000-00").
    #[error("all digits are identical")]
    RepeatedDigits,

    /// The trailing check digits do not match the computed ones.
    #[error("{kind} check digits do not match")]
    ChecksumMismatch {
        /// Which identifier the length routed to.
        kind: FiscalIdKind,
    },
}
