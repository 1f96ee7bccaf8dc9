//! CPF/CNPJ validation: digit extraction, check digits, formatting.
//!
//! The pipeline is pure and stateless, safe to call from any thread.
//! [`validate_fiscal_id`] is the facade; [`Cpf`], [`Cnpj`], and
//! [`FiscalId`] are the typed equivalents that keep the rejection reason.

pub mod checksum;
mod digits;
mod error;
mod format;
mod types;
mod validation;

pub use checksum::{
    CNPJ_LEN, CPF_LEN, cnpj_check_digits, cpf_check_digits, is_valid_cnpj_checksum,
    is_valid_cpf_checksum,
};
pub use digits::{extract_digits, is_repeated_sequence};
pub use error::*;
pub use format::*;
pub use types::*;
pub use validation::{
    FiscalIdKind, ValidationResult, validate_cnpj, validate_cpf, validate_fiscal_id,
};
