//! Pix key type detection and normalization.

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::core::{Cnpj, Cpf, FiscalIdError};

use super::phone::validate_phone;

/// Longest e-mail address accepted as a Pix key.
pub const MAX_EMAIL_KEY_LEN: usize = 77;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9-]+(\.[A-Za-z0-9-]+)*\.[A-Za-z]{2,}$")
        .expect("email regex")
});

/// The five kinds of Pix key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PixKeyType {
    /// 11 bare digits forming a valid CPF.
    Cpf,
    /// 14 bare digits forming a valid CNPJ.
    Cnpj,
    /// E-mail address of at most [`MAX_EMAIL_KEY_LEN`] characters.
    Email,
    /// Brazilian phone number, stored with the `+55` country code.
    Phone,
    /// Random key issued by the payment institution (a UUID).
    #[serde(rename = "EVP")]
    Random,
}

impl fmt::Display for PixKeyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Cpf => "CPF",
            Self::Cnpj => "CNPJ",
            Self::Email => "EMAIL",
            Self::Phone => "PHONE",
            Self::Random => "EVP",
        })
    }
}

/// A validated Pix key in normalized form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PixKey {
    /// Which rule matched.
    pub key_type: PixKeyType,
    /// CPF/CNPJ canonically formatted, e-mail and UUID lowercased,
    /// phone as `+55` followed by its digits.
    pub key: String,
}

/// Error returned when a string is not a usable Pix key.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum PixKeyError {
    /// Nothing left after trimming whitespace.
    #[error("Pix key is empty")]
    Empty,

    /// 11 bare digits are always read as a CPF.
    #[error("invalid CPF key: {0}")]
    InvalidCpf(#[source] FiscalIdError),

    /// 14 bare digits are always read as a CNPJ.
    #[error("invalid CNPJ key: {0}")]
    InvalidCnpj(#[source] FiscalIdError),

    /// Not a CPF, CNPJ, e-mail, phone or random key.
    #[error("unrecognized Pix key format")]
    Unrecognized,
}

/// Detect the type of a Pix key and normalize it.
///
/// Checked in order: 11 bare digits (CPF), 14 bare digits (CNPJ), e-mail,
/// Brazilian phone, random key (hyphenated UUID). A string of 11 or 14 bare
/// digits never falls through to the phone check, so a failing CPF or
/// CNPJ is reported as such.
pub fn validate_pix_key(raw: &str) -> Result<PixKey, PixKeyError> {
    let key = raw.trim();
    if key.is_empty() {
        return Err(PixKeyError::Empty);
    }

    let all_digits = key.bytes().all(|b| b.is_ascii_digit());
    let classified = if all_digits && key.len() == 11 {
        let cpf = Cpf::parse(key).map_err(PixKeyError::InvalidCpf)?;
        PixKey {
            key_type: PixKeyType::Cpf,
            key: cpf.to_string(),
        }
    } else if all_digits && key.len() == 14 {
        let cnpj = Cnpj::parse(key).map_err(PixKeyError::InvalidCnpj)?;
        PixKey {
            key_type: PixKeyType::Cnpj,
            key: cnpj.to_string(),
        }
    } else if is_email_key(key) {
        PixKey {
            key_type: PixKeyType::Email,
            key: key.to_lowercase(),
        }
    } else if let Some(digits) = phone_digits(key) {
        PixKey {
            key_type: PixKeyType::Phone,
            key: format!("+55{digits}"),
        }
    } else if let Some(uuid) = parse_random_key(key) {
        PixKey {
            key_type: PixKeyType::Random,
            key: uuid.hyphenated().to_string(),
        }
    } else {
        log::debug!("unrecognized Pix key ({} chars)", key.len());
        return Err(PixKeyError::Unrecognized);
    };

    log::debug!("Pix key classified as {}", classified.key_type);
    Ok(classified)
}

fn is_email_key(key: &str) -> bool {
    key.len() <= MAX_EMAIL_KEY_LEN && EMAIL_RE.is_match(key)
}

/// Phone keys may only contain digits and the usual separators.
fn phone_digits(key: &str) -> Option<String> {
    let phone_shaped = key
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, ' ' | '+' | '(' | ')' | '-'));
    if !phone_shaped {
        return None;
    }
    validate_phone(key).ok()
}

/// Only the 36-character hyphenated form counts as a random key.
fn parse_random_key(key: &str) -> Option<Uuid> {
    if key.len() != 36 {
        return None;
    }
    Uuid::try_parse(key).ok()
}
