use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::checksum::{CNPJ_LEN, CPF_LEN, cnpj_check_digits, cpf_check_digits};
use super::digits::{digit_values, extract_digits};
use super::error::FiscalIdError;
use super::format::{format_cnpj, format_cpf};
use super::validation::{FiscalIdKind, ValidationResult, classify_digits};

/// A validated CPF, stored as its 11 bare digits.
///
/// `Display` and `Serialize` produce the canonical `###.###.###-##` form;
/// `FromStr` and `Deserialize` accept any punctuation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cpf(String);

/// A validated CNPJ, stored as its 14 bare digits.
///
/// `Display` and `Serialize` produce the canonical `##.###.###/####-##` form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cnpj(String);

/// Either kind of validated fiscal identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FiscalId {
    /// An individual taxpayer (11 digits).
    Cpf(Cpf),
    /// A company or establishment (14 digits).
    Cnpj(Cnpj),
}

/// Extract exactly `len` digits or report the count found.
fn digits_of_len(raw: &str, len: usize, expected: &'static str) -> Result<String, FiscalIdError> {
    let digits = extract_digits(raw);
    if digits.len() != len {
        return Err(FiscalIdError::WrongLength {
            expected,
            found: digits.len(),
        });
    }
    Ok(digits)
}

fn push_digits(digits: &mut String, check: [u8; 2]) {
    for d in check {
        digits.push(char::from(b'0' + d));
    }
}

impl Cpf {
    /// Parse and validate a CPF, ignoring punctuation.
    pub fn parse(raw: &str) -> Result<Self, FiscalIdError> {
        let digits = digits_of_len(raw, CPF_LEN, "11")?;
        classify_digits(&digits)?;
        Ok(Self(digits))
    }

    /// Build a CPF from its 9-digit base by appending the check digits.
    ///
    /// Fails if the base is not 9 digits or the result is a repeated
    /// sequence (base "000000000" would yield "00000000000").
    pub fn from_base(base: &str) -> Result<Self, FiscalIdError> {
        let mut digits = digits_of_len(base, 9, "9")?;
        let values = digit_values(&digits).unwrap_or_default();
        let Ok(base) = <[u8; 9]>::try_from(values.as_slice()) else {
            return Err(FiscalIdError::WrongLength {
                expected: "9",
                found: values.len(),
            });
        };
        push_digits(&mut digits, cpf_check_digits(&base));
        Self::parse(&digits)
    }

    /// The 11 bare digits.
    pub fn digits(&self) -> &str {
        &self.0
    }

    /// The two trailing check digits.
    pub fn check_digits(&self) -> &str {
        &self.0[9..]
    }
}

impl Cnpj {
    /// Parse and validate a CNPJ, ignoring punctuation.
    pub fn parse(raw: &str) -> Result<Self, FiscalIdError> {
        let digits = digits_of_len(raw, CNPJ_LEN, "14")?;
        classify_digits(&digits)?;
        Ok(Self(digits))
    }

    /// Build a CNPJ from its 12-digit base (root + branch) by appending
    /// the check digits.
    pub fn from_base(base: &str) -> Result<Self, FiscalIdError> {
        let mut digits = digits_of_len(base, 12, "12")?;
        let values = digit_values(&digits).unwrap_or_default();
        let Ok(base) = <[u8; 12]>::try_from(values.as_slice()) else {
            return Err(FiscalIdError::WrongLength {
                expected: "12",
                found: values.len(),
            });
        };
        push_digits(&mut digits, cnpj_check_digits(&base));
        Self::parse(&digits)
    }

    /// The 14 bare digits.
    pub fn digits(&self) -> &str {
        &self.0
    }

    /// The 8-digit company root, shared by all establishments.
    pub fn root(&self) -> &str {
        &self.0[..8]
    }

    /// The 4-digit establishment number.
    pub fn branch(&self) -> &str {
        &self.0[8..12]
    }

    /// Whether this is the head office (`0001`).
    pub fn is_head_office(&self) -> bool {
        self.branch() == "0001"
    }

    /// The two trailing check digits.
    pub fn check_digits(&self) -> &str {
        &self.0[12..]
    }
}

impl FiscalId {
    /// Parse a CPF or CNPJ, routing by digit count.
    ///
    /// Accepts exactly the inputs [`validate_fiscal_id`](super::validate_fiscal_id)
    /// reports as valid, with the rejection reason kept.
    pub fn parse(raw: &str) -> Result<Self, FiscalIdError> {
        let digits = extract_digits(raw);
        match classify_digits(&digits)? {
            FiscalIdKind::Cpf => Ok(Self::Cpf(Cpf(digits))),
            _ => Ok(Self::Cnpj(Cnpj(digits))),
        }
    }

    /// `Cpf` or `Cnpj`; never `Invalid`.
    pub fn kind(&self) -> FiscalIdKind {
        match self {
            Self::Cpf(_) => FiscalIdKind::Cpf,
            Self::Cnpj(_) => FiscalIdKind::Cnpj,
        }
    }

    /// The bare digits (11 or 14).
    pub fn digits(&self) -> &str {
        match self {
            Self::Cpf(c) => c.digits(),
            Self::Cnpj(c) => c.digits(),
        }
    }
}

impl From<&FiscalId> for ValidationResult {
    fn from(id: &FiscalId) -> Self {
        ValidationResult {
            kind: id.kind(),
            canonical: Some(id.to_string()),
        }
    }
}

impl From<Cpf> for FiscalId {
    fn from(cpf: Cpf) -> Self {
        Self::Cpf(cpf)
    }
}

impl From<Cnpj> for FiscalId {
    fn from(cnpj: Cnpj) -> Self {
        Self::Cnpj(cnpj)
    }
}

impl fmt::Display for Cpf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_cpf(&self.0))
    }
}

impl fmt::Display for Cnpj {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_cnpj(&self.0))
    }
}

impl fmt::Display for FiscalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cpf(c) => fmt::Display::fmt(c, f),
            Self::Cnpj(c) => fmt::Display::fmt(c, f),
        }
    }
}

impl FromStr for Cpf {
    type Err = FiscalIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl FromStr for Cnpj {
    type Err = FiscalIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl FromStr for FiscalId {
    type Err = FiscalIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

// Serialized as the canonical string; deserialized through the validating parser.

impl Serialize for Cpf {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl Serialize for Cnpj {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl Serialize for FiscalId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

fn deserialize_parsed<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr<Err = FiscalIdError>,
{
    let raw = String::deserialize(deserializer)?;
    raw.parse().map_err(serde::de::Error::custom)
}

impl<'de> Deserialize<'de> for Cpf {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserialize_parsed(deserializer)
    }
}

impl<'de> Deserialize<'de> for Cnpj {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserialize_parsed(deserializer)
    }
}

impl<'de> Deserialize<'de> for FiscalId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserialize_parsed(deserializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_cpf() {
        let cpf = Cpf::parse("111.444.777-35").unwrap();
        assert_eq!(cpf.digits(), "11144477735");
        assert_eq!(cpf.check_digits(), "35");
        assert_eq!(cpf.to_string(), "111.444.777-35");
    }

    #[test]
    fn cpf_rejects_cnpj_length() {
        assert_eq!(
            Cpf::parse("11222333000181"),
            Err(FiscalIdError::WrongLength {
                expected: "11",
                found: 14
            })
        );
    }

    #[test]
    fn cpf_reasons() {
        assert_eq!(
            Cpf::parse("000.000.000-00"),
            Err(FiscalIdError::RepeatedDigits)
        );
        assert_eq!(
            Cpf::parse("123.456.789-00"),
            Err(FiscalIdError::ChecksumMismatch {
                kind: FiscalIdKind::Cpf
            })
        );
    }

    #[test]
    fn cpf_from_base() {
        assert_eq!(Cpf::from_base("111444777").unwrap().digits(), "11144477735");
        assert_eq!(Cpf::from_base("390.533.447").unwrap().check_digits(), "05");
        assert_eq!(
            Cpf::from_base("000000000"),
            Err(FiscalIdError::RepeatedDigits)
        );
        assert!(Cpf::from_base("12345678").is_err());
    }

    #[test]
    fn cnpj_parts() {
        let cnpj = Cnpj::parse("11.222.333/0001-81").unwrap();
        assert_eq!(cnpj.root(), "11222333");
        assert_eq!(cnpj.branch(), "0001");
        assert_eq!(cnpj.check_digits(), "81");
        assert!(cnpj.is_head_office());
    }

    #[test]
    fn cnpj_from_base_branch() {
        let branch = Cnpj::from_base("112223330002").unwrap();
        assert_eq!(branch.branch(), "0002");
        assert!(!branch.is_head_office());
        assert!(Cnpj::parse(branch.digits()).is_ok());
    }

    #[test]
    fn fiscal_id_routes_by_length() {
        assert_eq!(
            FiscalId::parse("11144477735").unwrap().kind(),
            FiscalIdKind::Cpf
        );
        assert_eq!(
            FiscalId::parse("11222333000181").unwrap().kind(),
            FiscalIdKind::Cnpj
        );
        assert!(matches!(
            FiscalId::parse(""),
            Err(FiscalIdError::WrongLength { found: 0, .. })
        ));
    }

    #[test]
    fn into_validation_result() {
        let id = FiscalId::parse("11222333000181").unwrap();
        let result = ValidationResult::from(&id);
        assert_eq!(result.canonical(), Some("11.222.333/0001-81"));
        assert_eq!(result.kind, FiscalIdKind::Cnpj);
    }

    #[test]
    fn from_str() {
        let cpf: Cpf = "746.824.890-70".parse().unwrap();
        assert_eq!(FiscalId::from(cpf.clone()), FiscalId::Cpf(cpf));
    }
}
