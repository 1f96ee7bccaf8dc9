//! Pix key classification and Brazilian phone validation.
//!
//! A Pix key is one of: CPF, CNPJ, e-mail, phone number, or a random key
//! (UUID). CPF and CNPJ keys go through the same check-digit validation
//! as [`validate_fiscal_id`](crate::core::validate_fiscal_id), including
//! repeated-digit rejection.
//!
//! # Example
//!
//! ```
//! use cadastro::pix::*;
//!
//! let key = validate_pix_key("(11) 98765-4321").unwrap();
//! assert_eq!(key.key_type, PixKeyType::Phone);
//! assert_eq!(key.key, "+5511987654321");
//!
//! assert!(validate_pix_key("111.111.111-11").is_err());
//! ```

mod key;
mod phone;

pub use key::{MAX_EMAIL_KEY_LEN, PixKey, PixKeyError, PixKeyType, validate_pix_key};
pub use phone::{PhoneError, format_phone, is_known_area_code, validate_phone};
