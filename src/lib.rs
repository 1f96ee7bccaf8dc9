//! # cadastro
//!
//! Brazilian fiscal identifier validation: CPF and CNPJ check digits,
//! canonical formatting, Pix key classification, phone numbers, and the
//! BRL/date display helpers a Pix checkout needs.
//!
//! Everything here is pure: no I/O, no shared state. Malformed user input is
//! a normal result, never a panic. Monetary values use
//! [`rust_decimal::Decimal`] — never floating point.
//!
//! ## Quick Start
//!
//! ```rust
//! use cadastro::core::*;
//!
//! let result = validate_fiscal_id("111.444.777-35");
//! assert_eq!(result.kind, FiscalIdKind::Cpf);
//! assert_eq!(result.canonical(), Some("111.444.777-35"));
//!
//! assert!(!validate_fiscal_id("00000000000").is_valid());
//!
//! let cnpj: Cnpj = "11222333000181".parse().unwrap();
//! assert_eq!(cnpj.to_string(), "11.222.333/0001-81");
//! assert!(cnpj.is_head_office());
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `core` (default) | CPF/CNPJ check digits, facade, typed identifiers |
//! | `pix` | Pix key classification, phone validation |
//! | `locale` | BRL currency, Brazilian date display, affiliate links |
//! | `all` | Everything |

#[cfg(feature = "core")]
pub mod core;

#[cfg(feature = "pix")]
pub mod pix;

#[cfg(feature = "locale")]
pub mod locale;

// Re-export core types at crate root for convenience
#[cfg(feature = "core")]
pub use crate::core::*;
