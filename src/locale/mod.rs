//! Brazilian display conventions for a Pix checkout.
//!
//! BRL currency formatting and parsing, `dd/mm/yyyy` dates, subscription
//! countdowns, and affiliate link/commission helpers.
//!
//! # Example
//!
//! ```
//! use cadastro::locale::*;
//! use rust_decimal_macros::dec;
//!
//! assert_eq!(format_brl(dec!(1234.5)), "R$ 1.234,50");
//! assert_eq!(parse_brl("R$ 29,90").unwrap(), dec!(29.90));
//! assert_eq!(calculate_commission(dec!(29.90), DEFAULT_COMMISSION_RATE), dec!(5.98));
//! ```

mod currency;
mod datetime;
mod referral;

use thiserror::Error;

pub use currency::{format_brl, parse_brl};
pub use datetime::{format_date_br, format_date_br_short, time_remaining};
pub use referral::{
    DEFAULT_COMMISSION_RATE, MIN_WITHDRAWAL, REFERRAL_PREFIX, affiliate_link, calculate_commission,
    can_withdraw, is_valid_telegram_id, referrer_from_start,
};

/// Errors from parsing locale-formatted input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum LocaleError {
    /// Not a recognizable BRL amount.
    #[error("invalid BRL amount '{0}'")]
    InvalidAmount(String),
}
