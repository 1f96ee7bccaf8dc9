//! Affiliate deep links and commission arithmetic.
//!
//! Affiliates share `https://t.me/<bot>?start=ref_<user_id>`; the bot
//! receives `ref_<user_id>` as the `/start` parameter.

use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;

/// Prefix of the `/start` parameter carried by affiliate links.
pub const REFERRAL_PREFIX: &str = "ref_";

/// Default affiliate commission (20%).
pub const DEFAULT_COMMISSION_RATE: Decimal = dec!(0.20);

/// Smallest balance an affiliate may withdraw.
pub const MIN_WITHDRAWAL: Decimal = dec!(10.00);

/// Telegram user IDs are positive and below 10^10.
pub fn is_valid_telegram_id(user_id: i64) -> bool {
    user_id > 0 && user_id < 10_000_000_000
}

/// Build the affiliate link for `user_id`. A leading `@` on the bot
/// username is dropped.
pub fn affiliate_link(bot_username: &str, user_id: i64) -> String {
    let bot = bot_username.trim_start_matches('@');
    format!("https://t.me/{bot}?start={REFERRAL_PREFIX}{user_id}")
}

/// Extract the referring user ID from a `/start` parameter.
///
/// Returns `None` unless the parameter is `ref_` followed by a valid
/// Telegram user ID.
pub fn referrer_from_start(start_param: &str) -> Option<i64> {
    let id: i64 = start_param.strip_prefix(REFERRAL_PREFIX)?.parse().ok()?;
    is_valid_telegram_id(id).then_some(id)
}

/// Commission on a sale, rounded to centavos.
pub fn calculate_commission(amount: Decimal, rate: Decimal) -> Decimal {
    (amount * rate).round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Whether an affiliate balance can be withdrawn.
pub fn can_withdraw(balance: Decimal) -> bool {
    balance >= MIN_WITHDRAWAL
}
