//! Brazilian Real (BRL) display formatting and parsing.

use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};

use super::LocaleError;

/// Format an amount as `R$ 1.234,50`.
///
/// Rounded to centavos (midpoint away from zero), `.` groups thousands and
/// `,` separates decimals. Negative amounts render as `-R$ 5,00`.
pub fn format_brl(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    let plain = format!("{:.2}", rounded.abs());
    let (int_part, frac) = plain.split_once('.').unwrap_or((plain.as_str(), "00"));
    format!("{sign}R$ {},{frac}", group_thousands(int_part))
}

fn group_thousands(int_part: &str) -> String {
    let len = int_part.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, c) in int_part.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push('.');
        }
        out.push(c);
    }
    out
}

/// Parse a BRL amount typed by a user ("R$ 29,90", "1.234,50", "29.90").
///
/// The comma is the decimal separator and dots group thousands. Without a
/// comma, a single dot followed by one or two digits is read as the decimal
/// point, so "29.90" parses as 29.90 while "1.234" parses as 1234.
///
/// Grouping is checked: the first group has one to three digits and every
/// later group exactly three. Anything other than digits, `.`, `,`, a
/// leading `-` and the `R$` symbol is rejected.
pub fn parse_brl(input: &str) -> Result<Decimal, LocaleError> {
    let invalid = || LocaleError::InvalidAmount(input.into());

    let compact: String = input
        .replace("R$", "")
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect();
    let (sign, unsigned) = match compact.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", compact.as_str()),
    };
    if !unsigned
        .bytes()
        .all(|b| b.is_ascii_digit() || b == b'.' || b == b',')
    {
        return Err(invalid());
    }

    let (int_part, frac) = match unsigned.split_once(',') {
        Some((int_part, frac)) => (int_part, Some(frac)),
        None => match unsigned.split_once('.') {
            Some((int_part, frac)) if is_centavos(frac) && is_plain_digits(int_part) => {
                (int_part, Some(frac))
            }
            _ => (unsigned, None),
        },
    };

    let integer = ungroup(int_part).ok_or_else(invalid)?;
    let normalized = match frac {
        Some(frac) if is_centavos(frac) => format!("{sign}{integer}.{frac}"),
        Some(_) => return Err(invalid()),
        None => format!("{sign}{integer}"),
    };

    Decimal::from_str(&normalized).map_err(|_| invalid())
}

fn is_plain_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

fn is_centavos(s: &str) -> bool {
    (1..=2).contains(&s.len()) && is_plain_digits(s)
}

/// Strip thousands dots, or `None` if the groups are malformed.
fn ungroup(int_part: &str) -> Option<String> {
    let mut groups = int_part.split('.');
    let head = groups.next().filter(|g| is_plain_digits(g))?;
    let mut out = head.to_string();
    for group in groups {
        if head.len() > 3 || group.len() != 3 || !is_plain_digits(group) {
            return None;
        }
        out.push_str(group);
    }
    Some(out)
}
