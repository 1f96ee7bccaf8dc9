//! Brazilian date display and subscription countdowns.

use chrono::{NaiveDate, NaiveDateTime};

/// Format as `25/12/2023 às 15:30`.
pub fn format_date_br(at: NaiveDateTime) -> String {
    at.format("%d/%m/%Y às %H:%M").to_string()
}

/// Format as `25/12/2023`.
pub fn format_date_br_short(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

/// Human-readable time left until `expires_at`, as seen at `now`.
///
/// - `Expirado` once `now` has reached `expires_at`
/// - `3d 4h` with at least a day left
/// - `2h 15min` with at least an hour left
/// - `42min` otherwise
pub fn time_remaining(expires_at: NaiveDateTime, now: NaiveDateTime) -> String {
    if now >= expires_at {
        return "Expirado".into();
    }

    let remaining = expires_at - now;
    let days = remaining.num_days();
    let secs = remaining.num_seconds() - days * 86_400;
    let hours = secs / 3600;
    let minutes = (secs % 3600) / 60;

    if days > 0 {
        format!("{days}d {hours}h")
    } else if hours > 0 {
        format!("{hours}h {minutes}min")
    } else {
        format!("{minutes}min")
    }
}
