//! Formatting helpers for document values.
//!
//! Shared helpers that turn raw context values into the strings printed in a
//! consent term. All of them are total: invalid input degrades to an empty
//! string or to the original value, never a panic.

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime};
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref LICENSE_RE: Regex =
        Regex::new(r"^([A-Za-z]{2,10}(?:[-/][A-Za-z]{2})?)\s*:?\s*([0-9][0-9./-]*)$").unwrap();
}

/// Format a CPF as `XXX.XXX.XXX-XX`.
///
/// Anything that does not strip down to exactly 11 digits is returned as-is,
/// so an upstream typo stays visible instead of being half-masked.
pub fn format_cpf(raw: &str) -> String {
    if raw.trim().is_empty() {
        return String::new();
    }
    let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.len() != 11 {
        return raw.to_string();
    }
    format!(
        "{}.{}.{}-{}",
        &digits[0..3],
        &digits[3..6],
        &digits[6..9],
        &digits[9..11]
    )
}

/// Format a date as `DD/MM/YYYY`.
///
/// Accepts RFC 3339 timestamps, ISO dates and date-times, and values already
/// in `DD/MM/YYYY`. Unparseable input yields an empty string.
pub fn format_date(raw: &str) -> String {
    match parse_date_time(raw) {
        Some(dt) => dt.format("%d/%m/%Y").to_string(),
        None => String::new(),
    }
}

/// Format a date and time as `DD/MM/YYYY HH:MM`.
///
/// An absent value defaults to the local clock, a display default for forms
/// still being filled in. Unparseable input yields an empty string.
pub fn format_date_time(raw: Option<&str>) -> String {
    match raw {
        Some(value) if !value.trim().is_empty() => match parse_date_time(value) {
            Some(dt) => dt.format("%d/%m/%Y %H:%M").to_string(),
            None => String::new(),
        },
        _ => Local::now().format("%d/%m/%Y %H:%M").to_string(),
    }
}

/// Normalize a council license code to `"ABBR: NUMBER"`.
///
/// `"crm 12345"`, `"CRM:12345"` and `"CRM: 12345"` all come out as
/// `"CRM: 12345"`; state-suffixed councils keep the suffix
/// (`"CRM-SP 12345"` becomes `"CRM-SP: 12345"`). Input with no recognizable
/// abbreviation is returned trimmed. Idempotent: formatting an already
/// formatted value is a no-op.
pub fn format_license(raw: &str) -> String {
    let trimmed = raw.trim();
    match LICENSE_RE.captures(trimmed) {
        Some(caps) => format!("{}: {}", caps[1].to_uppercase(), &caps[2]),
        None => trimmed.to_string(),
    }
}

/// Render the image-use authorization as a two-line checkbox block.
///
/// Both lines are always present; `None` (context still being filled in)
/// leaves both boxes empty.
pub fn image_authorization_block(authorized: Option<bool>) -> String {
    format!(
        "{} SIM, autorizo o registro e o uso de imagens do procedimento\n\
         {} NÃO autorizo o registro nem o uso de imagens do procedimento",
        checkbox(authorized == Some(true)),
        checkbox(authorized == Some(false)),
    )
}

fn checkbox(checked: bool) -> &'static str {
    if checked {
        "( X )"
    } else {
        "(   )"
    }
}

fn parse_date_time(raw: &str) -> Option<NaiveDateTime> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        // Keep the wall-clock time the host captured, offset included.
        return Some(dt.naive_local());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(dt);
    }
    for date_format in ["%Y-%m-%d", "%d/%m/%Y"] {
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, date_format) {
            return date.and_hms_opt(0, 0, 0);
        }
    }
    None
}
