//! Text cleaning and field inference for inventory data.
//!
//! Pure functions that normalize raw cells and derive year, serial number and
//! autograph flags from free-text card descriptions. The patterns are
//! heuristics and are kept exactly as sellers' sheets have been processed so
//! far; changing them changes generated listings.

use lazy_static::lazy_static;
use log::debug;
use regex::Regex;

lazy_static! {
    static ref YEAR_RE: Regex = Regex::new(r"\b(19\d{2}|20\d{2})\b").unwrap();
    static ref SERIAL_RE: Regex = Regex::new(r"/\s*(\d{1,4})\b").unwrap();
    static ref AUTO_RE: Regex = Regex::new(r"(?i)\b(auto|autograph)\b").unwrap();
    static ref LEADING_YEAR_RE: Regex = Regex::new(r"^(19\d{2}|20\d{2})\s+").unwrap();
    static ref NON_SLUG_RE: Regex = Regex::new(r"[^a-z0-9]+").unwrap();
    static ref NON_ALNUM_RE: Regex = Regex::new(r"[^0-9A-Za-z]+").unwrap();
}

/// Trims the text and collapses internal whitespace runs to a single space.
pub fn clean(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Cleans a cell that may not exist (ragged row or unknown column).
pub fn clean_cell(cell: Option<&str>) -> String {
    cell.map(clean).unwrap_or_default()
}

fn first_year(text: &str) -> Option<&str> {
    YEAR_RE
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Finds the release year of a card.
///
/// # Arguments
/// * `card_name` - searched first
/// * `card_set` - searched only when the card name holds no year
///
/// # Returns
/// The first standalone 4-digit number starting with "19" or "20", or an
/// empty string.
pub fn infer_year(card_name: &str, card_set: &str) -> String {
    let year = first_year(card_name)
        .or_else(|| first_year(card_set))
        .unwrap_or_default()
        .to_string();
    debug!("Inferred year '{year}' from name '{card_name}' / set '{card_set}'");
    year
}

/// Finds a print run number such as "/25" or "/ 99".
///
/// `features` is searched before `card_name`. Returns the digits without the
/// slash, or an empty string.
pub fn infer_serial(features: &str, card_name: &str) -> String {
    for text in [features, card_name] {
        if text.is_empty() {
            continue;
        }
        if let Some(m) = SERIAL_RE.captures(text).and_then(|caps| caps.get(1)) {
            debug!("Inferred serial '/{}' from '{text}'", m.as_str());
            return m.as_str().to_string();
        }
    }
    String::new()
}

/// True if "auto" or "autograph" appears as a whole word, in any case.
pub fn infer_auto(features: &str, card_name: &str) -> bool {
    AUTO_RE.is_match(&format!("{features} {card_name}"))
}

/// Strips a leading year from a set name: "2024 Topps Finest MLS" -> "Topps Finest MLS".
pub fn infer_set_short(card_set: &str) -> String {
    let cleaned = clean(card_set);
    LEADING_YEAR_RE.replace(&cleaned, "").into_owned()
}

/// Lowercase identifier made of `[a-z0-9_]`, never empty ("x" as a fallback).
pub fn slug(s: &str) -> String {
    let lower = s.to_lowercase();
    let replaced = NON_SLUG_RE.replace_all(&lower, "_");
    let trimmed = replaced.trim_matches('_');
    if trimmed.is_empty() {
        "x".to_string()
    } else {
        trimmed.to_string()
    }
}

/// Removes everything except ASCII letters and digits.
pub fn alphanumeric_only(s: &str) -> String {
    NON_ALNUM_RE.replace_all(s, "").into_owned()
}

/// Parses a price cell, returning `None` for anything that isn't a number.
pub fn parse_price(s: &str) -> Option<f64> {
    let price = s.trim().parse::<f64>().ok();
    if price.is_none() && !s.trim().is_empty() {
        debug!("Ignoring non-numeric price '{s}'");
    }
    price
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
