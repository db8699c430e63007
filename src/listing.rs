//! Marketplace listing text: titles, HTML descriptions and SKUs.
//!
//! Everything here is a pure function of a [`Card`].

use serde::{Deserialize, Serialize};

use crate::models::Card;
use crate::text::{alphanumeric_only, clean, slug};

/// Marketplace hard limit on title length, in characters
pub const TITLE_MAX_CHARS: usize = 80;

pub const DEFAULT_SKU_PREFIX: &str = "SOC";

const SHIPPING_NOTE: &str =
    "Ships next business day. Securely packed (sleeve + top loader + team bag).";
const EXACT_CARD_NOTE: &str = "Card shown is the exact card you will receive.";

/// Which fields go into a title
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TitleMode {
    /// YEAR SET PLAYER INSERT/PARALLEL /SERIAL AUTO
    #[default]
    Standard,
    /// YEAR SET CARD# PLAYER INSERT/PARALLEL /SERIAL AUTO
    WithCardNumber,
}

/// Builds the listing title in [`TitleMode::Standard`].
pub fn build_title(card: &Card) -> String {
    build_title_with_mode(card, TitleMode::Standard)
}

pub fn build_title_with_mode(card: &Card, mode: TitleMode) -> String {
    let serial = card.serial_label();
    let auto = if card.is_auto { "AUTO" } else { "" };

    let mut candidates: Vec<&str> = vec![card.year.as_str(), card.card_set.as_str()];
    if mode == TitleMode::WithCardNumber {
        candidates.push(card.card_number.as_str());
    }
    candidates.extend([card.player_name.as_str(), card.features.as_str(), serial.as_str(), auto]);

    let mut parts: Vec<String> = candidates
        .into_iter()
        .map(clean)
        .filter(|p| !p.is_empty())
        .collect();

    // Set names usually embed the year already ("2023 Topps Chrome").
    if parts.len() >= 2 && parts[1].starts_with(parts[0].as_str()) {
        parts.remove(0);
    }

    clean(&parts.join(" "))
        .chars()
        .take(TITLE_MAX_CHARS)
        .collect()
}

/// Builds the HTML item description.
///
/// Field values are inserted as-is; the inventory is trusted input.
pub fn build_description(card: &Card) -> String {
    let set = format!("{} {}", card.year, card.card_set);
    let fields: [(&str, String); 8] = [
        ("Player", clean(&card.player_name)),
        ("Team", clean(&card.team)),
        ("League", clean(&card.league)),
        ("Set", clean(&set)),
        ("Card Number", clean(&card.card_number)),
        ("Insert / Parallel", clean(&card.features)),
        ("Serial Number", clean(&card.serial_label())),
        ("Autograph", card.autograph_label().to_string()),
    ];

    let mut html = String::new();
    for (label, value) in &fields {
        html.push_str(&format!("<p><b>{label}:</b> {value}</p>"));
    }
    html.push_str("<hr>");
    html.push_str(&format!("<p>{SHIPPING_NOTE}</p>"));
    html.push_str(&format!("<p>{EXACT_CARD_NOTE}</p>"));
    html
}

/// Stable-ish SKU such as `SOC_0001_lionel_messi_10`.
///
/// `index` is the 1-based position of the card in the inventory.
pub fn make_sku(prefix: &str, index: usize, card: &Card) -> String {
    format!(
        "{prefix}_{index:04}_{}_{}",
        slug(&card.player_name),
        slug(&alphanumeric_only(&card.card_number))
    )
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingOptions {
    pub title_mode: TitleMode,
    pub sku_prefix: String,
}

impl Default for ListingOptions {
    fn default() -> Self {
        Self {
            title_mode: TitleMode::Standard,
            sku_prefix: DEFAULT_SKU_PREFIX.to_string(),
        }
    }
}

/// A card together with its generated listing text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    pub index: usize,
    pub sku: String,
    pub title: String,
    pub description: String,
    pub card: Card,
}

impl Listing {
    pub fn from_card(index: usize, card: Card, options: &ListingOptions) -> Self {
        Self {
            index,
            sku: make_sku(&options.sku_prefix, index, &card),
            title: build_title_with_mode(&card, options.title_mode),
            description: build_description(&card),
            card,
        }
    }
}

/// Generates listings for all cards, numbering them from 1.
pub fn build_listings(cards: Vec<Card>, options: &ListingOptions) -> Vec<Listing> {
    cards
        .into_iter()
        .enumerate()
        .map(|(i, card)| Listing::from_card(i + 1, card, options))
        .collect()
}
