//! Inventory sheet parsing.
//!
//! Reads tab-separated inventory exports into [`Card`] records. The parser is
//! deliberately forgiving: blank lines are dropped, ragged rows are padded
//! with empty strings and unknown columns simply leave a field empty. It never
//! returns an error; only acquiring the text can fail (see [`crate::source`]).

use log::{debug, info};

use crate::models::Card;
use crate::text::{clean, clean_cell};

/// Logical inventory columns and the header labels accepted for each.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    CardName,
    PlayerName,
    Team,
    League,
    CardSet,
    Features,
    ImageUrl,
    CardNumber,
    Sport,
    Season,
    Condition,
    Brand,
}

impl Field {
    /// Header labels in priority order. Matching is case-sensitive.
    pub fn synonyms(&self) -> &'static [&'static str] {
        match self {
            Field::CardName => &["Card Name"],
            Field::PlayerName => &["Player Name"],
            Field::Team => &["Team", "Team "],
            Field::League => &["League"],
            Field::CardSet => &["Card Set"],
            Field::Features => &["Features"],
            Field::ImageUrl => &["IMAGE URL", "Image URL", "IMAGE_URL"],
            Field::CardNumber => &["Card Number"],
            Field::Sport => &["Sport"],
            Field::Season => &["Season"],
            Field::Condition => &["Condition"],
            Field::Brand => &["Brand"],
        }
    }

    #[cfg(test)]
    fn all() -> &'static [Field] {
        &[
            Field::CardName,
            Field::PlayerName,
            Field::Team,
            Field::League,
            Field::CardSet,
            Field::Features,
            Field::ImageUrl,
            Field::CardNumber,
            Field::Sport,
            Field::Season,
            Field::Condition,
            Field::Brand,
        ]
    }
}

/// Column index for every [`Field`], resolved once per sheet.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnMap {
    card_name: Option<usize>,
    player_name: Option<usize>,
    team: Option<usize>,
    league: Option<usize>,
    card_set: Option<usize>,
    features: Option<usize>,
    image_url: Option<usize>,
    card_number: Option<usize>,
    sport: Option<usize>,
    season: Option<usize>,
    condition: Option<usize>,
    brand: Option<usize>,
}

impl ColumnMap {
    pub fn resolve(headers: &[String]) -> Self {
        let find = |field: Field| resolve_column(headers, field.synonyms());
        let map = Self {
            card_name: find(Field::CardName),
            player_name: find(Field::PlayerName),
            team: find(Field::Team),
            league: find(Field::League),
            card_set: find(Field::CardSet),
            features: find(Field::Features),
            image_url: find(Field::ImageUrl),
            card_number: find(Field::CardNumber),
            sport: find(Field::Sport),
            season: find(Field::Season),
            condition: find(Field::Condition),
            brand: find(Field::Brand),
        };
        debug!("Resolved inventory columns: {map:?}");
        map
    }

    pub fn index_of(&self, field: Field) -> Option<usize> {
        match field {
            Field::CardName => self.card_name,
            Field::PlayerName => self.player_name,
            Field::Team => self.team,
            Field::League => self.league,
            Field::CardSet => self.card_set,
            Field::Features => self.features,
            Field::ImageUrl => self.image_url,
            Field::CardNumber => self.card_number,
            Field::Sport => self.sport,
            Field::Season => self.season,
            Field::Condition => self.condition,
            Field::Brand => self.brand,
        }
    }
}

/// Index of the first synonym present in the header row, if any.
pub fn resolve_column(headers: &[String], synonyms: &[&str]) -> Option<usize> {
    synonyms
        .iter()
        .find_map(|label| headers.iter().position(|h| h == label))
}

/// A parsed sheet: cleaned header labels plus the raw tab-split data rows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InventorySheet {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl InventorySheet {
    /// Splits raw text into header and data rows.
    ///
    /// Lines are separated by LF or CRLF; lines that are blank after trimming
    /// are skipped. With fewer than two non-blank lines the sheet is empty.
    pub fn parse(raw: &str) -> Self {
        // spreadsheet "UTF-8" exports prepend a byte order mark
        let raw = raw.strip_prefix('\u{feff}').unwrap_or(raw);
        let mut lines = raw
            .split('\n')
            .map(|line| line.strip_suffix('\r').unwrap_or(line))
            .filter(|line| !line.trim().is_empty());

        let Some(header_line) = lines.next() else {
            debug!("Inventory text is empty");
            return Self::default();
        };

        let rows: Vec<Vec<String>> = lines
            .map(|line| line.split('\t').map(str::to_string).collect())
            .collect();

        if rows.is_empty() {
            debug!("Inventory text has a header but no data rows");
            return Self::default();
        }

        let headers = header_line.split('\t').map(clean).collect();
        Self { headers, rows }
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Number of data rows
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Cleaned cell at (row, column); empty for missing rows, columns or cells.
    pub fn cell(&self, row: usize, column: Option<usize>) -> String {
        let raw = column.and_then(|idx| self.rows.get(row).and_then(|r| r.get(idx)));
        clean_cell(raw.map(String::as_str))
    }

    /// All cleaned values of the column with exactly this (cleaned) label.
    pub fn column_values(&self, label: &str) -> Option<Vec<String>> {
        let idx = resolve_column(&self.headers, &[clean(label).as_str()])?;
        Some((0..self.rows.len()).map(|row| self.cell(row, Some(idx))).collect())
    }

    /// Builds one [`Card`] per data row, in source order.
    pub fn cards(&self) -> Vec<Card> {
        let columns = ColumnMap::resolve(&self.headers);
        let field = |row: usize, f: Field| self.cell(row, columns.index_of(f));

        (0..self.rows.len())
            .map(|row| {
                Card {
                    card_name: field(row, Field::CardName),
                    player_name: field(row, Field::PlayerName),
                    sport: field(row, Field::Sport),
                    card_number: field(row, Field::CardNumber),
                    features: field(row, Field::Features),
                    image_url: field(row, Field::ImageUrl),
                    league: field(row, Field::League),
                    team: field(row, Field::Team),
                    season: field(row, Field::Season),
                    condition: field(row, Field::Condition),
                    brand: field(row, Field::Brand),
                    card_set: field(row, Field::CardSet),
                    ..Default::default()
                }
                .with_derived_fields()
            })
            .collect()
    }
}

/// Parses raw tab-separated inventory text into cards, preserving row order.
pub fn load_inventory_from_source(raw: &str) -> Vec<Card> {
    let cards = InventorySheet::parse(raw).cards();
    info!("Parsed {} cards from inventory", cards.len());
    cards
}

#[cfg(test)]
#[path = "inventory_tests.rs"]
mod tests;
