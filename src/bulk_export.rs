//! Marketplace bulk upload CSV export.
//!
//! The seller's upload template starts with a small block of header lines
//! (an info line, the column row, an explanatory row, a blank line). That
//! block is copied verbatim; generated rows are appended below it using the
//! column row for placement.

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use log::{debug, info};

use crate::error::{ListingError, Result};
use crate::listing::Listing;
use crate::pricing::PricingOptions;
use crate::text::infer_set_short;

/// Soccer trading cards
pub const DEFAULT_CATEGORY: u32 = 47140;
pub const DEFAULT_CONDITION_ID: &str = "4000";

const ACTION_PREFIX: &str = "*Action(";
const PRICE_COLUMNS: [&str; 4] = ["*StartPrice", "StartPrice", "Price", "*Price"];
const DESCRIPTION_COLUMNS: [&str; 2] = ["*Description", "Description"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportOptions {
    pub action: String,
    pub category: u32,
    pub condition_id: String,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            action: "Add".to_string(),
            category: DEFAULT_CATEGORY,
            condition_id: DEFAULT_CONDITION_ID.to_string(),
        }
    }
}

/// Header block and columns of a bulk upload template
#[derive(Debug, Clone)]
pub struct BulkTemplate {
    header_lines: Vec<String>,
    columns: Vec<String>,
    index: HashMap<String, usize>,
}

impl BulkTemplate {
    pub fn load(path: &Path) -> Result<Self> {
        info!("Loading bulk upload template from: {}", path.display());
        let bytes = std::fs::read(path).map_err(|e| ListingError::io(path, e))?;
        Self::from_text(&String::from_utf8_lossy(&bytes))
    }

    /// Keeps the first 4 lines (2 for very short templates); columns come from line 2.
    pub fn from_text(text: &str) -> Result<Self> {
        let lines: Vec<&str> = text.lines().collect();
        if lines.len() < 2 {
            return Err(ListingError::Template(
                "template file seems too short".to_string(),
            ));
        }

        let keep = if lines.len() >= 4 { 4 } else { 2 };
        let header_lines = lines[..keep].iter().map(|l| l.to_string()).collect();

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(lines[1].as_bytes());
        let columns: Vec<String> = match reader.records().next() {
            Some(record) => record?.iter().map(str::to_string).collect(),
            None => Vec::new(),
        };
        if columns.is_empty() {
            return Err(ListingError::Template(
                "template has no column row".to_string(),
            ));
        }

        // Later duplicates win, matching how the template is filled by hand.
        let index = columns
            .iter()
            .enumerate()
            .map(|(i, c)| (c.clone(), i))
            .collect();

        debug!("Template has {} columns", columns.len());
        Ok(Self {
            header_lines,
            columns,
            index,
        })
    }

    pub fn header_lines(&self) -> &[String] {
        &self.header_lines
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    fn first_present(&self, candidates: &[&str]) -> Option<usize> {
        candidates.iter().find_map(|c| self.index.get(*c).copied())
    }

    /// The template carries several action columns; the action belongs in the second one.
    fn action_column(&self) -> Option<usize> {
        let actions: Vec<usize> = self
            .columns
            .iter()
            .enumerate()
            .filter(|(_, c)| c.starts_with(ACTION_PREFIX))
            .map(|(i, _)| i)
            .collect();
        actions.get(1).or_else(|| actions.first()).copied()
    }

    /// Builds one upload row. Columns the template lacks are skipped.
    pub fn build_row(
        &self,
        listing: &Listing,
        price: Option<f64>,
        options: &ExportOptions,
    ) -> Vec<String> {
        let card = &listing.card;
        let mut row = vec![String::new(); self.columns.len()];

        let mut put = |column: &str, value: &str| {
            if let Some(&i) = self.index.get(column) {
                row[i] = value.to_string();
            }
        };

        put("CustomLabel", &listing.sku);
        put("*Category", &options.category.to_string());
        put("*Title", &listing.title);
        put("PicURL", &card.image_url);
        put("*ConditionID", &options.condition_id);

        put("C:Player/Athlete", &card.player_name);
        put("C:Team", &card.team);
        put("C:League", &card.league);
        put("C:Parallel/Variety", &card.features);
        put("C:Card Number", &card.card_number);
        put("C:Autographed", card.autograph_label());
        put("C:Features", &card.features);
        put("C:Year Manufactured", &card.year);
        put("C:Season", &card.season);
        put("C:Manufacturer", &card.brand);
        put("C:Set", &infer_set_short(&card.card_set));
        put("C:Card Name", &card.card_name);

        if let Some(i) = self.action_column() {
            row[i] = options.action.clone();
        }
        if let (Some(price), Some(i)) = (price, self.first_present(&PRICE_COLUMNS)) {
            row[i] = format!("{price:.2}");
        }
        if let Some(i) = self.first_present(&DESCRIPTION_COLUMNS) {
            row[i] = listing.description.clone();
        }

        row
    }
}

/// Writes the preserved header block followed by the rows, each fitted to the column count.
pub fn write_bulk_csv(path: &Path, template: &BulkTemplate, rows: &[Vec<String>]) -> Result<()> {
    let file = File::create(path).map_err(|e| ListingError::io(path, e))?;
    let mut out = BufWriter::new(file);
    for line in template.header_lines() {
        writeln!(out, "{line}").map_err(|e| ListingError::io(path, e))?;
    }

    let width = template.columns().len();
    let mut writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::CRLF)
        .from_writer(out);
    for row in rows {
        let mut fitted = row.clone();
        fitted.resize(width, String::new());
        writer.write_record(&fitted)?;
    }
    writer.flush().map_err(|e| ListingError::io(path, e))?;
    Ok(())
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExportSummary {
    pub rows: usize,
    pub pricing: String,
}

/// Fills the template with one row per listing and writes it to `out`.
pub fn export_listings(
    listings: &[Listing],
    template: &BulkTemplate,
    pricing: &PricingOptions,
    options: &ExportOptions,
    out: &Path,
) -> Result<ExportSummary> {
    let rows: Vec<Vec<String>> = listings
        .iter()
        .map(|listing| template.build_row(listing, pricing.price_for(listing.index), options))
        .collect();

    write_bulk_csv(out, template, &rows)?;
    info!("Wrote bulk file: {} ({} rows)", out.display(), rows.len());

    Ok(ExportSummary {
        rows: rows.len(),
        pricing: pricing.source.describe(),
    })
}

#[cfg(test)]
#[path = "bulk_export_tests.rs"]
mod tests;
