//! Listing prices.
//!
//! Prices come either from a flat default or from a numeric column in the
//! inventory sheet. A flat default always overrides the column.

use log::{info, warn};

use crate::inventory::InventorySheet;
use crate::text::parse_price;

/// Rounds to a "$xx.99" style price, never below 0.99.
pub fn psych_price(x: f64) -> f64 {
    if x <= 1.0 {
        return 0.99;
    }
    (x.round() - 0.01).max(0.99)
}

/// Where listing prices come from
#[derive(Debug, Clone, Default, PartialEq)]
pub enum PriceSource {
    /// Price columns stay blank
    #[default]
    None,
    /// Same price for every row
    Flat(f64),
    /// Per-row prices parsed from an inventory column; `None` for unparsable cells
    Column {
        name: String,
        prices: Vec<Option<f64>>,
    },
}

impl PriceSource {
    /// Picks the price source for a sheet.
    ///
    /// An unknown column name is logged and ignored.
    pub fn resolve(
        sheet: &InventorySheet,
        default_price: Option<f64>,
        price_column: Option<&str>,
    ) -> Self {
        if let Some(price) = default_price {
            return PriceSource::Flat(price);
        }
        let Some(name) = price_column else {
            return PriceSource::None;
        };
        match sheet.column_values(name) {
            Some(values) => PriceSource::Column {
                name: name.to_string(),
                prices: values.iter().map(|v| parse_price(v)).collect(),
            },
            None => {
                warn!("Price column '{name}' not found in inventory, leaving prices blank");
                PriceSource::None
            }
        }
    }

    /// Human readable summary for logs
    pub fn describe(&self) -> String {
        match self {
            PriceSource::None => "none (blank prices)".to_string(),
            PriceSource::Flat(price) => format!("default-price {price}"),
            PriceSource::Column { name, .. } => format!("TSV column '{name}'"),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PricingOptions {
    pub source: PriceSource,
    /// Convert prices to .99 style
    pub psych: bool,
}

impl PricingOptions {
    /// Price for the 1-based row index, if any
    pub fn price_for(&self, index: usize) -> Option<f64> {
        let price = match &self.source {
            PriceSource::None => None,
            PriceSource::Flat(price) => Some(*price),
            PriceSource::Column { prices, .. } => index
                .checked_sub(1)
                .and_then(|i| prices.get(i).copied().flatten()),
        }?;
        Some(if self.psych { psych_price(price) } else { price })
    }

    pub fn log_source(&self) {
        info!("Pricing source: {}", self.source.describe());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: Option<f64>, b: f64) -> bool {
        a.is_some_and(|a| (a - b).abs() < 0.001)
    }

    #[test]
    fn psych_price_rounds_to_ninety_nine() {
        assert!((psych_price(0.5) - 0.99).abs() < 0.001);
        assert!((psych_price(1.0) - 0.99).abs() < 0.001);
        assert!((psych_price(12.40) - 11.99).abs() < 0.001);
        assert!((psych_price(12.60) - 12.99).abs() < 0.001);
        assert!((psych_price(1.2) - 0.99).abs() < 0.001);
    }

    #[test]
    fn flat_price_overrides_column() {
        let sheet = InventorySheet::parse("Card Name\tPrice\nA\t5");
        let source = PriceSource::resolve(&sheet, Some(9.99), Some("Price"));
        assert_eq!(source, PriceSource::Flat(9.99));
    }

    #[test]
    fn column_prices_by_row() {
        let sheet = InventorySheet::parse("Card Name\tPrice\nA\t5.50\nB\tn/a\nC\t20");
        let options = PricingOptions {
            source: PriceSource::resolve(&sheet, None, Some("Price")),
            psych: false,
        };
        assert!(approx(options.price_for(1), 5.50));
        assert_eq!(options.price_for(2), None);
        assert!(approx(options.price_for(3), 20.0));
        assert_eq!(options.price_for(4), None);
        assert_eq!(options.price_for(0), None);
    }

    #[test]
    fn unknown_column_means_no_price() {
        let sheet = InventorySheet::parse("Card Name\tPrice\nA\t5");
        let source = PriceSource::resolve(&sheet, None, Some("Cost"));
        assert_eq!(source, PriceSource::None);
        assert_eq!(source.describe(), "none (blank prices)");
    }

    #[test]
    fn psych_applies_to_flat_price() {
        let options = PricingOptions {
            source: PriceSource::Flat(7.25),
            psych: true,
        };
        assert!(approx(options.price_for(1), 6.99));
    }
}
