//! Card Listings - trading card inventory to marketplace listings
//!
//! Parses a tab-separated card inventory, infers year, serial number and
//! autograph status from the free-text columns, and generates listing titles,
//! HTML descriptions and bulk upload files.

pub mod bulk_export;
pub mod error;
pub mod inventory;
pub mod listing;
pub mod models;
pub mod pricing;
pub mod source;
pub mod text;
pub mod web;

pub use bulk_export::{export_listings, BulkTemplate, ExportOptions, ExportSummary};
pub use error::{ListingError, Result};
pub use inventory::{load_inventory_from_source, InventorySheet};
pub use listing::{build_description, build_listings, build_title, Listing, ListingOptions, TitleMode};
pub use models::Card;
pub use pricing::{PriceSource, PricingOptions};
pub use source::InventorySource;
