//! Acquiring inventory text from disk or over HTTP.

use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::{ListingError, Result};
use crate::inventory::InventorySheet;
use crate::models::Card;

const USER_AGENT: &str = "card_listings/1.0";
const FETCH_TIMEOUT: Duration = Duration::from_secs(60);

/// Where the inventory TSV lives
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InventorySource {
    Path(PathBuf),
    Url(String),
}

impl InventorySource {
    /// `http://` and `https://` locations are fetched, anything else is a file path.
    pub fn parse(location: &str) -> Self {
        if location.starts_with("http://") || location.starts_with("https://") {
            InventorySource::Url(location.to_string())
        } else {
            InventorySource::Path(PathBuf::from(location))
        }
    }

    /// Reads the raw inventory text
    pub async fn read_text(&self) -> Result<String> {
        match self {
            InventorySource::Path(path) => read_inventory_file(path),
            InventorySource::Url(url) => fetch_inventory(url).await,
        }
    }

    /// Reads and parses the inventory sheet
    pub async fn load_sheet(&self) -> Result<InventorySheet> {
        let raw = self.read_text().await?;
        let sheet = InventorySheet::parse(&raw);
        log::info!("Loaded {} inventory rows from {}", sheet.len(), self);
        Ok(sheet)
    }

    /// Reads the inventory and parses it into cards
    pub async fn load(&self) -> Result<Vec<Card>> {
        Ok(self.load_sheet().await?.cards())
    }
}

impl fmt::Display for InventorySource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InventorySource::Path(path) => write!(f, "{}", path.display()),
            InventorySource::Url(url) => write!(f, "{url}"),
        }
    }
}

pub fn read_inventory_file(path: &Path) -> Result<String> {
    log::debug!("Reading inventory file: {}", path.display());
    std::fs::read_to_string(path).map_err(|e| ListingError::io(path, e))
}

/// Fetches the inventory text from a URL. Non-success statuses are errors.
pub async fn fetch_inventory(url: &str) -> Result<String> {
    fetch_inventory_with_timeout(url, FETCH_TIMEOUT).await
}

/// Like [`fetch_inventory`], giving up once `timeout` has passed.
pub async fn fetch_inventory_with_timeout(url: &str, timeout: Duration) -> Result<String> {
    log::info!("Fetching inventory from: {}", url);

    let response = reqwest::Client::builder()
        .timeout(timeout)
        .build()?
        .get(url)
        .header("User-Agent", USER_AGENT)
        .send()
        .await?;

    if !response.status().is_success() {
        return Err(ListingError::HttpStatus(response.status()));
    }

    Ok(response.text().await?)
}
