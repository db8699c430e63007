use serde::{Deserialize, Serialize};

use crate::text::{infer_auto, infer_serial, infer_year};

/// One parsed inventory row plus the attributes derived from its free text.
///
/// Every text field is already whitespace-cleaned; a column missing from the
/// sheet shows up as an empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub card_name: String,
    pub player_name: String,
    pub sport: String,
    pub card_number: String,
    pub features: String,
    pub image_url: String,
    pub league: String,
    pub team: String,
    pub season: String,
    pub condition: String,
    pub brand: String,
    pub card_set: String,

    // derived
    pub year: String,
    pub serial: String,
    pub is_auto: bool,
}

impl Card {
    /// Recomputes `year`, `serial` and `is_auto` from the raw text fields
    pub fn derive_fields(&mut self) {
        self.year = infer_year(&self.card_name, &self.card_set);
        self.serial = infer_serial(&self.features, &self.card_name);
        self.is_auto = infer_auto(&self.features, &self.card_name);
    }

    /// Returns the card with its derived fields filled in
    pub fn with_derived_fields(mut self) -> Self {
        self.derive_fields();
        self
    }

    /// Serial number as printed on listings, e.g. "/25", or empty
    pub fn serial_label(&self) -> String {
        if self.serial.is_empty() {
            String::new()
        } else {
            format!("/{}", self.serial)
        }
    }

    /// "Yes" or "No" for the autograph item specific
    pub fn autograph_label(&self) -> &'static str {
        if self.is_auto {
            "Yes"
        } else {
            "No"
        }
    }

    /// Returns true if the card carries a limited print run number
    pub fn is_serialized(&self) -> bool {
        !self.serial.is_empty()
    }
}
