// src/domain/listing.rs

use crate::errors::ServiceError;
use serde::{Deserialize, Deserializer, Serialize};

pub const COMP_SLOTS: usize = 4;
pub const FEATURE_SLOTS: usize = 5;

/// A comparable sale. An empty `address` marks the slot as unused.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Comp {
    #[serde(deserialize_with = "nullable")]
    pub address: String,
    #[serde(deserialize_with = "nullable")]
    pub details: String,
}

impl Comp {
    #[cfg(test)]
    pub fn new(address: impl Into<String>, details: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            details: details.into(),
        }
    }
}

/// Everything the form collects about one property.
///
/// The JSON shape matches the payload stored in the `data` column, so rows
/// written by older clients stay readable. Missing keys and `null` values
/// come back as empty strings; a wrong shape (e.g. three comps) is an error.
/// Blank strings mean "not provided".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ListingRecord {
    #[serde(deserialize_with = "nullable")]
    pub address: String,
    /// Free text, shown exactly as entered.
    #[serde(deserialize_with = "nullable")]
    pub asking_price: String,
    #[serde(deserialize_with = "nullable")]
    pub short_description: String,

    // Structural facts are free text ("1483/1873" is a valid sqft).
    #[serde(deserialize_with = "nullable")]
    pub beds: String,
    #[serde(deserialize_with = "nullable")]
    pub baths: String,
    #[serde(deserialize_with = "nullable")]
    pub sqft: String,
    #[serde(deserialize_with = "nullable")]
    pub year_built: String,

    #[serde(deserialize_with = "nullable")]
    pub arv: String,
    #[serde(deserialize_with = "nullable")]
    pub rehab_estimate: String,
    #[serde(deserialize_with = "nullable")]
    pub monthly_rent: String,

    // Media references are only linked, never fetched.
    #[serde(deserialize_with = "nullable")]
    pub photos_link: String,
    #[serde(deserialize_with = "nullable")]
    pub hero_image_url: String,
    #[serde(deserialize_with = "nullable")]
    pub photo1_url: String,
    #[serde(deserialize_with = "nullable")]
    pub photo2_url: String,
    #[serde(deserialize_with = "nullable")]
    pub map_image_url: String,

    pub comps: [Comp; COMP_SLOTS],

    #[serde(deserialize_with = "nullable")]
    pub contact_name: String,
    #[serde(deserialize_with = "nullable")]
    pub call_number: String,
    #[serde(deserialize_with = "nullable")]
    pub text_number: String,
    #[serde(deserialize_with = "nullable")]
    pub email: String,

    #[serde(deserialize_with = "nullable")]
    pub show_features: bool,
    #[serde(deserialize_with = "nullable_slots")]
    pub features: [String; FEATURE_SLOTS],
}

impl ListingRecord {
    /// Builds a record from submitted form fields.
    ///
    /// Comp and feature inputs are numbered from 1 (`comp1Address`,
    /// `comp1Details`, `feature1`, ...). Unknown keys and out-of-range slots
    /// are ignored. `showFeatures` is a checkbox: any value turns it on.
    pub fn from_form<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut record = ListingRecord::default();

        for (key, value) in pairs {
            let key = key.as_ref();
            let value: String = value.into();

            match key {
                "address" => record.address = value,
                "askingPrice" => record.asking_price = value,
                "shortDescription" => record.short_description = value,
                "beds" => record.beds = value,
                "baths" => record.baths = value,
                "sqft" => record.sqft = value,
                "yearBuilt" => record.year_built = value,
                "arv" => record.arv = value,
                "rehabEstimate" => record.rehab_estimate = value,
                "monthlyRent" => record.monthly_rent = value,
                "photosLink" => record.photos_link = value,
                "heroImageUrl" => record.hero_image_url = value,
                "photo1Url" => record.photo1_url = value,
                "photo2Url" => record.photo2_url = value,
                "mapImageUrl" => record.map_image_url = value,
                "contactName" => record.contact_name = value,
                "callNumber" => record.call_number = value,
                "textNumber" => record.text_number = value,
                "email" => record.email = value,
                "showFeatures" => record.show_features = true,
                _ => record.set_slot(key, value),
            }
        }

        record
    }

    fn set_slot(&mut self, key: &str, value: String) {
        if let Some(rest) = key.strip_prefix("comp") {
            let (index, field) = match rest.find(|c: char| !c.is_ascii_digit()) {
                Some(split) => rest.split_at(split),
                None => return,
            };
            let Some(comp) = slot_index(index, COMP_SLOTS).map(|i| &mut self.comps[i]) else {
                return;
            };
            match field {
                "Address" => comp.address = value,
                "Details" => comp.details = value,
                _ => {}
            }
        } else if let Some(index) = key.strip_prefix("feature") {
            if let Some(i) = slot_index(index, FEATURE_SLOTS) {
                self.features[i] = value;
            }
        }
    }

    /// The value duplicated into the storage row for indexing.
    pub fn display_address(&self) -> &str {
        &self.address
    }

    /// Checks the record before it is persisted. Only the address is
    /// required; every other field may be left blank.
    pub fn validate(&self) -> Result<(), ServiceError> {
        if self.address.trim().is_empty() {
            return Err(ServiceError::Invalid(
                "A property address is required.".to_string(),
            ));
        }
        Ok(())
    }
}

/// Parses a 1-based slot number into a 0-based index.
fn slot_index(raw: &str, slots: usize) -> Option<usize> {
    raw.parse::<usize>()
        .ok()
        .filter(|n| (1..=slots).contains(n))
        .map(|n| n - 1)
}

fn nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn nullable_slots<'de, D>(deserializer: D) -> Result<[String; FEATURE_SLOTS], D::Error>
where
    D: Deserializer<'de>,
{
    let slots = Option::<[Option<String>; FEATURE_SLOTS]>::deserialize(deserializer)?;
    Ok(slots
        .map(|s| s.map(Option::unwrap_or_default))
        .unwrap_or_default())
}
