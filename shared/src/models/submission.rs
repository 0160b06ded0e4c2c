//! Farmer submission models

use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Whether a crop relies on insect pollination
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum CropCategory {
    PollinatorDependent,
    SelfPollinating,
}

impl CropCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            CropCategory::PollinatorDependent => "pollinator-dependent",
            CropCategory::SelfPollinating => "self-pollinating",
        }
    }
}

impl FromStr for CropCategory {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pollinator-dependent" => Ok(CropCategory::PollinatorDependent),
            "self-pollinating" => Ok(CropCategory::SelfPollinating),
            _ => Err("Unknown crop category"),
        }
    }
}

/// A stored crop/location/sowing record submitted by a farmer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FarmerSubmission {
    pub id: i64,
    pub crop_name: String,
    pub location_name: String,
    pub latitude: f64,
    pub longitude: f64,
    /// ISO date (YYYY-MM-DD)
    pub sowing_date: String,
    pub crop_category: CropCategory,
    pub created_at: DateTime<Utc>,
}

/// Request body for submitting a farmer record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewFarmerSubmission {
    pub crop_name: String,
    pub location_name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub sowing_date: String,
    pub crop_category: CropCategory,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_crop_category_wire_format() {
        assert_eq!(
            serde_json::to_string(&CropCategory::PollinatorDependent).unwrap(),
            "\"pollinator-dependent\""
        );
        let parsed: CropCategory = serde_json::from_str("\"self-pollinating\"").unwrap();
        assert_eq!(parsed, CropCategory::SelfPollinating);
    }

    #[test]
    fn test_crop_category_round_trip_str() {
        for category in [CropCategory::PollinatorDependent, CropCategory::SelfPollinating] {
            assert_eq!(category.as_str().parse::<CropCategory>().unwrap(), category);
        }
    }

    #[test]
    fn test_crop_category_unknown_rejected() {
        assert!("wind-pollinated".parse::<CropCategory>().is_err());
        assert!("".parse::<CropCategory>().is_err());
    }
}
