//! Farmer submission validation tests

use proptest::prelude::*;
use shared::{
    validate_latitude, validate_longitude, validate_submission, CropCategory, NewFarmerSubmission,
};

fn submission() -> NewFarmerSubmission {
    NewFarmerSubmission {
        crop_name: "Mango".to_string(),
        location_name: "Hyderabad".to_string(),
        latitude: 17.385,
        longitude: 78.4867,
        sowing_date: "2024-01-15".to_string(),
        crop_category: CropCategory::PollinatorDependent,
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod unit_tests {
    use super::*;

    #[test]
    fn test_reference_submission_is_valid() {
        assert!(validate_submission(&submission()).is_ok());
    }

    #[test]
    fn test_self_pollinating_category_is_valid() {
        let mut input = submission();
        input.crop_category = CropCategory::SelfPollinating;
        assert!(validate_submission(&input).is_ok());
    }

    #[test]
    fn test_missing_required_fields_rejected() {
        let mut input = submission();
        input.crop_name = " ".to_string();
        assert!(validate_submission(&input).is_err());

        let mut input = submission();
        input.location_name = "".to_string();
        assert!(validate_submission(&input).is_err());

        let mut input = submission();
        input.sowing_date = "".to_string();
        assert!(validate_submission(&input).is_err());
    }

    #[test]
    fn test_malformed_sowing_date_rejected() {
        for bad_date in ["2024/01/15", "15-01-2024", "January 15", "2024-02-30"] {
            let mut input = submission();
            input.sowing_date = bad_date.to_string();
            assert!(
                validate_submission(&input).is_err(),
                "accepted {:?}",
                bad_date
            );
        }
    }

    #[test]
    fn test_out_of_range_coordinates_rejected() {
        let mut input = submission();
        input.latitude = 91.0;
        assert!(validate_submission(&input).is_err());

        let mut input = submission();
        input.longitude = -181.0;
        assert!(validate_submission(&input).is_err());
    }
}

// ============================================================================
// Property-Based Tests
// ============================================================================

#[cfg(test)]
mod property_tests {
    use super::*;

    /// Strategy for generating valid latitudes
    fn latitude_strategy() -> impl Strategy<Value = f64> {
        (-9000i64..=9000i64).prop_map(|n| n as f64 / 100.0)
    }

    /// Strategy for generating valid longitudes
    fn longitude_strategy() -> impl Strategy<Value = f64> {
        (-18000i64..=18000i64).prop_map(|n| n as f64 / 100.0)
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// All in-range coordinates validate
        #[test]
        fn prop_valid_coordinates_accepted(
            lat in latitude_strategy(),
            lon in longitude_strategy()
        ) {
            prop_assert!(validate_latitude(lat).is_ok());
            prop_assert!(validate_longitude(lon).is_ok());

            let mut input = submission();
            input.latitude = lat;
            input.longitude = lon;
            prop_assert!(validate_submission(&input).is_ok());
        }

        /// Latitudes beyond the poles are rejected
        #[test]
        fn prop_out_of_range_latitude_rejected(offset in 1i64..=1000i64) {
            let above = 90.0 + offset as f64 / 10.0;
            prop_assert!(validate_latitude(above).is_err());
            prop_assert!(validate_latitude(-above).is_err());
        }

        /// Longitudes beyond the antimeridian are rejected
        #[test]
        fn prop_out_of_range_longitude_rejected(offset in 1i64..=1000i64) {
            let beyond = 180.0 + offset as f64 / 10.0;
            prop_assert!(validate_longitude(beyond).is_err());
            prop_assert!(validate_longitude(-beyond).is_err());
        }

        /// Blank crop names are rejected regardless of padding
        #[test]
        fn prop_blank_crop_name_rejected(spaces in 0usize..=8usize) {
            let mut input = submission();
            input.crop_name = " ".repeat(spaces);
            prop_assert!(validate_submission(&input).is_err());
        }

        /// Non-blank crop and location names are accepted
        #[test]
        fn prop_non_blank_names_accepted(name in "[A-Za-z][A-Za-z ]{0,30}") {
            let mut input = submission();
            input.crop_name = name.clone();
            input.location_name = name;
            prop_assert!(validate_submission(&input).is_ok());
        }
    }
}
