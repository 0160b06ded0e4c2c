//! Validation utilities for farmer submissions

use chrono::NaiveDate;

use crate::models::NewFarmerSubmission;

/// Validate that a required text field is present and non-blank
pub fn validate_required_text(value: &str, field: &'static str) -> Result<(), String> {
    if value.trim().is_empty() {
        return Err(format!("{} must not be empty", field));
    }
    Ok(())
}

/// Validate an ISO date string (YYYY-MM-DD)
pub fn validate_iso_date(value: &str) -> Result<(), &'static str> {
    if value.trim().is_empty() {
        return Err("Sowing date must not be empty");
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map(|_| ())
        .map_err(|_| "Sowing date must be an ISO date (YYYY-MM-DD)")
}

/// Validate a latitude in decimal degrees
pub fn validate_latitude(value: f64) -> Result<(), &'static str> {
    if !value.is_finite() {
        return Err("Latitude must be a finite number");
    }
    if !(-90.0..=90.0).contains(&value) {
        return Err("Latitude must be between -90 and 90 degrees");
    }
    Ok(())
}

/// Validate a longitude in decimal degrees
pub fn validate_longitude(value: f64) -> Result<(), &'static str> {
    if !value.is_finite() {
        return Err("Longitude must be a finite number");
    }
    if !(-180.0..=180.0).contains(&value) {
        return Err("Longitude must be between -180 and 180 degrees");
    }
    Ok(())
}

/// Validate a farmer submission before it is persisted
pub fn validate_submission(input: &NewFarmerSubmission) -> Result<(), String> {
    validate_required_text(&input.crop_name, "Crop name")?;
    validate_required_text(&input.location_name, "Location name")?;
    validate_iso_date(&input.sowing_date).map_err(str::to_string)?;
    validate_latitude(input.latitude).map_err(str::to_string)?;
    validate_longitude(input.longitude).map_err(str::to_string)?;
    Ok(())
}
