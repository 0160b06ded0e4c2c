//! Historical climate and bloom-timing models

use serde::{Deserialize, Serialize};

/// Width, in days, of the window centered on each peak day when
/// measuring bloom/pollinator overlap.
pub const OVERLAP_WINDOW_DAYS: f64 = 15.0;

/// One year of historical climate and bloom observations
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ClimateRecord {
    pub year: i32,
    pub avg_temp: f64,
    pub peak_bloom_day: i32,
    pub pollinator_peak_day: i32,
}

impl ClimateRecord {
    /// Synchrony between this year's bloom and pollinator windows
    pub fn synchrony_index(&self) -> i32 {
        synchrony_index(self.peak_bloom_day as f64, self.pollinator_peak_day as f64).unwrap_or(0)
    }
}

/// Percentage (0-100) of temporal overlap between a crop's bloom window
/// and its pollinators' activity window, each [`OVERLAP_WINDOW_DAYS`]
/// wide and centered on its peak day-of-year.
pub fn synchrony_index(bloom_day: f64, pollinator_day: f64) -> Result<i32, &'static str> {
    if !bloom_day.is_finite() || !pollinator_day.is_finite() {
        return Err("Peak days must be finite numbers");
    }

    let half = OVERLAP_WINDOW_DAYS / 2.0;
    let bloom_start = bloom_day - half;
    let bloom_end = bloom_day + half;
    let poll_start = pollinator_day - half;
    let poll_end = pollinator_day + half;

    let overlap = (bloom_end.min(poll_end) - bloom_start.max(poll_start)).max(0.0);
    let index = (overlap / OVERLAP_WINDOW_DAYS * 100.0).round() as i32;

    Ok(index.clamp(0, 100))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_peaks_full_overlap() {
        assert_eq!(synchrony_index(100.0, 100.0).unwrap(), 100);
        assert_eq!(synchrony_index(1.0, 1.0).unwrap(), 100);
    }

    #[test]
    fn test_separated_peaks_no_overlap() {
        // Windows are 15 days wide, so peaks 15 or more days apart never overlap
        assert_eq!(synchrony_index(80.0, 95.0).unwrap(), 0);
        assert_eq!(synchrony_index(100.0, 200.0).unwrap(), 0);
        assert_eq!(synchrony_index(200.0, 100.0).unwrap(), 0);
    }

    #[test]
    fn test_partial_overlap() {
        // bloom window [80.5, 95.5], pollinator window [87.5, 102.5]
        // overlap [87.5, 95.5] = 8 days, round(8 / 15 * 100) = 53
        assert_eq!(synchrony_index(88.0, 95.0).unwrap(), 53);
    }

    #[test]
    fn test_symmetric() {
        assert_eq!(
            synchrony_index(88.0, 95.0).unwrap(),
            synchrony_index(95.0, 88.0).unwrap()
        );
        assert_eq!(
            synchrony_index(10.0, 17.5).unwrap(),
            synchrony_index(17.5, 10.0).unwrap()
        );
    }

    #[test]
    fn test_non_finite_inputs_rejected() {
        assert!(synchrony_index(f64::NAN, 95.0).is_err());
        assert!(synchrony_index(88.0, f64::INFINITY).is_err());
        assert!(synchrony_index(f64::NEG_INFINITY, f64::NAN).is_err());
    }

    #[test]
    fn test_record_method_matches_free_function() {
        let record = ClimateRecord {
            year: 2025,
            avg_temp: 25.9,
            peak_bloom_day: 88,
            pollinator_peak_day: 95,
        };
        assert_eq!(record.synchrony_index(), 53);
    }
}
