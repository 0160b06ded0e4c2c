//! Climate history service
//!
//! Owns the read-only store of yearly climate and bloom-timing
//! observations, seeded once with a synthetic warming-trend series.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use sqlx::PgPool;

use shared::ClimateRecord;

use crate::error::AppResult;

/// First year of the synthetic series
pub const BASE_YEAR: i32 = 2006;
/// Number of synthetic years generated when the store is empty
pub const SEED_YEARS: usize = 20;
/// Baseline average temperature in degrees Celsius
const BASE_TEMP: f64 = 24.0;
/// Linear warming applied per year on top of the baseline
const WARMING_PER_YEAR: f64 = 0.1;
/// Day-of-year the bloom peaks at the baseline temperature
const BLOOM_BASE_DAY: f64 = 100.0;
/// Days the bloom peak shifts earlier per degree of warming
const BLOOM_SHIFT_PER_DEGREE: f64 = 5.0;
/// Lower edge of the band the pollinator peak is drawn from
const POLLINATOR_BASE_DAY: f64 = 95.0;

/// Climate record store
#[derive(Clone)]
pub struct ClimateService {
    db: PgPool,
}

/// Row shape for climate_records
#[derive(Debug, sqlx::FromRow)]
struct ClimateRecordRow {
    year: i32,
    avg_temp: f64,
    peak_bloom_day: i32,
    pollinator_peak_day: i32,
}

impl From<ClimateRecordRow> for ClimateRecord {
    fn from(row: ClimateRecordRow) -> Self {
        ClimateRecord {
            year: row.year,
            avg_temp: row.avg_temp,
            peak_bloom_day: row.peak_bloom_day,
            pollinator_peak_day: row.pollinator_peak_day,
        }
    }
}

impl ClimateService {
    /// Create a new ClimateService instance
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// Seed the store with the synthetic series if it holds no records.
    /// Returns the number of records inserted (0 when already seeded).
    pub async fn seed_if_empty(&self, rng_seed: u64) -> AppResult<usize> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM climate_records")
            .fetch_one(&self.db)
            .await?;

        if count > 0 {
            return Ok(0);
        }

        let mut rng = StdRng::seed_from_u64(rng_seed);
        let records = generate_seed_records(&mut rng);

        for record in &records {
            sqlx::query(
                r#"
                INSERT INTO climate_records (year, avg_temp, peak_bloom_day, pollinator_peak_day)
                VALUES ($1, $2, $3, $4)
                "#,
            )
            .bind(record.year)
            .bind(record.avg_temp)
            .bind(record.peak_bloom_day)
            .bind(record.pollinator_peak_day)
            .execute(&self.db)
            .await?;
        }

        Ok(records.len())
    }

    /// All records, ascending by year
    pub async fn list_all(&self) -> AppResult<Vec<ClimateRecord>> {
        let rows = sqlx::query_as::<_, ClimateRecordRow>(
            r#"
            SELECT year, avg_temp, peak_bloom_day, pollinator_peak_day
            FROM climate_records
            ORDER BY year ASC
            "#,
        )
        .fetch_all(&self.db)
        .await?;

        Ok(rows.into_iter().map(ClimateRecord::from).collect())
    }

    /// Most recent year's record, if any
    pub async fn latest(&self) -> AppResult<Option<ClimateRecord>> {
        let row = sqlx::query_as::<_, ClimateRecordRow>(
            r#"
            SELECT year, avg_temp, peak_bloom_day, pollinator_peak_day
            FROM climate_records
            ORDER BY year DESC
            LIMIT 1
            "#,
        )
        .fetch_optional(&self.db)
        .await?;

        Ok(row.map(ClimateRecord::from))
    }
}

/// Generate the synthetic warming-trend series.
///
/// Average temperature rises linearly with bounded noise; the bloom peak
/// shifts earlier as temperature rises above the baseline; the pollinator
/// peak is drawn from a narrow band independent of temperature. That
/// asymmetry is what drives the desynchronization risk the advisories
/// describe, and it must hold for every generated series.
pub fn generate_seed_records(rng: &mut impl Rng) -> Vec<ClimateRecord> {
    (0..SEED_YEARS)
        .map(|i| {
            let year = BASE_YEAR + i as i32;
            let avg_temp = BASE_TEMP + i as f64 * WARMING_PER_YEAR + rng.gen_range(0.0..0.5);
            let peak_bloom_day = (BLOOM_BASE_DAY
                - (avg_temp - BASE_TEMP) * BLOOM_SHIFT_PER_DEGREE
                + rng.gen_range(0.0..2.0))
            .round() as i32;
            let pollinator_peak_day = (POLLINATOR_BASE_DAY + rng.gen_range(0.0..5.0)).round() as i32;

            ClimateRecord {
                year,
                avg_temp,
                peak_bloom_day,
                pollinator_peak_day,
            }
        })
        .collect()
}
