//! Farmer submission service
//!
//! Append-and-list store for crop/location/sowing records. Submissions
//! are validated before the write, never updated or deleted after it.

use chrono::{DateTime, Utc};
use sqlx::PgPool;

use shared::{validate_submission, CropCategory, FarmerSubmission, NewFarmerSubmission};

use crate::error::{AppError, AppResult};

/// Farmer submission store
#[derive(Clone)]
pub struct FarmerInputService {
    db: PgPool,
}

/// Row shape for farmer_inputs
#[derive(Debug, sqlx::FromRow)]
struct FarmerSubmissionRow {
    id: i64,
    crop_name: String,
    location_name: String,
    latitude: f64,
    longitude: f64,
    sowing_date: String,
    crop_category: String,
    created_at: DateTime<Utc>,
}

impl TryFrom<FarmerSubmissionRow> for FarmerSubmission {
    type Error = AppError;

    fn try_from(row: FarmerSubmissionRow) -> Result<Self, Self::Error> {
        let crop_category = row
            .crop_category
            .parse::<CropCategory>()
            .map_err(|e| AppError::Internal(format!("Stored submission {}: {}", row.id, e)))?;

        Ok(FarmerSubmission {
            id: row.id,
            crop_name: row.crop_name,
            location_name: row.location_name,
            latitude: row.latitude,
            longitude: row.longitude,
            sowing_date: row.sowing_date,
            crop_category,
            created_at: row.created_at,
        })
    }
}

impl FarmerInputService {
    /// Create a new FarmerInputService instance
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// Validate and persist a submission, returning the assigned id.
    /// The id and server timestamp are assigned by the database in a
    /// single statement, which keeps created_at monotonic with id.
    pub async fn create(&self, input: NewFarmerSubmission) -> AppResult<i64> {
        validate_submission(&input).map_err(AppError::ValidationError)?;

        let id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO farmer_inputs (crop_name, location_name, latitude, longitude, sowing_date, crop_category)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id
            "#,
        )
        .bind(&input.crop_name)
        .bind(&input.location_name)
        .bind(input.latitude)
        .bind(input.longitude)
        .bind(&input.sowing_date)
        .bind(input.crop_category.as_str())
        .fetch_one(&self.db)
        .await?;

        Ok(id)
    }

    /// All submissions, newest first
    pub async fn list_all(&self) -> AppResult<Vec<FarmerSubmission>> {
        let rows = sqlx::query_as::<_, FarmerSubmissionRow>(
            r#"
            SELECT id, crop_name, location_name, latitude, longitude, sowing_date, crop_category, created_at
            FROM farmer_inputs
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .fetch_all(&self.db)
        .await?;

        rows.into_iter().map(FarmerSubmission::try_from).collect()
    }

    /// Fetch one submission by id
    pub async fn get(&self, id: i64) -> AppResult<FarmerSubmission> {
        let row = sqlx::query_as::<_, FarmerSubmissionRow>(
            r#"
            SELECT id, crop_name, location_name, latitude, longitude, sowing_date, crop_category, created_at
            FROM farmer_inputs
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.db)
        .await?
        .ok_or_else(|| AppError::NotFound("Farmer submission".to_string()))?;

        FarmerSubmission::try_from(row)
    }
}
