//! Work entry domain entity and related types.
//!
//! A work entry records when a user started and (optionally) stopped working.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::{Validate, ValidationError};

use super::user::{User, UserDetail};

/// True when `end` is absent or not earlier than `start`
pub fn dates_in_order(start: &DateTime<Utc>, end: Option<&DateTime<Utc>>) -> bool {
    end.map_or(true, |end| end >= start)
}

/// Parse a client-supplied timestamp.
///
/// Accepts RFC 3339, `YYYY-MM-DDTHH:MM:SS`, `YYYY-MM-DD HH:MM:SS` and plain
/// `YYYY-MM-DD` (midnight). Values without an offset are read as UTC.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }

    for format in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(naive.and_utc());
        }
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

fn validate_entry_dates(entry: &WorkEntry) -> Result<(), ValidationError> {
    check_dates(&entry.start_date, entry.end_date.as_ref())
}

fn validate_new_entry_dates(entry: &NewWorkEntry) -> Result<(), ValidationError> {
    check_dates(&entry.start_date, entry.end_date.as_ref())
}

fn check_dates(start: &DateTime<Utc>, end: Option<&DateTime<Utc>>) -> Result<(), ValidationError> {
    if dates_in_order(start, end) {
        Ok(())
    } else {
        let mut error = ValidationError::new("date_range");
        error.message = Some("The end date must not be earlier than the start date".into());
        Err(error)
    }
}

/// Work entry domain entity with its owning user resolved
#[derive(Debug, Clone, PartialEq, Validate)]
#[validate(schema(function = "validate_entry_dates"))]
pub struct WorkEntry {
    pub id: i32,
    pub user: User,
    pub start_date: DateTime<Utc>,
    pub end_date: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl WorkEntry {
    /// Overwrite the date range; `user` and `created_at` are kept.
    pub fn apply_update(&mut self, start_date: DateTime<Utc>, end_date: Option<DateTime<Utc>>) {
        self.start_date = start_date;
        self.end_date = end_date;
        self.updated_at = Utc::now();
        self.deleted_at = None;
    }
}

/// A work entry that has not been persisted yet
#[derive(Debug, Clone, PartialEq, Validate)]
#[validate(schema(function = "validate_new_entry_dates"))]
pub struct NewWorkEntry {
    #[validate(range(min = 1, message = "The user ID must be a positive number"))]
    pub user_id: i32,
    pub start_date: DateTime<Utc>,
    pub end_date: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl NewWorkEntry {
    pub fn new(user_id: i32, start_date: DateTime<Utc>, end_date: Option<DateTime<Utc>>) -> Self {
        let now = Utc::now();
        Self {
            user_id,
            start_date,
            end_date,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Query parameters accepted by work entry create
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct CreateWorkEntryParams {
    /// Owning user ID
    #[param(example = "1")]
    pub user_id: Option<String>,
    /// Start of the work period
    #[param(example = "2024-01-01T08:00:00Z")]
    pub start_date: Option<String>,
    /// End of the work period (optional)
    #[param(example = "2024-01-01T16:00:00Z")]
    pub end_date: Option<String>,
}

/// Query parameters accepted by work entry update
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct UpdateWorkEntryParams {
    /// Start of the work period
    #[param(example = "2024-01-01T08:00:00Z")]
    pub start_date: Option<String>,
    /// End of the work period; omitted clears it
    #[param(example = "2024-01-01T16:00:00Z")]
    pub end_date: Option<String>,
}

/// Work entry record returned by the work entry endpoints
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct WorkEntryResponse {
    pub id: i32,
    pub user: UserDetail,
    pub start_date: DateTime<Utc>,
    pub end_date: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<WorkEntry> for WorkEntryResponse {
    fn from(entry: WorkEntry) -> Self {
        Self {
            id: entry.id,
            user: UserDetail::from(entry.user),
            start_date: entry.start_date,
            end_date: entry.end_date,
            created_at: entry.created_at,
            updated_at: entry.updated_at,
        }
    }
}
