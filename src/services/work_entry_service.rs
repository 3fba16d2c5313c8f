//! Work entry service - Handles time-tracking records.
//!
//! Input checks run in a fixed order: required parameters, ID and date
//! parsing, date range, then existence lookups. Only a request that passes
//! all of them reaches a repository write.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use validator::Validate;

use super::{parse_date, parse_id, present};
use crate::config::{
    ERR_ENTRY_CREATE_INPUT, ERR_ENTRY_DATE_RANGE, ERR_ENTRY_DELETE_INPUT, ERR_ENTRY_GET_NOT_FOUND,
    ERR_ENTRY_NOT_FOUND, ERR_ENTRY_UPDATE_INPUT, ERR_USER_NOT_FOUND,
};
use crate::domain::{
    dates_in_order, CreateWorkEntryParams, NewWorkEntry, UpdateWorkEntryParams, WorkEntry,
};
use crate::errors::{AppError, AppResult, OptionExt};
use crate::infra::PersistenceGateway;

/// Work entry service trait for dependency injection.
#[async_trait]
pub trait WorkEntryService: Send + Sync {
    /// List every entry ordered by ID, each with its user
    async fn list_work_entries(&self) -> AppResult<Vec<WorkEntry>>;

    /// Get entry by ID
    async fn get_work_entry(&self, id: &str) -> AppResult<WorkEntry>;

    /// Create an entry for an existing user
    async fn create_work_entry(&self, params: CreateWorkEntryParams) -> AppResult<WorkEntry>;

    /// Overwrite an entry's date range
    async fn update_work_entry(
        &self,
        id: &str,
        params: UpdateWorkEntryParams,
    ) -> AppResult<WorkEntry>;

    /// Physically delete an entry
    async fn delete_work_entry(&self, id: &str) -> AppResult<()>;
}

/// Concrete implementation of WorkEntryService over a persistence gateway.
pub struct WorkEntryManager<P: PersistenceGateway> {
    persistence: Arc<P>,
}

impl<P: PersistenceGateway> WorkEntryManager<P> {
    /// Create new work entry service instance
    pub fn new(persistence: Arc<P>) -> Self {
        Self { persistence }
    }
}

/// Parse the date pair and enforce `end >= start`
fn date_range(
    raw_start: &str,
    raw_end: Option<String>,
) -> AppResult<(DateTime<Utc>, Option<DateTime<Utc>>)> {
    let start = parse_date(raw_start)?;
    let end = present(raw_end).map(|raw| parse_date(&raw)).transpose()?;

    if !dates_in_order(&start, end.as_ref()) {
        tracing::warn!(%start, ?end, "Work entry rejected: end date before start date");
        return Err(AppError::invalid_date_range(ERR_ENTRY_DATE_RANGE));
    }

    Ok((start, end))
}

#[async_trait]
impl<P: PersistenceGateway> WorkEntryService for WorkEntryManager<P> {
    async fn list_work_entries(&self) -> AppResult<Vec<WorkEntry>> {
        let entries = self.persistence.work_entries().list().await?;
        tracing::debug!(count = entries.len(), "Listed work entries");
        Ok(entries)
    }

    async fn get_work_entry(&self, id: &str) -> AppResult<WorkEntry> {
        let Some(id) = parse_id(id) else {
            return Err(AppError::not_found(ERR_ENTRY_GET_NOT_FOUND));
        };

        self.persistence
            .work_entries()
            .find_by_id(id)
            .await?
            .ok_or_not_found(ERR_ENTRY_GET_NOT_FOUND)
    }

    async fn create_work_entry(&self, params: CreateWorkEntryParams) -> AppResult<WorkEntry> {
        let (Some(raw_user_id), Some(raw_start)) =
            (present(params.user_id), present(params.start_date))
        else {
            tracing::warn!("Work entry create rejected: userId or startDate missing");
            return Err(AppError::invalid_input(ERR_ENTRY_CREATE_INPUT));
        };

        let user_id = parse_id(&raw_user_id)
            .ok_or_else(|| AppError::invalid_input(ERR_ENTRY_CREATE_INPUT))?;
        let (start, end) = date_range(&raw_start, params.end_date)?;

        self.persistence
            .users()
            .find_by_id(user_id)
            .await?
            .ok_or_not_found(ERR_USER_NOT_FOUND)?;

        let entry = NewWorkEntry::new(user_id, start, end);
        entry.validate()?;

        let created = self.persistence.work_entries().create(entry).await?;
        tracing::info!(entry_id = created.id, user_id, "Work entry created");
        Ok(created)
    }

    async fn update_work_entry(
        &self,
        id: &str,
        params: UpdateWorkEntryParams,
    ) -> AppResult<WorkEntry> {
        let (Some(id), Some(raw_start)) = (parse_id(id), present(params.start_date)) else {
            tracing::warn!("Work entry update rejected: id or startDate missing");
            return Err(AppError::invalid_input(ERR_ENTRY_UPDATE_INPUT));
        };

        let (start, end) = date_range(&raw_start, params.end_date)?;

        let repo = self.persistence.work_entries();
        let mut entry = repo
            .find_by_id(id)
            .await?
            .ok_or_not_found(ERR_ENTRY_NOT_FOUND)?;

        entry.apply_update(start, end);
        entry.validate()?;

        let updated = repo.update(entry).await?;
        tracing::info!(entry_id = updated.id, "Work entry updated");
        Ok(updated)
    }

    async fn delete_work_entry(&self, id: &str) -> AppResult<()> {
        let id = parse_id(id).ok_or_else(|| AppError::invalid_input(ERR_ENTRY_DELETE_INPUT))?;

        let repo = self.persistence.work_entries();
        repo.find_by_id(id)
            .await?
            .ok_or_not_found(ERR_ENTRY_NOT_FOUND)?;

        repo.delete(id).await?;
        tracing::info!(entry_id = id, "Work entry deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ERR_INVALID_DATE;
    use crate::infra::{MockUserRepository, MockWorkEntryRepository};
    use crate::services::testing::{at, sample_entry, sample_user, TestPersistence};
    use mockall::predicate::eq;
    use tokio_test::{assert_err, assert_ok};

    fn service(
        users: MockUserRepository,
        entries: MockWorkEntryRepository,
    ) -> WorkEntryManager<TestPersistence> {
        WorkEntryManager::new(Arc::new(TestPersistence::new(users, entries)))
    }

    fn create_params(
        user_id: Option<&str>,
        start: Option<&str>,
        end: Option<&str>,
    ) -> CreateWorkEntryParams {
        CreateWorkEntryParams {
            user_id: user_id.map(str::to_string),
            start_date: start.map(str::to_string),
            end_date: end.map(str::to_string),
        }
    }

    fn update_params(start: Option<&str>, end: Option<&str>) -> UpdateWorkEntryParams {
        UpdateWorkEntryParams {
            start_date: start.map(str::to_string),
            end_date: end.map(str::to_string),
        }
    }

    #[tokio::test]
    async fn test_list_work_entries() {
        let mut entries = MockWorkEntryRepository::new();
        entries
            .expect_list()
            .returning(|| Ok(vec![sample_entry(1, 1), sample_entry(2, 1)]));

        let list = assert_ok!(
            service(MockUserRepository::new(), entries)
                .list_work_entries()
                .await
        );
        assert_eq!(list.len(), 2);
        assert_eq!(list[0].user.id, 1);
    }

    #[tokio::test]
    async fn test_get_work_entry_not_found() {
        let mut entries = MockWorkEntryRepository::new();
        entries.expect_find_by_id().returning(|_| Ok(None));

        let err = assert_err!(
            service(MockUserRepository::new(), entries)
                .get_work_entry("12")
                .await
        );
        assert!(matches!(err, AppError::NotFound(ref m) if m == ERR_ENTRY_GET_NOT_FOUND));
    }

    #[tokio::test]
    async fn test_create_work_entry_success() {
        let mut users = MockUserRepository::new();
        users
            .expect_find_by_id()
            .with(eq(1))
            .returning(|id| Ok(Some(sample_user(id))));

        let mut entries = MockWorkEntryRepository::new();
        entries
            .expect_create()
            .times(1)
            .withf(|entry| entry.user_id == 1 && entry.end_date.is_none())
            .returning(|entry| {
                Ok(WorkEntry {
                    id: 10,
                    user: sample_user(entry.user_id),
                    start_date: entry.start_date,
                    end_date: entry.end_date,
                    created_at: entry.created_at,
                    updated_at: entry.updated_at,
                    deleted_at: None,
                })
            });

        let entry = assert_ok!(
            service(users, entries)
                .create_work_entry(create_params(Some("1"), Some("2024-01-01"), None))
                .await
        );
        assert_eq!(entry.id, 10);
        assert_eq!(entry.user.id, 1);
    }

    #[tokio::test]
    async fn test_create_work_entry_missing_fields() {
        let mut entries = MockWorkEntryRepository::new();
        entries.expect_create().never();
        let service = service(MockUserRepository::new(), entries);

        let err = assert_err!(
            service
                .create_work_entry(create_params(None, Some("2024-01-01"), None))
                .await
        );
        assert!(matches!(err, AppError::InvalidInput(ref m) if m == ERR_ENTRY_CREATE_INPUT));

        let err = assert_err!(
            service
                .create_work_entry(create_params(Some("1"), Some(""), None))
                .await
        );
        assert!(matches!(err, AppError::InvalidInput(_)));

        let err = assert_err!(
            service
                .create_work_entry(create_params(Some("one"), Some("2024-01-01"), None))
                .await
        );
        assert!(matches!(err, AppError::InvalidInput(_)));
    }

    #[tokio::test]
    async fn test_create_work_entry_reversed_dates_never_writes() {
        let mut users = MockUserRepository::new();
        users.expect_find_by_id().never();
        let mut entries = MockWorkEntryRepository::new();
        entries.expect_create().never();

        let err = assert_err!(
            service(users, entries)
                .create_work_entry(create_params(
                    Some("1"),
                    Some("2024-02-01"),
                    Some("2024-01-01")
                ))
                .await
        );
        assert!(matches!(err, AppError::InvalidDateRange(ref m) if m == ERR_ENTRY_DATE_RANGE));
    }

    #[tokio::test]
    async fn test_create_work_entry_unknown_user_never_writes() {
        let mut users = MockUserRepository::new();
        users
            .expect_find_by_id()
            .with(eq(999))
            .returning(|_| Ok(None));
        let mut entries = MockWorkEntryRepository::new();
        entries.expect_create().never();

        let err = assert_err!(
            service(users, entries)
                .create_work_entry(create_params(Some("999"), Some("2024-01-01"), None))
                .await
        );
        assert!(matches!(err, AppError::NotFound(ref m) if m == ERR_USER_NOT_FOUND));
    }

    #[tokio::test]
    async fn test_create_work_entry_bad_date() {
        let mut entries = MockWorkEntryRepository::new();
        entries.expect_create().never();

        let err = assert_err!(
            service(MockUserRepository::new(), entries)
                .create_work_entry(create_params(Some("1"), Some("monday"), None))
                .await
        );
        assert!(matches!(err, AppError::InvalidInput(ref m) if m == ERR_INVALID_DATE));
    }

    #[tokio::test]
    async fn test_update_work_entry_keeps_user_and_created_at() {
        let mut entries = MockWorkEntryRepository::new();
        entries
            .expect_find_by_id()
            .with(eq(5))
            .returning(|id| Ok(Some(sample_entry(id, 2))));
        entries.expect_update().times(1).returning(Ok);

        let entry = assert_ok!(
            service(MockUserRepository::new(), entries)
                .update_work_entry("5", update_params(Some("2024-01-10T08:00:00Z"), None))
                .await
        );
        assert_eq!(entry.user.id, 2);
        assert_eq!(entry.created_at, at(1));
        assert_eq!(entry.start_date, at(10));
        assert_eq!(entry.end_date, None);
        assert!(entry.updated_at > at(1));
    }

    #[tokio::test]
    async fn test_update_work_entry_reversed_dates_never_writes() {
        let mut entries = MockWorkEntryRepository::new();
        entries.expect_find_by_id().never();
        entries.expect_update().never();

        let err = assert_err!(
            service(MockUserRepository::new(), entries)
                .update_work_entry("5", update_params(Some("2024-02-01"), Some("2024-01-01")))
                .await
        );
        assert!(matches!(err, AppError::InvalidDateRange(_)));
    }

    #[tokio::test]
    async fn test_update_work_entry_bad_input() {
        let mut entries = MockWorkEntryRepository::new();
        entries.expect_update().never();
        let service = service(MockUserRepository::new(), entries);

        let err = assert_err!(
            service
                .update_work_entry("abc", update_params(Some("2024-01-01"), None))
                .await
        );
        assert!(matches!(err, AppError::InvalidInput(ref m) if m == ERR_ENTRY_UPDATE_INPUT));

        let err = assert_err!(
            service
                .update_work_entry("5", update_params(None, Some("2024-01-01")))
                .await
        );
        assert!(matches!(err, AppError::InvalidInput(_)));
    }

    #[tokio::test]
    async fn test_update_work_entry_not_found() {
        let mut entries = MockWorkEntryRepository::new();
        entries.expect_find_by_id().returning(|_| Ok(None));
        entries.expect_update().never();

        let err = assert_err!(
            service(MockUserRepository::new(), entries)
                .update_work_entry("5", update_params(Some("2024-01-01"), None))
                .await
        );
        assert!(matches!(err, AppError::NotFound(ref m) if m == ERR_ENTRY_NOT_FOUND));
    }

    #[tokio::test]
    async fn test_delete_work_entry() {
        let mut entries = MockWorkEntryRepository::new();
        entries
            .expect_find_by_id()
            .returning(|id| Ok(Some(sample_entry(id, 1))));
        entries
            .expect_delete()
            .with(eq(6))
            .times(1)
            .returning(|_| Ok(()));

        assert_ok!(
            service(MockUserRepository::new(), entries)
                .delete_work_entry("6")
                .await
        );
    }

    #[tokio::test]
    async fn test_delete_work_entry_errors() {
        let mut entries = MockWorkEntryRepository::new();
        entries.expect_find_by_id().returning(|_| Ok(None));
        entries.expect_delete().never();
        let service = service(MockUserRepository::new(), entries);

        let err = assert_err!(service.delete_work_entry("").await);
        assert!(matches!(err, AppError::InvalidInput(ref m) if m == ERR_ENTRY_DELETE_INPUT));

        let err = assert_err!(service.delete_work_entry("6").await);
        assert!(matches!(err, AppError::NotFound(ref m) if m == ERR_ENTRY_NOT_FOUND));
    }
}
