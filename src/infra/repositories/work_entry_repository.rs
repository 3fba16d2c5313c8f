//! Work entry repository implementation.
//!
//! Reads always join the owning user so callers get a complete [`WorkEntry`].

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, Set};

use super::entities::user::{self, Entity as UserEntity};
use super::entities::work_entry::{self, ActiveModel, Entity as WorkEntryEntity};
use crate::config::ERR_ENTRY_NOT_FOUND;
use crate::domain::{NewWorkEntry, WorkEntry};
use crate::errors::{AppError, AppResult, OptionExt};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Work entry repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait WorkEntryRepository: Send + Sync {
    /// List all entries ordered by ID
    async fn list(&self) -> AppResult<Vec<WorkEntry>>;

    /// Find entry by ID
    async fn find_by_id(&self, id: i32) -> AppResult<Option<WorkEntry>>;

    /// Insert a new entry
    async fn create(&self, entry: NewWorkEntry) -> AppResult<WorkEntry>;

    /// Overwrite the date columns and timestamps of an existing entry
    async fn update(&self, entry: WorkEntry) -> AppResult<WorkEntry>;

    /// Physically remove an entry
    async fn delete(&self, id: i32) -> AppResult<()>;
}

/// Concrete implementation of WorkEntryRepository
pub struct WorkEntryStore {
    db: DatabaseConnection,
}

impl WorkEntryStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Attach the owning user row; a missing user means the foreign key was bypassed.
    fn with_user(
        (model, owner): (work_entry::Model, Option<user::Model>),
    ) -> AppResult<WorkEntry> {
        let owner = owner.ok_or_else(|| {
            AppError::internal(format!(
                "work entry {} references missing user {}",
                model.id, model.user_id
            ))
        })?;

        Ok(WorkEntry::from((model, owner)))
    }

    async fn load(&self, id: i32) -> AppResult<Option<WorkEntry>> {
        WorkEntryEntity::find_by_id(id)
            .find_also_related(UserEntity)
            .one(&self.db)
            .await
            .map_err(AppError::from)?
            .map(Self::with_user)
            .transpose()
    }
}

#[async_trait]
impl WorkEntryRepository for WorkEntryStore {
    async fn list(&self) -> AppResult<Vec<WorkEntry>> {
        let rows = WorkEntryEntity::find()
            .find_also_related(UserEntity)
            .order_by_asc(work_entry::Column::Id)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        rows.into_iter().map(Self::with_user).collect()
    }

    async fn find_by_id(&self, id: i32) -> AppResult<Option<WorkEntry>> {
        self.load(id).await
    }

    async fn create(&self, entry: NewWorkEntry) -> AppResult<WorkEntry> {
        let active_model = ActiveModel {
            user_id: Set(entry.user_id),
            start_date: Set(entry.start_date),
            end_date: Set(entry.end_date),
            created_at: Set(entry.created_at),
            updated_at: Set(entry.updated_at),
            deleted_at: Set(None),
            ..Default::default()
        };

        let model = active_model.insert(&self.db).await.map_err(AppError::from)?;
        self.load(model.id)
            .await?
            .ok_or_not_found(ERR_ENTRY_NOT_FOUND)
    }

    async fn update(&self, entry: WorkEntry) -> AppResult<WorkEntry> {
        let existing = WorkEntryEntity::find_by_id(entry.id)
            .one(&self.db)
            .await?
            .ok_or_not_found(ERR_ENTRY_NOT_FOUND)?;

        let mut active: ActiveModel = existing.into();
        active.start_date = Set(entry.start_date);
        active.end_date = Set(entry.end_date);
        active.updated_at = Set(entry.updated_at);
        active.deleted_at = Set(entry.deleted_at);

        let model = active.update(&self.db).await.map_err(AppError::from)?;
        self.load(model.id)
            .await?
            .ok_or_not_found(ERR_ENTRY_NOT_FOUND)
    }

    async fn delete(&self, id: i32) -> AppResult<()> {
        let result = WorkEntryEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(AppError::from)?;

        if result.rows_affected == 0 {
            return Err(AppError::not_found(ERR_ENTRY_NOT_FOUND));
        }

        Ok(())
    }
}
