//! User database entity for SeaORM.

use std::collections::BTreeSet;

use sea_orm::entity::prelude::*;

use crate::domain::{default_roles, User};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub email: String,
    /// JSON array of role tags
    #[sea_orm(column_type = "Text")]
    pub roles: String,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
    pub deleted_at: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::work_entry::Entity")]
    WorkEntry,
}

impl Related<super::work_entry::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::WorkEntry.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Serialize a role set for the `roles` column
pub fn encode_roles(roles: &BTreeSet<String>) -> String {
    serde_json::Value::from(roles.iter().cloned().collect::<Vec<_>>()).to_string()
}

/// Convert database model to domain entity
impl From<Model> for User {
    fn from(model: Model) -> Self {
        let roles = serde_json::from_str(&model.roles).unwrap_or_else(|e| {
            tracing::warn!(user_id = model.id, "Unreadable roles column, using defaults: {}", e);
            default_roles()
        });

        User {
            id: model.id,
            name: model.name,
            email: model.email,
            roles,
            created_at: model.created_at,
            updated_at: model.updated_at,
            deleted_at: model.deleted_at,
        }
    }
}
