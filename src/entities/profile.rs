//! Profile entity - The console account attached to an authenticated identity.
//!
//! Exactly one profile exists per `user_id`. The role gates which commands the
//! console may issue and is immutable except through an admin.

use super::enums::UserRole;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Profile database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "profiles")]
pub struct Model {
    /// Unique identifier for the profile
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Authenticated identity this profile belongs to, one profile each
    #[sea_orm(unique)]
    pub user_id: String,
    /// Display name shown in the console
    pub full_name: String,
    /// Contact phone number
    pub phone: Option<String>,
    /// Console role: `admin` or `staff`
    pub role: UserRole,
    /// When the profile was created
    pub created_at: DateTimeUtc,
    /// When the profile was last modified
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
