//! Staff entity - Employees of the gym, including trainers.
//!
//! Staff members are referenced by clients (as personal trainers), personal
//! training engagements, enquiry assignments, salaries, and attendance. Those
//! are back-references only; deleting referenced staff is a store-level policy
//! and never cascades from here.

use super::enums::UserRole;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Staff database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "staff")]
pub struct Model {
    /// Unique identifier for the staff member
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Authenticated identity of the staff member
    pub user_id: String,
    /// Full display name
    pub full_name: String,
    /// Contact phone number
    pub phone: Option<String>,
    /// Console role: `admin` or `staff`
    pub role: UserRole,
    /// Monthly base salary, unset while unagreed
    pub salary: Option<Decimal>,
    /// When the record was created
    pub created_at: DateTimeUtc,
    /// When the record was last modified
    pub updated_at: DateTimeUtc,
}

/// Defines relationships between Staff and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Clients coached by this staff member as personal trainer
    #[sea_orm(has_many = "super::client::Entity")]
    Clients,
    /// Personal training engagements where this staff member is the trainer
    #[sea_orm(has_many = "super::pt_client::Entity")]
    PtClients,
    /// Enquiries assigned to this staff member
    #[sea_orm(has_many = "super::enquiry::Entity")]
    Enquiries,
    /// Monthly salary records
    #[sea_orm(has_many = "super::salary::Entity")]
    Salaries,
    /// Daily attendance records
    #[sea_orm(has_many = "super::attendance::Entity")]
    Attendance,
}

impl Related<super::client::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Clients.def()
    }
}

impl Related<super::pt_client::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PtClients.def()
    }
}

impl Related<super::enquiry::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Enquiries.def()
    }
}

impl Related<super::salary::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Salaries.def()
    }
}

impl Related<super::attendance::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Attendance.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
