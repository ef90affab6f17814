//! Enquiry entity - A prospective-member contact moving through the sales
//! funnel.
//!
//! Enquiries terminate via status transition (`converted` or `closed`), never
//! by deletion. Once terminal, the assignment is frozen for audit purposes.

use super::enums::EnquiryStatus;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Enquiry database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "enquiries")]
pub struct Model {
    /// Unique identifier for the enquiry
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Name of the prospective member
    pub full_name: String,
    /// Contact phone number, always required
    pub phone: String,
    /// Contact email address
    pub email: Option<String>,
    /// What the prospect is interested in
    pub purpose: Option<String>,
    /// Funnel state
    pub status: EnquiryStatus,
    /// Staff member working this enquiry
    pub assigned_to: Option<i64>,
    /// Scheduled follow-up date
    pub follow_up_date: Option<Date>,
    /// Free-form notes from conversations
    pub notes: Option<String>,
    /// When the record was created
    pub created_at: DateTimeUtc,
    /// When the record was last modified
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Optional staff assignment
    #[sea_orm(
        belongs_to = "super::staff::Entity",
        from = "Column::AssignedTo",
        to = "super::staff::Column::Id"
    )]
    AssignedStaff,
}

impl Related<super::staff::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AssignedStaff.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
