//! Membership entity - A time-bounded service entitlement owned by a client.
//!
//! History is append-only: renewal inserts a new row for the same client and
//! never mutates the old one. Only `active` and `cancelled` are stored;
//! expiry is derived from `end_date` at read time.

use super::enums::MembershipStatus;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Membership database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "memberships")]
pub struct Model {
    /// Unique identifier for the membership
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Owning client
    pub client_id: i64,
    /// Plan label (e.g. "Monthly", "Quarterly", "Annual")
    pub membership_type: String,
    /// First day of the entitlement
    pub start_date: Date,
    /// Last day of the entitlement, never before `start_date`
    pub end_date: Date,
    /// Price of the plan for this period
    pub fee: Decimal,
    /// Stored lifecycle state, `active` or `cancelled`
    pub status: MembershipStatus,
    /// When the record was created
    pub created_at: DateTimeUtc,
    /// When the record was last modified
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each membership belongs to one client
    #[sea_orm(
        belongs_to = "super::client::Entity",
        from = "Column::ClientId",
        to = "super::client::Column::Id"
    )]
    Client,
}

impl Related<super::client::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Client.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
