//! Client entity - A gym member.
//!
//! Clients own memberships, fee records, and personal training engagements.
//! Removal is soft only: `is_active = false` is the terminal state, rows are
//! never deleted.

use super::enums::PaymentStatus;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Client database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "clients")]
pub struct Model {
    /// Unique identifier for the client
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Full display name
    pub full_name: String,
    /// Contact email address
    pub email: Option<String>,
    /// Contact phone number
    pub phone: Option<String>,
    /// Date the client joined the gym
    pub joining_date: Date,
    /// Free-form membership plan label (e.g. "Monthly", "Annual")
    pub membership_type: Option<String>,
    /// Rolled-up settlement state of the client's fees
    pub fee_status: PaymentStatus,
    /// Soft-deactivation flag; false is the terminal state
    pub is_active: bool,
    /// Personal trainer, if the client has one
    pub pt_trainer_id: Option<i64>,
    /// When the record was created
    pub created_at: DateTimeUtc,
    /// When the record was last modified
    pub updated_at: DateTimeUtc,
}

/// Defines relationships between Client and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Optional personal trainer reference
    #[sea_orm(
        belongs_to = "super::staff::Entity",
        from = "Column::PtTrainerId",
        to = "super::staff::Column::Id"
    )]
    PtTrainer,
    /// Membership history, append-only
    #[sea_orm(has_many = "super::membership::Entity")]
    Memberships,
    /// Fee records
    #[sea_orm(has_many = "super::fee::Entity")]
    Fees,
    /// Personal training engagements
    #[sea_orm(has_many = "super::pt_client::Entity")]
    PtClients,
}

impl Related<super::staff::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PtTrainer.def()
    }
}

impl Related<super::membership::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Memberships.def()
    }
}

impl Related<super::fee::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Fees.def()
    }
}

impl Related<super::pt_client::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PtClients.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
