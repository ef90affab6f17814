//! Personal training engagement entity.
//!
//! A service contract between a client and a staff trainer, tracked by
//! session count and fee balance. `sessions_remaining` and `due_fee` are
//! derived and floored at zero. A client holds at most one active engagement
//! per trainer; deactivation is the terminal state.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Personal training engagement database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "pt_clients")]
pub struct Model {
    /// Unique identifier for the engagement
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Client receiving the training
    pub client_id: i64,
    /// Staff member delivering the training
    pub trainer_id: i64,
    /// Number of sessions purchased
    pub sessions_total: i32,
    /// Sessions delivered so far
    pub sessions_completed: i32,
    /// Sessions left, floored at zero
    pub sessions_remaining: i32,
    /// Contract price
    pub total_fee: Decimal,
    /// Amount received so far
    pub paid_fee: Decimal,
    /// Outstanding amount, floored at zero
    pub due_fee: Decimal,
    /// First day of the engagement
    pub start_date: Date,
    /// Agreed end date, if any
    pub end_date: Option<Date>,
    /// Soft-deactivation flag; false is the terminal state
    pub is_active: bool,
    /// When the record was created
    pub created_at: DateTimeUtc,
    /// When the record was last modified
    pub updated_at: DateTimeUtc,
}

/// Defines relationships between the engagement and its two parties
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// The trained client
    #[sea_orm(
        belongs_to = "super::client::Entity",
        from = "Column::ClientId",
        to = "super::client::Column::Id"
    )]
    Client,
    /// The delivering trainer
    #[sea_orm(
        belongs_to = "super::staff::Entity",
        from = "Column::TrainerId",
        to = "super::staff::Column::Id"
    )]
    Trainer,
}

impl Related<super::client::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Client.def()
    }
}

impl Related<super::staff::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Trainer.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
