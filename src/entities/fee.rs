//! Fee entity - A billed amount owed by a client.
//!
//! `due_amount` and `payment_status` are derived from `total_fee` and
//! `paid_amount` at every write; the stored copies exist for listing and
//! filtering, the derivation rule is the source of truth.

use super::enums::PaymentStatus;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Fee database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "fees")]
pub struct Model {
    /// Unique identifier for the fee
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Client this fee is billed to
    pub client_id: i64,
    /// Total billed amount
    pub total_fee: Decimal,
    /// Amount received so far
    pub paid_amount: Decimal,
    /// Outstanding amount, clamped at zero
    pub due_amount: Decimal,
    /// Settlement state derived from paid versus total
    pub payment_status: PaymentStatus,
    /// What the fee covers
    pub description: Option<String>,
    /// Date of the most recent payment
    pub payment_date: Option<Date>,
    /// When the record was created
    pub created_at: DateTimeUtc,
    /// When the record was last modified
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each fee belongs to one client
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
