//! Salary entity - One month of pay for a staff member.
//!
//! `payment_status` follows the same derivation rule as fees, applied to
//! `paid_salary` versus `total_salary`.

use super::enums::PaymentStatus;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Salary database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "salaries")]
pub struct Model {
    /// Unique identifier for the salary record
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Staff member being paid
    pub staff_id: i64,
    /// Month this record covers, stored as its first day
    pub month: Date,
    /// Gross salary owed for the month
    pub total_salary: Decimal,
    /// Amount paid out so far
    pub paid_salary: Decimal,
    /// Settlement state derived from paid versus total
    pub payment_status: PaymentStatus,
    /// Date of the most recent payout
    pub payment_date: Option<Date>,
    /// Days worked in the month
    pub working_days: Option<i32>,
    /// When the record was created
    pub created_at: DateTimeUtc,
    /// When the record was last modified
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each salary record belongs to one staff member
    #[sea_orm(
        belongs_to = "super::staff::Entity",
        from = "Column::StaffId",
        to = "super::staff::Column::Id"
    )]
    Staff,
}

impl Related<super::staff::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Staff.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
