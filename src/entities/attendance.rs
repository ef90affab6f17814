//! Attendance entity - One day of presence for a staff member.
//!
//! `working_hours` is derived from check-in and check-out when both are
//! present; a check-out before check-in is rejected before it is stored.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Attendance database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "attendance")]
pub struct Model {
    /// Unique identifier for the attendance record
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Staff member the record belongs to
    pub staff_id: i64,
    /// Calendar day being recorded
    pub date: Date,
    /// Arrival time, unset until the staff member checks in
    pub check_in: Option<Time>,
    /// Departure time, unset until checked out; never before `check_in`
    pub check_out: Option<Time>,
    /// Hours between check-in and check-out, unset until both exist
    pub working_hours: Option<f64>,
    /// When the record was created
    pub created_at: DateTimeUtc,
    /// When the record was last modified
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each attendance record belongs to one staff member
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
