//! Staff business logic.
//!
//! Staff rows are referenced across the model (trainers, assignments,
//! salaries, attendance) and are never deleted from here; removal policy for
//! referenced staff belongs to the external store.

use crate::entities::{staff, Staff, StaffModel, UserRole};
use crate::errors::{Error, Result};
use crate::store::{self, Page, PageRequest, SortOrder};
use chrono::Utc;
use rust_decimal::Decimal;
use sea_orm::{prelude::*, QueryOrder, Set};

/// Payload for registering a staff member.
#[derive(Debug, Clone)]
pub struct NewStaff {
    pub user_id: String,
    pub full_name: String,
    pub phone: Option<String>,
    /// Defaults to `staff` when omitted
    pub role: Option<UserRole>,
    /// Monthly base salary; must be non-negative when set
    pub salary: Option<Decimal>,
}

/// Partial update for a staff member. Unset fields retain their previous
/// value. Role changes go through [`crate::core::access::change_profile_role`]
/// semantics and are deliberately absent here.
#[derive(Debug, Clone, Default)]
pub struct StaffPatch {
    pub full_name: Option<String>,
    pub phone: Option<String>,
    pub salary: Option<Decimal>,
}

fn validate_salary(salary: Option<Decimal>) -> Result<()> {
    if let Some(amount) = salary {
        if amount < Decimal::ZERO {
            return Err(Error::Validation {
                message: format!("salary must be non-negative, got {amount}"),
            });
        }
    }
    Ok(())
}

/// Registers a staff member.
pub async fn create_staff(db: &DatabaseConnection, new: NewStaff) -> Result<StaffModel> {
    let full_name = new.full_name.trim().to_owned();
    if full_name.is_empty() {
        return Err(Error::Validation {
            message: "staff full_name cannot be empty".to_owned(),
        });
    }
    validate_salary(new.salary)?;

    let now = Utc::now();
    let model = staff::ActiveModel {
        user_id: Set(new.user_id),
        full_name: Set(full_name),
        phone: Set(new.phone),
        role: Set(new.role.unwrap_or(UserRole::Staff)),
        salary: Set(new.salary),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };

    Ok(model.insert(db).await?)
}

/// Applies a partial update to a staff member, re-validating the merged row.
pub async fn update_staff(
    db: &DatabaseConnection,
    staff_id: i64,
    patch: StaffPatch,
) -> Result<StaffModel> {
    let existing = store::get_by_id::<Staff>(db, staff_id).await?;
    validate_salary(patch.salary)?;

    let mut model: staff::ActiveModel = existing.into();
    if let Some(full_name) = patch.full_name {
        let full_name = full_name.trim().to_owned();
        if full_name.is_empty() {
            return Err(Error::Validation {
                message: "staff full_name cannot be empty".to_owned(),
            });
        }
        model.full_name = Set(full_name);
    }
    if let Some(phone) = patch.phone {
        model.phone = Set(Some(phone));
    }
    if let Some(salary) = patch.salary {
        model.salary = Set(Some(salary));
    }
    model.updated_at = Set(Utc::now());

    Ok(model.update(db).await?)
}

/// Fetches a staff member by id.
pub async fn get_staff(db: &DatabaseConnection, staff_id: i64) -> Result<StaffModel> {
    store::get_by_id::<Staff>(db, staff_id).await
}

/// Lists staff ordered by name.
pub async fn list_staff(
    db: &DatabaseConnection,
    sort: SortOrder,
    page: PageRequest,
) -> Result<Page<StaffModel>> {
    let select = Staff::find().order_by(staff::Column::FullName, sort.into());
    store::fetch_page(db, select, page).await
}
