//! Salary business logic.
//!
//! One record per staff member per month, with the settlement status derived
//! by the same rule as fees over (paid_salary, total_salary). The month is
//! normalized to its first day so equality filters behave.

use crate::core::{calc, validate};
use crate::entities::{salary, Salary, SalaryModel};
use crate::errors::{Error, Result};
use crate::store;
use chrono::{Datelike, NaiveDate, Utc};
use rust_decimal::Decimal;
use sea_orm::{prelude::*, QueryOrder, Set};

/// Payload for opening a month of pay.
#[derive(Debug, Clone)]
pub struct NewSalary {
    pub staff_id: i64,
    /// Any day in the month being paid; normalized to the first
    pub month: NaiveDate,
    pub total_salary: Decimal,
    /// Defaults to zero when omitted
    pub paid_salary: Option<Decimal>,
    pub working_days: Option<i32>,
    pub payment_date: Option<NaiveDate>,
}

fn first_of_month(date: NaiveDate) -> NaiveDate {
    // with_day(1) cannot fail for day 1
    date.with_day(1).unwrap_or(date)
}

/// Opens a salary record for a staff member and month.
pub async fn record_salary(db: &DatabaseConnection, new: NewSalary) -> Result<SalaryModel> {
    let paid = new.paid_salary.unwrap_or(Decimal::ZERO);
    if new.total_salary < Decimal::ZERO || paid < Decimal::ZERO {
        return Err(Error::Validation {
            message: "salary amounts must be non-negative".to_owned(),
        });
    }
    if let Some(days) = new.working_days {
        if !(0..=31).contains(&days) {
            return Err(Error::Validation {
                message: format!("working_days must be between 0 and 31, got {days}"),
            });
        }
    }
    validate::ensure_staff_exists(db, "staff_id", new.staff_id).await?;

    let month = first_of_month(new.month);
    let existing = Salary::find()
        .filter(salary::Column::StaffId.eq(new.staff_id))
        .filter(salary::Column::Month.eq(month))
        .one(db)
        .await?;
    if existing.is_some() {
        return Err(Error::Validation {
            message: format!(
                "a salary record already exists for staff {} in {month}",
                new.staff_id
            ),
        });
    }

    let now = Utc::now();
    let model = salary::ActiveModel {
        staff_id: Set(new.staff_id),
        month: Set(month),
        total_salary: Set(new.total_salary),
        paid_salary: Set(paid),
        payment_status: Set(calc::payment_status(new.total_salary, paid)),
        payment_date: Set(new.payment_date),
        working_days: Set(new.working_days),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };

    Ok(model.insert(db).await?)
}

/// Records a payout against a salary record and recomputes its status.
pub async fn record_salary_payment(
    db: &DatabaseConnection,
    salary_id: i64,
    amount: Decimal,
    payment_date: NaiveDate,
) -> Result<SalaryModel> {
    if amount <= Decimal::ZERO {
        return Err(Error::Validation {
            message: format!("payment amount must be positive, got {amount}"),
        });
    }

    let existing = store::get_by_id::<Salary>(db, salary_id).await?;
    let paid = existing.paid_salary + amount;
    let total = existing.total_salary;

    let mut model: salary::ActiveModel = existing.into();
    model.paid_salary = Set(paid);
    model.payment_status = Set(calc::payment_status(total, paid));
    model.payment_date = Set(Some(payment_date));
    model.updated_at = Set(Utc::now());

    Ok(model.update(db).await?)
}

/// All salary records for a month, by staff id.
pub async fn list_salaries_for_month(
    db: &DatabaseConnection,
    month: NaiveDate,
) -> Result<Vec<SalaryModel>> {
    Salary::find()
        .filter(salary::Column::Month.eq(first_of_month(month)))
        .order_by_asc(salary::Column::StaffId)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Salary history for one staff member, newest month first.
pub async fn list_salaries_for_staff(
    db: &DatabaseConnection,
    staff_id: i64,
) -> Result<Vec<SalaryModel>> {
    Salary::find()
        .filter(salary::Column::StaffId.eq(staff_id))
        .order_by_desc(salary::Column::Month)
        .all(db)
        .await
        .map_err(Into::into)
}
