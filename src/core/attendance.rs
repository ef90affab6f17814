//! Attendance business logic.
//!
//! One record per staff member per day. Check-in opens the record, check-out
//! closes it and derives the working hours; an inverted range is rejected
//! before anything is stored.

use crate::core::{calc, validate};
use crate::entities::{attendance, Attendance, AttendanceModel};
use crate::errors::{Error, Result};
use chrono::{NaiveDate, NaiveTime, Utc};
use sea_orm::{prelude::*, QueryOrder, Set};

/// Payload for a manual full-row attendance entry.
#[derive(Debug, Clone)]
pub struct NewAttendance {
    pub staff_id: i64,
    pub date: NaiveDate,
    pub check_in: Option<NaiveTime>,
    pub check_out: Option<NaiveTime>,
}

async fn find_for_day(
    db: &DatabaseConnection,
    staff_id: i64,
    date: NaiveDate,
) -> Result<Option<AttendanceModel>> {
    Attendance::find()
        .filter(attendance::Column::StaffId.eq(staff_id))
        .filter(attendance::Column::Date.eq(date))
        .one(db)
        .await
        .map_err(Into::into)
}

/// Opens the day's record with an arrival time.
pub async fn check_in(
    db: &DatabaseConnection,
    staff_id: i64,
    date: NaiveDate,
    time: NaiveTime,
) -> Result<AttendanceModel> {
    validate::ensure_staff_exists(db, "staff_id", staff_id).await?;

    if find_for_day(db, staff_id, date).await?.is_some() {
        return Err(Error::Validation {
            message: format!("staff {staff_id} already has an attendance record for {date}"),
        });
    }

    let now = Utc::now();
    let model = attendance::ActiveModel {
        staff_id: Set(staff_id),
        date: Set(date),
        check_in: Set(Some(time)),
        check_out: Set(None),
        working_hours: Set(None),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };

    Ok(model.insert(db).await?)
}

/// Closes the day's record with a departure time and derives the hours.
pub async fn check_out(
    db: &DatabaseConnection,
    staff_id: i64,
    date: NaiveDate,
    time: NaiveTime,
) -> Result<AttendanceModel> {
    let existing = find_for_day(db, staff_id, date)
        .await?
        .ok_or_else(|| Error::Validation {
            message: format!("staff {staff_id} has not checked in on {date}"),
        })?;

    let arrival = existing.check_in.ok_or_else(|| Error::Validation {
        message: format!("attendance record for {date} has no check-in time"),
    })?;
    let hours = calc::working_hours(arrival, time)?;

    let mut model: attendance::ActiveModel = existing.into();
    model.check_out = Set(Some(time));
    model.working_hours = Set(Some(hours));
    model.updated_at = Set(Utc::now());

    Ok(model.update(db).await?)
}

/// Inserts a full attendance row, deriving hours when both times are given.
/// A lone check-out is meaningless and rejected.
pub async fn record_attendance(
    db: &DatabaseConnection,
    new: NewAttendance,
) -> Result<AttendanceModel> {
    validate::ensure_staff_exists(db, "staff_id", new.staff_id).await?;

    if find_for_day(db, new.staff_id, new.date).await?.is_some() {
        return Err(Error::Validation {
            message: format!(
                "staff {} already has an attendance record for {}",
                new.staff_id, new.date
            ),
        });
    }

    let working_hours = match (new.check_in, new.check_out) {
        (Some(arrival), Some(departure)) => Some(calc::working_hours(arrival, departure)?),
        (None, Some(_)) => {
            return Err(Error::Validation {
                message: "check_out requires a check_in".to_owned(),
            });
        }
        _ => None,
    };

    let now = Utc::now();
    let model = attendance::ActiveModel {
        staff_id: Set(new.staff_id),
        date: Set(new.date),
        check_in: Set(new.check_in),
        check_out: Set(new.check_out),
        working_hours: Set(working_hours),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };

    Ok(model.insert(db).await?)
}

/// Attendance for one staff member across a date range, oldest first.
pub async fn list_attendance_for_staff(
    db: &DatabaseConnection,
    staff_id: i64,
    from: NaiveDate,
    to: NaiveDate,
) -> Result<Vec<AttendanceModel>> {
    Attendance::find()
        .filter(attendance::Column::StaffId.eq(staff_id))
        .filter(attendance::Column::Date.gte(from))
        .filter(attendance::Column::Date.lte(to))
        .order_by_asc(attendance::Column::Date)
        .all(db)
        .await
        .map_err(Into::into)
}
