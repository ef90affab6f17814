//! Shared helpers for integration-style tests.
//!
//! Each test gets its own in-memory SQLite database with the full schema,
//! plus constructors that go through the real core commands so every fixture
//! row satisfies the same invariants as production data.

use crate::config::database::create_tables;
use crate::core;
use crate::entities::{
    ClientModel, EnquiryModel, FeeModel, MembershipModel, PtClientModel, SalaryModel, StaffModel,
};
use crate::errors::Result;
use chrono::{NaiveDate, NaiveTime};
use rust_decimal::Decimal;
use sea_orm::{Database, DatabaseConnection};

/// Fresh in-memory database with all tables created.
pub async fn setup_test_db() -> Result<DatabaseConnection> {
    let db = Database::connect("sqlite::memory:").await?;
    create_tables(&db).await?;
    Ok(db)
}

/// Shorthand for literal dates in fixtures.
#[must_use]
pub fn test_date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

/// Shorthand for literal times in fixtures.
#[must_use]
pub fn test_time(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).unwrap_or_default()
}

/// Staff member with an identity derived from the name.
pub async fn create_test_staff(db: &DatabaseConnection, name: &str) -> Result<StaffModel> {
    core::staff::create_staff(
        db,
        core::staff::NewStaff {
            user_id: format!("auth-{}", name.to_lowercase().replace(' ', "-")),
            full_name: name.to_owned(),
            phone: None,
            role: None,
            salary: Some(Decimal::from(2000)),
        },
    )
    .await
}

/// Active client with schema-default fee status, joined 2024-01-01.
pub async fn create_test_client(db: &DatabaseConnection, name: &str) -> Result<ClientModel> {
    create_custom_client(db, name, test_date(2024, 1, 1)).await
}

/// Client with an explicit joining date, for date-range tests.
pub async fn create_custom_client(
    db: &DatabaseConnection,
    name: &str,
    joining_date: NaiveDate,
) -> Result<ClientModel> {
    core::client::create_client(
        db,
        core::client::NewClient {
            full_name: name.to_owned(),
            email: None,
            phone: None,
            joining_date,
            membership_type: Some("Monthly".to_owned()),
            fee_status: None,
            pt_trainer_id: None,
        },
    )
    .await
}

/// Monthly membership at a fee of 50.
pub async fn create_test_membership(
    db: &DatabaseConnection,
    client_id: i64,
    start_date: NaiveDate,
    end_date: NaiveDate,
) -> Result<MembershipModel> {
    core::membership::create_membership(
        db,
        core::membership::NewMembership {
            client_id,
            membership_type: "Monthly".to_owned(),
            start_date,
            end_date,
            fee: Decimal::from(50),
        },
    )
    .await
}

/// Fee billed to a client with integer amounts for readable assertions.
pub async fn create_test_fee(
    db: &DatabaseConnection,
    client_id: i64,
    total: i64,
    paid: i64,
) -> Result<FeeModel> {
    core::fee::record_fee(
        db,
        core::fee::NewFee {
            client_id,
            total_fee: Decimal::from(total),
            paid_amount: Some(Decimal::from(paid)),
            description: None,
            payment_date: None,
        },
    )
    .await
}

/// Pending enquiry with the required name and phone.
pub async fn create_test_enquiry(db: &DatabaseConnection, name: &str) -> Result<EnquiryModel> {
    core::enquiry::create_enquiry(
        db,
        core::enquiry::NewEnquiry {
            full_name: name.to_owned(),
            phone: "555-0100".to_owned(),
            email: None,
            purpose: Some("membership".to_owned()),
            assigned_to: None,
            follow_up_date: None,
            notes: None,
        },
    )
    .await
}

/// Engagement with a 500 fee, nothing paid, starting 2024-01-01.
pub async fn create_test_engagement(
    db: &DatabaseConnection,
    client_id: i64,
    trainer_id: i64,
    sessions_total: i32,
) -> Result<PtClientModel> {
    core::pt::create_engagement(
        db,
        core::pt::NewEngagement {
            client_id,
            trainer_id,
            sessions_total,
            total_fee: Decimal::from(500),
            paid_fee: None,
            start_date: test_date(2024, 1, 1),
            end_date: None,
        },
    )
    .await
}

/// Unpaid 2000 salary record for the given month.
pub async fn create_test_salary(
    db: &DatabaseConnection,
    staff_id: i64,
    month: NaiveDate,
) -> Result<SalaryModel> {
    core::salary::record_salary(
        db,
        core::salary::NewSalary {
            staff_id,
            month,
            total_salary: Decimal::from(2000),
            paid_salary: None,
            working_days: Some(22),
            payment_date: None,
        },
    )
    .await
}

/// The common client-plus-trainer pair used by engagement tests.
pub async fn setup_client_and_trainer(
    db: &DatabaseConnection,
) -> Result<(ClientModel, StaffModel)> {
    let client = create_test_client(db, "Member").await?;
    let trainer = create_test_staff(db, "Trainer").await?;
    Ok((client, trainer))
}
