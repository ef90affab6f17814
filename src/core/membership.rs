//! Membership lifecycle.
//!
//! Two transitions exist: time-driven expiry, which is derived at read time
//! and never written back, and explicit cancellation, which is one-way and
//! terminal. Renewal never mutates a row; it appends a fresh membership for
//! the same client, keeping history intact.

use crate::core::{calc, validate};
use crate::entities::{membership, Membership, MembershipModel, MembershipStatus};
use crate::errors::{Error, Result};
use crate::store;
use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use sea_orm::{prelude::*, QueryOrder, Set};
use tracing::info;

/// Payload for opening a membership period.
#[derive(Debug, Clone)]
pub struct NewMembership {
    pub client_id: i64,
    pub membership_type: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub fee: Decimal,
}

fn validate_period(start_date: NaiveDate, end_date: NaiveDate, fee: Decimal) -> Result<()> {
    if end_date < start_date {
        return Err(Error::Validation {
            message: format!("end_date {end_date} is before start_date {start_date}"),
        });
    }
    if fee < Decimal::ZERO {
        return Err(Error::Validation {
            message: format!("membership fee must be non-negative, got {fee}"),
        });
    }
    Ok(())
}

/// Opens a membership for a client.
pub async fn create_membership(
    db: &DatabaseConnection,
    new: NewMembership,
) -> Result<MembershipModel> {
    let membership_type = new.membership_type.trim().to_owned();
    if membership_type.is_empty() {
        return Err(Error::Validation {
            message: "membership_type cannot be empty".to_owned(),
        });
    }
    validate_period(new.start_date, new.end_date, new.fee)?;
    validate::ensure_client_exists(db, "client_id", new.client_id).await?;

    let now = Utc::now();
    let model = membership::ActiveModel {
        client_id: Set(new.client_id),
        membership_type: Set(membership_type),
        start_date: Set(new.start_date),
        end_date: Set(new.end_date),
        fee: Set(new.fee),
        status: Set(MembershipStatus::Active),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };

    Ok(model.insert(db).await?)
}

/// Renews a membership by appending a new row for the same client and plan.
/// The old row is left untouched; history is append-only.
pub async fn renew_membership(
    db: &DatabaseConnection,
    membership_id: i64,
    start_date: NaiveDate,
    end_date: NaiveDate,
    fee: Option<Decimal>,
) -> Result<MembershipModel> {
    let previous = store::get_by_id::<Membership>(db, membership_id).await?;
    let fee = fee.unwrap_or(previous.fee);
    validate_period(start_date, end_date, fee)?;

    let now = Utc::now();
    let model = membership::ActiveModel {
        client_id: Set(previous.client_id),
        membership_type: Set(previous.membership_type),
        start_date: Set(start_date),
        end_date: Set(end_date),
        fee: Set(fee),
        status: Set(MembershipStatus::Active),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };

    let renewed = model.insert(db).await?;
    info!(
        membership_id,
        renewed_id = renewed.id,
        "membership renewed"
    );
    Ok(renewed)
}

/// Cancels a membership. One-way and terminal: cancelling an already
/// cancelled membership is rejected as an invalid transition.
pub async fn cancel_membership(
    db: &DatabaseConnection,
    membership_id: i64,
) -> Result<MembershipModel> {
    let existing = store::get_by_id::<Membership>(db, membership_id).await?;
    if existing.status == MembershipStatus::Cancelled {
        return Err(Error::InvalidStatusTransition {
            from: "cancelled",
            to: "cancelled",
        });
    }

    let mut model: membership::ActiveModel = existing.into();
    model.status = Set(MembershipStatus::Cancelled);
    model.updated_at = Set(Utc::now());

    let cancelled = model.update(db).await?;
    info!(membership_id, "membership cancelled");
    Ok(cancelled)
}

/// Effective status for display: explicit cancellation wins, otherwise
/// expiry is derived from the end date. The stored status never holds
/// `expired`.
#[must_use]
pub fn effective_status(membership: &MembershipModel, today: NaiveDate) -> MembershipStatus {
    calc::membership_status(
        membership.end_date,
        today,
        membership.status == MembershipStatus::Cancelled,
    )
}

/// Membership history for a client, newest period first.
pub async fn list_memberships_for_client(
    db: &DatabaseConnection,
    client_id: i64,
) -> Result<Vec<MembershipModel>> {
    Membership::find()
        .filter(membership::Column::ClientId.eq(client_id))
        .order_by_desc(membership::Column::StartDate)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Uncancelled memberships whose end date falls inside the given window,
/// soonest first. Used for expiry reminders on the dashboard.
pub async fn list_expiring_between(
    db: &DatabaseConnection,
    from: NaiveDate,
    to: NaiveDate,
) -> Result<Vec<MembershipModel>> {
    Membership::find()
        .filter(membership::Column::Status.eq(MembershipStatus::Active))
        .filter(membership::Column::EndDate.gte(from))
        .filter(membership::Column::EndDate.lte(to))
        .order_by_asc(membership::Column::EndDate)
        .all(db)
        .await
        .map_err(Into::into)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::test_utils::*;

    #[tokio::test]
    async fn test_create_membership_validates_period_and_reference() -> Result<()> {
        let db = setup_test_db().await?;

        let client = create_test_client(&db, "Member").await?;

        let err = create_membership(
            &db,
            NewMembership {
                client_id: client.id,
                membership_type: "Monthly".to_owned(),
                start_date: test_date(2024, 2, 1),
                end_date: test_date(2024, 1, 1),
                fee: Decimal::from(50),
            },
        )
        .await
        .unwrap_err();
        assert!(matches!(err, Error::Validation { .. }));

        let err = create_membership(
            &db,
            NewMembership {
                client_id: 999,
                membership_type: "Monthly".to_owned(),
                start_date: test_date(2024, 1, 1),
                end_date: test_date(2024, 1, 31),
                fee: Decimal::from(50),
            },
        )
        .await
        .unwrap_err();
        assert!(matches!(
            err,
            Error::DanglingReference {
                field: "client_id",
                id: 999
            }
        ));

        Ok(())
    }

    #[tokio::test]
    async fn test_expiry_is_derived_not_stored() -> Result<()> {
        let db = setup_test_db().await?;

        let client = create_test_client(&db, "Member").await?;
        let membership =
            create_test_membership(&db, client.id, test_date(2024, 1, 1), test_date(2024, 1, 31))
                .await?;

        // Stored status stays active; the derived view expires
        assert_eq!(membership.status, MembershipStatus::Active);
        assert_eq!(
            effective_status(&membership, test_date(2024, 1, 31)),
            MembershipStatus::Active
        );
        assert_eq!(
            effective_status(&membership, test_date(2024, 2, 1)),
            MembershipStatus::Expired
        );

        Ok(())
    }

    #[tokio::test]
    async fn test_cancellation_is_terminal_and_wins_over_dates() -> Result<()> {
        let db = setup_test_db().await?;

        let client = create_test_client(&db, "Member").await?;
        let membership =
            create_test_membership(&db, client.id, test_date(2024, 1, 1), test_date(2024, 12, 31))
                .await?;

        let cancelled = cancel_membership(&db, membership.id).await?;
        assert_eq!(cancelled.status, MembershipStatus::Cancelled);
        assert_eq!(
            effective_status(&cancelled, test_date(2024, 6, 1)),
            MembershipStatus::Cancelled
        );

        let err = cancel_membership(&db, membership.id).await.unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidStatusTransition {
                from: "cancelled",
                to: "cancelled"
            }
        ));

        Ok(())
    }

    #[tokio::test]
    async fn test_renewal_appends_history() -> Result<()> {
        let db = setup_test_db().await?;

        let client = create_test_client(&db, "Member").await?;
        let original =
            create_test_membership(&db, client.id, test_date(2024, 1, 1), test_date(2024, 1, 31))
                .await?;

        let renewed = renew_membership(
            &db,
            original.id,
            test_date(2024, 2, 1),
            test_date(2024, 2, 29),
            None,
        )
        .await?;

        assert_ne!(renewed.id, original.id);
        assert_eq!(renewed.client_id, client.id);
        assert_eq!(renewed.fee, original.fee);

        let history = list_memberships_for_client(&db, client.id).await?;
        assert_eq!(history.len(), 2);
        // Newest period first
        assert_eq!(history[0].id, renewed.id);
        // The old row is untouched
        assert_eq!(history[1], original);

        Ok(())
    }

    #[tokio::test]
    async fn test_expiring_window_skips_cancelled() -> Result<()> {
        let db = setup_test_db().await?;

        let client = create_test_client(&db, "Member").await?;
        let keeps =
            create_test_membership(&db, client.id, test_date(2024, 1, 1), test_date(2024, 3, 10))
                .await?;
        let cancelled =
            create_test_membership(&db, client.id, test_date(2024, 1, 1), test_date(2024, 3, 12))
                .await?;
        cancel_membership(&db, cancelled.id).await?;
        // Outside the window
        create_test_membership(&db, client.id, test_date(2024, 1, 1), test_date(2024, 6, 1))
            .await?;

        let expiring =
            list_expiring_between(&db, test_date(2024, 3, 8), test_date(2024, 3, 15)).await?;
        assert_eq!(expiring.len(), 1);
        assert_eq!(expiring[0].id, keeps.id);

        Ok(())
    }
}
