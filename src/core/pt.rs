//! Personal training engagement business logic.
//!
//! An engagement ties a client to a staff trainer for a purchased block of
//! sessions. Session and fee counters are derived through the calculators
//! and floored at zero; a client holds at most one active engagement per
//! trainer; deactivation is the terminal state.

use crate::core::{calc, validate};
use crate::entities::{pt_client, PtClient, PtClientModel};
use crate::errors::{Error, Result};
use crate::store;
use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use sea_orm::{prelude::*, QueryOrder, Set};
use tracing::info;

/// Payload for opening an engagement.
#[derive(Debug, Clone)]
pub struct NewEngagement {
    pub client_id: i64,
    pub trainer_id: i64,
    pub sessions_total: i32,
    pub total_fee: Decimal,
    /// Defaults to zero when omitted
    pub paid_fee: Option<Decimal>,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
}

/// Opens an engagement after checking both references and the
/// one-active-per-pair rule.
pub async fn create_engagement(
    db: &DatabaseConnection,
    new: NewEngagement,
) -> Result<PtClientModel> {
    if new.sessions_total <= 0 {
        return Err(Error::Validation {
            message: format!("sessions_total must be positive, got {}", new.sessions_total),
        });
    }
    let paid = new.paid_fee.unwrap_or(Decimal::ZERO);
    if new.total_fee < Decimal::ZERO || paid < Decimal::ZERO {
        return Err(Error::Validation {
            message: "engagement fees must be non-negative".to_owned(),
        });
    }
    if let Some(end_date) = new.end_date {
        if end_date < new.start_date {
            return Err(Error::Validation {
                message: format!(
                    "end_date {end_date} is before start_date {}",
                    new.start_date
                ),
            });
        }
    }
    validate::ensure_client_exists(db, "client_id", new.client_id).await?;
    validate::ensure_staff_exists(db, "trainer_id", new.trainer_id).await?;

    let open = PtClient::find()
        .filter(pt_client::Column::ClientId.eq(new.client_id))
        .filter(pt_client::Column::TrainerId.eq(new.trainer_id))
        .filter(pt_client::Column::IsActive.eq(true))
        .one(db)
        .await?;
    if open.is_some() {
        return Err(Error::Validation {
            message: format!(
                "client {} already has an active engagement with trainer {}",
                new.client_id, new.trainer_id
            ),
        });
    }

    let now = Utc::now();
    let model = pt_client::ActiveModel {
        client_id: Set(new.client_id),
        trainer_id: Set(new.trainer_id),
        sessions_total: Set(new.sessions_total),
        sessions_completed: Set(0),
        sessions_remaining: Set(new.sessions_total),
        total_fee: Set(new.total_fee),
        paid_fee: Set(paid),
        due_fee: Set(calc::due_amount(new.total_fee, paid)),
        start_date: Set(new.start_date),
        end_date: Set(new.end_date),
        is_active: Set(true),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };

    Ok(model.insert(db).await?)
}

/// Marks one session delivered and recomputes the remaining count.
/// Fails once the purchased block is exhausted.
pub async fn complete_session(db: &DatabaseConnection, engagement_id: i64) -> Result<PtClientModel> {
    let existing = store::get_by_id::<PtClient>(db, engagement_id).await?;
    if !existing.is_active {
        return Err(Error::Validation {
            message: format!("engagement {engagement_id} is no longer active"),
        });
    }
    if existing.sessions_remaining <= 0 {
        return Err(Error::Validation {
            message: format!("engagement {engagement_id} has no sessions remaining"),
        });
    }

    let completed = existing.sessions_completed + 1;
    let total = existing.sessions_total;

    let mut model: pt_client::ActiveModel = existing.into();
    model.sessions_completed = Set(completed);
    model.sessions_remaining = Set(calc::sessions_remaining(total, completed));
    model.updated_at = Set(Utc::now());

    Ok(model.update(db).await?)
}

/// Records a payment against the engagement and recomputes the due fee.
pub async fn record_engagement_payment(
    db: &DatabaseConnection,
    engagement_id: i64,
    amount: Decimal,
) -> Result<PtClientModel> {
    if amount <= Decimal::ZERO {
        return Err(Error::Validation {
            message: format!("payment amount must be positive, got {amount}"),
        });
    }

    let existing = store::get_by_id::<PtClient>(db, engagement_id).await?;
    let paid = existing.paid_fee + amount;
    let total = existing.total_fee;

    let mut model: pt_client::ActiveModel = existing.into();
    model.paid_fee = Set(paid);
    model.due_fee = Set(calc::due_amount(total, paid));
    model.updated_at = Set(Utc::now());

    Ok(model.update(db).await?)
}

/// Soft-deactivates an engagement. Idempotent; the row is never deleted.
pub async fn deactivate_engagement(
    db: &DatabaseConnection,
    engagement_id: i64,
) -> Result<PtClientModel> {
    let existing = store::get_by_id::<PtClient>(db, engagement_id).await?;

    let mut model: pt_client::ActiveModel = existing.into();
    model.is_active = Set(false);
    model.updated_at = Set(Utc::now());

    let updated = model.update(db).await?;
    info!(engagement_id, "engagement deactivated");
    Ok(updated)
}

/// Engagements delivered by a trainer, newest first.
pub async fn list_engagements_for_trainer(
    db: &DatabaseConnection,
    trainer_id: i64,
    active_only: bool,
) -> Result<Vec<PtClientModel>> {
    let mut select = PtClient::find().filter(pt_client::Column::TrainerId.eq(trainer_id));
    if active_only {
        select = select.filter(pt_client::Column::IsActive.eq(true));
    }

    select
        .order_by_desc(pt_client::Column::StartDate)
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
    async fn test_create_engagement_derives_counters() -> Result<()> {
        let db = setup_test_db().await?;

        let (client, trainer) = setup_client_and_trainer(&db).await?;
        let engagement = create_engagement(
            &db,
            NewEngagement {
                client_id: client.id,
                trainer_id: trainer.id,
                sessions_total: 10,
                total_fee: Decimal::from(500),
                paid_fee: Some(Decimal::from(200)),
                start_date: test_date(2024, 1, 1),
                end_date: None,
            },
        )
        .await?;

        assert_eq!(engagement.sessions_remaining, 10);
        assert_eq!(engagement.due_fee, Decimal::from(300));
        assert!(engagement.is_active);

        Ok(())
    }

    #[tokio::test]
    async fn test_both_references_checked() -> Result<()> {
        let db = setup_test_db().await?;

        let (client, trainer) = setup_client_and_trainer(&db).await?;

        let err = create_engagement(
            &db,
            NewEngagement {
                client_id: 777,
                trainer_id: trainer.id,
                sessions_total: 5,
                total_fee: Decimal::from(100),
                paid_fee: None,
                start_date: test_date(2024, 1, 1),
                end_date: None,
            },
        )
        .await
        .unwrap_err();
        assert!(matches!(
            err,
            Error::DanglingReference {
                field: "client_id",
                ..
            }
        ));

        let err = create_engagement(
            &db,
            NewEngagement {
                client_id: client.id,
                trainer_id: 888,
                sessions_total: 5,
                total_fee: Decimal::from(100),
                paid_fee: None,
                start_date: test_date(2024, 1, 1),
                end_date: None,
            },
        )
        .await
        .unwrap_err();
        assert!(matches!(
            err,
            Error::DanglingReference {
                field: "trainer_id",
                ..
            }
        ));

        Ok(())
    }

    #[tokio::test]
    async fn test_one_active_engagement_per_pair() -> Result<()> {
        let db = setup_test_db().await?;

        let (client, trainer) = setup_client_and_trainer(&db).await?;
        let first = create_test_engagement(&db, client.id, trainer.id, 10).await?;

        let err = create_test_engagement(&db, client.id, trainer.id, 5)
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Validation { .. }));

        // Deactivating the first frees the pair for a new contract
        deactivate_engagement(&db, first.id).await?;
        create_test_engagement(&db, client.id, trainer.id, 5).await?;

        Ok(())
    }

    #[tokio::test]
    async fn test_sessions_consume_down_to_zero() -> Result<()> {
        let db = setup_test_db().await?;

        let (client, trainer) = setup_client_and_trainer(&db).await?;
        let engagement = create_test_engagement(&db, client.id, trainer.id, 2).await?;

        let after_one = complete_session(&db, engagement.id).await?;
        assert_eq!(after_one.sessions_completed, 1);
        assert_eq!(after_one.sessions_remaining, 1);

        let after_two = complete_session(&db, engagement.id).await?;
        assert_eq!(after_two.sessions_remaining, 0);

        let err = complete_session(&db, engagement.id).await.unwrap_err();
        assert!(matches!(err, Error::Validation { .. }));

        Ok(())
    }

    #[tokio::test]
    async fn test_engagement_payment_reconciles_due_fee() -> Result<()> {
        let db = setup_test_db().await?;

        let (client, trainer) = setup_client_and_trainer(&db).await?;
        let engagement = create_test_engagement(&db, client.id, trainer.id, 10).await?;
        assert_eq!(engagement.due_fee, Decimal::from(500));

        let updated =
            record_engagement_payment(&db, engagement.id, Decimal::from(600)).await?;
        // Overpayment floors at zero
        assert_eq!(updated.due_fee, Decimal::ZERO);
        assert_eq!(updated.paid_fee, Decimal::from(600));

        Ok(())
    }

    #[tokio::test]
    async fn test_list_for_trainer_active_filter() -> Result<()> {
        let db = setup_test_db().await?;

        let (client, trainer) = setup_client_and_trainer(&db).await?;
        let other_client = create_test_client(&db, "Second Member").await?;

        let open = create_test_engagement(&db, client.id, trainer.id, 10).await?;
        let finished = create_test_engagement(&db, other_client.id, trainer.id, 10).await?;
        deactivate_engagement(&db, finished.id).await?;

        let all = list_engagements_for_trainer(&db, trainer.id, false).await?;
        assert_eq!(all.len(), 2);

        let active = list_engagements_for_trainer(&db, trainer.id, true).await?;
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].id, open.id);

        Ok(())
    }
}
