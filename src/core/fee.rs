//! Fee business logic.
//!
//! Every write recomputes the derived pair (`due_amount`, `payment_status`)
//! from the calculators; the stored copies exist only for listing and
//! filtering. After each fee write the owning client's rolled-up
//! `fee_status` is refreshed from the client's whole fee history. The two
//! writes are independent commands; there is no cross-command atomicity.

use crate::core::{calc, validate};
use crate::entities::{client, fee, Client, Fee, FeeModel, PaymentStatus};
use crate::errors::{Error, Result};
use crate::store::{self, Page, PageRequest};
use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use sea_orm::{prelude::*, QueryOrder, Set};

/// Payload for billing a fee to a client.
#[derive(Debug, Clone)]
pub struct NewFee {
    pub client_id: i64,
    pub total_fee: Decimal,
    /// Defaults to zero when omitted
    pub paid_amount: Option<Decimal>,
    pub description: Option<String>,
    pub payment_date: Option<NaiveDate>,
}

fn validate_amounts(total: Decimal, paid: Decimal) -> Result<()> {
    if total < Decimal::ZERO {
        return Err(Error::Validation {
            message: format!("total_fee must be non-negative, got {total}"),
        });
    }
    if paid < Decimal::ZERO {
        return Err(Error::Validation {
            message: format!("paid_amount must be non-negative, got {paid}"),
        });
    }
    Ok(())
}

/// Bills a fee, deriving the due amount and settlement status at write time.
pub async fn record_fee(db: &DatabaseConnection, new: NewFee) -> Result<FeeModel> {
    let paid = new.paid_amount.unwrap_or(Decimal::ZERO);
    validate_amounts(new.total_fee, paid)?;
    validate::ensure_client_exists(db, "client_id", new.client_id).await?;

    let now = Utc::now();
    let model = fee::ActiveModel {
        client_id: Set(new.client_id),
        total_fee: Set(new.total_fee),
        paid_amount: Set(paid),
        due_amount: Set(calc::due_amount(new.total_fee, paid)),
        payment_status: Set(calc::payment_status(new.total_fee, paid)),
        description: Set(new.description),
        payment_date: Set(new.payment_date),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };

    let inserted = model.insert(db).await?;
    refresh_client_fee_status(db, inserted.client_id).await?;
    Ok(inserted)
}

/// Records a payment against a fee and recomputes the derived fields.
pub async fn record_fee_payment(
    db: &DatabaseConnection,
    fee_id: i64,
    amount: Decimal,
    payment_date: NaiveDate,
) -> Result<FeeModel> {
    if amount <= Decimal::ZERO {
        return Err(Error::Validation {
            message: format!("payment amount must be positive, got {amount}"),
        });
    }

    let existing = store::get_by_id::<Fee>(db, fee_id).await?;
    let paid = existing.paid_amount + amount;
    let total = existing.total_fee;

    let mut model: fee::ActiveModel = existing.into();
    model.paid_amount = Set(paid);
    model.due_amount = Set(calc::due_amount(total, paid));
    model.payment_status = Set(calc::payment_status(total, paid));
    model.payment_date = Set(Some(payment_date));
    model.updated_at = Set(Utc::now());

    let updated = model.update(db).await?;
    refresh_client_fee_status(db, updated.client_id).await?;
    Ok(updated)
}

/// Recomputes a client's rolled-up `fee_status` from every fee billed to
/// them, using the same derivation rule over the summed amounts.
pub async fn refresh_client_fee_status(
    db: &DatabaseConnection,
    client_id: i64,
) -> Result<PaymentStatus> {
    let fees = Fee::find()
        .filter(fee::Column::ClientId.eq(client_id))
        .all(db)
        .await?;

    let (total, paid) = fees.iter().fold(
        (Decimal::ZERO, Decimal::ZERO),
        |(total, paid), fee| (total + fee.total_fee, paid + fee.paid_amount),
    );
    let status = calc::payment_status(total, paid);

    let existing = store::get_by_id::<Client>(db, client_id).await?;
    if existing.fee_status != status {
        let mut model: client::ActiveModel = existing.into();
        model.fee_status = Set(status);
        model.updated_at = Set(Utc::now());
        model.update(db).await?;
    }

    Ok(status)
}

/// Fees billed to a client, newest first.
pub async fn list_fees_for_client(
    db: &DatabaseConnection,
    client_id: i64,
) -> Result<Vec<FeeModel>> {
    Fee::find()
        .filter(fee::Column::ClientId.eq(client_id))
        .order_by_desc(fee::Column::CreatedAt)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Paged fees in a given settlement state, largest outstanding amount first.
pub async fn list_fees_by_status(
    db: &DatabaseConnection,
    status: PaymentStatus,
    page: PageRequest,
) -> Result<Page<FeeModel>> {
    let select = Fee::find()
        .filter(fee::Column::PaymentStatus.eq(status))
        .order_by_desc(fee::Column::DueAmount);
    store::fetch_page(db, select, page).await
}
