//! Client business logic.
//!
//! Creation applies the schema defaults (`fee_status = unpaid`,
//! `is_active = true`), updates are merge-and-revalidate, and removal is
//! soft only: deactivation is the terminal state, rows are never deleted.

use crate::core::validate;
use crate::entities::{client, Client, ClientModel, PaymentStatus};
use crate::errors::{Error, Result};
use crate::store::{self, Page, PageRequest, SortOrder};
use chrono::{NaiveDate, Utc};
use sea_orm::{prelude::*, QueryOrder, Set};
use tracing::info;

/// Payload for registering a client. `joining_date` is typically
/// `GymSettings::today()` under the gym's timezone policy.
#[derive(Debug, Clone)]
pub struct NewClient {
    pub full_name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub joining_date: NaiveDate,
    pub membership_type: Option<String>,
    /// Defaults to `unpaid` when omitted, matching the schema default
    pub fee_status: Option<PaymentStatus>,
    pub pt_trainer_id: Option<i64>,
}

/// Partial update for a client. Unset fields retain their previous value;
/// `pt_trainer_id` uses a nested option so `Some(None)` clears the trainer.
#[derive(Debug, Clone, Default)]
pub struct ClientPatch {
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub membership_type: Option<String>,
    pub fee_status: Option<PaymentStatus>,
    pub pt_trainer_id: Option<Option<i64>>,
}

/// Equality and range predicates for client listing.
#[derive(Debug, Clone, Default)]
pub struct ClientFilter {
    pub is_active: Option<bool>,
    pub fee_status: Option<PaymentStatus>,
    pub membership_type: Option<String>,
    pub pt_trainer_id: Option<i64>,
    pub joined_after: Option<NaiveDate>,
    pub joined_before: Option<NaiveDate>,
}

/// Registers a client, applying schema defaults and checking the optional
/// trainer reference.
pub async fn create_client(db: &DatabaseConnection, new: NewClient) -> Result<ClientModel> {
    let full_name = new.full_name.trim().to_owned();
    if full_name.is_empty() {
        return Err(Error::Validation {
            message: "client full_name cannot be empty".to_owned(),
        });
    }
    if let Some(trainer_id) = new.pt_trainer_id {
        validate::ensure_staff_exists(db, "pt_trainer_id", trainer_id).await?;
    }

    let now = Utc::now();
    let model = client::ActiveModel {
        full_name: Set(full_name),
        email: Set(new.email),
        phone: Set(new.phone),
        joining_date: Set(new.joining_date),
        membership_type: Set(new.membership_type),
        fee_status: Set(new.fee_status.unwrap_or(PaymentStatus::Unpaid)),
        is_active: Set(true),
        pt_trainer_id: Set(new.pt_trainer_id),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };

    Ok(model.insert(db).await?)
}

/// Applies a partial update, re-running the reference check on a newly set
/// trainer.
pub async fn update_client(
    db: &DatabaseConnection,
    client_id: i64,
    patch: ClientPatch,
) -> Result<ClientModel> {
    let existing = store::get_by_id::<Client>(db, client_id).await?;

    if let Some(Some(trainer_id)) = patch.pt_trainer_id {
        validate::ensure_staff_exists(db, "pt_trainer_id", trainer_id).await?;
    }

    let mut model: client::ActiveModel = existing.into();
    if let Some(full_name) = patch.full_name {
        let full_name = full_name.trim().to_owned();
        if full_name.is_empty() {
            return Err(Error::Validation {
                message: "client full_name cannot be empty".to_owned(),
            });
        }
        model.full_name = Set(full_name);
    }
    if let Some(email) = patch.email {
        model.email = Set(Some(email));
    }
    if let Some(phone) = patch.phone {
        model.phone = Set(Some(phone));
    }
    if let Some(membership_type) = patch.membership_type {
        model.membership_type = Set(Some(membership_type));
    }
    if let Some(fee_status) = patch.fee_status {
        model.fee_status = Set(fee_status);
    }
    if let Some(trainer) = patch.pt_trainer_id {
        model.pt_trainer_id = Set(trainer);
    }
    model.updated_at = Set(Utc::now());

    Ok(model.update(db).await?)
}

/// Soft-deactivates a client. Idempotent; the row is never deleted.
pub async fn deactivate_client(db: &DatabaseConnection, client_id: i64) -> Result<ClientModel> {
    let existing = store::get_by_id::<Client>(db, client_id).await?;

    let mut model: client::ActiveModel = existing.into();
    model.is_active = Set(false);
    model.updated_at = Set(Utc::now());

    let updated = model.update(db).await?;
    info!(client_id, "client deactivated");
    Ok(updated)
}

/// Fetches a client by id.
pub async fn get_client(db: &DatabaseConnection, client_id: i64) -> Result<ClientModel> {
    store::get_by_id::<Client>(db, client_id).await
}

/// Lists clients matching the filter, ordered by name.
pub async fn list_clients(
    db: &DatabaseConnection,
    filter: ClientFilter,
    sort: SortOrder,
    page: PageRequest,
) -> Result<Page<ClientModel>> {
    let mut select = Client::find();

    if let Some(is_active) = filter.is_active {
        select = select.filter(client::Column::IsActive.eq(is_active));
    }
    if let Some(fee_status) = filter.fee_status {
        select = select.filter(client::Column::FeeStatus.eq(fee_status));
    }
    if let Some(membership_type) = filter.membership_type {
        select = select.filter(client::Column::MembershipType.eq(membership_type));
    }
    if let Some(trainer_id) = filter.pt_trainer_id {
        select = select.filter(client::Column::PtTrainerId.eq(trainer_id));
    }
    if let Some(joined_after) = filter.joined_after {
        select = select.filter(client::Column::JoiningDate.gte(joined_after));
    }
    if let Some(joined_before) = filter.joined_before {
        select = select.filter(client::Column::JoiningDate.lte(joined_before));
    }

    let select = select.order_by(client::Column::FullName, sort.into());
    store::fetch_page(db, select, page).await
}
