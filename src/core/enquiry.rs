//! Enquiry funnel business logic.
//!
//! Enquiries move pending -> contacted -> converted/closed (pending may also
//! resolve directly). Terminal states admit no further status or assignment
//! changes. Conversion inserts a client from the enquiry's contact details;
//! the two writes are independent commands with no cross-command atomicity.

use crate::core::client::{self, NewClient};
use crate::core::validate;
use crate::entities::{enquiry, ClientModel, Enquiry, EnquiryModel, EnquiryStatus};
use crate::errors::{Error, Result};
use crate::store::{self, Page, PageRequest, SortOrder};
use chrono::{NaiveDate, Utc};
use sea_orm::{prelude::*, QueryOrder, Set};
use tracing::info;

/// Payload for logging a walk-in or phone enquiry.
#[derive(Debug, Clone)]
pub struct NewEnquiry {
    pub full_name: String,
    pub phone: String,
    pub email: Option<String>,
    pub purpose: Option<String>,
    pub assigned_to: Option<i64>,
    pub follow_up_date: Option<NaiveDate>,
    pub notes: Option<String>,
}

/// Partial update for an enquiry. Unset fields retain their previous value;
/// `assigned_to` uses a nested option so `Some(None)` unassigns.
#[derive(Debug, Clone, Default)]
pub struct EnquiryPatch {
    pub full_name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub purpose: Option<String>,
    pub status: Option<EnquiryStatus>,
    pub assigned_to: Option<Option<i64>>,
    pub follow_up_date: Option<NaiveDate>,
    pub notes: Option<String>,
}

/// Equality and range predicates for enquiry listing.
#[derive(Debug, Clone, Default)]
pub struct EnquiryFilter {
    pub status: Option<EnquiryStatus>,
    pub assigned_to: Option<i64>,
    pub follow_up_before: Option<NaiveDate>,
    pub follow_up_after: Option<NaiveDate>,
}

/// Logs a new enquiry at the top of the funnel.
pub async fn create_enquiry(db: &DatabaseConnection, new: NewEnquiry) -> Result<EnquiryModel> {
    let full_name = new.full_name.trim().to_owned();
    if full_name.is_empty() {
        return Err(Error::Validation {
            message: "enquiry full_name cannot be empty".to_owned(),
        });
    }
    let phone = new.phone.trim().to_owned();
    if phone.is_empty() {
        return Err(Error::Validation {
            message: "enquiry phone cannot be empty".to_owned(),
        });
    }
    if let Some(staff_id) = new.assigned_to {
        validate::ensure_staff_exists(db, "assigned_to", staff_id).await?;
    }

    let now = Utc::now();
    let model = enquiry::ActiveModel {
        full_name: Set(full_name),
        phone: Set(phone),
        email: Set(new.email),
        purpose: Set(new.purpose),
        status: Set(EnquiryStatus::Pending),
        assigned_to: Set(new.assigned_to),
        follow_up_date: Set(new.follow_up_date),
        notes: Set(new.notes),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };

    Ok(model.insert(db).await?)
}

/// Applies a partial update, enforcing the funnel transition rules and
/// freezing the assignment once the enquiry is terminal.
pub async fn update_enquiry(
    db: &DatabaseConnection,
    enquiry_id: i64,
    patch: EnquiryPatch,
) -> Result<EnquiryModel> {
    let existing = store::get_by_id::<Enquiry>(db, enquiry_id).await?;
    let current = existing.status;

    if let Some(next) = patch.status {
        if next != current && !current.can_transition_to(next) {
            return Err(Error::InvalidStatusTransition {
                from: current.as_str(),
                to: next.as_str(),
            });
        }
    }
    if patch.assigned_to.is_some() && current.is_terminal() {
        return Err(Error::Validation {
            message: format!(
                "assignment is frozen once an enquiry is {current}"
            ),
        });
    }
    if let Some(Some(staff_id)) = patch.assigned_to {
        validate::ensure_staff_exists(db, "assigned_to", staff_id).await?;
    }

    let mut model: enquiry::ActiveModel = existing.into();
    if let Some(full_name) = patch.full_name {
        model.full_name = Set(full_name);
    }
    if let Some(phone) = patch.phone {
        model.phone = Set(phone);
    }
    if let Some(email) = patch.email {
        model.email = Set(Some(email));
    }
    if let Some(purpose) = patch.purpose {
        model.purpose = Set(Some(purpose));
    }
    if let Some(status) = patch.status {
        model.status = Set(status);
    }
    if let Some(assigned_to) = patch.assigned_to {
        model.assigned_to = Set(assigned_to);
    }
    if let Some(follow_up_date) = patch.follow_up_date {
        model.follow_up_date = Set(Some(follow_up_date));
    }
    if let Some(notes) = patch.notes {
        model.notes = Set(Some(notes));
    }
    model.updated_at = Set(Utc::now());

    Ok(model.update(db).await?)
}

/// Converts an enquiry into a client: inserts a client from the contact
/// details, then marks the enquiry converted. The client insert lands
/// first; if marking the enquiry fails the caller retries that half.
pub async fn convert_to_client(
    db: &DatabaseConnection,
    enquiry_id: i64,
    joining_date: NaiveDate,
) -> Result<(EnquiryModel, ClientModel)> {
    let existing = store::get_by_id::<Enquiry>(db, enquiry_id).await?;
    if !existing.status.can_transition_to(EnquiryStatus::Converted) {
        return Err(Error::InvalidStatusTransition {
            from: existing.status.as_str(),
            to: EnquiryStatus::Converted.as_str(),
        });
    }

    let new_client = client::create_client(
        db,
        NewClient {
            full_name: existing.full_name.clone(),
            email: existing.email.clone(),
            phone: Some(existing.phone.clone()),
            joining_date,
            membership_type: None,
            fee_status: None,
            pt_trainer_id: None,
        },
    )
    .await?;

    let mut model: enquiry::ActiveModel = existing.into();
    model.status = Set(EnquiryStatus::Converted);
    model.updated_at = Set(Utc::now());
    let converted = model.update(db).await?;

    info!(enquiry_id, client_id = new_client.id, "enquiry converted");
    Ok((converted, new_client))
}

/// Lists enquiries matching the filter, newest first or oldest first.
pub async fn list_enquiries(
    db: &DatabaseConnection,
    filter: EnquiryFilter,
    sort: SortOrder,
    page: PageRequest,
) -> Result<Page<EnquiryModel>> {
    let mut select = Enquiry::find();

    if let Some(status) = filter.status {
        select = select.filter(enquiry::Column::Status.eq(status));
    }
    if let Some(staff_id) = filter.assigned_to {
        select = select.filter(enquiry::Column::AssignedTo.eq(staff_id));
    }
    if let Some(before) = filter.follow_up_before {
        select = select.filter(enquiry::Column::FollowUpDate.lte(before));
    }
    if let Some(after) = filter.follow_up_after {
        select = select.filter(enquiry::Column::FollowUpDate.gte(after));
    }

    let select = select.order_by(enquiry::Column::CreatedAt, sort.into());
    store::fetch_page(db, select, page).await
}
