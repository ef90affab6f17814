//! Advisory referential checks.
//!
//! The authoritative enforcement lives in the store's foreign-key
//! constraints; these checks exist to produce an early, field-level error
//! instead of a raw storage-layer rejection. Each check confirms the
//! referenced identity exists in the current snapshot and fails with
//! `DanglingReference` naming the offending field.

use crate::entities::{Client, Staff};
use crate::errors::{Error, Result};
use sea_orm::prelude::*;

/// Confirms a client reference resolves before accepting a write against it.
pub async fn ensure_client_exists(
    db: &DatabaseConnection,
    field: &'static str,
    client_id: i64,
) -> Result<()> {
    if Client::find_by_id(client_id).one(db).await?.is_none() {
        return Err(Error::DanglingReference {
            field,
            id: client_id,
        });
    }
    Ok(())
}

/// Confirms a staff reference resolves before accepting a write against it.
pub async fn ensure_staff_exists(
    db: &DatabaseConnection,
    field: &'static str,
    staff_id: i64,
) -> Result<()> {
    if Staff::find_by_id(staff_id).one(db).await?.is_none() {
        return Err(Error::DanglingReference { field, id: staff_id });
    }
    Ok(())
}
