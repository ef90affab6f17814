//! Profiles and authorization predicates.
//!
//! The console consults two oracles before issuing privileged commands:
//! `current_user_role` and `is_admin`, both backed by the profiles table.
//! A profile's role is immutable except through an admin actor, and exactly
//! one profile exists per authenticated identity.

use crate::entities::{profile, Profile, ProfileModel, UserRole};
use crate::errors::{Error, Result};
use crate::store;
use chrono::Utc;
use sea_orm::{prelude::*, Set};
use tracing::info;

/// Payload for creating a profile for a freshly authenticated identity.
#[derive(Debug, Clone)]
pub struct NewProfile {
    pub user_id: String,
    pub full_name: String,
    pub phone: Option<String>,
    /// Defaults to `staff` when omitted, matching the schema default
    pub role: Option<UserRole>,
}

/// Creates the single profile for an authenticated identity.
///
/// Fails with a validation error if the identity already has one.
pub async fn create_profile(db: &DatabaseConnection, new: NewProfile) -> Result<ProfileModel> {
    let full_name = new.full_name.trim().to_owned();
    if full_name.is_empty() {
        return Err(Error::Validation {
            message: "profile full_name cannot be empty".to_owned(),
        });
    }
    if new.user_id.trim().is_empty() {
        return Err(Error::Validation {
            message: "profile user_id cannot be empty".to_owned(),
        });
    }

    let existing = Profile::find()
        .filter(profile::Column::UserId.eq(new.user_id.as_str()))
        .one(db)
        .await?;
    if existing.is_some() {
        return Err(Error::Validation {
            message: format!("a profile already exists for identity '{}'", new.user_id),
        });
    }

    let now = Utc::now();
    let model = profile::ActiveModel {
        user_id: Set(new.user_id),
        full_name: Set(full_name),
        phone: Set(new.phone),
        role: Set(new.role.unwrap_or(UserRole::Staff)),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };

    Ok(model.insert(db).await?)
}

/// Looks up the console role for an authenticated identity.
pub async fn current_user_role(db: &DatabaseConnection, user_id: &str) -> Result<UserRole> {
    let found = Profile::find()
        .filter(profile::Column::UserId.eq(user_id))
        .one(db)
        .await?;

    found.map(|p| p.role).ok_or_else(|| Error::Validation {
        message: format!("no profile registered for identity '{user_id}'"),
    })
}

/// Authorization predicate: does this identity hold the admin role?
pub async fn is_admin(db: &DatabaseConnection, user_id: &str) -> Result<bool> {
    Ok(current_user_role(db, user_id).await?.is_admin())
}

/// Changes a profile's role. Only an admin actor may do this.
pub async fn change_profile_role(
    db: &DatabaseConnection,
    actor: UserRole,
    profile_id: i64,
    role: UserRole,
) -> Result<ProfileModel> {
    if !actor.is_admin() {
        return Err(Error::Validation {
            message: "only an admin may change a profile role".to_owned(),
        });
    }

    let existing = store::get_by_id::<Profile>(db, profile_id).await?;
    let mut model: profile::ActiveModel = existing.into();
    model.role = Set(role);
    model.updated_at = Set(Utc::now());

    let updated = model.update(db).await?;
    info!(profile_id, role = %role, "profile role changed");
    Ok(updated)
}

/// Seeds the initial admin profile on first run. Returns the existing
/// profile untouched when the identity is already registered.
pub async fn ensure_admin_profile(
    db: &DatabaseConnection,
    user_id: &str,
    full_name: &str,
) -> Result<ProfileModel> {
    let existing = Profile::find()
        .filter(profile::Column::UserId.eq(user_id))
        .one(db)
        .await?;
    if let Some(profile) = existing {
        return Ok(profile);
    }

    let profile = create_profile(
        db,
        NewProfile {
            user_id: user_id.to_owned(),
            full_name: full_name.to_owned(),
            phone: None,
            role: Some(UserRole::Admin),
        },
    )
    .await?;
    info!(user_id, "seeded admin profile");
    Ok(profile)
}
