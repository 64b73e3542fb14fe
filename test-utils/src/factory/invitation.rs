//! Invitation factory for creating test invitation entities.
//!
//! Creation and expiry instants can be shifted into the past so retention and
//! expiry rules can be exercised without waiting.

use crate::factory::helpers::{code_from_id, next_id};
use chrono::{DateTime, Duration, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test invitations with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::invitation::InvitationFactory;
///
/// let stale = InvitationFactory::new(&db, band.id, account.id)
///     .created_minutes_ago(31)
///     .build()
///     .await?;
/// ```
pub struct InvitationFactory<'a> {
    db: &'a DatabaseConnection,
    band_id: i32,
    creator_id: i32,
    code: String,
    created_at: DateTime<Utc>,
    expires_at: DateTime<Utc>,
    kept: bool,
}

impl<'a> InvitationFactory<'a> {
    /// Creates a new InvitationFactory with default values.
    ///
    /// Defaults:
    /// - code: unique ten letter code derived from the factory counter
    /// - created_at: now
    /// - expires_at: fifteen minutes from now
    /// - kept: `false`
    pub fn new(db: &'a DatabaseConnection, band_id: i32, creator_id: i32) -> Self {
        let now = Utc::now();
        Self {
            db,
            band_id,
            creator_id,
            code: code_from_id(next_id()),
            created_at: now,
            expires_at: now + Duration::minutes(15),
            kept: false,
        }
    }

    pub fn code(mut self, code: impl Into<String>) -> Self {
        self.code = code.into();
        self
    }

    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Backdates creation by `minutes`, leaving the expiry untouched.
    pub fn created_minutes_ago(mut self, minutes: i64) -> Self {
        self.created_at = Utc::now() - Duration::minutes(minutes);
        self
    }

    pub fn expires_at(mut self, expires_at: DateTime<Utc>) -> Self {
        self.expires_at = expires_at;
        self
    }

    pub fn kept(mut self, kept: bool) -> Self {
        self.kept = kept;
        self
    }

    /// Builds and inserts the invitation entity into the database.
    pub async fn build(self) -> Result<entity::invitation::Model, DbErr> {
        entity::invitation::ActiveModel {
            code: ActiveValue::Set(self.code),
            band_id: ActiveValue::Set(self.band_id),
            creator_id: ActiveValue::Set(self.creator_id),
            created_at: ActiveValue::Set(self.created_at),
            expires_at: ActiveValue::Set(self.expires_at),
            kept: ActiveValue::Set(self.kept),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a fresh, unkept invitation expiring in fifteen minutes.
pub async fn create_invitation(
    db: &DatabaseConnection,
    band_id: i32,
    creator_id: i32,
) -> Result<entity::invitation::Model, DbErr> {
    InvitationFactory::new(db, band_id, creator_id).build().await
}
