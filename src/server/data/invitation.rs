//! Invitation data repository for database operations.
//!
//! This module provides the `InvitationRepository` for persisting invitation codes,
//! looking them up for redemption, marking them as kept, and bulk-deleting stale rows
//! for the culler. Constraint failures on insert are classified into
//! `InsertInvitationError` so the generator can tell a code collision apart from a
//! missing band.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, Condition, DatabaseConnection,
    DbErr, EntityTrait, QueryFilter, SqlErr,
};

use crate::server::{
    error::invitation::InsertInvitationError,
    model::invitation::{Invitation, NewInvitation},
    service::invitation::InvitationStore,
};

/// Repository providing database operations for band invitations.
pub struct InvitationRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> InvitationRepository<'a> {
    /// Creates a new InvitationRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `InvitationRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts an invitation row with the given code.
    ///
    /// The store's unique constraint on `code` is the only authority on uniqueness;
    /// no existence check is made beforehand.
    ///
    /// # Arguments
    /// - `invitation` - Code, band, creator and timestamps for the new row
    ///
    /// # Returns
    /// - `Ok(Invitation)` - The persisted invitation with its assigned id
    /// - `Err(InsertInvitationError::CodeTaken)` - The code already exists
    /// - `Err(InsertInvitationError::BandMissing)` - The band or creator does not exist
    /// - `Err(InsertInvitationError::Store)` - Any other database error
    pub async fn create(
        &self,
        invitation: NewInvitation,
    ) -> Result<Invitation, InsertInvitationError> {
        let result = entity::invitation::ActiveModel {
            code: ActiveValue::Set(invitation.code),
            band_id: ActiveValue::Set(invitation.band_id),
            creator_id: ActiveValue::Set(invitation.creator_id),
            created_at: ActiveValue::Set(invitation.created_at),
            expires_at: ActiveValue::Set(invitation.expires_at),
            kept: ActiveValue::Set(false),
            ..Default::default()
        }
        .insert(self.db)
        .await;

        match result {
            Ok(entity) => Ok(Invitation::from_entity(entity)),
            Err(err) => Err(match err.sql_err() {
                Some(SqlErr::UniqueConstraintViolation(_)) => InsertInvitationError::CodeTaken,
                Some(SqlErr::ForeignKeyConstraintViolation(_)) => {
                    InsertInvitationError::BandMissing
                }
                _ => InsertInvitationError::Store(err),
            }),
        }
    }

    /// Finds an invitation by its exact code.
    ///
    /// # Returns
    /// - `Ok(Some(Invitation))` - Invitation found
    /// - `Ok(None)` - No invitation with that code
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_code(&self, code: &str) -> Result<Option<Invitation>, DbErr> {
        let entity = entity::prelude::Invitation::find()
            .filter(entity::invitation::Column::Code.eq(code))
            .one(self.db)
            .await?;

        Ok(entity.map(Invitation::from_entity))
    }

    /// Marks an invitation as kept so it survives the short unkept retention window.
    ///
    /// Only the invitation's creator may keep it; the update is filtered on both id
    /// and creator so a mismatch affects no rows.
    ///
    /// # Arguments
    /// - `invitation_id` - Id of the invitation to keep
    /// - `creator_id` - Account that must have created the invitation
    ///
    /// # Returns
    /// - `Ok(true)` - The invitation was marked kept
    /// - `Ok(false)` - No invitation with that id belongs to the creator
    /// - `Err(DbErr)` - Database error during update
    pub async fn set_kept(&self, invitation_id: i32, creator_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Invitation::update_many()
            .col_expr(entity::invitation::Column::Kept, Expr::value(true))
            .filter(entity::invitation::Column::Id.eq(invitation_id))
            .filter(entity::invitation::Column::CreatorId.eq(creator_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Deletes invitations past their retention window.
    ///
    /// A row is removed when it was created before `hard_cutoff`, or when it is not
    /// kept and was created before `unkept_cutoff`. Both rules run in one statement.
    ///
    /// # Arguments
    /// - `hard_cutoff` - Rows created before this instant are always deleted
    /// - `unkept_cutoff` - Unkept rows created before this instant are deleted
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of rows deleted
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete_stale(
        &self,
        hard_cutoff: DateTime<Utc>,
        unkept_cutoff: DateTime<Utc>,
    ) -> Result<u64, DbErr> {
        let result = entity::prelude::Invitation::delete_many()
            .filter(
                Condition::any()
                    .add(entity::invitation::Column::CreatedAt.lt(hard_cutoff))
                    .add(
                        Condition::all()
                            .add(entity::invitation::Column::Kept.eq(false))
                            .add(entity::invitation::Column::CreatedAt.lt(unkept_cutoff)),
                    ),
            )
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}

#[async_trait]
impl InvitationStore for InvitationRepository<'_> {
    async fn insert(&self, invitation: NewInvitation) -> Result<Invitation, InsertInvitationError> {
        self.create(invitation).await
    }
}
