//! Band invitation lifecycle.
//!
//! Invitations are short random codes that grant membership in a band until they expire
//! or are culled. This module holds the persistence seam shared by generation and
//! redemption, the code format rules, and `InvitationService` for creator-side
//! management. Generation with collision retry lives in [`generator`] and redemption in
//! [`redeemer`].

pub mod generator;
pub mod redeemer;

use async_trait::async_trait;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::invitation::InvitationRepository,
    error::{
        invitation::{InsertInvitationError, InvitationError},
        AppError,
    },
    model::invitation::{Invitation, KeepInvitationParam, NewInvitation},
};

/// Number of letters in an invitation code.
pub const INVITATION_CODE_LENGTH: usize = 10;

/// Persistence seam for inserting invitations.
///
/// The generator only needs a single insert operation whose failures are classified
/// into collision, missing band, or other store faults.
#[async_trait]
pub trait InvitationStore: Send + Sync {
    async fn insert(&self, invitation: NewInvitation) -> Result<Invitation, InsertInvitationError>;
}

/// Normalizes a user-supplied invitation code and checks its format.
///
/// Surrounding whitespace is trimmed and letters are uppercased before checking for
/// exactly ten ASCII letters.
///
/// # Arguments
/// - `raw` - Code as typed by the user
///
/// # Returns
/// - `Ok(String)` - Normalized ten-letter code
/// - `Err(InvitationError::InvalidCode)` - Wrong length or non-letter characters
pub fn normalize_code(raw: &str) -> Result<String, InvitationError> {
    let code = raw.trim().to_ascii_uppercase();

    if code.len() != INVITATION_CODE_LENGTH || !code.bytes().all(|b| b.is_ascii_uppercase()) {
        return Err(InvitationError::InvalidCode);
    }

    Ok(code)
}

/// Service for creator-side invitation management.
pub struct InvitationService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> InvitationService<'a> {
    /// Creates a new InvitationService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `InvitationService` - New service instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Marks an invitation as kept so the culler only removes it after the hard
    /// retention ceiling.
    ///
    /// # Arguments
    /// - `param` - Invitation id and the account asking to keep it
    ///
    /// # Returns
    /// - `Ok(())` - The invitation is now kept
    /// - `Err(AppError::NotFound)` - No invitation with that id was created by the account
    /// - `Err(AppError::DbErr)` - Database error during update
    pub async fn keep(&self, param: KeepInvitationParam) -> Result<(), AppError> {
        let repo = InvitationRepository::new(self.db);

        if !repo.set_kept(param.invitation_id, param.creator_id).await? {
            return Err(AppError::NotFound(format!(
                "Invitation {} not found",
                param.invitation_id
            )));
        }

        Ok(())
    }
}
