//! Invitation redemption.
//!
//! Redeeming a live code adds the redeeming account to the invitation's band as a
//! regular member. The invitation row is left untouched, so a live code can be
//! redeemed by any number of accounts until it expires or is culled.

use chrono::{DateTime, Utc};
use sea_orm::{DatabaseConnection, SqlErr};

use crate::server::{
    data::{
        account_band::AccountBandRepository, band::BandRepository,
        invitation::InvitationRepository,
    },
    error::invitation::InvitationError,
    model::{
        band::{CreateMembershipParam, Membership},
        invitation::RedeemInvitationParam,
    },
    service::invitation::normalize_code,
};

/// Turns invitation codes into band memberships.
pub struct InvitationRedeemer<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> InvitationRedeemer<'a> {
    /// Creates a new InvitationRedeemer instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `InvitationRedeemer` - New redeemer instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Redeems a code for the account at the current time.
    ///
    /// See [`InvitationRedeemer::redeem_at`].
    pub async fn redeem(
        &self,
        param: RedeemInvitationParam,
    ) -> Result<Membership, InvitationError> {
        self.redeem_at(param, Utc::now()).await
    }

    /// Redeems a code for the account as of `now`.
    ///
    /// The code is normalized and format-checked before any lookup. Redemption is
    /// allowed only while `now < expires_at`. The resulting membership is never an
    /// admin membership.
    ///
    /// # Arguments
    /// - `param` - Redeeming account and the code it supplied
    /// - `now` - Instant the expiry is checked against
    ///
    /// # Returns
    /// - `Ok(Membership)` - The newly created membership
    /// - `Err(InvitationError::InvalidCode)` - The code is not ten letters
    /// - `Err(InvitationError::NotFound)` - No invitation has that code
    /// - `Err(InvitationError::Expired)` - The invitation expired at or before `now`
    /// - `Err(InvitationError::BandNotFound)` - The band no longer exists
    /// - `Err(InvitationError::AlreadyMember)` - The account already belongs to the band
    /// - `Err(InvitationError::Store)` - Database error
    pub async fn redeem_at(
        &self,
        param: RedeemInvitationParam,
        now: DateTime<Utc>,
    ) -> Result<Membership, InvitationError> {
        let code = normalize_code(&param.code)?;

        let invitation = InvitationRepository::new(self.db)
            .find_by_code(&code)
            .await?
            .ok_or(InvitationError::NotFound)?;

        if !invitation.is_live_at(now) {
            return Err(InvitationError::Expired {
                expired_at: invitation.expires_at,
            });
        }

        if BandRepository::new(self.db)
            .find_by_id(invitation.band_id)
            .await?
            .is_none()
        {
            return Err(InvitationError::BandNotFound(invitation.band_id));
        }

        let result = AccountBandRepository::new(self.db)
            .create(CreateMembershipParam {
                account_id: param.account_id,
                band_id: invitation.band_id,
                is_admin: false,
            })
            .await;

        match result {
            Ok(membership) => {
                tracing::info!(
                    account_id = param.account_id,
                    band_id = invitation.band_id,
                    invitation_id = invitation.id,
                    "Redeemed invitation"
                );
                Ok(membership)
            }
            Err(err) => Err(match err.sql_err() {
                Some(SqlErr::UniqueConstraintViolation(_)) => InvitationError::AlreadyMember,
                Some(SqlErr::ForeignKeyConstraintViolation(_)) => {
                    InvitationError::BandNotFound(invitation.band_id)
                }
                _ => InvitationError::Store(err),
            }),
        }
    }
}
