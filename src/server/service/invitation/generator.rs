//! Invitation code generation with collision retry.
//!
//! A candidate code is drawn at random and inserted directly; the store's unique
//! constraint decides whether it is free. Collisions are retried with exponential
//! backoff up to a fixed attempt budget. Any other store failure ends the attempt
//! immediately instead of being retried as if it were a collision.

use std::time::Duration;

use chrono::Utc;
use rand::Rng;
use tokio_util::sync::CancellationToken;

use crate::server::{
    error::invitation::{InsertInvitationError, InvitationError},
    model::invitation::{CreateInvitationParam, Invitation, NewInvitation},
    service::invitation::{InvitationStore, INVITATION_CODE_LENGTH},
};

/// Lifetime applied when the caller gives no expiry or an expiry of zero.
pub const DEFAULT_INVITATION_TTL: Duration = Duration::from_secs(15 * 60);

/// Generates a code of `len` uppercase ASCII letters drawn uniformly at random.
pub fn generate_code(len: usize) -> String {
    let mut rng = rand::rng();

    (0..len)
        .map(|_| rng.random_range(b'A'..=b'Z') as char)
        .collect()
}

/// Source of candidate invitation codes.
pub trait CodeSource: Send + Sync {
    fn next_code(&self) -> String;
}

/// Draws codes from the thread-local random generator.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomCodeSource;

impl CodeSource for RandomCodeSource {
    fn next_code(&self) -> String {
        generate_code(INVITATION_CODE_LENGTH)
    }
}

/// Attempt budget and backoff schedule for collision retries.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub base_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 5,
            base_delay: Duration::from_secs(1),
        }
    }
}

impl RetryPolicy {
    /// Delay to wait after the zero-based `attempt` fails: `base_delay * 2^attempt`.
    pub fn delay_after(&self, attempt: u32) -> Duration {
        self.base_delay.saturating_mul(2u32.saturating_pow(attempt))
    }
}

/// Creates invitations, retrying on code collisions.
///
/// Generic over the store so tests can script collisions and faults, and over the code
/// source so tests can force specific codes.
pub struct InvitationGenerator<'a, S: InvitationStore, C: CodeSource = RandomCodeSource> {
    store: &'a S,
    codes: C,
    policy: RetryPolicy,
}

impl<'a, S: InvitationStore> InvitationGenerator<'a, S> {
    /// Creates a generator with random codes and the default retry policy.
    ///
    /// # Arguments
    /// - `store` - Where invitations are inserted
    ///
    /// # Returns
    /// - `InvitationGenerator` - Generator with 5 attempts and 1s base delay
    pub fn new(store: &'a S) -> Self {
        Self {
            store,
            codes: RandomCodeSource,
            policy: RetryPolicy::default(),
        }
    }
}

impl<'a, S: InvitationStore, C: CodeSource> InvitationGenerator<'a, S, C> {
    /// Replaces the code source.
    pub fn with_codes<D: CodeSource>(self, codes: D) -> InvitationGenerator<'a, S, D> {
        InvitationGenerator {
            store: self.store,
            codes,
            policy: self.policy,
        }
    }

    fn has_retry_after(&self, attempt: u32) -> bool {
        attempt + 1 < self.policy.max_attempts
    }

    /// Replaces the retry policy.
    pub fn with_policy(mut self, policy: RetryPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Creates a new invitation for a band.
    ///
    /// Inserts a fresh random code with `expires_at = now + ttl`. When the insert hits
    /// the unique constraint on the code, a new code is drawn after waiting
    /// `base_delay * 2^attempt`. No wait follows the final attempt. The wait is abandoned
    /// as soon as `cancel` fires.
    ///
    /// # Arguments
    /// - `param` - Creator, band and optional lifetime (zero or `None` means 15 minutes)
    /// - `cancel` - Request-scoped cancellation signal
    ///
    /// # Returns
    /// - `Ok(Invitation)` - The persisted invitation
    /// - `Err(InvitationError::InvalidBand)` - Band id was zero; nothing was stored
    /// - `Err(InvitationError::InvalidExpiry)` - Lifetime too large to represent
    /// - `Err(InvitationError::BandNotFound)` - The band does not exist
    /// - `Err(InvitationError::Exhausted)` - Every attempt collided
    /// - `Err(InvitationError::Cancelled)` - Cancelled while waiting to retry
    /// - `Err(InvitationError::Store)` - Unexpected store failure, not retried
    pub async fn create(
        &self,
        param: CreateInvitationParam,
        cancel: &CancellationToken,
    ) -> Result<Invitation, InvitationError> {
        if param.band_id == 0 {
            return Err(InvitationError::InvalidBand);
        }

        let ttl = match param.ttl {
            Some(ttl) if !ttl.is_zero() => ttl,
            _ => DEFAULT_INVITATION_TTL,
        };
        let ttl = chrono::Duration::from_std(ttl).map_err(|_| InvitationError::InvalidExpiry)?;

        for attempt in 0..self.policy.max_attempts {
            let created_at = Utc::now();
            let expires_at = created_at
                .checked_add_signed(ttl)
                .ok_or(InvitationError::InvalidExpiry)?;

            let candidate = NewInvitation {
                code: self.codes.next_code(),
                band_id: param.band_id,
                creator_id: param.creator_id,
                created_at,
                expires_at,
            };

            match self.store.insert(candidate).await {
                Ok(invitation) => return Ok(invitation),
                Err(InsertInvitationError::CodeTaken) if self.has_retry_after(attempt) => {
                    tracing::warn!(
                        band_id = param.band_id,
                        attempt = attempt + 1,
                        delay_ms = self.policy.delay_after(attempt).as_millis() as u64,
                        "Invitation code collision"
                    );
                }
                Err(InsertInvitationError::CodeTaken) => {
                    tracing::warn!(
                        band_id = param.band_id,
                        attempt = attempt + 1,
                        "Invitation code collision on final attempt"
                    );
                }
                Err(InsertInvitationError::BandMissing) => {
                    return Err(InvitationError::BandNotFound(param.band_id));
                }
                Err(InsertInvitationError::Store(err)) => {
                    tracing::error!(
                        band_id = param.band_id,
                        attempt = attempt + 1,
                        "Failed to store invitation: {}",
                        err
                    );
                    return Err(InvitationError::Store(err));
                }
            }

            if self.has_retry_after(attempt) {
                tokio::select! {
                    _ = cancel.cancelled() => return Err(InvitationError::Cancelled),
                    _ = tokio::time::sleep(self.policy.delay_after(attempt)) => {}
                }
            }
        }

        tracing::error!(
            band_id = param.band_id,
            attempts = self.policy.max_attempts,
            "Exhausted attempts to generate a unique invitation code"
        );

        Err(InvitationError::Exhausted {
            attempts: self.policy.max_attempts,
        })
    }
}
