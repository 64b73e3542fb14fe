use super::*;
use crate::server::{
    error::invitation::InvitationError,
    model::invitation::CreateInvitationParam,
    service::invitation::generator::{CodeSource, InvitationGenerator, RetryPolicy},
};
use std::{collections::VecDeque, sync::Mutex, time::Duration as StdDuration};
use tokio_util::sync::CancellationToken;

/// Hands out scripted codes, then falls back to random ones.
struct ScriptedCodes(Mutex<VecDeque<String>>);

impl ScriptedCodes {
    fn new(codes: &[&str]) -> Self {
        Self(Mutex::new(codes.iter().map(|c| c.to_string()).collect()))
    }
}

impl CodeSource for ScriptedCodes {
    fn next_code(&self) -> String {
        self.0
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| {
                crate::server::service::invitation::generator::generate_code(10)
            })
    }
}

fn fast_policy() -> RetryPolicy {
    RetryPolicy {
        max_attempts: 5,
        base_delay: StdDuration::from_millis(1),
    }
}

/// Tests that a real unique violation triggers a retry with a new code.
///
/// Expected: Ok(Invitation) with the second scripted code
#[tokio::test]
async fn retries_past_existing_code() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_invitation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let account = factory::create_account(db).await?;
    let (band, _) = factory::helpers::create_band_with_admin(db, &account).await?;
    factory::invitation::InvitationFactory::new(db, band.id, account.id)
        .code("AAAAAAAAAA")
        .build()
        .await?;

    let repo = InvitationRepository::new(db);
    let invitation = InvitationGenerator::new(&repo)
        .with_codes(ScriptedCodes::new(&["AAAAAAAAAA", "BBBBBBBBBB"]))
        .with_policy(fast_policy())
        .create(
            CreateInvitationParam {
                creator_id: account.id,
                band_id: band.id,
                ttl: None,
            },
            &CancellationToken::new(),
        )
        .await
        .unwrap();

    assert_eq!(invitation.code, "BBBBBBBBBB");

    Ok(())
}

/// Tests concurrent creation racing on the same first code.
///
/// Both generators start with the same candidate; the unique constraint lets exactly
/// one of them keep it and the other retries.
///
/// Expected: both succeed with distinct codes, one of them the contested code
#[tokio::test]
async fn concurrent_creates_never_share_a_code() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_invitation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let account = factory::create_account(db).await?;
    let (band, _) = factory::helpers::create_band_with_admin(db, &account).await?;
    let repo = InvitationRepository::new(db);
    let param = CreateInvitationParam {
        creator_id: account.id,
        band_id: band.id,
        ttl: None,
    };
    let cancel = CancellationToken::new();

    let first = InvitationGenerator::new(&repo)
        .with_codes(ScriptedCodes::new(&["CCCCCCCCCC", "DDDDDDDDDD"]))
        .with_policy(fast_policy());
    let second = InvitationGenerator::new(&repo)
        .with_codes(ScriptedCodes::new(&["CCCCCCCCCC", "EEEEEEEEEE"]))
        .with_policy(fast_policy());

    let (a, b) = tokio::join!(first.create(param, &cancel), second.create(param, &cancel));
    let (a, b) = (a.unwrap(), b.unwrap());

    assert_ne!(a.code, b.code);
    assert!(a.code == "CCCCCCCCCC" || b.code == "CCCCCCCCCC");
    assert_eq!(entity::prelude::Invitation::find().all(db).await?.len(), 2);

    Ok(())
}

/// Tests creation for a band that does not exist.
///
/// Expected: Err(InvitationError::BandNotFound) without retrying
#[tokio::test]
async fn reports_missing_band() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_invitation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let account = factory::create_account(db).await?;
    let repo = InvitationRepository::new(db);

    let result = InvitationGenerator::new(&repo)
        .with_policy(fast_policy())
        .create(
            CreateInvitationParam {
                creator_id: account.id,
                band_id: 31337,
                ttl: None,
            },
            &CancellationToken::new(),
        )
        .await;

    assert!(matches!(result, Err(InvitationError::BandNotFound(31337))));

    Ok(())
}
