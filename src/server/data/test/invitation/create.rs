use super::*;

/// Tests inserting an invitation.
///
/// Expected: Ok(Invitation) that is not kept and carries the supplied code
#[tokio::test]
async fn creates_invitation() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_invitation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let account = factory::create_account(db).await?;
    let (band, _) = factory::helpers::create_band_with_admin(db, &account).await?;

    let invitation = InvitationRepository::new(db)
        .create(new_invitation("ABCDEFGHIJ", band.id, account.id))
        .await
        .unwrap();

    assert_eq!(invitation.code, "ABCDEFGHIJ");
    assert_eq!(invitation.band_id, band.id);
    assert_eq!(invitation.creator_id, account.id);
    assert!(!invitation.kept);

    Ok(())
}

/// Tests inserting a code that already exists.
///
/// Expected: Err(InsertInvitationError::CodeTaken) and still one row
#[tokio::test]
async fn classifies_code_collision() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_invitation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let account = factory::create_account(db).await?;
    let (band, _) = factory::helpers::create_band_with_admin(db, &account).await?;
    factory::invitation::InvitationFactory::new(db, band.id, account.id)
        .code("TAKENTAKEN")
        .build()
        .await?;

    let result = InvitationRepository::new(db)
        .create(new_invitation("TAKENTAKEN", band.id, account.id))
        .await;

    assert!(matches!(result, Err(InsertInvitationError::CodeTaken)));
    assert_eq!(entity::prelude::Invitation::find().all(db).await?.len(), 1);

    Ok(())
}

/// Tests inserting an invitation for a band that does not exist.
///
/// Expected: Err(InsertInvitationError::BandMissing)
#[tokio::test]
async fn classifies_missing_band() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_invitation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let account = factory::create_account(db).await?;

    let result = InvitationRepository::new(db)
        .create(new_invitation("NOBANDHERE", 777, account.id))
        .await;

    assert!(matches!(result, Err(InsertInvitationError::BandMissing)));

    Ok(())
}
