use super::*;

/// Tests keeping an invitation as its creator.
///
/// Expected: Ok(true) and the row is marked kept
#[tokio::test]
async fn marks_invitation_kept() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_invitation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let account = factory::create_account(db).await?;
    let (band, _) = factory::helpers::create_band_with_admin(db, &account).await?;
    let invitation = factory::create_invitation(db, band.id, account.id).await?;

    let updated = InvitationRepository::new(db)
        .set_kept(invitation.id, account.id)
        .await?;

    assert!(updated);
    let row = entity::prelude::Invitation::find_by_id(invitation.id)
        .one(db)
        .await?
        .unwrap();
    assert!(row.kept);

    Ok(())
}

/// Tests keeping an invitation created by someone else, or one that does not exist.
///
/// Expected: Ok(false) and the row is unchanged
#[tokio::test]
async fn ignores_other_creators() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_invitation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let account = factory::create_account(db).await?;
    let other = factory::create_account(db).await?;
    let (band, _) = factory::helpers::create_band_with_admin(db, &account).await?;
    let invitation = factory::create_invitation(db, band.id, account.id).await?;
    let repo = InvitationRepository::new(db);

    assert!(!repo.set_kept(invitation.id, other.id).await?);
    assert!(!repo.set_kept(invitation.id + 100, account.id).await?);

    let row = entity::prelude::Invitation::find_by_id(invitation.id)
        .one(db)
        .await?
        .unwrap();
    assert!(!row.kept);

    Ok(())
}
