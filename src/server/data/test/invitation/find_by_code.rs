use super::*;

/// Tests looking up an invitation by its code.
///
/// Expected: Ok(Some) for the stored code, Ok(None) for another
#[tokio::test]
async fn finds_invitation_by_code() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_invitation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let account = factory::create_account(db).await?;
    let (band, _) = factory::helpers::create_band_with_admin(db, &account).await?;
    let stored = factory::invitation::InvitationFactory::new(db, band.id, account.id)
        .code("FINDMEHERE")
        .build()
        .await?;
    let repo = InvitationRepository::new(db);

    let found = repo.find_by_code("FINDMEHERE").await?.unwrap();
    assert_eq!(found.id, stored.id);
    assert_eq!(found.expires_at, stored.expires_at);

    assert!(repo.find_by_code("NOTHEREXXX").await?.is_none());

    Ok(())
}
