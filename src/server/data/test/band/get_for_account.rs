use super::*;

/// Tests listing the bands of an account.
///
/// Verifies only the account's own memberships are returned, with the right admin flag.
///
/// Expected: two bands, admin in the first and member in the second
#[tokio::test]
async fn lists_memberships_with_roles() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_band_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let account = factory::create_account(db).await?;
    let other = factory::create_account(db).await?;
    let (owned, _) = factory::helpers::create_band_with_admin(db, &account).await?;
    let (joined, _) = factory::helpers::create_band_with_admin(db, &other).await?;
    factory::account_band::AccountBandFactory::new(db, account.id, joined.id)
        .admin(false)
        .build()
        .await?;
    factory::helpers::create_band_with_admin(db, &other).await?;

    let bands = BandRepository::new(db).get_for_account(account.id).await?;

    assert_eq!(bands.len(), 2);
    let owned_entry = bands.iter().find(|b| b.band.id == owned.id).unwrap();
    let joined_entry = bands.iter().find(|b| b.band.id == joined.id).unwrap();
    assert!(owned_entry.is_admin);
    assert!(!joined_entry.is_admin);

    Ok(())
}

/// Tests an account without memberships.
///
/// Expected: Ok(empty Vec)
#[tokio::test]
async fn returns_empty_for_account_without_bands() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_band_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let account = factory::create_account(db).await?;

    let bands = BandRepository::new(db).get_for_account(account.id).await?;
    assert!(bands.is_empty());

    Ok(())
}
