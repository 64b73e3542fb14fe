use super::*;

/// Tests looking up a membership by account and band.
///
/// Expected: Ok(Some) for the creator, Ok(None) for an unrelated account
#[tokio::test]
async fn finds_membership_by_pair() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_band_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let account = factory::create_account(db).await?;
    let stranger = factory::create_account(db).await?;
    let (band, _) = factory::helpers::create_band_with_admin(db, &account).await?;
    let repo = AccountBandRepository::new(db);

    let membership = repo.find(account.id, band.id).await?.unwrap();
    assert!(membership.is_admin);

    assert!(repo.find(stranger.id, band.id).await?.is_none());

    Ok(())
}
