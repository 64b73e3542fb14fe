use super::*;

/// Tests creating a membership.
///
/// Expected: Ok(Membership) with the given admin flag
#[tokio::test]
async fn creates_membership() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_band_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let account = factory::create_account(db).await?;
    let band = factory::create_band(db).await?;

    let membership = AccountBandRepository::new(db)
        .create(CreateMembershipParam {
            account_id: account.id,
            band_id: band.id,
            is_admin: false,
        })
        .await?;

    assert_eq!(membership.account_id, account.id);
    assert_eq!(membership.band_id, band.id);
    assert!(!membership.is_admin);

    Ok(())
}

/// Tests a second membership for the same account and band.
///
/// Expected: Err(DbErr) classified as a unique constraint violation
#[tokio::test]
async fn rejects_duplicate_membership() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_band_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let account = factory::create_account(db).await?;
    let (band, _) = factory::helpers::create_band_with_admin(db, &account).await?;

    let err = AccountBandRepository::new(db)
        .create(CreateMembershipParam {
            account_id: account.id,
            band_id: band.id,
            is_admin: false,
        })
        .await
        .unwrap_err();

    assert!(matches!(
        err.sql_err(),
        Some(SqlErr::UniqueConstraintViolation(_))
    ));

    Ok(())
}

/// Tests a membership for a band that does not exist.
///
/// Expected: Err(DbErr) classified as a foreign key violation
#[tokio::test]
async fn rejects_missing_band() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_band_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let account = factory::create_account(db).await?;

    let err = AccountBandRepository::new(db)
        .create(CreateMembershipParam {
            account_id: account.id,
            band_id: 4242,
            is_admin: false,
        })
        .await
        .unwrap_err();

    assert!(matches!(
        err.sql_err(),
        Some(SqlErr::ForeignKeyConstraintViolation(_))
    ));

    Ok(())
}
