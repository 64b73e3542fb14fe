use super::*;

/// Tests creating a band.
///
/// Expected: Ok(Band) with the given name and matching timestamps
#[tokio::test]
async fn creates_band() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_band_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let band = BandRepository::new(db)
        .create("Night Shift".to_string())
        .await?;

    assert!(band.id > 0);
    assert_eq!(band.name, "Night Shift");
    assert_eq!(band.created_at, band.updated_at);

    Ok(())
}
