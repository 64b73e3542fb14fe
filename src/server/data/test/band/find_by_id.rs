use super::*;

/// Tests finding a band by id.
///
/// Expected: Ok(Some(Band)) for an existing id, Ok(None) otherwise
#[tokio::test]
async fn finds_band_by_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_band_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let band = factory::create_band(db).await?;
    let repo = BandRepository::new(db);

    let found = repo.find_by_id(band.id).await?.unwrap();
    assert_eq!(found.name, band.name);

    assert!(repo.find_by_id(band.id + 1).await?.is_none());

    Ok(())
}
