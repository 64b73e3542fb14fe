use super::*;

/// Tests deletion against explicit cutoffs.
///
/// Uses a 60 minute hard cutoff and a 20 minute unkept cutoff.
///
/// Expected: rows past either applicable cutoff are deleted, the rest survive
#[tokio::test]
async fn deletes_rows_past_either_cutoff() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_invitation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let account = factory::create_account(db).await?;
    let (band, _) = factory::helpers::create_band_with_admin(db, &account).await?;
    let make = || factory::invitation::InvitationFactory::new(db, band.id, account.id);

    let old_kept = make().created_minutes_ago(90).kept(true).build().await?;
    let mid_kept = make().created_minutes_ago(40).kept(true).build().await?;
    let mid_unkept = make().created_minutes_ago(40).build().await?;
    let new_unkept = make().created_minutes_ago(5).build().await?;

    let now = Utc::now();
    let deleted = InvitationRepository::new(db)
        .delete_stale(now - Duration::minutes(60), now - Duration::minutes(20))
        .await?;

    assert_eq!(deleted, 2);
    let remaining: Vec<i32> = entity::prelude::Invitation::find()
        .all(db)
        .await?
        .into_iter()
        .map(|i| i.id)
        .collect();
    assert!(!remaining.contains(&old_kept.id));
    assert!(remaining.contains(&mid_kept.id));
    assert!(!remaining.contains(&mid_unkept.id));
    assert!(remaining.contains(&new_unkept.id));

    Ok(())
}
