use super::*;

/// Tests finding an account by id.
///
/// Expected: Ok(Some(Account)) for an existing id, Ok(None) otherwise
#[tokio::test]
async fn finds_account_by_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Account)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let account = factory::create_account(db).await?;
    let repo = AccountRepository::new(db);

    let found = repo.find_by_id(account.id).await?.unwrap();
    assert_eq!(found.email, account.email);

    assert!(repo.find_by_id(account.id + 1).await?.is_none());

    Ok(())
}
