use super::*;

/// Tests finding an account by email.
///
/// Expected: Ok(Some(Account)) for a known email, Ok(None) otherwise
#[tokio::test]
async fn finds_account_by_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Account)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let account = factory::account::AccountFactory::new(db)
        .email("known@example.com")
        .build()
        .await?;
    let repo = AccountRepository::new(db);

    let found = repo.find_by_email("known@example.com").await?;
    assert_eq!(found.map(|a| a.id), Some(account.id));

    let missing = repo.find_by_email("unknown@example.com").await?;
    assert!(missing.is_none());

    Ok(())
}
