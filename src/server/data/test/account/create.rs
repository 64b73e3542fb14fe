use super::*;

fn param(email: &str) -> CreateAccountParam {
    CreateAccountParam {
        email: email.to_string(),
        password_hash: "$argon2id$placeholder".to_string(),
        given_name: "Grace".to_string(),
        family_name: "Hopper".to_string(),
    }
}

/// Tests creating an account.
///
/// Expected: Ok(Account) with the supplied fields and a generated id
#[tokio::test]
async fn creates_account() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Account)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let account = AccountRepository::new(db)
        .create(param("grace@example.com"))
        .await?;

    assert!(account.id > 0);
    assert_eq!(account.email, "grace@example.com");
    assert_eq!(account.password_hash, "$argon2id$placeholder");
    assert_eq!(account.given_name, "Grace");
    assert_eq!(account.family_name, "Hopper");

    Ok(())
}

/// Tests creating two accounts with the same email.
///
/// Expected: Err(DbErr) classified as a unique constraint violation
#[tokio::test]
async fn rejects_duplicate_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Account)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let repo = AccountRepository::new(db);

    repo.create(param("same@example.com")).await?;
    let result = repo.create(param("same@example.com")).await;

    let err = result.unwrap_err();
    assert!(matches!(
        err.sql_err(),
        Some(SqlErr::UniqueConstraintViolation(_))
    ));

    Ok(())
}
