//! Account service for registration and login.
//!
//! This module provides the `AccountService`, which hashes passwords on registration,
//! verifies them on login, and loads the current account for authenticated requests.
//! Token issuance is left to the controller so a signing failure never loses a freshly
//! created account.

use sea_orm::{DatabaseConnection, SqlErr};

use crate::server::{
    data::account::AccountRepository,
    error::{auth::AuthError, AppError},
    model::account::{Account, CreateAccountParam, RegisterAccountParam},
    service::password::{hash_password, verify_password},
};

/// Service providing business logic for accounts.
pub struct AccountService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AccountService<'a> {
    /// Creates a new AccountService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `AccountService` - New service instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a new account.
    ///
    /// The email is trimmed and lowercased before storage. The password is hashed with
    /// Argon2 and the plaintext is dropped.
    ///
    /// # Arguments
    /// - `param` - Email, plaintext password and names
    ///
    /// # Returns
    /// - `Ok(Account)` - The created account
    /// - `Err(AppError::BadRequest)` - Email or password is empty
    /// - `Err(AppError::Conflict)` - An account with this email already exists
    /// - `Err(AppError::AuthErr)` - Password hashing failed
    /// - `Err(AppError::DbErr)` - Database error during insert
    pub async fn register(&self, param: RegisterAccountParam) -> Result<Account, AppError> {
        let email = normalize_email(&param.email);
        if email.is_empty() {
            return Err(AppError::BadRequest("Email must not be empty".to_string()));
        }
        if param.password.is_empty() {
            return Err(AppError::BadRequest("Password must not be empty".to_string()));
        }

        let password_hash = hash_password(&param.password)?;

        let result = AccountRepository::new(self.db)
            .create(CreateAccountParam {
                email,
                password_hash,
                given_name: param.given_name,
                family_name: param.family_name,
            })
            .await;

        match result {
            Ok(account) => Ok(account),
            Err(err) if matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) => {
                Err(AppError::Conflict(
                    "An account with this email already exists".to_string(),
                ))
            }
            Err(err) => Err(err.into()),
        }
    }

    /// Checks a login attempt.
    ///
    /// Unknown email and wrong password produce the same error.
    ///
    /// # Arguments
    /// - `email` - Email as entered
    /// - `password` - Plaintext password as entered
    ///
    /// # Returns
    /// - `Ok(Account)` - Credentials matched
    /// - `Err(AppError::AuthErr(AuthError::InvalidLogin))` - No match
    /// - `Err(AppError::DbErr)` - Database error during lookup
    pub async fn login(&self, email: &str, password: &str) -> Result<Account, AppError> {
        let Some(account) = AccountRepository::new(self.db)
            .find_by_email(&normalize_email(email))
            .await?
        else {
            return Err(AuthError::InvalidLogin.into());
        };

        if !verify_password(password, &account.password_hash)? {
            return Err(AuthError::InvalidLogin.into());
        }

        Ok(account)
    }

    /// Loads an account by id.
    ///
    /// # Returns
    /// - `Ok(Account)` - Account found
    /// - `Err(AppError::NotFound)` - No account with that id
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn get(&self, account_id: i32) -> Result<Account, AppError> {
        AccountRepository::new(self.db)
            .find_by_id(account_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Account {} not found", account_id)))
    }
}

fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}
