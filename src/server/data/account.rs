//! Account data repository for database operations.
//!
//! This module provides the `AccountRepository` for creating accounts and looking them
//! up by id or email. Entity models are converted to the `Account` domain model at the
//! repository boundary.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter,
};

use crate::server::model::account::{Account, CreateAccountParam};

/// Repository providing database operations for accounts.
pub struct AccountRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AccountRepository<'a> {
    /// Creates a new AccountRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `AccountRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new account.
    ///
    /// The email column is unique; inserting a duplicate surfaces as a `DbErr` whose
    /// `sql_err()` is a unique constraint violation.
    ///
    /// # Arguments
    /// - `param` - Email, password hash and names for the new account
    ///
    /// # Returns
    /// - `Ok(Account)` - The created account
    /// - `Err(DbErr)` - Database error, including duplicate email
    pub async fn create(&self, param: CreateAccountParam) -> Result<Account, DbErr> {
        let now = Utc::now();
        let entity = entity::account::ActiveModel {
            email: ActiveValue::Set(param.email),
            password: ActiveValue::Set(param.password_hash),
            given_name: ActiveValue::Set(param.given_name),
            family_name: ActiveValue::Set(param.family_name),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Account::from_entity(entity))
    }

    /// Finds an account by its id.
    ///
    /// # Returns
    /// - `Ok(Some(Account))` - Account found
    /// - `Ok(None)` - No account with that id
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, account_id: i32) -> Result<Option<Account>, DbErr> {
        let entity = entity::prelude::Account::find_by_id(account_id)
            .one(self.db)
            .await?;

        Ok(entity.map(Account::from_entity))
    }

    /// Finds an account by its email address.
    ///
    /// Matching is exact; callers normalize the address before querying.
    ///
    /// # Returns
    /// - `Ok(Some(Account))` - Account found
    /// - `Ok(None)` - No account with that email
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_email(&self, email: &str) -> Result<Option<Account>, DbErr> {
        let entity = entity::prelude::Account::find()
            .filter(entity::account::Column::Email.eq(email))
            .one(self.db)
            .await?;

        Ok(entity.map(Account::from_entity))
    }
}
