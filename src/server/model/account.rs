//! Account domain models and parameters.

use chrono::{DateTime, Utc};

use crate::model::account::AccountDto;

/// Account identity with its stored credential.
#[derive(Debug, Clone, PartialEq)]
pub struct Account {
    pub id: i32,
    pub email: String,
    /// Argon2 PHC string. Dropped by `into_dto`.
    pub password_hash: String,
    pub given_name: String,
    pub family_name: String,
    pub created_at: DateTime<Utc>,
}

impl Account {
    /// Converts the account into its public DTO, omitting the password hash.
    pub fn into_dto(self) -> AccountDto {
        AccountDto {
            id: self.id,
            email: self.email,
            given_name: self.given_name,
            family_name: self.family_name,
        }
    }

    /// Converts an entity model to an account domain model at the repository boundary.
    pub fn from_entity(entity: entity::account::Model) -> Self {
        Self {
            id: entity.id,
            email: entity.email,
            password_hash: entity.password,
            given_name: entity.given_name,
            family_name: entity.family_name,
            created_at: entity.created_at,
        }
    }
}

/// Parameters for inserting an account whose password has already been hashed.
#[derive(Debug, Clone)]
pub struct CreateAccountParam {
    pub email: String,
    pub password_hash: String,
    pub given_name: String,
    pub family_name: String,
}

/// Plain-text registration data as received from a client.
#[derive(Debug, Clone)]
pub struct RegisterAccountParam {
    pub email: String,
    pub password: String,
    pub given_name: String,
    pub family_name: String,
}
