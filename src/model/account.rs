use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Clone, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateAccountDto {
    pub email: String,
    pub password: String,
    pub given_name: String,
    pub family_name: String,
}

#[derive(Serialize, Deserialize, Clone, ToSchema)]
pub struct LoginDto {
    pub email: String,
    pub password: String,
}

/// Public view of an account. Never carries the password hash.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AccountDto {
    pub id: i32,
    pub email: String,
    pub given_name: String,
    pub family_name: String,
}
