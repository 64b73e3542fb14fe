use crate::server::{data::account::AccountRepository, model::account::CreateAccountParam};
use sea_orm::{DbErr, SqlErr};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod find_by_email;
mod find_by_id;
