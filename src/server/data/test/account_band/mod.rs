use crate::server::{data::account_band::AccountBandRepository, model::band::CreateMembershipParam};
use sea_orm::{DbErr, SqlErr};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod find;
