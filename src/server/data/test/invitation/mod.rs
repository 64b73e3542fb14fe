use crate::server::{
    data::invitation::InvitationRepository,
    error::invitation::InsertInvitationError,
    model::invitation::NewInvitation,
};
use chrono::{Duration, Utc};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete_stale;
mod find_by_code;
mod generate;
mod set_kept;

fn new_invitation(code: &str, band_id: i32, creator_id: i32) -> NewInvitation {
    let now = Utc::now();
    NewInvitation {
        code: code.to_string(),
        band_id,
        creator_id,
        created_at: now,
        expires_at: now + Duration::minutes(15),
    }
}
