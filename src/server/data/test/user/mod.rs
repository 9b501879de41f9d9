use crate::server::{
    data::user::UserRepository,
    model::user::{
        CreateFakeUserParam, IssueVerificationCodeParam, SetBanParam, SyncPlayerParam,
        UpsertDiscordUserParam,
    },
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod fake_users;
mod find_by_minecraft_uuid;
mod find_by_uuid_and_code;
mod get_with_starter;
mod issue_verification_code;
mod mark_verified;
mod set_admin_by_discord_ids;
mod set_banned;
mod set_starter_given;
mod sync_player;
mod upsert_discord_user;
