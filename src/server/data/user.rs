//! User data repository for database operations.
//!
//! This module provides the `UserRepository` for managing user records in the database.
//! Users are correlated by Minecraft UUID for everything the game server plugin does and
//! by Discord ID for everything the website does; both columns are unique.

use chrono::Utc;
use migration::OnConflict;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr,
    EntityTrait, QueryFilter, QueryOrder,
};

use crate::server::model::user::{
    CreateFakeUserParam, IssueVerificationCodeParam, SetBanParam, SyncPlayerParam,
    UpsertDiscordUserParam, User,
};

/// Repository providing database operations for user management.
pub struct UserRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `UserRepository` - New repository instance
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Finds a user by their Minecraft UUID.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - User linked to that Minecraft account
    /// - `Ok(None)` - No user with that UUID
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_minecraft_uuid(&self, minecraft_uuid: &str) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find()
            .filter(entity::user::Column::MinecraftUuid.eq(minecraft_uuid))
            .one(self.db)
            .await?;

        Ok(entity.map(User::from_entity))
    }

    /// Finds a user by their Discord ID.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - User found with full data
    /// - `Ok(None)` - No user found with that Discord ID
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_discord_id(&self, discord_id: u64) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find()
            .filter(entity::user::Column::DiscordId.eq(discord_id.to_string()))
            .one(self.db)
            .await?;

        Ok(entity.map(User::from_entity))
    }

    /// Finds the user holding the given pending verification code.
    ///
    /// Both the UUID and the code must match; a redeemed code has been cleared and
    /// therefore never matches again.
    pub async fn find_by_uuid_and_code(
        &self,
        minecraft_uuid: &str,
        code: &str,
    ) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find()
            .filter(entity::user::Column::MinecraftUuid.eq(minecraft_uuid))
            .filter(entity::user::Column::VerificationCode.eq(code))
            .one(self.db)
            .await?;

        Ok(entity.map(User::from_entity))
    }

    /// Gets every user that has rolled a starter, most recent roll first.
    pub async fn get_with_starter(&self) -> Result<Vec<User>, DbErr> {
        let entities = entity::prelude::User::find()
            .filter(entity::user::Column::StarterId.is_not_null())
            .order_by_desc(entity::user::Column::RolledAt)
            .order_by_asc(entity::user::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(User::from_entity).collect())
    }

    /// Upserts a user after a Discord login.
    ///
    /// Inserts a new user or updates an existing user's Discord username and nickname.
    /// The admin flag is only written when explicitly provided, so a regular login never
    /// revokes admin privileges.
    pub async fn upsert_discord_user(&self, param: UpsertDiscordUserParam) -> Result<User, DbErr> {
        let now = Utc::now();

        let mut update_columns = vec![
            entity::user::Column::DiscordUsername,
            entity::user::Column::Nickname,
            entity::user::Column::UpdatedAt,
        ];

        if param.is_admin.is_some() {
            update_columns.push(entity::user::Column::IsAdmin);
        }

        let entity = entity::prelude::User::insert(entity::user::ActiveModel {
            discord_id: ActiveValue::Set(Some(param.discord_id.to_string())),
            discord_username: ActiveValue::Set(param.discord_username),
            nickname: ActiveValue::Set(param.nickname),
            is_admin: ActiveValue::Set(param.is_admin.unwrap_or(false)),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..new_user()
        })
        .on_conflict(
            OnConflict::column(entity::user::Column::DiscordId)
                .update_columns(update_columns)
                .to_owned(),
        )
        .exec_with_returning(self.db)
        .await?;

        Ok(User::from_entity(entity))
    }

    /// Issues a verification code for a Minecraft account.
    ///
    /// Creates the user on first contact. An existing user gets the new code, which
    /// replaces any previous one, and is marked unverified until the code is redeemed.
    pub async fn issue_verification_code(
        &self,
        param: IssueVerificationCodeParam,
    ) -> Result<User, DbErr> {
        let now = Utc::now();

        let entity = entity::prelude::User::insert(entity::user::ActiveModel {
            minecraft_uuid: ActiveValue::Set(Some(param.minecraft_uuid)),
            minecraft_username: ActiveValue::Set(Some(param.minecraft_username.clone())),
            nickname: ActiveValue::Set(param.minecraft_username),
            verification_code: ActiveValue::Set(Some(param.code)),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..new_user()
        })
        .on_conflict(
            OnConflict::column(entity::user::Column::MinecraftUuid)
                .update_columns([
                    entity::user::Column::MinecraftUsername,
                    entity::user::Column::VerificationCode,
                    entity::user::Column::Verified,
                    entity::user::Column::UpdatedAt,
                ])
                .to_owned(),
        )
        .exec_with_returning(self.db)
        .await?;

        Ok(User::from_entity(entity))
    }

    /// Records a sync from the Minecraft server, creating the player on first sight.
    ///
    /// Ban, verification, starter and Discord state are never touched by a sync.
    pub async fn sync_player(&self, param: SyncPlayerParam) -> Result<User, DbErr> {
        let now = Utc::now();

        let entity = entity::prelude::User::insert(entity::user::ActiveModel {
            minecraft_uuid: ActiveValue::Set(Some(param.minecraft_uuid)),
            minecraft_username: ActiveValue::Set(Some(param.minecraft_username.clone())),
            nickname: ActiveValue::Set(param.minecraft_username),
            minecraft_online: ActiveValue::Set(param.online),
            minecraft_last_seen: ActiveValue::Set(Some(param.last_seen)),
            cobble_dollars_balance: ActiveValue::Set(param.cobble_dollars_balance),
            pokemon_party: ActiveValue::Set(Some(param.pokemon_party)),
            pc_storage: ActiveValue::Set(Some(param.pc_storage)),
            inventory: ActiveValue::Set(Some(param.inventory)),
            ender_chest: ActiveValue::Set(Some(param.ender_chest)),
            synced_at: ActiveValue::Set(Some(now)),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..new_user()
        })
        .on_conflict(
            OnConflict::column(entity::user::Column::MinecraftUuid)
                .update_columns([
                    entity::user::Column::MinecraftUsername,
                    entity::user::Column::Nickname,
                    entity::user::Column::MinecraftOnline,
                    entity::user::Column::MinecraftLastSeen,
                    entity::user::Column::CobbleDollarsBalance,
                    entity::user::Column::PokemonParty,
                    entity::user::Column::PcStorage,
                    entity::user::Column::Inventory,
                    entity::user::Column::EnderChest,
                    entity::user::Column::SyncedAt,
                    entity::user::Column::UpdatedAt,
                ])
                .to_owned(),
        )
        .exec_with_returning(self.db)
        .await?;

        Ok(User::from_entity(entity))
    }

    /// Gets every user linked to a Minecraft account, by username.
    pub async fn get_players(&self) -> Result<Vec<User>, DbErr> {
        let entities = entity::prelude::User::find()
            .filter(entity::user::Column::MinecraftUuid.is_not_null())
            .order_by_asc(entity::user::Column::MinecraftUsername)
            .order_by_asc(entity::user::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(User::from_entity).collect())
    }

    /// Marks a user as verified with the code they redeemed.
    ///
    /// The pending code is explicitly set to NULL and kept as `last_verification_code`.
    pub async fn mark_verified(&self, user_id: i32, code: String) -> Result<User, DbErr> {
        let now = Utc::now();

        let entity = entity::user::ActiveModel {
            id: ActiveValue::Unchanged(user_id),
            verified: ActiveValue::Set(true),
            verified_at: ActiveValue::Set(Some(now)),
            last_verification_code: ActiveValue::Set(Some(code)),
            verification_code: ActiveValue::Set(None),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .update(self.db)
        .await?;

        Ok(User::from_entity(entity))
    }

    /// Bans or unbans the user linked to a Minecraft UUID.
    ///
    /// Banning stamps `banned_at` and stores the optional reason, unbanning clears both.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - Updated user
    /// - `Ok(None)` - No user with that UUID
    /// - `Err(DbErr)` - Database error during lookup or update
    pub async fn set_banned(&self, param: SetBanParam) -> Result<Option<User>, DbErr> {
        let Some(existing) = entity::prelude::User::find()
            .filter(entity::user::Column::MinecraftUuid.eq(param.minecraft_uuid.as_str()))
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let now = Utc::now();
        let (ban_reason, banned_at) = if param.banned {
            (param.reason, Some(now))
        } else {
            (None, None)
        };

        let entity = entity::user::ActiveModel {
            id: ActiveValue::Unchanged(existing.id),
            banned: ActiveValue::Set(param.banned),
            ban_reason: ActiveValue::Set(ban_reason),
            banned_at: ActiveValue::Set(banned_at),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .update(self.db)
        .await?;

        Ok(Some(User::from_entity(entity)))
    }

    /// Records whether the plugin has delivered the user's starter in game.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - Updated user
    /// - `Ok(None)` - No user with that UUID
    pub async fn set_starter_given(
        &self,
        minecraft_uuid: &str,
        given: bool,
    ) -> Result<Option<User>, DbErr> {
        let Some(existing) = entity::prelude::User::find()
            .filter(entity::user::Column::MinecraftUuid.eq(minecraft_uuid))
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let now = Utc::now();

        let entity = entity::user::ActiveModel {
            id: ActiveValue::Unchanged(existing.id),
            starter_given: ActiveValue::Set(given),
            starter_given_at: ActiveValue::Set(if given { Some(now) } else { None }),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .update(self.db)
        .await?;

        Ok(Some(User::from_entity(entity)))
    }

    /// Grants admin to every existing user whose Discord ID is listed.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of users updated (0 when the list is empty)
    pub async fn set_admin_by_discord_ids(&self, discord_ids: &[u64]) -> Result<u64, DbErr> {
        if discord_ids.is_empty() {
            return Ok(0);
        }

        let discord_ids: Vec<String> = discord_ids.iter().map(|id| id.to_string()).collect();
        let result = entity::prelude::User::update_many()
            .col_expr(entity::user::Column::IsAdmin, Expr::value(true))
            .filter(entity::user::Column::DiscordId.is_in(discord_ids))
            .filter(entity::user::Column::IsAdmin.eq(false))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Inserts synthetic users flagged as fake and returns every fake user.
    pub async fn insert_fake_users(
        &self,
        params: Vec<CreateFakeUserParam>,
    ) -> Result<Vec<User>, DbErr> {
        if params.is_empty() {
            return self.get_fake_users().await;
        }

        let now = Utc::now();
        let models = params.into_iter().map(|param| entity::user::ActiveModel {
            discord_id: ActiveValue::Set(Some(param.discord_id)),
            discord_username: ActiveValue::Set(param.discord_username),
            nickname: ActiveValue::Set(param.nickname),
            starter_id: ActiveValue::Set(Some(param.starter_id)),
            starter_is_shiny: ActiveValue::Set(param.starter_is_shiny),
            rolled_at: ActiveValue::Set(Some(now)),
            is_fake: ActiveValue::Set(true),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..new_user()
        });

        entity::prelude::User::insert_many(models)
            .exec(self.db)
            .await?;

        self.get_fake_users().await
    }

    /// Gets every fake user ordered by Discord ID.
    pub async fn get_fake_users(&self) -> Result<Vec<User>, DbErr> {
        let entities = entity::prelude::User::find()
            .filter(entity::user::Column::IsFake.eq(true))
            .order_by_asc(entity::user::Column::DiscordId)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(User::from_entity).collect())
    }

    /// Deletes every fake user, returning how many were removed.
    pub async fn delete_fake_users(&self) -> Result<u64, DbErr> {
        let result = entity::prelude::User::delete_many()
            .filter(entity::user::Column::IsFake.eq(true))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Deletes every user, returning how many were removed.
    pub async fn delete_all(&self) -> Result<u64, DbErr> {
        let result = entity::prelude::User::delete_many().exec(self.db).await?;

        Ok(result.rows_affected)
    }
}

/// Active model with every non-key column set to its default.
fn new_user() -> entity::user::ActiveModel {
    entity::user::ActiveModel {
        id: ActiveValue::NotSet,
        minecraft_uuid: ActiveValue::Set(None),
        minecraft_username: ActiveValue::Set(None),
        discord_id: ActiveValue::Set(None),
        discord_username: ActiveValue::Set(String::new()),
        nickname: ActiveValue::Set(String::new()),
        verified: ActiveValue::Set(false),
        verification_code: ActiveValue::Set(None),
        last_verification_code: ActiveValue::Set(None),
        verified_at: ActiveValue::Set(None),
        banned: ActiveValue::Set(false),
        ban_reason: ActiveValue::Set(None),
        banned_at: ActiveValue::Set(None),
        starter_id: ActiveValue::Set(None),
        starter_is_shiny: ActiveValue::Set(false),
        starter_given: ActiveValue::Set(false),
        starter_given_at: ActiveValue::Set(None),
        rolled_at: ActiveValue::Set(None),
        is_admin: ActiveValue::Set(false),
        is_fake: ActiveValue::Set(false),
        cobble_dollars_balance: ActiveValue::Set(0),
        minecraft_online: ActiveValue::Set(false),
        minecraft_last_seen: ActiveValue::Set(None),
        synced_at: ActiveValue::Set(None),
        pokemon_party: ActiveValue::Set(None),
        pc_storage: ActiveValue::Set(None),
        inventory: ActiveValue::Set(None),
        ender_chest: ActiveValue::Set(None),
        created_at: ActiveValue::NotSet,
        updated_at: ActiveValue::NotSet,
    }
}
