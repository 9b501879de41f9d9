//! User factory for creating test user entities.
//!
//! Users in the portal may be linked to a Minecraft account, a Discord account, or
//! both. The factory starts with neither and lets each test attach what it needs.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test users with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::user::UserFactory;
///
/// let user = UserFactory::new(&db)
///     .discord_id("123456789")
///     .admin(true)
///     .build()
///     .await?;
/// ```
pub struct UserFactory<'a> {
    db: &'a DatabaseConnection,
    minecraft_uuid: Option<String>,
    minecraft_username: Option<String>,
    discord_id: Option<String>,
    discord_username: String,
    nickname: String,
    verified: bool,
    verification_code: Option<String>,
    banned: bool,
    ban_reason: Option<String>,
    starter_id: Option<i32>,
    starter_is_shiny: bool,
    starter_given: bool,
    is_admin: bool,
    is_fake: bool,
    balance: i64,
}

impl<'a> UserFactory<'a> {
    /// Creates a new UserFactory with default values.
    ///
    /// Defaults:
    /// - no Minecraft or Discord link
    /// - discord_username / nickname: `"User {id}"` where id is auto-incremented
    /// - not verified, not banned, no starter, not admin, balance 0
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            minecraft_uuid: None,
            minecraft_username: None,
            discord_id: None,
            discord_username: format!("User {}", id),
            nickname: format!("User {}", id),
            verified: false,
            verification_code: None,
            banned: false,
            ban_reason: None,
            starter_id: None,
            starter_is_shiny: false,
            starter_given: false,
            is_admin: false,
            is_fake: false,
            balance: 0,
        }
    }

    pub fn minecraft_uuid(mut self, minecraft_uuid: impl Into<String>) -> Self {
        self.minecraft_uuid = Some(minecraft_uuid.into());
        self
    }

    pub fn minecraft_username(mut self, minecraft_username: impl Into<String>) -> Self {
        self.minecraft_username = Some(minecraft_username.into());
        self
    }

    pub fn discord_id(mut self, discord_id: impl Into<String>) -> Self {
        self.discord_id = Some(discord_id.into());
        self
    }

    pub fn discord_username(mut self, discord_username: impl Into<String>) -> Self {
        self.discord_username = discord_username.into();
        self
    }

    pub fn verified(mut self, verified: bool) -> Self {
        self.verified = verified;
        self
    }

    /// Sets a pending verification code for the user.
    pub fn verification_code(mut self, code: impl Into<String>) -> Self {
        self.verification_code = Some(code.into());
        self
    }

    pub fn banned(mut self, banned: bool) -> Self {
        self.banned = banned;
        self
    }

    pub fn ban_reason(mut self, reason: impl Into<String>) -> Self {
        self.ban_reason = Some(reason.into());
        self
    }

    /// Assigns a starter Pokémon to the user.
    pub fn starter(mut self, pokemon_id: i32, is_shiny: bool) -> Self {
        self.starter_id = Some(pokemon_id);
        self.starter_is_shiny = is_shiny;
        self
    }

    pub fn starter_given(mut self, starter_given: bool) -> Self {
        self.starter_given = starter_given;
        self
    }

    pub fn admin(mut self, is_admin: bool) -> Self {
        self.is_admin = is_admin;
        self
    }

    pub fn fake(mut self, is_fake: bool) -> Self {
        self.is_fake = is_fake;
        self
    }

    pub fn balance(mut self, balance: i64) -> Self {
        self.balance = balance;
        self
    }

    /// Builds and inserts the user entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::user::Model)` - Created user entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::user::Model, DbErr> {
        let now = Utc::now();
        entity::user::ActiveModel {
            minecraft_uuid: ActiveValue::Set(self.minecraft_uuid),
            minecraft_username: ActiveValue::Set(self.minecraft_username),
            discord_id: ActiveValue::Set(self.discord_id),
            discord_username: ActiveValue::Set(self.discord_username),
            nickname: ActiveValue::Set(self.nickname),
            verified: ActiveValue::Set(self.verified),
            verification_code: ActiveValue::Set(self.verification_code),
            last_verification_code: ActiveValue::Set(None),
            verified_at: ActiveValue::Set(None),
            banned: ActiveValue::Set(self.banned),
            ban_reason: ActiveValue::Set(self.ban_reason),
            banned_at: ActiveValue::Set(if self.banned { Some(now) } else { None }),
            starter_id: ActiveValue::Set(self.starter_id),
            starter_is_shiny: ActiveValue::Set(self.starter_is_shiny),
            starter_given: ActiveValue::Set(self.starter_given),
            starter_given_at: ActiveValue::Set(None),
            rolled_at: ActiveValue::Set(self.starter_id.map(|_| now)),
            is_admin: ActiveValue::Set(self.is_admin),
            is_fake: ActiveValue::Set(self.is_fake),
            cobble_dollars_balance: ActiveValue::Set(self.balance),
            minecraft_online: ActiveValue::Set(false),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a user with default values.
///
/// Shorthand for `UserFactory::new(db).build().await`.
pub async fn create_user(db: &DatabaseConnection) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db).build().await
}

/// Creates a user linked to the given Minecraft UUID.
///
/// The Minecraft username is derived from the UUID so lookups in tests have a
/// predictable value to assert on.
pub async fn create_player(
    db: &DatabaseConnection,
    minecraft_uuid: impl Into<String>,
) -> Result<entity::user::Model, DbErr> {
    let minecraft_uuid = minecraft_uuid.into();
    UserFactory::new(db)
        .minecraft_username(format!("player_{}", minecraft_uuid))
        .minecraft_uuid(minecraft_uuid)
        .build()
        .await
}
