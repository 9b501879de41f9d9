use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "user")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub minecraft_uuid: Option<String>,
    pub minecraft_username: Option<String>,
    #[sea_orm(unique)]
    pub discord_id: Option<String>,
    pub discord_username: String,
    pub nickname: String,
    pub verified: bool,
    pub verification_code: Option<String>,
    pub last_verification_code: Option<String>,
    pub verified_at: Option<DateTimeUtc>,
    pub banned: bool,
    pub ban_reason: Option<String>,
    pub banned_at: Option<DateTimeUtc>,
    pub starter_id: Option<i32>,
    pub starter_is_shiny: bool,
    pub starter_given: bool,
    pub starter_given_at: Option<DateTimeUtc>,
    pub rolled_at: Option<DateTimeUtc>,
    pub is_admin: bool,
    pub is_fake: bool,
    pub cobble_dollars_balance: i64,
    pub minecraft_online: bool,
    pub minecraft_last_seen: Option<DateTimeUtc>,
    pub synced_at: Option<DateTimeUtc>,
    pub pokemon_party: Option<Json>,
    pub pc_storage: Option<Json>,
    pub inventory: Option<Json>,
    pub ender_chest: Option<Json>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
