use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(User::Table)
                    .if_not_exists()
                    .col(pk_auto(User::Id))
                    .col(string_null(User::MinecraftUuid).unique_key())
                    .col(string_null(User::MinecraftUsername))
                    .col(string_null(User::DiscordId).unique_key())
                    .col(string(User::DiscordUsername).default(""))
                    .col(string(User::Nickname).default(""))
                    .col(boolean(User::Verified).default(false))
                    .col(string_null(User::VerificationCode))
                    .col(string_null(User::LastVerificationCode))
                    .col(timestamp_with_time_zone_null(User::VerifiedAt))
                    .col(boolean(User::Banned).default(false))
                    .col(string_null(User::BanReason))
                    .col(timestamp_with_time_zone_null(User::BannedAt))
                    .col(integer_null(User::StarterId))
                    .col(boolean(User::StarterIsShiny).default(false))
                    .col(boolean(User::StarterGiven).default(false))
                    .col(timestamp_with_time_zone_null(User::StarterGivenAt))
                    .col(timestamp_with_time_zone_null(User::RolledAt))
                    .col(boolean(User::IsAdmin).default(false))
                    .col(boolean(User::IsFake).default(false))
                    .col(big_integer(User::CobbleDollarsBalance).default(0))
                    .col(timestamp_with_time_zone(User::CreatedAt))
                    .col(timestamp_with_time_zone(User::UpdatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(User::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum User {
    Table,
    Id,
    MinecraftUuid,
    MinecraftUsername,
    DiscordId,
    DiscordUsername,
    Nickname,
    Verified,
    VerificationCode,
    LastVerificationCode,
    VerifiedAt,
    Banned,
    BanReason,
    BannedAt,
    StarterId,
    StarterIsShiny,
    StarterGiven,
    StarterGivenAt,
    RolledAt,
    IsAdmin,
    IsFake,
    CobbleDollarsBalance,
    MinecraftOnline,
    MinecraftLastSeen,
    SyncedAt,
    PokemonParty,
    PcStorage,
    Inventory,
    EnderChest,
    CreatedAt,
    UpdatedAt,
}
