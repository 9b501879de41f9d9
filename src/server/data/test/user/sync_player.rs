use super::*;
use chrono::{TimeZone, Utc};
use serde_json::json;

fn sync(uuid: &str, username: &str, balance: i64) -> SyncPlayerParam {
    SyncPlayerParam {
        minecraft_uuid: uuid.to_string(),
        minecraft_username: username.to_string(),
        online: true,
        last_seen: Utc.with_ymd_and_hms(2026, 1, 12, 18, 30, 0).unwrap(),
        cobble_dollars_balance: balance,
        pokemon_party: json!([{ "species": "bulbasaur", "level": 12 }]),
        pc_storage: json!([]),
        inventory: json!([]),
        ender_chest: json!([]),
    }
}

/// Tests the first sync of an unknown player.
///
/// Expected: player created with the reported name, balance and game data
#[tokio::test]
async fn creates_player_on_first_sync() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let player = repo.sync_player(sync("abc", "Ash", 250)).await?;

    assert_eq!(player.minecraft_uuid.as_deref(), Some("abc"));
    assert_eq!(player.minecraft_username.as_deref(), Some("Ash"));
    assert_eq!(player.nickname, "Ash");
    assert_eq!(player.cobble_dollars_balance, 250);
    assert!(player.minecraft_online);
    assert!(player.synced_at.is_some());
    assert_eq!(player.pokemon_party[0]["species"], "bulbasaur");
    assert!(!player.verified);
    assert!(!player.banned);

    let stored = repo.find_by_minecraft_uuid("abc").await?.unwrap();
    assert_eq!(stored.id, player.id);

    Ok(())
}

/// Tests a sync for a player that already exists.
///
/// Expected: same row updated, ban and verification state kept
#[tokio::test]
async fn updates_existing_player_in_place() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = factory::user::UserFactory::new(db)
        .minecraft_uuid("abc")
        .minecraft_username("OldName")
        .discord_id("42")
        .verified(true)
        .banned(true)
        .balance(10)
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let player = repo.sync_player(sync("abc", "NewName", 900)).await?;

    assert_eq!(player.id, existing.id);
    assert_eq!(player.minecraft_username.as_deref(), Some("NewName"));
    assert_eq!(player.cobble_dollars_balance, 900);
    assert_eq!(player.discord_id.as_deref(), Some("42"));
    assert!(player.verified);
    assert!(player.banned);

    Ok(())
}

/// Tests the player list.
///
/// Expected: only users linked to a Minecraft account, ordered by username
#[tokio::test]
async fn lists_only_minecraft_players() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    repo.sync_player(sync("uuid-2", "Misty", 0)).await?;
    repo.sync_player(sync("uuid-1", "Brock", 0)).await?;
    factory::user::UserFactory::new(db)
        .discord_id("7")
        .build()
        .await?;

    let players = repo.get_players().await?;

    let names: Vec<_> = players
        .iter()
        .map(|player| player.minecraft_username.as_deref())
        .collect();
    assert_eq!(names, vec![Some("Brock"), Some("Misty")]);

    Ok(())
}

/// Tests a user that never synced.
///
/// Expected: game data lists read back as empty, not null
#[tokio::test]
async fn unsynced_user_has_empty_game_data() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::create_player(db, "abc").await?;

    let player = UserRepository::new(db)
        .find_by_minecraft_uuid("abc")
        .await?
        .unwrap();

    assert_eq!(player.pokemon_party, json!([]));
    assert_eq!(player.ender_chest, json!([]));
    assert!(!player.minecraft_online);

    Ok(())
}
