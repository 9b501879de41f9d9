//! Shop purchase domain models.

use chrono::{DateTime, Utc};

use crate::model::shop::PurchaseDto;

/// Poké Ball purchase waiting to be handed out in game.
#[derive(Debug, Clone, PartialEq)]
pub struct Purchase {
    pub id: i32,
    pub uuid: String,
    pub username: String,
    pub ball_id: String,
    pub quantity: i32,
    pub purchased_at: DateTime<Utc>,
    pub claimed: bool,
    pub claimed_at: Option<DateTime<Utc>>,
}

impl Purchase {
    pub fn from_entity(entity: entity::shop_purchase::Model) -> Self {
        Self {
            id: entity.id,
            uuid: entity.uuid,
            username: entity.username,
            ball_id: entity.ball_id,
            quantity: entity.quantity,
            purchased_at: entity.purchased_at,
            claimed: entity.claimed,
            claimed_at: entity.claimed_at,
        }
    }

    pub fn into_dto(self) -> PurchaseDto {
        PurchaseDto {
            id: self.id,
            ball_id: self.ball_id,
            quantity: self.quantity,
            purchased_at: self.purchased_at,
        }
    }
}
