use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::lenient;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct BalanceDto {
    pub uuid: String,
    pub balance: i64,
    pub username: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseDto {
    pub id: i32,
    pub ball_id: String,
    pub quantity: i32,
    pub purchased_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Debug, Clone, ToSchema)]
pub struct PendingPurchasesDto {
    pub uuid: String,
    pub purchases: Vec<PurchaseDto>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ClaimPurchaseDto {
    #[serde(default, deserialize_with = "lenient::string")]
    pub uuid: Option<String>,
    #[serde(default, deserialize_with = "lenient::i32")]
    pub purchase_id: Option<i32>,
}
