use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::{lenient, user::UserDto};

#[derive(Serialize, Deserialize, Debug, Clone, Default, ToSchema)]
pub struct BanUserDto {
    #[serde(default, deserialize_with = "lenient::string")]
    pub uuid: Option<String>,
    #[serde(default, deserialize_with = "lenient::bool")]
    pub banned: Option<bool>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub reason: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct BanResultDto {
    pub success: bool,
    pub banned: bool,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ResetStoreDto {
    #[serde(default, deserialize_with = "lenient::string")]
    pub confirm_token: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ResetResultDto {
    pub success: bool,
    pub message: String,
    pub deleted_count: u64,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, ToSchema)]
pub struct SeedActionDto {
    /// Either `seed` or `clear`.
    #[serde(default, deserialize_with = "lenient::string")]
    pub action: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, ToSchema)]
pub struct SeedResultDto {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub users: Option<Vec<UserDto>>,
}
