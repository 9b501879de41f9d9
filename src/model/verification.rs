use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::lenient;

#[derive(Serialize, Deserialize, Debug, Clone, Default, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct VerifyCodeDto {
    #[serde(default, deserialize_with = "lenient::string")]
    pub minecraft_uuid: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub code: Option<String>,
}

/// Outcome of a verification attempt.
///
/// A wrong code is reported with `success: false` and an `error` message while
/// still returning 200, so the plugin can tell it apart from a transport failure.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct VerifyResultDto {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GenerateCodeDto {
    #[serde(default, deserialize_with = "lenient::string")]
    pub minecraft_uuid: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub minecraft_username: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub code: Option<String>,
}
