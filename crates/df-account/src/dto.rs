use serde::Deserialize;
use serde::Serialize;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    #[serde(default)]
    pub public_key: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub session_id: String,
}

#[derive(Deserialize)]
pub struct LobbyUpdate {
    #[serde(default)]
    pub players: Vec<Player>,
}

/// One lobby roster entry. Exactly one entry per roster is expected to
/// carry the host flag; its account id is authoritative for pairing.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    #[serde(default)]
    pub is_host: bool,
    #[serde(default)]
    pub member_account_id: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KeysResponse {
    pub account_keys: Vec<AccountKey>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountKey {
    pub platform_account_id: String,
    pub key: String,
}
