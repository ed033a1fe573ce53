use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct LoginRequest {
    #[schema(example = "caissier1")]
    pub username: Option<String>,
    #[schema(example = "motdepasse")]
    pub password: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct LoginResponse {
    pub success: bool,
    pub username: String,
    pub role: String,
    #[serde(rename = "userId")]
    pub user_id: i64,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CreateUserRequest {
    #[schema(example = "magasinier2")]
    pub username: String,
    pub password: String,
    #[schema(example = "magasinier")]
    pub role: Option<String>,
    /// Administrator creating the account
    pub utilisateur: Option<String>,
}
