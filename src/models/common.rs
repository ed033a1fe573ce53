use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// Body returned by deletes and workflow decisions.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SuccessResponse {
    pub success: bool,
}

impl SuccessResponse {
    pub fn ok() -> Self {
        Self { success: true }
    }
}

/// Body of a 500: a generic message, details stay in the server log.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

/// Body of a 400/401.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct FailureResponse {
    pub success: bool,
    pub message: String,
}

/// Optional `?utilisateur=` used to attribute deletes.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ActorQuery {
    pub utilisateur: Option<String>,
}
