use crate::utils::blank_as_none;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

/// Maximum number of messages returned by an inbox query.
pub const INBOX_LIMIT: u64 = 50;

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct SendMessageRequest {
    pub sender: String,
    /// A username, or `all` to broadcast
    #[schema(example = "all")]
    pub recipient: String,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub subject: Option<String>,
    pub body: Option<String>,
    /// Defaults to the time of reception
    #[serde(default, deserialize_with = "blank_as_none")]
    pub date: Option<DateTime<Utc>>,
}

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct InboxQuery {
    /// Recipient whose inbox is read; broadcasts are always included
    pub user: Option<String>,
}
