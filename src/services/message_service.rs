use crate::entities::message_entity as messages;
use crate::error::AppResult;
use crate::models::{INBOX_LIMIT, SendMessageRequest};
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder, QuerySelect, Select, Set,
};
use std::sync::Arc;

#[derive(Clone)]
pub struct MessageService {
    pool: Arc<DatabaseConnection>,
}

/// Messages addressed to `user` plus broadcasts, newest first.
/// Without a user only broadcasts match.
pub fn inbox_query(user: Option<&str>) -> Select<messages::Entity> {
    let mut recipients = Condition::any().add(messages::Column::Recipient.eq(messages::BROADCAST_RECIPIENT));
    if let Some(user) = user {
        recipients = recipients.add(messages::Column::Recipient.eq(user));
    }

    messages::Entity::find()
        .filter(recipients)
        .order_by_desc(messages::Column::DateSent)
        .limit(INBOX_LIMIT)
}

impl MessageService {
    pub fn new(pool: Arc<DatabaseConnection>) -> Self {
        Self { pool }
    }

    pub async fn send(&self, request: SendMessageRequest) -> AppResult<messages::Model> {
        let message = messages::ActiveModel {
            sender: Set(request.sender),
            recipient: Set(request.recipient),
            kind: Set(request.kind),
            subject: Set(request.subject),
            body: Set(request.body),
            date_sent: Set(request.date.unwrap_or_else(Utc::now)),
            ..Default::default()
        }
        .insert(self.pool.as_ref())
        .await?;

        log::debug!("message #{} sent to {}", message.id, message.recipient);
        Ok(message)
    }

    pub async fn inbox(&self, user: Option<&str>) -> AppResult<Vec<messages::Model>> {
        let rows = inbox_query(user).all(self.pool.as_ref()).await?;
        Ok(rows)
    }
}
