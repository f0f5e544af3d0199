// active-chat-core/active-chat-core-client
//
// Copyright: 2025, Active Chat Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::{format_err, Result};
use chrono::{DateTime, TimeZone, Utc};

use active_chat_realtime::frame::MessagePayload;

use crate::domain::messaging::models::MessageId;
use crate::domain::shared::models::UserId;

/// A message as it lives in a room's session state. Messages are never
/// mutated after construction and never persisted — they survive exactly as
/// long as the room view that received them.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatMessage {
    pub id: MessageId,
    pub user_id: UserId,
    pub username: String,
    pub content: String,
    pub timestamp: DateTime<Utc>,
    pub avatar: Option<String>,
    pub is_anonymous: bool,
}

impl From<&ChatMessage> for MessagePayload {
    fn from(message: &ChatMessage) -> Self {
        MessagePayload {
            id: message.id.to_string(),
            user_id: message.user_id.to_string(),
            username: message.username.clone(),
            content: message.content.clone(),
            timestamp_ms: message.timestamp.timestamp_millis(),
            avatar: message.avatar.clone(),
            is_anonymous: message.is_anonymous.then_some(true),
        }
    }
}

impl TryFrom<MessagePayload> for ChatMessage {
    type Error = anyhow::Error;

    fn try_from(payload: MessagePayload) -> Result<Self> {
        let timestamp = Utc
            .timestamp_millis_opt(payload.timestamp_ms)
            .single()
            .ok_or_else(|| format_err!("Invalid timestamp {}", payload.timestamp_ms))?;

        Ok(ChatMessage {
            id: MessageId::from(payload.id),
            user_id: UserId::from(payload.user_id),
            username: payload.username,
            content: payload.content,
            timestamp,
            avatar: payload.avatar,
            is_anonymous: payload.is_anonymous.unwrap_or(false),
        })
    }
}
