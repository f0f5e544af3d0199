// active-chat-core/active-chat-core-client
//
// Copyright: 2025, Active Chat Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use chrono::{DateTime, Utc};

use crate::domain::messaging::models::{ChatMessage, MessageId};
use crate::domain::shared::models::UserId;

#[derive(Debug, Clone, PartialEq)]
pub struct Message {
    pub id: MessageId,
    pub from: MessageSender,
    pub content: String,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MessageSender {
    pub id: UserId,
    pub name: String,
    /// The sender's profile image, if their identity carries one. Views fall
    /// back to a generated gradient avatar otherwise.
    pub avatar: Option<String>,
    pub is_anonymous: bool,
}

impl From<&ChatMessage> for Message {
    fn from(message: &ChatMessage) -> Self {
        Message {
            id: message.id.clone(),
            from: MessageSender {
                id: message.user_id.clone(),
                name: message.username.clone(),
                avatar: message.avatar.clone(),
                is_anonymous: message.is_anonymous,
            },
            content: message.content.clone(),
            timestamp: message.timestamp,
        }
    }
}
