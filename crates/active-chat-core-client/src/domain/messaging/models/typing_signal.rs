// active-chat-core/active-chat-core-client
//
// Copyright: 2025, Active Chat Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use active_chat_realtime::frame::TypingPayload;

use crate::domain::account::models::Identity;
use crate::domain::shared::models::UserId;

/// The newest compose state received from (or emitted for) a participant.
/// `content` carries the participant's current draft; an empty draft means
/// they stopped typing.
#[derive(Debug, Clone, PartialEq)]
pub struct TypingSignal {
    pub user_id: UserId,
    pub username: String,
    pub content: String,
}

impl TypingSignal {
    pub fn composing(identity: &Identity, draft: impl Into<String>) -> Self {
        TypingSignal {
            user_id: identity.id().clone(),
            username: identity.name().to_string(),
            content: draft.into(),
        }
    }

    pub fn stopped(identity: &Identity) -> Self {
        Self::composing(identity, "")
    }

    pub fn is_stopped(&self) -> bool {
        self.content.is_empty()
    }
}

impl From<&TypingSignal> for TypingPayload {
    fn from(signal: &TypingSignal) -> Self {
        TypingPayload {
            user_id: signal.user_id.to_string(),
            username: signal.username.clone(),
            content: signal.content.clone(),
        }
    }
}

impl From<TypingPayload> for TypingSignal {
    fn from(payload: TypingPayload) -> Self {
        TypingSignal {
            user_id: UserId::from(payload.user_id),
            username: payload.username,
            content: payload.content,
        }
    }
}
