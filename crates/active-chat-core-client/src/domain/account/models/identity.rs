// active-chat-core/active-chat-core-client
//
// Copyright: 2025, Active Chat Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use serde::{Deserialize, Serialize};
use url::Url;

use crate::domain::shared::models::UserId;

/// Who a session participant is. The two variants are mutually exclusive and
/// the variant of the active identity must not change for the lifetime of a
/// device session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Identity {
    /// An OAuth-derived profile. The handshake that produced it lives
    /// outside this crate; we only carry the resulting claims.
    Authenticated {
        id: UserId,
        name: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        avatar_url: Option<Url>,
    },
    /// A guest who joined with nothing but a display name. The id is a
    /// locally generated UUID that exists only in device storage.
    Anonymous { id: UserId, name: String },
}

impl Identity {
    pub fn id(&self) -> &UserId {
        match self {
            Identity::Authenticated { id, .. } => id,
            Identity::Anonymous { id, .. } => id,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Identity::Authenticated { name, .. } => name,
            Identity::Anonymous { name, .. } => name,
        }
    }

    pub fn is_anonymous(&self) -> bool {
        match self {
            Identity::Authenticated { .. } => false,
            Identity::Anonymous { .. } => true,
        }
    }

    /// The avatar to attach to outgoing messages. Guests carry none — their
    /// peers derive a gradient avatar from the user id instead.
    pub fn avatar(&self) -> Option<String> {
        match self {
            Identity::Authenticated { avatar_url, .. } => {
                avatar_url.as_ref().map(|url| url.to_string())
            }
            Identity::Anonymous { .. } => None,
        }
    }
}
