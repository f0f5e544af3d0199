// active-chat-core/active-chat-core-client
//
// Copyright: 2025, Active Chat Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use url::Url;

use crate::domain::shared::models::UserId;

/// The claims handed over by the host's OAuth flow when a signed-in user
/// enters a chat session.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthenticatedProfile {
    pub id: UserId,
    pub name: String,
    pub avatar_url: Option<Url>,
}
