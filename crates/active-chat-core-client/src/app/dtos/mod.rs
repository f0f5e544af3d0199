// active-chat-core/active-chat-core-client
//
// Copyright: 2025, Active Chat Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use authenticated_profile::AuthenticatedProfile;
pub use message::{Message, MessageSender};
pub use user_basic_info::UserBasicInfo;

mod authenticated_profile;
mod message;
mod user_basic_info;

pub use crate::domain::account::models::{AccountError, Identity};
pub use crate::domain::messaging::models::MessageId;
pub use crate::domain::shared::models::{ConnectionState, RoomId, UserId};
