// active-chat-core/active-chat-core-client
//
// Copyright: 2025, Active Chat Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use active_chat_realtime::ConnectionError;

use crate::domain::messaging::models::MessageId;
use crate::domain::shared::models::RoomId;

#[derive(Debug, Clone, PartialEq)]
pub enum ClientEvent {
    /// The status of the relay connection has changed.
    ConnectionStatusChanged { event: ConnectionEvent },

    /// The active identity was adopted, refreshed or cleared.
    AccountChanged,

    RoomChanged {
        room_id: RoomId,
        r#type: ClientRoomEventType,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub enum ClientRoomEventType {
    /// One or many messages were either received or sent.
    MessagesAppended { message_ids: Vec<MessageId> },

    /// A participant started or stopped typing.
    ComposingUsersChanged,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ConnectionEvent {
    Connect,
    Disconnect { error: Option<ConnectionError> },
}
