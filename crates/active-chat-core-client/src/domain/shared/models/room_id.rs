// active-chat-core/active-chat-core-client
//
// Copyright: 2025, Active Chat Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use active_chat_realtime::ChannelId;
use active_chat_utils::id_string;

id_string!(
    /// The shared secret identifying a chat room.
    RoomId
);

const CHANNEL_PREFIX: &str = "chat:";

impl RoomId {
    /// The broadcast channel carrying this room's traffic.
    pub fn channel_id(&self) -> ChannelId {
        ChannelId::from(format!("{}{}", CHANNEL_PREFIX, self))
    }

    pub fn from_channel_id(channel: &ChannelId) -> Option<RoomId> {
        channel
            .as_ref()
            .strip_prefix(CHANNEL_PREFIX)
            .map(RoomId::from)
    }
}
