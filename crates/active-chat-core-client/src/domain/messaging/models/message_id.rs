// active-chat-core/active-chat-core-client
//
// Copyright: 2025, Active Chat Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use active_chat_utils::id_string;

id_string!(
    /// Unique id of a chat message, minted by the sending device.
    MessageId
);
