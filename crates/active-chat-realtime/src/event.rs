// active-chat-core/active-chat-realtime
//
// Copyright: 2025, Active Chat Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use crate::{client, mods};

#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    Chat(mods::chat::Event),
    Client(client::Event),
}
