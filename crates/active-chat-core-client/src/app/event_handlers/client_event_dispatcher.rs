// active-chat-core/active-chat-core-client
//
// Copyright: 2025, Active Chat Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use crate::domain::shared::models::RoomId;
use crate::{ClientEvent, ClientRoomEventType};

pub(crate) trait ClientEventDispatcher: Send + Sync {
    fn dispatch_event(&self, event: ClientEvent);

    fn dispatch_room_event(&self, room_id: RoomId, event: ClientRoomEventType);
}
