// active-chat-core/active-chat-core-client
//
// Copyright: 2025, Active Chat Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::domain::rooms::models::RoomInternals;
use crate::domain::rooms::repos::ConnectedRoomsRepository;
use crate::domain::shared::models::RoomId;

#[derive(Default)]
pub struct InMemoryConnectedRoomsRepository {
    rooms: RwLock<HashMap<RoomId, Arc<RoomInternals>>>,
}

impl ConnectedRoomsRepository for InMemoryConnectedRoomsRepository {
    fn get(&self, room_id: &RoomId) -> Option<Arc<RoomInternals>> {
        self.rooms.read().get(room_id).cloned()
    }

    fn get_all(&self) -> Vec<Arc<RoomInternals>> {
        self.rooms.read().values().cloned().collect()
    }

    fn put(&self, room: Arc<RoomInternals>) -> bool {
        let mut rooms = self.rooms.write();
        if rooms.contains_key(&room.room_id) {
            return false;
        }
        rooms.insert(room.room_id.clone(), room);
        true
    }

    fn delete(&self, room_id: &RoomId) -> Option<Arc<RoomInternals>> {
        self.rooms.write().remove(room_id)
    }

    fn delete_all(&self) -> Vec<Arc<RoomInternals>> {
        self.rooms.write().drain().map(|(_, room)| room).collect()
    }
}
