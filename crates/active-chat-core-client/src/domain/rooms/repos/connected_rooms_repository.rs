// active-chat-core/active-chat-core-client
//
// Copyright: 2025, Active Chat Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::Arc;

use crate::domain::rooms::models::RoomInternals;
use crate::domain::shared::models::RoomId;

/// The rooms this client is currently attached to. At most one entry per
/// room id, which is what keeps subscriptions to one per view instance.
pub trait ConnectedRoomsRepository: Send + Sync {
    fn get(&self, room_id: &RoomId) -> Option<Arc<RoomInternals>>;

    fn get_all(&self) -> Vec<Arc<RoomInternals>>;

    /// Inserts `room` if no room with the same id is connected yet. Returns
    /// `false` (leaving the existing entry untouched) otherwise.
    fn put(&self, room: Arc<RoomInternals>) -> bool;

    fn delete(&self, room_id: &RoomId) -> Option<Arc<RoomInternals>>;

    fn delete_all(&self) -> Vec<Arc<RoomInternals>>;
}
