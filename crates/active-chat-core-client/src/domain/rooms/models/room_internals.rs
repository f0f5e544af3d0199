// active-chat-core/active-chat-core-client
//
// Copyright: 2025, Active Chat Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use parking_lot::{Mutex, RwLock};
use tokio::task::JoinHandle;

use crate::domain::rooms::models::RoomState;
use crate::domain::shared::models::RoomId;

/// The state shared between a room's facade, the event handlers and the
/// connected-rooms repository. Lives exactly as long as the room is joined.
pub struct RoomInternals {
    pub room_id: RoomId,
    pub state: RwLock<RoomState>,
    typing_auto_clear: Mutex<Option<JoinHandle<()>>>,
}

impl RoomInternals {
    pub fn new(room_id: RoomId) -> Self {
        RoomInternals {
            room_id,
            state: RwLock::new(RoomState::default()),
            typing_auto_clear: Mutex::new(None),
        }
    }

    /// Replaces the pending typing auto-clear. The previous timer is aborted
    /// first so at most one clear signal can ever be in flight.
    pub fn set_typing_auto_clear(&self, handle: JoinHandle<()>) {
        self.cancel_typing_auto_clear();
        *self.typing_auto_clear.lock() = Some(handle);
    }

    pub fn cancel_typing_auto_clear(&self) {
        if let Some(handle) = self.typing_auto_clear.lock().take() {
            handle.abort();
        }
    }
}

impl Drop for RoomInternals {
    fn drop(&mut self) {
        self.cancel_typing_auto_clear();
    }
}
