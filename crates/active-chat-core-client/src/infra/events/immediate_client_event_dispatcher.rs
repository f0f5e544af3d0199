// active-chat-core/active-chat-core-client
//
// Copyright: 2025, Active Chat Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::{OnceLock, Weak};

use crate::app::event_handlers::ClientEventDispatcher;
use crate::client::ClientInner;
use crate::domain::shared::models::RoomId;
use crate::{Client, ClientDelegate, ClientEvent, ClientRoomEventType};

/// Forwards every event straight to the delegate on the thread that raised
/// it. Events raised before the client is fully assembled, or after it was
/// dropped, vanish quietly.
pub(crate) struct ImmediateClientEventDispatcher {
    client_inner: OnceLock<Weak<ClientInner>>,
    delegate: Option<Box<dyn ClientDelegate>>,
}

impl ImmediateClientEventDispatcher {
    pub fn new(delegate: Option<Box<dyn ClientDelegate>>) -> Self {
        Self {
            client_inner: Default::default(),
            delegate,
        }
    }

    pub(crate) fn set_client_inner(&self, client_inner: Weak<ClientInner>) {
        self.client_inner
            .set(client_inner)
            .map_err(|_| ())
            .expect("Tried to set client_inner on ClientEventDispatcher more than once");
    }

    fn perform_dispatch_event(&self, event: ClientEvent) {
        let Some(delegate) = &self.delegate else {
            return;
        };

        let Some(client_inner) = self.client_inner.get().and_then(Weak::upgrade) else {
            return;
        };

        delegate.handle_event(Client::from(client_inner), event);
    }
}

impl ClientEventDispatcher for ImmediateClientEventDispatcher {
    fn dispatch_event(&self, event: ClientEvent) {
        self.perform_dispatch_event(event);
    }

    fn dispatch_room_event(&self, room_id: RoomId, event: ClientRoomEventType) {
        self.perform_dispatch_event(ClientEvent::RoomChanged {
            room_id,
            r#type: event,
        });
    }
}
