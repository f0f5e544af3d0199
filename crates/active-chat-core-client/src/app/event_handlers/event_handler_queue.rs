// active-chat-core/active-chat-core-client
//
// Copyright: 2025, Active Chat Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::OnceLock;

use tracing::{debug, error};

use crate::app::event_handlers::{RealtimeEvent, RealtimeEventHandler};

/// Routes every event coming out of the transport through the registered
/// handlers in order, until one of them consumes it.
pub(crate) struct RealtimeEventHandlerQueue {
    handlers: OnceLock<Vec<Box<dyn RealtimeEventHandler>>>,
}

impl RealtimeEventHandlerQueue {
    pub fn new() -> Self {
        RealtimeEventHandlerQueue {
            handlers: Default::default(),
        }
    }

    pub fn set_handlers(&self, handlers: Vec<Box<dyn RealtimeEventHandler>>) {
        self.handlers
            .set(handlers)
            .map_err(|_| ())
            .expect("Tried to set handlers on RealtimeEventHandlerQueue more than once");
    }

    pub async fn handle_event(&self, event: RealtimeEvent) {
        let Some(handlers) = self.handlers.get() else {
            return;
        };

        let mut event = event;
        for handler in handlers {
            match handler.handle_event(event.clone()).await {
                Ok(Some(e)) => event = e,
                Ok(None) => return,
                Err(err) => {
                    error!(
                        "Event handler '{}' failed to handle event: {}",
                        handler.name(),
                        err
                    );
                    return;
                }
            }
        }

        debug!("Unhandled event: {:?}", event);
    }
}
