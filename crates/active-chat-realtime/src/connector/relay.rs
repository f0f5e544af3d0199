// active-chat-core/active-chat-realtime
//
// Copyright: 2025, Active Chat Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::collections::HashSet;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Weak};

use anyhow::Result;
use async_trait::async_trait;
use parking_lot::Mutex;
use secrecy::Secret;

use crate::client::ConnectorProvider;
use crate::connector::{
    Connection, ConnectionError, ConnectionEvent, ConnectionEventHandler, Connector,
};
use crate::frame::{ChannelId, Frame};

/// An in-process relay. Every connection attached to the same hub receives
/// each frame published to a channel it is subscribed to, the publishing
/// connection included — matching the echo behavior of the hosted broadcast
/// services the product runs against.
#[derive(Default, Clone)]
pub struct RelayHub {
    inner: Arc<RelayHubInner>,
}

#[derive(Default)]
struct RelayHubInner {
    connections: Mutex<Vec<Weak<RelayConnectionInner>>>,
}

impl RelayHub {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn connector(&self) -> Box<dyn Connector> {
        Box::new(RelayConnector { hub: self.clone() })
    }

    pub fn connector_provider(&self) -> ConnectorProvider {
        let hub = self.clone();
        Box::new(move || hub.connector())
    }

    fn attach(&self, connection: &Arc<RelayConnectionInner>) {
        self.inner
            .connections
            .lock()
            .push(Arc::downgrade(connection));
    }

    fn broadcast(&self, channel: &ChannelId, value: serde_json::Value) {
        let connections = {
            let mut connections = self.inner.connections.lock();
            connections.retain(|conn| conn.strong_count() > 0);
            connections
                .iter()
                .filter_map(Weak::upgrade)
                .collect::<Vec<_>>()
        };

        for connection in connections {
            if connection.closed.load(Ordering::SeqCst)
                || !connection.subscriptions.lock().contains(channel)
            {
                continue;
            }
            let fut = (connection.event_handler)(ConnectionEvent::Frame(value.clone()));
            tokio::spawn(fut);
        }
    }
}

struct RelayConnector {
    hub: RelayHub,
}

#[async_trait]
impl Connector for RelayConnector {
    async fn connect(
        &self,
        _api_key: Secret<String>,
        event_handler: ConnectionEventHandler,
    ) -> Result<Box<dyn Connection>, ConnectionError> {
        let inner = Arc::new(RelayConnectionInner {
            closed: AtomicBool::new(false),
            subscriptions: Mutex::new(HashSet::new()),
            event_handler,
        });
        self.hub.attach(&inner);
        Ok(Box::new(RelayConnection {
            inner,
            hub: self.hub.clone(),
        }))
    }
}

struct RelayConnectionInner {
    closed: AtomicBool,
    subscriptions: Mutex<HashSet<ChannelId>>,
    event_handler: ConnectionEventHandler,
}

struct RelayConnection {
    inner: Arc<RelayConnectionInner>,
    hub: RelayHub,
}

impl Connection for RelayConnection {
    fn subscribe(&self, channel: &ChannelId) -> Result<()> {
        self.inner.subscriptions.lock().insert(channel.clone());
        Ok(())
    }

    fn unsubscribe(&self, channel: &ChannelId) -> Result<()> {
        self.inner.subscriptions.lock().remove(channel);
        Ok(())
    }

    fn send_frame(&self, frame: Frame) -> Result<()> {
        let channel = frame.channel.clone();
        let value = serde_json::to_value(frame)?;
        self.hub.broadcast(&channel, value);
        Ok(())
    }

    fn disconnect(&self) {
        self.inner.closed.store(true, Ordering::SeqCst);
        self.inner.subscriptions.lock().clear();
    }
}
