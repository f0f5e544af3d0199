// active-chat-core/active-chat-realtime
//
// Copyright: 2025, Active Chat Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::{Arc, Weak};

use anyhow::{bail, Result};
use parking_lot::RwLock;

use crate::client::builder::UndefinedConnector;
use crate::client::{Client, ConnectorProvider, EventHandler, ModuleLookup};
use crate::connector::Connection;
use crate::frame::Frame;
use crate::util::PinnedFuture;
use crate::Event;

#[derive(Clone)]
pub struct ModuleContext {
    pub(super) inner: Arc<ModuleContextInner>,
}

impl ModuleContext {
    pub(crate) fn send_frame(&self, frame: Frame) -> Result<()> {
        self.inner.send_frame(frame)
    }

    pub(crate) fn schedule_event(&self, event: Event) {
        let client: Client = self
            .inner
            .clone()
            .try_into()
            .expect("Used module after client was released.");
        let fut = (self.inner.event_handler)(client, event);
        tokio::spawn(async move { fut.await });
    }
}

pub(super) struct ModuleContextInner {
    pub connector_provider: ConnectorProvider,
    pub connection: RwLock<Option<Box<dyn Connection>>>,
    pub event_handler: EventHandler,
    pub mods: Weak<ModuleLookup>,
}

impl ModuleContextInner {
    pub(super) fn send_frame(&self, frame: Frame) -> Result<()> {
        let Some(conn) = &*self.connection.read() else {
            bail!("Cannot send a frame while disconnected from the relay.");
        };
        conn.send_frame(frame)
    }

    pub(super) fn disconnect(&self) {
        if let Some(conn) = self.connection.write().take() {
            conn.disconnect()
        }
    }
}

impl Default for ModuleContext {
    fn default() -> Self {
        ModuleContext {
            inner: Arc::new(ModuleContextInner {
                connector_provider: Box::new(|| Box::new(UndefinedConnector {})),
                connection: Default::default(),
                event_handler: Box::new(|_, _| Box::pin(async {}) as PinnedFuture<_>),
                mods: Default::default(),
            }),
        }
    }
}
