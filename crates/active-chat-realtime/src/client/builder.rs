// active-chat-core/active-chat-realtime
//
// Copyright: 2025, Active Chat Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::any::TypeId;
use std::future::Future;
use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use parking_lot::RwLock;
use secrecy::Secret;

use crate::client::client::ClientInner;
use crate::client::module_context::ModuleContextInner;
use crate::client::{ConnectorProvider, EventHandler, ModuleContext, ModuleLookup};
use crate::connector::{Connection, ConnectionError, ConnectionEventHandler, Connector};
use crate::frame::{ChannelId, Frame};
use crate::mods::AnyModule;
use crate::util::PinnedFuture;
use crate::{Client, Event};

pub struct UndefinedConnector {}
pub struct UndefinedConnection {}

pub struct ClientBuilder {
    connector_provider: ConnectorProvider,
    mods: ModuleLookup,
    event_handler: EventHandler,
}

impl ClientBuilder {
    pub(super) fn new() -> Self {
        ClientBuilder {
            connector_provider: Box::new(|| Box::new(UndefinedConnector {})),
            mods: Default::default(),
            event_handler: Box::new(|_, _| Box::pin(async {}) as PinnedFuture<_>),
        }
    }

    pub fn set_connector_provider(self, connector_provider: ConnectorProvider) -> Self {
        ClientBuilder {
            connector_provider,
            mods: self.mods,
            event_handler: self.event_handler,
        }
    }

    pub fn set_event_handler<T>(
        self,
        handler: impl Fn(Client, Event) -> T + Send + Sync + 'static,
    ) -> Self
    where
        T: Future<Output = ()> + Send + 'static,
    {
        ClientBuilder {
            connector_provider: self.connector_provider,
            mods: self.mods,
            event_handler: Box::new(move |client, event| {
                let fut = handler(client, event);
                Box::pin(async move { fut.await }) as PinnedFuture<_>
            }),
        }
    }

    pub fn add_mod<M: AnyModule + Clone + 'static>(mut self, m: M) -> Self {
        self.mods
            .insert(TypeId::of::<M>(), RwLock::new(Box::new(m)));
        self
    }

    pub fn build(self) -> Client {
        let mods = Arc::new(self.mods);

        let context_inner = Arc::new(ModuleContextInner {
            connector_provider: self.connector_provider,
            connection: Default::default(),
            mods: Arc::downgrade(&mods),
            event_handler: self.event_handler,
        });

        for m in mods.values() {
            m.write().register_with(ModuleContext {
                inner: context_inner.clone(),
            });
        }

        Client {
            inner: Arc::new(ClientInner {
                mods: mods.clone(),
                context: context_inner,
            }),
        }
    }
}

#[async_trait]
impl Connector for UndefinedConnector {
    async fn connect(
        &self,
        _api_key: Secret<String>,
        _event_handler: ConnectionEventHandler,
    ) -> Result<Box<dyn Connection>, ConnectionError> {
        panic!("Client doesn't have a connector. Provide one before calling connect()")
    }
}

impl Connection for UndefinedConnection {
    fn subscribe(&self, _channel: &ChannelId) -> Result<()> {
        panic!("Calling subscribe on UndefinedConnection is illegal.")
    }

    fn unsubscribe(&self, _channel: &ChannelId) -> Result<()> {
        panic!("Calling unsubscribe on UndefinedConnection is illegal.")
    }

    fn send_frame(&self, _frame: Frame) -> Result<()> {
        panic!("Calling send_frame on UndefinedConnection is illegal.")
    }

    fn disconnect(&self) {
        panic!("Calling disconnect on UndefinedConnection is illegal.")
    }
}
