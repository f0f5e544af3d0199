// active-chat-core/active-chat-realtime
//
// Copyright: 2025, Active Chat Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::any::TypeId;
use std::fmt::{Debug, Formatter};
use std::sync::Arc;

use anyhow::{bail, Result};
use secrecy::Secret;
use tracing::{error, warn};

use crate::client::builder::ClientBuilder;
use crate::client::module_context::ModuleContextInner;
use crate::client::{Event, ModuleLookup};
use crate::connector::{ConnectionError, ConnectionEvent};
use crate::frame::{ChannelId, Frame};
use crate::mods::AnyModule;
use crate::util::PinnedFuture;
use crate::Event as ClientEvent;

#[derive(Clone)]
pub struct Client {
    pub(super) inner: Arc<ClientInner>,
}

impl Debug for Client {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client").finish()
    }
}

impl Client {
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    pub async fn connect(&self, api_key: Secret<String>) -> Result<(), ConnectionError> {
        self.inner.clone().connect(api_key).await
    }

    pub fn disconnect(&self) {
        self.inner.disconnect()
    }

    pub fn subscribe(&self, channel: &ChannelId) -> Result<()> {
        let Some(conn) = &*self.inner.context.connection.read() else {
            bail!("Cannot subscribe to '{channel}' while disconnected from the relay.");
        };
        conn.subscribe(channel)
    }

    pub fn unsubscribe(&self, channel: &ChannelId) -> Result<()> {
        let Some(conn) = &*self.inner.context.connection.read() else {
            bail!("Cannot unsubscribe from '{channel}' while disconnected from the relay.");
        };
        conn.unsubscribe(channel)
    }

    pub fn get_mod<M: AnyModule + Clone>(&self) -> M {
        self.inner.get_mod()
    }

    pub fn send_raw_frame(&self, frame: Frame) -> Result<()> {
        self.inner.context.send_frame(frame)
    }
}

pub(super) struct ClientInner {
    pub context: Arc<ModuleContextInner>,
    pub mods: Arc<ModuleLookup>,
}

impl ClientInner {
    async fn connect(self: Arc<Self>, api_key: Secret<String>) -> Result<(), ConnectionError> {
        self.disconnect();

        let inner = self.clone();

        let connection = (self.context.connector_provider)()
            .connect(
                api_key,
                Box::new(move |event| {
                    let inner = inner.clone();

                    Box::pin(async move { inner.handle_event(event).await }) as PinnedFuture<_>
                }),
            )
            .await?;

        self.context.connection.write().replace(connection);

        for (_, m) in self.mods.iter() {
            if let Err(err) = m.read().handle_connect() {
                error!("Encountered error in module {}", err);
            }
        }

        self.schedule_event(ClientEvent::Client(Event::Connected));

        Ok(())
    }

    fn disconnect(&self) {
        self.context.disconnect()
    }

    fn get_mod<M: AnyModule + Clone>(&self) -> M {
        let Some(entry) = self.mods.iter().find(|(k, _)| **k == TypeId::of::<M>()) else {
            panic!("Could not find requested module.")
        };
        entry.1.read().as_any().downcast_ref::<M>().unwrap().clone()
    }

    async fn handle_event(self: Arc<Self>, event: ConnectionEvent) {
        match event {
            ConnectionEvent::Disconnected { error } => {
                self.schedule_event(ClientEvent::Client(Event::Disconnected { error }))
            }
            ConnectionEvent::Frame(value) => self.handle_frame(value),
        }
    }

    fn handle_frame(&self, value: serde_json::Value) {
        // The relay is trusted but not schema-validated. Anything that does
        // not parse as a frame is dropped here so handlers only ever see
        // well-formed payloads.
        let frame = match serde_json::from_value::<Frame>(value) {
            Ok(frame) => frame,
            Err(err) => {
                warn!("Dropping malformed frame. {}", err);
                return;
            }
        };

        for (_, m) in self.mods.iter() {
            if let Err(err) = m.read().handle_frame(&frame) {
                error!("Encountered error in module {}", err);
            }
        }
    }

    fn schedule_event(&self, event: ClientEvent) {
        let client: Client = match self.context.clone().try_into() {
            Ok(client) => client,
            Err(_) => return,
        };
        let fut = (self.context.event_handler)(client, event);
        tokio::spawn(async move { fut.await });
    }
}

impl TryFrom<Arc<ModuleContextInner>> for Client {
    type Error = anyhow::Error;

    fn try_from(value: Arc<ModuleContextInner>) -> std::result::Result<Self, Self::Error> {
        let mods = value.mods.upgrade().ok_or(anyhow::format_err!(
            "Used module after client was released."
        ))?;

        Ok(Client {
            inner: Arc::new(ClientInner {
                context: value,
                mods,
            }),
        })
    }
}
