// active-chat-core/active-chat-core-client
//
// Copyright: 2025, Active Chat Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::ops::Deref;
use std::sync::Arc;

use secrecy::Secret;

use active_chat_realtime::ConnectionError;

use crate::app::deps::DynAppContext;
use crate::app::services::{AccountService, ConnectionService, RoomsService};
use crate::client_builder::ClientBuilder;
use crate::domain::shared::models::ConnectionState;
use crate::ClientEvent;

#[derive(Clone)]
pub struct Client {
    inner: Arc<ClientInner>,
}

pub trait ClientDelegate: Send + Sync {
    fn handle_event(&self, client: Client, event: ClientEvent);
}

impl Client {
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }
}

pub struct ClientInner {
    pub account: AccountService,
    pub rooms: RoomsService,
    pub(crate) connection: ConnectionService,
    pub(crate) ctx: DynAppContext,
}

impl From<Arc<ClientInner>> for Client {
    fn from(inner: Arc<ClientInner>) -> Self {
        Client { inner }
    }
}

impl Deref for Client {
    type Target = ClientInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl Client {
    pub async fn connect(&self, api_key: Secret<String>) -> Result<(), ConnectionError> {
        self.connection.connect(api_key).await
    }

    pub async fn disconnect(&self) {
        self.connection.disconnect().await
    }

    pub fn connection_state(&self) -> ConnectionState {
        self.ctx.connection_state()
    }
}
