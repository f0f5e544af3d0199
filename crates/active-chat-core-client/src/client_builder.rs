// active-chat-core/active-chat-core-client
//
// Copyright: 2025, Active Chat Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::Arc;

use active_chat_realtime::client::ConnectorProvider;
use active_chat_realtime::{
    mods, Client as RealtimeClient, IDProvider, SystemTimeProvider, TimeProvider, UUIDProvider,
};

use crate::app::deps::{
    AppConfig, AppContext, AppDependencies, DynIDProvider, DynIdentityRepository, DynTimeProvider,
};
use crate::app::event_handlers::{
    ConnectionEventHandler, MessagesEventHandler, RealtimeEventHandlerQueue, RoomsEventHandler,
};
use crate::app::services::{AccountService, ConnectionService, RoomsService};
use crate::client::ClientInner;
use crate::domain::account::repos::IdentityRepository;
use crate::infra::account::InMemoryIdentityRepository;
use crate::infra::events::ImmediateClientEventDispatcher;
use crate::infra::messaging::RealtimeMessagingService;
use crate::infra::rooms::InMemoryConnectedRoomsRepository;
use crate::{Client, ClientDelegate};

pub struct ClientBuilder {
    config: AppConfig,
    connector_provider: Option<ConnectorProvider>,
    delegate: Option<Box<dyn ClientDelegate>>,
    id_provider: DynIDProvider,
    identity_repo: DynIdentityRepository,
    time_provider: DynTimeProvider,
}

impl ClientBuilder {
    pub(crate) fn new() -> Self {
        ClientBuilder {
            config: AppConfig::default(),
            connector_provider: None,
            delegate: None,
            id_provider: Arc::new(UUIDProvider::default()),
            identity_repo: Arc::new(InMemoryIdentityRepository::default()),
            time_provider: Arc::new(SystemTimeProvider::default()),
        }
    }

    pub fn set_connector_provider(mut self, connector_provider: ConnectorProvider) -> Self {
        self.connector_provider = Some(connector_provider);
        self
    }

    pub fn set_identity_repository<R: IdentityRepository + 'static>(
        mut self,
        identity_repo: R,
    ) -> Self {
        self.identity_repo = Arc::new(identity_repo);
        self
    }

    pub fn set_id_provider<P: IDProvider + 'static>(mut self, id_provider: P) -> Self {
        self.id_provider = Arc::new(id_provider);
        self
    }

    pub fn set_time_provider<T: TimeProvider + 'static>(mut self, time_provider: T) -> Self {
        self.time_provider = Arc::new(time_provider);
        self
    }

    pub fn set_config(mut self, config: AppConfig) -> Self {
        self.config = config;
        self
    }

    pub fn set_delegate(mut self, delegate: Option<Box<dyn ClientDelegate>>) -> Self {
        self.delegate = delegate;
        self
    }

    pub fn build(self) -> Client {
        let event_handler_queue = Arc::new(RealtimeEventHandlerQueue::new());

        let mut realtime_builder = RealtimeClient::builder().add_mod(mods::Chat::default());
        if let Some(connector_provider) = self.connector_provider {
            realtime_builder = realtime_builder.set_connector_provider(connector_provider);
        }
        let realtime = {
            let handler_queue = event_handler_queue.clone();
            realtime_builder
                .set_event_handler(move |_, event| {
                    let handler_queue = handler_queue.clone();
                    async move { handler_queue.handle_event(event).await }
                })
                .build()
        };

        let event_dispatcher = Arc::new(ImmediateClientEventDispatcher::new(self.delegate));

        let dependencies = AppDependencies {
            client_event_dispatcher: event_dispatcher.clone(),
            connected_rooms_repo: Arc::new(InMemoryConnectedRoomsRepository::default()),
            ctx: Arc::new(AppContext::new(self.config)),
            id_provider: self.id_provider,
            identity_repo: self.identity_repo,
            messaging_service: Arc::new(RealtimeMessagingService::new(realtime.clone())),
            realtime,
            time_provider: self.time_provider,
        };

        event_handler_queue.set_handlers(vec![
            Box::new(ConnectionEventHandler::from(&dependencies)),
            Box::new(MessagesEventHandler::from(&dependencies)),
            Box::new(RoomsEventHandler::from(&dependencies)),
        ]);

        let client_inner = Arc::new(ClientInner {
            account: AccountService::from(&dependencies),
            rooms: RoomsService::from(&dependencies),
            connection: ConnectionService::from(&dependencies),
            ctx: dependencies.ctx.clone(),
        });

        event_dispatcher.set_client_inner(Arc::downgrade(&client_inner));

        Client::from(client_inner)
    }
}
