// active-chat-core/active-chat-core-client
//
// Copyright: 2025, Active Chat Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::Arc;

use active_chat_realtime::{Client as RealtimeClient, IDProvider, TimeProvider};

use crate::app::deps::AppContext;
use crate::app::event_handlers::ClientEventDispatcher;
use crate::domain::account::repos::IdentityRepository;
use crate::domain::messaging::services::MessagingService;
use crate::domain::rooms::repos::ConnectedRoomsRepository;

pub(crate) type DynAppContext = Arc<AppContext>;
pub(crate) type DynClientEventDispatcher = Arc<dyn ClientEventDispatcher>;
pub(crate) type DynConnectedRoomsRepository = Arc<dyn ConnectedRoomsRepository>;
pub(crate) type DynIDProvider = Arc<dyn IDProvider>;
pub(crate) type DynIdentityRepository = Arc<dyn IdentityRepository>;
pub(crate) type DynMessagingService = Arc<dyn MessagingService>;
pub(crate) type DynTimeProvider = Arc<dyn TimeProvider>;

pub(crate) struct AppDependencies {
    pub client_event_dispatcher: DynClientEventDispatcher,
    pub connected_rooms_repo: DynConnectedRoomsRepository,
    pub ctx: DynAppContext,
    pub id_provider: DynIDProvider,
    pub identity_repo: DynIdentityRepository,
    pub messaging_service: DynMessagingService,
    pub realtime: RealtimeClient,
    pub time_provider: DynTimeProvider,
}
