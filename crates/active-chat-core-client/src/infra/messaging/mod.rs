// active-chat-core/active-chat-core-client
//
// Copyright: 2025, Active Chat Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use realtime_messaging_service::RealtimeMessagingService;

mod realtime_messaging_service;
