// active-chat-core/active-chat-core-client
//
// Copyright: 2025, Active Chat Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use account_service::AccountService;
pub use connection_service::ConnectionService;
pub use room::Room;
pub use rooms_service::RoomsService;

mod account_service;
mod connection_service;
mod room;
mod rooms_service;
