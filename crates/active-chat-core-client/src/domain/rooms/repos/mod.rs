// active-chat-core/active-chat-core-client
//
// Copyright: 2025, Active Chat Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use connected_rooms_repository::ConnectedRoomsRepository;

mod connected_rooms_repository;
