// active-chat-core/active-chat-core-client
//
// Copyright: 2025, Active Chat Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use client::{Client, ClientDelegate};
pub use client_builder::ClientBuilder;
pub use client_event::{ClientEvent, ClientRoomEventType, ConnectionEvent};
pub use infra::account::{FsIdentityRepository, InMemoryIdentityRepository};

pub mod app;
pub mod avatar;
mod client;
mod client_builder;
mod client_event;
pub(crate) mod domain;
pub(crate) mod infra;

pub use app::dtos;
