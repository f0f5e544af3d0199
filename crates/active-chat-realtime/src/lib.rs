// active-chat-core/active-chat-realtime
//
// Copyright: 2025, Active Chat Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use client::{Client, ClientBuilder};
pub use connector::{Connection, ConnectionError, Connector};
pub use deps::{IDProvider, SystemTimeProvider, TimeProvider, UUIDProvider};
pub use event::Event;
pub use frame::{ChannelId, Frame, FramePayload};
pub use util::PinnedFuture;

pub mod client;
pub mod connector;
mod deps;
mod event;
pub mod frame;
pub mod mods;
mod util;

#[cfg(any(test, feature = "test"))]
pub mod test;
