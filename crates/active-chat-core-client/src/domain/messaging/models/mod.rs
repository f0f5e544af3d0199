// active-chat-core/active-chat-core-client
//
// Copyright: 2025, Active Chat Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use message::ChatMessage;
pub use message_id::MessageId;
pub use typing_signal::TypingSignal;

mod message;
mod message_id;
mod typing_signal;
