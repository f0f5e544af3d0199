// active-chat-core/active-chat-realtime
//
// Copyright: 2025, Active Chat Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use serde::{Deserialize, Serialize};

use active_chat_utils::id_string;

pub use payload::{MessagePayload, TypingPayload};

mod payload;

id_string!(
    /// The name of a broadcast channel on the relay.
    ChannelId
);

/// A single broadcast unit. On the wire a frame is the channel name plus an
/// externally tagged payload, e.g.
/// `{"channel": "chat:lobby", "event": "message", "payload": {…}}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    pub channel: ChannelId,
    #[serde(flatten)]
    pub payload: FramePayload,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", content = "payload", rename_all = "camelCase")]
pub enum FramePayload {
    Message(MessagePayload),
    Typing(TypingPayload),
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_message_frame_wire_format() {
        let frame = Frame {
            channel: ChannelId::from("chat:lobby"),
            payload: FramePayload::Message(MessagePayload {
                id: "mid-1".to_string(),
                user_id: "uid-1".to_string(),
                username: "Jane Doe".to_string(),
                content: "Hello".to_string(),
                timestamp_ms: 1_700_000_000_000,
                avatar: None,
                is_anonymous: Some(true),
            }),
        };

        assert_eq!(
            serde_json::to_string(&frame).unwrap(),
            r#"{"channel":"chat:lobby","event":"message","payload":{"id":"mid-1","userId":"uid-1","username":"Jane Doe","content":"Hello","timestampMs":1700000000000,"isAnonymous":true}}"#
        );
    }

    #[test]
    fn test_typing_frame_wire_format() {
        let frame = Frame {
            channel: ChannelId::from("chat:lobby"),
            payload: FramePayload::Typing(TypingPayload {
                user_id: "uid-1".to_string(),
                username: "Jane Doe".to_string(),
                content: "Hel".to_string(),
            }),
        };

        assert_eq!(
            serde_json::to_string(&frame).unwrap(),
            r#"{"channel":"chat:lobby","event":"typing","payload":{"userId":"uid-1","username":"Jane Doe","content":"Hel"}}"#
        );
    }

    #[test]
    fn test_parses_message_frame() {
        let json = r#"{
            "channel": "chat:lobby",
            "event": "message",
            "payload": {
                "id": "mid-1",
                "userId": "uid-1",
                "username": "Jane Doe",
                "content": "Hello",
                "timestampMs": 1700000000000,
                "avatar": "data:image/svg+xml;base64,abc"
            }
        }"#;

        let frame = serde_json::from_str::<Frame>(json).unwrap();
        assert_eq!(frame.channel, ChannelId::from("chat:lobby"));

        let FramePayload::Message(message) = frame.payload else {
            panic!("Expected message payload");
        };
        assert_eq!(message.avatar.as_deref(), Some("data:image/svg+xml;base64,abc"));
        assert_eq!(message.is_anonymous, None);
    }

    #[test]
    fn test_rejects_unknown_event() {
        let json = r#"{"channel": "chat:lobby", "event": "presence", "payload": {}}"#;
        assert!(serde_json::from_str::<Frame>(json).is_err());
    }
}
