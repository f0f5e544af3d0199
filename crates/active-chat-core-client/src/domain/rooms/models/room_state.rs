// active-chat-core/active-chat-core-client
//
// Copyright: 2025, Active Chat Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::collections::{HashMap, HashSet};

use crate::domain::messaging::models::{ChatMessage, MessageId, TypingSignal};
use crate::domain::shared::models::UserId;

/// A room's session state: the messages seen so far in receipt order and the
/// latest compose state per participant. Cleared wholesale when the room is
/// left — there is no backing store.
#[derive(Default, Debug)]
pub struct RoomState {
    messages: Vec<ChatMessage>,
    seen_messages: HashSet<(MessageId, UserId)>,
    typing_users: HashMap<UserId, TypingSignal>,
}

impl RoomState {
    /// Appends a message unless the same `(id, user_id)` pair was appended
    /// before. The guard makes the transition idempotent: the broadcast echo
    /// of a message the sender already appended optimistically is dropped
    /// here. Returns whether the message was appended.
    pub fn append_message(&mut self, message: ChatMessage) -> bool {
        let key = (message.id.clone(), message.user_id.clone());
        if !self.seen_messages.insert(key) {
            return false;
        }
        self.messages.push(message);
        true
    }

    /// Applies a compose state. An empty draft removes the participant from
    /// the typing set; anything else supersedes their previous signal.
    /// Returns whether the visible typing set changed.
    pub fn apply_compose_state(&mut self, signal: TypingSignal) -> bool {
        if signal.is_stopped() {
            return self.typing_users.remove(&signal.user_id).is_some();
        }
        let previous = self.typing_users.insert(signal.user_id.clone(), signal);
        match previous {
            Some(previous) => Some(&previous) != self.typing_users.get(&previous.user_id),
            None => true,
        }
    }

    pub fn remove_composer(&mut self, user_id: &UserId) -> bool {
        self.typing_users.remove(user_id).is_some()
    }

    /// Messages in receipt order. Deliberately not re-sorted by timestamp —
    /// the relay is best-effort and a per-view order is all the product
    /// promises.
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// The participants currently typing, excluding `local_id`: a sender
    /// never sees their own indicator.
    pub fn composing_users(&self, local_id: Option<&UserId>) -> Vec<TypingSignal> {
        let mut users = self
            .typing_users
            .values()
            .filter(|signal| Some(&signal.user_id) != local_id)
            .cloned()
            .collect::<Vec<_>>();
        users.sort_by(|a, b| a.user_id.as_ref().cmp(b.user_id.as_ref()));
        users
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use pretty_assertions::assert_eq;

    use super::*;

    fn message(id: &str, user_id: &str, content: &str) -> ChatMessage {
        ChatMessage {
            id: MessageId::from(id),
            user_id: UserId::from(user_id),
            username: user_id.to_string(),
            content: content.to_string(),
            timestamp: Utc.with_ymd_and_hms(2025, 6, 1, 10, 0, 0).unwrap(),
            avatar: None,
            is_anonymous: false,
        }
    }

    fn signal(user_id: &str, content: &str) -> TypingSignal {
        TypingSignal {
            user_id: UserId::from(user_id),
            username: user_id.to_string(),
            content: content.to_string(),
        }
    }

    #[test]
    fn test_appends_messages_in_receipt_order() {
        let mut state = RoomState::default();
        assert!(state.append_message(message("m1", "a", "first")));
        assert!(state.append_message(message("m2", "b", "second")));

        assert_eq!(
            state
                .messages()
                .iter()
                .map(|m| m.content.as_str())
                .collect::<Vec<_>>(),
            vec!["first", "second"]
        );
    }

    #[test]
    fn test_drops_duplicate_message() {
        let mut state = RoomState::default();
        assert!(state.append_message(message("m1", "a", "first")));
        // The broadcast echo carries the same id and sender…
        assert!(!state.append_message(message("m1", "a", "first")));
        assert_eq!(state.messages().len(), 1);

        // …but the same id from a different sender is a different message.
        assert!(state.append_message(message("m1", "b", "other")));
        assert_eq!(state.messages().len(), 2);
    }

    #[test]
    fn test_newest_signal_supersedes_previous() {
        let mut state = RoomState::default();
        assert!(state.apply_compose_state(signal("a", "H")));
        assert!(state.apply_compose_state(signal("a", "He")));

        let users = state.composing_users(None);
        assert_eq!(users.len(), 1);
        assert_eq!(users[0].content, "He");
    }

    #[test]
    fn test_identical_signal_is_not_a_change() {
        let mut state = RoomState::default();
        assert!(state.apply_compose_state(signal("a", "Hey")));
        assert!(!state.apply_compose_state(signal("a", "Hey")));
    }

    #[test]
    fn test_empty_draft_removes_composer() {
        let mut state = RoomState::default();
        assert!(state.apply_compose_state(signal("a", "Hey")));
        assert!(state.apply_compose_state(signal("a", "")));
        assert!(state.composing_users(None).is_empty());

        // Removing an absent composer is a no-op.
        assert!(!state.apply_compose_state(signal("a", "")));
    }

    #[test]
    fn test_composing_users_excludes_local_identity() {
        let mut state = RoomState::default();
        state.apply_compose_state(signal("a", "Hey"));
        state.apply_compose_state(signal("b", "Ho"));

        let local_id = UserId::from("a");
        let users = state.composing_users(Some(&local_id));
        assert_eq!(users.len(), 1);
        assert_eq!(users[0].user_id, UserId::from("b"));
    }
}
