// active-chat-core/active-chat-core-client
//
// Copyright: 2025, Active Chat Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::time::Duration;

use anyhow::Result;
use pretty_assertions::assert_eq;
use secrecy::Secret;

use chrono::{TimeZone, Utc};

use active_chat_core_client::dtos::{MessageId, RoomId, UserId};
use active_chat_core_client::Client;
use active_chat_realtime::connector::relay::RelayHub;
use active_chat_realtime::test::{ConstantTimeProvider, IncrementingIDProvider};

/// Parks the test long enough for every spawned relay/handler task to run.
/// Under a paused clock the sleep returns as soon as the runtime is idle.
async fn settle() {
    tokio::time::sleep(Duration::from_millis(10)).await;
}

async fn connected_client(hub: &RelayHub, guest_name: &str) -> Result<Client> {
    let client = Client::builder()
        .set_connector_provider(hub.connector_provider())
        .build();
    client.connect(Secret::new("relay".to_string())).await?;
    client.account.join_as_guest(guest_name).await?;
    Ok(client)
}

#[tokio::test(start_paused = true)]
async fn test_local_echo_is_synchronous_and_survives_broadcast() -> Result<()> {
    let hub = RelayHub::new();
    let alice = connected_client(&hub, "Alice").await?;
    let bob = connected_client(&hub, "Bob").await?;

    let room_id = RoomId::from("secret-42");
    let alice_room = alice.rooms.join_room(&room_id).await?;
    let bob_room = bob.rooms.join_room(&room_id).await?;

    alice_room.send_message("Hello Bob").await?;

    // The sender sees their message before the relay round-trip completes.
    let messages = alice_room.messages();
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].content, "Hello Bob");
    assert_eq!(messages[0].from.name, "Alice");
    assert!(messages[0].from.is_anonymous);

    settle().await;

    // Bob received the broadcast; Alice's echo was de-duplicated.
    assert_eq!(bob_room.messages().len(), 1);
    assert_eq!(bob_room.messages()[0].content, "Hello Bob");
    assert_eq!(alice_room.messages().len(), 1);
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_sent_messages_carry_provider_ids_and_clock() -> Result<()> {
    let hub = RelayHub::new();
    let client = Client::builder()
        .set_connector_provider(hub.connector_provider())
        .set_id_provider(IncrementingIDProvider::new("id"))
        .set_time_provider(ConstantTimeProvider::ymd_hms(2025, 6, 1, 10, 0, 0))
        .build();
    client.connect(Secret::new("relay".to_string())).await?;
    client.account.join_as_guest("Alice").await?;

    let room = client.rooms.join_room(&RoomId::from("secret-42")).await?;
    room.send_message("Hello").await?;

    let messages = room.messages();
    // "id-1" went to the guest identity, "id-2" to the message.
    assert_eq!(messages[0].id, MessageId::from("id-2"));
    assert_eq!(messages[0].from.id, UserId::from("id-1"));
    assert_eq!(
        messages[0].timestamp,
        Utc.with_ymd_and_hms(2025, 6, 1, 10, 0, 0).unwrap()
    );
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_messages_keep_send_order() -> Result<()> {
    let hub = RelayHub::new();
    let alice = connected_client(&hub, "Alice").await?;

    let room = alice.rooms.join_room(&RoomId::from("secret-42")).await?;
    room.send_message("a").await?;
    room.send_message("b").await?;

    let contents = room
        .messages()
        .iter()
        .map(|m| m.content.clone())
        .collect::<Vec<_>>();
    assert_eq!(contents, vec!["a", "b"]);

    settle().await;

    // The broadcast echoes change nothing.
    let contents = room
        .messages()
        .iter()
        .map(|m| m.content.clone())
        .collect::<Vec<_>>();
    assert_eq!(contents, vec!["a", "b"]);
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_send_requires_identity() -> Result<()> {
    let hub = RelayHub::new();
    let client = Client::builder()
        .set_connector_provider(hub.connector_provider())
        .build();
    client.connect(Secret::new("relay".to_string())).await?;

    let room = client.rooms.join_room(&RoomId::from("secret-42")).await?;
    assert!(room.send_message("Hello?").await.is_err());
    assert!(room.messages().is_empty());
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_typing_indicators_reach_peers_but_not_the_sender() -> Result<()> {
    let hub = RelayHub::new();
    let alice = connected_client(&hub, "Alice").await?;
    let bob = connected_client(&hub, "Bob").await?;

    let room_id = RoomId::from("secret-42");
    let alice_room = alice.rooms.join_room(&room_id).await?;
    let bob_room = bob.rooms.join_room(&room_id).await?;

    alice_room.update_draft("Hel").await?;
    settle().await;

    let composing = bob_room.load_composing_users().await?;
    assert_eq!(composing.len(), 1);
    assert_eq!(composing[0].name, "Alice");

    // Alice's own signal echoed back through the channel but is never
    // rendered to her.
    assert!(alice_room.load_composing_users().await?.is_empty());
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_typing_indicator_auto_clears_after_inactivity() -> Result<()> {
    let hub = RelayHub::new();
    let alice = connected_client(&hub, "Alice").await?;
    let bob = connected_client(&hub, "Bob").await?;

    let room_id = RoomId::from("secret-42");
    let alice_room = alice.rooms.join_room(&room_id).await?;
    let bob_room = bob.rooms.join_room(&room_id).await?;

    alice_room.update_draft("Hel").await?;
    settle().await;
    assert_eq!(bob_room.load_composing_users().await?.len(), 1);

    // One second of silence and the indicator is gone on its own.
    tokio::time::sleep(Duration::from_millis(1100)).await;
    assert!(bob_room.load_composing_users().await?.is_empty());
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_sending_clears_typing_indicator_immediately() -> Result<()> {
    let hub = RelayHub::new();
    let alice = connected_client(&hub, "Alice").await?;
    let bob = connected_client(&hub, "Bob").await?;

    let room_id = RoomId::from("secret-42");
    let alice_room = alice.rooms.join_room(&room_id).await?;
    let bob_room = bob.rooms.join_room(&room_id).await?;

    alice_room.update_draft("Hello Bo").await?;
    settle().await;
    assert_eq!(bob_room.load_composing_users().await?.len(), 1);

    alice_room.send_message("Hello Bob").await?;
    settle().await;

    assert!(bob_room.load_composing_users().await?.is_empty());
    assert_eq!(bob_room.messages().len(), 1);
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_clearing_the_draft_stops_typing() -> Result<()> {
    let hub = RelayHub::new();
    let alice = connected_client(&hub, "Alice").await?;
    let bob = connected_client(&hub, "Bob").await?;

    let room_id = RoomId::from("secret-42");
    let alice_room = alice.rooms.join_room(&room_id).await?;
    let bob_room = bob.rooms.join_room(&room_id).await?;

    alice_room.update_draft("Hel").await?;
    settle().await;
    assert_eq!(bob_room.load_composing_users().await?.len(), 1);

    alice_room.update_draft("").await?;
    settle().await;
    assert!(bob_room.load_composing_users().await?.is_empty());
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_join_room_is_idempotent() -> Result<()> {
    let hub = RelayHub::new();
    let alice = connected_client(&hub, "Alice").await?;

    let room_id = RoomId::from("secret-42");
    let first = alice.rooms.join_room(&room_id).await?;
    let second = alice.rooms.join_room(&room_id).await?;

    first.send_message("Hello").await?;
    settle().await;

    // Both handles share the same session state.
    assert_eq!(second.messages().len(), 1);
    assert_eq!(alice.rooms.connected_rooms().len(), 1);
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_leaving_a_room_detaches_it() -> Result<()> {
    let hub = RelayHub::new();
    let alice = connected_client(&hub, "Alice").await?;
    let bob = connected_client(&hub, "Bob").await?;

    let room_id = RoomId::from("secret-42");
    let alice_room = alice.rooms.join_room(&room_id).await?;
    let bob_room = bob.rooms.join_room(&room_id).await?;

    alice_room.send_message("one").await?;
    settle().await;
    assert_eq!(bob_room.messages().len(), 1);

    bob.rooms.leave_room(&room_id).await?;
    alice_room.send_message("two").await?;
    settle().await;

    // Nothing reaches the detached session, and re-entry starts clean.
    let bob_room = bob.rooms.join_room(&room_id).await?;
    assert!(bob_room.messages().is_empty());

    alice_room.send_message("three").await?;
    settle().await;
    assert_eq!(bob_room.messages().len(), 1);
    assert_eq!(bob_room.messages()[0].content, "three");
    Ok(())
}
