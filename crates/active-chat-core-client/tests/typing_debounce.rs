// active-chat-core/active-chat-core-client
//
// Copyright: 2025, Active Chat Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use pretty_assertions::assert_eq;
use secrecy::Secret;

use active_chat_core_client::dtos::RoomId;
use active_chat_core_client::Client;
use active_chat_realtime::frame::FramePayload;
use active_chat_realtime::test;

fn typing_contents(connection: &test::Connection) -> Vec<String> {
    connection
        .sent_frames()
        .into_iter()
        .filter_map(|frame| match frame.payload {
            FramePayload::Typing(signal) => Some(signal.content),
            FramePayload::Message(_) => None,
        })
        .collect()
}

async fn connected_client() -> Result<(Client, Arc<test::Connection>)> {
    let connection = Arc::new(test::Connection::default());
    let client = Client::builder()
        .set_connector_provider(test::Connector::provider(connection.clone()))
        .build();
    client.connect(Secret::new("api-key".to_string())).await?;
    client.account.join_as_guest("Alice").await?;
    Ok((client, connection))
}

#[tokio::test(start_paused = true)]
async fn test_emits_exactly_one_auto_clear_after_inactivity() -> Result<()> {
    let (client, connection) = connected_client().await?;
    let room = client.rooms.join_room(&RoomId::from("secret-42")).await?;

    room.update_draft("Hi").await?;
    tokio::time::sleep(Duration::from_millis(1100)).await;

    assert_eq!(typing_contents(&connection), vec!["Hi", ""]);

    // Long after the pause nothing else fires.
    tokio::time::sleep(Duration::from_secs(5)).await;
    assert_eq!(typing_contents(&connection), vec!["Hi", ""]);
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_keystrokes_reset_the_auto_clear_timer() -> Result<()> {
    let (client, connection) = connected_client().await?;
    let room = client.rooms.join_room(&RoomId::from("secret-42")).await?;

    room.update_draft("Hi").await?;
    tokio::time::sleep(Duration::from_millis(600)).await;

    // Still inside the interval: this keystroke cancels the pending clear
    // and starts a fresh one.
    room.update_draft("Hi!").await?;
    tokio::time::sleep(Duration::from_millis(600)).await;

    // 1.2s after the first keystroke only the two drafts went out.
    assert_eq!(typing_contents(&connection), vec!["Hi", "Hi!"]);

    tokio::time::sleep(Duration::from_millis(500)).await;
    assert_eq!(typing_contents(&connection), vec!["Hi", "Hi!", ""]);
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_sending_supersedes_the_pending_auto_clear() -> Result<()> {
    let (client, connection) = connected_client().await?;
    let room = client.rooms.join_room(&RoomId::from("secret-42")).await?;

    room.update_draft("Hi").await?;
    room.send_message("Hi").await?;

    // The send emitted the clear signal itself…
    assert_eq!(typing_contents(&connection), vec!["Hi", ""]);

    // …and the canceled timer never adds a second one.
    tokio::time::sleep(Duration::from_secs(5)).await;
    assert_eq!(typing_contents(&connection), vec!["Hi", ""]);
    Ok(())
}
