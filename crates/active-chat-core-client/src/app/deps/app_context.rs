// active-chat-core/active-chat-core-client
//
// Copyright: 2025, Active Chat Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::time::Duration;

use parking_lot::RwLock;
use tracing::debug;

use crate::domain::shared::models::ConnectionState;

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// How long after the last keystroke an automatic "stopped typing"
    /// signal is broadcast on the sender's behalf.
    pub typing_auto_clear: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            typing_auto_clear: Duration::from_secs(1),
        }
    }
}

pub struct AppContext {
    pub config: AppConfig,
    connection_state: RwLock<ConnectionState>,
}

impl AppContext {
    pub fn new(config: AppConfig) -> Self {
        AppContext {
            config,
            connection_state: RwLock::new(ConnectionState::Disconnected),
        }
    }

    pub fn connection_state(&self) -> ConnectionState {
        *self.connection_state.read()
    }

    pub(crate) fn set_connection_state(&self, state: ConnectionState) {
        debug!("Connection state changed to {state}.");
        *self.connection_state.write() = state;
    }
}
