// active-chat-core/active-chat-core-client
//
// Copyright: 2025, Active Chat Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use async_trait::async_trait;

use crate::domain::account::models::Identity;

/// Device-local storage for the active identity. Nothing here ever leaves
/// the device; signing out simply clears the slot.
#[async_trait]
pub trait IdentityRepository: Send + Sync {
    async fn get(&self) -> Result<Option<Identity>>;
    async fn set(&self, identity: &Identity) -> Result<()>;
    async fn clear(&self) -> Result<()>;
}
