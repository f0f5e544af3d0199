// active-chat-core/active-chat-core-client
//
// Copyright: 2025, Active Chat Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use async_trait::async_trait;
use parking_lot::RwLock;

use crate::domain::account::models::Identity;
use crate::domain::account::repos::IdentityRepository;

/// Identity storage that lives and dies with the process. The default for
/// embedders whose host platform already persists session state.
#[derive(Default)]
pub struct InMemoryIdentityRepository {
    identity: RwLock<Option<Identity>>,
}

#[async_trait]
impl IdentityRepository for InMemoryIdentityRepository {
    async fn get(&self) -> Result<Option<Identity>> {
        Ok(self.identity.read().clone())
    }

    async fn set(&self, identity: &Identity) -> Result<()> {
        *self.identity.write() = Some(identity.clone());
        Ok(())
    }

    async fn clear(&self) -> Result<()> {
        *self.identity.write() = None;
        Ok(())
    }
}
