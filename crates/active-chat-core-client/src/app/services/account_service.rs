// active-chat-core/active-chat-core-client
//
// Copyright: 2025, Active Chat Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::{bail, Result};
use tracing::info;

use crate::app::deps::{
    AppDependencies, DynClientEventDispatcher, DynIDProvider, DynIdentityRepository,
};
use crate::app::dtos::AuthenticatedProfile;
use crate::domain::account::models::{AccountError, Identity};
use crate::domain::shared::models::UserId;
use crate::ClientEvent;

pub struct AccountService {
    client_event_dispatcher: DynClientEventDispatcher,
    id_provider: DynIDProvider,
    identity_repo: DynIdentityRepository,
}

impl From<&AppDependencies> for AccountService {
    fn from(deps: &AppDependencies) -> Self {
        AccountService {
            client_event_dispatcher: deps.client_event_dispatcher.clone(),
            id_provider: deps.id_provider.clone(),
            identity_repo: deps.identity_repo.clone(),
        }
    }
}

impl AccountService {
    pub async fn current_identity(&self) -> Result<Option<Identity>> {
        self.identity_repo.get().await
    }

    /// Adopts an OAuth-derived identity for this session. Signing in again
    /// with the same subject refreshes the stored claims; anything else is
    /// rejected — an identity never changes mid-session.
    pub async fn sign_in(&self, profile: AuthenticatedProfile) -> Result<Identity> {
        self.activate(Identity::Authenticated {
            id: profile.id,
            name: profile.name,
            avatar_url: profile.avatar_url,
        })
        .await
    }

    /// Joins with nothing but a display name. The generated id lives only in
    /// device storage and marks every message from this session as a guest
    /// message.
    pub async fn join_as_guest(&self, name: &str) -> Result<Identity> {
        let name = name.trim();
        if name.is_empty() {
            bail!("A guest needs a display name to join.");
        }

        self.activate(Identity::Anonymous {
            id: UserId::from(self.id_provider.new_id()),
            name: name.to_string(),
        })
        .await
    }

    pub async fn sign_out(&self) -> Result<()> {
        self.identity_repo.clear().await?;
        self.client_event_dispatcher
            .dispatch_event(ClientEvent::AccountChanged);
        Ok(())
    }

    async fn activate(&self, identity: Identity) -> Result<Identity> {
        if let Some(active) = self.identity_repo.get().await? {
            let is_same_subject = match (&active, &identity) {
                (
                    Identity::Authenticated { id: active_id, .. },
                    Identity::Authenticated { id: new_id, .. },
                ) => active_id == new_id,
                _ => false,
            };

            if !is_same_subject {
                return Err(AccountError::IdentityInUse.into());
            }
        }

        info!("Activating identity '{}'…", identity.id());
        self.identity_repo.set(&identity).await?;
        self.client_event_dispatcher
            .dispatch_event(ClientEvent::AccountChanged);
        Ok(identity)
    }
}
