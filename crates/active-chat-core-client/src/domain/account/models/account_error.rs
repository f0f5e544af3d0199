// active-chat-core/active-chat-core-client
//
// Copyright: 2025, Active Chat Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

#[derive(Debug, thiserror::Error, Clone, PartialEq)]
pub enum AccountError {
    /// A different identity is already active. The variant of an identity
    /// must not change for the lifetime of a device session; sign out first.
    #[error("Another identity is already active for this session")]
    IdentityInUse,
}
