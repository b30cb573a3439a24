use async_trait::async_trait;
use thiserror::Error;

use crate::domain::models::account::{AccountHandle, NewAccount};

pub type ProviderResult<T> = core::result::Result<T, ProviderError>;

/// Any failure reported by the identity provider, whatever its cause
/// (duplicate email, password policy, unknown uid, transport, authorization).
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ProviderError {
    #[error("{0}")]
    Failure(String),
}

#[async_trait]
pub trait IdentityProvider: Send + Sync {
    async fn create_account(&self, new_account: NewAccount) -> ProviderResult<AccountHandle>;
    async fn delete_account(&self, uid: &str) -> ProviderResult<()>;
}
