use async_trait::async_trait;

use crate::domain::error::AppResult;
use crate::domain::models::account::{AccountHandle, NewAccount};

#[async_trait]
pub trait AccountService: 'static + Sync + Send {
    async fn create_account(&self, new_account: NewAccount) -> AppResult<AccountHandle>;
    async fn delete_account(&self, uid: String) -> AppResult<()>;
}
