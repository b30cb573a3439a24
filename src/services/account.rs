use std::sync::Arc;

use crate::domain::{
    error::AppResult,
    models::account::{AccountHandle, NewAccount},
    providers::identity::IdentityProvider,
    services::account::AccountService,
};

use async_trait::async_trait;

pub struct AccountServiceImpl {
    provider: Arc<dyn IdentityProvider>,
}

impl AccountServiceImpl {
    pub fn new(provider: Arc<dyn IdentityProvider>) -> Self {
        Self { provider }
    }
}

#[async_trait]
impl AccountService for AccountServiceImpl {
    #[tracing::instrument(name = "create_account", skip_all, fields(email = %new_account.email))]
    async fn create_account(&self, new_account: NewAccount) -> AppResult<AccountHandle> {
        match self.provider.create_account(new_account).await {
            Ok(handle) => {
                tracing::info!(uid = %handle.uid, "account created");
                Ok(handle)
            }
            Err(error) => {
                tracing::warn!(%error, "identity provider rejected account creation");
                Err(error.into())
            }
        }
    }

    #[tracing::instrument(name = "delete_account", skip(self))]
    async fn delete_account(&self, uid: String) -> AppResult<()> {
        match self.provider.delete_account(&uid).await {
            Ok(()) => {
                tracing::info!("account deleted");
                Ok(())
            }
            Err(error) => {
                tracing::warn!(%error, "identity provider rejected account deletion");
                Err(error.into())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::error::AppError;
    use crate::infrastructure::identity::firebase::mock::{Call, IdentityProviderImpl};
    use rstest::*;

    #[fixture]
    fn provider() -> Arc<IdentityProviderImpl> {
        Arc::new(IdentityProviderImpl::with_account("u1", "taken@x.com"))
    }

    fn new_account(email: &str) -> NewAccount {
        NewAccount {
            email: email.to_string(),
            password: "secret1".to_string(),
        }
    }

    #[rstest]
    #[tokio::test]
    async fn test_create_account_success(provider: Arc<IdentityProviderImpl>) {
        let service = AccountServiceImpl::new(provider.clone());

        let handle = service.create_account(new_account("a@x.com")).await.unwrap();

        assert_eq!(handle.uid, "abc123");
        assert_eq!(
            provider.calls().await,
            vec![Call::Create("a@x.com".to_string())]
        );
    }

    #[rstest]
    #[tokio::test]
    async fn test_create_account_twice(provider: Arc<IdentityProviderImpl>) {
        let service = AccountServiceImpl::new(provider);

        assert!(service.create_account(new_account("a@x.com")).await.is_ok());

        assert_eq!(
            service
                .create_account(new_account("a@x.com"))
                .await
                .unwrap_err(),
            AppError::BadRequest("EMAIL_EXISTS")
        );
    }

    #[rstest]
    #[tokio::test]
    async fn test_delete_account_success(provider: Arc<IdentityProviderImpl>) {
        let service = AccountServiceImpl::new(provider.clone());

        service.delete_account("u1".to_string()).await.unwrap();

        assert_eq!(provider.calls().await, vec![Call::Delete("u1".to_string())]);
    }

    #[rstest]
    #[tokio::test]
    async fn test_delete_missing_account(provider: Arc<IdentityProviderImpl>) {
        let service = AccountServiceImpl::new(provider);

        assert_eq!(
            service
                .delete_account("missing".to_string())
                .await
                .unwrap_err(),
            AppError::BadRequest("USER_NOT_FOUND")
        );
    }
}
