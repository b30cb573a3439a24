use std::sync::Arc;

use crate::domain::providers::identity::IdentityProvider;
use crate::domain::services::account::AccountService;

use crate::services::account::AccountServiceImpl;

pub struct Container {
    pub account_service: Arc<dyn AccountService>,
}

impl Container {
    pub fn new(provider: Arc<dyn IdentityProvider>) -> Self {
        Container {
            account_service: account_service(provider),
        }
    }
}

fn account_service(provider: Arc<dyn IdentityProvider>) -> Arc<dyn AccountService> {
    Arc::new(AccountServiceImpl::new(provider))
}
