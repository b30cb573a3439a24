
pub mod utils;

use std::sync::Arc;

use serde::Deserialize;

use crate::container::Container;
use crate::infrastructure::identity::firebase::mock::IdentityProviderImpl;

use rstest::*;

pub struct TestContext {
    pub provider: Arc<IdentityProviderImpl>,
    pub container: Arc<Container>,
}

#[fixture]
fn context() -> TestContext {
    let provider = Arc::new(IdentityProviderImpl::with_account("u1", "taken@x.com"));

    let container = Arc::new(Container::new(provider.clone()));

    TestContext {
        provider,
        container,
    }
}

#[derive(Debug, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
struct Error {
    error: String,
}
