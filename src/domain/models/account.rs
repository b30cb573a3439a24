/// Validated input for a provider-side account creation.
#[derive(Clone, PartialEq, Eq)]
pub struct NewAccount {
    pub email: String,
    pub password: String,
}

impl std::fmt::Debug for NewAccount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NewAccount")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Opaque identifier the provider assigns to a created account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountHandle {
    pub uid: String,
}
