use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Serialize;
use serde::de::{DeserializeOwned, IgnoredAny};

use crate::config::FirebaseConfig;
use crate::domain::models::account::{AccountHandle, NewAccount};
use crate::domain::providers::identity::{IdentityProvider, ProviderError, ProviderResult};
use crate::infrastructure::identity::credentials::{
    CredentialError, ServiceAccountKey, ServiceAccountSigner, TokenSource,
};
use crate::infrastructure::models::identity::{
    CreateAccountRequest, CreateAccountResponse, DeleteAccountRequest, ErrorResponse,
};

const MIN_PASSWORD_LENGTH: usize = 6;
const MAX_UID_LENGTH: usize = 128;

/// Firebase Authentication through the Identity Toolkit admin REST API.
pub struct FirebaseIdentityProvider {
    http: reqwest::Client,
    project_url: String,
    tokens: TokenSource,
}

impl FirebaseIdentityProvider {
    pub fn new(http: reqwest::Client, api_url: &str, project_id: &str, tokens: TokenSource) -> Self {
        FirebaseIdentityProvider {
            http,
            project_url: format!(
                "{}/v1/projects/{}",
                api_url.trim_end_matches('/'),
                project_id
            ),
            tokens,
        }
    }

    pub fn from_config(config: &FirebaseConfig) -> Result<Self, CredentialError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        match &config.emulator_host {
            Some(host) => {
                let project_id = match &config.project_id {
                    Some(project_id) => project_id.to_owned(),
                    None => ServiceAccountKey::from_file(&config.credentials_file)?.project_id,
                };

                tracing::info!(%host, %project_id, "using the auth emulator");

                Ok(Self::new(
                    http,
                    &format!("http://{host}/identitytoolkit.googleapis.com"),
                    &project_id,
                    TokenSource::Emulator,
                ))
            }
            None => {
                let key = ServiceAccountKey::from_file(&config.credentials_file)?;
                let signer = ServiceAccountSigner::new(&key)?;

                tracing::info!(project_id = %key.project_id, client_email = %key.client_email, "service account loaded");

                Ok(Self::new(
                    http,
                    &config.api_url,
                    &key.project_id,
                    TokenSource::service_account(signer),
                ))
            }
        }
    }

    async fn post<T, R>(&self, resource: &str, body: &T) -> ProviderResult<R>
    where
        T: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let bearer = self.tokens.bearer(&self.http).await?;

        let res = self
            .http
            .post(format!("{}/{}", self.project_url, resource))
            .bearer_auth(bearer)
            .json(body)
            .send()
            .await?;

        let status = res.status();

        if status.is_success() {
            return Ok(res.json::<R>().await?);
        }

        let body = res.text().await?;

        Err(error_message(status, &body))
    }
}

#[async_trait]
impl IdentityProvider for FirebaseIdentityProvider {
    async fn create_account(&self, new_account: NewAccount) -> ProviderResult<AccountHandle> {
        validate_email(&new_account.email)?;
        validate_password(&new_account.password)?;

        let created: CreateAccountResponse = self
            .post(
                "accounts",
                &CreateAccountRequest {
                    email: &new_account.email,
                    password: &new_account.password,
                },
            )
            .await?;

        Ok(AccountHandle {
            uid: created.local_id,
        })
    }

    async fn delete_account(&self, uid: &str) -> ProviderResult<()> {
        validate_uid(uid)?;

        let _: IgnoredAny = self
            .post("accounts:delete", &DeleteAccountRequest { local_id: uid })
            .await?;

        Ok(())
    }
}

impl From<reqwest::Error> for ProviderError {
    fn from(error: reqwest::Error) -> Self {
        ProviderError::Failure(error.to_string())
    }
}

fn error_message(status: StatusCode, body: &str) -> ProviderError {
    match serde_json::from_str::<ErrorResponse>(body) {
        Ok(res) => ProviderError::Failure(res.error.message),
        Err(_) => ProviderError::Failure(format!(
            "Unexpected response from identity provider ({status})"
        )),
    }
}

fn validate_email(email: &str) -> ProviderResult<()> {
    match email.split('@').collect::<Vec<_>>()[..] {
        [local, domain] if !local.is_empty() && !domain.is_empty() => Ok(()),
        _ => Err(ProviderError::Failure(format!(
            "Malformed email address string: \"{email}\"."
        ))),
    }
}

fn validate_password(password: &str) -> ProviderResult<()> {
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(ProviderError::Failure(format!(
            "Invalid password string. Password must be a string at least {MIN_PASSWORD_LENGTH} characters long."
        )));
    }

    Ok(())
}

fn validate_uid(uid: &str) -> ProviderResult<()> {
    let length = uid.chars().count();

    if length == 0 || length > MAX_UID_LENGTH {
        return Err(ProviderError::Failure(format!(
            "Invalid uid: \"{uid}\". The uid must be a non-empty string with at most {MAX_UID_LENGTH} characters."
        )));
    }

    Ok(())
}
