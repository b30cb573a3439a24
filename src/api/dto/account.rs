use crate::api::dto::validation::{has_credentials, has_uid};
use crate::domain::models::account::{AccountHandle, NewAccount};
use serde::Deserialize;
use serde::Serialize;
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Validate, Deserialize, ToSchema)]
#[validate(schema(function = "has_credentials"))]
pub struct CreateUserDTO {
    #[serde(default)]
    #[schema(examples("your@email.com"))]
    pub email: Option<String>,

    #[serde(default)]
    #[schema(examples("s3cret!"))]
    pub password: Option<String>,
}

#[derive(Debug, Validate, Deserialize, ToSchema)]
#[validate(schema(function = "has_uid"))]
pub struct DeleteUserDTO {
    #[serde(default)]
    #[schema(examples("tQ5xE3b2nYh8wVdKpR1s"))]
    pub uid: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct UserDTO {
    #[schema(examples("tQ5xE3b2nYh8wVdKpR1s"))]
    pub uid: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct StatusDTO {
    #[schema(examples("success"))]
    pub status: String,
}

impl StatusDTO {
    pub fn success() -> Self {
        StatusDTO {
            status: "success".to_string(),
        }
    }
}

impl From<AccountHandle> for UserDTO {
    fn from(handle: AccountHandle) -> Self {
        UserDTO { uid: handle.uid }
    }
}

// Only reached once `has_credentials` passed.
impl From<CreateUserDTO> for NewAccount {
    fn from(create_user: CreateUserDTO) -> Self {
        NewAccount {
            email: create_user.email.unwrap_or_default(),
            password: create_user.password.unwrap_or_default(),
        }
    }
}

impl DeleteUserDTO {
    // Only called once `has_uid` passed.
    pub fn into_uid(self) -> String {
        self.uid.unwrap_or_default()
    }
}
