use std::borrow::Cow;

use validator::ValidationError;

use crate::api::dto::account::{CreateUserDTO, DeleteUserDTO};
use crate::domain::error::message;

fn is_present(value: Option<&str>) -> bool {
    value.is_some_and(|value| !value.is_empty())
}

fn required(message: &'static str) -> ValidationError {
    ValidationError::new("required").with_message(Cow::from(message))
}

pub fn has_credentials(dto: &CreateUserDTO) -> Result<(), ValidationError> {
    if !is_present(dto.email.as_deref()) || !is_present(dto.password.as_deref()) {
        return Err(required(message::MISSING_CREDENTIALS));
    }

    Ok(())
}

pub fn has_uid(dto: &DeleteUserDTO) -> Result<(), ValidationError> {
    if !is_present(dto.uid.as_deref()) {
        return Err(required(message::MISSING_UID));
    }

    Ok(())
}
