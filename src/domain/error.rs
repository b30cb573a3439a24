use actix_web::{
    HttpResponse, ResponseError,
    http::{StatusCode, header::ContentType},
    web::Json,
};

use actix_web::error::JsonPayloadError;

use validator::{ValidationError, ValidationErrors, ValidationErrorsKind};

use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::providers::identity::ProviderError;

pub type AppResult<T> = core::result::Result<T, AppError>;

macro_rules! static_error {
    ($name:ident, $status:expr) => {
        #[allow(non_snake_case, missing_docs)]
        pub fn $name(message: impl ToString) -> AppError {
            AppError {
                message: message.to_string(),
                code: $status.as_u16(),
            }
        }
    };
}

/// Error body returned by every failing endpoint: `{"error": "<message>"}`.
#[derive(Debug, PartialEq, Eq, Serialize, ToSchema)]
pub struct AppError {
    #[serde(rename = "error")]
    pub message: String,
    #[serde(skip)]
    pub code: u16,
}

#[rustfmt::skip]
pub mod message {
    pub static MISSING_CREDENTIALS: &str = "Email and password are required";
    pub static MISSING_UID: &str = "UID is required";
    pub static NOT_AN_OBJECT: &str = "Request body must be a JSON object";
    pub static EMAIL_EXISTS: &str = "EMAIL_EXISTS";
}

#[rustfmt::skip]
impl AppError {
    static_error!(BadRequest, StatusCode::BAD_REQUEST);

    pub fn example_400() -> AppError {
        AppError::BadRequest(message::EMAIL_EXISTS)
    }

    pub fn example_400_missing_uid() -> AppError {
        AppError::BadRequest(message::MISSING_UID)
    }
}

impl std::error::Error for AppError {}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error {}: {}", self.code, self.message)
    }
}

impl ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code())
            .content_type(ContentType::json())
            .json(Json(self))
    }

    fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }
}

// Every provider failure is a client error carrying the provider's message.
impl From<ProviderError> for AppError {
    fn from(error: ProviderError) -> Self {
        match error {
            ProviderError::Failure(message) => AppError::BadRequest(message),
        }
    }
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        let mut messages: Vec<String> = Vec::new();

        for (_, _, error) in flatten_errors(&errors, None, None) {
            let message = error.to_string();
            if !messages.contains(&message) {
                messages.push(message);
            }
        }

        AppError::BadRequest(messages.join("; "))
    }
}

fn flatten_errors(
    errors: &ValidationErrors,
    path: Option<String>,
    indent: Option<u16>,
) -> Vec<(u16, String, &ValidationError)> {
    errors
        .errors()
        .iter()
        .flat_map(|(field, err)| {
            let indent = indent.unwrap_or(0);
            let actual_path = path
                .as_ref()
                .map(|path| [path.as_str(), field].join("."))
                .unwrap_or_else(|| field.to_string());
            match err {
                ValidationErrorsKind::Field(field_errors) => field_errors
                    .iter()
                    .map(|error| (indent, actual_path.clone(), error))
                    .collect::<Vec<_>>(),
                ValidationErrorsKind::List(list_error) => list_error
                    .iter()
                    .flat_map(|(index, errors)| {
                        let actual_path = format!("{}[{}]", actual_path.as_str(), index);
                        flatten_errors(errors, Some(actual_path), Some(indent + 1))
                    })
                    .collect::<Vec<_>>(),
                ValidationErrorsKind::Struct(struct_errors) => {
                    flatten_errors(struct_errors, Some(actual_path), Some(indent + 1))
                }
            }
        })
        .collect::<Vec<_>>()
}

impl From<JsonPayloadError> for AppError {
    fn from(error: JsonPayloadError) -> Self {
        AppError::BadRequest(error.to_string())
    }
}
