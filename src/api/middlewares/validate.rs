use std::ops::Deref;

use crate::domain::error::{AppError, message};
use actix_web::FromRequest;
use actix_web::HttpRequest;
use actix_web::dev::{JsonBody, Payload};
use futures::future::{FutureExt, LocalBoxFuture};
use serde::de::DeserializeOwned;
use serde_json::Value;
use validator::Validate;

const MAX_BODY_SIZE: usize = 32 * 1024;

/// JSON body extractor that runs `Validate` before the handler sees the payload.
/// The body must be a JSON object; serde would otherwise fill a struct from an
/// array positionally. Decode and validation failures become a 400 `AppError`.
#[derive(Debug)]
pub struct Json<T>(pub T);

impl<T> Json<T> {
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> Deref for Json<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.0
    }
}

impl<T> FromRequest for Json<T>
where
    T: DeserializeOwned + Validate + 'static,
{
    type Error = AppError;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    #[inline]
    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        JsonBody::new(
            req,
            payload,
            Some(&|mime| mime == mime::APPLICATION_JSON),
            true,
        )
        .limit(MAX_BODY_SIZE)
        .map(|res: Result<Value, _>| -> Result<Self, AppError> {
            let payload: T = match res.map_err(AppError::from)? {
                object @ Value::Object(_) => serde_json::from_value(object)
                    .map_err(|err| AppError::BadRequest(format!("Json deserialize error: {err}")))?,
                _ => return Err(AppError::BadRequest(message::NOT_AN_OBJECT)),
            };
            payload.validate()?;
            Ok(Json(payload))
        })
        .map(|res| {
            if let Err(err) = &res {
                tracing::debug!(error = %err.message, "request body rejected");
            }
            res
        })
        .boxed_local()
    }
}
