use async_trait::async_trait;
use axum::extract::{rejection::JsonRejection, FromRequest, Request};
use axum::http::StatusCode;
use axum::Json;
use serde::de::DeserializeOwned;

use super::error::AppError;

/// `Json<T>` whose rejections are reported as [`AppError::MalformedBody`], or
/// [`AppError::PayloadTooLarge`] past the body limit.
///
/// Axum answers a body with the wrong shape with 422; form clients expect 400
/// and a JSON message in every failure case.
pub struct FormJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for FormJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(Self(value)),
            Err(rejection) if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE => {
                Err(AppError::PayloadTooLarge(rejection.body_text()))
            }
            Err(rejection) => Err(AppError::MalformedBody(rejection_detail(rejection))),
        }
    }
}

fn rejection_detail(rejection: JsonRejection) -> String {
    match rejection {
        JsonRejection::MissingJsonContentType(_) => {
            "expected a `Content-Type: application/json` header".to_owned()
        }
        other => other.body_text(),
    }
}
