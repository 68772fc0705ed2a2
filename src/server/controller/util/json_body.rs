//! Lenient JSON request bodies.
//!
//! Handlers read their body through [`JsonBody`] so that a missing, non-JSON or mistyped
//! body never short-circuits the request with axum's plain-text rejection. The body falls
//! back to the payload's `Default` (every field absent), which the handler then answers
//! with its own `{ok: false, error}` response after the session gate has run.

use std::convert::Infallible;

use axum::{
    extract::{FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;

/// JSON body that is replaced by `T::default()` when it cannot be read.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonBody<T>(pub T);

impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned + Default,
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(payload)) => Ok(Self(payload)),
            Err(rejection) => {
                tracing::debug!(%rejection, "Unreadable JSON body, treating it as empty");

                Ok(Self(T::default()))
            }
        }
    }
}
