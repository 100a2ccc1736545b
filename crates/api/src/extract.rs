//! Extractors whose rejections use the JSON error envelope.
//!
//! axum's stock `Path`, `Query` and `Json` extractors reject with plain-text
//! bodies. The wrappers here delegate to them and convert the rejection into
//! an [`AppError`] instead.

use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::extract::{FromRequest, FromRequestParts, Path, Query, Request};
use axum::http::request::Parts;
use axum::Json;
use catalog_core::error::CoreError;
use catalog_core::types::DbId;
use serde::de::DeserializeOwned;
use validator::{Validate, ValidationErrors};

use crate::error::AppError;

/// JSON body that passed both deserialization and `validator` rules.
///
/// Malformed JSON, a wrong content type, missing required keys and unknown
/// keys on `deny_unknown_fields` DTOs are all reported as
/// [`AppError::BadRequest`]. Field rule failures become
/// [`CoreError::Validation`].
///
/// ```ignore
/// async fn create(ValidatedJson(input): ValidatedJson<CreateGenre>) -> AppResult<StatusCode> {
///     /* input is known-good here */
/// }
/// ```
#[derive(Debug)]
pub struct ValidatedJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection: JsonRejection| AppError::BadRequest(rejection.body_text()))?;

        value
            .validate()
            .map_err(|errors| CoreError::Validation(describe(&errors)))?;

        Ok(Self(value))
    }
}

/// The single `{id}` segment of a resource path.
///
/// A segment that is not an integer is a [`AppError::BadRequest`].
#[derive(Debug, Clone, Copy)]
pub struct IdPath(pub DbId);

impl<S> FromRequestParts<S> for IdPath
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id) = Path::<DbId>::from_request_parts(parts, state)
            .await
            .map_err(|rejection: PathRejection| AppError::BadRequest(rejection.body_text()))?;
        Ok(Self(id))
    }
}

/// Query string deserialized into `T`.
///
/// Repeated keys and undecodable strings are a [`AppError::BadRequest`].
#[derive(Debug)]
pub struct QueryParams<T>(pub T);

impl<S, T> FromRequestParts<S> for QueryParams<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(|rejection: QueryRejection| AppError::BadRequest(rejection.body_text()))?;
        Ok(Self(value))
    }
}

/// Flatten field errors into `field: code` pairs, sorted by field name.
fn describe(errors: &ValidationErrors) -> String {
    let mut parts: Vec<String> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, errs)| {
            errs.iter()
                .map(move |e| format!("invalid value for '{field}' ({})", e.code))
        })
        .collect();
    parts.sort();
    parts.join("; ")
}
