//! Typed query extractor with `validator` rules.

use std::future::{Ready, ready};
use std::ops::Deref;

use actix_web::{FromRequest, HttpRequest, dev::Payload, web};
use serde::de::DeserializeOwned;
use validator::Validate;

use postboard_core::DomainError;

use super::error::AppError;

/// Query string deserialized into `T` and checked with `T::validate`.
///
/// Extraction fails with a 400 before the handler body runs:
/// ```ignore
/// async fn get_by_id(query: ValidatedQuery<PostIdQuery>) -> AppResult<HttpResponse> {
///     let post = repo.find_by_id(query.id).await?;
///     ...
/// }
/// ```
#[derive(Debug)]
pub struct ValidatedQuery<T>(T);

impl<T> ValidatedQuery<T> {
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> Deref for ValidatedQuery<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.0
    }
}

impl<T> FromRequest for ValidatedQuery<T>
where
    T: DeserializeOwned + Validate,
{
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(extract(req.query_string()))
    }
}

fn extract<T>(query_string: &str) -> Result<ValidatedQuery<T>, AppError>
where
    T: DeserializeOwned + Validate,
{
    reject_invalid_utf8(query_string)?;

    let value = web::Query::<T>::from_query(query_string)
        .map_err(|e| AppError::BadRequest(e.to_string()))?
        .into_inner();

    value
        .validate()
        .map_err(|e| DomainError::Validation(e.to_string()))?;

    Ok(ValidatedQuery(value))
}

/// `web::Query` replaces undecodable bytes with U+FFFD; refuse them instead.
fn reject_invalid_utf8(query_string: &str) -> Result<(), AppError> {
    for pair in query_string.split('&').filter(|p| !p.is_empty()) {
        for part in pair.splitn(2, '=') {
            urlencoding::decode(&part.replace('+', " ")).map_err(|e| {
                AppError::BadRequest(format!("query is not valid UTF-8: {}", e))
            })?;
        }
    }
    Ok(())
}
