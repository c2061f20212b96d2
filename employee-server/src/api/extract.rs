//! Request extractors
//!
//! Every failure becomes a `400 {"message": ...}` instead of axum's
//! plain-text rejection. Bodies are decoded regardless of `Content-Type`.

use axum::body::Bytes;
use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::request::Parts;

use crate::db::models::{EmployeeId, EmployeeInput};
use crate::utils::AppError;

/// Decoded employee payload
#[derive(Debug)]
pub struct EmployeePayload(pub EmployeeInput);

impl<S> FromRequest<S> for EmployeePayload
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| AppError::InvalidBody(e.body_text()))?;
        Ok(Self(EmployeeInput::decode(&bytes)?))
    }
}

/// Employee id taken from the `{id}` path segment
///
/// Undecodable segments (e.g. `%FF`) and non-hex ids both become
/// `400 {"message": ...}`.
#[derive(Debug, Clone, Copy)]
pub struct EmployeeIdPath(pub EmployeeId);

impl<S> FromRequestParts<S> for EmployeeIdPath
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| AppError::InvalidId(e.body_text()))?;
        Ok(Self(EmployeeId::parse_hex(&raw)?))
    }
}
