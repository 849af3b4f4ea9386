use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use crate::error::AppError;

use super::{
    ERIC_IDENTITY_HEADER, ERIC_IDENTITY_TYPE_HEADER, ERIC_KEY_PRIVILEGES_HEADER,
    INTERNAL_APP_PRIVILEGE, REQUEST_ID_HEADER,
};

fn header<'a>(parts: &'a Parts, name: &str) -> Option<&'a str> {
    parts
        .headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|v| !v.is_empty())
}

/// Correlation id supplied by the API gateway in `X-Request-Id`.
#[derive(Debug, Clone)]
pub struct RequestId(pub String);

impl<S: Send + Sync> FromRequestParts<S> for RequestId {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        header(parts, REQUEST_ID_HEADER)
            .map(|id| RequestId(id.to_string()))
            .ok_or_else(|| AppError::BadRequest("Missing X-Request-Id header".to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentityType {
    OAuth2,
    Key,
}

impl IdentityType {
    fn parse(s: &str) -> Option<Self> {
        match s {
            "oauth2" => Some(Self::OAuth2),
            "key" => Some(Self::Key),
            _ => None,
        }
    }
}

/// Caller identity asserted by the API gateway through the ERIC headers.
#[derive(Debug, Clone)]
pub struct EricIdentity {
    pub user_id: String,
    pub identity_type: IdentityType,
}

impl<S: Send + Sync> FromRequestParts<S> for EricIdentity {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let user_id = header(parts, ERIC_IDENTITY_HEADER)
            .ok_or_else(|| AppError::Unauthorized("Missing identity".to_string()))?;

        let identity_type = header(parts, ERIC_IDENTITY_TYPE_HEADER)
            .and_then(IdentityType::parse)
            .ok_or_else(|| AppError::Unauthorized("Invalid identity type".to_string()))?;

        Ok(EricIdentity {
            user_id: user_id.to_string(),
            identity_type,
        })
    }
}

/// A signed-in end user (OAuth2 identity).
#[derive(Debug, Clone)]
pub struct UserIdentity(pub EricIdentity);

impl<S: Send + Sync> FromRequestParts<S> for UserIdentity {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let identity = EricIdentity::from_request_parts(parts, state).await?;
        if identity.identity_type != IdentityType::OAuth2 {
            return Err(AppError::Unauthorized(
                "User authentication required".to_string(),
            ));
        }
        Ok(UserIdentity(identity))
    }
}

/// An API key holding the internal-app privilege.
#[derive(Debug, Clone)]
pub struct InternalApp(pub EricIdentity);

impl<S: Send + Sync> FromRequestParts<S> for InternalApp {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let identity = EricIdentity::from_request_parts(parts, state).await?;

        let privileged = identity.identity_type == IdentityType::Key
            && header(parts, ERIC_KEY_PRIVILEGES_HEADER).is_some_and(|privileges| {
                privileges
                    .split(',')
                    .any(|p| p.trim() == INTERNAL_APP_PRIVILEGE)
            });

        if privileged {
            Ok(InternalApp(identity))
        } else {
            Err(AppError::Forbidden(
                "Internal app privileges required".to_string(),
            ))
        }
    }
}
