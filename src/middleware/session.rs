use axum::{extract::FromRequestParts, http::header};
use jsonwebtoken::{DecodingKey, Validation, decode};
use uuid::Uuid;

use crate::{dto::auth::SessionClaims, error::AppError};

pub const SESSION_COOKIE: &str = "portal_session";

/// Session lifetime, matching the portal's 30-minute inactivity window.
pub const SESSION_TTL_SECS: i64 = 30 * 60;

/// The logged-in student, decoded from the session cookie.
#[derive(Debug, Clone)]
pub struct SessionStudent {
    pub student_id: Uuid,
    pub name: String,
    pub email: String,
    pub course: String,
}

fn cookie_value<'a>(cookies: &'a str, name: &str) -> Option<&'a str> {
    cookies.split(';').find_map(|pair| {
        let (key, value) = pair.trim().split_once('=')?;
        (key == name).then_some(value)
    })
}

impl<S> FromRequestParts<S> for SessionStudent
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut axum::http::request::Parts,
        _state: &S,
    ) -> Result<Self, Self::Rejection> {
        let cookie_header = parts
            .headers
            .get(header::COOKIE)
            .ok_or(AppError::Unauthorized)?;

        let cookies = cookie_header
            .to_str()
            .map_err(|_| AppError::Unauthorized)?;

        let token = cookie_value(cookies, SESSION_COOKIE).ok_or(AppError::Unauthorized)?;

        let secret = std::env::var("JWT_SECRET")
            .map_err(|_| AppError::Internal(anyhow::anyhow!("JWT_SECRET is not set")))?;

        let decoded = decode::<SessionClaims>(
            token,
            &DecodingKey::from_secret(secret.as_bytes()),
            &Validation::default(),
        )
        .map_err(|_| AppError::Unauthorized)?;

        let student_id =
            Uuid::parse_str(&decoded.claims.sub).map_err(|_| AppError::Unauthorized)?;

        Ok(SessionStudent {
            student_id,
            name: decoded.claims.name,
            email: decoded.claims.email,
            course: decoded.claims.course,
        })
    }
}
