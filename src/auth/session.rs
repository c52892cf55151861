use std::future::{ready, Ready};

use actix_web::{
    dev::Payload,
    http::header::Header,
    FromRequest, HttpMessage, HttpRequest,
};
use actix_web_httpauth::headers::authorization::{Authorization, Bearer};
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::{
    auth::{Claims, JwtService},
    errors::AppError,
};

/// Identity of the caller for the lifetime of one request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Session {
    pub user_id: String,
    pub email: String,
    pub expires_at: DateTime<Utc>,
}

impl Session {
    pub fn new(user_id: &str, email: &str, expires_at: DateTime<Utc>) -> Self {
        Self {
            user_id: user_id.to_string(),
            email: email.to_string(),
            expires_at,
        }
    }
}

impl From<Claims> for Session {
    fn from(claims: Claims) -> Self {
        let expires_at = claims.expires_at();
        Self {
            user_id: claims.sub,
            email: claims.email,
            expires_at,
        }
    }
}

/// Pulls the raw token from the bearer header, falling back to the session
/// cookie.
pub fn extract_token(req: &HttpRequest, cookie_name: &str) -> Option<String> {
    if let Ok(auth) = Authorization::<Bearer>::parse(req) {
        return Some(auth.into_scheme().token().to_string());
    }

    req.cookie(cookie_name)
        .map(|cookie| cookie.value().to_string())
        .filter(|value| !value.is_empty())
}

/// Resolves the session carried by a request. Invalid or expired tokens
/// count as no session.
pub fn resolve_session(
    req: &HttpRequest,
    jwt_service: &JwtService,
    cookie_name: &str,
) -> Option<Session> {
    let token = extract_token(req, cookie_name)?;

    match jwt_service.validate_token(&token) {
        Ok(claims) => Some(Session::from(claims)),
        Err(err) => {
            log::debug!("Ignoring session token: {}", err);
            None
        }
    }
}

/// Extractor for handlers that must run with a session.
pub struct AuthenticatedSession(pub Session);

impl FromRequest for AuthenticatedSession {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let session = req
            .extensions()
            .get::<Session>()
            .cloned()
            .ok_or_else(|| AppError::Unauthorized("Not authenticated".to_string()));

        ready(session.map(AuthenticatedSession))
    }
}

/// Extractor for handlers that pass the (possibly absent) session on to a
/// guard.
pub struct OptionalSession(pub Option<Session>);

impl FromRequest for OptionalSession {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(Ok(OptionalSession(req.extensions().get::<Session>().cloned())))
    }
}
