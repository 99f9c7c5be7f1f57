//! Axum extractor for upstream credentials.
//!
//! - Modeus: `Authorization: Bearer <token>`
//! - Netology: the `rtoken` and `session` cookies

use axum::{
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use axum_extra::extract::CookieJar;

use yacal_core::calendar::NetologyCookies;

const RTOKEN_COOKIE: &str = "rtoken";
const SESSION_COOKIE: &str = "session";

/// Credentials forwarded to the upstream platforms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    /// Modeus bearer token.
    pub session_token: String,
    pub cookies: NetologyCookies,
}

/// Missing or malformed credentials.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CredentialsRejection {
    MissingBearerToken,
    MissingCookie(&'static str),
}

impl IntoResponse for CredentialsRejection {
    fn into_response(self) -> Response {
        let detail = match self {
            CredentialsRejection::MissingBearerToken => {
                "Missing Modeus bearer token".to_string()
            }
            CredentialsRejection::MissingCookie(name) => {
                format!("Missing Netology cookie: {}", name)
            }
        };

        (
            StatusCode::UNAUTHORIZED,
            Json(serde_json::json!({ "detail": detail })),
        )
            .into_response()
    }
}

fn extract_bearer_token(headers: &HeaderMap) -> Option<String> {
    headers
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(str::to_string)
}

fn extract_cookie(jar: &CookieJar, name: &'static str) -> Result<String, CredentialsRejection> {
    jar.get(name)
        .map(|cookie| cookie.value().to_string())
        .filter(|value| !value.is_empty())
        .ok_or(CredentialsRejection::MissingCookie(name))
}

impl<S> FromRequestParts<S> for Credentials
where
    S: Send + Sync,
{
    type Rejection = CredentialsRejection;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let session_token = extract_bearer_token(&parts.headers)
            .ok_or(CredentialsRejection::MissingBearerToken)?;

        let jar = CookieJar::from_headers(&parts.headers);
        let cookies = NetologyCookies::new(
            extract_cookie(&jar, RTOKEN_COOKIE)?,
            extract_cookie(&jar, SESSION_COOKIE)?,
        );

        Ok(Credentials {
            session_token,
            cookies,
        })
    }
}
