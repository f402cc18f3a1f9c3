//! Admin-gate middleware and extractors.
//!
//! Provides an extractor for requiring the admin gate to be open in route
//! handlers, plus helpers for toggling the persisted gate flag.

use axum::{
    extract::FromRequestParts,
    http::{StatusCode, request::Parts},
    response::{IntoResponse, Redirect, Response},
};
use tower_sessions::Session;

use crate::models::session_keys;

/// Extractor that requires the admin gate to be open.
///
/// If the gate is closed, returns a redirect to the admin login page.
///
/// # Example
///
/// ```rust,ignore
/// async fn protected_handler(
///     _admin: RequireAdminAuth,
/// ) -> impl IntoResponse {
///     "only admins see this"
/// }
/// ```
pub struct RequireAdminAuth;

/// Error returned when the gate is required but closed.
pub enum AdminAuthRejection {
    /// Redirect to the admin login page.
    RedirectToLogin,
    /// No session available on the request.
    Unauthorized,
}

impl IntoResponse for AdminAuthRejection {
    fn into_response(self) -> Response {
        match self {
            Self::RedirectToLogin => Redirect::to("/admin/login").into_response(),
            Self::Unauthorized => StatusCode::UNAUTHORIZED.into_response(),
        }
    }
}

impl<S> FromRequestParts<S> for RequireAdminAuth
where
    S: Send + Sync,
{
    type Rejection = AdminAuthRejection;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        // Get the session from extensions (set by SessionManagerLayer)
        let session = parts
            .extensions
            .get::<Session>()
            .ok_or(AdminAuthRejection::Unauthorized)?;

        if is_admin_authenticated(session).await {
            Ok(Self)
        } else {
            Err(AdminAuthRejection::RedirectToLogin)
        }
    }
}

/// Whether the gate flag is set in this session.
pub async fn is_admin_authenticated(session: &Session) -> bool {
    session
        .get::<bool>(session_keys::ADMIN_AUTHENTICATED)
        .await
        .ok()
        .flatten()
        .unwrap_or(false)
}

/// Open the gate for this session (login).
///
/// # Errors
///
/// Returns an error if the session cannot be modified.
pub async fn set_admin_authenticated(
    session: &Session,
) -> Result<(), tower_sessions::session::Error> {
    session.insert(session_keys::ADMIN_AUTHENTICATED, true).await
}

/// Close the gate for this session (logout).
///
/// # Errors
///
/// Returns an error if the session cannot be modified.
pub async fn clear_admin_authenticated(
    session: &Session,
) -> Result<(), tower_sessions::session::Error> {
    session
        .remove::<bool>(session_keys::ADMIN_AUTHENTICATED)
        .await?;
    Ok(())
}
