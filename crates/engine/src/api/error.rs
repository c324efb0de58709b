//! Error-to-status mapping for the HTTP boundary.
//!
//! Backend messages are preserved in the `{error}` body rather than
//! swallowed; nothing here is fatal to the process.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::infrastructure::ports::{AuthError, DraftError, RepoError};
use crate::registry::UnknownComponentType;
use crate::use_cases::{ComponentError, ProfileError, WorldError};

#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn no_world_selected() -> Self {
        Self::new(StatusCode::BAD_REQUEST, "No world selected")
    }

    /// The world selection changed while a request was in flight; the
    /// result belongs to a superseded epoch.
    pub fn stale_world_selection() -> Self {
        Self::new(StatusCode::CONFLICT, "World selection changed")
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            tracing::error!(status = %self.status, message = %self.message, "request failed");
        } else {
            tracing::debug!(status = %self.status, message = %self.message, "request refused");
        }
        (self.status, Json(json!({ "error": self.message }))).into_response()
    }
}

impl From<RepoError> for ApiError {
    fn from(err: RepoError) -> Self {
        let status = match err {
            RepoError::NotFound => StatusCode::NOT_FOUND,
            _ => StatusCode::BAD_GATEWAY,
        };
        Self::new(status, err.to_string())
    }
}

impl From<UnknownComponentType> for ApiError {
    fn from(err: UnknownComponentType) -> Self {
        Self::new(StatusCode::NOT_FOUND, err.to_string())
    }
}

impl From<WorldError> for ApiError {
    fn from(err: WorldError) -> Self {
        match err {
            WorldError::NotAuthenticated => Self::new(StatusCode::UNAUTHORIZED, err.to_string()),
            WorldError::Repo(repo) => repo.into(),
        }
    }
}

impl From<ComponentError> for ApiError {
    fn from(err: ComponentError) -> Self {
        match err {
            ComponentError::NoWorldSelected => Self::no_world_selected(),
            ComponentError::UnknownType(unknown) => unknown.into(),
            ComponentError::Repo(repo) => repo.into(),
        }
    }
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        let status = match err {
            AuthError::NotAuthenticated | AuthError::InvalidCredentials => {
                StatusCode::UNAUTHORIZED
            }
            AuthError::RequestFailed(_) | AuthError::InvalidResponse(_) => StatusCode::BAD_GATEWAY,
        };
        Self::new(status, err.to_string())
    }
}

impl From<ProfileError> for ApiError {
    fn from(err: ProfileError) -> Self {
        match err {
            ProfileError::NotAuthenticated => Self::new(StatusCode::UNAUTHORIZED, err.to_string()),
            ProfileError::NameConflict(_) => Self::new(StatusCode::CONFLICT, err.to_string()),
            ProfileError::EmptyName => Self::new(StatusCode::BAD_REQUEST, err.to_string()),
            ProfileError::Repo(repo) => repo.into(),
            ProfileError::Auth(auth) => auth.into(),
        }
    }
}

impl From<DraftError> for ApiError {
    fn from(err: DraftError) -> Self {
        let status = match err {
            DraftError::MissingCredential(_) => StatusCode::INTERNAL_SERVER_ERROR,
            _ => StatusCode::BAD_GATEWAY,
        };
        Self::new(status, err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repo_not_found_is_404_and_the_rest_is_502() {
        assert_eq!(ApiError::from(RepoError::NotFound).status, StatusCode::NOT_FOUND);
        assert_eq!(
            ApiError::from(RepoError::Database("regions: 500: boom".into())).status,
            StatusCode::BAD_GATEWAY
        );
    }

    #[test]
    fn backend_messages_are_preserved() {
        let err = ApiError::from(RepoError::Database("regions: 500: boom".into()));
        assert!(err.message.contains("regions: 500: boom"));
    }

    #[test]
    fn domain_refusals_map_to_client_errors() {
        assert_eq!(
            ApiError::from(ComponentError::NoWorldSelected).status,
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::from(UnknownComponentType("dragons".into())).status,
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::from(ProfileError::NameConflict("Maera".into())).status,
            StatusCode::CONFLICT
        );
        assert_eq!(
            ApiError::from(WorldError::NotAuthenticated).status,
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            ApiError::from(DraftError::EmptyContent).status,
            StatusCode::BAD_GATEWAY
        );
    }
}
