//! Profile handlers.

use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use serde::Deserialize;

use crate::api::auth::IdentityResponse;
use crate::api::ApiError;
use crate::app::App;
use crate::use_cases::ProfileError;

#[derive(Debug, Deserialize)]
pub struct DisplayNameRequest {
    pub display_name: String,
}

pub async fn update_display_name(
    State(app): State<Arc<App>>,
    Json(request): Json<DisplayNameRequest>,
) -> Result<Json<IdentityResponse>, ApiError> {
    app.profile
        .update_display_name(&app.session, &request.display_name)
        .await?;
    let identity = app
        .session
        .current_user()
        .ok_or_else(|| ApiError::from(ProfileError::NotAuthenticated))?;
    Ok(Json(identity.into()))
}
