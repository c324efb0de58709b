//! Auth handlers.

use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::api::ApiError;
use crate::app::App;
use crate::infrastructure::ports::UserIdentity;

#[derive(Debug, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct RecoverRequest {
    pub email: String,
}

#[derive(Debug, Serialize)]
pub struct IdentityResponse {
    pub id: String,
    pub email: String,
    pub metadata: Value,
}

impl From<UserIdentity> for IdentityResponse {
    fn from(identity: UserIdentity) -> Self {
        Self {
            id: identity.id.to_string(),
            email: identity.email,
            metadata: identity.metadata,
        }
    }
}

pub async fn login(
    State(app): State<Arc<App>>,
    Json(credentials): Json<Credentials>,
) -> Result<Json<IdentityResponse>, ApiError> {
    let identity = app
        .auth
        .sign_in(
            &app.session,
            &app.world_context,
            &credentials.email,
            &credentials.password,
        )
        .await?;
    // The row store acts as the signed-in user from here on.
    app.store.set_access_token(app.session.access_token());
    Ok(Json(identity.into()))
}

pub async fn signup(
    State(app): State<Arc<App>>,
    Json(credentials): Json<Credentials>,
) -> Result<Json<IdentityResponse>, ApiError> {
    let identity = app
        .auth
        .sign_up(
            &app.session,
            &app.world_context,
            &credentials.email,
            &credentials.password,
        )
        .await?;
    app.store.set_access_token(app.session.access_token());
    Ok(Json(identity.into()))
}

pub async fn logout(State(app): State<Arc<App>>) -> Result<(), ApiError> {
    app.auth.sign_out(&app.session, &app.world_context).await;
    app.store.set_access_token(None);
    Ok(())
}

pub async fn recover(
    State(app): State<Arc<App>>,
    Json(request): Json<RecoverRequest>,
) -> Result<(), ApiError> {
    app.auth.reset_password(&request.email).await?;
    Ok(())
}
