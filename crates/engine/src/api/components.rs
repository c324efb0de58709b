//! Component handlers.
//!
//! Records cross this boundary as raw rows; normalization and world
//! stamping happen in the entity store, not here.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::Json;
use serde_json::Value;

use worldsmith_domain::ComponentId;

use crate::api::ApiError;
use crate::app::App;

pub async fn list(
    State(app): State<Arc<App>>,
    Path(kind): Path<String>,
) -> Result<Json<Vec<Value>>, ApiError> {
    let rows = app.components.list(&kind, &app.world_context).await?;
    Ok(Json(rows))
}

pub async fn create(
    State(app): State<Arc<App>>,
    Path(kind): Path<String>,
    Json(fields): Json<Value>,
) -> Result<Json<Value>, ApiError> {
    let row = app
        .components
        .create(&kind, &app.world_context, fields)
        .await?;
    Ok(Json(row))
}

pub async fn update(
    State(app): State<Arc<App>>,
    Path((kind, id)): Path<(String, ComponentId)>,
    Json(fields): Json<Value>,
) -> Result<Json<Value>, ApiError> {
    let row = app.components.update(&kind, id, fields).await?;
    Ok(Json(row))
}

pub async fn remove(
    State(app): State<Arc<App>>,
    Path((kind, id)): Path<(String, ComponentId)>,
) -> Result<(), ApiError> {
    app.components.delete(&kind, id).await?;
    Ok(())
}
