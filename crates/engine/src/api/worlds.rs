//! World handlers.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::Json;
use serde::Deserialize;

use worldsmith_domain::{World, WorldId, WorldPatch};

use crate::api::ApiError;
use crate::app::App;

pub async fn list(State(app): State<Arc<App>>) -> Result<Json<Vec<World>>, ApiError> {
    let worlds = app.worlds.refresh(&app.session, &app.world_context).await?;
    Ok(Json(worlds))
}

pub async fn create(
    State(app): State<Arc<App>>,
    Json(fields): Json<WorldPatch>,
) -> Result<Json<World>, ApiError> {
    let world = app
        .worlds
        .create(&app.session, &app.world_context, fields)
        .await?;
    Ok(Json(world))
}

pub async fn update(
    State(app): State<Arc<App>>,
    Path(id): Path<WorldId>,
    Json(fields): Json<WorldPatch>,
) -> Result<Json<World>, ApiError> {
    let world = app.worlds.update(&app.world_context, id, fields).await?;
    Ok(Json(world))
}

pub async fn remove(
    State(app): State<Arc<App>>,
    Path(id): Path<WorldId>,
) -> Result<(), ApiError> {
    app.worlds
        .delete(&app.session, &app.world_context, id)
        .await?;
    Ok(())
}

pub async fn current(State(app): State<Arc<App>>) -> Result<Json<Option<World>>, ApiError> {
    Ok(Json(app.world_context.current()))
}

#[derive(Debug, Deserialize)]
pub struct SelectWorldRequest {
    pub id: WorldId,
}

pub async fn select(
    State(app): State<Arc<App>>,
    Json(request): Json<SelectWorldRequest>,
) -> Result<Json<World>, ApiError> {
    let world = app
        .worlds
        .select(&app.session, &app.world_context, request.id)
        .await?;
    Ok(Json(world))
}
