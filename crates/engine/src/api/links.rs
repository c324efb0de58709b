//! Link-resolution handler.

use std::sync::Arc;

use axum::extract::{Query, State};
use axum::Json;
use serde::Deserialize;

use crate::api::ApiError;
use crate::app::App;
use crate::use_cases::links::{search, LinkCandidate};

#[derive(Debug, Default, Deserialize)]
pub struct LinksQuery {
    #[serde(default)]
    pub q: Option<String>,
}

pub async fn resolve(
    State(app): State<Arc<App>>,
    Query(query): Query<LinksQuery>,
) -> Result<Json<Vec<LinkCandidate>>, ApiError> {
    let world_id = app
        .world_context
        .current_id()
        .ok_or_else(ApiError::no_world_selected)?;

    // Resolution fans out across ten tables; if the user switches worlds
    // mid-flight the result belongs to a dead selection and is dropped.
    let epoch = app.world_context.epoch();
    let candidates = app.links.resolve_all(world_id).await;
    if !app.world_context.is_live(epoch) {
        return Err(ApiError::stale_world_selection());
    }

    let filtered = match query.q.as_deref() {
        Some(q) => search(&candidates, q),
        None => candidates,
    };
    Ok(Json(filtered))
}
