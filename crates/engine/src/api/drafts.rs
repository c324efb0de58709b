//! Draft-generation handler.

use std::sync::Arc;

use axum::extract::State;
use axum::Json;

use worldsmith_shared::{DraftRequest, DraftResponse};

use crate::api::ApiError;
use crate::app::App;

pub async fn generate(
    State(app): State<Arc<App>>,
    Json(request): Json<DraftRequest>,
) -> Result<Json<DraftResponse>, ApiError> {
    let content = app.drafts.generate(&request).await?;
    Ok(Json(DraftResponse { content }))
}
