use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;

use crate::errors::AppError;
use crate::positions::PositionConfig;
use crate::screening::ScreeningError;
use crate::state::AppState;

#[derive(Serialize)]
pub struct PositionEntry {
    pub name: String,
    #[serde(flatten)]
    pub config: PositionConfig,
}

/// GET /api/v1/positions
pub async fn handle_list_positions(State(state): State<AppState>) -> Json<Vec<PositionEntry>> {
    let positions = state
        .positions
        .list()
        .await
        .into_iter()
        .map(|(name, config)| PositionEntry { name, config })
        .collect();
    Json(positions)
}

/// GET /api/v1/positions/:name
pub async fn handle_get_position(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<PositionConfig>, AppError> {
    let config = state
        .positions
        .get(&name)
        .await
        .ok_or(ScreeningError::UnknownPosition(name))?;
    Ok(Json(config))
}

/// PUT /api/v1/positions/:name
/// Creates or replaces a position. Responds 201 on create, 200 on update.
pub async fn handle_upsert_position(
    State(state): State<AppState>,
    Path(name): Path<String>,
    Json(config): Json<PositionConfig>,
) -> Result<(StatusCode, Json<PositionEntry>), AppError> {
    let errors = config.validate(&name);
    if !errors.is_empty() {
        return Err(AppError::Validation(errors.join("; ")));
    }

    let created = state.positions.upsert(&name, config.clone()).await?;
    let status = if created {
        StatusCode::CREATED
    } else {
        StatusCode::OK
    };
    Ok((status, Json(PositionEntry { name, config })))
}
