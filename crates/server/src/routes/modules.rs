use axum::{body::Bytes, extract::State, http::StatusCode, Json};
use service::{modules::intake, ModuleMap, ServiceError};
use tracing::{error, info, warn};

use crate::errors::ApiError;
use crate::state::ServerState;

/// `POST /api/modules`: merge a `{slug: module}` body into the store.
///
/// The raw body is parsed here rather than through the `Json` extractor so that
/// an unparsable body gets the same 500 as any other save failure.
pub async fn create_modules(
    State(state): State<ServerState>,
    body: Bytes,
) -> Result<(StatusCode, Json<ModuleMap>), ApiError> {
    let entries = intake::decode_payload(&body).map_err(|e| {
        error!(code = e.code(), err = %e, "module intake body rejected");
        ApiError::SaveFailed
    })?;

    if state.strict_validation {
        intake::validate_entries(&entries).map_err(|e| match e {
            ServiceError::Validation(msg) => {
                warn!(%msg, "module intake failed validation");
                ApiError::Validation(msg)
            }
            other => {
                error!(code = other.code(), err = %other, "module intake validation error");
                ApiError::SaveFailed
            }
        })?;
    }

    let slugs = entries.keys().cloned().collect::<Vec<_>>().join(",");
    match state.modules.upsert(entries).await {
        Ok(merged) => {
            info!(%slugs, total = merged.len(), "modules saved");
            Ok((StatusCode::CREATED, Json(merged)))
        }
        Err(e) => {
            error!(code = e.code(), err = %e, %slugs, "save modules failed");
            Err(ApiError::SaveFailed)
        }
    }
}

/// `GET /api/modules`: the whole store.
pub async fn list_modules(State(state): State<ServerState>) -> Result<Json<ModuleMap>, ApiError> {
    state.modules.get_all().await.map(Json).map_err(|e| {
        error!(code = e.code(), err = %e, "load modules failed");
        ApiError::LoadFailed
    })
}
