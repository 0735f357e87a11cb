//! API endpoints for the lawyer catalog.

use axum::extract::{Path, State};
use axum::Json;
use std::sync::Arc;

use crate::models::Lawyer;
use crate::web::error::ApiError;
use crate::web::AppState;

/// List all lawyers.
pub async fn list_lawyers(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Lawyer>>, ApiError> {
    let lawyers = state.store.lawyers().await?;
    Ok(Json(lawyers))
}

/// Get a single lawyer.
pub async fn get_lawyer(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Lawyer>, ApiError> {
    let lawyer = state
        .store
        .lawyer(&id)
        .await?
        .ok_or_else(|| ApiError::not_found("Lawyer not found"))?;

    Ok(Json(lawyer))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chatbot::ChatResponder;
    use crate::store::MemStore;

    fn test_state() -> Arc<AppState> {
        AppState::new(
            Arc::new(MemStore::with_sample_data()),
            Arc::new(ChatResponder::new(None)),
            None,
        )
    }

    #[tokio::test]
    async fn test_list_lawyers() {
        let Json(lawyers) = list_lawyers(State(test_state())).await.unwrap();
        assert_eq!(lawyers.len(), 12);
    }

    #[tokio::test]
    async fn test_get_lawyer() {
        let state = test_state();
        let Json(lawyer) = get_lawyer(State(state), Path("4".to_string()))
            .await
            .unwrap();
        assert_eq!(lawyer.name, "Robert Chen");
    }

    #[tokio::test]
    async fn test_get_missing_lawyer_is_404() {
        let err = get_lawyer(State(test_state()), Path("999".to_string()))
            .await
            .unwrap_err();
        assert_eq!(err.status, axum::http::StatusCode::NOT_FOUND);
        assert_eq!(err.message, "Lawyer not found");
    }
}
