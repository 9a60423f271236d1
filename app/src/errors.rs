use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use render::RenderError;
use serde_json::json;
use terrain::TerrainError;
use thiserror::Error;
use tracing::error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Terrain(#[from] TerrainError),

    #[error(transparent)]
    Render(#[from] RenderError),

    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("internal server error")]
    Internal,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Terrain(TerrainError::InvalidDimension(_))
            | AppError::Terrain(TerrainError::DegenerateSize(_)) => {
                (StatusCode::BAD_REQUEST, self.to_string())
            }
            AppError::Terrain(TerrainError::RandomSourceExhaustion) => {
                error!("random source exhausted");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
            AppError::Render(RenderError::InvalidLevels(_))
            | AppError::Render(RenderError::EmptyImage { .. }) => {
                (StatusCode::BAD_REQUEST, self.to_string())
            }
            AppError::Render(e @ RenderError::Encode(_)) => {
                error!("PNG encoding failed: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
            AppError::InvalidParameter(_) => (StatusCode::BAD_REQUEST, self.to_string()),
            AppError::Internal => {
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": message,
        }));

        (status, body).into_response()
    }
}
