//! Request handlers for the topography service.

use axum::{
    extract::Query,
    http::{StatusCode, header},
    response::IntoResponse,
};
use rand::{Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::Deserialize;

use render::{ContourRenderer, MAX_CONTOUR_LEVELS, MIN_CONTOUR_LEVELS, encode_png};
use terrain::{ColorRamp, DiamondSquare, GenerationParameters, TerrainError, random_base_color};

use crate::errors::AppError;

fn default_width() -> u32 {
    1920
}

fn default_height() -> u32 {
    1080
}

/// Query parameters for the topography endpoint.
#[derive(Debug, Deserialize)]
pub struct RenderQuery {
    #[serde(default = "default_width")]
    pub width: u32,
    #[serde(default = "default_height")]
    pub height: u32,
    /// Pins the random source, making the response reproducible.
    #[serde(default)]
    pub seed: Option<u64>,
    /// Overrides the per-request roughness draw.
    #[serde(default)]
    pub roughness: Option<f64>,
    /// Overrides the per-request contour level draw.
    #[serde(default)]
    pub levels: Option<u32>,
}

/// Health check endpoint.
pub async fn health_check() -> StatusCode {
    StatusCode::OK
}

/// Generate a fresh topography and return it as a PNG.
pub async fn render_topography(
    Query(query): Query<RenderQuery>,
) -> Result<impl IntoResponse, AppError> {
    let mut rng = request_rng(query.seed)?;

    let roughness = match query.roughness {
        Some(r) if r > 0.0 => r,
        Some(r) => {
            return Err(AppError::InvalidParameter(format!(
                "roughness must be positive, got {r}"
            )));
        }
        None => rng.gen_range(0.5..1.5),
    };

    let levels = match query.levels {
        Some(l) if (MIN_CONTOUR_LEVELS..=MAX_CONTOUR_LEVELS).contains(&l) => l,
        Some(l) => {
            return Err(AppError::InvalidParameter(format!(
                "levels must lie in [{MIN_CONTOUR_LEVELS}, {MAX_CONTOUR_LEVELS}], got {l}"
            )));
        }
        None => rng.gen_range(MIN_CONTOUR_LEVELS..=MAX_CONTOUR_LEVELS),
    };

    let params = GenerationParameters::from_dimensions(query.width, query.height, roughness)?;
    let (width, height) = (query.width, query.height);

    tracing::info!(
        width,
        height,
        size_exponent = params.size_exponent,
        roughness,
        levels,
        "generating topography"
    );

    // Generation and rasterization are CPU-bound; keep them off the async
    // workers.
    let png = tokio::task::spawn_blocking(move || -> Result<Vec<u8>, AppError> {
        let grid = DiamondSquare::new(params.size_exponent, params.roughness)?.generate(&mut rng);
        let ramp = ColorRamp::build(random_base_color(&mut rng));
        let image = ContourRenderer::new(levels)?.render(&grid, &ramp, width, height)?;
        Ok(encode_png(&image)?)
    })
    .await
    .map_err(|_| AppError::Internal)??;

    Ok(([(header::CONTENT_TYPE, "image/png")], png))
}

// Independent random source per request; a caller-provided seed pins it.
fn request_rng(seed: Option<u64>) -> Result<ChaCha8Rng, AppError> {
    match seed {
        Some(seed) => Ok(ChaCha8Rng::seed_from_u64(seed)),
        None => {
            let mut seed_bytes = [0u8; 32];
            rand::rngs::OsRng
                .try_fill_bytes(&mut seed_bytes)
                .map_err(|_| AppError::Terrain(TerrainError::RandomSourceExhaustion))?;
            Ok(ChaCha8Rng::from_seed(seed_bytes))
        }
    }
}
