//! Configuration validation and scene-IO errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("n_samples must be positive, got {0}")]
    InvalidSampleCount(u32),

    #[error("russian_roulette_q must lie in (0, 1), got {0}")]
    InvalidRussianRoulette(f32),

    #[error("region is degenerate: min {min:?} must be strictly less than max {max:?}")]
    InvalidRegion { min: (f32, f32), max: (f32, f32) },

    #[error("film dimensions must be positive, got {width}x{height}")]
    InvalidFilmSize { width: i64, height: i64 },

    #[error("n_tiles must be at least 1, got {0}")]
    InvalidTileCount(i64),

    #[error("failed to read scene file: {0}")]
    SceneIo(#[from] std::io::Error),

    #[error("failed to parse scene JSON: {0}")]
    SceneParse(#[from] serde_json::Error),

    #[error("unknown shape type: {0}")]
    UnknownShape(String),

    #[error("unknown material type: {0}")]
    UnknownMaterial(String),

    #[error("failed to encode image: {0}")]
    ImageEncode(String),
}
