//! Engine errors
//!
//! The simulation passes themselves never fail: out-of-range coordinates
//! are absorbed by the grid's wall default. Errors only come from the
//! edges where outside data enters the engine (config JSON, scene images)
//! or leaves it (PNG snapshots).

#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("Invalid configuration: {field}: {reason}")]
    InvalidConfig { field: &'static str, reason: String },

    #[error("Config parse failed: {0}")]
    ConfigParse(#[from] serde_json::Error),

    #[error("Scene decode failed: {0}")]
    SceneDecode(#[from] image::ImageError),

    #[error("Scene pixel buffer has {len} bytes, expected {width}x{height} pixels")]
    SceneSize { width: u32, height: u32, len: usize },

    #[error("Snapshot encoding failed: {0}")]
    Encode(String),
}

impl EngineError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        EngineError::InvalidConfig {
            field,
            reason: reason.into(),
        }
    }
}
