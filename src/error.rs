use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed scene description: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid primitive #{index}: {reason}")]
    InvalidPrimitive { index: usize, reason: String },
    #[error("invalid camera: {0}")]
    InvalidCamera(String),
    #[error("window error: {0}")]
    Window(#[from] minifb::Error),
    #[error("failed to write image: {0}")]
    Image(#[from] image::ImageError),
    #[error("failed to build thread pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
    #[error("invalid logging configuration: {0}")]
    LogConfig(#[from] log4rs::config::runtime::ConfigErrors),
    #[error("logger already installed: {0}")]
    SetLogger(#[from] log::SetLoggerError),
}
