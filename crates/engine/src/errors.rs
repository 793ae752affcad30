use std::ffi::NulError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors crossing the native core boundary.
///
/// Nonzero status codes from the core are opaque; they are surfaced verbatim
/// and never interpreted at this layer.
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("resource not found: {0}")]
    ResourceNotFound(PathBuf),

    #[error("model load failed with core status {0}")]
    ModelLoad(i32),

    #[error("core rejected threshold update with status {0}")]
    Configure(i32),

    #[error("inference failed with core status {0}")]
    Inference(i32),

    #[error("path contains an interior NUL byte: {0}")]
    InvalidPath(#[from] NulError),

    #[error("core returned a null info string")]
    NullInfo,
}
