//! Error types for scene setup.
//!
//! Everything in here is fatal: once a scene is built, evaluation,
//! tessellation and drawing cannot fail.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// A patch does not have exactly 16 usable control points, or a patch set
    /// has no patches at all.
    #[error("invalid patch data in patch {patch}: {reason}")]
    InvalidPatchData { patch: usize, reason: String },

    /// Malformed Bézier patch file.
    #[error("parse error at line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid scene configuration: {0}")]
    Config(#[from] serde_json::Error),

    #[error("image error: {0}")]
    Image(#[from] image::ImageError),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub(crate) fn invalid_patch(patch: usize, reason: impl Into<String>) -> Self {
        Error::InvalidPatchData {
            patch,
            reason: reason.into(),
        }
    }

    pub(crate) fn parse(line: usize, message: impl Into<String>) -> Self {
        Error::Parse {
            line,
            message: message.into(),
        }
    }
}
