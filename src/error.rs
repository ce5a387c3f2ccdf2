//! Error taxonomy for the generation pipeline.
//!
//! Malformed field lines are not errors; the parser classifies them as
//! [`crate::schema::LineClass::Skip`]. Everything here aborts generation of
//! the model it occurred in. In watch mode the batch logs it and moves on.

use std::io;
use std::path::PathBuf;
use std::time::Duration;

/// Failure while generating one model.
#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    /// The requested model has no `model <Name> {` header in the schema source.
    #[error("model {model} not found in schema")]
    ModelNotFound {
        /// Model name that was requested
        model: String,
    },

    /// The schema file could not be read.
    #[error("failed to read schema {}: {source}", path.display())]
    SchemaRead {
        /// Schema path
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Directory creation or file write failed.
    #[error("failed to write artifact {}: {source}", path.display())]
    ArtifactWrite {
        /// Directory or file that could not be written
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A template failed to render.
    #[error("failed to render template {template}: {source}")]
    Render {
        /// Template name (e.g. `controller`)
        template: &'static str,
        #[source]
        source: askama::Error,
    },

    /// A filesystem operation did not complete within the configured bound.
    #[error("filesystem operation on {} timed out after {timeout:?}", path.display())]
    Timeout {
        /// Path the operation targeted
        path: PathBuf,
        /// Bound that expired
        timeout: Duration,
    },
}

impl GenerateError {
    /// True for [`GenerateError::Timeout`].
    #[must_use]
    pub const fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout { .. })
    }
}
