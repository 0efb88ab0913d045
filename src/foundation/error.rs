use std::path::PathBuf;
use std::process::ExitStatus;

/// Convenience result type used across the crate.
pub type RenderResult<T> = Result<T, RenderingError>;

/// Error taxonomy for diagram rendering.
///
/// Every failure surfaces from [`crate::render`] unchanged; nothing is retried.
#[derive(thiserror::Error, Debug)]
pub enum RenderingError {
    /// The rendering engine could not be started (missing from PATH or not executable).
    #[error("rendering engine '{engine}' is unavailable: {reason}")]
    EngineNotFound {
        /// Executable that was attempted.
        engine: String,
        /// OS-level reason reported while spawning.
        reason: String,
    },

    /// The rendering engine ran and exited unsuccessfully.
    #[error("{engine} exited with {status}: {stderr}")]
    EngineFailed {
        /// Executable that was run.
        engine: String,
        /// Exit status of the engine process.
        status: ExitStatus,
        /// Engine stderr, passed through unmodified apart from trailing whitespace.
        stderr: String,
    },

    /// Writing to the output location failed.
    #[error("failed to write '{}': {source}", .path.display())]
    Io {
        /// Path that could not be written.
        path: PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// The engine reported success but the produced image is unusable.
    #[error("invalid render output: {0}")]
    InvalidOutput(String),

    /// Wrapped lower-level error from dependencies.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl RenderingError {
    /// Build a [`RenderingError::EngineNotFound`] value.
    pub fn engine_not_found(engine: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::EngineNotFound {
            engine: engine.into(),
            reason: reason.into(),
        }
    }

    /// Build a [`RenderingError::Io`] value.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Build a [`RenderingError::InvalidOutput`] value.
    pub fn invalid_output(msg: impl Into<String>) -> Self {
        Self::InvalidOutput(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
