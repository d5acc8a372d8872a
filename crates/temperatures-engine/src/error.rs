//! Error types for the engine binary.
//!
//! [`EngineError`] is the top-level error type that wraps every failure
//! mode of startup, scene loading, and command execution.

/// Top-level error for the engine binary.
///
/// Each variant wraps a specific subsystem error, providing a single
/// error type that `main` can propagate with `?`.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// Configuration loading, validation, or rendering failed.
    #[error("config error: {source}")]
    Config {
        /// The underlying config error.
        #[from]
        source: temperatures_core::ConfigError,
    },

    /// The scene file could not be read.
    #[error("failed to read scene {path}: {source}")]
    SceneIo {
        /// Path of the scene file.
        path: String,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// The scene file is not a valid scene.
    #[error("failed to parse scene {path}: {source}")]
    SceneParse {
        /// Path of the scene file.
        path: String,
        /// The underlying YAML error.
        source: serde_yml::Error,
    },

    /// The debug report could not be rendered.
    #[error("failed to render report: {source}")]
    Report {
        /// The underlying JSON error.
        #[from]
        source: serde_json::Error,
    },

    /// The command line could not be understood.
    #[error("{message}")]
    Usage {
        /// What was wrong, with a usage hint.
        message: String,
    },
}
