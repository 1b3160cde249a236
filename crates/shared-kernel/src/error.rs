// crates/shared-kernel/src/error.rs
use std::path::PathBuf;

use thiserror::Error;

/// Root error type shared across the workspace.
#[derive(Debug, Error)]
pub enum MangaVolumesError {
    /// Adds human context while preserving original error as the source.
    #[error("{context}: {source}")]
    Context {
        context: String,
        #[source]
        source: Box<MangaVolumesError>,
    },

    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    #[error("Infrastructure error: {0}")]
    Infrastructure(#[from] InfrastructureError),

    #[error("Application error: {0}")]
    Application(#[from] ApplicationError),

    #[error("Presentation error: {0}")]
    Presentation(#[from] PresentationError),
}

pub type Result<T> = std::result::Result<T, MangaVolumesError>;

/// Domain-layer specific errors.
///
/// The range codec itself never fails; these cover the strict entry points
/// (explicit volume numbers given on the command line, stored data).
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Invalid volume number '{value}': {reason}")]
    InvalidVolumeNumber { value: String, reason: String },

    #[error("Invalid manga title: {reason}")]
    InvalidTitle { reason: String },
}

/// Application-layer errors.
#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error("Manga {id} not found in library")]
    MangaNotFound { id: u64 },

    #[error("Failed to save volumes for manga {id}: {reason}")]
    SaveFailed {
        id: u64,
        reason: String,
        #[source]
        source: Option<Box<MangaVolumesError>>,
    },
}

/// Infrastructure-layer errors.
#[derive(Debug, Error)]
pub enum InfrastructureError {
    #[error("Failed to read file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write file '{path}': {source}")]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {format} data: {details}")]
    SerializationError { format: String, details: String },

    #[error("No {kind} ids left: the library already uses {highest}")]
    IdsExhausted { kind: String, highest: u64 },

    #[error("Library lock poisoned: {details}")]
    LockPoisoned { details: String },

    #[error("Output error: {message}")]
    OutputError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

/// Presentation-layer errors.
#[derive(Debug, Error)]
pub enum PresentationError {
    #[error("Output format '{format}' is not available in this build")]
    UnsupportedFormat { format: String },
}

impl From<std::io::Error> for InfrastructureError {
    fn from(err: std::io::Error) -> Self {
        Self::OutputError { message: err.to_string(), source: Some(Box::new(err)) }
    }
}

impl From<std::io::Error> for MangaVolumesError {
    fn from(err: std::io::Error) -> Self {
        InfrastructureError::from(err).into()
    }
}

impl From<serde_json::Error> for InfrastructureError {
    fn from(err: serde_json::Error) -> Self {
        Self::SerializationError {
            format: "JSON".to_string(),
            details: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for MangaVolumesError {
    fn from(err: serde_json::Error) -> Self {
        InfrastructureError::from(err).into()
    }
}

#[cfg(feature = "yaml")]
impl From<serde_yaml::Error> for InfrastructureError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::SerializationError {
            format: "YAML".to_string(),
            details: err.to_string(),
        }
    }
}

#[cfg(feature = "yaml")]
impl From<serde_yaml::Error> for MangaVolumesError {
    fn from(err: serde_yaml::Error) -> Self {
        InfrastructureError::from(err).into()
    }
}

/// Extension trait to add additional context to results.
pub trait ErrorContext<T> {
    fn context(self, context: impl Into<String>) -> Result<T>;
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for std::result::Result<T, E>
where
    E: Into<MangaVolumesError>,
{
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| MangaVolumesError::Context {
            context: context.into(),
            source: Box::new(e.into()),
        })
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| MangaVolumesError::Context {
            context: f(),
            source: Box::new(e.into()),
        })
    }
}
