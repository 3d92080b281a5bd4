// crates/shared-kernel/src/error.rs
use std::path::PathBuf;

use thiserror::Error;

/// Root error type shared across the workspace.
#[derive(Debug, Error)]
pub enum RadarError {
    /// Adds human context while preserving original error as the source.
    #[error("{context}: {source}")]
    Context {
        context: String,
        #[source]
        source: Box<RadarError>,
    },

    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    #[error("Infrastructure error: {0}")]
    Infrastructure(#[from] InfrastructureError),

    #[error("Application error: {0}")]
    Application(#[from] ApplicationError),

    #[error("Extraction error: {0}")]
    Extraction(#[from] ExtractionError),
}

pub type Result<T> = std::result::Result<T, RadarError>;

/// Domain-layer specific errors.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Invalid configuration: {reason}")]
    InvalidConfiguration { reason: String },

    #[error("Duplicate project '{name}' in project definitions")]
    DuplicateProject { name: String },

    #[error("Project '{name}' has no keywords")]
    EmptyKeywords { name: String },
}

pub type DomainResult<T> = std::result::Result<T, DomainError>;

/// Application-layer errors.
#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error("Failed to analyze files: {reason}")]
    AnalysisFailed {
        reason: String,
        #[source]
        source: Option<Box<RadarError>>,
    },
}

pub type ApplicationResult<T> = std::result::Result<T, ApplicationError>;

/// Infrastructure-layer errors.
#[derive(Debug, Error)]
pub enum InfrastructureError {
    #[error("Failed to read file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {format} settings: {details}")]
    SettingsParse { format: String, details: String },

    #[error("Owner lookup unavailable on this platform")]
    OwnerLookupUnavailable,

    #[error("Owner lookup failed for '{path}': {reason}")]
    OwnerLookupFailed { path: PathBuf, reason: String },

    #[error("HTTP request to {endpoint} failed: {details}")]
    Http { endpoint: String, details: String },

    #[error("Unexpected response from {endpoint}: {details}")]
    UnexpectedResponse { endpoint: String, details: String },

    #[error("Output error: {message}")]
    OutputError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

pub type InfraResult<T> = std::result::Result<T, InfrastructureError>;

/// Per-document extraction failures.
///
/// These never leave the extractor boundary as errors; the registry renders them
/// into bracketed placeholder text.
#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("unsupported format: .{extension}")]
    Unsupported { extension: String },

    #[error("no extractable text")]
    NoExtractableText,

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("PDF error: {0}")]
    Pdf(String),

    #[error("archive error: {0}")]
    Archive(String),

    #[error("XML error: {0}")]
    Xml(String),

    #[error("spreadsheet error: {0}")]
    Spreadsheet(String),
}

pub type ExtractionResult<T> = std::result::Result<T, ExtractionError>;

impl From<std::io::Error> for InfrastructureError {
    fn from(err: std::io::Error) -> Self {
        Self::OutputError { message: err.to_string(), source: Some(Box::new(err)) }
    }
}

impl From<std::io::Error> for RadarError {
    fn from(err: std::io::Error) -> Self {
        InfrastructureError::from(err).into()
    }
}

impl From<serde_json::Error> for InfrastructureError {
    fn from(err: serde_json::Error) -> Self {
        Self::SettingsParse { format: "JSON".to_string(), details: err.to_string() }
    }
}

impl From<serde_json::Error> for RadarError {
    fn from(err: serde_json::Error) -> Self {
        InfrastructureError::from(err).into()
    }
}

#[cfg(feature = "yaml")]
impl From<serde_yaml::Error> for InfrastructureError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::SettingsParse { format: "YAML".to_string(), details: err.to_string() }
    }
}

#[cfg(feature = "yaml")]
impl From<serde_yaml::Error> for RadarError {
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
    E: Into<RadarError>,
{
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| RadarError::Context { context: context.into(), source: Box::new(e.into()) })
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| RadarError::Context { context: f(), source: Box::new(e.into()) })
    }
}
