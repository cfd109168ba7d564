//! Error types for fieldpipe-core

use thiserror::Error;

/// Result type alias for fieldpipe-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in fieldpipe-core
#[derive(Error, Debug)]
pub enum Error {
    /// A path could not be resolved against a document
    #[error("path [{path}] could not be resolved")]
    PathNotFound {
        /// Path that was looked up
        path: String,
    },

    /// A processor's field is absent from the document
    #[error("{field} not present as part of path [{field}]")]
    FieldNotFound {
        /// Configured field path
        field: String,
    },

    /// A processor's field resolved to an explicit null
    #[error("field [{field}] is null, cannot process it.")]
    NullField {
        /// Configured field path
        field: String,
    },

    /// A processor's field holds a value of the wrong type
    #[error("field [{field}] of type [{actual}] cannot be cast to [{expected}]")]
    TypeMismatch {
        /// Configured field path
        field: String,
        /// Type the processor requires
        expected: &'static str,
        /// Type found in the document
        actual: &'static str,
    },

    /// A pipeline step failed
    #[error("processor [{index}] ({processor_type}) failed: {source}")]
    ProcessorFailure {
        /// Position of the processor in the pipeline
        index: usize,
        /// Type name of the processor
        processor_type: String,
        /// Underlying failure
        #[source]
        source: Box<Error>,
    },

    /// A processor could not be constructed
    #[error("invalid processor '{processor_type}': {message}")]
    InvalidProcessor {
        /// Type name of the processor
        processor_type: String,
        /// Description of what's invalid
        message: String,
    },

    /// Input could not be turned into a document
    #[error("invalid document: {message}")]
    InvalidDocument {
        /// Description of what's invalid
        message: String,
    },

    /// Pipeline definition file could not be found
    #[error("pipeline definition not found: {path}")]
    ConfigNotFound {
        /// Path that was searched
        path: String,
    },

    /// Failed to parse YAML pipeline definition
    #[error("failed to parse pipeline definition: {0}")]
    ConfigParse(#[from] serde_yaml::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// The error behind any [`Error::ProcessorFailure`] wrapping
    pub fn root_cause(&self) -> &Error {
        match self {
            Self::ProcessorFailure { source, .. } => source.root_cause(),
            other => other,
        }
    }
}
