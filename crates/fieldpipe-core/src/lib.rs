//! fieldpipe Core Library
//!
//! This crate provides the core functionality for fieldpipe:
//! - Dynamically-shaped documents addressed by dotted field paths
//! - Processors that transform or remove fields in place
//! - Pipeline execution with fail-fast, structured errors
//! - YAML pipeline definitions
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │  Pipeline   │────▶│  Processor  │────▶│  Document   │
//! │  executor   │     │   execute   │     │ path access │
//! └─────────────┘     └─────────────┘     └─────────────┘
//! ```
//!
//! # Example
//!
//! ```rust
//! use fieldpipe_core::processors::{Processor, RemoveProcessor, StringFieldProcessor};
//! use fieldpipe_core::{Document, pipeline};
//! use serde_json::json;
//!
//! let doc = Document::try_from(json!({"name": "ADA", "tmp": 1})).unwrap();
//! let processors: Vec<Box<dyn Processor>> = vec![
//!     Box::new(StringFieldProcessor::lowercase(["name"]).unwrap()),
//!     Box::new(RemoveProcessor::new(["tmp"]).unwrap()),
//! ];
//! let doc = pipeline::run(doc, &processors).unwrap();
//! assert_eq!(doc.to_json(), json!({"name": "ada"}));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod document;
pub mod error;
mod path;
pub mod pipeline;
pub mod processors;
pub mod value;

pub use config::{PipelineConfig, ProcessorConfig};
pub use document::Document;
pub use error::{Error, Result};
pub use pipeline::{Pipeline, run};
pub use processors::{Processor, RemoveProcessor, StringFieldProcessor, get_required_string};
pub use value::{Map, Value};
