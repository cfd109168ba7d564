//! Pipeline execution
//!
//! Runs an ordered list of processors against one document. The first failing
//! processor stops the run; processors that already ran keep their effects.
//! Callers that need all-or-nothing semantics run the pipeline on a clone and
//! keep the original on failure.

use crate::document::Document;
use crate::error::{Error, Result};
use crate::processors::Processor;

/// Apply `processors` to `document` in order.
///
/// On failure the error is an [`Error::ProcessorFailure`] naming the index and
/// type of the processor that failed.
pub fn run(mut document: Document, processors: &[Box<dyn Processor>]) -> Result<Document> {
    for (index, processor) in processors.iter().enumerate() {
        tracing::debug!(
            index,
            processor = processor.processor_type(),
            fields = processor.fields().len(),
            "executing processor"
        );
        if let Err(source) = processor.execute(&mut document) {
            tracing::warn!(
                index,
                processor = processor.processor_type(),
                error = %source,
                "processor failed"
            );
            return Err(Error::ProcessorFailure {
                index,
                processor_type: processor.processor_type().to_string(),
                source: Box::new(source),
            });
        }
    }
    Ok(document)
}

/// An ordered sequence of processors
#[derive(Debug, Default)]
pub struct Pipeline {
    processors: Vec<Box<dyn Processor>>,
}

impl Pipeline {
    /// Create a pipeline from already-built processors
    pub fn new(processors: Vec<Box<dyn Processor>>) -> Self {
        Self { processors }
    }

    /// Append a processor
    pub fn push(&mut self, processor: impl Processor + 'static) {
        self.processors.push(Box::new(processor));
    }

    /// Number of processors
    pub fn len(&self) -> usize {
        self.processors.len()
    }

    /// Whether the pipeline has no processors
    pub fn is_empty(&self) -> bool {
        self.processors.is_empty()
    }

    /// Processors in execution order
    pub fn processors(&self) -> &[Box<dyn Processor>] {
        &self.processors
    }

    /// Run the pipeline against `document`
    pub fn execute(&self, document: Document) -> Result<Document> {
        run(document, &self.processors)
    }
}
