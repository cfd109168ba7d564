//! Processors
//!
//! A processor is an immutable, configured unit of transformation applied in
//! place to one or more fields of a [`Document`]. Processors hold no
//! per-call state, so one instance can serve any number of documents,
//! including from several threads at once.
//!
//! # Built-in Processors
//!
//! - `uppercase` / `lowercase` / `trim` / `gsub` - string transforms, see
//!   [`StringFieldProcessor`]
//! - `remove` - delete fields, see [`RemoveProcessor`]

use crate::document::Document;
use crate::error::{Error, Result};
use crate::value::Value;

pub mod remove;
pub mod string;

pub use remove::RemoveProcessor;
pub use string::StringFieldProcessor;

/// A unit of document transformation
pub trait Processor: std::fmt::Debug + Send + Sync {
    /// Type name, e.g. `lowercase` or `remove`
    fn processor_type(&self) -> &str;

    /// Configured field paths, in execution order
    fn fields(&self) -> &[String];

    /// Apply the processor to `document`.
    ///
    /// Stops at the first failing field. Fields handled before the failure
    /// keep their new state.
    fn execute(&self, document: &mut Document) -> Result<()>;
}

/// Read a field that must hold a string.
///
/// Checks run in a fixed order: a missing field is reported before a null
/// one, and a null one before a value of the wrong type.
pub fn get_required_string(document: &Document, field: &str) -> Result<String> {
    match document.get(field) {
        Err(_) => Err(Error::FieldNotFound {
            field: field.to_string(),
        }),
        Ok(Value::Null) => Err(Error::NullField {
            field: field.to_string(),
        }),
        Ok(Value::String(s)) => Ok(s.clone()),
        Ok(other) => Err(Error::TypeMismatch {
            field: field.to_string(),
            expected: "String",
            actual: other.type_name(),
        }),
    }
}

/// Collect a processor's field list, rejecting an empty one.
pub(crate) fn field_list<I, S>(processor_type: &str, fields: I) -> Result<Vec<String>>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let fields: Vec<String> = fields.into_iter().map(Into::into).collect();
    if fields.is_empty() {
        return Err(Error::InvalidProcessor {
            processor_type: processor_type.to_string(),
            message: "at least one field is required".to_string(),
        });
    }
    Ok(fields)
}
