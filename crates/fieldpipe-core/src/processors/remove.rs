//! Remove processor

use super::{Processor, field_list};
use crate::document::Document;
use crate::error::{Error, Result};

/// Deletes each configured field from the document
#[derive(Debug, Clone)]
pub struct RemoveProcessor {
    fields: Vec<String>,
}

impl RemoveProcessor {
    /// Processor type name
    pub const TYPE: &'static str = "remove";

    /// Build a processor removing `fields`, in order
    pub fn new<I, S>(fields: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Ok(Self {
            fields: field_list(Self::TYPE, fields)?,
        })
    }
}

impl Processor for RemoveProcessor {
    fn processor_type(&self) -> &str {
        Self::TYPE
    }

    fn fields(&self) -> &[String] {
        &self.fields
    }

    fn execute(&self, document: &mut Document) -> Result<()> {
        for field in &self.fields {
            let removed = document.remove(field).map_err(|_| Error::FieldNotFound {
                field: field.clone(),
            })?;
            tracing::trace!(field = %field, kind = removed.type_name(), "removed field");
        }
        Ok(())
    }
}
