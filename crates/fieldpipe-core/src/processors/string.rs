//! String field processors
//!
//! Every variant reads each configured field as a string, passes it through a
//! pure transform and writes the result back to the same path. Variants only
//! differ in the transform they carry.

use regex::Regex;
use std::fmt;
use std::sync::Arc;

use super::{Processor, field_list, get_required_string};
use crate::document::Document;
use crate::error::{Error, Result};

type Transform = dyn Fn(&str) -> String + Send + Sync;

/// Applies a string transform to each configured field
#[derive(Clone)]
pub struct StringFieldProcessor {
    processor_type: String,
    fields: Vec<String>,
    transform: Arc<Transform>,
}

impl StringFieldProcessor {
    /// Build a processor from a type name, its fields and a transform
    pub fn new<I, S, F>(processor_type: impl Into<String>, fields: I, transform: F) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
        F: Fn(&str) -> String + Send + Sync + 'static,
    {
        let processor_type = processor_type.into();
        let fields = field_list(&processor_type, fields)?;
        Ok(Self {
            processor_type,
            fields,
            transform: Arc::new(transform),
        })
    }

    /// Convert fields to upper case
    pub fn uppercase<I, S>(fields: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new("uppercase", fields, str::to_uppercase)
    }

    /// Convert fields to lower case
    pub fn lowercase<I, S>(fields: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new("lowercase", fields, str::to_lowercase)
    }

    /// Strip leading and trailing whitespace
    pub fn trim<I, S>(fields: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new("trim", fields, |s: &str| s.trim().to_string())
    }

    /// Replace every match of `pattern` with `replacement`.
    ///
    /// `replacement` may refer to capture groups as `$1` or `$name`.
    pub fn gsub<I, S>(fields: I, pattern: &str, replacement: impl Into<String>) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let regex = Regex::new(pattern).map_err(|e| Error::InvalidProcessor {
            processor_type: "gsub".to_string(),
            message: format!("invalid pattern '{}': {}", pattern, e),
        })?;
        let replacement = replacement.into();
        Self::new("gsub", fields, move |s: &str| {
            regex.replace_all(s, replacement.as_str()).into_owned()
        })
    }
}

impl Processor for StringFieldProcessor {
    fn processor_type(&self) -> &str {
        &self.processor_type
    }

    fn fields(&self) -> &[String] {
        &self.fields
    }

    fn execute(&self, document: &mut Document) -> Result<()> {
        for field in &self.fields {
            let value = get_required_string(document, field)?;
            tracing::trace!(processor = %self.processor_type, field = %field, "transforming field");
            document.set(field, (self.transform)(&value))?;
        }
        Ok(())
    }
}

impl fmt::Debug for StringFieldProcessor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StringFieldProcessor")
            .field("processor_type", &self.processor_type)
            .field("fields", &self.fields)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Value;
    use rstest::rstest;
    use serde_json::json;

    fn doc(json: serde_json::Value) -> Document {
        Document::try_from(json).unwrap()
    }

    fn build(kind: &str, fields: &[&str]) -> StringFieldProcessor {
        let fields = fields.iter().copied();
        match kind {
            "uppercase" => StringFieldProcessor::uppercase(fields),
            "lowercase" => StringFieldProcessor::lowercase(fields),
            "trim" => StringFieldProcessor::trim(fields),
            other => panic!("unknown processor {}", other),
        }
        .unwrap()
    }

    #[rstest]
    #[case("uppercase", "Hello wOrld", "HELLO WORLD")]
    #[case("lowercase", "Hello wOrld", "hello world")]
    #[case("trim", "  padded \t\n", "padded")]
    #[case("uppercase", "straße", "STRASSE")]
    #[case("lowercase", "ÀÉÎ", "àéî")]
    fn test_transform_variants(
        #[case] kind: &str,
        #[case] input: &str,
        #[case] expected: &str,
    ) {
        let processor = build(kind, &["a", "nested.b"]);
        let mut d = doc(json!({"a": input, "nested": {"b": input}, "other": input}));
        processor.execute(&mut d).unwrap();
        assert_eq!(d.get("a").unwrap().as_str(), Some(expected));
        assert_eq!(d.get("nested.b").unwrap().as_str(), Some(expected));
        assert_eq!(d.get("other").unwrap().as_str(), Some(input));
    }

    #[test]
    fn test_lowercase_scenario() {
        let processor = StringFieldProcessor::lowercase(["field"]).unwrap();
        let mut d = doc(json!({"field": "VALUE"}));
        processor.execute(&mut d).unwrap();
        assert_eq!(d.get("field").unwrap(), &Value::from("value"));
    }

    #[rstest]
    #[case("uppercase")]
    #[case("lowercase")]
    #[case("trim")]
    fn test_field_not_found(#[case] kind: &str) {
        let processor = build(kind, &["missing"]);
        let err = processor.execute(&mut doc(json!({}))).unwrap_err();
        assert!(matches!(err, Error::FieldNotFound { .. }));
        assert_eq!(err.to_string(), "missing not present as part of path [missing]");
    }

    #[rstest]
    #[case("uppercase")]
    #[case("lowercase")]
    #[case("trim")]
    fn test_null_value(#[case] kind: &str) {
        let processor = build(kind, &["field"]);
        let err = processor
            .execute(&mut doc(json!({"field": null})))
            .unwrap_err();
        assert_eq!(err.to_string(), "field [field] is null, cannot process it.");
    }

    #[rstest]
    #[case("uppercase")]
    #[case("lowercase")]
    #[case("trim")]
    fn test_non_string_value(#[case] kind: &str) {
        let processor = build(kind, &["field"]);
        let err = processor.execute(&mut doc(json!({"field": 5}))).unwrap_err();
        assert_eq!(
            err.to_string(),
            "field [field] of type [Int] cannot be cast to [String]"
        );
    }

    #[test]
    fn test_fail_fast_without_rollback() {
        let processor = StringFieldProcessor::uppercase(["f1", "f2", "f3"]).unwrap();
        let mut d = doc(json!({"f1": "one", "f3": "three"}));
        let err = processor.execute(&mut d).unwrap_err();

        assert!(matches!(err, Error::FieldNotFound { ref field } if field == "f2"));
        assert_eq!(d.get("f1").unwrap().as_str(), Some("ONE"));
        assert_eq!(d.get("f3").unwrap().as_str(), Some("three"));
    }

    #[test]
    fn test_duplicate_fields_processed_independently() {
        let processor =
            StringFieldProcessor::new("suffix", ["k", "k"], |s: &str| format!("{}!", s)).unwrap();
        let mut d = doc(json!({"k": "hi"}));
        processor.execute(&mut d).unwrap();
        assert_eq!(d.get("k").unwrap().as_str(), Some("hi!!"));
    }

    #[test]
    fn test_gsub_replaces_all_matches() {
        let processor = StringFieldProcessor::gsub(["phone"], "[^0-9]", "").unwrap();
        let mut d = doc(json!({"phone": "+1 (555) 010-9999"}));
        processor.execute(&mut d).unwrap();
        assert_eq!(d.get("phone").unwrap().as_str(), Some("15550109999"));
    }

    #[test]
    fn test_gsub_capture_groups() {
        let processor =
            StringFieldProcessor::gsub(["date"], r"(\d{4})-(\d{2})-(\d{2})", "$3/$2/$1").unwrap();
        let mut d = doc(json!({"date": "2024-01-31"}));
        processor.execute(&mut d).unwrap();
        assert_eq!(d.get("date").unwrap().as_str(), Some("31/01/2024"));
    }

    #[test]
    fn test_gsub_invalid_pattern() {
        let err = StringFieldProcessor::gsub(["f"], "(unclosed", "").unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidProcessor { ref processor_type, .. } if processor_type == "gsub"
        ));
    }

    #[test]
    fn test_empty_fields_rejected() {
        assert!(StringFieldProcessor::trim(Vec::<String>::new()).is_err());
    }

    #[test]
    fn test_processor_reusable_across_documents() {
        let processor = StringFieldProcessor::trim(["v"]).unwrap();
        for input in [" a ", "b  ", "  c"] {
            let mut d = doc(json!({ "v": input }));
            processor.execute(&mut d).unwrap();
            assert_eq!(d.get("v").unwrap().as_str(), Some(input.trim()));
        }
        assert_eq!(processor.processor_type(), "trim");
        assert_eq!(processor.fields(), ["v".to_string()]);
    }

    #[test]
    fn test_shared_across_threads() {
        let processor = Arc::new(StringFieldProcessor::uppercase(["v"]).unwrap());
        let handles: Vec<_> = (0..4)
            .map(|i| {
                let processor = Arc::clone(&processor);
                std::thread::spawn(move || {
                    let mut d = doc(json!({ "v": format!("item{}", i) }));
                    processor.execute(&mut d).unwrap();
                    d.get("v").unwrap().as_str().unwrap().to_string()
                })
            })
            .collect();
        for (i, handle) in handles.into_iter().enumerate() {
            assert_eq!(handle.join().unwrap(), format!("ITEM{}", i));
        }
    }
}
