//! Pipeline definition parsing
//!
//! A pipeline definition lists processors in execution order. Each entry is
//! keyed by the processor type.
//!
//! # Example
//!
//! ```yaml
//! name: normalize_users
//! processors:
//!   - trim: [user.name]
//!   - lowercase: [user.email]
//!   - gsub:
//!       fields: [phone]
//!       pattern: "[^0-9]"
//!       replacement: ""
//!   - remove: [internal_id]
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{Error, Result};
use crate::pipeline::Pipeline;
use crate::processors::{Processor, RemoveProcessor, StringFieldProcessor};

/// Regex replace configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GsubConfig {
    /// Fields to rewrite
    pub fields: Vec<String>,
    /// Regex pattern
    pub pattern: String,
    /// Replacement text, may reference capture groups
    #[serde(default)]
    pub replacement: String,
}

/// Processor configuration from YAML
///
/// Each entry holds exactly one processor key; extra keys are rejected.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged, deny_unknown_fields)]
pub enum ProcessorConfig {
    /// Upper-case string fields
    Uppercase {
        /// Fields to convert
        uppercase: Vec<String>,
    },

    /// Lower-case string fields
    Lowercase {
        /// Fields to convert
        lowercase: Vec<String>,
    },

    /// Trim whitespace from string fields
    Trim {
        /// Fields to trim
        trim: Vec<String>,
    },

    /// Regex replace in string fields
    Gsub {
        /// Replace configuration
        gsub: GsubConfig,
    },

    /// Remove fields
    Remove {
        /// Fields to remove
        remove: Vec<String>,
    },
}

impl ProcessorConfig {
    /// Type name of the configured processor
    pub fn processor_type(&self) -> &'static str {
        match self {
            Self::Uppercase { .. } => "uppercase",
            Self::Lowercase { .. } => "lowercase",
            Self::Trim { .. } => "trim",
            Self::Gsub { .. } => "gsub",
            Self::Remove { .. } => RemoveProcessor::TYPE,
        }
    }

    /// Construct the processor this entry describes
    pub fn build(&self) -> Result<Box<dyn Processor>> {
        let processor: Box<dyn Processor> = match self {
            Self::Uppercase { uppercase } => {
                Box::new(StringFieldProcessor::uppercase(uppercase.iter().cloned())?)
            }
            Self::Lowercase { lowercase } => {
                Box::new(StringFieldProcessor::lowercase(lowercase.iter().cloned())?)
            }
            Self::Trim { trim } => Box::new(StringFieldProcessor::trim(trim.iter().cloned())?),
            Self::Gsub { gsub } => Box::new(StringFieldProcessor::gsub(
                gsub.fields.iter().cloned(),
                &gsub.pattern,
                gsub.replacement.clone(),
            )?),
            Self::Remove { remove } => Box::new(RemoveProcessor::new(remove.iter().cloned())?),
        };
        Ok(processor)
    }
}

/// A pipeline definition
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PipelineConfig {
    /// Pipeline name
    pub name: String,

    /// Optional description
    #[serde(default)]
    pub description: Option<String>,

    /// Processors in execution order
    #[serde(default)]
    pub processors: Vec<ProcessorConfig>,
}

impl PipelineConfig {
    /// Load a pipeline definition from a YAML file
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let config = PipelineConfig::load("./pipeline.yaml")?;
    /// let pipeline = config.build()?;
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(Error::ConfigNotFound {
                path: path.display().to_string(),
            });
        }

        let contents = std::fs::read_to_string(path)?;
        let config = Self::from_yaml(&contents)?;
        tracing::debug!(
            "Loaded pipeline '{}' with {} processors from {}",
            config.name,
            config.processors.len(),
            path.display()
        );
        Ok(config)
    }

    /// Parse a pipeline definition from YAML text
    pub fn from_yaml(contents: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(contents)?)
    }

    /// Build every processor, in order
    pub fn build(&self) -> Result<Pipeline> {
        let processors = self
            .processors
            .iter()
            .map(ProcessorConfig::build)
            .collect::<Result<Vec<_>>>()?;
        Ok(Pipeline::new(processors))
    }
}
