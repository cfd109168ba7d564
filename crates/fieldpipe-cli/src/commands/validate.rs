//! Validate pipeline definition command

use anyhow::{Context, Result};
use fieldpipe_core::{PipelineConfig, Processor};

/// Run the validate command
pub fn run(pipeline_path: &str) -> Result<()> {
    tracing::info!("Validating pipeline: {}", pipeline_path);

    let config = PipelineConfig::load(pipeline_path).context("Failed to load pipeline")?;

    tracing::info!("✓ Pipeline: {}", config.name);
    if let Some(description) = &config.description {
        tracing::info!("✓ Description: {}", description);
    }

    let pipeline = config.build().context("Invalid processor configuration")?;
    for (index, processor) in pipeline.processors().iter().enumerate() {
        tracing::info!(
            "✓ [{}] {} on {}",
            index,
            processor.processor_type(),
            processor.fields().join(", ")
        );
    }

    tracing::info!("✓ Pipeline is valid ({} processors)", pipeline.len());
    Ok(())
}
