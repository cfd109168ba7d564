//! Run a pipeline against a document

use anyhow::{Context, Result};
use fieldpipe_core::{Document, PipelineConfig};

/// Run the run command
pub fn run(
    pipeline_path: &str,
    document_path: &str,
    output: Option<&str>,
    pretty: bool,
) -> Result<()> {
    tracing::info!("Loading pipeline from {}", pipeline_path);

    let config = PipelineConfig::load(pipeline_path).context("Failed to load pipeline")?;
    let pipeline = config.build().context("Failed to build pipeline")?;

    tracing::info!("Pipeline: {} ({} processors)", config.name, pipeline.len());

    let contents = std::fs::read_to_string(document_path)
        .with_context(|| format!("Failed to read document {}", document_path))?;
    let json: serde_json::Value =
        serde_json::from_str(&contents).context("Failed to parse document as JSON")?;
    let document = Document::try_from(json)?;

    let result = pipeline
        .execute(document)
        .with_context(|| format!("Pipeline '{}' failed", config.name))?;

    let rendered = if pretty {
        serde_json::to_string_pretty(&result.to_json())?
    } else {
        serde_json::to_string(&result.to_json())?
    };

    match output {
        Some(path) => {
            std::fs::write(path, format!("{}\n", rendered))
                .with_context(|| format!("Failed to write {}", path))?;
            tracing::info!("Wrote result to {}", path);
        }
        None => println!("{}", rendered),
    }

    Ok(())
}
