use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use super::context::GenerationContext;
use super::writer::{bounded, write_artifacts};
use crate::config::GeneratorConfig;
use crate::error::GenerateError;
use crate::schema::parse_model;

/// Runs the parse → context → render → write pipeline.
///
/// Holds no per-run state; every call re-reads and re-parses the schema.
#[derive(Debug, Clone)]
pub struct Generator {
    config: GeneratorConfig,
}

impl Generator {
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Read a schema file within the configured I/O bound.
    ///
    /// # Errors
    ///
    /// [`GenerateError::SchemaRead`] or [`GenerateError::Timeout`].
    pub async fn read_schema(&self, path: &Path) -> Result<String, GenerateError> {
        fn read_error(path: PathBuf, source: io::Error) -> GenerateError {
            GenerateError::SchemaRead { path, source }
        }
        bounded(
            path,
            self.config.io_timeout,
            tokio::fs::read_to_string(path),
            read_error,
        )
        .await
    }

    /// One-shot generation of `model_name` from the configured schema file.
    ///
    /// Returns the written paths in template order.
    ///
    /// # Errors
    ///
    /// Any schema read, missing model, render, write or timeout failure.
    pub async fn generate_one(
        &self,
        model_name: &str,
        output_dir: &Path,
    ) -> Result<Vec<PathBuf>, GenerateError> {
        let source = self.read_schema(&self.config.schema_path).await?;
        self.generate_from_source(&source, model_name, output_dir)
            .await
    }

    /// Generate `model_name` from schema text already in memory.
    ///
    /// Nothing is written when the model is missing from `source`.
    ///
    /// # Errors
    ///
    /// [`GenerateError::ModelNotFound`], or the first render/write failure.
    pub async fn generate_from_source(
        &self,
        source: &str,
        model_name: &str,
        output_dir: &Path,
    ) -> Result<Vec<PathBuf>, GenerateError> {
        let parsed = parse_model(model_name, source)?;
        debug!(
            model = model_name,
            fields = parsed.fields.len(),
            relations = parsed.relations.len(),
            has_created_by = parsed.has_created_by,
            "parsed model"
        );
        let audit_target_id = parsed
            .audit_relation()
            .and_then(|relation| parse_model(&relation.target, source).ok())
            .and_then(|target| target.id_type());
        let ctx = GenerationContext::new(model_name, &parsed, audit_target_id, &self.config);
        if ctx.is_protected {
            info!(model = model_name, "mutation endpoints are guarded");
        }
        write_artifacts(&ctx, output_dir, self.config.io_timeout).await
    }
}
