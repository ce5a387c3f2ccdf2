use std::future::Future;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use tracing::info;

use super::context::GenerationContext;
use super::templates::Artifact;
use crate::error::GenerateError;

/// Run a filesystem future with an upper bound.
///
/// An I/O error is mapped through `on_err`; expiry becomes
/// [`GenerateError::Timeout`].
pub async fn bounded<T, F>(
    path: &Path,
    timeout: Duration,
    fut: F,
    on_err: fn(PathBuf, io::Error) -> GenerateError,
) -> Result<T, GenerateError>
where
    F: Future<Output = io::Result<T>>,
{
    match tokio::time::timeout(timeout, fut).await {
        Ok(Ok(value)) => Ok(value),
        Ok(Err(e)) => Err(on_err(path.to_path_buf(), e)),
        Err(_) => Err(GenerateError::Timeout {
            path: path.to_path_buf(),
            timeout,
        }),
    }
}

fn write_error(path: PathBuf, source: io::Error) -> GenerateError {
    GenerateError::ArtifactWrite { path, source }
}

/// Render every artifact and write it under `<output_dir>/<folder>/`.
///
/// The model folder and its `dto/` and `views/` subdirectories are created
/// before the first write. Existing files are overwritten. The first failure
/// stops the run; files already written stay in place.
///
/// # Errors
///
/// Returns the first render, write or timeout failure.
pub async fn write_artifacts(
    ctx: &GenerationContext,
    output_dir: &Path,
    timeout: Duration,
) -> Result<Vec<PathBuf>, GenerateError> {
    let target_dir = output_dir.join(&ctx.folder_name);
    for dir in [target_dir.join("dto"), target_dir.join("views")] {
        bounded(&dir, timeout, tokio::fs::create_dir_all(&dir), write_error).await?;
    }

    let mut written = Vec::with_capacity(Artifact::ALL.len());
    for artifact in Artifact::ALL {
        let rendered = artifact.render(ctx)?;
        let out_path = target_dir.join(artifact.relative_path(&ctx.folder_name));
        bounded(
            &out_path,
            timeout,
            tokio::fs::write(&out_path, rendered),
            write_error,
        )
        .await?;
        info!("✔ Generated: {}", out_path.display());
        written.push(out_path);
    }
    Ok(written)
}
