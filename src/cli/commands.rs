use crate::config::{GeneratorConfig, DEFAULT_SCHEMA_PATH};
use crate::generator::Generator;
use crate::hot_reload::watch;
use clap::Parser;
use std::path::PathBuf;
use tracing::{info, warn};

/// Command-line interface for nestgen
///
/// Generates a NestJS resource (controller, service, module, DTOs, views)
/// from a model in a Prisma schema.
#[derive(Debug, Parser)]
#[command(name = "nestgen")]
#[command(about = "Generate NestJS resources from a Prisma schema", long_about = None)]
pub struct Cli {
    /// Model to generate (e.g. `User`)
    #[arg(required_unless_present = "watch")]
    pub model: Option<String>,

    /// Output root for generated resources
    #[arg(long = "outDir", value_name = "PATH", default_value = "src")]
    pub out_dir: PathBuf,

    /// Regenerate every model whenever the schema changes
    #[arg(long, default_value_t = false)]
    pub watch: bool,

    /// Path to the Prisma schema file
    #[arg(long, env = "NESTGEN_SCHEMA", default_value = DEFAULT_SCHEMA_PATH)]
    pub schema: PathBuf,

    /// Path to nestgen.toml (default: alongside the schema)
    #[arg(long)]
    pub config: Option<PathBuf>,
}

/// What a parsed command line asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    /// One-shot generation of a single model
    Generate { model: String },
    /// Continuous regeneration of every model
    Watch,
}

/// Invalid combination of arguments.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UsageError {
    #[error("please provide a model name or use --watch")]
    MissingModel,
}

impl Cli {
    /// Resolve the run mode. `--watch` wins over a model name.
    ///
    /// # Errors
    ///
    /// [`UsageError::MissingModel`] when neither is given.
    pub fn mode(&self) -> Result<Mode, UsageError> {
        match (&self.model, self.watch) {
            (Some(model), true) => {
                warn!(model = %model, "--watch given; ignoring model name");
                Ok(Mode::Watch)
            }
            (None, true) => Ok(Mode::Watch),
            (Some(model), false) => Ok(Mode::Generate {
                model: model.clone(),
            }),
            (None, false) => Err(UsageError::MissingModel),
        }
    }
}

/// Parse the process arguments and execute them.
///
/// # Errors
///
/// Returns an error if arguments are unusable, the config cannot be loaded,
/// one-shot generation fails, or the watcher cannot start.
pub fn run_cli() -> anyhow::Result<()> {
    run(Cli::parse())
}

/// Execute an already parsed command line on a single-threaded runtime.
///
/// # Errors
///
/// See [`run_cli`].
pub fn run(cli: Cli) -> anyhow::Result<()> {
    let mode = cli.mode()?;
    let config = GeneratorConfig::load(&cli.schema, cli.config.as_deref())?;
    let generator = Generator::new(config);

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    runtime.block_on(execute(&generator, mode, &cli))
}

async fn execute(generator: &Generator, mode: Mode, cli: &Cli) -> anyhow::Result<()> {
    match mode {
        Mode::Generate { model } => {
            let written = generator.generate_one(&model, &cli.out_dir).await?;
            info!(model = %model, files = written.len(), "✅ Generated resource");
            Ok(())
        }
        Mode::Watch => watch(generator, &cli.schema, &cli.out_dir).await,
    }
}
