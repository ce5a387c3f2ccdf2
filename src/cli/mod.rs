//! # CLI Module
//!
//! Command-line surface of the `nestgen` binary.
//!
//! ## Usage
//!
//! ```bash
//! # Generate one resource into ./src/<model>/
//! nestgen User
//!
//! # Choose the output root
//! nestgen BlogPost --outDir=apps/api/src
//!
//! # Regenerate every model whenever the schema changes
//! nestgen --watch --schema prisma/schema.prisma
//! ```
//!
//! Options:
//! - `[MODEL]` - model to generate; required unless `--watch` is given
//! - `--outDir <PATH>` - output root (default: `src`)
//! - `--watch` - continuous mode; takes precedence over `MODEL`
//! - `--schema <PATH>` - schema file (default: `prisma/schema.prisma`, env `NESTGEN_SCHEMA`)
//! - `--config <PATH>` - `nestgen.toml` (default: next to the schema)

mod commands;


pub use commands::{run, run_cli, Cli, Mode, UsageError};
