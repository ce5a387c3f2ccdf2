//! # nestgen
//!
//! **nestgen** generates NestJS resources from the models of a
//! [Prisma](https://www.prisma.io/docs/orm/prisma-schema) schema: a REST
//! controller, a Prisma-backed service, a Nest module, create/update DTOs with
//! class-validator decorators, and a server-rendered views controller.
//!
//! ## Architecture
//!
//! - **[`schema`]** - model block scan, line classifier, parser and type/validator mapping
//! - **[`generator`]** - rendering context, askama templates, artifact writer, [`generator::Generator`]
//! - **[`hot_reload`]** - watch mode with a single-slot coalescing change queue
//! - **[`config`]** - defaults, `nestgen.toml`, environment overrides
//! - **[`logging`]** - `tracing` subscriber setup
//! - **[`error`]** - [`error::GenerateError`]
//! - **[`cli`]** - the `nestgen` command line
//!
//! ### Generation Flow
//!
//! ```mermaid
//! sequenceDiagram
//!     participant User
//!     participant CLI as CLI<br/>(nestgen)
//!     participant Gen as generator::Generator
//!     participant Schema as schema::parse_model
//!     participant Ctx as GenerationContext
//!     participant Tpl as askama templates
//!     participant FS as File System
//!
//!     User->>CLI: nestgen User --outDir=src
//!     CLI->>Gen: generate_one("User", "src")
//!     Gen->>FS: read prisma/schema.prisma
//!     Gen->>Schema: parse_model("User", source)
//!     Schema->>Schema: classify lines, drop relations,<br/>map types and validators
//!     Schema-->>Gen: ModelParseResult
//!     Gen->>Ctx: names, DTO fields, imports,<br/>audit wiring, protected flag
//!     loop controller, service, module, DTOs, views
//!         Gen->>Tpl: render(ctx)
//!         Gen->>FS: write src/user/...
//!     end
//! ```
//!
//! ### Watch Flow
//!
//! `nestgen --watch` subscribes to the schema file. Every change re-reads it,
//! scans all model names in source order and regenerates each one. A failure
//! for one model is logged and the batch continues. Changes that arrive while
//! a batch runs trigger exactly one follow-up batch.
//!
//! ## Quick Start
//!
//! ```bash
//! nestgen User
//! nestgen --watch --outDir=apps/api/src
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod generator;
pub mod hot_reload;
pub mod logging;
pub mod schema;
