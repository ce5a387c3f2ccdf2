//! # Generator Module
//!
//! Turns one parsed model into a NestJS resource on disk.
//!
//! ## Architecture
//!
//! ```text
//! schema text → schema::parse_model → GenerationContext → askama templates → files
//! ```
//!
//! 1. **Parse** - [`crate::schema::parse_model`] yields scalar fields with
//!    mapped types and validators
//! 2. **Context** - [`GenerationContext`] derives names, DTO fields, imports,
//!    audit wiring and the protected flag
//! 3. **Render** - one askama template per [`Artifact`]
//! 4. **Write** - [`write_artifacts`] creates directories and overwrites files
//!
//! ## Generated Structure
//!
//! ```text
//! <outDir>/
//! └── blog-post/
//!     ├── blog-post.controller.ts
//!     ├── blog-post.service.ts
//!     ├── blog-post.module.ts
//!     ├── dto/
//!     │   ├── create-blog-post.dto.ts
//!     │   └── update-blog-post.dto.ts
//!     └── views/
//!         └── views.controller.ts
//! ```
//!
//! Re-running for the same model and output root rewrites the same six files
//! with identical content. Nothing is merged with hand-written code.
//!
//! ## Templates
//!
//! Templates live in `templates/` and are compiled in by askama:
//!
//! - `controller.ts.txt`, `service.ts.txt`, `module.ts.txt`
//! - `create-dto.ts.txt`, `update-dto.ts.txt`
//! - `views-controller.ts.txt`
//!
//! ## Usage
//!
//! ```rust,ignore
//! use nestgen::config::GeneratorConfig;
//! use nestgen::generator::Generator;
//! use std::path::Path;
//!
//! # async fn run() -> Result<(), nestgen::error::GenerateError> {
//! let generator = Generator::new(GeneratorConfig::for_schema("prisma/schema.prisma"));
//! let written = generator.generate_one("BlogPost", Path::new("src")).await?;
//! assert_eq!(written.len(), 6);
//! # Ok(())
//! # }
//! ```

mod context;
mod naming;
mod project;
mod templates;
mod writer;
#[cfg(test)]
mod tests;

pub use context::*;
pub use naming::*;
pub use project::*;
pub use templates::*;
pub use writer::*;
