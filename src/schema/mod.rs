//! # Schema Module
//!
//! Reads Prisma-style schema source and derives the scalar field model of one
//! entity.
//!
//! ## Supported Syntax
//!
//! ```text
//! model User {
//!   id        Int      @id @default(autoincrement())
//!   email     String   @unique
//!   age       Int?
//!   tags      String[]
//!   posts     Post[]            // relation, dropped from the scalar list
//!   @@map("users")              // block directive, skipped
//! }
//! ```
//!
//! Only `model` blocks are interpreted. Each field line is
//! `<name> <type>[?][[]] [...]`; everything after the type token is ignored.
//! Field declarations may also be separated by `;` on a single line.
//!
//! ## Pipeline
//!
//! 1. [`scan_models`] finds every `model <Name> {` block in source order. Both
//!    one-shot generation and watch mode use this single scan.
//! 2. [`classify_line`] turns one declaration into a [`LineClass`]. Blank,
//!    comment, directive and malformed lines are skipped, never errors.
//! 3. [`parse_model`] maps each scalar field through [`map_field_type`] and
//!    collects a [`ModelParseResult`].

mod mapping;
mod parse;
mod scan;
mod types;

pub use mapping::*;
pub use parse::*;
pub use scan::*;
pub use types::*;
