//! Shared data model layer (enums and structs only).
//!
//! ## Purpose
//! - Keep questionnaire/catalog/report types in one place.
//! - Avoid cyclic imports and duplicated type definitions.
//! - Make JSON output schema changes explicit and reviewable.
//!
//! ## Files
//! - `answers.rs` — closed answer enums, `Answers`, error taxonomy.
//! - `models.rs` — catalog records, org-chart types, report/output structs.
//!
//! ## Rule of thumb
//! Domain types are data-only: no I/O, no decision logic. The decision table
//! lives in `services::engine`; catalog construction in `services::catalog`.

pub mod answers;
pub mod models;
