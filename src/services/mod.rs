//! Service layer containing the decision logic and catalog data.
//!
//! ## Service map
//! - `engine.rs` — the recommendation decision table (pure, total).
//! - `catalog.rs` — static model records, org charts, survey benchmarks.
//! - `session.rs` — questionnaire state machine driving interactive mode.
//! - `output.rs` — shared `--json` envelope and text-mode output helpers.
//!
//! ## Conventions
//! - Prefer pure helpers where possible.
//! - Side effects should be explicit and localized.
//! - Keep command handlers thin; delegate to services.

pub mod catalog;
pub mod engine;
pub mod output;
pub mod session;
