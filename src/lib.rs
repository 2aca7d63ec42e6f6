//! `PayTrack` - a payment tracking and reporting application
//!
//! This crate records user payments against spending categories and turns the
//! recorded data into reports: a per-category spending series for one user
//! (chart data), a spreadsheet workbook with per-category subtotals and a
//! cross-user grand total, and a document report with spending callouts. The
//! report builders are pure functions over collection snapshots; persistence
//! and the file-writing sinks live in their own modules.

// Deny the most critical lints that could lead to bugs or security issues
#![deny(
    unsafe_code,
    unsafe_op_in_unsafe_fn,
    unreachable_code,
    unreachable_patterns,
    unused_must_use,
    rustdoc::broken_intra_doc_links,
    rustdoc::private_intra_doc_links,
)]
// Warn on things that should be fixed but aren't necessarily bugs
#![warn(
    missing_docs,
    clippy::all,
    clippy::pedantic,
    clippy::dbg_macro,
    clippy::exit,
    clippy::expect_used,
    clippy::float_cmp,
    clippy::panic,
    clippy::todo,
    clippy::unimplemented,
    clippy::unwrap_used,
    clippy::semicolon_if_nothing_returned,
    future_incompatible,
    rust_2018_idioms,
)]
#![allow(
    clippy::module_name_repetitions,  // Common pattern in Rust
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
)]

/// Application and database configuration
pub mod config;
/// Core business logic - data operations and pure aggregation
pub mod core;
/// SeaORM entity definitions for database tables
pub mod entities;
/// Unified error types and result handling
pub mod errors;
/// Format writers serializing the report models to files
pub mod export;
/// Pure report builders - chart series, workbook, document
pub mod report;

#[cfg(test)]
pub mod test_utils;
