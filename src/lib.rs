//! `QuotePro` - Product catalog and price quotation manager
//!
//! This crate provides a complete single-user quotation workflow: a product
//! catalog with categories, a company profile, reusable quotation templates,
//! a pure computation engine for totals and discounts, an archive of
//! finalized quotations, and PDF/print document export. All state persists
//! through an injected key-value storage interface.

// Deny the most critical lints that could lead to bugs or security issues
#![deny(
    // Security and correctness
    unsafe_code,
    unsafe_op_in_unsafe_fn,

    // Code quality - things that are almost always bugs
    unreachable_code,
    unreachable_patterns,
    unused_must_use,

    // Documentation - broken links are bugs
    rustdoc::broken_intra_doc_links,
    rustdoc::private_intra_doc_links,
)]
// Warn on things that should be fixed but aren't necessarily bugs
#![warn(
    missing_docs,

    // Clippy categories for overall code quality
    clippy::all,
    clippy::pedantic,

    // Correctness
    clippy::clone_on_ref_ptr,
    clippy::dbg_macro,
    clippy::exit,
    clippy::expect_used,
    clippy::panic,
    clippy::todo,
    clippy::unimplemented,
    clippy::unwrap_used,

    // Style consistency
    clippy::inconsistent_struct_constructor,
    clippy::redundant_closure_for_method_calls,
    clippy::semicolon_if_nothing_returned,
    clippy::wildcard_imports,

    // Future compatibility
    future_incompatible,
    rust_2018_idioms,
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,  // Common pattern in Rust
    clippy::missing_errors_doc,        // Will add gradually
    clippy::missing_panics_doc,        // Will add gradually
)]

/// Application shell wiring the stores together
pub mod app;
/// Configuration management for storage location and upload settings
pub mod config;
/// Core business logic - stores and the pure quotation engine
pub mod core;
/// Unified error types and result handling
pub mod errors;
/// Domain records persisted by the stores
pub mod models;
/// Document rendering - PDF bytes and the fixed-width print layout
pub mod render;
/// Injected key-value persistence interface and implementations
pub mod storage;
/// Image upload collaborator for the external object store
pub mod upload;

#[cfg(test)]
pub mod test_utils;
