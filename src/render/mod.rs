//! Document rendering - Turns an archived quotation and a company profile
//! into a print-ready document.
//!
//! Layout is resolved once into a [`document::QuotationDocument`]; the PDF
//! and fixed-width text serializers are thin views over that structure and
//! stay pure functions of their inputs.

/// Logical document layout, shared by all output targets
pub mod document;
/// PDF byte output
pub mod pdf;
/// Fixed-width text output for the print path
pub mod text;

pub use document::{QuotationDocument, build_document, export_filename};
pub use pdf::render_pdf;
pub use text::render_text;
