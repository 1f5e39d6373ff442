//! Domain model - Records persisted by the stores and exchanged with the
//! quotation engine. Each record serializes to the camelCase JSON shape used
//! by earlier releases, with date fields carried as RFC 3339 strings.

pub mod company;
pub mod currency;
pub mod product;
pub mod quotation;
pub mod template;

pub use company::{CompanyInfo, CompanyInfoUpdate};
pub use currency::{CURRENCIES, Currency};
pub use product::{Product, ProductInput, ProductUpdate, UnitType};
pub use quotation::{QuotationDraft, QuotationItem, SavedQuotation};
pub use template::{QuotationTemplate, TemplateItem};

/// Generates a fresh opaque identifier for a newly created record.
#[must_use]
pub fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}
