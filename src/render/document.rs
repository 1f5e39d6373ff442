//! Logical quotation document - Layout resolved into plain strings.
//!
//! Building the document does all the formatting work (currency rendering,
//! unit labels, discount line) once, so the PDF and text outputs cannot
//! drift apart.

use crate::models::{CompanyInfo, SavedQuotation, currency};
use chrono::{DateTime, NaiveDate, Utc};

/// One table row of the document body.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ItemRow {
    /// Product name
    pub product: String,
    /// Formatted unit price with unit label, e.g. `$0.50 / Piece`
    pub unit_price: String,
    /// Quantity as text
    pub quantity: String,
    /// Formatted line total
    pub line_total: String,
}

/// The discount line of the totals block, present only when the discount
/// percentage is above zero.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DiscountLine {
    /// Label carrying the percentage, e.g. `Discount (10%)`
    pub label: String,
    /// Amount subtracted, formatted with a leading minus, e.g. `-$0.15`
    pub amount: String,
}

/// A fully laid-out quotation document, ready for serialization.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuotationDocument {
    /// Company profile for the header block
    pub company: CompanyInfo,
    /// Document title
    pub title: String,
    /// Formatted issue date
    pub issued_on: String,
    /// Customer the quotation is addressed to
    pub customer_name: String,
    /// Table body, one row per line item
    pub rows: Vec<ItemRow>,
    /// Formatted subtotal
    pub subtotal: String,
    /// Discount line, when a discount applies
    pub discount: Option<DiscountLine>,
    /// Formatted total
    pub total: String,
    /// Static closing text
    pub footer: String,
}

/// Lays out a quotation against a company profile.
///
/// All monetary values are formatted in the quotation's currency. The issue
/// date is passed in so the function stays a pure mapping of its inputs.
#[must_use]
pub fn build_document(
    quotation: &SavedQuotation,
    company: &CompanyInfo,
    issued_on: NaiveDate,
) -> QuotationDocument {
    let code = quotation.currency.as_str();

    let rows = quotation
        .items
        .iter()
        .map(|item| ItemRow {
            product: item.product.name.clone(),
            unit_price: format!(
                "{} / {}",
                currency::format_price(item.product.unit_price, code),
                item.product.unit_type.label()
            ),
            quantity: item.quantity.to_string(),
            line_total: currency::format_price(item.line_total(), code),
        })
        .collect();

    let discount = (quotation.discount > rust_decimal::Decimal::ZERO).then(|| DiscountLine {
        label: format!("Discount ({}%)", quotation.discount.normalize()),
        amount: format!(
            "-{}",
            currency::format_price(quotation.subtotal - quotation.total, code)
        ),
    });

    QuotationDocument {
        company: company.clone(),
        title: "PRICE QUOTATION".to_string(),
        issued_on: issued_on.format("%B %d, %Y").to_string(),
        customer_name: quotation.customer_name.clone(),
        rows,
        subtotal: currency::format_price(quotation.subtotal, code),
        discount,
        total: currency::format_price(quotation.total, code),
        footer: "Thank you for your business!".to_string(),
    }
}

/// Download filename for an exported quotation:
/// `quotation-<slugified-customer-name>-<timestamp-millis>.pdf`.
#[must_use]
pub fn export_filename(customer_name: &str, exported_at: DateTime<Utc>) -> String {
    let slug: Vec<String> = customer_name
        .to_lowercase()
        .split_whitespace()
        .map(str::to_string)
        .collect();
    format!(
        "quotation-{}-{}.pdf",
        slug.join("-"),
        exported_at.timestamp_millis()
    )
}
