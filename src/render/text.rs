//! Fixed-width text output - The print path.
//!
//! Renders the same logical document as the PDF as a 78-column text layout,
//! suitable for plain-text printing or terminal preview.

use crate::render::document::QuotationDocument;
use std::fmt::Write;

const WIDTH: usize = 78;
const COL_PRODUCT: usize = 34;
const COL_UNIT_PRICE: usize = 24;
const COL_QUANTITY: usize = 6;
const COL_TOTAL: usize = 14;

/// Renders the document as fixed-width text.
#[must_use]
pub fn render_text(document: &QuotationDocument) -> String {
    let mut out = String::new();

    // Header: company block on the left, title and date on the right
    let right = format!("Date: {}", document.issued_on);
    let _ = writeln!(
        out,
        "{:<width$}{}",
        document.company.name,
        document.title,
        width = WIDTH - document.title.chars().count()
    );
    let _ = writeln!(
        out,
        "{:<width$}{}",
        document.company.address,
        right,
        width = WIDTH - right.chars().count()
    );
    let _ = writeln!(out, "Phone: {}", document.company.phone);
    let _ = writeln!(out, "Email: {}", document.company.email);
    out.push('\n');

    let _ = writeln!(out, "Customer: {}", document.customer_name);
    out.push('\n');

    // Table
    let _ = writeln!(
        out,
        "{:<COL_PRODUCT$}{:>COL_UNIT_PRICE$}{:>COL_QUANTITY$}{:>COL_TOTAL$}",
        "Product", "Unit Price", "Qty", "Total"
    );
    let _ = writeln!(out, "{}", "-".repeat(WIDTH));
    for row in &document.rows {
        let name: String = row.product.chars().take(COL_PRODUCT - 2).collect();
        let _ = writeln!(
            out,
            "{name:<COL_PRODUCT$}{:>COL_UNIT_PRICE$}{:>COL_QUANTITY$}{:>COL_TOTAL$}",
            row.unit_price, row.quantity, row.line_total
        );
    }
    let _ = writeln!(out, "{}", "-".repeat(WIDTH));

    // Totals block, right-aligned
    let label_width = WIDTH - COL_TOTAL;
    let _ = writeln!(out, "{:>label_width$}{:>COL_TOTAL$}", "Subtotal:", document.subtotal);
    if let Some(discount) = &document.discount {
        let label = format!("{}:", discount.label);
        let _ = writeln!(out, "{label:>label_width$}{:>COL_TOTAL$}", discount.amount);
    }
    let _ = writeln!(out, "{:>label_width$}{:>COL_TOTAL$}", "Total:", document.total);

    out.push('\n');
    let _ = writeln!(out, "{:^WIDTH$}", document.footer);

    out
}
