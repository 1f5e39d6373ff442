//! PDF output - Serializes the logical document with `printpdf`.
//!
//! A4 portrait, Helvetica built-in fonts, coordinates in millimeters from
//! the bottom-left corner. The table paginates when rows run past the bottom
//! margin. A logo that fails to decode is skipped; nothing about the logo is
//! fatal.

use crate::{
    errors::{Error, Result},
    render::document::QuotationDocument,
};
use printpdf::{
    BuiltinFont, Color, Image, ImageTransform, IndirectFontRef, Line, Mm, PdfDocument,
    PdfLayerReference, Point, Rgb, image_crate,
};

const PAGE_WIDTH: f32 = 210.0;
const PAGE_HEIGHT: f32 = 297.0;
const MARGIN_LEFT: f32 = 20.0;
const RIGHT_EDGE: f32 = 190.0;
const BOTTOM_MARGIN: f32 = 30.0;
const ROW_HEIGHT: f32 = 7.0;
const LOGO_WIDTH_MM: f32 = 30.0;

// Table column anchors: product is left-aligned, the numeric columns are
// right-aligned against their anchor.
const COL_PRODUCT: f32 = MARGIN_LEFT;
const COL_UNIT_PRICE: f32 = 132.0;
const COL_QUANTITY: f32 = 152.0;
const COL_TOTAL: f32 = RIGHT_EDGE;
const TOTALS_LABEL_X: f32 = 132.0;

fn mm(value: f32) -> Mm {
    Mm(value.into())
}

fn accent() -> Color {
    Color::Rgb(Rgb::new(0.12, 0.31, 0.47, None))
}

fn muted() -> Color {
    Color::Rgb(Rgb::new(0.39, 0.39, 0.39, None))
}

fn black() -> Color {
    Color::Rgb(Rgb::new(0.0, 0.0, 0.0, None))
}

fn discount_red() -> Color {
    Color::Rgb(Rgb::new(0.78, 0.0, 0.0, None))
}

/// Approximate width of a Helvetica string in millimeters.
///
/// Average glyph advance; good enough to right-align short labels and
/// amounts against a column anchor.
fn text_width(text: &str, font_size: f32) -> f32 {
    const PT_TO_MM: f32 = 0.352_778;
    const AVG_ADVANCE: f32 = 0.52;
    text.chars().count() as f32 * font_size * AVG_ADVANCE * PT_TO_MM
}

fn right_aligned(layer: &PdfLayerReference, text: &str, size: f32, anchor: f32, y: f32, font: &IndirectFontRef) {
    let x = anchor - text_width(text, size);
    layer.use_text(text, size.into(), mm(x), mm(y), font);
}

fn rule(layer: &PdfLayerReference, y: f32) {
    let line = Line {
        points: vec![
            (Point::new(mm(MARGIN_LEFT), mm(y)), false),
            (Point::new(mm(RIGHT_EDGE), mm(y)), false),
        ],
        is_closed: false,
    };
    layer.set_outline_color(muted());
    layer.set_outline_thickness(0.3);
    layer.add_line(line);
}

fn table_header(layer: &PdfLayerReference, bold: &IndirectFontRef, y: f32) {
    layer.set_fill_color(accent());
    layer.use_text("Product", 10.0, mm(COL_PRODUCT), mm(y), bold);
    right_aligned(layer, "Unit Price", 10.0, COL_UNIT_PRICE, y, bold);
    right_aligned(layer, "Qty", 10.0, COL_QUANTITY, y, bold);
    right_aligned(layer, "Total", 10.0, COL_TOTAL, y, bold);
    layer.set_fill_color(black());
    rule(layer, y - 2.0);
}

/// Embeds the logo at the top-left of the header, scaled to a 30 mm width.
/// Returns `false` when the bytes do not decode as an image.
fn draw_logo(layer: &PdfLayerReference, bytes: &[u8]) -> bool {
    use printpdf::image_crate::GenericImageView;

    let decoded = match image_crate::load_from_memory(bytes) {
        Ok(decoded) => decoded,
        Err(e) => {
            tracing::warn!(error = %e, "logo image failed to decode, rendering without it");
            return false;
        }
    };

    let (width_px, _) = decoded.dimensions();
    if width_px == 0 {
        return false;
    }
    // Pixels per inch that make the image exactly LOGO_WIDTH_MM wide
    let dpi = width_px as f32 / (LOGO_WIDTH_MM / 25.4);

    let image = Image::from_dynamic_image(&decoded);
    image.add_to_layer(
        layer.clone(),
        ImageTransform {
            translate_x: Some(mm(MARGIN_LEFT)),
            translate_y: Some(mm(258.0)),
            dpi: Some(dpi.into()),
            ..ImageTransform::default()
        },
    );
    true
}

/// Serializes the document to PDF bytes.
///
/// # Errors
/// Returns an error if the PDF library rejects the document, which is not
/// expected for well-formed input.
pub fn render_pdf(document: &QuotationDocument, logo: Option<&[u8]>) -> Result<Vec<u8>> {
    let (doc, first_page, first_layer) =
        PdfDocument::new("Price Quotation", mm(PAGE_WIDTH), mm(PAGE_HEIGHT), "Layer 1");

    let render_err = |e: &dyn std::fmt::Display| Error::Render { message: e.to_string() };

    let regular = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(|e| render_err(&e))?;
    let bold = doc
        .add_builtin_font(BuiltinFont::HelveticaBold)
        .map_err(|e| render_err(&e))?;
    let italic = doc
        .add_builtin_font(BuiltinFont::HelveticaOblique)
        .map_err(|e| render_err(&e))?;

    let mut layer = doc.get_page(first_page).get_layer(first_layer);

    // Header: optional logo, company block, title, and issue date
    let logo_drawn = logo.is_some_and(|bytes| draw_logo(&layer, bytes));
    let company_x = if logo_drawn { MARGIN_LEFT + LOGO_WIDTH_MM + 5.0 } else { MARGIN_LEFT };

    layer.use_text(&document.company.name, 20.0, mm(company_x), mm(272.0), &bold);
    layer.set_fill_color(muted());
    layer.use_text(&document.company.address, 10.0, mm(company_x), mm(264.0), &regular);
    layer.use_text(
        format!("Phone: {}", document.company.phone),
        10.0,
        mm(company_x),
        mm(258.0),
        &regular,
    );
    layer.use_text(
        format!("Email: {}", document.company.email),
        10.0,
        mm(company_x),
        mm(252.0),
        &regular,
    );

    layer.set_fill_color(accent());
    right_aligned(&layer, &document.title, 24.0, RIGHT_EDGE, 272.0, &bold);
    layer.set_fill_color(muted());
    right_aligned(
        &layer,
        &format!("Date: {}", document.issued_on),
        10.0,
        RIGHT_EDGE,
        262.0,
        &regular,
    );

    // Customer line
    layer.set_fill_color(black());
    layer.use_text("Customer:", 12.0, mm(MARGIN_LEFT), mm(237.0), &bold);
    layer.use_text(&document.customer_name, 12.0, mm(MARGIN_LEFT + 30.0), mm(237.0), &regular);

    // Table body, paginating when a row would cross the bottom margin
    let mut y = 227.0;
    table_header(&layer, &bold, y);
    y -= ROW_HEIGHT;

    for row in &document.rows {
        if y < BOTTOM_MARGIN {
            let (page, page_layer) = doc.add_page(mm(PAGE_WIDTH), mm(PAGE_HEIGHT), "Layer 1");
            layer = doc.get_page(page).get_layer(page_layer);
            y = PAGE_HEIGHT - 25.0;
            table_header(&layer, &bold, y);
            y -= ROW_HEIGHT;
        }

        layer.use_text(&row.product, 10.0, mm(COL_PRODUCT), mm(y), &regular);
        right_aligned(&layer, &row.unit_price, 10.0, COL_UNIT_PRICE, y, &regular);
        right_aligned(&layer, &row.quantity, 10.0, COL_QUANTITY, y, &regular);
        right_aligned(&layer, &row.line_total, 10.0, COL_TOTAL, y, &regular);
        y -= ROW_HEIGHT;
    }

    rule(&layer, y + ROW_HEIGHT - 2.0);

    // Totals block; moved to a fresh page if the rows consumed this one
    if y < BOTTOM_MARGIN {
        let (page, page_layer) = doc.add_page(mm(PAGE_WIDTH), mm(PAGE_HEIGHT), "Layer 1");
        layer = doc.get_page(page).get_layer(page_layer);
        y = PAGE_HEIGHT - 25.0;
    }
    y -= 5.0;

    layer.use_text("Subtotal:", 10.0, mm(TOTALS_LABEL_X), mm(y), &regular);
    right_aligned(&layer, &document.subtotal, 10.0, COL_TOTAL, y, &regular);

    if let Some(discount) = &document.discount {
        y -= ROW_HEIGHT;
        layer.set_fill_color(discount_red());
        layer.use_text(format!("{}:", discount.label), 10.0, mm(TOTALS_LABEL_X), mm(y), &regular);
        right_aligned(&layer, &discount.amount, 10.0, COL_TOTAL, y, &regular);
        layer.set_fill_color(black());
    }

    y -= 10.0;
    layer.set_fill_color(accent());
    layer.use_text("Total:", 14.0, mm(TOTALS_LABEL_X), mm(y), &bold);
    right_aligned(&layer, &document.total, 14.0, COL_TOTAL, y, &bold);

    // Footer, centered on the last page
    layer.set_fill_color(muted());
    let footer_x = PAGE_WIDTH / 2.0 - text_width(&document.footer, 9.0) / 2.0;
    layer.use_text(&document.footer, 9.0, mm(footer_x), mm(17.0), &italic);

    doc.save_to_bytes().map_err(|e| Error::Render { message: e.to_string() })
}
