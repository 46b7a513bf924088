//! Paginated PDF export
//!
//! A4 landscape with a fixed grid: every row is `ROW_HEIGHT_MM` tall, column
//! widths come from the entity layout, and the header row is repeated at the
//! top of each page.

use super::{ReportRenderer, Table};
use crate::error::{HousingError, Result};
use printpdf::{
    IndirectFontRef, Line, Mm, PdfDocument, PdfDocumentReference, PdfLayerReference, Point,
};
use std::ops::Range;

/// DejaVu Sans, which covers the Arabic block used by the report labels
const BUNDLED_REGULAR: &[u8] = include_bytes!("../../assets/fonts/DejaVuSans.ttf");
const BUNDLED_BOLD: &[u8] = include_bytes!("../../assets/fonts/DejaVuSans-Bold.ttf");

pub const PAGE_WIDTH_MM: f32 = 297.0;
pub const PAGE_HEIGHT_MM: f32 = 210.0;
pub const SIDE_MARGIN_MM: f32 = 10.0;
pub const TOP_MARGIN_MM: f32 = 10.0;
/// Rows never cross into the bottom margin
pub const BOTTOM_MARGIN_MM: f32 = 15.0;
pub const ROW_HEIGHT_MM: f32 = 10.0;
pub const TITLE_HEIGHT_MM: f32 = 10.0;
pub const USABLE_WIDTH_MM: f32 = PAGE_WIDTH_MM - 2.0 * SIDE_MARGIN_MM;

pub(crate) const TITLE_FONT_SIZE: f32 = 14.0;
pub(crate) const HEADER_FONT_SIZE: f32 = 11.0;
const BODY_FONT_SIZE: f32 = 9.0;
const CELL_PADDING_MM: f32 = 1.5;
const PT_TO_MM: f32 = 0.3528;

/// Record rows that fit on each page. The first page also carries the title.
/// An empty table still produces one page with the header.
pub fn paginate(row_count: usize) -> Vec<Range<usize>> {
    let body = PAGE_HEIGHT_MM - TOP_MARGIN_MM - BOTTOM_MARGIN_MM;
    let first = ((body - TITLE_HEIGHT_MM - ROW_HEIGHT_MM) / ROW_HEIGHT_MM).floor() as usize;
    let rest = ((body - ROW_HEIGHT_MM) / ROW_HEIGHT_MM).floor() as usize;

    let mut pages = vec![0..row_count.min(first)];
    let mut start = first;
    while start < row_count {
        let end = (start + rest).min(row_count);
        pages.push(start..end);
        start = end;
    }
    pages
}

/// Rough advance width of `text`; proportional fonts average about half
/// an em per character.
fn estimate_width_mm(text: &str, font_size: f32) -> f32 {
    text.chars().count() as f32 * font_size * 0.5 * PT_TO_MM
}

/// Shorten `text` so it fits inside a cell of `width_mm`
pub fn fit_text(text: &str, width_mm: f32, font_size: f32) -> String {
    let available = width_mm - 2.0 * CELL_PADDING_MM;
    if estimate_width_mm(text, font_size) <= available {
        return text.to_string();
    }

    let per_char = font_size * 0.5 * PT_TO_MM;
    let keep = ((available / per_char).floor() as usize).saturating_sub(3);
    let mut fitted: String = text.chars().take(keep).collect();
    fitted.push_str("...");
    fitted
}

pub struct PdfRenderer {
    /// TrueType font bytes; the bundled DejaVu Sans pair is used when absent
    font: Option<Vec<u8>>,
}

impl PdfRenderer {
    pub fn new() -> Self {
        Self { font: None }
    }

    /// Use one TrueType font for the title, headers and body
    pub fn with_font(font: Vec<u8>) -> Self {
        Self { font: Some(font) }
    }

    fn load_fonts(
        &self,
        doc: &PdfDocumentReference,
    ) -> Result<(IndirectFontRef, IndirectFontRef)> {
        match &self.font {
            Some(bytes) => {
                let regular = doc
                    .add_external_font(bytes.as_slice())
                    .map_err(pdf_error)?;
                Ok((regular.clone(), regular))
            }
            None => {
                let regular = doc.add_external_font(BUNDLED_REGULAR).map_err(pdf_error)?;
                let bold = doc.add_external_font(BUNDLED_BOLD).map_err(pdf_error)?;
                Ok((regular, bold))
            }
        }
    }
}

impl Default for PdfRenderer {
    fn default() -> Self {
        Self::new()
    }
}

fn pdf_error(e: printpdf::Error) -> HousingError {
    HousingError::Report(format!("{:?}", e))
}

/// Bordered row of cells whose top edge sits at `top` (mm from the bottom)
fn draw_row(
    layer: &PdfLayerReference,
    table: &Table,
    texts: &[String],
    top: f32,
    font: &IndirectFontRef,
    font_size: f32,
) {
    let bottom = top - ROW_HEIGHT_MM;
    let mut left = SIDE_MARGIN_MM;

    for (column, text) in table.columns.iter().zip(texts) {
        let cell_left = left;
        let right = cell_left + column.width_mm;
        left = right;

        layer.add_line(Line {
            points: vec![
                (Point::new(Mm(cell_left), Mm(bottom)), false),
                (Point::new(Mm(right), Mm(bottom)), false),
                (Point::new(Mm(right), Mm(top)), false),
                (Point::new(Mm(cell_left), Mm(top)), false),
            ],
            is_closed: true,
        });

        // Blank cells get a border and no text object
        if text.is_empty() {
            continue;
        }

        let fitted = fit_text(text, column.width_mm, font_size);
        let text_width = estimate_width_mm(&fitted, font_size);
        let x = cell_left + ((column.width_mm - text_width) / 2.0).max(CELL_PADDING_MM);
        let baseline = bottom + (ROW_HEIGHT_MM - font_size * PT_TO_MM) / 2.0 + 0.5;
        layer.use_text(fitted, font_size, Mm(x), Mm(baseline), font);
    }
}

impl ReportRenderer for PdfRenderer {
    fn render(&self, table: &Table) -> Result<Vec<u8>> {
        let (doc, first_page, first_layer) = PdfDocument::new(
            table.title.as_str(),
            Mm(PAGE_WIDTH_MM),
            Mm(PAGE_HEIGHT_MM),
            "Layer 1",
        );
        let (regular, bold) = self.load_fonts(&doc)?;

        let headers: Vec<String> = table.headers().iter().map(|h| h.to_string()).collect();

        for (page_index, rows) in paginate(table.rows.len()).into_iter().enumerate() {
            let layer = if page_index == 0 {
                doc.get_page(first_page).get_layer(first_layer)
            } else {
                let (page, layer) =
                    doc.add_page(Mm(PAGE_WIDTH_MM), Mm(PAGE_HEIGHT_MM), "Layer 1");
                doc.get_page(page).get_layer(layer)
            };
            layer.set_outline_thickness(0.3);

            let mut top = PAGE_HEIGHT_MM - TOP_MARGIN_MM;
            if page_index == 0 {
                let width = estimate_width_mm(&table.title, TITLE_FONT_SIZE);
                let x = ((PAGE_WIDTH_MM - width) / 2.0).max(SIDE_MARGIN_MM);
                layer.use_text(
                    table.title.as_str(),
                    TITLE_FONT_SIZE,
                    Mm(x),
                    Mm(top - TITLE_HEIGHT_MM + 3.0),
                    &bold,
                );
                top -= TITLE_HEIGHT_MM;
            }

            draw_row(&layer, table, &headers, top, &bold, HEADER_FONT_SIZE);
            top -= ROW_HEIGHT_MM;

            for cells in &table.rows[rows] {
                let texts: Vec<String> = cells.iter().map(|c| c.display()).collect();
                draw_row(&layer, table, &texts, top, &regular, BODY_FONT_SIZE);
                top -= ROW_HEIGHT_MM;
            }
        }

        doc.save_to_bytes().map_err(pdf_error)
    }
}
