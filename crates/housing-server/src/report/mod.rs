//! Export artifacts
//!
//! Record sets are first flattened into a [`Table`] and then handed to a
//! [`ReportRenderer`] for the requested [`ExportFormat`].

mod layouts;
pub mod pdf;
pub mod table;
pub mod xlsx;

pub use pdf::PdfRenderer;
pub use table::{Cell, Column, Table};
pub use xlsx::XlsxRenderer;

use crate::error::{HousingError, Result};
use crate::repository::Entity;
use housing_types::ExportFormat;
use std::path::Path;

/// Fixed layout of an entity's report
pub struct ReportLayout {
    pub title: &'static str,
    /// Download file name without extension
    pub file_stem: &'static str,
    pub columns: &'static [Column],
}

/// An entity that can be exported
pub trait Reportable: Entity {
    const LAYOUT: ReportLayout;

    /// One cell per layout column, in the same order
    fn row(view: &Self::View) -> Vec<Cell>;
}

pub trait ReportRenderer: Send + Sync {
    fn render(&self, table: &Table) -> Result<Vec<u8>>;
}

/// Renderers for every supported format
pub struct Reports {
    xlsx: XlsxRenderer,
    pdf: PdfRenderer,
}

impl Reports {
    pub fn new(pdf_font_path: Option<&Path>) -> Result<Self> {
        let pdf = match pdf_font_path {
            Some(path) => {
                let font = std::fs::read(path).map_err(|e| {
                    HousingError::Report(format!(
                        "Failed to read PDF font {}: {}",
                        path.display(),
                        e
                    ))
                })?;
                tracing::info!("PDF reports use font {}", path.display());
                PdfRenderer::with_font(font)
            }
            None => PdfRenderer::new(),
        };

        Ok(Self {
            xlsx: XlsxRenderer,
            pdf,
        })
    }

    pub fn renderer(&self, format: ExportFormat) -> &dyn ReportRenderer {
        match format {
            ExportFormat::Excel => &self.xlsx,
            ExportFormat::Pdf => &self.pdf,
        }
    }

    pub fn render(&self, format: ExportFormat, table: &Table) -> Result<Vec<u8>> {
        let bytes = self.renderer(format).render(table)?;
        tracing::debug!(
            "Rendered {} report '{}' ({} rows, {} bytes)",
            format,
            table.title,
            table.rows.len(),
            bytes.len()
        );
        Ok(bytes)
    }
}

impl Default for Reports {
    fn default() -> Self {
        Self {
            xlsx: XlsxRenderer,
            pdf: PdfRenderer::new(),
        }
    }
}
