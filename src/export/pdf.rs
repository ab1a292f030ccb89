// src/export/pdf.rs

use crate::errors::{AppError, AppResult};
use crate::export::model::{get_headers, tasks_to_table};
use crate::export::{TaskExport, notify_export_success};
use crate::ui::messages::info;
use pdf_writer::{Content, Name, Pdf, Rect, Ref, Str};
use std::fs::File;
use std::io::Write;
use std::path::Path;
use unicode_width::UnicodeWidthStr;

// A4 portrait, in points.
const PAGE_W: f32 = 595.0;
const PAGE_H: f32 = 842.0;
const MARGIN: f32 = 50.0;
const ROW_H: f32 = 20.0;

const BODY_SIZE: f32 = 10.0;
const HEADER_SIZE: f32 = 11.0;
const TITLE_SIZE: f32 = 14.0;

const HEADER_BAND: (f32, f32, f32) = (0.85, 0.87, 0.90);
const ZEBRA_BAND: (f32, f32, f32) = (0.96, 0.96, 0.96);
const BORDER_GREY: f32 = 0.65;

/// Hand-assembled PDF: manually managed object ids, one Helvetica font,
/// one content stream per page.
struct PdfDocument {
    pdf: Pdf,
    catalog_id: Ref,
    pages_id: Ref,
    font_id: Ref,
    page_refs: Vec<Ref>,
    open_content: Option<Ref>,
    next_id: i32,
}

impl PdfDocument {
    fn new() -> Self {
        let mut pdf = Pdf::new();

        let catalog_id = Ref::new(1);
        let pages_id = Ref::new(2);
        let font_id = Ref::new(3);

        pdf.type1_font(font_id).base_font(Name(b"Helvetica"));

        PdfDocument {
            pdf,
            catalog_id,
            pages_id,
            font_id,
            page_refs: Vec::new(),
            open_content: None,
            next_id: 4,
        }
    }

    fn fresh_ref(&mut self) -> Ref {
        let id = self.next_id;
        self.next_id += 1;
        Ref::new(id)
    }

    /// Register a new page object and return its empty content stream.
    fn new_page(&mut self) -> Content {
        let page_id = self.fresh_ref();
        let content_id = self.fresh_ref();

        self.page_refs.push(page_id);

        let mut page = self.pdf.page(page_id);
        page.parent(self.pages_id)
            .media_box(Rect::new(0.0, 0.0, PAGE_W, PAGE_H))
            .contents(content_id);
        page.resources().fonts().pair(Name(b"F1"), self.font_id);

        self.open_content = Some(content_id);

        Content::new()
    }

    /// Write the finished content stream of the current page.
    fn finish_page(&mut self, content: Content) {
        if let Some(id) = self.open_content.take() {
            self.pdf.stream(id, &content.finish());
        }
    }

    fn draw_text(&self, content: &mut Content, x: f32, y: f32, size: f32, text: &str) {
        content.begin_text();
        content.set_font(Name(b"F1"), size);
        content.set_text_matrix([1.0, 0.0, 0.0, 1.0, x, y]);
        content.show(Str(text.as_bytes()));
        content.end_text();
    }

    /// Filled background band spanning the table width at row position `y`.
    fn fill_band(&self, content: &mut Content, y: f32, width: f32, rgb: (f32, f32, f32)) {
        content.save_state();
        content.set_fill_rgb(rgb.0, rgb.1, rgb.2);
        content.rect(MARGIN, y, width, ROW_H);
        content.fill_nonzero();
        content.restore_state();
    }

    /// One table row: cell text plus the bordered cell rectangles.
    fn draw_row(&self, content: &mut Content, y: f32, widths: &[f32], row: &[String], size: f32) {
        let mut x = MARGIN;

        for (i, text) in row.iter().enumerate() {
            let w = widths[i];
            self.draw_text(content, x + 4.0, y + 5.0, size, text);

            content.save_state();
            content.set_stroke_rgb(BORDER_GREY, BORDER_GREY, BORDER_GREY);
            content.rect(x, y, w, ROW_H);
            content.stroke();
            content.restore_state();

            x += w;
        }
    }

    /// Column widths from header and cell text, scaled down to fit the page.
    fn column_widths(headers: &[&str], rows: &[Vec<String>]) -> Vec<f32> {
        let mut widths: Vec<f32> = headers
            .iter()
            .map(|h| UnicodeWidthStr::width(*h) as f32 * 6.5)
            .collect();

        for row in rows {
            for (i, cell) in row.iter().enumerate() {
                widths[i] = widths[i].max(UnicodeWidthStr::width(cell.as_str()) as f32 * 6.2);
            }
        }

        let total: f32 = widths.iter().sum();
        let max = PAGE_W - 2.0 * MARGIN;

        if total > max {
            let scale = max / total;
            for w in &mut widths {
                *w *= scale;
            }
        }

        widths
    }

    fn page_chrome(&self, content: &mut Content, title: &str, page: usize) {
        self.draw_text(content, MARGIN, PAGE_H - MARGIN + 15.0, TITLE_SIZE, title);

        let footer = format!("Page {page}");
        self.draw_text(
            content,
            PAGE_W - MARGIN - 60.0,
            MARGIN - 35.0,
            BODY_SIZE,
            &footer,
        );
    }

    /// Lay the table out across as many pages as needed. An empty row set
    /// still yields a single page with title and header band.
    fn write_table(&mut self, title: &str, headers: &[&str], rows: &[Vec<String>]) {
        let widths = Self::column_widths(headers, rows);
        let table_w: f32 = widths.iter().sum();
        let header_row: Vec<String> = headers.iter().map(|s| s.to_string()).collect();

        let mut remaining: &[Vec<String>] = rows;
        let mut page_no = 1;

        loop {
            let mut content = self.new_page();
            self.page_chrome(&mut content, title, page_no);

            let mut y = PAGE_H - MARGIN - 30.0;

            self.fill_band(&mut content, y, table_w, HEADER_BAND);
            self.draw_row(&mut content, y, &widths, &header_row, HEADER_SIZE);
            y -= ROW_H;

            let mut consumed = 0;

            for (i, row) in remaining.iter().enumerate() {
                if y - ROW_H < MARGIN {
                    break;
                }

                // Stripe restarts on every page.
                if i % 2 == 0 {
                    self.fill_band(&mut content, y, table_w, ZEBRA_BAND);
                }

                self.draw_row(&mut content, y, &widths, row, BODY_SIZE);

                y -= ROW_H;
                consumed += 1;
            }

            self.finish_page(content);
            remaining = &remaining[consumed..];
            page_no += 1;

            if remaining.is_empty() {
                break;
            }
        }
    }

    fn save(mut self, path: &Path) -> std::io::Result<()> {
        self.pdf.catalog(self.catalog_id).pages(self.pages_id);
        self.build_pages_tree();

        let bytes = self.pdf.finish();
        let mut file = File::create(path)?;
        file.write_all(&bytes)
    }

    fn build_pages_tree(&mut self) {
        let mut pages = self.pdf.pages(self.pages_id);
        pages.count(self.page_refs.len() as i32);
        pages.kids(self.page_refs.clone());
    }
}

/// Render the rows as a bordered multipage table and write the document.
pub(crate) fn export_pdf(rows: &[TaskExport], path: &Path, title: &str) -> AppResult<()> {
    info(format!("Exporting to PDF: {}", path.display()));

    let headers = get_headers();
    let table = tasks_to_table(rows);

    let mut doc = PdfDocument::new();
    doc.write_table(title, &headers, &table);
    doc.save(path)
        .map_err(|e| AppError::Export(format!("PDF write error: {e}")))?;

    notify_export_success("PDF", path);
    Ok(())
}
