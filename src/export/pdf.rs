//! A small PDF 1.4 writer for laid-out documents.
//!
//! Only what recipe documents need is supported: text in the two standard
//! Helvetica faces with WinAnsi encoding. Characters outside that encoding
//! are written as `?`.

use super::layout::{Document, Font, TextRun};
use super::metrics::win_ansi_byte;
use super::{DocumentBackend, ExportError};
use std::fmt::Write as _;

const PT_PER_MM: f32 = 72.0 / 25.4;

/// Writes documents as PDF using the built-in Helvetica fonts.
#[derive(Debug, Clone, Copy, Default)]
pub struct PdfBackend;

impl DocumentBackend for PdfBackend {
    fn extension(&self) -> &'static str {
        "pdf"
    }

    fn render(&self, document: &Document) -> Result<Vec<u8>, ExportError> {
        Ok(write_pdf(document))
    }
}

fn write_pdf(document: &Document) -> Vec<u8> {
    let width = document.layout.width_mm * PT_PER_MM;
    let height = document.layout.height_mm * PT_PER_MM;

    // Objects: 1 catalog, 2 page tree, 3 regular font, 4 bold font, then a
    // page object and a content stream per page.
    let page_ids: Vec<usize> = (0..document.pages.len()).map(|i| 5 + 2 * i).collect();
    let mut objects: Vec<Vec<u8>> = Vec::with_capacity(4 + 2 * page_ids.len());

    objects.push(b"<< /Type /Catalog /Pages 2 0 R >>".to_vec());
    let kids: Vec<String> = page_ids.iter().map(|id| format!("{id} 0 R")).collect();
    objects.push(
        format!(
            "<< /Type /Pages /Kids [{}] /Count {} >>",
            kids.join(" "),
            page_ids.len()
        )
        .into_bytes(),
    );
    objects.push(font_object("Helvetica"));
    objects.push(font_object("Helvetica-Bold"));

    for (page, &page_id) in document.pages.iter().zip(&page_ids) {
        objects.push(
            format!(
                "<< /Type /Page /Parent 2 0 R /MediaBox [0 0 {width:.2} {height:.2}] \
                 /Resources << /Font << /F1 3 0 R /F2 4 0 R >> >> /Contents {} 0 R >>",
                page_id + 1
            )
            .into_bytes(),
        );

        let mut content = Vec::new();
        for run in &page.runs {
            content.extend(text_operator(run, document.layout.height_mm));
        }
        let mut stream = format!("<< /Length {} >>\nstream\n", content.len()).into_bytes();
        stream.extend(content);
        stream.extend_from_slice(b"\nendstream");
        objects.push(stream);
    }

    let mut pdf = b"%PDF-1.4\n%\xE2\xE3\xCF\xD3\n".to_vec();
    let mut offsets = Vec::with_capacity(objects.len());
    for (index, object) in objects.iter().enumerate() {
        offsets.push(pdf.len());
        pdf.extend(format!("{} 0 obj\n", index + 1).into_bytes());
        pdf.extend_from_slice(object);
        pdf.extend_from_slice(b"\nendobj\n");
    }

    let xref_offset = pdf.len();
    let mut trailer = format!("xref\n0 {}\n0000000000 65535 f \n", objects.len() + 1);
    for offset in offsets {
        let _ = writeln!(trailer, "{offset:010} 00000 n ");
    }
    let _ = write!(
        trailer,
        "trailer\n<< /Size {} /Root 1 0 R >>\nstartxref\n{xref_offset}\n%%EOF\n",
        objects.len() + 1
    );
    pdf.extend(trailer.into_bytes());
    pdf
}

fn font_object(base_font: &str) -> Vec<u8> {
    format!("<< /Type /Font /Subtype /Type1 /BaseFont /{base_font} /Encoding /WinAnsiEncoding >>")
        .into_bytes()
}

fn text_operator(run: &TextRun, page_height_mm: f32) -> Vec<u8> {
    let font = match run.font {
        Font::Body => "F1",
        Font::Heading => "F2",
    };
    let x = run.x * PT_PER_MM;
    let y = (page_height_mm - run.y) * PT_PER_MM;

    let mut op = format!("BT /{font} {:.1} Tf {x:.2} {y:.2} Td (", run.size).into_bytes();
    op.extend(encode_text(&run.text));
    op.extend_from_slice(b") Tj ET\n");
    op
}

/// Encodes text as the body of a PDF literal string.
fn encode_text(text: &str) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '(' | ')' | '\\' => {
                bytes.push(b'\\');
                bytes.push(c as u8);
            }
            _ => bytes.push(win_ansi_byte(c).unwrap_or(b'?')),
        }
    }
    bytes
}
