//! Minimal PDF encoding for fixed-layout text documents.
//!
//! Produces a PDF 1.4 file with one or more A4 pages of monospaced text.
//! Output depends only on the input lines: no creation dates, document IDs
//! or other varying metadata are written, so identical input yields
//! identical bytes.

use std::fmt::Write as _;

/// A4 page width in points.
const PAGE_WIDTH: u32 = 595;
/// A4 page height in points.
const PAGE_HEIGHT: u32 = 842;
/// Left margin in points.
const MARGIN_LEFT: u32 = 50;
/// Baseline of the first line in points from the bottom edge.
const FIRST_BASELINE: u32 = 790;
/// Font size in points.
const FONT_SIZE: u32 = 9;
/// Distance between baselines in points.
const LEADING: u32 = 12;
/// Lines that fit between the first baseline and the bottom margin.
pub const LINES_PER_PAGE: usize = 62;

/// Encodes lines of text as a PDF document.
///
/// Lines are set in Courier so that column alignment done with spaces is
/// preserved. Characters outside WinAnsi are replaced with `?`.
///
/// # Examples
///
/// ```
/// use payslip_engine::render::encode_pdf;
///
/// let bytes = encode_pdf(&["Hello (world)".to_string()]);
/// assert!(bytes.starts_with(b"%PDF-1.4"));
/// assert!(bytes.ends_with(b"%%EOF\n"));
/// ```
pub fn encode_pdf(lines: &[String]) -> Vec<u8> {
    let pages: Vec<&[String]> = if lines.is_empty() {
        vec![lines]
    } else {
        lines.chunks(LINES_PER_PAGE).collect()
    };

    // Object layout: 1 catalog, 2 page tree, 3 font, then a page object and
    // a content stream per page.
    let page_ids: Vec<usize> = (0..pages.len()).map(|i| 4 + i * 2).collect();

    let mut objects: Vec<Vec<u8>> = Vec::with_capacity(3 + pages.len() * 2);
    objects.push(b"<< /Type /Catalog /Pages 2 0 R >>".to_vec());

    let kids = page_ids
        .iter()
        .map(|id| format!("{} 0 R", id))
        .collect::<Vec<String>>()
        .join(" ");
    objects.push(format!("<< /Type /Pages /Kids [{}] /Count {} >>", kids, pages.len()).into_bytes());

    objects.push(
        b"<< /Type /Font /Subtype /Type1 /BaseFont /Courier /Encoding /WinAnsiEncoding >>".to_vec(),
    );

    for (page_lines, page_id) in pages.iter().zip(&page_ids) {
        let content_id = page_id + 1;
        objects.push(
            format!(
                "<< /Type /Page /Parent 2 0 R /MediaBox [0 0 {} {}] \
                 /Resources << /Font << /F1 3 0 R >> >> /Contents {} 0 R >>",
                PAGE_WIDTH, PAGE_HEIGHT, content_id
            )
            .into_bytes(),
        );

        let stream = content_stream(page_lines);
        let mut object = format!("<< /Length {} >>\nstream\n", stream.len()).into_bytes();
        object.extend_from_slice(&stream);
        object.extend_from_slice(b"\nendstream");
        objects.push(object);
    }

    assemble(&objects)
}

fn content_stream(lines: &[String]) -> Vec<u8> {
    let mut stream = Vec::new();
    let mut header = String::new();
    let _ = write!(
        header,
        "BT\n/F1 {} Tf\n{} TL\n{} {} Td\n",
        FONT_SIZE, LEADING, MARGIN_LEFT, FIRST_BASELINE
    );
    stream.extend_from_slice(header.as_bytes());

    for line in lines {
        stream.push(b'(');
        stream.extend_from_slice(&escape_text(line));
        stream.extend_from_slice(b") Tj\nT*\n");
    }

    stream.extend_from_slice(b"ET");
    stream
}

/// Escapes a line for use inside a PDF literal string.
fn escape_text(line: &str) -> Vec<u8> {
    let mut out = Vec::with_capacity(line.len());
    for ch in line.chars() {
        match ch {
            '\\' | '(' | ')' => {
                out.push(b'\\');
                out.push(ch as u8);
            }
            ' '..='~' => out.push(ch as u8),
            _ => {
                let byte = win_ansi_byte(ch).unwrap_or(b'?');
                out.extend_from_slice(format!("\\{:03o}", byte).as_bytes());
            }
        }
    }
    out
}

/// Maps a character to its WinAnsiEncoding byte, for the non-ASCII
/// characters likely to appear on a payslip.
fn win_ansi_byte(ch: char) -> Option<u8> {
    match ch {
        '\u{20AC}' => Some(0x80), // euro sign
        '\u{2013}' => Some(0x96),
        '\u{2014}' => Some(0x97),
        '\u{A0}'..='\u{FF}' => Some(ch as u32 as u8),
        _ => None,
    }
}

fn assemble(objects: &[Vec<u8>]) -> Vec<u8> {
    let mut out: Vec<u8> = Vec::new();
    out.extend_from_slice(b"%PDF-1.4\n%\xE2\xE3\xCF\xD3\n");

    let mut offsets = Vec::with_capacity(objects.len());
    for (index, body) in objects.iter().enumerate() {
        offsets.push(out.len());
        out.extend_from_slice(format!("{} 0 obj\n", index + 1).as_bytes());
        out.extend_from_slice(body);
        out.extend_from_slice(b"\nendobj\n");
    }

    let xref_offset = out.len();
    let mut xref = String::new();
    let _ = write!(xref, "xref\n0 {}\n0000000000 65535 f \n", objects.len() + 1);
    for offset in &offsets {
        let _ = write!(xref, "{:010} 00000 n \n", offset);
    }
    let _ = write!(
        xref,
        "trailer\n<< /Size {} /Root 1 0 R >>\nstartxref\n{}\n%%EOF\n",
        objects.len() + 1,
        xref_offset
    );
    out.extend_from_slice(xref.as_bytes());
    out
}
