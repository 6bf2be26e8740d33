use std::io::{Cursor, Read};

use quick_xml::events::Event;
use quick_xml::Reader;

use crate::extraction::ExtractionError;

const DOCUMENT_PART: &str = "word/document.xml";

/// Extracts paragraph text from an in-memory DOCX, one paragraph per line.
pub fn extract_docx_text(bytes: &[u8]) -> Result<String, ExtractionError> {
    let mut archive = zip::ZipArchive::new(Cursor::new(bytes))
        .map_err(|e| ExtractionError::Corrupt(format!("Failed to open DOCX archive: {e}")))?;

    let mut xml = String::new();
    archive
        .by_name(DOCUMENT_PART)
        .map_err(|e| ExtractionError::Corrupt(format!("Missing {DOCUMENT_PART}: {e}")))?
        .read_to_string(&mut xml)
        .map_err(|e| ExtractionError::Corrupt(format!("Failed to read {DOCUMENT_PART}: {e}")))?;

    let paragraphs = parse_paragraphs(&xml)?;
    Ok(paragraphs.join("\n"))
}

/// Walks `w:p` elements in document order. Only `w:t` content counts as text;
/// `w:tab` and `w:br` become a tab and a newline. Paragraph properties are
/// skipped, since their `w:tabs` hold tab-stop definitions rather than tabs.
///
/// Paragraphs can nest (text boxes inside a run), so open paragraphs are kept
/// on a stack and emitted as they close.
fn parse_paragraphs(xml: &str) -> Result<Vec<String>, ExtractionError> {
    let mut reader = Reader::from_str(xml);

    let mut paragraphs = Vec::new();
    let mut open: Vec<String> = Vec::new();
    let mut in_text = false;
    let mut props_depth = 0usize;

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => match e.name().as_ref() {
                b"w:p" => open.push(String::new()),
                b"w:pPr" => props_depth += 1,
                b"w:t" => in_text = true,
                _ => {}
            },
            Ok(Event::Empty(e)) => match e.name().as_ref() {
                b"w:p" => paragraphs.push(String::new()),
                b"w:tab" if props_depth == 0 => push_to_current(&mut open, "\t"),
                b"w:br" | b"w:cr" if props_depth == 0 => push_to_current(&mut open, "\n"),
                _ => {}
            },
            Ok(Event::Text(e)) if in_text => {
                let text = e
                    .unescape()
                    .map_err(|e| ExtractionError::Corrupt(format!("Bad text in document: {e}")))?;
                push_to_current(&mut open, &text);
            }
            Ok(Event::End(e)) => match e.name().as_ref() {
                b"w:p" => {
                    if let Some(paragraph) = open.pop() {
                        paragraphs.push(paragraph);
                    }
                }
                b"w:pPr" => props_depth = props_depth.saturating_sub(1),
                b"w:t" => in_text = false,
                _ => {}
            },
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(e) => {
                return Err(ExtractionError::Corrupt(format!(
                    "Malformed document XML at byte {}: {e}",
                    reader.buffer_position()
                )))
            }
        }
    }

    Ok(paragraphs)
}

fn push_to_current(open: &mut [String], text: &str) {
    if let Some(current) = open.last_mut() {
        current.push_str(text);
    }
}
