use std::panic;

use crate::extraction::ExtractionError;

/// Extracts text from an in-memory PDF, page texts joined with no separator.
///
/// The PDF parser can panic on hostile input; the panic is contained here and
/// reported like any other parse failure.
pub fn extract_pdf_text(bytes: &[u8]) -> Result<String, ExtractionError> {
    let pages = panic::catch_unwind(|| pdf_extract::extract_text_from_mem_by_pages(bytes))
        .map_err(|_| ExtractionError::DocumentParse("PDF parser aborted".to_string()))?
        .map_err(|e| ExtractionError::DocumentParse(e.to_string()))?;

    Ok(pages.concat())
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// Builds a minimal uncompressed PDF with one line of Helvetica text per
    /// page. Page text must not contain parentheses or backslashes.
    pub(crate) fn build_pdf(pages: &[&str]) -> Vec<u8> {
        let mut objects: Vec<String> = vec![
            "<< /Type /Catalog /Pages 2 0 R >>".to_string(),
            String::new(),
            "<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica /Encoding /WinAnsiEncoding >>"
                .to_string(),
        ];
        let mut kids = Vec::new();
        for text in pages {
            let page_id = objects.len() + 1;
            let content = format!("BT /F1 12 Tf 72 720 Td ({text}) Tj ET");
            objects.push(format!(
                "<< /Type /Page /Parent 2 0 R /MediaBox [0 0 612 792] \
                 /Resources << /Font << /F1 3 0 R >> >> /Contents {} 0 R >>",
                page_id + 1
            ));
            objects.push(format!(
                "<< /Length {} >>\nstream\n{content}\nendstream",
                content.len()
            ));
            kids.push(format!("{page_id} 0 R"));
        }
        objects[1] = format!(
            "<< /Type /Pages /Kids [{}] /Count {} >>",
            kids.join(" "),
            pages.len()
        );

        let mut pdf = b"%PDF-1.4\n".to_vec();
        let mut offsets = Vec::with_capacity(objects.len());
        for (i, object) in objects.iter().enumerate() {
            offsets.push(pdf.len());
            pdf.extend_from_slice(format!("{} 0 obj\n{object}\nendobj\n", i + 1).as_bytes());
        }

        let xref_start = pdf.len();
        let mut xref = format!("xref\n0 {}\n0000000000 65535 f \n", objects.len() + 1);
        for offset in offsets {
            xref.push_str(&format!("{offset:010} 00000 n \n"));
        }
        xref.push_str(&format!(
            "trailer\n<< /Size {} /Root 1 0 R >>\nstartxref\n{xref_start}\n%%EOF\n",
            objects.len() + 1
        ));
        pdf.extend_from_slice(xref.as_bytes());
        pdf
    }

    #[test]
    fn test_pages_are_concatenated_in_order() {
        let bytes = build_pdf(&["Python and SQL", "5 years Java"]);
        let text = extract_pdf_text(&bytes).unwrap();

        let first = text.find("Python and SQL").unwrap();
        let second = text.find("5 years Java").unwrap();
        assert!(first < second);
    }

    #[test]
    fn test_single_page_text() {
        let bytes = build_pdf(&["Machine Learning engineer"]);
        let text = extract_pdf_text(&bytes).unwrap();
        assert_eq!(text.trim(), "Machine Learning engineer");
    }

    #[test]
    fn test_empty_buffer_is_parse_error() {
        assert!(matches!(
            extract_pdf_text(b""),
            Err(ExtractionError::DocumentParse(_))
        ));
    }

    #[test]
    fn test_non_pdf_bytes_are_parse_error() {
        assert!(matches!(
            extract_pdf_text(b"PK\x03\x04 this is a zip header"),
            Err(ExtractionError::DocumentParse(_))
        ));
    }
}
