//! Document text extraction for uploaded resumes.
//!
//! `extract_text` never fails: every problem degrades to empty text plus a
//! diagnostic the caller can surface. Unsupported formats yield empty text
//! with no diagnostic at all.

use bytes::Bytes;
use thiserror::Error;
use tracing::{debug, warn};

pub mod docx;
pub mod pdf;

pub const PDF_MIME: &str = "application/pdf";
pub const DOCX_MIME: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ExtractionError {
    #[error("File too large: {declared_size} bytes exceeds the {max_size_bytes} byte limit")]
    FileTooLarge {
        declared_size: u64,
        max_size_bytes: u64,
    },

    #[error("Could not read PDF file, it may be corrupted or encrypted: {0}")]
    DocumentParse(String),

    #[error("Resume parsing error: {0}")]
    Corrupt(String),
}

/// Formats the extractor understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Pdf,
    Docx,
}

impl DocumentFormat {
    pub fn from_mime(mime_type: &str) -> Option<Self> {
        match mime_type {
            PDF_MIME => Some(Self::Pdf),
            DOCX_MIME => Some(Self::Docx),
            _ => None,
        }
    }
}

/// A file as handed over by the upload layer.
#[derive(Debug, Clone)]
pub struct UploadedFile {
    pub bytes: Bytes,
    pub declared_size: u64,
    pub mime_type: String,
}

/// Extracted text paired with the problem that emptied it, if any.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Extraction {
    pub text: String,
    pub diagnostic: Option<ExtractionError>,
}

impl Extraction {
    fn failed(error: ExtractionError) -> Self {
        Self {
            text: String::new(),
            diagnostic: Some(error),
        }
    }
}

/// Converts an uploaded document into flat text.
///
/// The size limit is checked against the declared size before any parsing.
pub fn extract_text(file: &UploadedFile, max_size_bytes: u64) -> Extraction {
    if file.declared_size > max_size_bytes {
        let error = ExtractionError::FileTooLarge {
            declared_size: file.declared_size,
            max_size_bytes,
        };
        warn!("Rejected upload before parsing: {error}");
        return Extraction::failed(error);
    }

    let Some(format) = DocumentFormat::from_mime(&file.mime_type) else {
        debug!("Unsupported document type '{}', no text extracted", file.mime_type);
        return Extraction::default();
    };

    let result = match format {
        DocumentFormat::Pdf => pdf::extract_pdf_text(&file.bytes),
        DocumentFormat::Docx => docx::extract_docx_text(&file.bytes),
    };

    match result {
        Ok(text) => {
            debug!(?format, chars = text.len(), "Document text extracted");
            Extraction {
                text,
                diagnostic: None,
            }
        }
        Err(error) => {
            warn!(?format, "Document extraction failed: {error}");
            Extraction::failed(error)
        }
    }
}
