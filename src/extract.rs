//! Document text extraction.
//!
//! Dispatches on file extension to the right parser and returns one plain-text
//! string. Uses pdf-extract for PDFs and zip + quick-xml for DOCX packages.

use quick_xml::events::Event;
use quick_xml::Reader;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Largest input file accepted, in bytes
pub const MAX_FILE_SIZE: u64 = 10 * 1024 * 1024;

#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("file not found: {0}")]
    NotFound(PathBuf),
    #[error("file exceeds the 10 MiB limit ({size} bytes): {path}")]
    TooLarge { path: PathBuf, size: u64 },
    #[error("unsupported file type '{0}', expected .txt, .pdf or .docx")]
    UnsupportedType(String),
    #[error("failed to read file: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("failed to extract text from PDF: {0}")]
    PdfError(String),
    #[error("failed to extract text from DOCX: {0}")]
    DocxError(String),
}

/// Supported document formats, chosen by file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    PlainText,
    Pdf,
    Docx,
}

impl DocumentKind {
    /// Determine the document kind from the path's extension (case-insensitive)
    pub fn from_path(path: &Path) -> Result<Self, ExtractError> {
        let extension = path
            .extension()
            .map(|e| e.to_string_lossy().to_lowercase())
            .unwrap_or_default();

        match extension.as_str() {
            "txt" => Ok(DocumentKind::PlainText),
            "pdf" => Ok(DocumentKind::Pdf),
            "docx" => Ok(DocumentKind::Docx),
            _ => Err(ExtractError::UnsupportedType(extension)),
        }
    }
}

/// Extract the text content of a document.
///
/// Validates existence, extension and size before any parsing happens. A
/// whitespace-only result is returned as-is; blankness is the caller's call.
pub fn extract_text(path: &Path) -> Result<String, ExtractError> {
    if !path.exists() {
        return Err(ExtractError::NotFound(path.to_path_buf()));
    }

    let kind = DocumentKind::from_path(path)?;

    let size = std::fs::metadata(path)?.len();
    if size > MAX_FILE_SIZE {
        return Err(ExtractError::TooLarge {
            path: path.to_path_buf(),
            size,
        });
    }

    match kind {
        DocumentKind::PlainText => Ok(std::fs::read_to_string(path)?),
        DocumentKind::Pdf => extract_pdf(path),
        DocumentKind::Docx => extract_docx(path),
    }
}

/// Extract text per page, skipping pages with no extractable text
fn extract_pdf(path: &Path) -> Result<String, ExtractError> {
    let pages = pdf_extract::extract_text_by_pages(path)
        .map_err(|e| ExtractError::PdfError(e.to_string()))?;

    let text = pages
        .iter()
        .map(|p| p.trim())
        .filter(|p| !p.is_empty())
        .collect::<Vec<_>>()
        .join("\n");

    Ok(text)
}

/// Extract paragraph text from a DOCX package, skipping blank paragraphs.
///
/// A DOCX file is a zip archive; the body lives in `word/document.xml` with
/// runs of text inside `w:t` elements, grouped into `w:p` paragraphs.
fn extract_docx(path: &Path) -> Result<String, ExtractError> {
    let file = File::open(path)?;
    let mut archive =
        zip::ZipArchive::new(file).map_err(|e| ExtractError::DocxError(e.to_string()))?;

    let mut xml = String::new();
    archive
        .by_name("word/document.xml")
        .map_err(|e| ExtractError::DocxError(e.to_string()))?
        .read_to_string(&mut xml)?;

    let mut reader = Reader::from_str(&xml);
    let mut paragraphs: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut in_text_run = false;

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) if e.local_name().as_ref() == b"t" => in_text_run = true,
            Ok(Event::Text(t)) if in_text_run => {
                let unescaped = t
                    .xml_content()
                    .map_err(|e| ExtractError::DocxError(e.to_string()))?;
                current.push_str(&unescaped);
            }
            Ok(Event::End(e)) => match e.local_name().as_ref() {
                b"t" => in_text_run = false,
                b"p" => {
                    if !current.trim().is_empty() {
                        paragraphs.push(std::mem::take(&mut current));
                    } else {
                        current.clear();
                    }
                }
                _ => {}
            },
            Ok(Event::Eof) => break,
            Err(e) => return Err(ExtractError::DocxError(e.to_string())),
            _ => {}
        }
    }

    Ok(paragraphs.join("\n"))
}
