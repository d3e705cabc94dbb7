//! Text Extractor: turns an uploaded document into raw text.
//!
//! Decoders are tried in order and the first one yielding non-blank text wins:
//! plain UTF-8 (text files uploaded with a `.pdf` name), then `pdf-extract`,
//! then `lopdf` for documents the primary decoder cannot parse.

use std::fmt;
use std::io;
use std::panic;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, info, warn};

#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("File does not exist: {0}")]
    Missing(PathBuf),

    #[error("File is empty: {0}")]
    EmptyFile(PathBuf),

    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("No decoder could extract text from {0}")]
    NoText(PathBuf),

    #[error("Extraction task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

impl ExtractionError {
    /// Message shown to the caller. The variant detail stays in the logs.
    pub fn user_message(&self) -> &'static str {
        "Could not extract text from the uploaded file"
    }
}

const PDF_MAGIC: &[u8] = b"%PDF-";

type DecodeResult = Result<Vec<String>, String>;

struct Decoder {
    name: &'static str,
    decode: fn(&[u8]) -> DecodeResult,
}

const DECODERS: &[Decoder] = &[
    Decoder {
        name: "plain-text",
        decode: decode_plain_text,
    },
    Decoder {
        name: "pdf-extract",
        decode: decode_pdf_extract,
    },
    Decoder {
        name: "lopdf",
        decode: decode_lopdf,
    },
];

/// Extracts text from the document at `path`.
///
/// Never returns blank text: a document that every decoder fails on, or that
/// only yields whitespace, is reported as `ExtractionError::NoText`.
pub fn extract_text(path: &Path) -> Result<String, ExtractionError> {
    debug!("Opening file: {}", path.display());

    let metadata = std::fs::metadata(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => ExtractionError::Missing(path.to_path_buf()),
        _ => ExtractionError::Io {
            path: path.to_path_buf(),
            source,
        },
    })?;

    debug!("File size: {} bytes", metadata.len());
    if metadata.len() == 0 {
        return Err(ExtractionError::EmptyFile(path.to_path_buf()));
    }

    let bytes = std::fs::read(path).map_err(|source| ExtractionError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    extract_text_from_bytes(&bytes).ok_or_else(|| ExtractionError::NoText(path.to_path_buf()))
}

/// Runs the decoder chain over in-memory document bytes.
pub fn extract_text_from_bytes(bytes: &[u8]) -> Option<String> {
    for decoder in DECODERS {
        debug!("Attempting to decode with {}", decoder.name);
        let pages = match (decoder.decode)(bytes) {
            Ok(pages) => pages,
            Err(e) => {
                debug!("{} could not decode document: {}", decoder.name, e);
                continue;
            }
        };

        let mut text = String::new();
        for (index, page_text) in pages.iter().enumerate() {
            debug!(
                "Extracted {} characters from page {} with {}",
                page_text.len(),
                index + 1,
                decoder.name
            );
            text.push_str(page_text);
        }

        if text.trim().is_empty() {
            warn!("{} produced no text, trying next decoder", decoder.name);
            continue;
        }

        info!(
            "Extracted {} characters from {} page(s) with {}",
            text.len(),
            pages.len(),
            decoder.name
        );
        return Some(text);
    }

    None
}

fn decode_plain_text(bytes: &[u8]) -> DecodeResult {
    if bytes.starts_with(PDF_MAGIC) {
        return Err("PDF header present".to_string());
    }
    let text = std::str::from_utf8(bytes).map_err(|e| format!("not UTF-8: {e}"))?;
    if text.chars().any(|c| c.is_control() && !c.is_whitespace()) {
        return Err("contains control characters".to_string());
    }
    Ok(vec![text.to_string()])
}

fn decode_pdf_extract(bytes: &[u8]) -> DecodeResult {
    // pdf-extract panics on some malformed fonts and encodings.
    panic::catch_unwind(|| pdf_extract::extract_text_from_mem_by_pages(bytes))
        .map_err(|_| "decoder panicked".to_string())?
        .map_err(|e| e.to_string())
}

fn decode_lopdf(bytes: &[u8]) -> DecodeResult {
    let doc = lopdf::Document::load_mem(bytes).map_err(|e| e.to_string())?;
    let page_numbers: Vec<u32> = doc.get_pages().keys().copied().collect();
    decode_all_pages(&page_numbers, |page_num| doc.extract_text(&[page_num]))
}

/// Decodes every page or none: the first failing page fails the whole decoder.
fn decode_all_pages<E: fmt::Display>(
    page_numbers: &[u32],
    mut decode_page: impl FnMut(u32) -> Result<String, E>,
) -> DecodeResult {
    page_numbers
        .iter()
        .map(|&page_num| {
            decode_page(page_num).map_err(|e| format!("page {page_num} failed: {e}"))
        })
        .collect()
}
