//! Document intake.
//!
//! Both input channels (the path field and native drag-and-drop) converge
//! here: one loader, one normalized `SourceDocument`. Content and size
//! validation belong to the service; intake only checks that the file can
//! be read and labels it with a MIME type from the extension.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use tracing::info;

/// Extensions the picker advertises. Anything else still loads and is
/// labeled `application/octet-stream` for the service to judge.
pub const ACCEPTED_EXTENSIONS: [&str; 3] = ["pdf", "txt", "docx"];

const MIME_PDF: &str = "application/pdf";
const MIME_TEXT: &str = "text/plain";
const MIME_DOCX: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";
const MIME_FALLBACK: &str = "application/octet-stream";

/// The single active document: raw bytes plus upload metadata. Replaced
/// wholesale on every selection, never mutated in place.
#[derive(Debug, Clone, PartialEq)]
pub struct SourceDocument {
    pub file_name: String,
    pub mime_type: &'static str,
    pub bytes: Vec<u8>,
}

/// MIME label for a path, from the extension allow-list.
pub fn mime_for_path(path: &Path) -> &'static str {
    let Some(extension) = path.extension().and_then(|ext| ext.to_str()) else {
        return MIME_FALLBACK;
    };
    match extension.to_ascii_lowercase().as_str() {
        "pdf" => MIME_PDF,
        "txt" => MIME_TEXT,
        "docx" => MIME_DOCX,
        _ => MIME_FALLBACK,
    }
}

/// Read a document from disk into a normalized `SourceDocument`.
pub fn load_document(path: &Path) -> Result<SourceDocument> {
    let bytes =
        fs::read(path).with_context(|| format!("Reading document {}", path.display()))?;
    let file_name = path
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or("document")
        .to_string();
    let mime_type = mime_for_path(path);
    info!(
        file = %file_name,
        mime = mime_type,
        bytes = bytes.len(),
        "Loaded source document"
    );
    Ok(SourceDocument {
        file_name,
        mime_type,
        bytes,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn mime_labels_follow_the_allow_list() {
        assert_eq!(mime_for_path(Path::new("report.pdf")), MIME_PDF);
        assert_eq!(mime_for_path(Path::new("notes.TXT")), MIME_TEXT);
        assert_eq!(mime_for_path(Path::new("thesis.docx")), MIME_DOCX);
        assert_eq!(mime_for_path(Path::new("archive.tar.gz")), MIME_FALLBACK);
        assert_eq!(mime_for_path(Path::new("no_extension")), MIME_FALLBACK);
    }

    #[test]
    fn load_document_reads_bytes_and_name() {
        let path = PathBuf::from(format!(
            "{}/podify-intake-test-{}.txt",
            std::env::temp_dir().display(),
            std::process::id()
        ));
        fs::write(&path, b"plain text body").expect("write temp file");

        let document = load_document(&path).expect("document loads");
        fs::remove_file(&path).ok();

        assert_eq!(document.bytes, b"plain text body");
        assert_eq!(document.mime_type, MIME_TEXT);
        assert!(document.file_name.starts_with("podify-intake-test-"));
    }

    #[test]
    fn load_document_fails_for_missing_file() {
        let missing = Path::new("/nonexistent/podify/definitely-not-here.pdf");
        assert!(load_document(missing).is_err());
    }
}
