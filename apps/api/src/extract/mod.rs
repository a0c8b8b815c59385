//! Document extraction: raw uploaded bytes → plain text.
//!
//! Two document kinds are accepted per request: the profile PDF and the
//! plain-text summary. The filename extension is a policy check only; the
//! byte content is never sniffed to guess a format.

use std::fmt;

use encoding_rs::Encoding;
use thiserror::Error;

/// The role a document plays in a chat request, with its expected extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Profile,
    Summary,
}

impl DocumentKind {
    pub fn expected_extension(&self) -> &'static str {
        match self {
            DocumentKind::Profile => "pdf",
            DocumentKind::Summary => "txt",
        }
    }
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocumentKind::Profile => write!(f, "profile"),
            DocumentKind::Summary => write!(f, "summary"),
        }
    }
}

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("expected a .{expected} file for the {kind} document, but got '{filename}'")]
    Format {
        kind: DocumentKind,
        expected: &'static str,
        filename: String,
    },

    #[error("could not extract text from '{filename}': {reason}")]
    Extraction { filename: String, reason: String },
}

/// Candidate encodings tried in order when decoding the summary file.
/// WHATWG folds latin-1 / cp1252 / iso-8859-1 into windows-1252, so the
/// original's four-entry list collapses to these two.
static CANDIDATE_ENCODINGS: &[&Encoding] = &[encoding_rs::UTF_8, encoding_rs::WINDOWS_1252];

/// Converts the raw bytes of an uploaded document into plain text.
///
/// The extension check always runs first; a mismatch fails before any parsing
/// is attempted. Profile PDFs that cannot be parsed, or that yield only
/// whitespace, fail with [`ExtractError::Extraction`]. Summary files are
/// decoded best-effort and never fail past the extension check.
pub fn extract(kind: DocumentKind, bytes: &[u8], filename: &str) -> Result<String, ExtractError> {
    let expected = kind.expected_extension();
    if !has_extension(filename, expected) {
        return Err(ExtractError::Format {
            kind,
            expected,
            filename: filename.to_string(),
        });
    }

    match kind {
        DocumentKind::Profile => extract_pdf_text(bytes, filename),
        DocumentKind::Summary => Ok(decode_text(bytes)),
    }
}

fn has_extension(filename: &str, extension: &str) -> bool {
    let lowered = filename.to_ascii_lowercase();
    lowered.len() > extension.len() + 1 && lowered.ends_with(&format!(".{extension}"))
}

/// Parses the bytes as a PDF and concatenates the text of every page in page
/// order. Whitespace between pages is kept as the parser emits it.
fn extract_pdf_text(bytes: &[u8], filename: &str) -> Result<String, ExtractError> {
    let text =
        pdf_extract::extract_text_from_mem(bytes).map_err(|e| ExtractError::Extraction {
            filename: filename.to_string(),
            reason: e.to_string(),
        })?;

    if text.trim().is_empty() {
        return Err(ExtractError::Extraction {
            filename: filename.to_string(),
            reason: "document contains no extractable text".to_string(),
        });
    }

    Ok(text)
}

/// Decodes text bytes using the first candidate encoding that accepts them,
/// falling back to lossy UTF-8 replacement. Summary files are assumed always
/// representable as text, so this never fails.
fn decode_text(bytes: &[u8]) -> String {
    for encoding in CANDIDATE_ENCODINGS {
        if let Some(decoded) = encoding.decode_without_bom_handling_and_without_replacement(bytes) {
            return decoded.into_owned();
        }
    }
    String::from_utf8_lossy(bytes).into_owned()
}

#[cfg(test)]
pub(crate) mod fixtures {
    /// Builds a minimal one-page PDF with `text` drawn in Helvetica.
    /// Offsets in the xref table are computed, not hardcoded, so the fixture
    /// stays valid if the content changes. `text` must not contain `(`, `)`
    /// or `\`.
    pub fn minimal_pdf(text: &str) -> Vec<u8> {
        let content = format!("BT /F1 24 Tf 72 720 Td ({text}) Tj ET");
        let objects = [
            "<< /Type /Catalog /Pages 2 0 R >>".to_string(),
            "<< /Type /Pages /Kids [3 0 R] /Count 1 >>".to_string(),
            "<< /Type /Page /Parent 2 0 R /MediaBox [0 0 612 792] /Contents 4 0 R \
             /Resources << /Font << /F1 5 0 R >> >> >>"
                .to_string(),
            format!(
                "<< /Length {} >>\nstream\n{content}\nendstream",
                content.len()
            ),
            "<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica >>".to_string(),
        ];

        let mut pdf = String::from("%PDF-1.4\n");
        let mut offsets = Vec::new();
        for (i, object) in objects.iter().enumerate() {
            offsets.push(pdf.len());
            pdf.push_str(&format!("{} 0 obj\n{object}\nendobj\n", i + 1));
        }
        let xref_offset = pdf.len();
        pdf.push_str(&format!("xref\n0 {}\n0000000000 65535 f \n", objects.len() + 1));
        for offset in offsets {
            pdf.push_str(&format!("{offset:010} 00000 n \n"));
        }
        pdf.push_str(&format!(
            "trailer\n<< /Size {} /Root 1 0 R >>\nstartxref\n{xref_offset}\n%%EOF",
            objects.len() + 1
        ));
        pdf.into_bytes()
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::minimal_pdf;
    use super::*;

    #[test]
    fn profile_with_wrong_extension_is_a_format_error() {
        let err = extract(DocumentKind::Profile, b"irrelevant", "resume.docx").unwrap_err();
        assert!(matches!(err, ExtractError::Format { .. }));
        let message = err.to_string();
        assert!(message.contains(".pdf"));
        assert!(message.contains("resume.docx"));
    }

    #[test]
    fn summary_with_wrong_extension_is_a_format_error() {
        let err = extract(DocumentKind::Summary, b"# notes", "summary.md").unwrap_err();
        assert!(matches!(err, ExtractError::Format { .. }));
        assert!(err.to_string().contains(".txt"));
    }

    #[test]
    fn extension_check_runs_before_parsing() {
        // Garbage bytes with a mismatched extension must report the extension,
        // not a parse failure.
        let err = extract(DocumentKind::Profile, b"\xff\xfe\x00", "notes.md").unwrap_err();
        assert!(matches!(err, ExtractError::Format { .. }));
    }

    #[test]
    fn extension_match_is_case_insensitive() {
        let text = extract(DocumentKind::Summary, b"hello", "SUMMARY.TXT").unwrap();
        assert_eq!(text, "hello");
    }

    #[test]
    fn bare_extension_is_not_a_valid_filename() {
        let err = extract(DocumentKind::Summary, b"hello", ".txt").unwrap_err();
        assert!(matches!(err, ExtractError::Format { .. }));
    }

    #[test]
    fn corrupt_pdf_is_an_extraction_error() {
        let err = extract(DocumentKind::Profile, b"this is not a pdf", "profile.pdf").unwrap_err();
        assert!(matches!(err, ExtractError::Extraction { .. }));
        assert!(err.to_string().contains("profile.pdf"));
    }

    #[test]
    fn empty_pdf_buffer_is_an_extraction_error() {
        let err = extract(DocumentKind::Profile, b"", "profile.pdf").unwrap_err();
        assert!(matches!(err, ExtractError::Extraction { .. }));
    }

    #[test]
    fn valid_pdf_yields_its_text() {
        let pdf = minimal_pdf("Jane Doe Senior Engineer at Acme");
        let text = extract(DocumentKind::Profile, &pdf, "profile.pdf").unwrap();
        assert!(text.contains("Jane Doe"));
        assert!(text.contains("Acme"));
    }

    #[test]
    fn utf8_summary_round_trips() {
        let original = "Jane has 10 years of experience — distributed systems, café included.";
        let text =
            extract(DocumentKind::Summary, original.as_bytes(), "summary.txt").unwrap();
        assert_eq!(text, original);
    }

    #[test]
    fn non_utf8_summary_still_decodes() {
        // 0xE9 is 'é' in windows-1252 but invalid as a standalone UTF-8 byte.
        let bytes = b"r\xe9sum\xe9 highlights";
        let text = extract(DocumentKind::Summary, bytes, "summary.txt").unwrap();
        assert_eq!(text, "résumé highlights");
    }

    #[test]
    fn empty_summary_is_allowed() {
        let text = extract(DocumentKind::Summary, b"", "summary.txt").unwrap();
        assert_eq!(text, "");
    }
}
