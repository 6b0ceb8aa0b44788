use crate::session::SessionDocument;

pub const RESUME_HEADER: &str = "=== Resume ===";
pub const COVER_LETTER_HEADER: &str = "=== Cover Letter ===";

/// Plain-text export: both bodies verbatim under labeled headers.
pub fn export_text(doc: &SessionDocument) -> String {
    format!(
        "{RESUME_HEADER}\n{}\n\n{COVER_LETTER_HEADER}\n{}\n",
        doc.resume, doc.cover_letter
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_has_both_headers() {
        let text = export_text(&SessionDocument::default());
        assert!(text.starts_with(RESUME_HEADER));
        assert!(text.contains(COVER_LETTER_HEADER));
    }

    #[test]
    fn test_bodies_are_verbatim() {
        let doc = SessionDocument {
            resume: "# Jane Doe\n<b>SQL</b>".to_string(),
            cover_letter: "Dear Hiring Manager,".to_string(),
        };
        assert_eq!(
            export_text(&doc),
            "=== Resume ===\n# Jane Doe\n<b>SQL</b>\n\n=== Cover Letter ===\nDear Hiring Manager,\n"
        );
    }

    #[test]
    fn test_repeated_export_is_byte_identical() {
        let doc = SessionDocument {
            resume: "SAMPLE RESUME".to_string(),
            cover_letter: "SAMPLE LETTER".to_string(),
        };
        assert_eq!(export_text(&doc).into_bytes(), export_text(&doc).into_bytes());
    }
}
