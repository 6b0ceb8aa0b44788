use std::io::Cursor;

use docx_rs::{BreakType, Docx, Paragraph, Run};

use crate::errors::AppError;
use crate::session::SessionDocument;

// Half-points, as Word measures run size.
const HEADING_SIZE: usize = 32;
const BODY_SIZE: usize = 22;

/// Word document with a "Resume" and a "Cover Letter" section. Each body is one
/// paragraph of raw text; newlines become line breaks, markup is not interpreted.
pub fn export_docx(doc: &SessionDocument) -> Result<Vec<u8>, AppError> {
    let docx = Docx::new()
        .add_paragraph(heading("Resume"))
        .add_paragraph(body(&doc.resume))
        .add_paragraph(heading("Cover Letter"))
        .add_paragraph(body(&doc.cover_letter));

    let mut buffer = Cursor::new(Vec::new());
    docx.build()
        .pack(&mut buffer)
        .map_err(|e| AppError::Export(format!("Failed to pack DOCX: {e}")))?;
    Ok(buffer.into_inner())
}

fn heading(text: &str) -> Paragraph {
    Paragraph::new().add_run(Run::new().add_text(text).bold().size(HEADING_SIZE))
}

fn body(text: &str) -> Paragraph {
    let mut run = Run::new().size(BODY_SIZE);
    for (i, line) in xml_safe(text).split('\n').enumerate() {
        if i > 0 {
            run = run.add_break(BreakType::TextWrapping);
        }
        run = run.add_text(line);
    }
    Paragraph::new().add_run(run)
}

/// Drops characters XML 1.0 cannot carry.
fn xml_safe(text: &str) -> String {
    text.replace("\r\n", "\n")
        .chars()
        .filter(|c| !c.is_control() || *c == '\n' || *c == '\t')
        .collect()
}

#[cfg(test)]
mod tests {
    use std::io::Read;

    use super::*;

    fn document_xml(bytes: Vec<u8>) -> String {
        let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).unwrap();
        let mut xml = String::new();
        archive
            .by_name("word/document.xml")
            .unwrap()
            .read_to_string(&mut xml)
            .unwrap();
        xml
    }

    #[test]
    fn test_empty_document_is_valid_docx() {
        let bytes = export_docx(&SessionDocument::default()).unwrap();
        assert!(bytes.starts_with(b"PK"));
        let xml = document_xml(bytes);
        assert!(xml.contains("Resume"));
        assert!(xml.contains("Cover Letter"));
    }

    #[test]
    fn test_body_is_raw_text() {
        let doc = SessionDocument {
            resume: "## Skills\nSQL & Python".to_string(),
            cover_letter: "Dear Hiring Manager,".to_string(),
        };
        let xml = document_xml(export_docx(&doc).unwrap());
        assert!(xml.contains("## Skills"));
        assert!(xml.contains("SQL &amp;"));
        assert!(xml.contains("Dear Hiring Manager,"));
    }

    #[test]
    fn test_xml_safe_strips_control_characters() {
        assert_eq!(xml_safe("a\u{0007}b\r\nc\td"), "ab\nc\td");
    }
}
