use crate::export::markup::render_html;
use crate::session::SessionDocument;

/// Standalone HTML document with both sections rendered from markdown.
pub fn export_html(doc: &SessionDocument) -> String {
    let resume = render_html(&doc.resume);
    let cover_letter = render_html(&doc.cover_letter);

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>Resume and Cover Letter</title>
<style>
  body {{ font-family: Helvetica, Arial, sans-serif; max-width: 800px; margin: 40px auto; padding: 0 24px; color: #222; line-height: 1.5; }}
  h1 {{ font-size: 1.6em; border-bottom: 2px solid #333; padding-bottom: 4px; }}
  h2 {{ font-size: 1.25em; margin-top: 1.4em; }}
  section {{ margin-bottom: 48px; }}
  ul {{ padding-left: 1.2em; }}
  @media print {{ section + section {{ page-break-before: always; }} }}
</style>
</head>
<body>
<section id="resume">
<h1>Resume</h1>
{resume}</section>
<section id="cover-letter">
<h1>Cover Letter</h1>
{cover_letter}</section>
</body>
</html>
"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_is_valid_shell() {
        let html = export_html(&SessionDocument::default());
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<h1>Resume</h1>"));
        assert!(html.contains("<h1>Cover Letter</h1>"));
        assert!(html.trim_end().ends_with("</html>"));
    }

    #[test]
    fn test_bodies_are_rendered_from_markdown() {
        let doc = SessionDocument {
            resume: "## Skills\n\n- SQL\n- Python".to_string(),
            cover_letter: "Dear Hiring Manager,".to_string(),
        };
        let html = export_html(&doc);
        assert!(html.contains("<h2>Skills</h2>"));
        assert!(html.contains("<li>Python</li>"));
        assert!(html.contains("<p>Dear Hiring Manager,</p>"));
    }

    #[test]
    fn test_braces_in_content_survive() {
        let doc = SessionDocument {
            resume: "Used {placeholders} in templates".to_string(),
            cover_letter: String::new(),
        };
        assert!(export_html(&doc).contains("{placeholders}"));
    }
}
