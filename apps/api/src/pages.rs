//! Server-rendered HTML pages for the form surface.

use crate::export::markup::render_html;
use crate::session::SessionDocument;

const STYLE: &str = r#"<style>
  body { font-family: Helvetica, Arial, sans-serif; max-width: 820px; margin: 32px auto; padding: 0 20px; color: #222; }
  label { display: block; margin-top: 12px; font-weight: bold; }
  input, textarea { width: 100%; padding: 6px; box-sizing: border-box; }
  textarea { min-height: 120px; }
  button { margin-top: 18px; padding: 8px 20px; }
  .error { background: #fdecea; border: 1px solid #e0b4b4; color: #8a1f11; padding: 12px; margin: 16px 0; }
  .document { border: 1px solid #ddd; padding: 16px 24px; margin: 16px 0; }
  nav a { margin-right: 14px; }
</style>"#;

fn layout(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n<title>{title}</title>\n{STYLE}\n</head>\n<body>\n{body}</body>\n</html>\n"
    )
}

/// Escapes text for use in HTML element content and quoted attributes.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

const FORM: &str = r#"<form method="post" action="/">
  <label for="name">Full name *</label>
  <input id="name" name="name" required>
  <label for="role">Target role *</label>
  <input id="role" name="role" required>
  <label for="skills">Key skills *</label>
  <input id="skills" name="skills" placeholder="SQL, Python, Tableau" required>
  <label for="company">Company</label>
  <input id="company" name="company">
  <label for="experience_text">Experience summary</label>
  <textarea id="experience_text" name="experience_text"></textarea>
  <label for="email">Email</label>
  <input id="email" name="email" type="email">
  <label for="phone">Phone</label>
  <input id="phone" name="phone">
  <label for="linkedin">LinkedIn</label>
  <input id="linkedin" name="linkedin">
  <label for="github">GitHub</label>
  <input id="github" name="github">
  <label for="address">Address</label>
  <input id="address" name="address">
  <button type="submit">Generate</button>
</form>
"#;

/// GET /, the input form.
pub fn form_page() -> String {
    layout(
        "Resume & Cover Letter Generator",
        &format!("<h1>Resume &amp; Cover Letter Generator</h1>\n{FORM}"),
    )
}

/// The form again, with the provider failure shown inline above it.
pub fn error_page(message: &str) -> String {
    layout(
        "Generation failed",
        &format!(
            "<h1>Resume &amp; Cover Letter Generator</h1>\n<div class=\"error\"><strong>Generation failed.</strong> {}</div>\n{FORM}",
            escape_html(message)
        ),
    )
}

/// The generated pair with download links.
pub fn result_page(doc: &SessionDocument) -> String {
    let body = format!(
        r#"<h1>Your documents</h1>
<nav>
  <a href="/download/pdf">PDF</a>
  <a href="/download/word">Word</a>
  <a href="/download/txt">Text</a>
  <a href="/download/html">HTML</a>
  <a href="/download/image">Image</a>
  <a href="/">Start over</a>
</nav>
<h2>Resume</h2>
<div class="document" id="resume">
{}</div>
<h2>Cover Letter</h2>
<div class="document" id="cover-letter">
{}</div>
"#,
        render_html(&doc.resume),
        render_html(&doc.cover_letter)
    );
    layout("Your documents", &body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_has_every_field() {
        let page = form_page();
        for field in [
            "name",
            "role",
            "skills",
            "company",
            "experience_text",
            "email",
            "phone",
            "linkedin",
            "github",
            "address",
        ] {
            assert!(page.contains(&format!("name=\"{field}\"")), "missing {field}");
        }
    }

    #[test]
    fn test_error_page_escapes_message() {
        let page = error_page("API error (status 401): <bad key>");
        assert!(page.contains("class=\"error\""));
        assert!(page.contains("&lt;bad key&gt;"));
        assert!(!page.contains("<bad key>"));
    }

    #[test]
    fn test_result_page_renders_both_documents() {
        let doc = SessionDocument {
            resume: "SAMPLE RESUME".to_string(),
            cover_letter: "SAMPLE LETTER".to_string(),
        };
        let page = result_page(&doc);
        assert!(page.contains("<p>SAMPLE RESUME</p>"));
        assert!(page.contains("<p>SAMPLE LETTER</p>"));
        assert!(page.contains("href=\"/download/pdf\""));
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html(r#"<a href="x">&'"#), "&lt;a href=&quot;x&quot;&gt;&amp;&#39;");
    }
}
