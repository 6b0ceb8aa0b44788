// Exporters: render the session document into downloadable files.
// Every document exporter is a pure function of the SessionDocument; an empty
// document yields an empty-but-valid file.

pub mod docx;
pub mod font_metrics;
pub mod handlers;
pub mod html;
pub mod image;
pub mod markup;
pub mod pdf;
pub mod text;

use std::path::Path;

use axum::{
    http::header,
    response::{IntoResponse, Response},
};
use bytes::Bytes;
use serde::Deserialize;

use crate::errors::AppError;
use crate::session::SessionDocument;

/// Download formats, as they appear in `/download/:format`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    Pdf,
    Word,
    Txt,
    Html,
    Image,
}

impl ExportFormat {
    pub fn filename(&self) -> &'static str {
        match self {
            ExportFormat::Pdf => "resume_and_cover_letter.pdf",
            ExportFormat::Word => "resume_and_cover_letter.docx",
            ExportFormat::Txt => "resume_and_cover_letter.txt",
            ExportFormat::Html => "resume_and_cover_letter.html",
            ExportFormat::Image => "resume_preview.png",
        }
    }

    pub fn content_type(&self) -> &'static str {
        match self {
            ExportFormat::Pdf => "application/pdf",
            ExportFormat::Word => {
                "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
            }
            ExportFormat::Txt => "text/plain; charset=utf-8",
            ExportFormat::Html => "text/html; charset=utf-8",
            ExportFormat::Image => "image/png",
        }
    }
}

/// A rendered file ready to be sent as an attachment.
#[derive(Debug, Clone)]
pub struct ExportArtifact {
    pub filename: &'static str,
    pub content_type: &'static str,
    pub body: Bytes,
}

impl ExportArtifact {
    fn new(format: ExportFormat, body: impl Into<Bytes>) -> Self {
        Self {
            filename: format.filename(),
            content_type: format.content_type(),
            body: body.into(),
        }
    }
}

impl IntoResponse for ExportArtifact {
    fn into_response(self) -> Response {
        (
            [
                (header::CONTENT_TYPE, self.content_type.to_string()),
                (
                    header::CONTENT_DISPOSITION,
                    format!("attachment; filename=\"{}\"", self.filename),
                ),
            ],
            self.body,
        )
            .into_response()
    }
}

/// Renders the session document in a document format.
///
/// PDF typesetting runs on the blocking pool. `Image` does not depend on the
/// document; use `export_image`.
pub async fn export_document(
    format: ExportFormat,
    doc: &SessionDocument,
) -> Result<ExportArtifact, AppError> {
    let body: Vec<u8> = match format {
        ExportFormat::Txt => text::export_text(doc).into_bytes(),
        ExportFormat::Html => html::export_html(doc).into_bytes(),
        ExportFormat::Word => docx::export_docx(doc)?,
        ExportFormat::Pdf => {
            let owned = doc.clone();
            tokio::task::spawn_blocking(move || pdf::export_pdf(&owned))
                .await
                .map_err(|e| {
                    AppError::Internal(anyhow::anyhow!("spawn_blocking failed in PDF export: {e}"))
                })?
                .map_err(|e| AppError::Export(format!("Failed to render PDF: {e}")))?
        }
        ExportFormat::Image => {
            return Err(AppError::Internal(anyhow::anyhow!(
                "image export is served from a static file, not the session document"
            )))
        }
    };
    Ok(ExportArtifact::new(format, body))
}

/// Serves the static image at `path` unmodified.
pub async fn export_image(path: &Path) -> Result<ExportArtifact, AppError> {
    let body = image::read_image(path).await?;
    Ok(ExportArtifact {
        filename: ExportFormat::Image.filename(),
        content_type: image::image_content_type(path),
        body: body.into(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_every_document_format_accepts_empty_document() {
        let empty = SessionDocument::default();
        for format in [
            ExportFormat::Pdf,
            ExportFormat::Word,
            ExportFormat::Txt,
            ExportFormat::Html,
        ] {
            let artifact = export_document(format, &empty).await.unwrap();
            assert!(!artifact.body.is_empty(), "{format:?} produced no bytes");
            assert_eq!(artifact.content_type, format.content_type());
        }
    }

    #[tokio::test]
    async fn test_txt_export_is_idempotent() {
        let doc = SessionDocument {
            resume: "SAMPLE RESUME".to_string(),
            cover_letter: "SAMPLE LETTER".to_string(),
        };
        let first = export_document(ExportFormat::Txt, &doc).await.unwrap();
        let second = export_document(ExportFormat::Txt, &doc).await.unwrap();
        assert_eq!(first.body, second.body);
    }

    #[test]
    fn test_format_parses_from_path_segment() {
        let format: ExportFormat = serde_json::from_str("\"word\"").unwrap();
        assert_eq!(format, ExportFormat::Word);
        assert!(serde_json::from_str::<ExportFormat>("\"docx\"").is_err());
    }

    #[test]
    fn test_attachment_headers() {
        let artifact = ExportArtifact::new(ExportFormat::Txt, "hello");
        let response = artifact.into_response();
        assert_eq!(
            response.headers()[header::CONTENT_DISPOSITION],
            "attachment; filename=\"resume_and_cover_letter.txt\""
        );
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "text/plain; charset=utf-8"
        );
    }
}
