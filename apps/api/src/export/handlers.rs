//! Axum route handlers for downloads.

use axum::extract::{Path, State};
use axum_extra::extract::cookie::SignedCookieJar;
use tracing::debug;

use crate::errors::AppError;
use crate::export::{export_document, export_image, ExportArtifact, ExportFormat};
use crate::session::{SessionDocument, SessionId};
use crate::state::AppState;

/// GET /download/:format
///
/// Renders the caller's session document. A caller without a session (or that
/// never generated) gets an empty document of the requested type.
pub async fn handle_download(
    State(state): State<AppState>,
    jar: SignedCookieJar,
    Path(format): Path<ExportFormat>,
) -> Result<ExportArtifact, AppError> {
    if format == ExportFormat::Image {
        return export_image(&state.config.resume_image_path).await;
    }

    let doc = match SessionId::current(&jar) {
        Some(id) => SessionDocument::load(state.sessions.as_ref(), id.as_str()).await?,
        None => SessionDocument::default(),
    };
    debug!("Exporting {:?} (empty: {})", format, doc.is_empty());

    export_document(format, &doc).await
}
