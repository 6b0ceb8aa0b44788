//! Axum route handlers for the form and generation flow.

use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    Form,
};
use axum_extra::extract::cookie::SignedCookieJar;
use tracing::{error, info};

use crate::errors::AppError;
use crate::generation::generator::generate_documents;
use crate::pages::{error_page, form_page, result_page};
use crate::profile::{Profile, ProfileForm};
use crate::session::SessionId;
use crate::state::AppState;

/// GET /
pub async fn handle_form() -> Html<String> {
    Html(form_page())
}

/// POST / (and POST /generate)
///
/// Validates the profile, runs both generations, and stores the pair in the
/// caller's session. Missing required fields are a 400 before any provider
/// call. A provider failure is shown inline and leaves the session untouched.
pub async fn handle_generate(
    State(state): State<AppState>,
    jar: SignedCookieJar,
    Form(form): Form<ProfileForm>,
) -> Result<Response, AppError> {
    let profile = Profile::collect(form)?;
    let (jar, session_id) = SessionId::resolve(jar);

    let doc = match generate_documents(state.llm.as_ref(), &state.params, &profile).await {
        Ok(doc) => doc,
        Err(e) => {
            error!("Generation failed: {e}");
            return Ok((StatusCode::BAD_GATEWAY, jar, Html(error_page(&e.to_string())))
                .into_response());
        }
    };

    doc.save(state.sessions.as_ref(), session_id.as_str()).await?;
    info!("Stored generated documents in session");

    Ok((jar, Html(result_page(&doc))).into_response())
}
