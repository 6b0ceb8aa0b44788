//! Document generation: orchestrates the two provider calls.
//!
//! Flow: build_prompts → resume call → cover letter call → placeholder
//!       substitution → SessionDocument.
//!
//! The caller persists the result; nothing is written here, so a failure in
//! either call leaves the previous session contents untouched.

use tracing::info;

use crate::errors::AppError;
use crate::generation::prompts::build_prompts;
use crate::llm_client::{GenerationParams, GenerationRequest, TextGenerator};
use crate::profile::Profile;
use crate::session::SessionDocument;

pub const EMPTY_RESUME_PLACEHOLDER: &str = "No resume content generated.";
pub const EMPTY_COVER_LETTER_PLACEHOLDER: &str = "No cover letter content generated.";

/// Generates the resume and cover letter for a profile.
///
/// The calls are sequential; a provider error from either aborts the whole
/// generation. Empty completions degrade to fixed placeholders.
pub async fn generate_documents(
    llm: &dyn TextGenerator,
    params: &GenerationParams,
    profile: &Profile,
) -> Result<SessionDocument, AppError> {
    let (resume_prompt, cover_letter_prompt) = build_prompts(profile);

    info!("Generating resume (model: {})", params.model);
    let resume = llm
        .generate(&GenerationRequest::new(resume_prompt, params))
        .await?;

    info!("Generating cover letter (model: {})", params.model);
    let cover_letter = llm
        .generate(&GenerationRequest::new(cover_letter_prompt, params))
        .await?;

    info!(
        "Generation finished: resume {} chars, cover letter {} chars",
        resume.len(),
        cover_letter.len()
    );

    Ok(SessionDocument {
        resume: or_placeholder(resume, EMPTY_RESUME_PLACEHOLDER),
        cover_letter: or_placeholder(cover_letter, EMPTY_COVER_LETTER_PLACEHOLDER),
    })
}

fn or_placeholder(text: String, placeholder: &str) -> String {
    if text.trim().is_empty() {
        placeholder.to_string()
    } else {
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm_client::mock::ScriptedGenerator;
    use crate::llm_client::LlmError;
    use crate::profile::ContactInfo;

    fn params() -> GenerationParams {
        GenerationParams {
            model: "gpt-test".to_string(),
            max_tokens: 512,
            temperature: 0.7,
        }
    }

    fn jane() -> Profile {
        Profile {
            name: "Jane Doe".to_string(),
            role: "Data Analyst".to_string(),
            skills: "SQL, Python".to_string(),
            company: None,
            experience: None,
            contact: ContactInfo::default(),
        }
    }

    #[tokio::test]
    async fn test_generates_resume_then_cover_letter() {
        let llm = ScriptedGenerator::new(vec![
            Ok("SAMPLE RESUME".to_string()),
            Ok("SAMPLE LETTER".to_string()),
        ]);
        let doc = generate_documents(&llm, &params(), &jane()).await.unwrap();
        assert_eq!(doc.resume, "SAMPLE RESUME");
        assert_eq!(doc.cover_letter, "SAMPLE LETTER");

        let prompts = llm.prompts();
        assert_eq!(prompts.len(), 2);
        assert!(prompts[0].starts_with("Create a professional resume for Jane Doe"));
        assert!(prompts[1].starts_with("Write a one-page cover letter for Jane Doe"));
    }

    #[tokio::test]
    async fn test_empty_content_becomes_placeholder() {
        let llm = ScriptedGenerator::new(vec![Ok(String::new()), Ok("  ".to_string())]);
        let doc = generate_documents(&llm, &params(), &jane()).await.unwrap();
        assert_eq!(doc.resume, EMPTY_RESUME_PLACEHOLDER);
        assert_eq!(doc.cover_letter, EMPTY_COVER_LETTER_PLACEHOLDER);
    }

    #[tokio::test]
    async fn test_second_call_failure_fails_generation() {
        let llm = ScriptedGenerator::new(vec![
            Ok("SAMPLE RESUME".to_string()),
            Err(LlmError::RateLimited { retries: 3 }),
        ]);
        let err = generate_documents(&llm, &params(), &jane()).await.unwrap_err();
        assert!(matches!(err, AppError::Llm(LlmError::RateLimited { .. })));
    }

    #[tokio::test]
    async fn test_first_call_failure_skips_second_call() {
        let llm = ScriptedGenerator::new(vec![Err(LlmError::Api {
            status: 401,
            message: "bad key".to_string(),
        })]);
        assert!(generate_documents(&llm, &params(), &jane()).await.is_err());
        assert_eq!(llm.calls(), 1);
    }
}
