// Resume / cover letter generation.
// Implements: prompt building, the two-call generation pipeline, form handlers.
// All provider calls go through llm_client.

pub mod generator;
pub mod handlers;
pub mod prompts;
