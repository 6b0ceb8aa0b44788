// Prompt templates for the two generated documents.
// Placeholders are `{field}` tokens replaced verbatim by `build_prompts`.

use crate::profile::Profile;

/// Rendered in place of any optional field the applicant left blank.
pub const NOT_PROVIDED: &str = "N/A";

/// Resume prompt template.
/// Replace: {name}, {role}, {skills}, {company}, {experience},
///          {email}, {phone}, {linkedin}, {github}, {address}
pub const RESUME_PROMPT_TEMPLATE: &str = r#"Create a professional resume for {name} applying for a {role} role at {company}.

Highlight skills: {skills}.

Experience summary provided by the applicant (expand it into concise achievement bullets; if it is missing, write a short placeholder experience section the applicant can fill in):
{experience}

Contact details for the header:
- Email: {email}
- Phone: {phone}
- LinkedIn: {linkedin}
- GitHub: {github}
- Address: {address}

Structure the resume with these sections: Summary, Skills, Experience.
Quantify achievements with concrete metrics where the summary supports them.
Leave out any contact line whose value is missing."#;

/// Cover letter prompt template.
/// Replace: {name}, {role}, {skills}, {company}, {experience},
///          {email}, {phone}, {linkedin}, {github}, {address}
pub const COVER_LETTER_PROMPT_TEMPLATE: &str = r#"Write a one-page cover letter for {name} applying for a {role} role at {company}.

Open with "Dear Hiring Manager," and explain why the applicant's skills in {skills} make them a strong fit.

Background to draw on:
{experience}

Applicant contact details (use them in the closing block only when present):
- Email: {email}
- Phone: {phone}
- LinkedIn: {linkedin}
- GitHub: {github}
- Address: {address}

Keep it to three or four short paragraphs, express eagerness to contribute measurable impact, and sign off with "Sincerely," followed by {name}."#;

/// Builds the `(resume, cover_letter)` prompt pair for a profile.
///
/// Pure: the same profile always yields byte-identical prompts.
pub fn build_prompts(profile: &Profile) -> (String, String) {
    (
        fill_template(RESUME_PROMPT_TEMPLATE, profile),
        fill_template(COVER_LETTER_PROMPT_TEMPLATE, profile),
    )
}

/// Single left-to-right pass: substituted values are never rescanned, so
/// applicant text containing `{field}` lands in the prompt verbatim.
fn fill_template(template: &str, profile: &Profile) -> String {
    let mut out = String::with_capacity(template.len() + 256);
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        match after.find('}').and_then(|close| {
            field_value(&after[..close], profile).map(|value| (close, value))
        }) {
            Some((close, value)) => {
                out.push_str(value);
                rest = &after[close + 1..];
            }
            None => {
                out.push('{');
                rest = after;
            }
        }
    }
    out.push_str(rest);
    out
}

fn field_value<'a>(field: &str, profile: &'a Profile) -> Option<&'a str> {
    let value = match field {
        "name" => profile.name.as_str(),
        "role" => profile.role.as_str(),
        "skills" => profile.skills.as_str(),
        "company" => or_na(&profile.company),
        "experience" => or_na(&profile.experience),
        "email" => or_na(&profile.contact.email),
        "phone" => or_na(&profile.contact.phone),
        "linkedin" => or_na(&profile.contact.linkedin),
        "github" => or_na(&profile.contact.github),
        "address" => or_na(&profile.contact.address),
        _ => return None,
    };
    Some(value)
}

fn or_na(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or(NOT_PROVIDED)
}
