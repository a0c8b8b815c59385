//! Axum route handler for the persona chat endpoint.

use axum::extract::{Multipart, State};
use axum::Json;
use bytes::Bytes;
use tracing::info;

use crate::chat::{answer_and_evaluate, ChatResponse, PersonaContext};
use crate::errors::AppError;
use crate::extract::{extract, DocumentKind};
use crate::state::AppState;

/// The multipart form fields a chat request must carry.
struct ChatForm {
    question: String,
    name: String,
    profile: (String, Bytes),
    summary: (String, Bytes),
}

/// POST /userchat/chat
///
/// Multipart form: `question` (text), `name` (text), `profile` (.pdf file),
/// `summary` (.txt file). Answers the question as the named persona, then
/// grades the answer against the uploaded documents.
pub async fn handle_chat(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<ChatResponse>, AppError> {
    let form = read_chat_form(multipart).await?;

    let (profile_name, profile_bytes) = &form.profile;
    let (summary_name, summary_bytes) = &form.summary;

    let profile_text = extract(DocumentKind::Profile, profile_bytes, profile_name)?;
    let summary_text = extract(DocumentKind::Summary, summary_bytes, summary_name)?;

    let persona = PersonaContext {
        name: form.name,
        profile_text,
        summary_text,
    };

    info!(name = %persona.name, "Running persona chat pipeline");

    let (answer, verdict) =
        answer_and_evaluate(&state.chat_llm, &state.eval_llm, &persona, &form.question).await?;

    Ok(Json(ChatResponse {
        question: form.question,
        answer_of_question: answer,
        evaluate_answer: verdict,
    }))
}

async fn read_chat_form(mut multipart: Multipart) -> Result<ChatForm, AppError> {
    let mut question = None;
    let mut name = None;
    let mut profile = None;
    let mut summary = None;

    while let Some(field) = multipart.next_field().await? {
        let Some(field_name) = field.name().map(str::to_string) else {
            continue;
        };
        match field_name.as_str() {
            "question" => question = Some(field.text().await?),
            "name" => name = Some(field.text().await?),
            "profile" => {
                let filename = require_filename(field.file_name(), "profile")?;
                profile = Some((filename, field.bytes().await?));
            }
            "summary" => {
                let filename = require_filename(field.file_name(), "summary")?;
                summary = Some((filename, field.bytes().await?));
            }
            _ => {}
        }
    }

    Ok(ChatForm {
        question: question.ok_or_else(|| missing("question"))?,
        name: name.ok_or_else(|| missing("name"))?,
        profile: profile.ok_or_else(|| missing("profile"))?,
        summary: summary.ok_or_else(|| missing("summary"))?,
    })
}

fn missing(field: &str) -> AppError {
    AppError::Validation(format!("missing multipart field `{field}`"))
}

/// The extension policy needs a filename to check, so a file part without one
/// is rejected up front rather than surfacing as a confusing format error.
fn require_filename(filename: Option<&str>, part: &str) -> Result<String, AppError> {
    filename
        .map(str::to_string)
        .filter(|name| !name.is_empty())
        .ok_or_else(|| AppError::Validation(format!("file part `{part}` has no filename")))
}
