//! Persona chat pipeline: answer a question in character, then grade the
//! answer against the same grounding documents.

pub mod handlers;
pub mod prompts;

use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::llm_client::LlmClient;

/// The grounding for one request: who the model speaks as and the two
/// extracted document texts. Built once and reused for both prompt pairs.
#[derive(Debug)]
pub struct PersonaContext {
    pub name: String,
    pub profile_text: String,
    pub summary_text: String,
}

/// Structured grading output. Only ever produced by deserializing the
/// evaluator model's JSON response, never hand-constructed.
#[derive(Debug, Serialize, Deserialize)]
pub struct EvaluationVerdict {
    pub is_acceptable: bool,
    pub feedback: String,
}

/// Response payload for `POST /userchat/chat`.
#[derive(Debug, Serialize)]
pub struct ChatResponse {
    #[serde(rename = "Question")]
    pub question: String,
    pub answer_of_question: String,
    pub evaluate_answer: EvaluationVerdict,
}

/// Runs the two-stage pipeline: generate an answer as the persona, then have
/// the evaluator grade it. The calls are causally ordered: if answer
/// generation fails, the evaluator is never contacted.
pub async fn answer_and_evaluate(
    chat_llm: &LlmClient,
    eval_llm: &LlmClient,
    persona: &PersonaContext,
    question: &str,
) -> Result<(String, EvaluationVerdict), AppError> {
    let chat_system =
        prompts::chat_system_prompt(&persona.name, &persona.profile_text, &persona.summary_text);
    let answer = chat_llm.chat(&chat_system, question).await?;

    let eval_system = prompts::evaluator_system_prompt(
        &persona.name,
        &persona.profile_text,
        &persona.summary_text,
    );
    // No conversation history yet; the seam stays open for multi-turn support.
    let eval_user = prompts::evaluator_user_prompt(&answer, question, "");
    let verdict: EvaluationVerdict = eval_llm.chat_json(&eval_system, &eval_user).await?;

    Ok((answer, verdict))
}
