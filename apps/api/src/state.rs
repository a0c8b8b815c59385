use crate::config::Config;
use crate::llm_client::LlmClient;

/// Shared application state injected into all route handlers via Axum extractors.
///
/// Both clients are read-only after startup, so cloning the state per request
/// is cheap and requires no locking.
#[derive(Clone)]
pub struct AppState {
    /// Provider that answers questions in character as the persona.
    pub chat_llm: LlmClient,
    /// Provider that grades the answer against the grounding documents.
    pub eval_llm: LlmClient,
    pub config: Config,
}

impl AppState {
    pub fn from_config(config: Config) -> Self {
        let chat_llm = LlmClient::new(
            config.chat_api_url.clone(),
            config.openai_api_key.clone(),
            config.chat_model.clone(),
        );
        let eval_llm = LlmClient::new(
            config.eval_api_url.clone(),
            config.gemini_api_key.clone(),
            config.eval_model.clone(),
        );
        Self {
            chat_llm,
            eval_llm,
            config,
        }
    }
}
