// All LLM prompt constants for the persona chat pipeline.
// Builders are pure string templating: no I/O, no randomness, no validation;
// degenerate inputs produce degenerate but valid prompts.

/// System prompt for the answering model. Replace `{name}`, `{profile}`,
/// `{summary}` before sending.
const CHAT_SYSTEM_TEMPLATE: &str = "\
You are acting as {name}. You are answering questions on {name}'s website, \
particularly questions related to {name}'s career, background, skills and experience. \
Your responsibility is to represent {name} for interactions on the website as faithfully as possible. \
You are given a profile export and a summary of {name}'s background which you can use to answer questions. \
Be professional and engaging, as if talking to a potential client or future employer who came across the website. \
Answer ONLY from the information below; if you don't know the answer from it, say so plainly rather than guessing.

## Profile:
{profile}

## Summary:
{summary}

With this context, please chat with the user, always staying in character as {name}.";

/// System prompt for the evaluator model. Enforces JSON-only verdict output.
const EVALUATOR_SYSTEM_TEMPLATE: &str = "\
You are an evaluator that decides whether a response to a question is acceptable. \
You are provided with a conversation between a User and an Agent. \
Your task is to decide whether the Agent's latest response is acceptable quality. \
The Agent is playing the role of {name} and is representing {name} on their website. \
The Agent has been provided with context on {name} in the form of their profile export and a summary, reproduced below. \
A response is acceptable only if it is factually supported by that context and is professional and engaging, \
consistent with someone representing {name} to a potential client or employer.

## Profile:
{profile}

## Summary:
{summary}

Reply with a JSON object only, with this exact shape and no other text:
{\"is_acceptable\": <boolean>, \"feedback\": \"<your feedback>\"}";

/// User content for the evaluator. Replace `{history}`, `{question}`,
/// `{answer}` before sending.
const EVALUATOR_USER_TEMPLATE: &str = "\
Here's the conversation between the User and the Agent:

{history}

Here's the latest message from the User:

{question}

Here's the latest response from the Agent:

{answer}

Please evaluate the response, replying with whether it is acceptable and your feedback.";

/// Builds the system instruction that casts the model as `name`.
pub fn chat_system_prompt(name: &str, profile: &str, summary: &str) -> String {
    CHAT_SYSTEM_TEMPLATE
        .replace("{name}", name)
        .replace("{profile}", profile)
        .replace("{summary}", summary)
}

/// Builds the system instruction that casts the model as the grader.
pub fn evaluator_system_prompt(name: &str, profile: &str, summary: &str) -> String {
    EVALUATOR_SYSTEM_TEMPLATE
        .replace("{name}", name)
        .replace("{profile}", profile)
        .replace("{summary}", summary)
}

/// Assembles the grading request. `history` is a seam for future multi-turn
/// support; callers currently always pass the empty string. Keep the
/// parameter even though only one value is supplied today.
pub fn evaluator_user_prompt(answer: &str, question: &str, history: &str) -> String {
    EVALUATOR_USER_TEMPLATE
        .replace("{history}", history)
        .replace("{question}", question)
        .replace("{answer}", answer)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chat_system_prompt_interpolates_all_inputs() {
        let prompt = chat_system_prompt("Jane", "Senior Engineer at Acme", "10 years in Rust");
        assert!(prompt.contains("acting as Jane"));
        assert!(prompt.contains("Senior Engineer at Acme"));
        assert!(prompt.contains("10 years in Rust"));
        assert!(!prompt.contains("{name}"));
        assert!(!prompt.contains("{profile}"));
        assert!(!prompt.contains("{summary}"));
    }

    #[test]
    fn evaluator_system_prompt_requests_verdict_json() {
        let prompt = evaluator_system_prompt("Jane", "profile text", "summary text");
        assert!(prompt.contains("is_acceptable"));
        assert!(prompt.contains("feedback"));
        assert!(prompt.contains("Jane"));
    }

    #[test]
    fn evaluator_user_prompt_carries_answer_question_and_history() {
        let prompt = evaluator_user_prompt("the answer", "the question", "prior turns");
        assert!(prompt.contains("the answer"));
        assert!(prompt.contains("the question"));
        assert!(prompt.contains("prior turns"));
    }

    #[test]
    fn builders_are_pure() {
        let a = chat_system_prompt("Jane", "p", "s");
        let b = chat_system_prompt("Jane", "p", "s");
        assert_eq!(a, b);

        let c = evaluator_user_prompt("a", "q", "");
        let d = evaluator_user_prompt("a", "q", "");
        assert_eq!(c, d);
    }

    #[test]
    fn empty_inputs_still_produce_valid_prompts() {
        let prompt = chat_system_prompt("", "", "");
        assert!(prompt.contains("## Profile:"));
        assert!(prompt.contains("## Summary:"));
    }
}
