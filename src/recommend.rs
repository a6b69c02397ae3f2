use crate::types::catalog::Catalog;
use crate::types::response::ResponseSet;
use reqwest::blocking::Client;
use serde::Deserialize;
use serde_json::{json, Value};
use std::time::Duration;
use thiserror::Error;

pub const DEFAULT_BASE_URL: &str = "https://api.openai.com";
pub const DEFAULT_MODEL: &str = "gpt-4o";
pub const UNAVAILABLE_PLACEHOLDER: &str = "Unable to generate recommendations at this time.";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
const SYSTEM_PROMPT: &str = "You are an SEO expert providing recommendations based on an audit.";

#[derive(Error, Debug)]
pub enum RecommendError {
    #[error("no API key available (pass --api-key or set OPENAI_API_KEY)")]
    MissingCredential,

    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error: status={status}, body={body}")]
    Api { status: u16, body: String },

    #[error("invalid response: {0}")]
    InvalidResponse(String),
}

/// Outcome of the single best-effort recommendation attempt. Failure is a
/// value the assembler turns into a placeholder section, never a process
/// error; the scorecard is already computed by the time this runs. Skipped
/// marks a run where no narrative was requested.
#[derive(Debug)]
pub enum Narrative {
    Generated(String),
    Unavailable(RecommendError),
    Skipped,
}

#[derive(Debug, Clone)]
pub struct RecommendConfig {
    pub api_key: Option<String>,
    pub model: String,
    pub base_url: String,
}

/// Resolves the API key: explicit flag first, then the environment, then a
/// hidden prompt when prompting is allowed (interactive sessions only).
pub fn resolve_api_key(flag: Option<String>, allow_prompt: bool) -> Option<String> {
    if let Some(key) = flag.filter(|key| !key.is_empty()) {
        return Some(key);
    }
    if let Ok(key) = std::env::var("OPENAI_API_KEY") {
        if !key.is_empty() {
            return Some(key);
        }
    }
    if allow_prompt {
        if let Ok(key) = rpassword::prompt_password("OpenAI API key (empty to skip): ") {
            let key = key.trim().to_string();
            if !key.is_empty() {
                return Some(key);
            }
        }
    }
    None
}

/// Makes one blocking chat-completion call and folds any failure into the
/// returned narrative.
pub fn generate(config: &RecommendConfig, catalog: &Catalog, responses: &ResponseSet) -> Narrative {
    match request_recommendations(config, catalog, responses) {
        Ok(text) => Narrative::Generated(text),
        Err(err) => {
            tracing::warn!("recommendations unavailable: {err}");
            Narrative::Unavailable(err)
        }
    }
}

fn request_recommendations(
    config: &RecommendConfig,
    catalog: &Catalog,
    responses: &ResponseSet,
) -> Result<String, RecommendError> {
    let api_key = config
        .api_key
        .as_deref()
        .ok_or(RecommendError::MissingCredential)?;

    let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
    let endpoint = format!(
        "{}/v1/chat/completions",
        config.base_url.trim_end_matches('/')
    );

    let prompt = build_prompt(&audit_snapshot(catalog, responses));
    let payload = json!({
        "model": config.model,
        "messages": [
            { "role": "system", "content": SYSTEM_PROMPT },
            { "role": "user", "content": prompt },
        ],
    });

    let res = client
        .post(endpoint)
        .bearer_auth(api_key)
        .json(&payload)
        .send()?;

    if !res.status().is_success() {
        let status = res.status().as_u16();
        let body = res.text().unwrap_or_default();
        return Err(RecommendError::Api { status, body });
    }

    let parsed: ChatCompletionResponse = res.json()?;
    let Some(choice) = parsed.choices.into_iter().next() else {
        return Err(RecommendError::InvalidResponse(
            "no choices in response".to_string(),
        ));
    };
    Ok(choice.message.content)
}

/// Audit results as the model sees them: judgment and weight per criterion,
/// nested by bucket and factor.
pub fn audit_snapshot(catalog: &Catalog, responses: &ResponseSet) -> Value {
    let mut snapshot = serde_json::Map::new();
    for bucket in &catalog.buckets {
        let mut factors = serde_json::Map::new();
        for factor in &bucket.factors {
            let mut criteria = serde_json::Map::new();
            for criterion in &factor.criteria {
                let judgment = responses
                    .get(&bucket.name, &factor.name, &criterion.name)
                    .map(|judgment| judgment.as_str())
                    .unwrap_or("unanswered");
                criteria.insert(
                    criterion.name.clone(),
                    json!({ "judgment": judgment, "weight": criterion.weight }),
                );
            }
            factors.insert(factor.name.clone(), Value::Object(criteria));
        }
        snapshot.insert(bucket.name.clone(), Value::Object(factors));
    }
    Value::Object(snapshot)
}

pub fn build_prompt(snapshot: &Value) -> String {
    format!(
        "Based on the following SEO audit results, provide recommendations for improvement:\n\n\
         {snapshot:#}\n\n\
         Please provide specific, actionable recommendations for each area that needs \
         improvement. Use the following format:\n\n\
         ### [Main Category]\n\
         **[Subcategory]**\n\
         - Action: [Specific recommendation]\n\
         - Action: [Another specific recommendation]\n\n\
         Repeat this structure for each category and subcategory that needs improvement."
    )
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

#[derive(Debug, Deserialize)]
struct ChatMessage {
    content: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::response::Judgment;

    fn tiny_catalog() -> Catalog {
        toml::from_str(
            r#"
[[bucket]]
name = "On-Page"
weight = 1.0

[[bucket.factor]]
name = "H1 Tag"

[[bucket.factor.criterion]]
name = "Contains primary keyword"
weight = 9
"#,
        )
        .expect("catalog should parse")
    }

    #[test]
    fn snapshot_carries_judgment_and_weight() {
        let catalog = tiny_catalog();
        let mut responses = ResponseSet::new();
        responses.record("On-Page", "H1 Tag", "Contains primary keyword", Judgment::No);

        let snapshot = audit_snapshot(&catalog, &responses);
        let entry = &snapshot["On-Page"]["H1 Tag"]["Contains primary keyword"];
        assert_eq!(entry["judgment"], "no");
        assert_eq!(entry["weight"], 9.0);
    }

    #[test]
    fn prompt_embeds_snapshot_and_format_instructions() {
        let catalog = tiny_catalog();
        let mut responses = ResponseSet::new();
        responses.record("On-Page", "H1 Tag", "Contains primary keyword", Judgment::Yes);

        let prompt = build_prompt(&audit_snapshot(&catalog, &responses));
        assert!(prompt.starts_with("Based on the following SEO audit results"));
        assert!(prompt.contains("Contains primary keyword"));
        assert!(prompt.contains("### [Main Category]"));
        assert!(prompt.contains("- Action: [Specific recommendation]"));
    }

    #[test]
    fn chat_response_parses_first_choice() {
        let body = r####"
{
  "id": "chatcmpl-123",
  "object": "chat.completion",
  "choices": [
    {
      "index": 0,
      "message": { "role": "assistant", "content": "### On-Page\n- Action: Add the keyword." },
      "finish_reason": "stop"
    }
  ]
}
"####;
        let parsed: ChatCompletionResponse =
            serde_json::from_str(body).expect("chat response should parse");
        let choice = parsed.choices.into_iter().next().expect("one choice");
        assert!(choice.message.content.starts_with("### On-Page"));
    }

    #[test]
    fn missing_credential_degrades_to_unavailable() {
        let catalog = tiny_catalog();
        let mut responses = ResponseSet::new();
        responses.record("On-Page", "H1 Tag", "Contains primary keyword", Judgment::Yes);

        let config = RecommendConfig {
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
        };
        match generate(&config, &catalog, &responses) {
            Narrative::Unavailable(RecommendError::MissingCredential) => {}
            other => panic!("expected MissingCredential, got {other:?}"),
        }
    }

    #[test]
    fn flag_beats_environment_for_credentials() {
        let key = resolve_api_key(Some("sk-flag".to_string()), false);
        assert_eq!(key.as_deref(), Some("sk-flag"));
    }

    #[test]
    fn empty_flag_falls_through() {
        // Skip when the surrounding environment already carries a key.
        if std::env::var("OPENAI_API_KEY").is_err() {
            assert!(resolve_api_key(Some(String::new()), false).is_none());
        }
    }
}
