//! Wire types for the Generative Language `generateContent` endpoint.

use actalon_model::CompletionRequest;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub(crate) struct Content {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default)]
    pub parts: Vec<Part>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub(crate) struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct GenerationConfig {
    pub temperature: f32,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct GenerateContentRequest {
    pub contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_instruction: Option<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generation_config: Option<GenerationConfig>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
    #[serde(default)]
    pub prompt_feedback: Option<PromptFeedback>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Candidate {
    #[serde(default)]
    pub content: Option<Content>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct PromptFeedback {
    #[serde(default)]
    pub block_reason: Option<String>,
}

fn text_content(text: &str) -> Content {
    Content {
        role: None,
        parts: vec![Part {
            text: Some(text.to_owned()),
        }],
    }
}

pub(crate) fn create_request(req: &CompletionRequest) -> GenerateContentRequest {
    GenerateContentRequest {
        contents: vec![Content {
            role: Some("user".to_owned()),
            parts: vec![Part {
                text: Some(req.message.clone()),
            }],
        }],
        system_instruction: Some(text_content(&req.directive)),
        generation_config: req
            .temperature
            .map(|temperature| GenerationConfig { temperature }),
    }
}

/// Concatenates the text parts of the first candidate, mirroring the
/// official SDK's `response.text` accessor. Returns `None` when the
/// response carries no text part at all.
pub(crate) fn extract_text(resp: &GenerateContentResponse) -> Option<String> {
    let content = resp.candidates.first()?.content.as_ref()?;
    let mut text = None::<String>;
    for part in &content.parts {
        if let Some(part_text) = &part.text {
            text.get_or_insert_default().push_str(part_text);
        }
    }
    text
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_request_shape() {
        let req = create_request(&CompletionRequest {
            directive: "Vous êtes l'assistant.".to_owned(),
            message: "Bonjour".to_owned(),
            temperature: Some(0.7),
        });
        let value = serde_json::to_value(&req).unwrap();
        assert_eq!(
            value,
            json!({
                "contents": [{
                    "role": "user",
                    "parts": [{ "text": "Bonjour" }]
                }],
                "systemInstruction": {
                    "parts": [{ "text": "Vous êtes l'assistant." }]
                },
                "generationConfig": { "temperature": 0.7 }
            })
        );
    }

    #[test]
    fn test_request_without_temperature() {
        let req = create_request(&CompletionRequest {
            directive: "d".to_owned(),
            message: "m".to_owned(),
            temperature: None,
        });
        let value = serde_json::to_value(&req).unwrap();
        assert!(value.get("generationConfig").is_none());
    }

    #[test]
    fn test_extract_text() {
        let resp: GenerateContentResponse = serde_json::from_value(json!({
            "candidates": [{
                "content": {
                    "role": "model",
                    "parts": [
                        { "text": "Bonjour, " },
                        { "text": "maître." }
                    ]
                },
                "finishReason": "STOP"
            }]
        }))
        .unwrap();
        assert_eq!(extract_text(&resp).as_deref(), Some("Bonjour, maître."));
    }

    #[test]
    fn test_extract_text_without_candidates() {
        let resp: GenerateContentResponse =
            serde_json::from_value(json!({})).unwrap();
        assert_eq!(extract_text(&resp), None);

        let resp: GenerateContentResponse = serde_json::from_value(json!({
            "candidates": [{ "finishReason": "MAX_TOKENS" }]
        }))
        .unwrap();
        assert_eq!(extract_text(&resp), None);
    }

    #[test]
    fn test_block_reason() {
        let resp: GenerateContentResponse = serde_json::from_value(json!({
            "promptFeedback": { "blockReason": "SAFETY" }
        }))
        .unwrap();
        assert_eq!(
            resp.prompt_feedback.unwrap().block_reason.as_deref(),
            Some("SAFETY")
        );
    }
}
