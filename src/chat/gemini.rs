//! Thin client for the Gemini `generateContent` endpoint. The REST API is
//! stateless, so the session handle replays its accumulated turn history on
//! every request; that is what keeps the conversation coherent across sends.

use std::fmt;

use gloo_net::http::Request;
use serde::{Deserialize, Serialize};

use crate::config;

#[derive(Debug)]
pub enum ChatError {
    Request(String),
    Status(u16),
    Decode(String),
}

impl fmt::Display for ChatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChatError::Request(err) => write!(f, "request failed: {}", err),
            ChatError::Status(code) => write!(f, "service answered with status {}", code),
            ChatError::Decode(err) => write!(f, "unreadable reply: {}", err),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Part {
    pub text: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Content {
    pub role: String,
    pub parts: Vec<Part>,
}

impl Content {
    fn user(text: &str) -> Self {
        Self {
            role: "user".into(),
            parts: vec![Part { text: text.into() }],
        }
    }

    fn model(text: &str) -> Self {
        Self {
            role: "model".into(),
            parts: vec![Part { text: text.into() }],
        }
    }
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest<'a> {
    system_instruction: SystemInstructionBody,
    contents: &'a [Content],
}

#[derive(Serialize, Debug)]
struct SystemInstructionBody {
    parts: [Part; 1],
}

#[derive(Deserialize, Debug, Default)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize, Debug)]
struct Candidate {
    #[serde(default)]
    content: Option<CandidateContent>,
}

#[derive(Deserialize, Debug)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<Part>,
}

impl GenerateContentResponse {
    /// Reply text of the first candidate; empty when the service returned no
    /// usable payload, which callers treat as "connection interrupted".
    fn first_text(&self) -> String {
        self.candidates
            .first()
            .and_then(|c| c.content.as_ref())
            .map(|content| {
                content
                    .parts
                    .iter()
                    .map(|p| p.text.as_str())
                    .collect::<Vec<_>>()
                    .join("")
            })
            .unwrap_or_default()
    }
}

/// Ongoing exchange with the concierge model. Created once on the first send
/// and reused for the whole page lifetime; prior turns ride along on every
/// request so the service keeps conversational context.
pub struct GeminiSession {
    api_key: &'static str,
    contents: Vec<Content>,
}

impl GeminiSession {
    pub fn new(api_key: &'static str) -> Self {
        Self {
            api_key,
            contents: Vec::new(),
        }
    }

    /// One user turn in, one reply text out. The history only records turns
    /// the service actually saw: a failed request rolls the user turn back
    /// out so the next attempt does not replay a message that was never
    /// answered.
    pub async fn send_message(&mut self, text: &str) -> Result<String, ChatError> {
        self.contents.push(Content::user(text));

        let body = GenerateContentRequest {
            system_instruction: SystemInstructionBody {
                parts: [Part {
                    text: config::CONCIERGE_PERSONA.into(),
                }],
            },
            contents: &self.contents,
        };
        let url = format!("{}?key={}", config::gemini_endpoint(), self.api_key);

        let result = async {
            let response = Request::post(&url)
                .json(&body)
                .map_err(|e| ChatError::Request(e.to_string()))?
                .send()
                .await
                .map_err(|e| ChatError::Request(e.to_string()))?;
            if !response.ok() {
                return Err(ChatError::Status(response.status()));
            }
            response
                .json::<GenerateContentResponse>()
                .await
                .map_err(|e| ChatError::Decode(e.to_string()))
        }
        .await;

        match result {
            Ok(parsed) => {
                let reply = parsed.first_text();
                if !reply.is_empty() {
                    self.contents.push(Content::model(&reply));
                }
                Ok(reply)
            }
            Err(err) => {
                self.contents.pop();
                Err(err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_body_uses_the_camel_case_wire_names() {
        let contents = vec![Content::user("有哪些房型？")];
        let body = GenerateContentRequest {
            system_instruction: SystemInstructionBody {
                parts: [Part {
                    text: "persona".into(),
                }],
            },
            contents: &contents,
        };
        let json = serde_json::to_value(&body).unwrap();
        assert!(json.get("systemInstruction").is_some());
        assert_eq!(json["contents"][0]["role"], "user");
        assert_eq!(json["contents"][0]["parts"][0]["text"], "有哪些房型？");
    }

    #[test]
    fn reply_text_is_read_from_the_first_candidate() {
        let raw = r#"{
            "candidates": [
                {"content": {"role": "model", "parts": [{"text": "歡迎"}, {"text": "預約賞屋。"}]}}
            ]
        }"#;
        let parsed: GenerateContentResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(parsed.first_text(), "歡迎預約賞屋。");
    }

    #[test]
    fn missing_candidates_read_as_empty_text() {
        let parsed: GenerateContentResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(parsed.first_text(), "");
        let parsed: GenerateContentResponse =
            serde_json::from_str(r#"{"candidates": [{}]}"#).unwrap();
        assert_eq!(parsed.first_text(), "");
    }
}
