//! Alexa request and response envelope types.
//!
//! The request side mirrors the JSON the Alexa service posts to the skill
//! endpoint; the response side provides the `tell`/`ask` builders the intent
//! handlers use. Slots are parsed so realistic envelopes deserialize, but no
//! shipped handler reads them.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::HashMap;

// ============================================================================
// Request Envelope
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct RequestEnvelope {
    pub version: String,
    pub session: Session,
    pub request: Request,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub new: bool,
    pub session_id: String,
    pub application: Application,
    #[serde(default)]
    pub attributes: Option<Map<String, Value>>,
    pub user: Option<User>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    pub application_id: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub user_id: String,
}

/// Inbound request, tagged by the Alexa `type` field.
#[derive(Debug, Deserialize)]
#[serde(tag = "type")]
pub enum Request {
    #[serde(rename = "LaunchRequest", rename_all = "camelCase")]
    Launch { request_id: String },

    #[serde(rename = "IntentRequest", rename_all = "camelCase")]
    Intent { request_id: String, intent: Intent },

    #[serde(rename = "SessionEndedRequest", rename_all = "camelCase")]
    SessionEnded {
        request_id: String,
        reason: Option<String>,
    },
}

#[derive(Debug, Deserialize)]
pub struct Intent {
    pub name: String,
    #[serde(default)]
    pub slots: Option<HashMap<String, Slot>>,
}

#[derive(Debug, Deserialize)]
pub struct Slot {
    pub name: String,
    pub value: Option<String>,
}

// ============================================================================
// Response Envelope
// ============================================================================

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseEnvelope {
    pub version: String,
    pub session_attributes: Map<String, Value>,
    pub response: SpeechletResponse,
}

impl ResponseEnvelope {
    #[must_use]
    pub fn new(response: SpeechletResponse, session_attributes: Map<String, Value>) -> Self {
        Self {
            version: "1.0".to_string(),
            session_attributes,
            response,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SpeechletResponse {
    pub output_speech: OutputSpeech,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card: Option<Card>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reprompt: Option<Reprompt>,
    pub should_end_session: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OutputSpeech {
    #[serde(rename = "type")]
    pub speech_type: String,
    pub text: String,
}

impl OutputSpeech {
    fn plain(text: &str) -> Self {
        Self {
            speech_type: "PlainText".to_string(),
            text: text.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    #[serde(rename = "type")]
    pub card_type: String,
    pub title: String,
    pub content: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Reprompt {
    pub output_speech: OutputSpeech,
}

impl SpeechletResponse {
    /// Speak and end the session.
    #[must_use]
    pub fn tell(speech: &str) -> Self {
        Self {
            output_speech: OutputSpeech::plain(speech),
            card: None,
            reprompt: None,
            should_end_session: true,
        }
    }

    /// Speak with a companion Simple card and end the session.
    #[must_use]
    pub fn tell_with_card(speech: &str, card_title: &str, card_content: &str) -> Self {
        Self {
            output_speech: OutputSpeech::plain(speech),
            card: Some(Card {
                card_type: "Simple".to_string(),
                title: card_title.to_string(),
                content: card_content.to_string(),
            }),
            reprompt: None,
            should_end_session: true,
        }
    }

    /// Speak, keep the session open, and reprompt if the user stays silent.
    #[must_use]
    pub fn ask(speech: &str, reprompt: &str) -> Self {
        Self {
            output_speech: OutputSpeech::plain(speech),
            card: None,
            reprompt: Some(Reprompt {
                output_speech: OutputSpeech::plain(reprompt),
            }),
            should_end_session: false,
        }
    }
}
