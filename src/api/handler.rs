//! Skill endpoint Lambda handler - thin router over the intent handlers.
//!
//! This module handles:
//! - Envelope parsing and application-id validation
//! - Request-type routing (launch, intent, session-ended)
//! - Intent dispatch by exact name match

use lambda_runtime::{Error, LambdaEvent};
use serde_json::Value;
use tracing::{error, info};

use crate::core::config::AppConfig;
use crate::core::models::{Intent, Request, RequestEnvelope, ResponseEnvelope, SpeechletResponse};
use crate::errors::SkillError;
use crate::flavors;

pub use self::function_handler as handler;

const CARD_TITLE: &str = "MollyMoon";

/// Lambda handler for the skill endpoint.
///
/// # Errors
///
/// Fails the invocation on a malformed envelope, an application-id mismatch,
/// or an intent name with no handler. Fetch failures do NOT fail the
/// invocation; they produce a null payload with no response object in it.
#[tracing::instrument(level = "info", skip(event))]
pub async fn function_handler(event: LambdaEvent<Value>) -> Result<Value, Error> {
    let config = AppConfig::from_env();

    let envelope: RequestEnvelope = serde_json::from_value(event.payload).map_err(|e| {
        error!("Failed to parse request envelope: {e}");
        Error::from(SkillError::ParseError(e.to_string()))
    })?;

    let client = reqwest::Client::new();
    match handle_request(&config, &client, &envelope).await {
        Ok(Some(response)) => {
            let attributes = envelope.session.attributes.clone().unwrap_or_default();
            Ok(serde_json::to_value(ResponseEnvelope::new(
                response, attributes,
            ))?)
        }
        Ok(None) => Ok(Value::Null),
        Err(e) => {
            error!("Request failed: {e}");
            Err(Error::from(e))
        }
    }
}

/// Route a parsed envelope to its handler.
///
/// `Ok(None)` means the skill sends nothing back: session-ended
/// notifications, and the silent fetch-failure path of the one-shot intent.
pub async fn handle_request(
    config: &AppConfig,
    client: &reqwest::Client,
    envelope: &RequestEnvelope,
) -> Result<Option<SpeechletResponse>, SkillError> {
    verify_application_id(config, envelope)?;

    match &envelope.request {
        Request::Launch { request_id } => {
            info!(
                request_id = %request_id,
                session_id = %envelope.session.session_id,
                "Launch request"
            );
            Ok(Some(handle_welcome()))
        }
        Request::Intent { request_id, intent } => {
            info!(
                request_id = %request_id,
                session_id = %envelope.session.session_id,
                intent = %intent.name,
                "Intent request"
            );
            dispatch_intent(config, client, intent).await
        }
        Request::SessionEnded { request_id, reason } => {
            // Alexa forbids a response payload here.
            info!(request_id = %request_id, reason = ?reason, "Session ended");
            Ok(None)
        }
    }
}

fn verify_application_id(
    config: &AppConfig,
    envelope: &RequestEnvelope,
) -> Result<(), SkillError> {
    if let Some(expected) = &config.application_id {
        let received = &envelope.session.application.application_id;
        if received != expected {
            error!("The applicationIds don't match: {received} and {expected}");
            return Err(SkillError::InvalidApplicationId(received.clone()));
        }
    }
    Ok(())
}

// ============================================================================
// Intent Dispatch
// ============================================================================

async fn dispatch_intent(
    config: &AppConfig,
    client: &reqwest::Client,
    intent: &Intent,
) -> Result<Option<SpeechletResponse>, SkillError> {
    match intent.name.as_str() {
        "OneshotFlavorsIntent" => Ok(handle_oneshot_flavors(config, client).await),
        "AMAZON.HelpIntent" => Ok(Some(handle_help())),
        "AMAZON.StopIntent" | "AMAZON.CancelIntent" => {
            Ok(Some(SpeechletResponse::tell("Goodbye")))
        }
        other => Err(SkillError::UnhandledIntent(other.to_string())),
    }
}

/// One-shot flavors request: fetch, scrape, speak.
///
/// Fetch failures are logged and swallowed, and the caller hears nothing.
async fn handle_oneshot_flavors(
    config: &AppConfig,
    client: &reqwest::Client,
) -> Option<SpeechletResponse> {
    match flavors::fetch_seasonal_flavors(client, config).await {
        Ok(flavor_text) => {
            info!(flavors = %flavor_text, "Scraped seasonal flavors");
            Some(SpeechletResponse::tell_with_card(
                &flavor_text,
                CARD_TITLE,
                &flavor_text,
            ))
        }
        Err(e) => {
            error!("Communications error: {e}");
            None
        }
    }
}

fn handle_help() -> SpeechletResponse {
    let reprompt_text = "What can I help you with?";
    let speech_output = format!(
        "You can ask me for the current seasonal ice cream flavors, \
         by saying, what are the seasonal flavors. \
         Or you can say exit. {reprompt_text}"
    );
    SpeechletResponse::ask(&speech_output, reprompt_text)
}

fn handle_welcome() -> SpeechletResponse {
    SpeechletResponse::ask(
        "Welcome to Molly Moon. You can ask for the current seasonal flavors.",
        "What can I help you with?",
    )
}
