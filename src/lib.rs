//! Flavorcast - an Alexa skill that reads out the seasonal ice cream flavors
//! from the Molly Moon website.
//!
//! The skill is a single Lambda function:
//! 1. The handler parses the Alexa request envelope and routes on request
//!    type and intent name.
//! 2. The one-shot intent issues one HTTP GET to the flavors page, scrapes
//!    the flavor names out of the HTML, and speaks them back with a card.
//!
//! # Architecture
//!
//! The system uses:
//! - AWS Lambda for serverless execution
//! - reqwest for the outbound page fetch
//! - scraper for CSS-selector HTML extraction
//! - Tokio for async runtime
//!
//! # Example
//!
//! ```no_run
//! use flavorcast::core::config::AppConfig;
//! use flavorcast::core::models::RequestEnvelope;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Set up structured logging
//!     flavorcast::setup_logging();
//!
//!     let config = AppConfig::from_env();
//!     let client = reqwest::Client::new();
//!
//!     let envelope: RequestEnvelope = serde_json::from_str(
//!         r#"{
//!             "version": "1.0",
//!             "session": {
//!                 "new": true,
//!                 "sessionId": "amzn1.echo-api.session.demo",
//!                 "application": {"applicationId": "amzn1.echo-sdk-ams.app.demo"}
//!             },
//!             "request": {
//!                 "type": "IntentRequest",
//!                 "requestId": "amzn1.echo-api.request.demo",
//!                 "intent": {"name": "OneshotFlavorsIntent"}
//!             }
//!         }"#,
//!     )?;
//!
//!     if let Some(response) = flavorcast::api::handler::handle_request(
//!         &config, &client, &envelope,
//!     )
//!     .await?
//!     {
//!         println!("{}", response.output_speech.text);
//!     }
//!
//!     Ok(())
//! }
//! ```

// Module declarations
pub mod api;
pub mod core;
pub mod errors;
pub mod flavors;

/// Configure structured logging with JSON format for AWS Lambda environments.
///
/// Sets up tracing-subscriber with a JSON formatter suitable for `CloudWatch`
/// Logs integration. Call once at the start of the Lambda process.
pub fn setup_logging() {
    use tracing_subscriber::prelude::*;
    let fmt_layer = tracing_subscriber::fmt::layer().json().with_target(true);

    tracing_subscriber::registry().with(fmt_layer).init();
}
