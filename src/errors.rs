use thiserror::Error;

#[derive(Debug, Error)]
pub enum SkillError {
    #[error("Failed to parse request envelope: {0}")]
    ParseError(String),

    #[error("Request application id does not match this skill: {0}")]
    InvalidApplicationId(String),

    #[error("Unhandled intent: {0}")]
    UnhandledIntent(String),

    #[error("Failed to send HTTP request: {0}")]
    HttpError(String),

    #[error("Flavors page returned status {0}")]
    BadStatus(u16),
}

impl From<reqwest::Error> for SkillError {
    fn from(error: reqwest::Error) -> Self {
        SkillError::HttpError(error.to_string())
    }
}

impl From<serde_json::Error> for SkillError {
    fn from(error: serde_json::Error) -> Self {
        SkillError::ParseError(error.to_string())
    }
}

impl From<anyhow::Error> for SkillError {
    fn from(error: anyhow::Error) -> Self {
        SkillError::ParseError(error.to_string())
    }
}
