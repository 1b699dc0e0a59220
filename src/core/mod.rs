//! Configuration and the Alexa request/response data model.

pub mod config;
pub mod models;
