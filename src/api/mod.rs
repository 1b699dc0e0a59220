//! Lambda handler and request routing for the skill endpoint.

pub mod handler;

// Re-export the main handler for convenience
pub use handler::handler;
