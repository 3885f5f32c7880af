//! Infrastructure layer for consensus-debate
//!
//! This crate contains the adapters implementing the gateway port defined
//! in the application layer: one HTTP client per provider, env-sourced
//! credential resolution, and the routing gateway that ties them together.

pub mod credentials;
pub mod gateway;
pub mod providers;

// Re-export commonly used types
pub use gateway::HttpBackendGateway;
pub use providers::gemini::GeminiClient;
