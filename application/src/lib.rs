//! Application layer for consensus-debate
//!
//! This crate contains the debate orchestration use case and the port it
//! speaks through. It depends only on the domain layer; the HTTP adapters
//! implementing the port live in the infrastructure layer.

pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use ports::backend_gateway::{BackendGateway, CompletionRequest, GatewayError};
pub use use_cases::run_debate::{RunDebateError, RunDebateInput, RunDebateUseCase};
