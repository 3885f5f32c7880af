//! Domain layer for consensus-debate
//!
//! This crate contains the core value objects and pure logic for a debate
//! session. It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Debate
//!
//! A debate collects answers to one question from three independent backends
//! concurrently, then synthesizes them into a single consensus answer:
//!
//! - **Backends**: the three fixed participants (`openai`, `claude`, `gemini`)
//! - **Personas**: style instructions used to simulate a backend that has no
//!   usable credential
//! - **Consensus**: the single combined answer produced from the three texts

pub mod core;
pub mod debate;
pub mod persona;
pub mod prompt;

// Re-export commonly used types
pub use core::{backend::Backend, model::Model, question::Question};
pub use debate::{
    outcome::BackendOutcome,
    result::{DebateResult, DebateTimings, ModelResponses},
};
pub use persona::{Persona, PersonaRegistry};
pub use prompt::{BACKEND_TEMPERATURE, CONSENSUS_TEMPERATURE, PromptTemplate};
