//! Provider adapters, one per external completion endpoint

pub mod anthropic;
pub mod gemini;
pub mod openai;
