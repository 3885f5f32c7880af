//! Debate result types

pub mod outcome;
pub mod result;
