//! Use cases

pub mod run_debate;

pub(crate) mod callers;
pub(crate) mod timing;

#[cfg(test)]
pub(crate) mod fake;
