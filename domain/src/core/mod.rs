//! Core value objects

pub mod backend;
pub mod model;
pub mod question;
