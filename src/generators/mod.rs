// src/generators/mod.rs
pub mod password;

pub use password::{GenerationError, PasswordGenerator};
