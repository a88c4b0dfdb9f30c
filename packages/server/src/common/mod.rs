// Common types and utilities shared across the application

pub mod email;

pub use email::{normalize_email, parse_email, InvalidEmail};
