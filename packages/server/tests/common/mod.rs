// Common test utilities
#![allow(dead_code)]

pub mod harness;

pub use harness::*;
