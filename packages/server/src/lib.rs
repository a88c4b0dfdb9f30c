// CPZ Atlas - API Core
//
// Mock geophysical readings, region exports, and the email-based access
// request workflow (request -> moderator approval -> time-limited grant).
//
// Stateful logic lives in domains/access; everything else is request/response
// formatting over stateless generators.

pub mod common;
pub mod config;
pub mod domains;
pub mod kernel;
pub mod server;

pub use config::*;
