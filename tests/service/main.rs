//! Integration tests for the session/speaker service.
//!
//! Exercises the full path: filter builder → gateway → in-memory document
//! store, plus handler-level validation and error mapping.

mod support;
mod upserts;
#[cfg(feature = "http")]
mod http;
