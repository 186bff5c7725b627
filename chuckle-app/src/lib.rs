//! chuckle: fetch Chuck Norris jokes until you have had too many.
//!
//! `app` holds the model, messages, and reducer; `runtime` holds the
//! hand-written event loop, request union, command helpers, and ports.

pub mod app;
pub mod runtime;
