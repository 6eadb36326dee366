//! HTTP route handlers.

pub mod detect;
