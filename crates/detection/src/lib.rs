//! Detection layer for the threat detection service.
//!
//! This crate provides:
//! - `DetectionResponse`, the payload served by `GET /detect`
//! - `Detector` trait, the seam where real detection logic plugs in
//! - `StaticDetector`, which always reports the service as running and safe

pub mod detector;
pub mod error;
pub mod response;

pub use detector::{Detector, StaticDetector};
pub use error::{DetectionError, Result};
pub use response::{DetectionResponse, RUNNING_MESSAGE, ThreatStatus};
