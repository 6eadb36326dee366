use async_trait::async_trait;

use crate::{DetectionResponse, Result};

/// Source of detection results served by the API.
///
/// Implementations must be thread-safe (Send + Sync); the API holds a single
/// shared instance and calls it concurrently from every request.
#[async_trait]
pub trait Detector: Send + Sync {
    /// Produces the current detection result.
    async fn detect(&self) -> Result<DetectionResponse>;
}

/// Detector that always reports the service as running and safe.
///
/// It inspects nothing and keeps no state, so every call returns the same
/// value.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticDetector;

impl StaticDetector {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Detector for StaticDetector {
    async fn detect(&self) -> Result<DetectionResponse> {
        Ok(DetectionResponse::running())
    }
}
