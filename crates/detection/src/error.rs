use thiserror::Error;

/// Errors a detector can report.
///
/// `StaticDetector` never produces these.
#[derive(Debug, Error)]
pub enum DetectionError {
    /// The detector's backing engine cannot be reached right now.
    #[error("Detector unavailable: {0}")]
    Unavailable(String),

    /// The detector ran but could not produce a result.
    #[error("Detection failed: {0}")]
    Failed(String),
}

/// Result type for detection operations.
pub type Result<T> = std::result::Result<T, DetectionError>;
