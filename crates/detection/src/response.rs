use serde::{Deserialize, Serialize};

/// Message reported while the detection service is up.
pub const RUNNING_MESSAGE: &str = "AI-powered threat detection is running";

/// Threat verdict carried in a detection response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThreatStatus {
    Safe,
}

impl ThreatStatus {
    /// Returns the wire representation of the status.
    pub fn as_str(&self) -> &'static str {
        match self {
            ThreatStatus::Safe => "safe",
        }
    }
}

impl std::fmt::Display for ThreatStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Body of a `GET /detect` response.
///
/// Field order is part of the wire format: `message` first, then `status`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetectionResponse {
    pub message: String,
    pub status: ThreatStatus,
}

impl DetectionResponse {
    /// The response served while detection is running.
    pub fn running() -> Self {
        Self {
            message: RUNNING_MESSAGE.to_string(),
            status: ThreatStatus::Safe,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn running_response_has_fixed_fields() {
        let response = DetectionResponse::running();
        assert_eq!(response.message, "AI-powered threat detection is running");
        assert_eq!(response.status, ThreatStatus::Safe);
    }

    #[test]
    fn running_response_serializes_to_exact_wire_format() {
        let json = serde_json::to_string(&DetectionResponse::running()).unwrap();
        assert_eq!(
            json,
            r#"{"message":"AI-powered threat detection is running","status":"safe"}"#
        );
    }

    #[test]
    fn status_serializes_lowercase() {
        assert_eq!(
            serde_json::to_value(ThreatStatus::Safe).unwrap(),
            serde_json::json!("safe")
        );
        assert_eq!(ThreatStatus::Safe.to_string(), "safe");
    }

    #[test]
    fn unknown_status_is_rejected() {
        let result: std::result::Result<DetectionResponse, _> =
            serde_json::from_str(r#"{"message":"x","status":"compromised"}"#);
        assert!(result.is_err());
    }
}
