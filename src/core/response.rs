//! Distance-matrix response model
//!
//! Mirrors the JSON returned by the provider's distance-matrix endpoint.

use crate::error::{Result, TrafficError};
use serde::{Deserialize, Serialize};

/// Provider status meaning the request was processed
pub const STATUS_OK: &str = "OK";

/// Decoded distance-matrix result
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct DistanceMatrixResponse {
    /// Resolved addresses of the destinations, in request order
    #[serde(rename = "destination_addresses", default)]
    pub destination_addrs: Vec<String>,
    /// Resolved addresses of the origins, in request order
    #[serde(rename = "origin_addresses", default)]
    pub origin_addrs: Vec<String>,
    /// One row per origin
    #[serde(default)]
    pub rows: Vec<Row>,
    /// Top-level provider status
    #[serde(default)]
    pub status: String,
    /// Provider explanation accompanying a non-OK status
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}

/// One row of the matrix, holding an element per destination
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Row {
    #[serde(default)]
    pub elements: Vec<Element>,
}

/// A single origin/destination pair
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Element {
    #[serde(default)]
    pub status: String,
    /// Absent when the element status is not OK
    #[serde(default)]
    pub distance: TextValue,
    #[serde(default)]
    pub duration: TextValue,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_in_traffic: Option<TextValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fare: Option<Fare>,
}

/// Human-readable label plus numeric value (meters or seconds)
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct TextValue {
    pub text: String,
    pub value: f64,
}

/// Transit fare for the route
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Fare {
    pub currency: String,
    pub text: String,
    pub value: f64,
}

impl DistanceMatrixResponse {
    /// Whether the provider-level status is OK
    pub fn is_status_ok(&self) -> bool {
        self.status == STATUS_OK
    }

    /// Name of the first required sequence that is empty, if any
    pub fn missing_section(&self) -> Option<&'static str> {
        if self.origin_addrs.is_empty() {
            Some("no origin addresses")
        } else if self.destination_addrs.is_empty() {
            Some("no destination addresses")
        } else if self.rows.is_empty() {
            Some("no rows")
        } else {
            None
        }
    }

    /// Check that there is something to report on
    pub fn ensure_complete(&self) -> Result<()> {
        match self.missing_section() {
            None => Ok(()),
            Some(missing) => Err(TrafficError::IncompleteResponse {
                status: self.status.clone(),
                missing,
                message: self.error_message.clone(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "destination_addresses": ["Ikeja, Lagos, Nigeria"],
        "origin_addresses": ["Victoria Island, Lagos, Nigeria"],
        "rows": [{
            "elements": [{
                "distance": {"text": "21.4 km", "value": 21412},
                "duration": {"text": "32 mins", "value": 1920},
                "duration_in_traffic": {"text": "48 mins", "value": 2880},
                "status": "OK"
            }]
        }],
        "status": "OK"
    }"#;

    #[test]
    fn test_decode_sample() {
        let resp: DistanceMatrixResponse = serde_json::from_str(SAMPLE).unwrap();

        assert_eq!(resp.origin_addrs, vec!["Victoria Island, Lagos, Nigeria"]);
        assert_eq!(resp.destination_addrs, vec!["Ikeja, Lagos, Nigeria"]);
        assert!(resp.is_status_ok());
        assert_eq!(resp.error_message, None);

        let element = &resp.rows[0].elements[0];
        assert_eq!(element.distance.text, "21.4 km");
        assert_eq!(element.distance.value, 21412.0);
        assert_eq!(element.duration.value, 1920.0);
        assert_eq!(element.duration_in_traffic.as_ref().unwrap().text, "48 mins");
        assert!(element.fare.is_none());
        assert!(resp.ensure_complete().is_ok());
    }

    #[test]
    fn test_decode_not_found_element() {
        let body = r#"{
            "destination_addresses": [""],
            "origin_addresses": ["Somewhere"],
            "rows": [{"elements": [{"status": "ZERO_RESULTS"}]}],
            "status": "OK"
        }"#;
        let resp: DistanceMatrixResponse = serde_json::from_str(body).unwrap();
        let element = &resp.rows[0].elements[0];
        assert_eq!(element.status, "ZERO_RESULTS");
        assert_eq!(element.distance, TextValue::default());
    }

    #[test]
    fn test_decode_error_status() {
        let body = r#"{
            "destination_addresses": [],
            "origin_addresses": [],
            "rows": [],
            "status": "REQUEST_DENIED",
            "error_message": "The provided API key is invalid."
        }"#;
        let resp: DistanceMatrixResponse = serde_json::from_str(body).unwrap();
        assert!(!resp.is_status_ok());
        assert_eq!(resp.missing_section(), Some("no origin addresses"));

        match resp.ensure_complete().unwrap_err() {
            TrafficError::IncompleteResponse { status, message, .. } => {
                assert_eq!(status, "REQUEST_DENIED");
                assert_eq!(message.as_deref(), Some("The provided API key is invalid."));
            }
            other => panic!("Expected IncompleteResponse, got {other:?}"),
        }
    }

    #[test]
    fn test_fare_round_trip() {
        let resp = DistanceMatrixResponse {
            destination_addrs: vec!["B".to_string()],
            origin_addrs: vec!["A".to_string()],
            rows: vec![Row {
                elements: vec![Element {
                    status: "OK".to_string(),
                    fare: Some(Fare {
                        currency: "USD".to_string(),
                        text: "$2.75".to_string(),
                        value: 2.75,
                    }),
                    ..Default::default()
                }],
            }],
            status: STATUS_OK.to_string(),
            error_message: None,
        };

        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("\"origin_addresses\""));
        assert!(!json.contains("error_message"));

        let decoded: DistanceMatrixResponse = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, resp);
    }
}
