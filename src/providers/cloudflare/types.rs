use serde::{Deserialize, Serialize};

/// One entry of the `errors` array every Cloudflare response carries.
#[derive(Deserialize, Debug)]
pub struct ApiError {
    pub code: i64,
    pub message: String,
}

#[derive(Deserialize, Debug, Clone)]
pub struct Zone {
    pub id: String,
    pub name: String,
}

#[derive(Deserialize, Debug)]
pub struct ZoneListResponse {
    pub success: bool,
    #[serde(default)]
    pub errors: Vec<ApiError>,
    #[serde(default)]
    pub result: Vec<Zone>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct DnsRecord {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub record_type: String,
    pub content: String,
}

#[derive(Deserialize, Debug)]
pub struct RecordListResponse {
    pub success: bool,
    #[serde(default)]
    pub errors: Vec<ApiError>,
    #[serde(default)]
    pub result: Vec<DnsRecord>,
}

/// Body for the full-record replace. Cloudflare's PUT expects the complete
/// record, not a partial patch.
#[derive(Serialize, Debug)]
pub struct ReplaceRecordRequest {
    pub id: String,
    #[serde(rename = "type")]
    pub record_type: String,
    pub name: String,
    pub content: String,
}

/// Envelope for responses where only the success indicator matters, and
/// for non-2xx error bodies.
#[derive(Deserialize, Debug)]
pub struct StatusResponse {
    pub success: bool,
    #[serde(default)]
    pub errors: Vec<ApiError>,
}

pub fn join_errors(errors: &[ApiError]) -> String {
    if errors.is_empty() {
        return "no error detail provided".to_string();
    }
    errors
        .iter()
        .map(|e| format!("{}: {}", e.code, e.message))
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_zone_list() {
        let body = r#"{
            "success": true,
            "errors": [],
            "result": [
                {"id": "023e105f4ecef8ad9ca31a8372d0c353", "name": "example.com", "status": "active"}
            ]
        }"#;
        let response: ZoneListResponse = serde_json::from_str(body).unwrap();
        assert!(response.success);
        assert_eq!(response.result.len(), 1);
        assert_eq!(response.result[0].name, "example.com");
    }

    #[test]
    fn deserializes_record_list() {
        let body = r#"{
            "success": true,
            "errors": [],
            "result": [
                {"id": "372e67954025e0ba6aaa6d586b9e0b59", "name": "home.example.com",
                 "type": "A", "content": "203.0.113.5", "ttl": 300, "proxied": false}
            ]
        }"#;
        let response: RecordListResponse = serde_json::from_str(body).unwrap();
        assert!(response.success);
        assert_eq!(response.result[0].record_type, "A");
        assert_eq!(response.result[0].content, "203.0.113.5");
    }

    #[test]
    fn missing_result_defaults_to_empty() {
        let body = r#"{"success": false, "errors": [{"code": 7003, "message": "no such zone"}]}"#;
        let response: ZoneListResponse = serde_json::from_str(body).unwrap();
        assert!(!response.success);
        assert!(response.result.is_empty());
        assert_eq!(join_errors(&response.errors), "7003: no such zone");
    }

    #[test]
    fn joins_multiple_errors() {
        let errors = vec![
            ApiError {
                code: 9109,
                message: "invalid access token".to_string(),
            },
            ApiError {
                code: 6003,
                message: "invalid request headers".to_string(),
            },
        ];
        assert_eq!(
            join_errors(&errors),
            "9109: invalid access token, 6003: invalid request headers"
        );
        assert_eq!(join_errors(&[]), "no error detail provided");
    }

    #[test]
    fn serializes_replace_request() {
        let request = ReplaceRecordRequest {
            id: "372e67954025e0ba6aaa6d586b9e0b59".to_string(),
            record_type: "A".to_string(),
            name: "home.example.com".to_string(),
            content: "203.0.113.5".to_string(),
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["type"], "A");
        assert_eq!(value["content"], "203.0.113.5");
        assert!(value.get("record_type").is_none());
    }
}
