use serde::{Deserialize, Serialize};

/// Standard paginated response of the remote API
///
/// `grandTotal_amount` is an aggregate computed by the server over the whole
/// filtered set, not only the current page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListResponse<T> {
    #[serde(default = "Vec::new")]
    pub data: Vec<T>,
    #[serde(rename = "totalRecords", default)]
    pub total_records: u64,
    #[serde(
        rename = "grandTotal_amount",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub grand_total_amount: Option<f64>,
}

impl<T> Default for ListResponse<T> {
    fn default() -> Self {
        Self {
            data: Vec::new(),
            total_records: 0,
            grand_total_amount: None,
        }
    }
}

/// Error body returned by the API on non-2xx responses.
/// Different endpoints use either `message` or `error`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl ApiErrorBody {
    /// First non-blank message carried by the body
    pub fn text(&self) -> Option<&str> {
        [self.message.as_deref(), self.error.as_deref()]
            .into_iter()
            .flatten()
            .map(str::trim)
            .find(|s| !s.is_empty())
    }
}

/// Generic single-entity mutation result (`POST`/`PATCH` return the stored entity id)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavedEntity {
    pub id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_response_with_grand_total() {
        let json = r#"{"data":[1,2,3],"totalRecords":42,"grandTotal_amount":1500.5}"#;
        let resp: ListResponse<i32> = serde_json::from_str(json).unwrap();
        assert_eq!(resp.data, vec![1, 2, 3]);
        assert_eq!(resp.total_records, 42);
        assert_eq!(resp.grand_total_amount, Some(1500.5));
    }

    #[test]
    fn test_list_response_without_optional_fields() {
        let resp: ListResponse<i32> = serde_json::from_str(r#"{"data":[]}"#).unwrap();
        assert!(resp.data.is_empty());
        assert_eq!(resp.total_records, 0);
        assert_eq!(resp.grand_total_amount, None);
    }

    #[test]
    fn test_error_body_prefers_message() {
        let body: ApiErrorBody =
            serde_json::from_str(r#"{"message":"Company not found","error":"x"}"#).unwrap();
        assert_eq!(body.text(), Some("Company not found"));

        let body: ApiErrorBody = serde_json::from_str(r#"{"message":"  ","error":"Bad period"}"#).unwrap();
        assert_eq!(body.text(), Some("Bad period"));

        let body: ApiErrorBody = serde_json::from_str(r#"{}"#).unwrap();
        assert_eq!(body.text(), None);
    }
}
