use serde::{Deserialize, Serialize};

/// Shown when the recommendation endpoint rejects a request without
/// supplying a `detail` field.
pub const RECOMMEND_FALLBACK_ERROR: &str = "코스 추천에 실패했습니다.";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RecommendRequest {
    pub query: String,
}

/// One recommended stop in an itinerary. All fields arrive as plain text.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CourseItem {
    pub name: String,
    pub description: String,
    pub address: String,
    /// Category label; `type` on the wire.
    #[serde(rename = "type")]
    pub kind: String,
    /// Estimated duration, e.g. "1h".
    pub time: String,
}

/// Full response from the recommendation endpoint. Course order is the
/// display order; it is never re-sorted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RecommendResponse {
    pub summary: String,
    #[serde(rename = "course")]
    pub courses: Vec<CourseItem>,
}

/// Body shape of a non-2xx response from the endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub detail: Option<String>,
}
