//! Types for the streaming data-analysis endpoint.

use serde::Deserialize;
use serde::Serialize;

/// Body of the analysis POST. `question` must be non-empty; everything else
/// narrows the scope the backend plans over.
#[derive(Debug, Clone, Default, Serialize)]
pub struct AnalyzeDataRequest {
    pub question: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub catalog: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub table_names: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,
}

/// Cancels an in-flight analysis. `request_id` is echoed back by the
/// stream's first frame.
#[derive(Debug, Clone, Serialize)]
pub struct CancelAnalysisRequest {
    pub request_id: String,
}

/// Best-effort typed view of a stream event's `data:` payload.
///
/// The backend emits heterogeneous shapes (classification results, step
/// markers, answer chunks, completion and error markers), so every field is
/// optional and unknown keys are ignored. When even this loose shape fails
/// to decode, the event's raw bytes remain the only representation.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AnalysisEventPayload {
    #[serde(default, rename = "type")]
    pub event_type: Option<String>,
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub step_type: Option<String>,
    #[serde(default)]
    pub step_name: Option<String>,
    #[serde(default)]
    pub data: Option<serde_json::Value>,
}

/// `type` values the backend is known to emit. The set is open-ended;
/// clients must tolerate values outside this list.
pub mod event_types {
    pub const CLASSIFICATION: &str = "classification";
    pub const STEP_START: &str = "step_start";
    pub const STEP_COMPLETE: &str = "step_complete";
    pub const ANSWER_CHUNK: &str = "answer_chunk";
    pub const COMPLETE: &str = "complete";
    pub const ERROR: &str = "error";
}

impl AnalysisEventPayload {
    /// Text carried by an `answer_chunk` payload, if any.
    pub fn answer_text(&self) -> Option<&str> {
        self.data.as_ref()?.get("content")?.as_str()
    }

    /// Request identifier echoed in the payload's data map, if present.
    pub fn request_id(&self) -> Option<&str> {
        self.data.as_ref()?.get("request_id")?.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn payload_tolerates_unknown_fields() {
        let payload: AnalysisEventPayload = serde_json::from_str(
            r#"{"type":"step_start","step_type":"sql","step_name":"generate","unknown":true}"#,
        )
        .expect("valid payload");
        assert_eq!(payload.event_type.as_deref(), Some("step_start"));
        assert_eq!(payload.step_type.as_deref(), Some("sql"));
        assert_eq!(payload.step_name.as_deref(), Some("generate"));
        assert_eq!(payload.source, None);
    }

    #[test]
    fn answer_text_reads_nested_content() {
        let payload: AnalysisEventPayload = serde_json::from_str(
            r#"{"type":"answer_chunk","data":{"content":"42 rows"}}"#,
        )
        .expect("valid payload");
        assert_eq!(payload.answer_text(), Some("42 rows"));
    }

    #[test]
    fn request_serializes_without_empty_optionals() {
        let request = AnalyzeDataRequest {
            question: "total sales by region".to_string(),
            ..Default::default()
        };
        let json = serde_json::to_value(&request).expect("serializable");
        assert_eq!(
            json,
            serde_json::json!({"question": "total sales by region"})
        );
    }
}
