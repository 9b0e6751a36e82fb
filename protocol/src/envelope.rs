use serde::Deserialize;
use serde::Serialize;

/// JSON wrapper returned by every non-streaming endpoint.
///
/// `code == 0` is success; any other value is a service-level error and
/// `msg` carries the human-readable reason. `data` is absent on errors and
/// on endpoints that return nothing.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct Envelope<T> {
    pub code: i64,
    #[serde(default)]
    pub msg: String,
    #[serde(default)]
    pub data: Option<T>,
    #[serde(default)]
    pub request_id: Option<String>,
}

/// Envelope code the service uses for a missing resource.
pub const CODE_NOT_FOUND: i64 = 404;

impl<T> Envelope<T> {
    pub fn is_success(&self) -> bool {
        self.code == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn deserializes_success_with_data() {
        let env: Envelope<Vec<String>> = serde_json::from_str(
            r#"{"code":0,"msg":"ok","data":["a","b"],"request_id":"req-1"}"#,
        )
        .expect("valid envelope");
        assert!(env.is_success());
        assert_eq!(env.data, Some(vec!["a".to_string(), "b".to_string()]));
        assert_eq!(env.request_id.as_deref(), Some("req-1"));
    }

    #[test]
    fn deserializes_error_without_data() {
        let env: Envelope<Vec<String>> =
            serde_json::from_str(r#"{"code":404,"msg":"role not found"}"#).expect("valid envelope");
        assert!(!env.is_success());
        assert_eq!(env.code, CODE_NOT_FOUND);
        assert_eq!(env.data, None);
        assert_eq!(env.request_id, None);
    }
}
