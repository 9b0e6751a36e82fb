use futures::TryStreamExt;
use quarry_protocol::AnalyzeDataRequest;
use quarry_protocol::analysis::CancelAnalysisRequest;
use reqwest::Method;
use reqwest::header;
use tokio_util::io::StreamReader;
use tracing::debug;

use crate::client::Client;
use crate::error::Error;
use crate::error::Result;
use crate::sse::AnalysisStream;
use crate::sse::StreamOptions;

impl Client {
    /// Start a streaming data-analysis request.
    ///
    /// Issues the POST, validates the response status and content type, and
    /// hands the body to the SSE decoder. Call
    /// [`AnalysisStream::read_event`] in a loop to drain it; the stream is
    /// single-consumer and must be closed (or dropped) exactly once.
    ///
    /// Some intermediaries mis-tag the response as `text/plain`, which is
    /// accepted as a lenient fallback.
    pub async fn analyze_data_stream(
        &self,
        request: &AnalyzeDataRequest,
        options: StreamOptions,
    ) -> Result<AnalysisStream> {
        if request.question.trim().is_empty() {
            return Err(Error::InvalidRequest(
                "question must not be empty".to_string(),
            ));
        }

        let response = self
            .request(Method::POST, "/api/v1/analysis/stream")
            .header(header::ACCEPT, "text/event-stream")
            .json(request)
            .send()
            .await?;

        let status = response.status();
        if status != reqwest::StatusCode::OK {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<failed to read response>".to_string());
            return Err(Error::UnexpectedStatus { status, body });
        }

        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default()
            .to_string();
        if !content_type.contains("text/event-stream") && !content_type.contains("text/plain") {
            return Err(Error::UnexpectedContentType { content_type });
        }

        debug!("analysis stream opened, content-type {content_type:?}");
        let body = StreamReader::new(
            response
                .bytes_stream()
                .map_err(std::io::Error::other),
        );
        Ok(AnalysisStream::new(Box::new(body), options))
    }

    /// Cancel an in-flight analysis by the request identifier echoed in the
    /// stream's first frame. Plain synchronous call; the stream itself will
    /// end (or error) on its own once the backend acts on it.
    pub async fn cancel_analysis(&self, request_id: &str) -> Result<()> {
        let request = CancelAnalysisRequest {
            request_id: request_id.to_string(),
        };
        self.post_unit("/api/v1/analysis/cancel", &request).await
    }
}
