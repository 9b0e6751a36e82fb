use quarry_protocol::models::Nl2SqlRequest;
use quarry_protocol::models::Nl2SqlResult;

use crate::client::Client;
use crate::error::Error;
use crate::error::Result;

impl Client {
    /// Synchronous natural-language-to-SQL generation. For long-running
    /// analysis with progress, use [`Client::analyze_data_stream`] instead.
    pub async fn generate_sql(&self, request: &Nl2SqlRequest) -> Result<Nl2SqlResult> {
        if request.question.trim().is_empty() {
            return Err(Error::InvalidRequest(
                "question must not be empty".to_string(),
            ));
        }
        self.post_json("/api/v1/nl2sql", request).await
    }
}
