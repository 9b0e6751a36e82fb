use quarry_protocol::models::CreatePipelineRequest;
use quarry_protocol::models::Pipeline;
use quarry_protocol::models::PipelineRun;

use crate::client::Client;
use crate::error::Result;

impl Client {
    pub async fn create_pipeline(&self, request: &CreatePipelineRequest) -> Result<Pipeline> {
        self.post_json("/api/v1/pipelines", request).await
    }

    pub async fn get_pipeline(&self, name: &str) -> Result<Pipeline> {
        self.get_json(&format!("/api/v1/pipelines/{name}"), &[]).await
    }

    pub async fn list_pipelines(&self) -> Result<Vec<Pipeline>> {
        self.get_json("/api/v1/pipelines", &[]).await
    }

    pub async fn drop_pipeline(&self, name: &str) -> Result<()> {
        self.delete_unit(&format!("/api/v1/pipelines/{name}")).await
    }

    /// Kick off a pipeline run with an arbitrary JSON input document.
    pub async fn run_pipeline(
        &self,
        name: &str,
        input: &serde_json::Value,
    ) -> Result<PipelineRun> {
        self.post_json(&format!("/api/v1/pipelines/{name}/run"), input)
            .await
    }
}
