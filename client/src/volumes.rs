use quarry_protocol::models::CreateVolumeRequest;
use quarry_protocol::models::Volume;
use quarry_protocol::models::VolumeFile;

use crate::client::Client;
use crate::error::Result;

impl Client {
    pub async fn create_volume(&self, request: &CreateVolumeRequest) -> Result<Volume> {
        self.post_json("/api/v1/volumes", request).await
    }

    pub async fn get_volume(&self, name: &str) -> Result<Volume> {
        self.get_json(&format!("/api/v1/volumes/{name}"), &[]).await
    }

    pub async fn list_volumes(&self) -> Result<Vec<Volume>> {
        self.get_json("/api/v1/volumes", &[]).await
    }

    pub async fn drop_volume(&self, name: &str) -> Result<()> {
        self.delete_unit(&format!("/api/v1/volumes/{name}")).await
    }

    pub async fn list_volume_files(
        &self,
        volume: &str,
        directory: Option<&str>,
    ) -> Result<Vec<VolumeFile>> {
        let mut query: Vec<(&str, &str)> = Vec::new();
        if let Some(directory) = directory {
            query.push(("directory", directory));
        }
        self.get_json(&format!("/api/v1/volumes/{volume}/files"), &query)
            .await
    }
}
