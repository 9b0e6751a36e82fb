use std::path::Path;

use quarry_protocol::models::FileUploadResult;
use reqwest::multipart;

use crate::client::Client;
use crate::error::Error;
use crate::error::Result;

impl Client {
    /// Multipart-upload a local file into a volume directory. The returned
    /// `path` is the server-side location consumed by
    /// [`Client::import_file`].
    pub async fn upload_file(
        &self,
        volume: &str,
        directory: &str,
        local_path: &Path,
    ) -> Result<FileUploadResult> {
        let file_name = local_path
            .file_name()
            .and_then(|name| name.to_str())
            .ok_or_else(|| {
                Error::InvalidRequest(format!("{} has no usable file name", local_path.display()))
            })?
            .to_string();
        let contents = tokio::fs::read(local_path).await?;

        let form = multipart::Form::new()
            .text("volume", volume.to_string())
            .text("directory", directory.to_string())
            .part("file", multipart::Part::bytes(contents).file_name(file_name));

        self.post_multipart("/api/v1/files/upload", form).await
    }
}
