//! Convenience layer over [`quarry_client::Client`].
//!
//! Each operation here sequences several low-level calls into one common
//! workflow: idempotent role/user provisioning, upload-then-import, and
//! draining an analysis stream into its final answer. Errors are the
//! client's own [`quarry_client::Error`]; nothing is retried here.

use std::path::Path;

use quarry_client::Client;
use quarry_client::Config;
use quarry_client::Error;
use quarry_client::Result;
use quarry_client::StreamOptions;
use quarry_protocol::AnalyzeDataRequest;
use quarry_protocol::analysis::event_types;
use quarry_protocol::models::CreateRoleRequest;
use quarry_protocol::models::CreateUserRequest;
use quarry_protocol::models::ImportFileRequest;
use quarry_protocol::models::ImportFileResult;
use quarry_protocol::models::Role;
use quarry_protocol::models::User;
use tracing::debug;

/// Identifies a table for [`SdkClient::upload_and_import`].
#[derive(Debug, Clone)]
pub struct TableRef {
    pub catalog: String,
    pub database: String,
    pub table: String,
}

pub struct SdkClient {
    client: Client,
}

impl SdkClient {
    pub fn new(config: Config) -> Result<Self> {
        Ok(Self {
            client: Client::new(config)?,
        })
    }

    pub fn from_client(client: Client) -> Self {
        Self { client }
    }

    /// The underlying low-level client, for anything this layer does not
    /// compose.
    pub fn raw(&self) -> &Client {
        &self.client
    }

    /// Create a role only if it does not already exist. A not-found answer
    /// from the service means "create it"; any other failure propagates.
    pub async fn ensure_role(&self, name: &str) -> Result<Role> {
        match self.client.get_role(name).await {
            Ok(role) => Ok(role),
            Err(err) if err.is_not_found() => {
                debug!("role {name} absent, creating");
                self.client
                    .create_role(&CreateRoleRequest {
                        name: name.to_string(),
                        comment: None,
                    })
                    .await
            }
            Err(err) => Err(err),
        }
    }

    /// Create a user if absent, then bind `role` to it. The role must
    /// already exist (pair with [`SdkClient::ensure_role`]).
    pub async fn ensure_user(&self, name: &str, role: &str) -> Result<User> {
        let user = match self.client.get_user(name).await {
            Ok(user) => user,
            Err(err) if err.is_not_found() => {
                debug!("user {name} absent, creating");
                self.client
                    .create_user(&CreateUserRequest {
                        name: name.to_string(),
                        comment: None,
                    })
                    .await?
            }
            Err(err) => return Err(err),
        };
        if !user.roles.iter().any(|existing| existing == role) {
            self.client.assign_role(name, role).await?;
        }
        self.client.get_user(name).await
    }

    /// Upload a local file into a volume and import the resulting
    /// server-side path into `table`.
    pub async fn upload_and_import(
        &self,
        local_path: &Path,
        volume: &str,
        directory: &str,
        table: &TableRef,
    ) -> Result<ImportFileResult> {
        let uploaded = self.client.upload_file(volume, directory, local_path).await?;
        debug!("uploaded {} to {}", local_path.display(), uploaded.path);
        self.client
            .import_file(
                &table.catalog,
                &table.database,
                &table.table,
                &ImportFileRequest {
                    path: uploaded.path,
                    file_format: None,
                },
            )
            .await
    }

    /// Run an analysis stream to completion and return the concatenated
    /// answer text.
    ///
    /// Intermediate classification/step events are skipped; `answer_chunk`
    /// events are concatenated; an `error` event becomes an [`Error`];
    /// `complete` (or end of stream) finishes the answer. Stream-level
    /// failures (timeout, transport) surface unchanged.
    pub async fn ask(&self, question: &str, options: StreamOptions) -> Result<String> {
        let request = AnalyzeDataRequest {
            question: question.to_string(),
            ..Default::default()
        };
        let mut stream = self.client.analyze_data_stream(&request, options).await?;

        let mut answer = String::new();
        while let Some(event) = stream.read_event().await? {
            let Some(payload) = event.payload.as_ref() else {
                debug!("skipping undecodable analysis event: {}", event.data);
                continue;
            };
            match payload.event_type.as_deref() {
                Some(event_types::ANSWER_CHUNK) => {
                    if let Some(text) = payload.answer_text() {
                        answer.push_str(text);
                    }
                }
                Some(event_types::ERROR) => {
                    stream.close();
                    return Err(Error::Other(format!(
                        "analysis failed: {}",
                        payload.answer_text().unwrap_or(event.data.as_str())
                    )));
                }
                Some(event_types::COMPLETE) => break,
                _ => {}
            }
        }
        stream.close();
        Ok(answer)
    }
}
