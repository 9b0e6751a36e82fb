use quarry_protocol::models::CreateTableRequest;
use quarry_protocol::models::ImportFileRequest;
use quarry_protocol::models::ImportFileResult;
use quarry_protocol::models::Table;

use crate::client::Client;
use crate::error::Result;

impl Client {
    pub async fn create_table(
        &self,
        catalog: &str,
        database: &str,
        request: &CreateTableRequest,
    ) -> Result<Table> {
        self.post_json(
            &format!("/api/v1/catalogs/{catalog}/databases/{database}/tables"),
            request,
        )
        .await
    }

    pub async fn get_table(&self, catalog: &str, database: &str, name: &str) -> Result<Table> {
        self.get_json(
            &format!("/api/v1/catalogs/{catalog}/databases/{database}/tables/{name}"),
            &[],
        )
        .await
    }

    pub async fn list_tables(&self, catalog: &str, database: &str) -> Result<Vec<Table>> {
        self.get_json(
            &format!("/api/v1/catalogs/{catalog}/databases/{database}/tables"),
            &[],
        )
        .await
    }

    pub async fn drop_table(&self, catalog: &str, database: &str, name: &str) -> Result<()> {
        self.delete_unit(&format!(
            "/api/v1/catalogs/{catalog}/databases/{database}/tables/{name}"
        ))
        .await
    }

    /// Import a previously uploaded server-side file into a table. `path`
    /// comes from [`Client::upload_file`].
    pub async fn import_file(
        &self,
        catalog: &str,
        database: &str,
        table: &str,
        request: &ImportFileRequest,
    ) -> Result<ImportFileResult> {
        self.post_json(
            &format!("/api/v1/catalogs/{catalog}/databases/{database}/tables/{table}/import"),
            request,
        )
        .await
    }
}
