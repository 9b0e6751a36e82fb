use quarry_protocol::models::CreateDatabaseRequest;
use quarry_protocol::models::Database;

use crate::client::Client;
use crate::error::Result;

impl Client {
    pub async fn create_database(
        &self,
        catalog: &str,
        request: &CreateDatabaseRequest,
    ) -> Result<Database> {
        self.post_json(&format!("/api/v1/catalogs/{catalog}/databases"), request)
            .await
    }

    pub async fn get_database(&self, catalog: &str, name: &str) -> Result<Database> {
        self.get_json(&format!("/api/v1/catalogs/{catalog}/databases/{name}"), &[])
            .await
    }

    pub async fn list_databases(&self, catalog: &str) -> Result<Vec<Database>> {
        self.get_json(&format!("/api/v1/catalogs/{catalog}/databases"), &[])
            .await
    }

    pub async fn drop_database(&self, catalog: &str, name: &str) -> Result<()> {
        self.delete_unit(&format!("/api/v1/catalogs/{catalog}/databases/{name}"))
            .await
    }
}
