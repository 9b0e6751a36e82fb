use quarry_protocol::models::Catalog;
use quarry_protocol::models::CreateCatalogRequest;

use crate::client::Client;
use crate::error::Result;

impl Client {
    pub async fn create_catalog(&self, request: &CreateCatalogRequest) -> Result<Catalog> {
        self.post_json("/api/v1/catalogs", request).await
    }

    pub async fn get_catalog(&self, name: &str) -> Result<Catalog> {
        self.get_json(&format!("/api/v1/catalogs/{name}"), &[]).await
    }

    pub async fn list_catalogs(&self) -> Result<Vec<Catalog>> {
        self.get_json("/api/v1/catalogs", &[]).await
    }

    pub async fn drop_catalog(&self, name: &str) -> Result<()> {
        self.delete_unit(&format!("/api/v1/catalogs/{name}")).await
    }
}
