use quarry_protocol::models::CreateRoleRequest;
use quarry_protocol::models::Role;

use crate::client::Client;
use crate::error::Result;

impl Client {
    pub async fn create_role(&self, request: &CreateRoleRequest) -> Result<Role> {
        self.post_json("/api/v1/roles", request).await
    }

    pub async fn get_role(&self, name: &str) -> Result<Role> {
        self.get_json(&format!("/api/v1/roles/{name}"), &[]).await
    }

    pub async fn list_roles(&self) -> Result<Vec<Role>> {
        self.get_json("/api/v1/roles", &[]).await
    }

    pub async fn drop_role(&self, name: &str) -> Result<()> {
        self.delete_unit(&format!("/api/v1/roles/{name}")).await
    }
}
