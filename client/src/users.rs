use quarry_protocol::models::CreateUserRequest;
use quarry_protocol::models::User;

use crate::client::Client;
use crate::error::Result;

impl Client {
    pub async fn create_user(&self, request: &CreateUserRequest) -> Result<User> {
        self.post_json("/api/v1/users", request).await
    }

    pub async fn get_user(&self, name: &str) -> Result<User> {
        self.get_json(&format!("/api/v1/users/{name}"), &[]).await
    }

    pub async fn list_users(&self) -> Result<Vec<User>> {
        self.get_json("/api/v1/users", &[]).await
    }

    pub async fn drop_user(&self, name: &str) -> Result<()> {
        self.delete_unit(&format!("/api/v1/users/{name}")).await
    }

    /// Bind an existing role to a user. Idempotent server-side.
    pub async fn assign_role(&self, user: &str, role: &str) -> Result<()> {
        self.post_unit(
            &format!("/api/v1/users/{user}/roles"),
            &serde_json::json!({ "role": role }),
        )
        .await
    }
}
