use quarry_protocol::models::GrantRequest;
use quarry_protocol::models::Privilege;

use crate::client::Client;
use crate::error::Result;

impl Client {
    pub async fn grant_privilege(&self, request: &GrantRequest) -> Result<()> {
        self.post_unit("/api/v1/privileges/grant", request).await
    }

    pub async fn revoke_privilege(&self, request: &GrantRequest) -> Result<()> {
        self.post_unit("/api/v1/privileges/revoke", request).await
    }

    pub async fn list_privileges(
        &self,
        principal: Option<&str>,
        securable: Option<&str>,
    ) -> Result<Vec<Privilege>> {
        let mut query: Vec<(&str, &str)> = Vec::new();
        if let Some(principal) = principal {
            query.push(("principal", principal));
        }
        if let Some(securable) = securable {
            query.push(("securable", securable));
        }
        self.get_json("/api/v1/privileges", &query).await
    }
}
