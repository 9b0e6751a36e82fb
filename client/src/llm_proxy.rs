use quarry_protocol::models::CreateMessageRequest;
use quarry_protocol::models::CreateSessionRequest;
use quarry_protocol::models::ProxyMessage;
use quarry_protocol::models::ProxySession;

use crate::client::Client;
use crate::error::Result;

impl Client {
    pub async fn create_proxy_session(
        &self,
        request: &CreateSessionRequest,
    ) -> Result<ProxySession> {
        self.post_json("/api/v1/proxy/sessions", request).await
    }

    pub async fn list_proxy_sessions(&self) -> Result<Vec<ProxySession>> {
        self.get_json("/api/v1/proxy/sessions", &[]).await
    }

    pub async fn delete_proxy_session(&self, session_id: &str) -> Result<()> {
        self.delete_unit(&format!("/api/v1/proxy/sessions/{session_id}"))
            .await
    }

    pub async fn create_proxy_message(
        &self,
        session_id: &str,
        request: &CreateMessageRequest,
    ) -> Result<ProxyMessage> {
        self.post_json(
            &format!("/api/v1/proxy/sessions/{session_id}/messages"),
            request,
        )
        .await
    }

    pub async fn list_proxy_messages(&self, session_id: &str) -> Result<Vec<ProxyMessage>> {
        self.get_json(&format!("/api/v1/proxy/sessions/{session_id}/messages"), &[])
            .await
    }
}
