//! Request/response types for the non-streaming REST endpoints.
//!
//! These mirror the service's JSON one-to-one. Response types lean on
//! `#[serde(default)]` so that new server-side fields never break
//! deserialization.

use serde::Deserialize;
use serde::Serialize;

// ---------------------------------------------------------------------------
// Catalogs
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize)]
pub struct CreateCatalogRequest {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Catalog {
    pub name: String,
    #[serde(default)]
    pub comment: Option<String>,
    #[serde(default)]
    pub owner: Option<String>,
    #[serde(default)]
    pub created_at: Option<i64>,
}

// ---------------------------------------------------------------------------
// Databases
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize)]
pub struct CreateDatabaseRequest {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Database {
    pub name: String,
    #[serde(default)]
    pub catalog: String,
    #[serde(default)]
    pub comment: Option<String>,
    #[serde(default)]
    pub created_at: Option<i64>,
}

// ---------------------------------------------------------------------------
// Tables
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TableColumn {
    pub name: String,
    pub r#type: String,
    #[serde(default)]
    pub nullable: bool,
    #[serde(default)]
    pub comment: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CreateTableRequest {
    pub name: String,
    pub columns: Vec<TableColumn>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Table {
    pub name: String,
    #[serde(default)]
    pub catalog: String,
    #[serde(default)]
    pub database: String,
    #[serde(default)]
    pub columns: Vec<TableColumn>,
    #[serde(default)]
    pub comment: Option<String>,
}

/// Import a server-side file (previously uploaded into a volume) into a
/// table. `path` is the value returned by the upload endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct ImportFileRequest {
    pub path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_format: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ImportFileResult {
    #[serde(default)]
    pub rows_imported: i64,
}

// ---------------------------------------------------------------------------
// Volumes and files
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize)]
pub struct CreateVolumeRequest {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Volume {
    pub name: String,
    #[serde(default)]
    pub comment: Option<String>,
    #[serde(default)]
    pub owner: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct VolumeFile {
    pub name: String,
    #[serde(default)]
    pub path: String,
    #[serde(default)]
    pub size: i64,
    #[serde(default)]
    pub is_directory: bool,
}

/// Returned by the multipart upload endpoint. `path` is the server-side
/// location fed to [`ImportFileRequest`].
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FileUploadResult {
    pub path: String,
    #[serde(default)]
    pub size: i64,
}

// ---------------------------------------------------------------------------
// Roles, users, privileges
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize)]
pub struct CreateRoleRequest {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Role {
    pub name: String,
    #[serde(default)]
    pub comment: Option<String>,
    #[serde(default)]
    pub created_at: Option<i64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CreateUserRequest {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct User {
    pub name: String,
    #[serde(default)]
    pub roles: Vec<String>,
    #[serde(default)]
    pub comment: Option<String>,
}

/// Securable object a privilege applies to, e.g. `catalog.db.table`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GrantRequest {
    pub principal: String,
    pub privilege: String,
    pub securable: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Privilege {
    pub principal: String,
    pub privilege: String,
    pub securable: String,
    #[serde(default)]
    pub granted_at: Option<i64>,
}

// ---------------------------------------------------------------------------
// NL2SQL
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize)]
pub struct Nl2SqlRequest {
    pub question: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub catalog: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub table_names: Vec<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Nl2SqlResult {
    pub sql: String,
    #[serde(default)]
    pub explanation: Option<String>,
}

// ---------------------------------------------------------------------------
// GenAI pipelines
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize)]
pub struct CreatePipelineRequest {
    pub name: String,
    pub definition: serde_json::Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Pipeline {
    pub name: String,
    #[serde(default)]
    pub definition: serde_json::Value,
    #[serde(default)]
    pub comment: Option<String>,
    #[serde(default)]
    pub created_at: Option<i64>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PipelineRun {
    pub run_id: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub output: Option<serde_json::Value>,
}

// ---------------------------------------------------------------------------
// LLM proxy sessions and messages
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize)]
pub struct CreateSessionRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ProxySession {
    pub session_id: String,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub created_at: Option<i64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CreateMessageRequest {
    pub role: String,
    pub content: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ProxyMessage {
    pub message_id: String,
    pub role: String,
    pub content: String,
    #[serde(default)]
    pub created_at: Option<i64>,
}
