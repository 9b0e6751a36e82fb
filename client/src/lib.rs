//! Typed client for the Quarry catalog service.
//!
//! The low-level surface maps one-to-one onto the REST endpoints (catalogs,
//! databases, tables, volumes, files, roles, users, privileges, NL2SQL,
//! GenAI pipelines, LLM-proxy sessions). Long-running data analysis uses a
//! Server-Sent-Events stream; see [`Client::analyze_data_stream`] and
//! [`AnalysisStream`].

mod analysis;
mod catalogs;
mod client;
mod config;
mod databases;
mod error;
mod files;
mod llm_proxy;
mod nl2sql;
mod pipelines;
mod privileges;
mod roles;
mod sse;
mod tables;
mod users;
mod volumes;

pub use client::Client;
pub use config::Config;
pub use error::Error;
pub use error::Result;
pub use sse::AnalysisStream;
pub use sse::DEFAULT_IDLE_TIMEOUT;
pub use sse::StreamEvent;
pub use sse::StreamOptions;
