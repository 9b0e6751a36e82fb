//! Wire types shared by the Quarry client layers.
//!
//! Everything here is plain serde data: the JSON envelope wrapping every
//! non-streaming response, the per-resource request/response types, and the
//! payload shapes carried by analysis stream events. No I/O lives in this
//! crate.

pub mod analysis;
pub mod envelope;
pub mod models;

pub use analysis::AnalysisEventPayload;
pub use analysis::AnalyzeDataRequest;
pub use envelope::Envelope;
