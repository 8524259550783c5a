//! Data source port for suburb payloads.
//!
//! Implemented by the remote API adapter, the local snapshot adapter and the
//! fallback composite that chains them. All three hand back raw
//! `serde_json::Value` payloads; shaping them is the canonicalization layer's
//! job.

use crate::domain::values::domain_query::DomainQuery;
use crate::domain::values::suburb_id::SuburbId;
use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SourceError {
    /// Connection refused, timeout, DNS, TLS.
    #[error("Network error: {0}")]
    Network(String),

    /// Non-2xx response.
    #[error("HTTP {status} from {url}")]
    Status { status: u16, url: String },

    /// Body or snapshot file was not valid JSON.
    #[error("Parse error: {0}")]
    Parse(String),

    #[error("IO error: {0}")]
    Io(String),
}

/// A backend that can answer every [`DomainQuery`] for a suburb.
///
/// `Ok(None)` means "no data". Shipped adapters log and swallow their own
/// transport failures, so `Err` only surfaces from composites and doubles;
/// callers must still treat it as "no data".
#[async_trait]
pub trait SuburbSource: Send + Sync {
    /// Short name for logs ("remote", "local", "fallback").
    fn name(&self) -> &str;

    async fn fetch(
        &self,
        suburb: &SuburbId,
        query: &DomainQuery,
    ) -> Result<Option<Value>, SourceError>;

    /// Free-text suburb search. Sources without a search index return nothing.
    async fn search(&self, _query: &str) -> Result<Vec<Value>, SourceError> {
        Ok(vec![])
    }
}
