use crate::domain::ports::suburb_source::{SourceError, SuburbSource};
use crate::domain::values::domain_query::DomainQuery;
use crate::domain::values::payload;
use crate::domain::values::suburb_id::SuburbId;
use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, error, info, info_span, warn, Instrument, Span};

/// Primary-then-secondary composite.
///
/// Each call makes at most one primary and one secondary call. The secondary
/// is only consulted when the primary came back empty or failed. Errors from
/// either side are logged and read as "no data"; this type never returns
/// `Err`.
pub struct FallbackSource {
    primary: Arc<dyn SuburbSource>,
    secondary: Arc<dyn SuburbSource>,
    span: Span,
}

impl FallbackSource {
    pub fn new(primary: Arc<dyn SuburbSource>, secondary: Arc<dyn SuburbSource>) -> Self {
        Self::with_span(primary, secondary, info_span!("source", name = "fallback"))
    }

    pub fn with_span(
        primary: Arc<dyn SuburbSource>,
        secondary: Arc<dyn SuburbSource>,
        span: Span,
    ) -> Self {
        Self {
            primary,
            secondary,
            span,
        }
    }

    async fn fetch_with_fallback(&self, suburb: &SuburbId, query: &DomainQuery) -> Option<Value> {
        match self.primary.fetch(suburb, query).await {
            Ok(Some(value)) if !payload::is_empty(&value) => {
                debug!(source = self.primary.name(), suburb = %suburb, %query, "served by primary");
                return Some(value);
            }
            Ok(_) => debug!(source = self.primary.name(), %query, "primary returned no data"),
            Err(e) => warn!(source = self.primary.name(), suburb = %suburb, %query, error = %e, "primary failed"),
        }

        match self.secondary.fetch(suburb, query).await {
            Ok(Some(value)) if !payload::is_empty(&value) => {
                info!(source = self.secondary.name(), suburb = %suburb, %query, "served by fallback");
                Some(value)
            }
            Ok(_) => {
                debug!(source = self.secondary.name(), %query, "fallback returned no data");
                None
            }
            Err(e) => {
                error!(source = self.secondary.name(), suburb = %suburb, %query, error = %e, "fallback failed");
                None
            }
        }
    }

    async fn search_with_fallback(&self, query: &str) -> Vec<Value> {
        match self.primary.search(query).await {
            Ok(found) if !found.is_empty() => return found,
            Ok(_) => debug!(source = self.primary.name(), "primary search empty"),
            Err(e) => warn!(source = self.primary.name(), error = %e, "primary search failed"),
        }

        self.secondary.search(query).await.unwrap_or_else(|e| {
            error!(source = self.secondary.name(), error = %e, "fallback search failed");
            vec![]
        })
    }
}

#[async_trait]
impl SuburbSource for FallbackSource {
    fn name(&self) -> &str {
        "fallback"
    }

    async fn fetch(
        &self,
        suburb: &SuburbId,
        query: &DomainQuery,
    ) -> Result<Option<Value>, SourceError> {
        Ok(self
            .fetch_with_fallback(suburb, query)
            .instrument(tracing::debug_span!(parent: &self.span, "fetch"))
            .await)
    }

    async fn search(&self, query: &str) -> Result<Vec<Value>, SourceError> {
        Ok(self
            .search_with_fallback(query)
            .instrument(self.span.clone())
            .await)
    }
}
