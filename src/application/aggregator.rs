use crate::application::canonicalize;
use crate::application::market_analytics;
use crate::domain::entities::amenities::Amenities;
use crate::domain::entities::demographics::Demographics;
use crate::domain::entities::developments::Developments;
use crate::domain::entities::market_trends::MarketTrends;
use crate::domain::entities::schools::Schools;
use crate::domain::entities::suburb::{SuburbDetail, SuburbSearchResult};
use crate::domain::error::DomainError;
use crate::domain::ports::suburb_source::SuburbSource;
use crate::domain::values::domain_query::DomainQuery;
use crate::domain::values::payload;
use crate::domain::values::suburb_id::SuburbId;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, info_span, warn, Instrument, Span};

/// Turns whatever the source returns into canonical records.
///
/// Each operation is a fixed sequence of awaited fetches followed by a pure
/// transform. `NotFound` is only reported when the source had nothing at
/// all for the requested domain.
pub struct SuburbAggregator {
    source: Arc<dyn SuburbSource>,
    span: Span,
}

impl SuburbAggregator {
    pub fn new(source: Arc<dyn SuburbSource>) -> Self {
        Self::with_span(source, info_span!("aggregator"))
    }

    pub fn with_span(source: Arc<dyn SuburbSource>, span: Span) -> Self {
        Self { source, span }
    }

    async fn fetch(&self, suburb: &SuburbId, query: &DomainQuery) -> Option<Value> {
        let fetched = self
            .source
            .fetch(suburb, query)
            .instrument(self.span.clone())
            .await;
        match fetched {
            Ok(Some(value)) if !payload::is_empty(&value) => Some(value),
            Ok(_) => None,
            Err(e) => {
                warn!(source = self.source.name(), %query, error = %e, "source failed");
                None
            }
        }
    }

    async fn require(&self, suburb: &SuburbId, query: &DomainQuery) -> Result<Value, DomainError> {
        self.fetch(suburb, query)
            .await
            .ok_or_else(|| DomainError::NotFound(format!("{query} data for {suburb}")))
    }

    pub async fn search(&self, query: &str) -> Vec<SuburbSearchResult> {
        let found = self.source.search(query).instrument(self.span.clone()).await;
        let hits = found.unwrap_or_else(|e| {
            warn!(source = self.source.name(), error = %e, "search failed");
            vec![]
        });
        hits.iter().map(canonicalize::search_result).collect()
    }

    pub async fn suburb_detail(&self, suburb: &SuburbId) -> Result<SuburbDetail, DomainError> {
        let info = self.fetch(suburb, &DomainQuery::Info { geojson: false }).await;
        let summary = self.fetch(suburb, &DomainQuery::Summary).await;
        let market = self.fetch(suburb, &DomainQuery::MarketTrends).await;

        if info.is_none() && summary.is_none() && market.is_none() {
            return Err(DomainError::NotFound(format!("suburb {suburb}")));
        }
        Ok(canonicalize::suburb_detail(suburb, info.as_ref(), market.as_ref()))
    }

    pub async fn demographics(&self, suburb: &SuburbId) -> Result<Demographics, DomainError> {
        let raw = self.require(suburb, &DomainQuery::Demographics).await?;
        Ok(canonicalize::demographics(&raw))
    }

    pub async fn amenities(&self, suburb: &SuburbId) -> Result<Amenities, DomainError> {
        let raw = self.require(suburb, &DomainQuery::Amenities).await?;
        Ok(canonicalize::amenities(&raw))
    }

    pub async fn market_trends(&self, suburb: &SuburbId) -> Result<MarketTrends, DomainError> {
        let raw = self.require(suburb, &DomainQuery::MarketTrends).await?;
        Ok(market_analytics::market_trends(&raw))
    }

    pub async fn schools(&self, suburb: &SuburbId) -> Result<Schools, DomainError> {
        let raw = self.require(suburb, &DomainQuery::Schools).await?;
        Ok(canonicalize::schools(&raw))
    }

    pub async fn developments(&self, suburb: &SuburbId) -> Result<Developments, DomainError> {
        let raw = self.require(suburb, &DomainQuery::Developments).await?;
        Ok(canonicalize::developments(&raw))
    }

    /// Raw payload for the domains that are served unchanged: summary, info,
    /// market/pocket/street insights, risk, catchments, zoning and similar
    /// suburbs.
    pub async fn passthrough(&self, suburb: &SuburbId, query: &DomainQuery) -> Result<Value, DomainError> {
        self.require(suburb, query).await
    }

    /// Street rankings from the source when it has them, otherwise derived
    /// from street insights. Never `NotFound`; no data is an empty list.
    pub async fn street_rankings(&self, suburb: &SuburbId, property_type: Option<String>) -> Vec<Value> {
        let rankings = DomainQuery::StreetRankings {
            property_type: property_type.clone(),
        };
        if let Some(raw) = self.fetch(suburb, &rankings).await {
            let streets = canonicalize::street_rankings(&raw);
            if !streets.is_empty() {
                return streets;
            }
        }

        let insights = DomainQuery::StreetInsights {
            geojson: false,
            property_type,
        };
        match self.fetch(suburb, &insights).await {
            Some(raw) => canonicalize::street_rankings(&raw),
            None => {
                debug!(suburb = %suburb, "no street data");
                vec![]
            }
        }
    }
}
