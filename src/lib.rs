pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod telemetry;

use crate::application::aggregator::SuburbAggregator;
use crate::config::AppConfig;
use crate::domain::entities::amenities::Amenities;
use crate::domain::entities::demographics::Demographics;
use crate::domain::entities::developments::Developments;
use crate::domain::entities::market_trends::MarketTrends;
use crate::domain::entities::schools::Schools;
use crate::domain::entities::suburb::{SuburbDetail, SuburbSearchResult};
use crate::domain::error::DomainError;
use crate::domain::ports::suburb_source::SuburbSource;
use crate::domain::values::domain_query::DomainQuery;
use crate::domain::values::suburb_id::SuburbId;
use crate::infrastructure::sources::fallback::FallbackSource;
use crate::infrastructure::sources::local::LocalSource;
use crate::infrastructure::sources::remote::RemoteSource;
use serde_json::Value;
use std::sync::Arc;
use tracing::info;

pub struct SuburbInsights {
    aggregator: SuburbAggregator,
}

impl SuburbInsights {
    /// Remote API with local snapshots behind it, or snapshots alone when
    /// `use_mock_data` is set.
    pub fn new(config: &AppConfig) -> Result<Self, DomainError> {
        let local: Arc<dyn SuburbSource> = Arc::new(LocalSource::new(&config.snapshots));

        let source: Arc<dyn SuburbSource> = if config.use_mock_data {
            info!(data_dir = %config.snapshots.data_dir.display(), "serving local snapshots only");
            local
        } else {
            let remote: Arc<dyn SuburbSource> = Arc::new(RemoteSource::new(&config.remote)?);
            info!(base_url = %config.remote.base_url, "remote API with local fallback");
            Arc::new(FallbackSource::new(remote, local))
        };

        Ok(Self::with_source(source))
    }

    pub fn with_source(source: Arc<dyn SuburbSource>) -> Self {
        Self {
            aggregator: SuburbAggregator::new(source),
        }
    }

    pub async fn search(&self, query: &str) -> Vec<SuburbSearchResult> {
        self.aggregator.search(query).await
    }

    pub async fn suburb_detail(&self, suburb: &SuburbId) -> Result<SuburbDetail, DomainError> {
        self.aggregator.suburb_detail(suburb).await
    }

    pub async fn demographics(&self, suburb: &SuburbId) -> Result<Demographics, DomainError> {
        self.aggregator.demographics(suburb).await
    }

    pub async fn amenities(&self, suburb: &SuburbId) -> Result<Amenities, DomainError> {
        self.aggregator.amenities(suburb).await
    }

    pub async fn market_trends(&self, suburb: &SuburbId) -> Result<MarketTrends, DomainError> {
        self.aggregator.market_trends(suburb).await
    }

    pub async fn schools(&self, suburb: &SuburbId) -> Result<Schools, DomainError> {
        self.aggregator.schools(suburb).await
    }

    pub async fn developments(&self, suburb: &SuburbId) -> Result<Developments, DomainError> {
        self.aggregator.developments(suburb).await
    }

    pub async fn summary(&self, suburb: &SuburbId) -> Result<Value, DomainError> {
        self.aggregator.passthrough(suburb, &DomainQuery::Summary).await
    }

    pub async fn info(&self, suburb: &SuburbId, geojson: bool) -> Result<Value, DomainError> {
        self.aggregator
            .passthrough(suburb, &DomainQuery::Info { geojson })
            .await
    }

    pub async fn market_insights(
        &self,
        suburb: &SuburbId,
        metric: Option<String>,
        property_type: Option<String>,
    ) -> Result<Value, DomainError> {
        let query = DomainQuery::MarketInsights {
            metric,
            property_type,
        };
        self.aggregator.passthrough(suburb, &query).await
    }

    pub async fn pocket_insights(
        &self,
        suburb: &SuburbId,
        geojson: bool,
        property_type: Option<String>,
    ) -> Result<Value, DomainError> {
        let query = DomainQuery::PocketInsights {
            geojson,
            property_type,
        };
        self.aggregator.passthrough(suburb, &query).await
    }

    pub async fn street_insights(
        &self,
        suburb: &SuburbId,
        geojson: bool,
        property_type: Option<String>,
    ) -> Result<Value, DomainError> {
        let query = DomainQuery::StreetInsights {
            geojson,
            property_type,
        };
        self.aggregator.passthrough(suburb, &query).await
    }

    pub async fn risk(&self, suburb: &SuburbId, geojson: bool) -> Result<Value, DomainError> {
        self.aggregator
            .passthrough(suburb, &DomainQuery::Risk { geojson })
            .await
    }

    pub async fn catchments(&self, suburb: &SuburbId, geojson: bool) -> Result<Value, DomainError> {
        self.aggregator
            .passthrough(suburb, &DomainQuery::Catchments { geojson })
            .await
    }

    pub async fn zoning(&self, suburb: &SuburbId, geojson: bool) -> Result<Value, DomainError> {
        self.aggregator
            .passthrough(suburb, &DomainQuery::Zoning { geojson })
            .await
    }

    pub async fn similar_suburbs(&self, suburb: &SuburbId, geojson: bool) -> Result<Value, DomainError> {
        self.aggregator
            .passthrough(suburb, &DomainQuery::SimilarSuburbs { geojson })
            .await
    }

    pub async fn street_rankings(&self, suburb: &SuburbId, property_type: Option<String>) -> Vec<Value> {
        self.aggregator.street_rankings(suburb, property_type).await
    }
}
