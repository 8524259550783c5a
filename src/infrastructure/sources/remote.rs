use crate::config::RemoteConfig;
use crate::domain::error::DomainError;
use crate::domain::ports::suburb_source::{SourceError, SuburbSource};
use crate::domain::values::domain_query::DomainQuery;
use crate::domain::values::payload;
use crate::domain::values::suburb_id::SuburbId;
use async_trait::async_trait;
use serde_json::Value;
use tracing::{debug, info_span, warn, Instrument, Span};

/// Microburbs report-generator API client.
///
/// Every endpoint takes the suburb's display name (`"Belmont North"`), not
/// its identifier. Failures never leave this type: they are logged and
/// reported as "no data".
pub struct RemoteSource {
    base_url: String,
    token: String,
    client: reqwest::Client,
    span: Span,
}

impl RemoteSource {
    pub fn new(config: &RemoteConfig) -> Result<Self, DomainError> {
        Self::with_span(config, info_span!("source", name = "remote"))
    }

    /// Logs from this source are recorded inside `span`.
    pub fn with_span(config: &RemoteConfig, span: Span) -> Result<Self, DomainError> {
        let client = reqwest::Client::builder()
            .user_agent("suburb-insights/0.1")
            .timeout(config.timeout)
            .build()
            .map_err(|e| DomainError::Source(format!("HTTP client error: {e}")))?;

        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            token: config.token.clone(),
            client,
            span,
        })
    }

    /// Endpoint path and query parameters for one domain operation, or
    /// `None` when the service has no endpoint for it.
    fn route(name: &str, query: &DomainQuery) -> Option<(&'static str, Vec<(&'static str, String)>)> {
        let mut params = vec![("suburb", name.to_string())];
        let geojson_flag = |on: bool| if on { "true" } else { "false" }.to_string();

        let path = match query {
            DomainQuery::Info { geojson } => {
                if *geojson {
                    params.push(("geojson", "true".into()));
                }
                "/suburb/info"
            }
            DomainQuery::Summary => "/suburb/summary",
            DomainQuery::Demographics => "/suburb/demographics",
            DomainQuery::Amenities => "/suburb/amenity",
            DomainQuery::MarketTrends => "/suburb/market",
            DomainQuery::Schools => {
                params.push(("geojson", geojson_flag(true)));
                "/suburb/schools"
            }
            DomainQuery::Developments => "/suburb/development",
            DomainQuery::MarketInsights {
                metric,
                property_type,
            } => {
                if let Some(m) = metric {
                    params.push(("metric", m.clone()));
                }
                if let Some(p) = property_type {
                    params.push(("property_type", p.clone()));
                }
                "/suburb/market"
            }
            DomainQuery::PocketInsights {
                geojson,
                property_type,
            } => {
                params.push(("geojson", geojson_flag(*geojson)));
                if let Some(p) = property_type {
                    params.push(("property_type", p.clone()));
                }
                "/suburb/pocket"
            }
            // The streets endpoint ignores geojson.
            DomainQuery::StreetInsights { property_type, .. } => {
                if let Some(p) = property_type {
                    params.push(("property_type", p.clone()));
                }
                "/suburb/streets"
            }
            DomainQuery::Risk { .. } => "/suburb/risk",
            DomainQuery::Catchments { geojson } => {
                params.push(("geojson", geojson_flag(*geojson)));
                "/suburb/catchments"
            }
            DomainQuery::Zoning { geojson } => {
                params.push(("geojson", geojson_flag(*geojson)));
                "/suburb/zoning"
            }
            DomainQuery::SimilarSuburbs { geojson } => {
                params.push(("geojson", geojson_flag(*geojson)));
                "/suburb/similar"
            }
            DomainQuery::StreetRankings { .. } => return None,
        };
        Some((path, params))
    }

    async fn request(&self, path: &str, params: &[(&str, String)]) -> Result<Value, SourceError> {
        let url = format!("{}{}", self.base_url, path);
        debug!(%url, ?params, "calling Microburbs API");

        let resp = self
            .client
            .get(&url)
            .query(params)
            .bearer_auth(&self.token)
            .header("Content-Type", "application/json")
            .send()
            .await
            .map_err(|e| SourceError::Network(e.to_string()))?;

        if !resp.status().is_success() {
            return Err(SourceError::Status {
                status: resp.status().as_u16(),
                url,
            });
        }

        resp.json::<Value>()
            .await
            .map_err(|e| SourceError::Parse(e.to_string()))
    }

    /// Like [`request`](Self::request), but failures become `None` after
    /// being logged.
    async fn request_or_none(&self, path: &str, params: &[(&str, String)]) -> Option<Value> {
        match self.request(path, params).await {
            Ok(value) if !payload::is_empty(&value) => Some(value),
            Ok(_) => {
                debug!(path, "API returned an empty payload");
                None
            }
            Err(e) => {
                warn!(path, error = %e, "API request failed");
                None
            }
        }
    }

    /// Demographics come from two endpoints; ethnicity is folded into the
    /// age-bracket payload.
    async fn demographics(&self, name: &str) -> Option<Value> {
        let params = vec![("suburb", name.to_string())];
        let mut data = self.request_or_none("/suburb/demographics", &params).await?;

        if let Some(ethnicity) = self.request_or_none("/suburb/ethnicity", &params).await {
            if let Some(map) = data.as_object_mut() {
                if let Some(results) = ethnicity.get("results") {
                    map.entry("results").or_insert_with(|| results.clone());
                } else if let Some(list) = ethnicity.get("ethnicities") {
                    map.insert("ethnicities".into(), list.clone());
                }
            }
        }
        Some(data)
    }
}

#[async_trait]
impl SuburbSource for RemoteSource {
    fn name(&self) -> &str {
        "remote"
    }

    async fn fetch(
        &self,
        suburb: &SuburbId,
        query: &DomainQuery,
    ) -> Result<Option<Value>, SourceError> {
        let name = suburb.display_name();

        let fut = async {
            if matches!(query, DomainQuery::Demographics) {
                return self.demographics(&name).await;
            }
            match Self::route(&name, query) {
                Some((path, params)) => self.request_or_none(path, &params).await,
                None => {
                    debug!("no remote endpoint");
                    None
                }
            }
        };

        Ok(fut
            .instrument(tracing::debug_span!(parent: &self.span, "fetch", suburb = %suburb, %query))
            .await)
    }

    async fn search(&self, query: &str) -> Result<Vec<Value>, SourceError> {
        let params = vec![("suburb", query.to_string())];
        let found = self
            .request_or_none("/suburb/suburbs", &params)
            .instrument(self.span.clone())
            .await;

        Ok(found
            .map(|v| payload::array_field(&v, "results").iter().take(10).cloned().collect())
            .unwrap_or_default())
    }
}
