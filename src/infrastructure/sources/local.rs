use crate::config::SnapshotConfig;
use crate::domain::ports::suburb_source::{SourceError, SuburbSource};
use crate::domain::values::domain_query::DomainQuery;
use crate::domain::values::payload;
use crate::domain::values::suburb_id::SuburbId;
use async_trait::async_trait;
use serde_json::{Map, Value};
use std::path::PathBuf;
use tracing::{debug, info, info_span, warn, Span};

/// On-disk snapshot backend: one JSON object per domain, keyed by suburb id.
///
/// When the requested suburb is absent and `substitute_missing` is set, the
/// first suburb in the file stands in for it, for the canonical domains only
/// (see [`DomainQuery::substitutes_missing`]). This lets demo deployments
/// answer for any suburb, at the cost of returning another suburb's data.
pub struct LocalSource {
    data_dir: PathBuf,
    substitute_missing: bool,
    span: Span,
}

impl LocalSource {
    pub fn new(config: &SnapshotConfig) -> Self {
        Self::with_span(config, info_span!("source", name = "local"))
    }

    pub fn with_span(config: &SnapshotConfig, span: Span) -> Self {
        Self {
            data_dir: config.data_dir.clone(),
            substitute_missing: config.substitute_missing,
            span,
        }
    }

    pub fn snapshot_file(query: &DomainQuery) -> &'static str {
        match query {
            DomainQuery::Info { .. } => "suburb_info.json",
            DomainQuery::Summary => "suburb_summary.json",
            DomainQuery::Demographics => "demographics.json",
            DomainQuery::Amenities => "amenities.json",
            DomainQuery::MarketTrends => "market_trends.json",
            DomainQuery::Schools => "schools.json",
            DomainQuery::Developments => "developments.json",
            DomainQuery::MarketInsights { .. } => "market_insights.json",
            DomainQuery::PocketInsights { .. } => "pocket_insights.json",
            DomainQuery::StreetInsights { .. } => "street_insights.json",
            DomainQuery::Risk { .. } => "risk_factors.json",
            DomainQuery::Catchments { .. } => "school_catchments.json",
            DomainQuery::Zoning { .. } => "zoning.json",
            DomainQuery::SimilarSuburbs { .. } => "similar_suburbs.json",
            DomainQuery::StreetRankings { .. } => "street_rankings.json",
        }
    }

    fn load_file(&self, filename: &str) -> Result<Value, SourceError> {
        let path = self.data_dir.join(filename);
        let text = std::fs::read_to_string(&path)
            .map_err(|e| SourceError::Io(format!("{}: {e}", path.display())))?;
        serde_json::from_str(&text).map_err(|e| SourceError::Parse(format!("{}: {e}", path.display())))
    }

    /// Missing and unreadable files both mean "no data".
    fn load_or_none(&self, filename: &str) -> Option<Value> {
        match self.load_file(filename) {
            Ok(value) => Some(value),
            Err(SourceError::Io(msg)) => {
                debug!(file = filename, error = %msg, "snapshot not readable");
                None
            }
            Err(e) => {
                warn!(file = filename, error = %e, "snapshot rejected");
                None
            }
        }
    }

    fn resolve_entry(
        &self,
        mut snapshot: Map<String, Value>,
        suburb: &SuburbId,
        query: &DomainQuery,
        file: &str,
    ) -> Option<Value> {
        if let Some(entry) = snapshot.remove(suburb.as_str()) {
            return Some(entry);
        }
        if !self.substitute_missing || !query.substitutes_missing() {
            debug!(suburb = %suburb, file, "suburb not in snapshot");
            return None;
        }

        let (stand_in, entry) = snapshot.into_iter().next()?;
        info!(suburb = %suburb, stand_in = %stand_in, file, "suburb not in snapshot, substituting first entry");
        Some(entry)
    }
}

#[async_trait]
impl SuburbSource for LocalSource {
    fn name(&self) -> &str {
        "local"
    }

    async fn fetch(
        &self,
        suburb: &SuburbId,
        query: &DomainQuery,
    ) -> Result<Option<Value>, SourceError> {
        Ok(self.span.in_scope(|| self.read(suburb, query)))
    }

    async fn search(&self, query: &str) -> Result<Vec<Value>, SourceError> {
        Ok(self.span.in_scope(|| self.search_snapshot(query)))
    }
}

impl LocalSource {
    fn read(&self, suburb: &SuburbId, query: &DomainQuery) -> Option<Value> {
        let file = Self::snapshot_file(query);

        let snapshot = match self.load_or_none(file)? {
            Value::Object(map) => map,
            _ => {
                warn!(file, "snapshot is not a JSON object keyed by suburb");
                return None;
            }
        };

        self.resolve_entry(snapshot, suburb, query, file)
            .filter(|entry| !payload::is_empty(entry))
    }

    fn search_snapshot(&self, query: &str) -> Vec<Value> {
        let Some(data) = self.load_or_none("suburbs.json") else {
            return vec![];
        };

        let needle = query.to_lowercase();
        payload::array_field(&data, "suburbs")
            .iter()
            .filter(|s| {
                needle.is_empty()
                    || payload::str_field(s, "name")
                        .is_some_and(|name| name.to_lowercase().contains(&needle))
            })
            .take(10)
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_query_has_its_own_file() {
        let queries = [
            DomainQuery::Info { geojson: true },
            DomainQuery::Summary,
            DomainQuery::Demographics,
            DomainQuery::Amenities,
            DomainQuery::MarketTrends,
            DomainQuery::Schools,
            DomainQuery::Developments,
            DomainQuery::MarketInsights { metric: None, property_type: None },
            DomainQuery::PocketInsights { geojson: true, property_type: None },
            DomainQuery::StreetInsights { geojson: true, property_type: None },
            DomainQuery::Risk { geojson: true },
            DomainQuery::Catchments { geojson: true },
            DomainQuery::Zoning { geojson: true },
            DomainQuery::SimilarSuburbs { geojson: true },
            DomainQuery::StreetRankings { property_type: None },
        ];
        let mut files: Vec<_> = queries.iter().map(LocalSource::snapshot_file).collect();
        files.sort();
        files.dedup();
        assert_eq!(files.len(), queries.len());
    }
}
