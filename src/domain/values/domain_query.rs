use std::fmt;

/// One per-domain fetch operation, with the filters that domain accepts.
///
/// Every source matches on this exhaustively, so adding a variant is a
/// compile error until each backend decides how to serve it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainQuery {
    Info { geojson: bool },
    Summary,
    Demographics,
    Amenities,
    MarketTrends,
    Schools,
    Developments,
    MarketInsights {
        metric: Option<String>,
        property_type: Option<String>,
    },
    PocketInsights {
        geojson: bool,
        property_type: Option<String>,
    },
    StreetInsights {
        geojson: bool,
        property_type: Option<String>,
    },
    Risk { geojson: bool },
    Catchments { geojson: bool },
    Zoning { geojson: bool },
    SimilarSuburbs { geojson: bool },
    StreetRankings { property_type: Option<String> },
}

impl DomainQuery {
    /// Stable name used in logs and error messages.
    pub fn domain(&self) -> &'static str {
        match self {
            DomainQuery::Info { .. } => "info",
            DomainQuery::Summary => "summary",
            DomainQuery::Demographics => "demographics",
            DomainQuery::Amenities => "amenities",
            DomainQuery::MarketTrends => "market-trends",
            DomainQuery::Schools => "schools",
            DomainQuery::Developments => "developments",
            DomainQuery::MarketInsights { .. } => "market-insights",
            DomainQuery::PocketInsights { .. } => "pocket-insights",
            DomainQuery::StreetInsights { .. } => "street-insights",
            DomainQuery::Risk { .. } => "risk",
            DomainQuery::Catchments { .. } => "catchments",
            DomainQuery::Zoning { .. } => "zoning",
            DomainQuery::SimilarSuburbs { .. } => "similar-suburbs",
            DomainQuery::StreetRankings { .. } => "street-rankings",
        }
    }

    /// Domains whose snapshot may answer for an absent suburb with its first
    /// entry. The rest report absence so the caller sees `NotFound`.
    pub fn substitutes_missing(&self) -> bool {
        matches!(
            self,
            DomainQuery::Demographics
                | DomainQuery::Amenities
                | DomainQuery::MarketTrends
                | DomainQuery::Schools
                | DomainQuery::Developments
        )
    }
}

impl fmt::Display for DomainQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.domain())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_canonical_domains_substitute() {
        assert!(DomainQuery::Demographics.substitutes_missing());
        assert!(DomainQuery::Developments.substitutes_missing());
        assert!(!DomainQuery::Info { geojson: false }.substitutes_missing());
        assert!(!DomainQuery::Summary.substitutes_missing());
        assert!(!DomainQuery::Zoning { geojson: true }.substitutes_missing());
        assert!(!DomainQuery::StreetRankings { property_type: None }.substitutes_missing());
    }
}
