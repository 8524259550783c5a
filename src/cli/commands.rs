use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "suburb-insights", about = "Suburb property data from the Microburbs API with local snapshot fallback")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Suburb identifier argument shared by every per-suburb command.
#[derive(Args)]
pub struct SuburbArg {
    /// Suburb ID, e.g. belmont-north-2280
    pub id: String,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search suburbs by name
    Search {
        query: String,
    },
    /// Headline record: location, median prices
    Detail {
        #[command(flatten)]
        suburb: SuburbArg,
    },
    /// Age distribution and ethnicity breakdown
    Demographics {
        #[command(flatten)]
        suburb: SuburbArg,
    },
    /// Amenity counts by category
    Amenities {
        #[command(flatten)]
        suburb: SuburbArg,
    },
    /// Price history, growth, regional comparison and investment score
    MarketTrends {
        #[command(flatten)]
        suburb: SuburbArg,
    },
    /// Schools in the suburb
    Schools {
        #[command(flatten)]
        suburb: SuburbArg,
    },
    /// Development applications
    Developments {
        #[command(flatten)]
        suburb: SuburbArg,
    },
    /// Raw suburb summary
    Summary {
        #[command(flatten)]
        suburb: SuburbArg,
    },
    /// Raw suburb information
    Info {
        #[command(flatten)]
        suburb: SuburbArg,
        /// Omit boundary geometry
        #[arg(long)]
        no_geojson: bool,
    },
    /// Raw market insights
    MarketInsights {
        #[command(flatten)]
        suburb: SuburbArg,
        /// Metric filter (e.g. sell_price, rent_price)
        #[arg(long)]
        metric: Option<String>,
        /// Property type filter (house, unit)
        #[arg(long)]
        property_type: Option<String>,
    },
    /// Pocket-level insights
    PocketInsights {
        #[command(flatten)]
        suburb: SuburbArg,
        #[arg(long)]
        no_geojson: bool,
        #[arg(long)]
        property_type: Option<String>,
    },
    /// Street-level insights
    StreetInsights {
        #[command(flatten)]
        suburb: SuburbArg,
        #[arg(long)]
        property_type: Option<String>,
    },
    /// Risk factors (flood, bushfire, ...)
    Risk {
        #[command(flatten)]
        suburb: SuburbArg,
        #[arg(long)]
        no_geojson: bool,
    },
    /// School catchment zones
    Catchments {
        #[command(flatten)]
        suburb: SuburbArg,
        #[arg(long)]
        no_geojson: bool,
    },
    /// Zoning information
    Zoning {
        #[command(flatten)]
        suburb: SuburbArg,
        #[arg(long)]
        no_geojson: bool,
    },
    /// Similar suburbs
    Similar {
        #[command(flatten)]
        suburb: SuburbArg,
        #[arg(long)]
        no_geojson: bool,
    },
    /// Streets in the suburb as a flat list
    StreetRankings {
        #[command(flatten)]
        suburb: SuburbArg,
        #[arg(long)]
        property_type: Option<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_kebab_case_subcommands() {
        let cli = Cli::try_parse_from([
            "suburb-insights",
            "market-insights",
            "belmont-north-2280",
            "--metric",
            "sell_price",
            "--property-type",
            "unit",
        ])
        .unwrap();
        match cli.command {
            Commands::MarketInsights {
                suburb,
                metric,
                property_type,
            } => {
                assert_eq!(suburb.id, "belmont-north-2280");
                assert_eq!(metric.as_deref(), Some("sell_price"));
                assert_eq!(property_type.as_deref(), Some("unit"));
            }
            _ => panic!("wrong subcommand"),
        }
    }

    #[test]
    fn test_geojson_on_by_default() {
        let cli = Cli::try_parse_from(["suburb-insights", "info", "melbourne-3000"]).unwrap();
        assert!(matches!(cli.command, Commands::Info { no_geojson: false, .. }));

        let cli = Cli::try_parse_from(["suburb-insights", "info", "melbourne-3000", "--no-geojson"]).unwrap();
        assert!(matches!(cli.command, Commands::Info { no_geojson: true, .. }));
    }

    #[test]
    fn test_search_requires_query() {
        assert!(Cli::try_parse_from(["suburb-insights", "search"]).is_err());
    }
}
