use clap::Parser;
use serde::Serialize;
use suburb_insights::cli::commands::{Cli, Commands};
use suburb_insights::config::AppConfig;
use suburb_insights::domain::values::suburb_id::SuburbId;
use suburb_insights::{telemetry, SuburbInsights};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error loading configuration: {e}");
            std::process::exit(1);
        }
    };
    if let Err(e) = telemetry::init(&config.telemetry) {
        eprintln!("Error initializing logging: {e}");
        std::process::exit(1);
    }

    let insights = match SuburbInsights::new(&config) {
        Ok(insights) => insights,
        Err(e) => {
            eprintln!("Error initializing suburb-insights: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = run_command(insights, cli.command).await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

async fn run_command(si: SuburbInsights, cmd: Commands) -> Result<(), Box<dyn std::error::Error>> {
    match cmd {
        Commands::Search { query } => print(&si.search(&query).await)?,
        Commands::Detail { suburb } => print(&si.suburb_detail(&SuburbId::parse(&suburb.id)?).await?)?,
        Commands::Demographics { suburb } => print(&si.demographics(&SuburbId::parse(&suburb.id)?).await?)?,
        Commands::Amenities { suburb } => print(&si.amenities(&SuburbId::parse(&suburb.id)?).await?)?,
        Commands::MarketTrends { suburb } => print(&si.market_trends(&SuburbId::parse(&suburb.id)?).await?)?,
        Commands::Schools { suburb } => print(&si.schools(&SuburbId::parse(&suburb.id)?).await?)?,
        Commands::Developments { suburb } => print(&si.developments(&SuburbId::parse(&suburb.id)?).await?)?,
        Commands::Summary { suburb } => print(&si.summary(&SuburbId::parse(&suburb.id)?).await?)?,
        Commands::Info { suburb, no_geojson } => {
            let id = SuburbId::parse(&suburb.id)?;
            print(&si.info(&id, !no_geojson).await?)?
        }
        Commands::MarketInsights {
            suburb,
            metric,
            property_type,
        } => {
            let id = SuburbId::parse(&suburb.id)?;
            print(&si.market_insights(&id, metric, property_type).await?)?
        }
        Commands::PocketInsights {
            suburb,
            no_geojson,
            property_type,
        } => {
            let id = SuburbId::parse(&suburb.id)?;
            print(&si.pocket_insights(&id, !no_geojson, property_type).await?)?
        }
        Commands::StreetInsights {
            suburb,
            property_type,
        } => {
            let id = SuburbId::parse(&suburb.id)?;
            print(&si.street_insights(&id, true, property_type).await?)?
        }
        Commands::Risk { suburb, no_geojson } => {
            let id = SuburbId::parse(&suburb.id)?;
            print(&si.risk(&id, !no_geojson).await?)?
        }
        Commands::Catchments { suburb, no_geojson } => {
            let id = SuburbId::parse(&suburb.id)?;
            print(&si.catchments(&id, !no_geojson).await?)?
        }
        Commands::Zoning { suburb, no_geojson } => {
            let id = SuburbId::parse(&suburb.id)?;
            print(&si.zoning(&id, !no_geojson).await?)?
        }
        Commands::Similar { suburb, no_geojson } => {
            let id = SuburbId::parse(&suburb.id)?;
            print(&si.similar_suburbs(&id, !no_geojson).await?)?
        }
        Commands::StreetRankings {
            suburb,
            property_type,
        } => {
            let id = SuburbId::parse(&suburb.id)?;
            print(&si.street_rankings(&id, property_type).await)?
        }
    }
    Ok(())
}

fn print<T: Serialize>(value: &T) -> Result<(), serde_json::Error> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
