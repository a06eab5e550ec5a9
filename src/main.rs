use boiler_quote::app::AddressSearchUseCase;
use boiler_quote::config::{Config, Credentials, DEFAULT_CONFIG_PATH};
use boiler_quote::infra::GooglePlacesClient;
use boiler_quote::server::{start_server, AppState};
use boiler_quote::{logging, phone};
use clap::{Parser, Subcommand};
use std::sync::Arc;
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "boiler_quote")]
#[command(about = "Boiler installation quote capture service")]
#[command(version = "0.1.0")]
struct Cli {
    /// Path to the TOML configuration file
    #[arg(long, global = true, default_value = DEFAULT_CONFIG_PATH)]
    config: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP API
    Serve {
        #[arg(long, default_value_t = 8080)]
        port: u16,
    },
    /// Search the places provider and print normalized addresses as JSON
    Search {
        /// Postcode or partial address
        query: String,
    },
    /// Show how a phone number is displayed and sent for verification
    FormatPhone {
        number: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    logging::init_logging();

    let cli = Cli::parse();
    let config = Config::load_from(&cli.config)?;
    let credentials = Credentials::from_env();

    match cli.command {
        Commands::Serve { port } => {
            info!(port, "Starting quote service");
            let state = Arc::new(AppState::from_credentials(config, credentials));
            start_server(state, port).await?;
        }
        Commands::Search { query } => {
            let client = GooglePlacesClient::new(credentials.places_api_key, config.places.clone());
            let use_case = AddressSearchUseCase::new(Arc::new(client));
            match use_case.normalize(&query).await {
                Ok(addresses) => {
                    println!("{}", serde_json::to_string_pretty(&addresses)?);
                }
                Err(e) => {
                    error!("Address search failed: {}", e);
                    return Err(e.into());
                }
            }
        }
        Commands::FormatPhone { number } => {
            println!("display:      {}", phone::format_for_display(&number));
            println!("verification: {}", phone::to_e164(&number, &config.phone.default_country_code));
            println!("valid UK:     {}", phone::is_valid_uk(&number));
        }
    }
    Ok(())
}
