use dioxus_logger::tracing::{self, Level};
use mxlab::server::{config::Config, model::app::AppState, router, startup};

#[tokio::main]
async fn main() {
    let level = if cfg!(debug_assertions) {
        Level::DEBUG
    } else {
        Level::INFO
    };
    if let Err(e) = dioxus_logger::init(level) {
        eprintln!("Failed to initialize logger: {}", e);
    }

    dotenvy::dotenv().ok();
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = run(config).await {
        tracing::error!("Server exited with error: {}", e);
        std::process::exit(1);
    }
}

async fn run(config: Config) -> Result<(), Box<dyn std::error::Error>> {
    let db = startup::connect_to_database(&config).await?;
    let storage = startup::build_blob_store(&config).await?;

    let app = router::routes().with_state(AppState {
        db,
        storage,
        asset_base_url: config.asset_base_url.clone(),
    });

    let listener = tokio::net::TcpListener::bind(&config.bind_address).await?;

    tracing::info!("Starting server on {}", config.bind_address);

    axum::serve(listener, app).await?;

    Ok(())
}
