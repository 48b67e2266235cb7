use crewsheet::commands::Cli;
use crewsheet::libs::messages::macros::is_debug_mode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    if is_debug_mode() {
        tracing_subscriber::registry()
            .with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "crewsheet=info,tower_http=info".into()))
            .with(tracing_subscriber::fmt::layer())
            .init();
    }

    Cli::menu().await
}
