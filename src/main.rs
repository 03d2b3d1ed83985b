use todo_list::commands::Cli;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "todo_list=info,tower_http=debug".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    Cli::menu().await
}
