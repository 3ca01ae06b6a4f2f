use tasklite::commands::Cli;
use tasklite::libs::messages::macros::is_debug_mode;
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if is_debug_mode() {
        fmt()
            .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("tasklite=debug")))
            .with_writer(std::io::stderr)
            .init();
    }

    Cli::menu().await
}
