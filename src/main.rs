use clap::Parser;
use notehub_lib::bootstrap::{self, tracing::init_tracing_subscriber};
use notehub_lib::cli::{self, Cli};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // A missing .env file is fine; the environment may already be set.
    dotenvy::dotenv().ok();

    let args = Cli::parse();
    init_tracing_subscriber()?;

    let config = bootstrap::load_config(args.config.as_deref())?;
    let deps = bootstrap::wire(config)?;

    cli::run(args.command, deps).await
}
