use clap::{Args, Parser, Subcommand};
use surge_common::config::SurgeConfig;
use surge_core::{Dispatcher, RequestExecutor, StdoutSink};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "surge", version, about = "Concurrent burst harness for API-key rate limiters")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Fire one burst of concurrent requests at the configured endpoint
    Fire(FireArgs),
    /// Print the effective configuration
    Config,
    Version,
}

#[derive(Args, Debug)]
struct FireArgs {
    /// Target endpoint URL
    #[arg(short, long)]
    url: Option<String>,
    /// Credential sent in the X-API-Key header
    #[arg(short = 'k', long)]
    api_key: Option<String>,
    /// Number of concurrent requests in the burst
    #[arg(short = 'n', long)]
    requests: Option<usize>,
    /// Per-request timeout in seconds
    #[arg(short, long)]
    timeout_secs: Option<u64>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let cli = Cli::parse();
    match cli.command {
        Commands::Fire(args) => fire(args).await?,
        Commands::Config => show_config(),
        Commands::Version => println!("{}", env!("CARGO_PKG_VERSION")),
    }
    Ok(())
}

async fn fire(args: FireArgs) -> anyhow::Result<()> {
    let mut cfg = SurgeConfig::load();
    if let Some(url) = args.url {
        cfg.target_url = url;
    }
    if let Some(key) = args.api_key {
        cfg.api_key = key;
    }
    if let Some(n) = args.requests {
        cfg.requests = n;
    }
    if let Some(t) = args.timeout_secs {
        cfg.timeout_secs = Some(t);
    }
    tracing::debug!(target: "cli", "resolved config: {:?}", cfg);

    let executor = RequestExecutor::new(cfg.timeout())?;
    let dispatcher = Dispatcher::from_config(executor, &cfg);
    dispatcher.run(&mut StdoutSink).await;
    Ok(())
}

fn show_config() {
    let cfg = SurgeConfig::load();
    println!("target_url: {}", cfg.target_url);
    println!("api_key: {}", cfg.api_key);
    println!("requests: {}", cfg.requests);
    match cfg.timeout_secs {
        Some(t) => println!("timeout_secs: {t}"),
        None => println!("timeout_secs: none"),
    }
}

fn init_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
    );

    // Report lines own stdout; diagnostics go to stderr.
    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
