use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use fxswitch::cli::{output::render_payload, setup::setup};
use fxswitch::core::Credential;
use fxswitch::core::log::init_logging;
use std::time::Duration;

#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to optional configuration file
    #[arg(short, long, global = true)]
    config_path: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    convert: ConvertArgs,
}

impl Cli {
    /// A bare invocation converts using the top-level flags.
    fn into_command(self) -> Commands {
        self.command.unwrap_or(Commands::Convert(self.convert))
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Convert an amount between two currencies (default)
    Convert(ConvertArgs),
    /// Create default configuration
    Setup,
}

#[derive(Args)]
struct ConvertArgs {
    /// Exchange provider: open_exchange_rate or f1_exchange_rate
    #[arg(short, long)]
    provider: Option<String>,

    /// Amount to convert
    #[arg(short, long, default_value_t = 100.0, allow_negative_numbers = true)]
    amount: f64,

    /// Source currency code
    #[arg(short, long, default_value = "USD")]
    from: String,

    /// Target currency code
    #[arg(short, long, default_value = "JPY")]
    to: String,

    /// Bearer token for providers that need one
    #[arg(short = 'k', long, env = "FXSWITCH_CREDENTIAL", hide_env_values = true)]
    credential: Option<String>,

    /// Request timeout in seconds
    #[arg(long)]
    timeout: Option<u64>,
}

impl From<ConvertArgs> for fxswitch::RunOptions {
    fn from(args: ConvertArgs) -> fxswitch::RunOptions {
        fxswitch::RunOptions {
            provider: args.provider,
            amount: args.amount,
            from: args.from,
            to: args.to,
            credential: args.credential.map(Credential::new),
            timeout: args.timeout.map(Duration::from_secs),
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let config_path = cli.config_path.clone();
    let result = match cli.into_command() {
        Commands::Setup => setup(),
        Commands::Convert(args) => {
            match fxswitch::run(args.into(), config_path.as_deref()).await {
                Ok(conversion) => render_payload(&conversion.data).map(|out| println!("{out}")),
                Err(e) => Err(e),
            }
        }
    };

    if let Err(e) = &result {
        tracing::error!(error = %e, "Application failed");
    }
    result
}
