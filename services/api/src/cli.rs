use crate::commands::{run_campaigns, run_quote, run_savings, QuoteArgs, SavingsArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use ev_landing::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "ev-landing-api",
    about = "Serve the electric-motorcycle landing API or query its calculators from the command line",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Quote a monthly installment for an exact down payment and tenor
    Quote(QuoteArgs),
    /// Compare monthly fuel and electricity costs
    Savings(SavingsArgs),
    /// Inspect the campaign registry
    Campaigns {
        #[command(subcommand)]
        command: CampaignCommand,
    },
}

#[derive(Subcommand, Debug)]
pub(crate) enum CampaignCommand {
    /// List every (campaign, variant) pair
    List {
        /// Emit `campaign_id,variant_id` CSV for static page generation
        #[arg(long)]
        csv: bool,
    },
    /// Show the page descriptor for one pair
    Show {
        campaign_id: String,
        variant_id: String,
    },
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Quote(args) => run_quote(args),
        Command::Savings(args) => run_savings(args),
        Command::Campaigns { command } => run_campaigns(command),
    }
}
