use crate::demo::{run_demo, run_label, DemoArgs, LabelArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use energy_label::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Vehicle Energy Label Service",
    about = "Serve and inspect vehicle energy labels from the command line",
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
    /// Resolve one vehicle and print its energy label card
    Label(LabelArgs),
    /// Walk the selection cascade over a built-in sample dataset
    Demo(DemoArgs),
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
        Command::Label(args) => run_label(args),
        Command::Demo(args) => run_demo(args),
    }
}
