use clap::Parser;
use salesboard::adapter::inbound::cli::command::Cli;
use salesboard::adapter::inbound::cli::output::{self, OutputConfig};
use salesboard::adapter::inbound::cli::run;

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();

    let args = Cli::parse();
    output::configure(OutputConfig::new(args.json, args.quiet));

    if let Err(e) = run(args).await {
        output::error(&e.to_string());
        std::process::exit(1);
    }
}
