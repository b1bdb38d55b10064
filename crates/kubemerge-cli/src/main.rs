mod add;
mod cli;
mod list;

use std::io;

use clap::Parser;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args = cli::Cli::parse();
    match args.command {
        cli::Command::Add(args) => add::run(&args),
        cli::Command::List(args) => list::run(&args),
    }
}
