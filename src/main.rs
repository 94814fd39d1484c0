use clap::Parser;

use relnotes::{cli, command, error::Result};

fn initialize_logger(debug: bool) -> Result<()> {
    let filter = if debug {
        simplelog::LevelFilter::Debug
    } else {
        simplelog::LevelFilter::Info
    };

    let config = simplelog::ConfigBuilder::new()
        .add_filter_allow_str("relnotes")
        .build();

    simplelog::TermLogger::init(
        filter,
        config,
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let args = cli::Args::parse();

    initialize_logger(args.debug)?;

    match args.command {
        cli::Command::Changelog => command::changelog::execute(&args).await,
        cli::Command::CurrentTag => command::current_tag::execute(&args),
    }
}
