use clap::Parser;
use log::*;

use release_changelog::{Args, Command, Result, command};

fn initialize_logger(debug: bool) -> Result<()> {
    let filter = if debug {
        simplelog::LevelFilter::Debug
    } else {
        simplelog::LevelFilter::Info
    };

    let config = simplelog::ConfigBuilder::new()
        .add_filter_allow_str("release_changelog")
        .build();

    // stdout is reserved for printed release notes
    simplelog::TermLogger::init(
        filter,
        config,
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    )?;

    Ok(())
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli_args = Args::parse();

    initialize_logger(cli_args.debug)?;

    let config = cli_args.resolve_config()?;
    debug!("resolved config: {config:#?}");

    match cli_args.command {
        Command::CheckChangelog { tag } => {
            command::check::execute(&config, &tag)
        }
        Command::PrintChangelog { tag, out_file } => {
            command::print::execute(&config, &tag, out_file.as_deref())
        }
    }
}
