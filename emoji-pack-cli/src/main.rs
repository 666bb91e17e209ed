//! emoji-pack CLI
//!
//! Turns a directory of categorized images into an emoji import archive.

mod cli_types;
mod commands;
mod error;
mod logging;

use clap::Parser;

use cli_types::{Cli, Commands, ConfigAction};
use commands::config::{run_config_path, run_config_show};
use commands::pack::{PackArgs, run_pack};

fn main() {
    let cli = Cli::parse();

    if let Err(e) = logging::init(cli.quiet, cli.verbose, cli.logfile.as_deref()) {
        eprintln!("{e}");
        std::process::exit(1);
    }

    let result = match cli.command {
        Commands::Pack {
            input,
            output,
            license,
            level,
            dry_run,
        } => run_pack(
            PackArgs {
                input,
                output,
                license,
                level,
                dry_run,
            },
            cli.quiet,
        ),
        Commands::Config { action } => match action {
            ConfigAction::Show => run_config_show(),
            ConfigAction::Path => {
                run_config_path();
                Ok(())
            }
        },
    };

    if let Err(e) = result {
        log::error!("{e}");
        std::process::exit(1);
    }
}
