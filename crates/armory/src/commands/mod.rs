//! Command dispatch: routes each CLI subcommand to its handler.

pub mod assist;
pub mod config_cmd;
pub mod util;
pub mod weapons;

use clap::CommandFactory;

use armory_core::Facade;

use crate::cli::{Cli, Command, GlobalOpts};
use crate::config::{self, Config};
use crate::error::CliError;

/// Run one subcommand. Only commands that talk to the weapon service build
/// a facade.
pub async fn dispatch(cmd: Command, global: &GlobalOpts, cfg: &Config) -> Result<(), CliError> {
    match cmd {
        Command::Config(args) => config_cmd::handle(args, global),
        Command::Completions(args) => {
            let mut cmd = Cli::command();
            clap_complete::generate(args.shell, &mut cmd, "armory", &mut std::io::stdout());
            Ok(())
        }
        Command::Weapons(args) => weapons::handle(&connect(global, cfg)?, args, global).await,
        Command::Search { keyword } => {
            assist::search(&connect(global, cfg)?, &keyword, global).await
        }
        Command::Ask { prompt } => {
            assist::ask(&connect(global, cfg)?, &prompt.join(" "), global).await
        }
    }
}

fn connect(global: &GlobalOpts, cfg: &Config) -> Result<Facade, CliError> {
    let facade_config = config::resolve_facade_config(global, cfg)?;
    Ok(Facade::new(facade_config)?)
}
