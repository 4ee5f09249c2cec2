use std::{path::PathBuf, rc::Rc};

use anyhow::Result;
use clap::{Parser, Subcommand};

use happy_core::MapScreen;

use crate::{config::Config, gateways::HttpGateway, terminal};

#[derive(Parser)]
#[command(author, version, about = "Browse the orphanages map in a terminal")]
struct Args {
    /// Path to the configuration file
    #[arg(long, value_name = "FILE")]
    config_file: Option<PathBuf>,

    /// Base URL of the backend (overrides the configuration)
    #[arg(long, value_name = "URL")]
    api_url: Option<String>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Default)]
enum Command {
    /// Fetch the orphanages once and print the map
    #[default]
    Show,
    /// Interactively browse the map
    Browse,
}

pub async fn run() -> Result<()> {
    let args = Args::parse();
    let mut cfg = Config::try_load_from_file_or_default(args.config_file.as_ref())?;
    if let Some(api_url) = args.api_url {
        cfg.api.set_url(&api_url)?;
    }
    log::info!("Use API at {}", cfg.api.url);

    let gateway = HttpGateway::try_new(&cfg.api)?;
    let navigator = Rc::new(terminal::ConsoleNavigator::default());
    let screen = MapScreen::new(gateway, Rc::clone(&navigator))
        .with_initial_region(cfg.map.initial_region);

    match args.command.unwrap_or_default() {
        Command::Show => terminal::show(&screen).await,
        Command::Browse => terminal::browse(&screen, &navigator).await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Args::command().debug_assert();
    }

    #[test]
    fn parse_args() {
        let args = Args::try_parse_from(["happy", "--api-url", "http://localhost:3333/", "browse"])
            .unwrap();
        assert_eq!(Some("http://localhost:3333/".to_string()), args.api_url);
        assert!(matches!(args.command, Some(Command::Browse)));

        let args = Args::try_parse_from(["happy"]).unwrap();
        assert!(args.command.is_none());
        assert!(args.config_file.is_none());
    }
}
