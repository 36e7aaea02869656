use anyhow::Result;
use clap::{CommandFactory, Parser};

use roast_cli::cli::args::{Cli, Commands, ConfigAction};
use roast_cli::cli::commands;
use roast_cli::config::settings::Settings;

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let mut settings = Settings::load_with(cli.runtime.config.as_deref())?;

    match &cli.command {
        Some(Commands::Interactive) => {
            commands::handle_interactive(&settings, &cli.input, &cli.runtime).await?
        }
        Some(Commands::Config { action }) => match action {
            ConfigAction::Init { force } => {
                Settings::init(cli.runtime.config.as_deref(), *force)?
            }
            ConfigAction::List => commands::handle_config_list(&settings)?,
            ConfigAction::Set { key, value } => commands::handle_config_set(
                &mut settings,
                key,
                value,
                cli.runtime.config.as_deref(),
            )?,
        },
        Some(Commands::Memes) => commands::handle_memes()?,
        Some(Commands::Voices) => commands::handle_voices()?,
        None => {
            if cli.has_roast_input() {
                let text = if cli.text.is_empty() {
                    None
                } else {
                    Some(cli.text.join(" "))
                };
                commands::handle_roast(&settings, text, &cli.input, &cli.runtime).await?
            } else {
                // No input at all: show help
                Cli::command().print_help()?;
                println!();
            }
        }
    }

    Ok(())
}

fn init_tracing() {
    use tracing_subscriber::EnvFilter;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .try_init();
}
