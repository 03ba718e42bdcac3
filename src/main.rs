use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use folio::cli::handlers::{
    CommandContext, handle_contact, handle_query, handle_sections, handle_serve, handle_show,
    handle_tui,
};
use folio::cli::{Cli, Commands};
use folio::config::FolioConfig;
use folio::logging;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config_path = cli.config.as_deref().map(PathBuf::from);
    let config = FolioConfig::load_or_default(config_path.as_deref())
        .with_context(|| format!("failed to load config {}", cli.config.as_deref().unwrap_or("")))?;

    let is_tui = matches!(cli.command, None | Some(Commands::Tui));
    logging::init(cli.verbose, config.logging.file.clone(), !is_tui);

    let ctx = CommandContext::new(config);

    match cli.command {
        None | Some(Commands::Tui) => handle_tui(ctx).context("TUI failed"),
        Some(Commands::Show { section, json }) => handle_show(section, json),
        Some(Commands::Sections { json }) => handle_sections(json),
        Some(Commands::Contact {
            name,
            email,
            subject,
            message,
            json,
        }) => handle_contact(name, email, subject, message, json),
        Some(Commands::Serve { port, host }) => {
            handle_serve(ctx, port, host).context("GraphQL server failed")
        }
        Some(Commands::Query { query, variables }) => handle_query(query, variables),
    }
}
