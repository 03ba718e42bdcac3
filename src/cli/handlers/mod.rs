mod contact;
mod print;
mod query;
mod sections;
mod serve;
mod show;
mod tui;

pub use contact::handle_contact;
pub use query::handle_query;
pub use sections::handle_sections;
pub use serve::handle_serve;
pub use show::handle_show;
pub use tui::handle_tui;

use crate::config::FolioConfig;

/// Common context passed to all command handlers
pub struct CommandContext {
    pub config: FolioConfig,
}

impl CommandContext {
    pub fn new(config: FolioConfig) -> Self {
        Self { config }
    }
}
