use crate::contact::Subject;
use crate::model::Section;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "folio")]
#[command(
    author,
    version,
    about = "A terminal portfolio: browse sections, charts and a contact form"
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Path to a TOML config file (defaults are used when omitted)
    #[arg(long, global = true)]
    pub config: Option<String>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Open the interactive portfolio (default)
    Tui,

    /// Print one section
    Show {
        /// Section id or label: home, about, skills, experience, projects,
        /// achievements, certifications or contact
        section: Section,

        /// Output the render tree as JSON
        #[arg(long)]
        json: bool,
    },

    /// List all sections
    #[command(visible_alias = "ls")]
    Sections {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Send a message through the contact form (acknowledged locally, never delivered)
    Contact {
        /// Your name
        #[arg(long, default_value = "")]
        name: String,

        /// Your email
        #[arg(long, default_value = "")]
        email: String,

        /// Subject: job-opportunity, project-collaboration, general-inquiry or other
        #[arg(short, long, default_value = "job-opportunity")]
        subject: Subject,

        /// Message body
        #[arg(short, long, default_value = "")]
        message: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Start the GraphQL server
    Serve {
        /// Port to listen on (overrides config)
        #[arg(short, long)]
        port: Option<u16>,

        /// Host to bind (overrides config)
        #[arg(long)]
        host: Option<String>,
    },

    /// Execute a GraphQL query
    Query {
        /// GraphQL query string
        query: String,

        /// Variables as JSON
        #[arg(long)]
        variables: Option<String>,
    },
}
