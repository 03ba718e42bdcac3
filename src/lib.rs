//! # Folio - a terminal portfolio
//!
//! Folio presents a single person's portfolio as eight sections of static
//! content: Home, About, Skills, Experience, Projects, Achievements,
//! Certifications and Contact. Sections are rendered into structured
//! render trees that a TUI, a colored CLI printer and a GraphQL API paint.
//!
//! ## Features
//!
//! - **Page router**: exhaustive dispatch from the selected section to its renderer
//! - **Charts**: bar, radar, line, pie and scatter charts from literal data
//! - **Contact form**: validated and acknowledged locally, never delivered
//! - **TUI**: sidebar navigation with charts drawn in the terminal
//! - **GraphQL API**: the same render trees as JSON
//!
//! ## Quick Start
//!
//! ```bash
//! # Browse the portfolio
//! folio
//!
//! # Print one section
//! folio show skills
//!
//! # Send a (local) message
//! folio contact --name Jane --email jane@x.com -s general-inquiry -m "Hi"
//! ```
//!
//! ## Modules
//!
//! - [`cli`]: Command-line interface definitions
//! - [`config`]: Configuration loading
//! - [`contact`]: Contact form state and submission
//! - [`content`]: The portfolio's literal content
//! - [`error`]: Error types and result aliases
//! - [`graphql`]: GraphQL schema and server
//! - [`model`]: Sections, content entries and chart specs
//! - [`render`]: Render trees and section renderers
//! - [`router`]: Active section and dispatch
//! - [`tui`]: Terminal user interface
//! - [`validation`]: Contact input validation

/// Command-line interface definitions using clap.
pub mod cli;

/// Configuration loading.
///
/// Reads an optional TOML file named with `--config`.
pub mod config;

/// Contact form state and submission.
pub mod contact;

/// Literal portfolio content.
pub mod content;

/// Error types and result aliases.
///
/// Defines `FolioError` enum and `Result<T>` type alias.
pub mod error;

/// GraphQL schema and server.
pub mod graphql;

/// Logging setup with tracing.
pub mod logging;

/// Data models: sections, entries and chart specs.
pub mod model;

/// Render trees and the per-section renderers.
pub mod render;

/// Page router.
pub mod router;

/// Terminal user interface.
///
/// Interactive TUI built with ratatui.
pub mod tui;

/// Input validation utilities.
///
/// Validates contact names, emails and messages.
pub mod validation;
