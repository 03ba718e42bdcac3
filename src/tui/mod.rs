//! Terminal user interface for the portfolio.
//!
//! A sidebar lists the sections; the content pane paints the active
//! section's render tree, charts included.
//!
//! ## Usage
//!
//! ```bash
//! folio        # or: folio tui
//! ```
//!
//! ## Keybindings
//!
//! - `↑/↓`, `j/k`, `Tab`: Previous/next section
//! - `1`-`8`: Jump to a section
//! - `J/K`, `PgDn/PgUp`: Scroll the content
//! - `g/G`: Top/end of the content
//! - `f`: Edit the contact form (Contact section)
//! - `l`/`h`/`m`: LinkedIn, GitHub and Email placeholders (Contact section)
//! - `?`: Help
//! - `q`, `Esc`: Quit
//!
//! In the contact form `Tab`/`Shift-Tab` move between fields, `←/→` change
//! the subject, `Enter` submits and `Esc` returns to navigation.

pub mod app;
mod handlers;
pub mod theme;
pub mod ui;
mod ui_charts;
mod ui_utils;
mod ui_views;

pub use app::{App, InputMode, run_tui};
