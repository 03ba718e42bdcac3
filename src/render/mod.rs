//! Render trees and the section renderers that produce them.
//!
//! A [`RenderTree`] is plain data: titles, paragraphs, badges, cards,
//! tables and [`ChartSpec`](crate::model::ChartSpec)s. The TUI, the CLI
//! printer and the GraphQL API all paint the same trees.

pub mod components;
pub mod sections;
mod tree;

pub use tree::{Action, Block, Field, FormView, MetricCard, RenderTree, Span, Tone};
