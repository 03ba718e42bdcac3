use crate::model::{ChartSpec, Section};
use serde::{Deserialize, Serialize};

/// Semantic style of a block. Painters map tones to their own palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    #[default]
    Plain,
    Accent,
    Muted,
    Info,
    Success,
    Warning,
    Danger,
    Highlight,
}

/// A run of inline text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Span {
    pub text: String,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub strong: bool,
}

impl Span {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            strong: false,
        }
    }

    pub fn strong(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            strong: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricCard {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    pub label: String,
    pub value: String,
}

/// A key-triggered placeholder action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Action {
    pub key: char,
    pub label: String,
}

/// Static description of the contact form; live field values are owned by
/// the router, not the tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormView {
    pub fields: Vec<String>,
    pub subjects: Vec<String>,
    pub submit_label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "block", rename_all = "snake_case")]
pub enum Block {
    Title {
        text: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        subtitle: Option<String>,
    },
    Heading {
        text: String,
    },
    Paragraph {
        spans: Vec<Span>,
    },
    Bullets {
        items: Vec<Vec<Span>>,
    },
    Badges {
        tone: Tone,
        labels: Vec<String>,
    },
    Metrics {
        cards: Vec<MetricCard>,
    },
    Card {
        tone: Tone,
        title: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        subtitle: Option<String>,
        #[serde(default)]
        fields: Vec<Field>,
        #[serde(default)]
        body: Vec<Block>,
    },
    Table {
        headers: Vec<String>,
        rows: Vec<Vec<String>>,
    },
    Chart {
        spec: ChartSpec,
    },
    Notice {
        tone: Tone,
        text: String,
    },
    Actions {
        actions: Vec<Action>,
    },
    Form {
        form: FormView,
    },
    Divider,
}

impl Block {
    /// Visits this block and every block nested inside cards.
    pub fn walk<'a>(&'a self, visit: &mut impl FnMut(&'a Block)) {
        visit(self);
        if let Block::Card { body, .. } = self {
            for child in body {
                child.walk(visit);
            }
        }
    }
}

/// Output of a section renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderTree {
    pub section: Section,
    pub blocks: Vec<Block>,
}

impl RenderTree {
    pub fn new(section: Section) -> Self {
        Self {
            section,
            blocks: Vec::new(),
        }
    }

    pub fn push(&mut self, block: Block) -> &mut Self {
        self.blocks.push(block);
        self
    }

    pub fn extend(&mut self, blocks: impl IntoIterator<Item = Block>) -> &mut Self {
        self.blocks.extend(blocks);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Text of the leading title block.
    pub fn title(&self) -> Option<&str> {
        self.blocks.iter().find_map(|b| match b {
            Block::Title { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }

    /// Every chart in the tree, including those nested in cards.
    pub fn charts(&self) -> Vec<&ChartSpec> {
        let mut charts = Vec::new();
        for block in &self.blocks {
            block.walk(&mut |b| {
                if let Block::Chart { spec } = b {
                    charts.push(spec);
                }
            });
        }
        charts
    }

    /// Titles and headings, in document order.
    pub fn headings(&self) -> Vec<&str> {
        let mut headings = Vec::new();
        for block in &self.blocks {
            block.walk(&mut |b| match b {
                Block::Title { text, .. } | Block::Heading { text } => headings.push(text.as_str()),
                Block::Card { title, .. } => headings.push(title.as_str()),
                _ => {}
            });
        }
        headings
    }
}
