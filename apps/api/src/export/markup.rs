//! Markdown handling for generated text.
//!
//! Generated documents are treated as CommonMark. The same parse feeds the
//! HTML exporter (`render_html`) and the PDF typesetter (`layout_blocks`).

use pulldown_cmark::{html, Event, Options, Parser, Tag};

fn parser(text: &str) -> Parser<'_, '_> {
    Parser::new_ext(text, Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH)
}

/// Renders markdown to an HTML fragment. Raw HTML in the source is escaped,
/// never passed through.
pub fn render_html(text: &str) -> String {
    let events = parser(text).map(|event| match event {
        Event::Html(raw) => Event::Text(raw),
        other => other,
    });
    let mut out = String::with_capacity(text.len() * 3 / 2);
    html::push_html(&mut out, events);
    out
}

/// Joins table cells on one typeset line.
const TABLE_CELL_SEPARATOR: &str = " | ";

/// A typeset-ready block of plain text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    Heading { level: u8, text: String },
    Paragraph { text: String },
    /// `marker` is empty for continuation paragraphs inside the same item.
    ListItem { depth: u8, marker: String, text: String },
    Rule,
}

/// Flattens markdown into blocks, dropping inline styling.
pub fn layout_blocks(text: &str) -> Vec<Block> {
    let mut builder = BlockBuilder::default();
    for event in parser(text) {
        builder.push(event);
    }
    builder.flush();
    builder.blocks
}

#[derive(Default)]
struct BlockBuilder {
    blocks: Vec<Block>,
    text: String,
    heading: Option<u8>,
    /// Next ordinal per open list; `None` for bullet lists.
    lists: Vec<Option<u64>>,
    /// Marker for the open item, taken by its first flushed block.
    item_markers: Vec<Option<String>>,
    /// Cells of the open table row.
    row: Option<Vec<String>>,
}

impl BlockBuilder {
    fn push(&mut self, event: Event<'_>) {
        match event {
            Event::Start(Tag::Heading(level, _, _)) => {
                self.flush();
                self.heading = Some(level as u8);
            }
            Event::End(Tag::Heading(..)) => self.flush(),
            Event::Start(Tag::Paragraph) | Event::Start(Tag::CodeBlock(_)) => {
                if self.item_markers.is_empty() {
                    self.flush();
                }
            }
            Event::End(Tag::Paragraph) | Event::End(Tag::CodeBlock(_)) => {
                if self.item_markers.is_empty() {
                    self.flush();
                } else {
                    self.text.push('\n');
                }
            }
            Event::Start(Tag::List(start)) => {
                self.flush();
                self.lists.push(start);
            }
            Event::End(Tag::List(_)) => {
                self.flush();
                self.lists.pop();
            }
            Event::Start(Tag::Item) => {
                self.flush();
                let marker = match self.lists.last_mut() {
                    Some(Some(n)) => {
                        let marker = format!("{n}.");
                        *n += 1;
                        marker
                    }
                    _ => "-".to_string(),
                };
                self.item_markers.push(Some(marker));
            }
            Event::End(Tag::Item) => {
                self.flush();
                self.item_markers.pop();
            }
            Event::Start(Tag::Table(_)) => self.flush(),
            Event::Start(Tag::TableHead) | Event::Start(Tag::TableRow) => {
                self.flush();
                self.row = Some(Vec::new());
            }
            Event::End(Tag::TableCell) => {
                let cell = std::mem::take(&mut self.text);
                if let Some(row) = self.row.as_mut() {
                    row.push(cell.trim().to_string());
                }
            }
            Event::End(Tag::TableHead) | Event::End(Tag::TableRow) => {
                if let Some(cells) = self.row.take() {
                    if cells.iter().any(|c| !c.is_empty()) {
                        self.blocks.push(Block::Paragraph {
                            text: cells.join(TABLE_CELL_SEPARATOR),
                        });
                    }
                }
            }
            Event::Text(t) | Event::Code(t) | Event::Html(t) => self.text.push_str(&t),
            Event::SoftBreak => self.text.push(' '),
            Event::HardBreak => self.text.push('\n'),
            Event::Rule => {
                self.flush();
                self.blocks.push(Block::Rule);
            }
            _ => {}
        }
    }

    fn flush(&mut self) {
        let text = std::mem::take(&mut self.text);
        let text = text.trim_end_matches('\n').trim();
        let heading = self.heading.take();
        if text.is_empty() {
            return;
        }
        let text = text.to_string();

        let block = if let Some(level) = heading {
            Block::Heading { level, text }
        } else if let Some(marker) = self.item_markers.last_mut() {
            Block::ListItem {
                depth: self.lists.len().saturating_sub(1) as u8,
                marker: marker.take().unwrap_or_default(),
                text,
            }
        } else {
            Block::Paragraph { text }
        };
        self.blocks.push(block);
    }
}
