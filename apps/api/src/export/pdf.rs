//! PDF typesetting for the session document.
//!
//! # Pipeline
//! markdown → `layout_blocks` → `layout_pages` (pure, greedy line filling with
//! static Helvetica metrics) → `render_pdf` (printpdf, built-in fonts).
//!
//! Typesetting is CPU-bound; callers run `export_pdf` under
//! `tokio::task::spawn_blocking`.

use printpdf::{BuiltinFont, IndirectFontRef, Mm, PdfDocument};

use crate::export::font_metrics::{get_metrics, FontFace};
use crate::export::markup::{layout_blocks, Block};
use crate::session::SessionDocument;

// US letter with 1" margins, all in points.
const PAGE_WIDTH_PT: f32 = 612.0;
const PAGE_HEIGHT_PT: f32 = 792.0;
const MARGIN_PT: f32 = 72.0;
const COLUMN_WIDTH_PT: f32 = PAGE_WIDTH_PT - 2.0 * MARGIN_PT;

const BODY_SIZE_PT: f32 = 10.5;
const SECTION_TITLE_SIZE_PT: f32 = 18.0;
const LEADING: f32 = 1.35;
const LIST_INDENT_PT: f32 = 14.0;
const MARKER_GAP_PT: f32 = 12.0;

/// One line of text positioned on a page. `y_pt` is the baseline measured from
/// the bottom edge, as PDF expects.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedLine {
    pub text: String,
    pub x_pt: f32,
    pub y_pt: f32,
    pub size_pt: f32,
    pub face: FontFace,
}

pub type Page = Vec<PlacedLine>;

/// Builds the PDF bytes for a session document.
pub fn export_pdf(doc: &SessionDocument) -> Result<Vec<u8>, printpdf::Error> {
    let sections = [
        ("Resume", layout_blocks(&doc.resume)),
        ("Cover Letter", layout_blocks(&doc.cover_letter)),
    ];
    render_pdf(&layout_pages(&sections))
}

/// Places every block onto pages. Each section starts on a fresh page.
pub fn layout_pages(sections: &[(&str, Vec<Block>)]) -> Vec<Page> {
    let mut cursor = PageCursor::default();

    for (index, (title, blocks)) in sections.iter().enumerate() {
        if index > 0 {
            cursor.new_page();
        }
        cursor.paragraph(title, SECTION_TITLE_SIZE_PT, FontFace::Bold, 0.0);
        cursor.space(SECTION_TITLE_SIZE_PT * 0.5);

        for block in blocks {
            match block {
                Block::Heading { level, text } => {
                    cursor.space(BODY_SIZE_PT * 0.6);
                    cursor.paragraph(text, heading_size(*level), FontFace::Bold, 0.0);
                    cursor.space(BODY_SIZE_PT * 0.2);
                }
                Block::Paragraph { text } => {
                    cursor.paragraph(text, BODY_SIZE_PT, FontFace::Regular, 0.0);
                    cursor.space(BODY_SIZE_PT * 0.5);
                }
                Block::ListItem {
                    depth,
                    marker,
                    text,
                } => {
                    let indent = LIST_INDENT_PT * f32::from(*depth);
                    cursor.list_item(marker, text, indent);
                }
                Block::Rule => cursor.space(BODY_SIZE_PT),
            }
        }
    }

    cursor.finish()
}

fn heading_size(level: u8) -> f32 {
    match level {
        1 => 15.0,
        2 => 13.0,
        _ => 11.5,
    }
}

#[derive(Default)]
struct PageCursor {
    pages: Vec<Page>,
    current: Page,
    /// Vertical space consumed on the current page, below the top margin.
    used_pt: f32,
}

impl PageCursor {
    fn usable_height() -> f32 {
        PAGE_HEIGHT_PT - 2.0 * MARGIN_PT
    }

    fn new_page(&mut self) {
        self.pages.push(std::mem::take(&mut self.current));
        self.used_pt = 0.0;
    }

    fn space(&mut self, pt: f32) {
        if self.used_pt > 0.0 {
            self.used_pt = (self.used_pt + pt).min(Self::usable_height());
        }
    }

    /// Reserves one line box, breaking the page if it does not fit, and returns
    /// the baseline.
    fn next_baseline(&mut self, size_pt: f32) -> f32 {
        let line_height = size_pt * LEADING;
        if self.used_pt > 0.0 && self.used_pt + line_height > Self::usable_height() {
            self.new_page();
        }
        self.used_pt += line_height;
        PAGE_HEIGHT_PT - MARGIN_PT - self.used_pt + (line_height - size_pt)
    }

    fn place(&mut self, text: String, x_pt: f32, size_pt: f32, face: FontFace) {
        let y_pt = self.next_baseline(size_pt);
        if !text.is_empty() {
            self.current.push(PlacedLine {
                text,
                x_pt,
                y_pt,
                size_pt,
                face,
            });
        }
    }

    fn paragraph(&mut self, text: &str, size_pt: f32, face: FontFace, indent_pt: f32) {
        let max_width_em = (COLUMN_WIDTH_PT - indent_pt) / size_pt;
        for line in get_metrics(face).wrap(&sanitize(text), max_width_em) {
            self.place(line, MARGIN_PT + indent_pt, size_pt, face);
        }
    }

    fn list_item(&mut self, marker: &str, text: &str, indent_pt: f32) {
        let text_x = MARGIN_PT + indent_pt + MARKER_GAP_PT;
        let max_width_em = (COLUMN_WIDTH_PT - indent_pt - MARKER_GAP_PT) / BODY_SIZE_PT;
        let lines = get_metrics(FontFace::Regular).wrap(&sanitize(text), max_width_em);

        for (i, line) in lines.into_iter().enumerate() {
            let y_pt = self.next_baseline(BODY_SIZE_PT);
            if i == 0 && !marker.is_empty() {
                self.current.push(PlacedLine {
                    text: marker.to_string(),
                    x_pt: MARGIN_PT + indent_pt,
                    y_pt,
                    size_pt: BODY_SIZE_PT,
                    face: FontFace::Regular,
                });
            }
            if !line.is_empty() {
                self.current.push(PlacedLine {
                    text: line,
                    x_pt: text_x,
                    y_pt,
                    size_pt: BODY_SIZE_PT,
                    face: FontFace::Regular,
                });
            }
        }
        self.space(BODY_SIZE_PT * 0.15);
    }

    fn finish(mut self) -> Vec<Page> {
        self.pages.push(self.current);
        self.pages
    }
}

/// Maps text onto what the built-in (WinAnsi) fonts can draw: typographic
/// punctuation becomes ASCII, other characters outside Latin-1 become `?`,
/// control characters are dropped.
fn sanitize(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\u{2018}' | '\u{2019}' | '\u{201A}' => out.push('\''),
            '\u{201C}' | '\u{201D}' | '\u{201E}' => out.push('"'),
            '\u{2013}' | '\u{2014}' | '\u{2022}' => out.push('-'),
            '\u{2026}' => out.push_str("..."),
            '\u{00A0}' | '\t' => out.push(' '),
            '\n' => out.push('\n'),
            c if c.is_control() => {}
            c if (c as u32) <= 0xFF => out.push(c),
            _ => out.push('?'),
        }
    }
    out
}

fn pt_to_mm(pt: f32) -> Mm {
    Mm(pt * 25.4 / 72.0)
}

/// Draws laid-out pages with printpdf. An empty page list still yields one page.
pub fn render_pdf(pages: &[Page]) -> Result<Vec<u8>, printpdf::Error> {
    let width = pt_to_mm(PAGE_WIDTH_PT);
    let height = pt_to_mm(PAGE_HEIGHT_PT);
    let (doc, first_page, first_layer) =
        PdfDocument::new("Resume and Cover Letter", width, height, "Layer 1");

    let regular: IndirectFontRef = doc.add_builtin_font(BuiltinFont::Helvetica)?;
    let bold: IndirectFontRef = doc.add_builtin_font(BuiltinFont::HelveticaBold)?;

    let mut targets = vec![(first_page, first_layer)];
    for _ in 1..pages.len() {
        targets.push(doc.add_page(width, height, "Layer 1"));
    }

    for (page, (page_index, layer_index)) in pages.iter().zip(targets) {
        let layer = doc.get_page(page_index).get_layer(layer_index);

        for line in page {
            let font = match line.face {
                FontFace::Regular => &regular,
                FontFace::Bold => &bold,
            };
            layer.use_text(
                line.text.clone(),
                line.size_pt,
                pt_to_mm(line.x_pt),
                pt_to_mm(line.y_pt),
                font,
            );
        }
    }

    doc.save_to_bytes()
}
