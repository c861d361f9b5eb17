//! Pagination — pure layout pass from classified blocks to placed lines.
//!
//! Word-wraps each block at the text width for its font, stacks lines down
//! the column, and starts a new page when the next line would cross the
//! bottom margin. Every block — blank lines included — is followed by the
//! fixed spacer, so the source text's vertical rhythm survives page breaks.

use crate::render::blocks::{Block, BlockKind};
use crate::render::font_metrics::{metrics_for, PageConfig};

/// One laid-out line with its baseline position (points from the page bottom).
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedLine {
    pub text: String,
    pub kind: BlockKind,
    pub baseline_y_pt: f32,
}

/// All lines placed on a single page.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PageLayout {
    pub lines: Vec<PlacedLine>,
}

/// Lays out blocks into one or more pages. Always returns at least one page.
pub fn paginate(blocks: &[Block], config: &PageConfig) -> Vec<PageLayout> {
    let top = config.page_height_pt - config.margin_pt;
    let mut pages: Vec<PageLayout> = Vec::new();
    let mut current = PageLayout::default();
    let mut cursor = top;

    for block in blocks {
        let size = config.font_size_for(block.kind);
        let line_height = size * config.line_height;
        let max_width_em = config.text_width_pt() / size;
        let metrics = metrics_for(block.kind);

        for line in metrics.wrap_words(&block.text, max_width_em) {
            if cursor - line_height < config.margin_pt && !current.lines.is_empty() {
                pages.push(std::mem::take(&mut current));
                cursor = top;
            }
            cursor -= line_height;
            current.lines.push(PlacedLine {
                text: line,
                kind: block.kind,
                baseline_y_pt: cursor,
            });
        }

        // Fixed spacer after every block, regardless of classification.
        cursor -= config.spacer_pt;
    }

    pages.push(current);
    pages
}
