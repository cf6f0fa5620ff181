//! Library-agnostic document intermediate representation.
//!
//! The section assembler and the block builders only ever produce these
//! types; the DOCX writer is the single consumer that turns them into
//! WordprocessingML. Blocks are plain data and are never mutated once built.

use crate::common::{ImageFormat, RGBColor};
use smallvec::SmallVec;

/// A top-level or cell-level block.
#[derive(Debug, Clone, PartialEq)]
pub enum DocumentBlock {
    Paragraph(Paragraph),
    Table(Table),
    Image(ImageBlock),
}

impl DocumentBlock {
    pub fn as_paragraph(&self) -> Option<&Paragraph> {
        match self {
            Self::Paragraph(p) => Some(p),
            _ => None,
        }
    }

    pub fn as_table(&self) -> Option<&Table> {
        match self {
            Self::Table(t) => Some(t),
            _ => None,
        }
    }

    pub fn as_image(&self) -> Option<&ImageBlock> {
        match self {
            Self::Image(i) => Some(i),
            _ => None,
        }
    }
}

impl From<Paragraph> for DocumentBlock {
    fn from(p: Paragraph) -> Self {
        Self::Paragraph(p)
    }
}

impl From<Table> for DocumentBlock {
    fn from(t: Table) -> Self {
        Self::Table(t)
    }
}

impl From<ImageBlock> for DocumentBlock {
    fn from(i: ImageBlock) -> Self {
        Self::Image(i)
    }
}

/// Number of blocks of each kind at one nesting level.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BlockCounts {
    pub paragraphs: usize,
    pub tables: usize,
    pub images: usize,
}

impl BlockCounts {
    /// Count the blocks of a list without descending into table cells.
    pub fn of(blocks: &[DocumentBlock]) -> Self {
        blocks.iter().fold(Self::default(), |mut acc, block| {
            match block {
                DocumentBlock::Paragraph(_) => acc.paragraphs += 1,
                DocumentBlock::Table(_) => acc.tables += 1,
                DocumentBlock::Image(_) => acc.images += 1,
            }
            acc
        })
    }
}

/// Fully specified character formatting of a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunStyle {
    pub font_family: String,
    /// Font size in half-points (22 = 11pt)
    pub size_half_points: u32,
    pub bold: bool,
    pub italic: bool,
    pub color: Option<RGBColor>,
}

/// Dynamic field resolved by the word processor at render time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Current page number
    Page,
    /// Total number of pages
    NumPages,
}

impl FieldKind {
    pub fn instruction(&self) -> &'static str {
        match self {
            Self::Page => "PAGE",
            Self::NumPages => "NUMPAGES",
        }
    }
}

/// Run content type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunContent {
    Text(String),
    Tab,
    LineBreak,
    Field(FieldKind),
}

/// An atomic styled text span.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Run {
    pub content: RunContent,
    pub style: RunStyle,
}

impl Run {
    /// The text of a text run, `\n` for a break, empty for tabs and fields.
    pub fn text(&self) -> &str {
        match &self.content {
            RunContent::Text(s) => s,
            RunContent::LineBreak => "\n",
            _ => "",
        }
    }
}

/// The list schemes known to the numbering registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ListScheme {
    /// decimal, lowerLetter, lowerRoman on levels 0, 1, 2
    Multilevel,
    /// single level bullet glyph
    Bullet,
    /// single level decimal
    Simple,
}

/// Reference from a paragraph to a numbering scheme.
///
/// `instance` distinguishes separate lists of the same scheme so each one
/// restarts its counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NumberingRef {
    pub scheme: ListScheme,
    pub level: u8,
    pub instance: u32,
}

/// Heading rank, 1 is the most prominent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum HeadingRank {
    One = 1,
    Two = 2,
    Three = 3,
    Four = 4,
}

impl HeadingRank {
    pub fn level(&self) -> u8 {
        *self as u8
    }

    /// Paragraph style id used for this rank.
    pub fn style_id(&self) -> &'static str {
        match self {
            Self::One => "Heading1",
            Self::Two => "Heading2",
            Self::Three => "Heading3",
            Self::Four => "Heading4",
        }
    }
}

/// Paragraph alignment options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alignment {
    Left,
    Center,
    Right,
    Justify,
}

/// Spacing around a paragraph, in twips.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Spacing {
    pub before: u32,
    pub after: u32,
}

/// Manual paragraph indentation, in twips.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Indent {
    pub left: u32,
    pub hanging: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabAlignment {
    Left,
    Center,
    Right,
}

/// A tab stop, position in twips from the left margin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TabStop {
    pub alignment: TabAlignment,
    pub position: u32,
}

/// A paragraph block.
#[derive(Debug, Clone, PartialEq)]
pub struct Paragraph {
    pub runs: SmallVec<[Run; 2]>,
    pub numbering: Option<NumberingRef>,
    pub heading: Option<HeadingRank>,
    pub alignment: Option<Alignment>,
    pub spacing: Spacing,
    pub indent: Option<Indent>,
    pub tab_stops: Vec<TabStop>,
    pub keep_next: bool,
}

impl Paragraph {
    /// Concatenated text of all text runs.
    pub fn text(&self) -> String {
        self.runs.iter().map(Run::text).collect()
    }
}

/// Border line style. Tables only use single lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BorderStyle {
    Single,
}

/// A uniform table border.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Border {
    pub style: BorderStyle,
    /// Width in eighths of a point (8 = 1pt)
    pub size: u32,
    pub color: RGBColor,
}

/// Vertical merge state of a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerticalMerge {
    /// First cell of a merged run
    Restart,
    /// Continuation of the cell above
    Continue,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TableCell {
    pub blocks: Vec<DocumentBlock>,
    /// Width in twips
    pub width: u32,
    pub shading: Option<RGBColor>,
    pub vertical_merge: Option<VerticalMerge>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TableRow {
    pub cells: Vec<TableCell>,
    pub is_header: bool,
}

/// A table block. Column widths always sum to `total_width`.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    pub rows: Vec<TableRow>,
    /// Column widths in twips
    pub column_widths: Vec<u32>,
    /// Total width in twips
    pub total_width: u32,
    pub border: Border,
}

impl Table {
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.column_widths.len()
    }

    /// Text of the first paragraph of a cell, if any.
    pub fn cell_text(&self, row: usize, col: usize) -> Option<String> {
        let cell = self.rows.get(row)?.cells.get(col)?;
        cell.blocks
            .iter()
            .find_map(DocumentBlock::as_paragraph)
            .map(Paragraph::text)
    }
}

/// An embedded raster image.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageBlock {
    pub data: Vec<u8>,
    pub format: ImageFormat,
    /// Width in EMUs (English Metric Units, 1 inch = 914400 EMUs)
    pub width_emu: i64,
    /// Height in EMUs
    pub height_emu: i64,
    pub description: String,
    pub alignment: Alignment,
}

#[cfg(test)]
mod tests {
    use super::*;
    use smallvec::smallvec;

    fn plain_run(text: &str) -> Run {
        Run {
            content: RunContent::Text(text.to_string()),
            style: RunStyle {
                font_family: "Calibri".to_string(),
                size_half_points: 22,
                bold: false,
                italic: false,
                color: None,
            },
        }
    }

    fn paragraph(runs: SmallVec<[Run; 2]>) -> Paragraph {
        Paragraph {
            runs,
            numbering: None,
            heading: None,
            alignment: None,
            spacing: Spacing::default(),
            indent: None,
            tab_stops: Vec::new(),
            keep_next: false,
        }
    }

    #[test]
    fn test_paragraph_text_skips_non_text_runs() {
        let mut tab = plain_run("");
        tab.content = RunContent::Tab;
        let p = paragraph(smallvec![plain_run("Page "), tab, plain_run("1")]);
        assert_eq!(p.text(), "Page 1");
    }

    #[test]
    fn test_block_counts_are_shallow() {
        let inner = DocumentBlock::Paragraph(paragraph(smallvec![plain_run("cell")]));
        let table = Table {
            rows: vec![TableRow {
                cells: vec![TableCell {
                    blocks: vec![inner],
                    width: 100,
                    shading: None,
                    vertical_merge: None,
                }],
                is_header: false,
            }],
            column_widths: vec![100],
            total_width: 100,
            border: Border {
                style: BorderStyle::Single,
                size: 8,
                color: RGBColor::BORDER_GRAY,
            },
        };
        let blocks = vec![
            DocumentBlock::Paragraph(paragraph(smallvec![plain_run("a")])),
            DocumentBlock::Table(table),
        ];
        let counts = BlockCounts::of(&blocks);
        assert_eq!(counts.paragraphs, 1);
        assert_eq!(counts.tables, 1);
        assert_eq!(counts.images, 0);
        assert_eq!(blocks[1].as_table().unwrap().cell_text(0, 0).unwrap(), "cell");
    }

    #[test]
    fn test_heading_rank_levels() {
        assert_eq!(HeadingRank::Two.style_id(), "Heading2");
        assert_eq!(HeadingRank::Four.level(), 4);
    }
}
