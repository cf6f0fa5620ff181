/// Table builder.
///
/// Turns a matrix of cell contents into a [`Table`] with explicit column
/// widths. Column weights are distributed over the total width so that the
/// widths always sum to it exactly. A mismatched row or column count is a
/// programming error and panics.
use super::paragraph::ParagraphBuilder;
use super::run::StyledRunBuilder;
use crate::common::RGBColor;
use crate::ir::{
    Alignment, Border, BorderStyle, DocumentBlock, Table, TableCell, TableRow, VerticalMerge,
};

/// The uniform 1pt gray border of generated tables.
pub const DEFAULT_BORDER: Border = Border {
    style: BorderStyle::Single,
    size: 8,
    color: RGBColor::BORDER_GRAY,
};

/// Content of one cell before it is built.
#[derive(Debug, Clone)]
pub enum CellContent {
    /// Text styled by the builder (bold and centred in a header row)
    Text(String),
    /// Prebuilt blocks placed as-is
    Blocks(Vec<DocumentBlock>),
}

impl From<&str> for CellContent {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for CellContent {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<Vec<DocumentBlock>> for CellContent {
    fn from(blocks: Vec<DocumentBlock>) -> Self {
        Self::Blocks(blocks)
    }
}

/// Split `total` into widths proportional to `weights`.
///
/// Rounding remainder goes to the last column, so the result always sums to
/// `total`.
///
/// # Panics
///
/// Panics if `weights` is empty or sums to zero.
pub fn distribute_widths(weights: &[u32], total: u32) -> Vec<u32> {
    let weight_sum: u64 = weights.iter().map(|w| *w as u64).sum();
    assert!(weight_sum > 0, "column weights must not be empty or all zero");

    let mut widths: Vec<u32> = weights
        .iter()
        .map(|w| ((*w as u64 * total as u64) / weight_sum) as u32)
        .collect();
    let assigned: u32 = widths.iter().sum();
    if let Some(last) = widths.last_mut() {
        *last += total - assigned;
    }
    widths
}

/// Builder for a bordered table.
#[derive(Debug, Clone)]
pub struct TableBuilder<'a> {
    runs: &'a StyledRunBuilder,
    total_width: u32,
    weights: Vec<u32>,
    header: bool,
    rows: Vec<Vec<CellContent>>,
    merges: Vec<(usize, usize, VerticalMerge)>,
    border: Border,
}

impl<'a> TableBuilder<'a> {
    /// Start a table of `total_width` twips with `columns` equal columns.
    pub fn new(runs: &'a StyledRunBuilder, total_width: u32, columns: usize) -> Self {
        Self {
            runs,
            total_width,
            weights: vec![1; columns],
            header: false,
            rows: Vec::new(),
            merges: Vec::new(),
            border: DEFAULT_BORDER,
        }
    }

    /// Relative column weights. Also fixes the column count.
    #[inline]
    pub fn column_weights(mut self, weights: &[u32]) -> Self {
        self.weights = weights.to_vec();
        self
    }

    /// Treat row 0 as a shaded header row.
    #[inline]
    pub fn header_row(mut self) -> Self {
        self.header = true;
        self
    }

    #[inline]
    pub fn border(mut self, border: Border) -> Self {
        self.border = border;
        self
    }

    /// Append a row.
    pub fn row<I, C>(mut self, cells: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<CellContent>,
    {
        self.rows.push(cells.into_iter().map(Into::into).collect());
        self
    }

    /// Vertically merge cell `(row, col)`.
    #[inline]
    pub fn vertical_merge(mut self, row: usize, col: usize, merge: VerticalMerge) -> Self {
        self.merges.push((row, col, merge));
        self
    }

    fn text_cell(&self, text: String, header: bool) -> Vec<DocumentBlock> {
        let paragraph = if header {
            ParagraphBuilder::new()
                .run(self.runs.bold(text))
                .alignment(Alignment::Center)
        } else {
            ParagraphBuilder::new()
                .run(self.runs.body(text))
                .alignment(Alignment::Left)
        };
        vec![paragraph.spacing(0, 0).build().into()]
    }

    /// Build the table.
    ///
    /// # Panics
    ///
    /// Panics when a row does not have exactly one cell per column or a merge
    /// targets a cell outside the table.
    pub fn build(self) -> Table {
        let columns = self.weights.len();
        let column_widths = distribute_widths(&self.weights, self.total_width);

        for (index, row) in self.rows.iter().enumerate() {
            assert_eq!(
                row.len(),
                columns,
                "row {index} has {} cells, table has {columns} columns",
                row.len()
            );
        }

        let mut rows: Vec<TableRow> = self
            .rows
            .iter()
            .enumerate()
            .map(|(r, cells)| {
                let is_header = self.header && r == 0;
                let cells = cells
                    .iter()
                    .zip(&column_widths)
                    .map(|(content, width)| TableCell {
                        blocks: match content {
                            CellContent::Text(text) => self.text_cell(text.clone(), is_header),
                            CellContent::Blocks(blocks) => blocks.clone(),
                        },
                        width: *width,
                        shading: is_header.then_some(RGBColor::HEADER_TINT),
                        vertical_merge: None,
                    })
                    .collect();
                TableRow { cells, is_header }
            })
            .collect();

        for (row, col, merge) in &self.merges {
            let cell = rows
                .get_mut(*row)
                .and_then(|r| r.cells.get_mut(*col))
                .unwrap_or_else(|| panic!("merge target ({row}, {col}) is outside the table"));
            cell.vertical_merge = Some(*merge);
        }

        Table {
            rows,
            column_widths,
            total_width: self.total_width,
            border: self.border,
        }
    }
}
