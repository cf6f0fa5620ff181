//! Running page header and footer.
//!
//! The header is a two-row table: the logo spans both rows on the left, the
//! document title and the project name sit on the right. The footer is one
//! paragraph right-aligned by a tab stop, carrying live page fields so the
//! word processor fills in the numbers.

use crate::builder::image::{ImageBlockBuilder, ImageRole};
use crate::builder::resolver::{OrderedResolver, Resolved};
use crate::builder::{ParagraphBuilder, StyledRunBuilder, TableBuilder};
use crate::config::DocumentConfig;
use crate::form::UseCaseForm;
use crate::ir::{Alignment, DocumentBlock, FieldKind, TabAlignment, VerticalMerge};

/// Relative widths of the logo and title columns.
const HEADER_COLUMNS: [u32; 2] = [1, 3];

/// Header and footer blocks of one document.
#[derive(Debug, Clone)]
pub struct PageDecorations {
    pub header: Vec<DocumentBlock>,
    pub footer: Vec<DocumentBlock>,
}

/// Compose the header and footer of `form`.
pub fn compose(form: &UseCaseForm, config: &DocumentConfig) -> PageDecorations {
    let runs = StyledRunBuilder::new(config.typography.clone());
    PageDecorations {
        header: compose_header(form, config, &runs),
        footer: compose_footer(form, config, &runs),
    }
}

/// Logo image from the configured candidates, or the brand mark as text.
fn logo_cell(config: &DocumentConfig, runs: &StyledRunBuilder) -> Vec<DocumentBlock> {
    let builder = ImageBlockBuilder::new(ImageRole::Logo).description(config.brand_mark.as_str());
    match OrderedResolver::new(&config.logo_candidates).resolve(|data| builder.build(data)) {
        Resolved::Found { value, .. } => vec![value.into()],
        Resolved::Fallback { errors } => {
            if !config.logo_candidates.is_empty() {
                tracing::warn!(
                    candidates = config.logo_candidates.len(),
                    failures = errors.len(),
                    "no logo candidate could be loaded, using brand mark"
                );
            }
            let mut mark = runs.bold(config.brand_mark.clone());
            mark.style.color = Some(config.typography.brand_color);
            vec![
                ParagraphBuilder::new()
                    .run(mark)
                    .alignment(Alignment::Center)
                    .spacing(0, 0)
                    .build()
                    .into(),
            ]
        }
    }
}

pub fn compose_header(
    form: &UseCaseForm,
    config: &DocumentConfig,
    runs: &StyledRunBuilder,
) -> Vec<DocumentBlock> {
    let mut title = runs.bold(config.header_title.clone());
    title.style.color = Some(config.typography.brand_color);
    let title_cell: Vec<DocumentBlock> = vec![
        ParagraphBuilder::new()
            .run(title)
            .alignment(Alignment::Center)
            .spacing(0, 0)
            .build()
            .into(),
    ];
    let project_cell: Vec<DocumentBlock> = vec![
        ParagraphBuilder::new()
            .run(runs.body(form.project_name.clone()))
            .alignment(Alignment::Center)
            .spacing(0, 0)
            .build()
            .into(),
    ];

    let table = TableBuilder::new(runs, config.page.printable_width(), HEADER_COLUMNS.len())
        .column_weights(&HEADER_COLUMNS)
        .row([logo_cell(config, runs), title_cell])
        .row([Vec::new(), project_cell])
        .vertical_merge(0, 0, VerticalMerge::Restart)
        .vertical_merge(1, 0, VerticalMerge::Continue)
        .build();
    vec![table.into()]
}

pub fn compose_footer(
    form: &UseCaseForm,
    config: &DocumentConfig,
    runs: &StyledRunBuilder,
) -> Vec<DocumentBlock> {
    let paragraph = ParagraphBuilder::new()
        .tab_stop(TabAlignment::Right, config.page.printable_width())
        .spacing(0, 0)
        .run(runs.tab())
        .run(runs.body("Page "))
        .run(runs.field(FieldKind::Page))
        .run(runs.body(" of "))
        .run(runs.field(FieldKind::NumPages))
        .run(runs.body(format!(" | {}", form.name)))
        .build();
    vec![paragraph.into()]
}
