/// Paragraph builder.
///
/// Wraps runs into a [`Paragraph`] with spacing, indentation and an optional
/// numbering reference. When a paragraph joins a list, any manual marker the
/// author typed at the start of the first text run is removed so the number
/// does not appear twice.
use super::marker::strip_list_marker;
use crate::ir::{
    Alignment, HeadingRank, Indent, NumberingRef, Paragraph, Run, RunContent, Spacing, TabAlignment,
    TabStop,
};
use smallvec::SmallVec;

/// Spacing of ordinary body paragraphs.
pub const BODY_SPACING: Spacing = Spacing {
    before: 0,
    after: 120,
};

/// Spacing of list items.
pub const LIST_SPACING: Spacing = Spacing {
    before: 0,
    after: 60,
};

/// Spacing of headings.
pub const HEADING_SPACING: Spacing = Spacing {
    before: 240,
    after: 120,
};

/// Builder for a single paragraph.
///
/// # Examples
///
/// ```rust
/// use usecase_docgen::builder::ParagraphBuilder;
/// use usecase_docgen::builder::run::StyledRunBuilder;
/// use usecase_docgen::ir::{ListScheme, NumberingRef};
///
/// let runs = StyledRunBuilder::default();
/// let paragraph = ParagraphBuilder::new()
///     .run(runs.body("1. Users must be authenticated"))
///     .numbering(NumberingRef { scheme: ListScheme::Simple, level: 0, instance: 1 })
///     .build();
/// assert_eq!(paragraph.text(), "Users must be authenticated");
/// ```
#[derive(Debug, Clone)]
pub struct ParagraphBuilder {
    runs: SmallVec<[Run; 2]>,
    numbering: Option<NumberingRef>,
    heading: Option<HeadingRank>,
    alignment: Option<Alignment>,
    spacing: Spacing,
    indent: Option<Indent>,
    tab_stops: Vec<TabStop>,
    keep_next: bool,
    keep_marker: bool,
}

impl ParagraphBuilder {
    pub fn new() -> Self {
        Self {
            runs: SmallVec::new(),
            numbering: None,
            heading: None,
            alignment: None,
            spacing: BODY_SPACING,
            indent: None,
            tab_stops: Vec::new(),
            keep_next: false,
            keep_marker: false,
        }
    }

    #[inline]
    pub fn run(mut self, run: Run) -> Self {
        self.runs.push(run);
        self
    }

    #[inline]
    pub fn runs(mut self, runs: impl IntoIterator<Item = Run>) -> Self {
        self.runs.extend(runs);
        self
    }

    /// Attach the paragraph to a list. Switches to list spacing.
    #[inline]
    pub fn numbering(mut self, numbering: NumberingRef) -> Self {
        self.numbering = Some(numbering);
        self.spacing = LIST_SPACING;
        self
    }

    /// Keep the first run verbatim even when the paragraph is numbered.
    /// Used for form data such as column and field names.
    #[inline]
    pub fn keep_marker(mut self) -> Self {
        self.keep_marker = true;
        self
    }

    /// Mark the paragraph as a heading. Headings keep with the next paragraph.
    #[inline]
    pub fn heading(mut self, rank: HeadingRank) -> Self {
        self.heading = Some(rank);
        self.spacing = HEADING_SPACING;
        self.keep_next = true;
        self
    }

    #[inline]
    pub fn alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = Some(alignment);
        self
    }

    #[inline]
    pub fn spacing(mut self, before: u32, after: u32) -> Self {
        self.spacing = Spacing { before, after };
        self
    }

    /// Manual indentation in twips.
    #[inline]
    pub fn indent(mut self, left: u32, hanging: u32) -> Self {
        self.indent = Some(Indent { left, hanging });
        self
    }

    #[inline]
    pub fn tab_stop(mut self, alignment: TabAlignment, position: u32) -> Self {
        self.tab_stops.push(TabStop {
            alignment,
            position,
        });
        self
    }

    #[inline]
    pub fn keep_next(mut self) -> Self {
        self.keep_next = true;
        self
    }

    pub fn build(mut self) -> Paragraph {
        if self.numbering.is_some()
            && !self.keep_marker
            && let Some(first) = self
                .runs
                .iter_mut()
                .find(|r| matches!(r.content, RunContent::Text(_)))
            && let RunContent::Text(text) = &mut first.content
        {
            let stripped = strip_list_marker(text);
            if stripped.len() != text.len() {
                *text = stripped.to_string();
            }
        }

        Paragraph {
            runs: self.runs,
            numbering: self.numbering,
            heading: self.heading,
            alignment: self.alignment,
            spacing: self.spacing,
            indent: self.indent,
            tab_stops: self.tab_stops,
            keep_next: self.keep_next,
        }
    }
}

impl Default for ParagraphBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::run::StyledRunBuilder;
    use crate::ir::ListScheme;

    fn list_ref() -> NumberingRef {
        NumberingRef {
            scheme: ListScheme::Multilevel,
            level: 0,
            instance: 1,
        }
    }

    #[test]
    fn test_numbered_paragraph_strips_manual_marker() {
        let runs = StyledRunBuilder::default();
        let p = ParagraphBuilder::new()
            .run(runs.body("2) Validate the input"))
            .numbering(list_ref())
            .build();
        assert_eq!(p.text(), "Validate the input");
        assert_eq!(p.spacing, LIST_SPACING);
    }

    #[test]
    fn test_plain_paragraph_keeps_marker() {
        let runs = StyledRunBuilder::default();
        let p = ParagraphBuilder::new().run(runs.body("1. Logged in")).build();
        assert_eq!(p.text(), "1. Logged in");
        assert_eq!(p.numbering, None);
        assert_eq!(p.spacing, BODY_SPACING);
    }

    #[test]
    fn test_marker_only_stripped_from_first_text_run() {
        let runs = StyledRunBuilder::default();
        let p = ParagraphBuilder::new()
            .run(runs.bold("a. Action: "))
            .run(runs.body("b. unchanged"))
            .numbering(list_ref())
            .build();
        assert_eq!(p.text(), "Action: b. unchanged");
    }

    #[test]
    fn test_keep_marker_leaves_data_text_whole() {
        let runs = StyledRunBuilder::default();
        let p = ParagraphBuilder::new()
            .run(runs.body("CD. Code"))
            .numbering(list_ref())
            .keep_marker()
            .build();
        assert_eq!(p.text(), "CD. Code");
        assert_eq!(p.numbering, Some(list_ref()));
    }

    #[test]
    fn test_heading_keeps_with_next() {
        let runs = StyledRunBuilder::default();
        let p = ParagraphBuilder::new()
            .run(runs.heading("Description", HeadingRank::Two))
            .heading(HeadingRank::Two)
            .build();
        assert!(p.keep_next);
        assert_eq!(p.heading, Some(HeadingRank::Two));
        assert_eq!(p.spacing, HEADING_SPACING);
    }

    #[test]
    fn test_indent_and_tabs() {
        let p = ParagraphBuilder::new()
            .indent(1080, 360)
            .tab_stop(TabAlignment::Right, 9360)
            .alignment(Alignment::Center)
            .build();
        assert_eq!(
            p.indent,
            Some(Indent {
                left: 1080,
                hanging: 360
            })
        );
        assert_eq!(p.tab_stops.len(), 1);
        assert_eq!(p.alignment, Some(Alignment::Center));
    }
}
