/// Styled run builder.
///
/// Every run carries its complete style; nothing is inherited from paragraph
/// or document defaults.
use crate::config::Typography;
use crate::ir::{FieldKind, HeadingRank, Run, RunContent, RunStyle};

/// Produces runs styled from a [`Typography`].
#[derive(Debug, Clone)]
pub struct StyledRunBuilder {
    typography: Typography,
}

impl StyledRunBuilder {
    pub fn new(typography: Typography) -> Self {
        Self { typography }
    }

    pub fn typography(&self) -> &Typography {
        &self.typography
    }

    /// Style of body text: body size, regular weight, no colour.
    pub fn body_style(&self) -> RunStyle {
        RunStyle {
            font_family: self.typography.font_family.clone(),
            size_half_points: self.typography.body_size,
            bold: false,
            italic: false,
            color: None,
        }
    }

    /// Style of a heading: fixed size per rank, bold, brand colour.
    pub fn heading_style(&self, rank: HeadingRank) -> RunStyle {
        RunStyle {
            font_family: self.typography.font_family.clone(),
            size_half_points: self.typography.heading_sizes[rank.level() as usize - 1],
            bold: true,
            italic: false,
            color: Some(self.typography.brand_color),
        }
    }

    /// Plain body text.
    pub fn body(&self, text: impl Into<String>) -> Run {
        Run {
            content: RunContent::Text(text.into()),
            style: self.body_style(),
        }
    }

    /// Body text split on newlines, with a line break run between lines.
    ///
    /// Word shows a newline inside `w:t` as a space, so every line becomes
    /// its own text run.
    pub fn body_lines(&self, text: &str) -> Vec<Run> {
        let mut runs = Vec::new();
        for (index, line) in text.lines().enumerate() {
            if index > 0 {
                runs.push(self.line_break());
            }
            runs.push(self.body(line));
        }
        if runs.is_empty() {
            runs.push(self.body(String::new()));
        }
        runs
    }

    /// A line break in body style.
    pub fn line_break(&self) -> Run {
        Run {
            content: RunContent::LineBreak,
            style: self.body_style(),
        }
    }

    /// Bold body text, used for labels such as `Client:`.
    pub fn bold(&self, text: impl Into<String>) -> Run {
        let mut run = self.body(text);
        run.style.bold = true;
        run
    }

    /// Italic body text, used for placeholders.
    pub fn italic(&self, text: impl Into<String>) -> Run {
        let mut run = self.body(text);
        run.style.italic = true;
        run
    }

    /// Body-sized text in the monospace family.
    pub fn mono(&self, text: impl Into<String>) -> Run {
        let mut run = self.body(text);
        run.style.font_family = self.typography.mono_font_family.clone();
        run
    }

    /// Heading text for the given rank.
    pub fn heading(&self, text: impl Into<String>, rank: HeadingRank) -> Run {
        Run {
            content: RunContent::Text(text.into()),
            style: self.heading_style(rank),
        }
    }

    /// A tab character in body style.
    pub fn tab(&self) -> Run {
        Run {
            content: RunContent::Tab,
            style: self.body_style(),
        }
    }

    /// A live field (page number, page count) in body style.
    pub fn field(&self, kind: FieldKind) -> Run {
        Run {
            content: RunContent::Field(kind),
            style: self.body_style(),
        }
    }
}

impl Default for StyledRunBuilder {
    fn default() -> Self {
        Self::new(Typography::default())
    }
}
