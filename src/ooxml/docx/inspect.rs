//! Read-back of generated `.docx` packages.
//!
//! A streaming pass over `word/document.xml` (and the header and footer
//! parts) recovers the block structure: body-level paragraphs with their
//! style, list membership and text, and tables with their shape and cell
//! text. It is deliberately shallow; nested tables are skipped.

use crate::ir::BlockCounts;
use crate::ooxml::error::{OoxmlError, Result};
use quick_xml::Reader;
use quick_xml::escape::resolve_predefined_entity;
use quick_xml::events::{BytesStart, Event};
use std::io::{Cursor, Read};
use std::path::Path;
use zip::ZipArchive;
use zip::result::ZipError;

/// A paragraph as found in the package.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InspectedParagraph {
    /// Concatenated `w:t` text
    pub text: String,
    /// Paragraph style id, `Heading2` for section headings
    pub style: Option<String>,
    pub num_id: Option<u32>,
    /// List level (`w:ilvl`)
    pub level: Option<u8>,
    /// Paragraph holds an inline drawing
    pub has_image: bool,
}

impl InspectedParagraph {
    /// Heading rank from a `HeadingN` style id.
    pub fn heading_level(&self) -> Option<u8> {
        self.style
            .as_deref()?
            .strip_prefix("Heading")
            .and_then(|n| atoi_simd::parse::<u32, false, false>(n.as_bytes()).ok())
            .and_then(|n| u8::try_from(n).ok())
    }
}

/// A table as found in the package.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InspectedTable {
    /// Number of `w:gridCol` entries
    pub columns: usize,
    /// Rows of cells, each cell holding the text of its paragraphs
    pub rows: Vec<Vec<Vec<String>>>,
}

impl InspectedTable {
    /// Text of the first paragraph of a cell.
    pub fn cell_text(&self, row: usize, col: usize) -> Option<&str> {
        self.rows.get(row)?.get(col)?.first().map(String::as_str)
    }
}

/// A body-level block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InspectedBlock {
    Paragraph(InspectedParagraph),
    Table(InspectedTable),
}

/// Structure recovered from a `.docx` package.
#[derive(Debug, Clone, Default)]
pub struct DocumentSummary {
    pub blocks: Vec<InspectedBlock>,
    pub header: Vec<InspectedBlock>,
    pub footer: Vec<InspectedBlock>,
    /// Partnames under `word/media/`
    pub media: Vec<String>,
    /// Number of `w:num` list instances
    pub list_instances: usize,
    /// `dc:title` of the core properties
    pub title: Option<String>,
}

impl DocumentSummary {
    /// Inspect a package held in memory.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let mut archive = ZipArchive::new(Cursor::new(bytes))?;

        let document = read_part(&mut archive, "word/document.xml")?
            .ok_or_else(|| OoxmlError::PartNotFound("word/document.xml".to_string()))?;
        let mut summary = Self {
            blocks: parse_blocks(&document)?,
            ..Default::default()
        };

        if let Some(header) = read_part(&mut archive, "word/header1.xml")? {
            summary.header = parse_blocks(&header)?;
        }
        if let Some(footer) = read_part(&mut archive, "word/footer1.xml")? {
            summary.footer = parse_blocks(&footer)?;
        }
        if let Some(numbering) = read_part(&mut archive, "word/numbering.xml")? {
            summary.list_instances = count_elements(&numbering, b"num")?;
        }
        if let Some(core) = read_part(&mut archive, "docProps/core.xml")? {
            summary.title = element_text(&core, b"title")?;
        }
        summary.media = archive
            .file_names()
            .filter(|name| name.starts_with("word/media/"))
            .map(str::to_string)
            .collect();
        summary.media.sort();

        Ok(summary)
    }

    /// Inspect a package on disk.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let bytes = std::fs::read(path)?;
        Self::from_bytes(&bytes)
    }

    /// Body-level block counts, comparable with [`BlockCounts::of`].
    pub fn counts(&self) -> BlockCounts {
        self.blocks
            .iter()
            .fold(BlockCounts::default(), |mut acc, block| {
                match block {
                    InspectedBlock::Paragraph(p) if p.has_image => acc.images += 1,
                    InspectedBlock::Paragraph(_) => acc.paragraphs += 1,
                    InspectedBlock::Table(_) => acc.tables += 1,
                }
                acc
            })
    }

    pub fn paragraphs(&self) -> impl Iterator<Item = &InspectedParagraph> {
        self.blocks.iter().filter_map(|block| match block {
            InspectedBlock::Paragraph(p) => Some(p),
            InspectedBlock::Table(_) => None,
        })
    }

    pub fn tables(&self) -> impl Iterator<Item = &InspectedTable> {
        self.blocks.iter().filter_map(|block| match block {
            InspectedBlock::Table(t) => Some(t),
            InspectedBlock::Paragraph(_) => None,
        })
    }

    /// Text of the headings of a given rank, in document order.
    pub fn headings(&self, level: u8) -> Vec<&str> {
        self.paragraphs()
            .filter(|p| p.heading_level() == Some(level))
            .map(|p| p.text.as_str())
            .collect()
    }
}

fn read_part(archive: &mut ZipArchive<Cursor<&[u8]>>, name: &str) -> Result<Option<String>> {
    let mut file = match archive.by_name(name) {
        Ok(file) => file,
        Err(ZipError::FileNotFound) => return Ok(None),
        Err(e) => return Err(e.into()),
    };
    let mut xml = String::with_capacity(file.size() as usize);
    file.read_to_string(&mut xml)?;
    Ok(Some(xml))
}

fn attr_value(e: &BytesStart<'_>, name: &str) -> Result<Option<String>> {
    let attr = e
        .try_get_attribute(name)
        .map_err(|err| OoxmlError::Xml(err.to_string()))?;
    Ok(attr.map(|a| String::from_utf8_lossy(&a.value).into_owned()))
}

fn attr_number(e: &BytesStart<'_>, name: &str) -> Result<Option<u32>> {
    Ok(attr_value(e, name)?.and_then(|v| atoi_simd::parse::<u32, false, false>(v.as_bytes()).ok()))
}

/// Event handler that accumulates body-level blocks.
#[derive(Default)]
struct BlockCollector {
    blocks: Vec<InspectedBlock>,
    table_depth: usize,
    table: Option<InspectedTable>,
    paragraph: Option<InspectedParagraph>,
    in_text: bool,
}

impl BlockCollector {
    fn open(&mut self, e: &BytesStart<'_>) -> Result<()> {
        match e.local_name().as_ref() {
            b"tbl" => {
                self.table_depth += 1;
                if self.table_depth == 1 {
                    self.table = Some(InspectedTable::default());
                }
            }
            b"gridCol" if self.table_depth == 1 => {
                if let Some(table) = self.table.as_mut() {
                    table.columns += 1;
                }
            }
            b"tr" if self.table_depth == 1 => {
                if let Some(table) = self.table.as_mut() {
                    table.rows.push(Vec::new());
                }
            }
            b"tc" if self.table_depth == 1 => {
                if let Some(row) = self.table.as_mut().and_then(|t| t.rows.last_mut()) {
                    row.push(Vec::new());
                }
            }
            b"p" if self.table_depth <= 1 => {
                self.paragraph = Some(InspectedParagraph::default());
            }
            b"pStyle" => {
                if let Some(p) = self.paragraph.as_mut() {
                    p.style = attr_value(e, "w:val")?;
                }
            }
            b"ilvl" => {
                if let Some(p) = self.paragraph.as_mut() {
                    p.level = attr_number(e, "w:val")?.and_then(|l| u8::try_from(l).ok());
                }
            }
            b"numId" => {
                if let Some(p) = self.paragraph.as_mut() {
                    p.num_id = attr_number(e, "w:val")?;
                }
            }
            b"drawing" => {
                if let Some(p) = self.paragraph.as_mut() {
                    p.has_image = true;
                }
            }
            b"t" => self.in_text = true,
            b"br" => {
                if let Some(p) = self.paragraph.as_mut() {
                    p.text.push('\n');
                }
            }
            _ => {}
        }
        Ok(())
    }

    fn close(&mut self, local_name: &[u8]) {
        match local_name {
            b"t" => self.in_text = false,
            b"p" if self.table_depth <= 1 => {
                let Some(paragraph) = self.paragraph.take() else {
                    return;
                };
                if self.table_depth == 0 {
                    self.blocks.push(InspectedBlock::Paragraph(paragraph));
                } else if let Some(cell) = self
                    .table
                    .as_mut()
                    .and_then(|t| t.rows.last_mut())
                    .and_then(|r| r.last_mut())
                {
                    cell.push(paragraph.text);
                }
            }
            b"tbl" => {
                if self.table_depth == 1
                    && let Some(table) = self.table.take()
                {
                    self.blocks.push(InspectedBlock::Table(table));
                }
                self.table_depth = self.table_depth.saturating_sub(1);
            }
            _ => {}
        }
    }

    fn text(&mut self, text: &str) {
        if self.in_text
            && let Some(p) = self.paragraph.as_mut()
        {
            p.text.push_str(text);
        }
    }
}

fn parse_blocks(xml: &str) -> Result<Vec<InspectedBlock>> {
    let mut reader = Reader::from_str(xml);
    // keep the spaces of xml:space="preserve" runs
    reader.config_mut().trim_text(false);
    let mut collector = BlockCollector::default();

    loop {
        match reader.read_event()? {
            Event::Start(e) => collector.open(&e)?,
            Event::Empty(e) => {
                collector.open(&e)?;
                collector.close(e.local_name().as_ref());
            }
            Event::End(e) => collector.close(e.local_name().as_ref()),
            Event::Text(e) => {
                let text = std::str::from_utf8(e.as_ref())
                    .map_err(|err| OoxmlError::Xml(err.to_string()))?;
                collector.text(text);
            }
            Event::GeneralRef(e) => {
                if let Some(c) = e.resolve_char_ref()? {
                    collector.text(c.encode_utf8(&mut [0; 4]));
                } else {
                    let name = std::str::from_utf8(e.as_ref())
                        .map_err(|err| OoxmlError::Xml(err.to_string()))?;
                    if let Some(resolved) = resolve_predefined_entity(name) {
                        collector.text(resolved);
                    }
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(collector.blocks)
}

fn count_elements(xml: &str, local_name: &[u8]) -> Result<usize> {
    let mut reader = Reader::from_str(xml);
    let mut count = 0;
    loop {
        match reader.read_event()? {
            Event::Start(e) | Event::Empty(e) if e.local_name().as_ref() == local_name => {
                count += 1
            }
            Event::Eof => break,
            _ => {}
        }
    }
    Ok(count)
}

fn element_text(xml: &str, local_name: &[u8]) -> Result<Option<String>> {
    let mut reader = Reader::from_str(xml);
    let mut inside = false;
    let mut text: Option<String> = None;
    loop {
        match reader.read_event()? {
            Event::Start(e) if e.local_name().as_ref() == local_name => {
                inside = true;
                text = Some(String::new());
            }
            Event::End(e) if e.local_name().as_ref() == local_name => inside = false,
            Event::Text(e) if inside => {
                if let Some(text) = text.as_mut() {
                    text.push_str(&String::from_utf8_lossy(e.as_ref()));
                }
            }
            Event::GeneralRef(e) if inside => {
                let name = String::from_utf8_lossy(e.as_ref());
                if let (Some(text), Some(resolved)) = (text.as_mut(), resolve_predefined_entity(&name))
                {
                    text.push_str(resolved);
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }
    Ok(text)
}
