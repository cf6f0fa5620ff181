/// Run serialization.
use crate::common::escape_xml;
use crate::ir::{FieldKind, Run, RunContent, RunStyle};
use crate::ooxml::error::Result;
use std::fmt::Write as _;

/// Write the `w:rPr` of a run. Every run carries its full formatting.
fn write_properties(style: &RunStyle, xml: &mut String) -> Result<()> {
    xml.push_str("<w:rPr>");
    let font = escape_xml(&style.font_family);
    write!(
        xml,
        "<w:rFonts w:ascii=\"{font}\" w:hAnsi=\"{font}\" w:cs=\"{font}\" w:eastAsia=\"{font}\"/>"
    )?;
    if style.bold {
        xml.push_str("<w:b/><w:bCs/>");
    }
    if style.italic {
        xml.push_str("<w:i/><w:iCs/>");
    }
    if let Some(color) = style.color {
        write!(xml, "<w:color w:val=\"{}\"/>", color.to_hex())?;
    }
    write!(
        xml,
        "<w:sz w:val=\"{0}\"/><w:szCs w:val=\"{0}\"/>",
        style.size_half_points
    )?;
    xml.push_str("</w:rPr>");
    Ok(())
}

/// Write a complex field as its begin, instruction, separate, cached
/// result and end runs.
fn write_field(field: FieldKind, style: &RunStyle, xml: &mut String) -> Result<()> {
    let run = |xml: &mut String, body: &str| -> Result<()> {
        xml.push_str("<w:r>");
        write_properties(style, xml)?;
        xml.push_str(body);
        xml.push_str("</w:r>");
        Ok(())
    };

    run(xml, "<w:fldChar w:fldCharType=\"begin\"/>")?;
    run(
        xml,
        &format!(
            "<w:instrText xml:space=\"preserve\"> {} </w:instrText>",
            field.instruction()
        ),
    )?;
    run(xml, "<w:fldChar w:fldCharType=\"separate\"/>")?;
    // cached result until the word processor updates the field
    run(xml, "<w:t>1</w:t>")?;
    run(xml, "<w:fldChar w:fldCharType=\"end\"/>")
}

pub(crate) fn write_run(run: &Run, xml: &mut String) -> Result<()> {
    if let RunContent::Field(field) = run.content {
        return write_field(field, &run.style, xml);
    }

    xml.push_str("<w:r>");
    write_properties(&run.style, xml)?;
    match &run.content {
        RunContent::Text(text) if !text.is_empty() => {
            write!(xml, "<w:t xml:space=\"preserve\">{}</w:t>", escape_xml(text))?;
        }
        RunContent::Tab => xml.push_str("<w:tab/>"),
        RunContent::LineBreak => xml.push_str("<w:br/>"),
        _ => {}
    }
    xml.push_str("</w:r>");
    Ok(())
}
