/// `word/numbering.xml` generation.
///
/// Every scheme becomes one `w:abstractNum`. Every list instance met while
/// writing the parts becomes one `w:num` that overrides the start value, so
/// separate lists of the same scheme restart at 1.
use crate::builder::numbering::{NumberFormat, NumberingRegistry};
use crate::common::escape_xml;
use crate::ir::ListScheme;
use crate::ooxml::error::Result;
use std::collections::HashMap;
use std::fmt::Write as _;

/// List instances in order of first use.
#[derive(Debug, Default)]
pub(crate) struct NumberingInstances {
    ids: HashMap<(ListScheme, u32), u32>,
    order: Vec<ListScheme>,
}

impl NumberingInstances {
    /// `w:numId` of an instance, allocated on first use starting at 1.
    pub fn num_id(&mut self, scheme: ListScheme, instance: u32) -> u32 {
        let next = self.order.len() as u32 + 1;
        *self.ids.entry((scheme, instance)).or_insert_with(|| {
            self.order.push(scheme);
            next
        })
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

pub(crate) fn numbering_xml(
    registry: &NumberingRegistry,
    instances: &NumberingInstances,
) -> Result<String> {
    let mut xml = String::with_capacity(4096);
    xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
    xml.push('\n');
    xml.push_str(
        r#"<w:numbering xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">"#,
    );

    for definition in registry.schemes() {
        let multi = if definition.levels.len() > 1 {
            "multilevel"
        } else {
            "singleLevel"
        };
        write!(
            xml,
            r#"<w:abstractNum w:abstractNumId="{}"><w:multiLevelType w:val="{multi}"/>"#,
            registry.abstract_id(definition.scheme)
        )?;
        for (ilvl, level) in definition.levels.iter().enumerate() {
            write!(
                xml,
                r#"<w:lvl w:ilvl="{ilvl}"><w:start w:val="1"/><w:numFmt w:val="{}"/><w:lvlText w:val="{}"/><w:lvlJc w:val="left"/><w:pPr><w:ind w:left="{}" w:hanging="{}"/></w:pPr>"#,
                level.format.as_str(),
                escape_xml(level.text),
                level.indent_left,
                level.hanging
            )?;
            if level.format == NumberFormat::Bullet {
                // the glyph is a plain character, keep the body font
                xml.push_str(r#"<w:rPr><w:rFonts w:hint="default"/></w:rPr>"#);
            }
            xml.push_str("</w:lvl>");
        }
        xml.push_str("</w:abstractNum>");
    }

    for (index, scheme) in instances.order.iter().enumerate() {
        write!(
            xml,
            r#"<w:num w:numId="{}"><w:abstractNumId w:val="{}"/>"#,
            index + 1,
            registry.abstract_id(*scheme)
        )?;
        for ilvl in 0..registry.level_count(*scheme) {
            write!(
                xml,
                r#"<w:lvlOverride w:ilvl="{ilvl}"><w:startOverride w:val="1"/></w:lvlOverride>"#
            )?;
        }
        xml.push_str("</w:num>");
    }

    xml.push_str("</w:numbering>");
    Ok(xml)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_instances_allocate_in_first_use_order() {
        let mut instances = NumberingInstances::default();
        assert!(instances.is_empty());
        assert_eq!(instances.num_id(ListScheme::Bullet, 1), 1);
        assert_eq!(instances.num_id(ListScheme::Multilevel, 2), 2);
        assert_eq!(instances.num_id(ListScheme::Bullet, 1), 1);
        assert_eq!(instances.num_id(ListScheme::Bullet, 3), 3);
    }

    #[test]
    fn test_each_instance_restarts() {
        let registry = NumberingRegistry::standard();
        let mut instances = NumberingInstances::default();
        instances.num_id(ListScheme::Simple, 1);
        instances.num_id(ListScheme::Simple, 2);
        let xml = numbering_xml(&registry, &instances).unwrap();

        assert_eq!(xml.matches("<w:abstractNum ").count(), 3);
        assert_eq!(xml.matches("<w:num ").count(), 2);
        let simple = registry.abstract_id(ListScheme::Simple);
        assert_eq!(
            xml.matches(&format!(r#"<w:abstractNumId w:val="{simple}"/>"#))
                .count(),
            2
        );
        assert_eq!(xml.matches("<w:startOverride w:val=\"1\"/>").count(), 2);
        assert!(xml.contains(r#"<w:numFmt w:val="lowerRoman"/>"#));
    }
}
