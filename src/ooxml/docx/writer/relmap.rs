/// Per-part relationship tracking during document generation.
///
/// Each XML part (document, header, footer) owns its relationship
/// collection, while embedded media, drawing ids and list instances are
/// shared by the whole package.
use super::numbering::NumberingInstances;
use crate::builder::numbering::NumberingRegistry;
use crate::common::ImageFormat;
use crate::ir::{ImageBlock, NumberingRef};
use crate::ooxml::error::Result;
use crate::ooxml::opc::Relationships;
use crate::ooxml::opc::constants::relationship_type as rt;

/// An image stored under `word/media/`.
#[derive(Debug, Clone)]
pub(crate) struct MediaItem {
    /// Absolute partname, `/word/media/image1.png`
    pub partname: String,
    pub format: ImageFormat,
    pub data: Vec<u8>,
}

/// Media parts and drawing ids of one package.
#[derive(Debug, Default)]
pub(crate) struct MediaStore {
    items: Vec<MediaItem>,
    last_drawing_id: u32,
}

impl MediaStore {
    /// Store an image and return its target relative to `word/`.
    fn add(&mut self, image: &ImageBlock) -> String {
        let target = format!(
            "media/image{}.{}",
            self.items.len() + 1,
            image.format.extension()
        );
        self.items.push(MediaItem {
            partname: format!("/word/{target}"),
            format: image.format,
            data: image.data.clone(),
        });
        target
    }

    /// Next `wp:docPr` id. Ids are unique across all parts of the package.
    fn next_drawing_id(&mut self) -> u32 {
        self.last_drawing_id += 1;
        self.last_drawing_id
    }

    pub fn items(&self) -> &[MediaItem] {
        &self.items
    }
}

/// Maps the elements of one part to relationship ids and numbering ids.
pub(crate) struct RelationshipMapper<'a> {
    rels: Relationships,
    registry: &'a NumberingRegistry,
    media: &'a mut MediaStore,
    numbering: &'a mut NumberingInstances,
}

impl<'a> RelationshipMapper<'a> {
    pub fn new(
        registry: &'a NumberingRegistry,
        media: &'a mut MediaStore,
        numbering: &'a mut NumberingInstances,
    ) -> Self {
        Self {
            rels: Relationships::new(),
            registry,
            media,
            numbering,
        }
    }

    /// Add a non-media relationship and return its id.
    pub fn add(&mut self, reltype: &'static str, target: &str) -> String {
        self.rels.add(reltype, target)
    }

    /// Store an image, relate it to this part and return
    /// `(relationship id, drawing id)`.
    pub fn add_image(&mut self, image: &ImageBlock) -> (String, u32) {
        let target = self.media.add(image);
        let r_id = self.rels.add(rt::IMAGE, target);
        (r_id, self.media.next_drawing_id())
    }

    /// `w:numId` of a list instance, checking the level against its scheme.
    pub fn num_id(&mut self, numbering: &NumberingRef) -> Result<u32> {
        self.registry.level(numbering.scheme, numbering.level)?;
        Ok(self.numbering.num_id(numbering.scheme, numbering.instance))
    }

    pub fn into_rels(self) -> Relationships {
        self.rels
    }
}
