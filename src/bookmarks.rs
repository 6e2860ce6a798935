//! Writes the rendered outline into the PDF as a flat bookmark list using `lopdf`.

use std::collections::BTreeMap;

use lopdf::{dictionary, Document, Object, ObjectId};

use crate::render::OutlineEntry;

/// Errors raised while adding bookmarks to a rendered report.
#[derive(Debug)]
pub enum BookmarkError {
    /// The rendered bytes could not be read back.
    Parse(lopdf::Error),
    /// The bookmarked document could not be written out again.
    Save(lopdf::Error),
    /// The document has no usable catalog to hang the outline on.
    MissingCatalog,
    /// An entry points past the last page of the document.
    MissingPage {
        /// Heading of the entry.
        title: String,
        /// 1-based page the entry was recorded on.
        page: usize,
    },
}

impl From<lopdf::Error> for BookmarkError {
    fn from(err: lopdf::Error) -> Self {
        Self::Parse(err)
    }
}

impl std::fmt::Display for BookmarkError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(err) => write!(f, "Failed to read rendered PDF: {err}"),
            Self::Save(err) => write!(f, "Failed to write bookmarked PDF: {err}"),
            Self::MissingCatalog => write!(f, "PDF has no document catalog"),
            Self::MissingPage { title, page } => {
                write!(f, "Bookmark '{title}' points at missing page {page}")
            }
        }
    }
}

impl std::error::Error for BookmarkError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(err) => Some(err),
            Self::Save(err) => Some(err),
            Self::MissingCatalog | Self::MissingPage { .. } => None,
        }
    }
}

/// Adds one top-level bookmark per [`OutlineEntry`], each opening its page with `/Fit`.
///
/// Returns the input unchanged when `entries` is empty.
pub fn apply_outline(
    pdf_bytes: &[u8],
    entries: &[OutlineEntry],
) -> Result<Vec<u8>, BookmarkError> {
    if entries.is_empty() {
        return Ok(pdf_bytes.to_vec());
    }

    let mut document = Document::load_mem(pdf_bytes)?;
    let pages = document.get_pages();
    let root_id = document.new_object_id();
    let item_ids: Vec<ObjectId> = entries.iter().map(|_| document.new_object_id()).collect();

    for (index, entry) in entries.iter().enumerate() {
        let page_id = page_for(&pages, entry)?;
        let mut item = dictionary! {
            "Title" => Object::string_literal(entry.title.as_str()),
            "Parent" => root_id,
            "Dest" => vec![Object::Reference(page_id), Object::Name(b"Fit".to_vec())],
        };
        if let Some(prev) = index.checked_sub(1).map(|prev| item_ids[prev]) {
            item.set("Prev", prev);
        }
        if let Some(&next) = item_ids.get(index + 1) {
            item.set("Next", next);
        }
        document.objects.insert(item_ids[index], Object::Dictionary(item));
    }

    let root = dictionary! {
        "Type" => "Outlines",
        "First" => item_ids[0],
        "Last" => item_ids[item_ids.len() - 1],
        "Count" => entries.len() as i64,
    };
    document.objects.insert(root_id, Object::Dictionary(root));
    document
        .catalog_mut()
        .map_err(|_| BookmarkError::MissingCatalog)?
        .set("Outlines", root_id);

    let mut buffer = Vec::new();
    document
        .save_to(&mut buffer)
        .map_err(|error| BookmarkError::Save(error.into()))?;
    Ok(buffer)
}

fn page_for(
    pages: &BTreeMap<u32, ObjectId>,
    entry: &OutlineEntry,
) -> Result<ObjectId, BookmarkError> {
    u32::try_from(entry.page)
        .ok()
        .and_then(|page| pages.get(&page).copied())
        .ok_or_else(|| BookmarkError::MissingPage {
            title: entry.title.clone(),
            page: entry.page,
        })
}
