//! PDF-backed document source

use crate::constants::{DEFAULT_PAGE_HEIGHT_PT, DEFAULT_PAGE_WIDTH_PT, MAX_PAGE_TREE_DEPTH};
use crate::layout::Size;
use crate::source::{BookRange, DocumentSource, LogicalPage};
use crate::types::*;
use lopdf::{Document, Object, ObjectId};
use std::path::Path;

/// Load a single PDF document
pub async fn load_pdf(path: impl AsRef<Path>) -> Result<Document> {
    let path = path.as_ref().to_owned();
    let bytes = tokio::fs::read(&path).await?;
    let doc = tokio::task::spawn_blocking(move || Document::load_mem(&bytes)).await??;
    log::debug!("Loaded {} ({} pages)", path.display(), doc.get_pages().len());
    Ok(doc)
}

/// Load multiple PDF documents
pub async fn load_multiple_pdfs(paths: &[impl AsRef<Path>]) -> Result<Vec<Document>> {
    let mut documents = Vec::new();
    for path in paths {
        documents.push(load_pdf(path).await?);
    }
    Ok(documents)
}

/// Pages of one or more PDF documents
///
/// Each document becomes its own book, so a booklet layout imposes every
/// input file independently while N-up layouts simply run through all pages.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PdfPages {
    pages: Vec<LogicalPage>,
    books: Vec<BookRange>,
}

impl PdfPages {
    pub fn from_document(document: &Document) -> Result<Self> {
        Self::from_documents(std::slice::from_ref(document))
    }

    pub fn from_documents(documents: &[Document]) -> Result<Self> {
        let mut pages = Vec::new();
        let mut books = Vec::with_capacity(documents.len());

        for doc in documents {
            let start = pages.len();
            for page_id in doc.get_pages().into_values() {
                let index = pages.len();
                pages.push(read_page(doc, page_id, index)?);
            }
            books.push(BookRange::new(start, pages.len() - start));
        }

        log::debug!(
            "PDF source: {} pages in {} documents",
            pages.len(),
            books.len()
        );
        Ok(Self { pages, books })
    }

    pub fn pages(&self) -> &[LogicalPage] {
        &self.pages
    }
}

impl DocumentSource for PdfPages {
    fn page_count(&self) -> usize {
        self.pages.len()
    }

    fn page(&self, index: usize) -> LogicalPage {
        self.pages[index]
    }

    fn book_ranges(&self) -> Vec<BookRange> {
        if self.books.is_empty() {
            vec![BookRange::new(0, self.pages.len())]
        } else {
            self.books.clone()
        }
    }
}

fn invalid_page(index: usize, reason: impl Into<String>) -> LayoutError {
    LayoutError::InvalidPage {
        index,
        reason: reason.into(),
    }
}

/// Size and rotation of one page; both attributes may be inherited from
/// the page tree.
fn read_page(doc: &Document, page_id: ObjectId, index: usize) -> Result<LogicalPage> {
    let size = match inherited_attribute(doc, page_id, b"MediaBox", index)? {
        Some(media_box) => media_box_size(doc, media_box, index)?,
        None => {
            log::warn!("Page {} has no MediaBox, assuming US Letter", index);
            Size::new(DEFAULT_PAGE_WIDTH_PT, DEFAULT_PAGE_HEIGHT_PT)
        }
    };

    let rotation = match inherited_attribute(doc, page_id, b"Rotate", index)? {
        Some(value) => {
            let degrees = value
                .as_i64()
                .map_err(|_| invalid_page(index, "/Rotate is not an integer"))?;
            i32::try_from(degrees)
                .ok()
                .and_then(Rotation::from_degrees)
                .ok_or_else(|| {
                    invalid_page(index, format!("/Rotate {} is not a multiple of 90", degrees))
                })?
        }
        None => Rotation::None,
    };

    Ok(LogicalPage::new(size, rotation))
}

/// Look `key` up on the page, then on its ancestors
fn inherited_attribute<'a>(
    doc: &'a Document,
    page_id: ObjectId,
    key: &[u8],
    index: usize,
) -> Result<Option<&'a Object>> {
    let mut node = page_id;
    for _ in 0..MAX_PAGE_TREE_DEPTH {
        let dict = doc.get_dictionary(node)?;
        if let Ok(value) = dict.get(key) {
            let (_, value) = doc.dereference(value)?;
            return Ok(Some(value));
        }
        match dict.get(b"Parent") {
            Ok(parent) => node = parent.as_reference()?,
            Err(_) => return Ok(None),
        }
    }
    Err(invalid_page(index, "page tree is too deep"))
}

fn media_box_size(doc: &Document, media_box: &Object, index: usize) -> Result<Size> {
    let values = media_box
        .as_array()
        .map_err(|_| invalid_page(index, "MediaBox is not an array"))?;
    if values.len() != 4 {
        return Err(invalid_page(
            index,
            format!("MediaBox has {} entries, expected 4", values.len()),
        ));
    }

    let mut coords = [0.0f32; 4];
    for (coord, value) in coords.iter_mut().zip(values) {
        let (_, value) = doc.dereference(value)?;
        *coord = value
            .as_float()
            .map_err(|_| invalid_page(index, "MediaBox entry is not a number"))?;
    }

    let size = Size::new((coords[2] - coords[0]).abs(), (coords[3] - coords[1]).abs());
    if !(size.width > 0.0 && size.height > 0.0) {
        return Err(invalid_page(index, "MediaBox is empty"));
    }
    Ok(size)
}
