//! Document sources: where layouts get their logical pages from

use crate::layout::Size;
use crate::sheet::PageRef;
use crate::types::Rotation;

/// Metadata of one logical page
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LogicalPage {
    /// Page size in points, before any rotation
    pub size: Size,
    /// Rotation the page already carries (e.g. a PDF `/Rotate` entry)
    pub rotation: Rotation,
}

impl LogicalPage {
    pub fn new(size: Size, rotation: Rotation) -> Self {
        Self { size, rotation }
    }

    /// Unrotated page of the given size
    pub fn upright(width: f32, height: f32) -> Self {
        Self::new(Size::new(width, height), Rotation::None)
    }
}

/// A run of consecutive pages imposed as one independent book
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BookRange {
    /// Index of the book's first page in the document source
    pub start: usize,
    /// Number of pages in the book
    pub len: usize,
}

impl BookRange {
    pub fn new(start: usize, len: usize) -> Self {
        Self { start, len }
    }

    pub fn end(&self) -> usize {
        self.start + self.len
    }
}

/// Supplier of logical pages
///
/// Implementations must answer `page(i)` for every `i < page_count()`, and
/// their book ranges must lie within `0..page_count()`.
pub trait DocumentSource {
    fn page_count(&self) -> usize;

    /// # Panics
    /// Implementations may panic if `index >= self.page_count()`.
    fn page(&self, index: usize) -> LogicalPage;

    /// Independent books contained in the source, in output order.
    ///
    /// Defaults to a single book covering every page.
    fn book_ranges(&self) -> Vec<BookRange> {
        vec![BookRange::new(0, self.page_count())]
    }

    /// Handle to page `index` suitable for storing on a sheet
    fn page_ref(&self, index: usize) -> PageRef {
        let page = self.page(index);
        PageRef {
            index,
            size: page.size,
            rotation: page.rotation,
        }
    }
}

/// In-memory document source
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageList {
    pages: Vec<LogicalPage>,
    books: Vec<BookRange>,
}

impl PageList {
    /// A single book made of `pages`
    pub fn new(pages: Vec<LogicalPage>) -> Self {
        let books = vec![BookRange::new(0, pages.len())];
        Self { pages, books }
    }

    /// `count` identical upright pages
    pub fn uniform(count: usize, size: Size) -> Self {
        Self::new(vec![LogicalPage::new(size, Rotation::None); count])
    }

    /// Append `pages` as a new, independent book
    pub fn push_book(&mut self, pages: impl IntoIterator<Item = LogicalPage>) {
        let start = self.pages.len();
        self.pages.extend(pages);
        let book = BookRange::new(start, self.pages.len() - start);

        // A list built with `new(vec![])` starts with an empty placeholder book
        if self.books.len() == 1 && self.books[0].len == 0 {
            self.books.clear();
        }
        self.books.push(book);
    }

    pub fn pages(&self) -> &[LogicalPage] {
        &self.pages
    }
}

impl DocumentSource for PageList {
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
