//! Saddle-stitch booklet layout
//!
//! Two pages side by side on each sheet, ordered so that a stack of printed
//! sheets folded down the middle reads 1, 2, 3, …
//!
//! ## Press order
//!
//! ```text
//!   +-----------+  +-----------+
//!   |     :     |  |     :     |
//!   |  N  :  0  |  |  1  : N-1 |
//!   |     :     |  |     :     |
//!   +-----------+  +-----------+
//!      sheet 0        sheet 1
//!
//!   +-----------+  +-----------+
//!   |     :     |  |     :     |
//!   | N-2 :  2  |  |  3  : N-3 |
//!   |     :     |  |     :     |
//!   +-----------+  +-----------+
//!      sheet 2        sheet 3
//! ```
//!
//! `N` is the last index of the book padded to a multiple of four pages.
//!
//! ## Preview order
//!
//! Spreads as a reader sees them; the cover and back cover are half sheets.
//!
//! ```text
//!   : - - +-----+  +-----------+  +-----------+  +-----+ - - :
//!   :     |     |  |     :     |  |     :     |  |     |     :
//!   :     |  0  |  |  1  :  2  |  |  3  :  4  |  |  5  |     :
//!   :     |     |  |     :     |  |     :     |  |     |     :
//!   : - - +-----+  +-----------+  +-----------+  +-----+ - - :
//! ```

use crate::sheet::{Sheet, SheetHints};
use crate::source::{BookRange, DocumentSource};
use crate::types::GridOrientation;

use super::{Layout, PageGrid};

pub(crate) const BOOKLET_ID: &str = "booklet";

const BOOKLET_GRID: PageGrid = PageGrid::new_unchecked(2, 1, GridOrientation::Horizontal);

/// 2-up saddle-stitch booklet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BookletLayout {
    grid: PageGrid,
}

impl Default for BookletLayout {
    fn default() -> Self {
        Self::new()
    }
}

impl BookletLayout {
    pub fn new() -> Self {
        Self { grid: BOOKLET_GRID }
    }

    /// Append the press-order sheets of one book to `sheets`.
    ///
    /// The book is padded to a multiple of four pages; padding slots stay
    /// blank.
    pub fn fill_sheets_for_book(
        &self,
        source: &dyn DocumentSource,
        book: BookRange,
        sheets: &mut Vec<Sheet>,
    ) {
        let cnt = padded_length(book.len);

        for i in (0..cnt / 2).step_by(2) {
            // Outer side: last page on the left, first on the right
            let mut sheet = self.new_sheet(sheets.len());
            self.place(source, book, &mut sheet, 0, (cnt - 1) - i);
            self.place(source, book, &mut sheet, 1, i);
            sheet.set_rotation(self.sheet_rotation(&sheet));
            sheets.push(sheet);

            // Inner side
            let mut sheet = self.new_sheet(sheets.len());
            self.place(source, book, &mut sheet, 0, i + 1);
            self.place(source, book, &mut sheet, 1, (cnt - 1) - (i + 1));
            sheet.set_rotation(self.sheet_rotation(&sheet));
            sheets.push(sheet);
        }
    }

    /// Append the reading-order spreads of one book to `sheets`.
    ///
    /// Edge hints for the first and last spread are not set here; see
    /// [`Layout::fill_preview_sheets`].
    pub fn fill_preview_sheets_for_book(
        &self,
        source: &dyn DocumentSource,
        book: BookRange,
        sheets: &mut Vec<Sheet>,
    ) {
        if book.len == 0 {
            return;
        }
        let cnt = padded_length(book.len);

        // Spread k shows pages 2k-1 and 2k; spread 0 only has the cover.
        for k in 0..=cnt / 2 {
            let mut sheet = self.new_sheet(sheets.len());
            if k > 0 {
                self.place(source, book, &mut sheet, 0, 2 * k - 1);
            }
            self.place(source, book, &mut sheet, 1, 2 * k);
            // Spreads past the end of the book stay unrotated
            if !sheet.is_blank() {
                sheet.set_rotation(self.sheet_rotation(&sheet));
            }
            sheets.push(sheet);
        }
    }

    fn new_sheet(&self, sheet_num: usize) -> Sheet {
        let mut sheet = Sheet::new(self.grid.pages_per_sheet(), sheet_num);
        sheet.set_hints(SheetHints::fold());
        sheet
    }

    /// Put the book's page `n` into `slot`, unless `n` is padding
    fn place(
        &self,
        source: &dyn DocumentSource,
        book: BookRange,
        sheet: &mut Sheet,
        slot: usize,
        n: usize,
    ) {
        let index = book.start + n;
        if index < book.end() {
            sheet.set_page(slot, source.page_ref(index));
        }
    }
}

/// Book length rounded up to a whole number of folded sheets (4 pages each)
pub fn padded_length(book_length: usize) -> usize {
    book_length.div_ceil(4) * 4
}

impl Layout for BookletLayout {
    fn grid(&self) -> &PageGrid {
        &self.grid
    }

    fn id(&self) -> String {
        BOOKLET_ID.to_string()
    }

    fn fill_final_sheets(&self, source: &dyn DocumentSource) -> Vec<Sheet> {
        let mut sheets = Vec::new();
        for book in source.book_ranges() {
            self.fill_sheets_for_book(source, book, &mut sheets);
        }

        log::debug!(
            "booklet: {} pages on {} press sheets",
            source.page_count(),
            sheets.len()
        );
        sheets
    }

    fn fill_preview_sheets(&self, source: &dyn DocumentSource) -> Vec<Sheet> {
        let mut sheets = Vec::new();
        for book in source.book_ranges() {
            let first = sheets.len();
            self.fill_preview_sheets_for_book(source, book, &mut sheets);
            mark_book_edges(&mut sheets[first..]);
        }

        log::debug!(
            "booklet: {} pages on {} preview spreads",
            source.page_count(),
            sheets.len()
        );
        sheets
    }
}

/// The cover and back cover of a book have no facing page and no visible fold.
fn mark_book_edges(book_sheets: &mut [Sheet]) {
    if book_sheets.len() < 2 {
        return;
    }

    if let Some(first) = book_sheets.first_mut() {
        let hints = first.hints_mut();
        hints.only_right = true;
        hints.draw_fold = false;
    }
    if let Some(last) = book_sheets.last_mut() {
        let hints = last.hints_mut();
        hints.only_left = true;
        hints.draw_fold = false;
    }
}
