use crate::layout::Layout;
use crate::sheet::Sheet;
use crate::source::DocumentSource;

/// Statistics about a layout applied to a document
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LayoutStatistics {
    /// Total number of source pages
    pub source_pages: usize,
    /// Number of independent books in the source
    pub books: usize,
    /// Sheets in press order
    pub output_sheets: usize,
    /// Sheets shown when previewing
    pub preview_sheets: usize,
    /// Slots across all output sheets
    pub slots: usize,
    /// Output slots left blank for padding
    pub blank_slots: usize,
}

/// Calculate statistics for laying out `source` with `layout`
pub fn calculate_statistics(
    layout: &dyn Layout,
    source: &dyn DocumentSource,
) -> LayoutStatistics {
    let final_sheets = layout.fill_final_sheets(source);
    let preview_sheets = layout.fill_preview_sheets(source);

    let slots: usize = final_sheets.iter().map(Sheet::count).sum();
    let filled: usize = final_sheets
        .iter()
        .map(|sheet| sheet.slots().iter().flatten().count())
        .sum();

    LayoutStatistics {
        source_pages: source.page_count(),
        books: source
            .book_ranges()
            .iter()
            .filter(|book| book.len > 0)
            .count(),
        output_sheets: final_sheets.len(),
        preview_sheets: preview_sheets.len(),
        slots,
        blank_slots: slots - filled,
    }
}
