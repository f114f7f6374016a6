//! N-up layout: pages placed on each sheet in reading order

use crate::sheet::Sheet;
use crate::source::DocumentSource;
use crate::types::{GridOrientation, Result};

use super::{Layout, PageGrid};

/// `rows` × `cols` pages per sheet, filled sequentially
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NUpLayout {
    grid: PageGrid,
}

impl NUpLayout {
    /// # Errors
    /// `InvalidConfiguration` if either dimension is zero.
    pub fn new(rows: usize, cols: usize, orientation: GridOrientation) -> Result<Self> {
        Ok(Self::from_grid(PageGrid::new(rows, cols, orientation)?))
    }

    pub fn from_grid(grid: PageGrid) -> Self {
        Self { grid }
    }
}

impl Layout for NUpLayout {
    fn grid(&self) -> &PageGrid {
        &self.grid
    }

    fn id(&self) -> String {
        nup_id(self.grid.rows(), self.grid.cols(), self.grid.orientation())
    }

    fn fill_final_sheets(&self, source: &dyn DocumentSource) -> Vec<Sheet> {
        fill_sequential(self, source)
    }
}

/// `"{pages per sheet}up"`, with a `V` suffix for column-first filling
pub(crate) fn nup_id(rows: usize, cols: usize, orientation: GridOrientation) -> String {
    let suffix = match orientation {
        GridOrientation::Horizontal => "",
        GridOrientation::Vertical => "V",
    };
    format!("{}up{}", rows * cols, suffix)
}

/// Put every page of `source` on consecutive sheets, in order.
///
/// The last sheet keeps its trailing slots blank when pages run out.
pub fn fill_sequential(layout: &dyn Layout, source: &dyn DocumentSource) -> Vec<Sheet> {
    let pps = layout.pages_per_sheet();
    let page_count = source.page_count();
    let mut sheets = Vec::with_capacity(page_count.div_ceil(pps));

    let mut next_page = 0;
    while next_page < page_count {
        let mut sheet = Sheet::new(pps, sheets.len());
        for slot in 0..pps {
            if next_page < page_count {
                sheet.set_page(slot, source.page_ref(next_page));
            }
            next_page += 1;
        }

        sheet.set_rotation(layout.sheet_rotation(&sheet));
        sheets.push(sheet);
    }

    log::debug!(
        "{}: {} pages on {} sheets",
        layout.id(),
        page_count,
        sheets.len()
    );
    sheets
}
