//! Layout strategies for putting logical pages on sheets
//!
//! A layout decides:
//! - Which page goes into which slot of which sheet (sheet filling)
//! - Which way each sheet is turned (sheet rotation)
//! - Where each page is drawn on its sheet (placement transform)
//!
//! [`NUpLayout`] fills sheets sequentially; [`BookletLayout`] reorders pages
//! for saddle-stitch folding and shares everything else with N-up.

mod booklet;
mod grid;
mod nup;
mod placement;
mod types;

pub use booklet::*;
pub use grid::*;
pub use nup::*;
pub use placement::*;
pub use types::*;

use crate::printer::PrinterGeometry;
use crate::sheet::Sheet;
use crate::source::DocumentSource;
use crate::types::{GridOrientation, LayoutError, Result, Rotation};

/// A sheet layout strategy
///
/// Implementors supply the grid, the id and the final sheet order; geometry,
/// rotation and preview order have defaults shared by all layouts.
pub trait Layout: std::fmt::Debug + Send + Sync {
    /// Grid of page cells on one sheet
    fn grid(&self) -> &PageGrid;

    /// Short, stable identifier of this layout's configuration
    fn id(&self) -> String;

    /// Sheets in the order they must leave the printer
    fn fill_final_sheets(&self, source: &dyn DocumentSource) -> Vec<Sheet>;

    /// Sheets in the order they are shown for proof-reading
    fn fill_preview_sheets(&self, source: &dyn DocumentSource) -> Vec<Sheet> {
        self.fill_final_sheets(source)
    }

    /// Rotation the grid itself imposes on the content
    fn rotation(&self) -> Rotation {
        self.grid().natural_rotation()
    }

    fn pages_per_sheet(&self) -> usize {
        self.grid().pages_per_sheet()
    }

    /// Rotation for `sheet` based on the pages it holds
    fn sheet_rotation(&self, sheet: &Sheet) -> Rotation {
        sheet.compensating_rotation(self.rotation())
    }

    /// Grid cell of `slot` on `sheet`, taking the sheet's rotation into account
    fn page_position(&self, sheet: &Sheet, slot: usize) -> PagePosition {
        self.grid().page_position(sheet.rotation(), slot)
    }

    /// Placement of the page in `slot` of `sheet`
    ///
    /// # Panics
    /// Panics if `slot >= sheet.count()`.
    fn transform_spec(
        &self,
        sheet: &Sheet,
        slot: usize,
        printer: &dyn PrinterGeometry,
    ) -> TransformSpec {
        calculate_transform(self.grid(), sheet, slot, printer)
    }
}

/// Serializable description of a layout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LayoutKind {
    NUp {
        rows: usize,
        cols: usize,
        orientation: GridOrientation,
    },
    Booklet,
}

/// Grids offered out of the box, in menu order
const STANDARD_GRIDS: [(usize, usize, GridOrientation); 6] = [
    (1, 1, GridOrientation::Horizontal),
    (2, 1, GridOrientation::Horizontal),
    (2, 2, GridOrientation::Horizontal),
    (2, 2, GridOrientation::Vertical),
    (4, 2, GridOrientation::Horizontal),
    (4, 2, GridOrientation::Vertical),
];

impl LayoutKind {
    /// Every standard layout: `1up`, `2up`, `4up`, `4upV`, `8up`, `8upV`, `booklet`
    pub fn standard() -> Vec<LayoutKind> {
        STANDARD_GRIDS
            .iter()
            .map(|&(rows, cols, orientation)| LayoutKind::NUp {
                rows,
                cols,
                orientation,
            })
            .chain(std::iter::once(LayoutKind::Booklet))
            .collect()
    }

    /// Look up a standard layout by its id
    pub fn from_id(id: &str) -> Result<LayoutKind> {
        Self::standard()
            .into_iter()
            .find(|kind| kind.id() == id)
            .ok_or_else(|| LayoutError::InvalidConfiguration(format!("Unknown layout id '{}'", id)))
    }

    pub fn id(&self) -> String {
        match *self {
            LayoutKind::NUp {
                rows,
                cols,
                orientation,
            } => nup_id(rows, cols, orientation),
            LayoutKind::Booklet => BOOKLET_ID.to_string(),
        }
    }

    /// Construct the layout, validating the grid
    pub fn build(&self) -> Result<Box<dyn Layout>> {
        match *self {
            LayoutKind::NUp {
                rows,
                cols,
                orientation,
            } => Ok(Box::new(NUpLayout::new(rows, cols, orientation)?)),
            LayoutKind::Booklet => Ok(Box::new(BookletLayout::new())),
        }
    }
}

impl Default for LayoutKind {
    fn default() -> Self {
        LayoutKind::NUp {
            rows: 1,
            cols: 1,
            orientation: GridOrientation::Horizontal,
        }
    }
}

/// Every standard layout, ready to use
pub fn standard_layouts() -> Vec<Box<dyn Layout>> {
    STANDARD_GRIDS
        .iter()
        .map(|&(rows, cols, orientation)| {
            Box::new(NUpLayout::from_grid(PageGrid::new_unchecked(
                rows,
                cols,
                orientation,
            ))) as Box<dyn Layout>
        })
        .chain(std::iter::once(
            Box::new(BookletLayout::new()) as Box<dyn Layout>
        ))
        .collect()
}

/// Recreate a standard layout from a persisted id
pub fn layout_from_id(id: &str) -> Result<Box<dyn Layout>> {
    LayoutKind::from_id(id)?.build()
}
