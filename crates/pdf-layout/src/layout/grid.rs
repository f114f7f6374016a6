//! Page grid geometry
//!
//! This module maps slot numbers to grid cells and computes cell sizes.
//! The grid is always described as seen on a portrait sheet; sheet rotation
//! only changes which cell each slot lands in.

use crate::types::{GridOrientation, LayoutError, Result, Rotation};

use super::{PagePosition, Rect, Size};

/// A grid of `rows` × `cols` page cells filled in `orientation` order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawPageGrid"))]
pub struct PageGrid {
    rows: usize,
    cols: usize,
    orientation: GridOrientation,
}

/// Unvalidated grid as read from a config file
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawPageGrid {
    rows: usize,
    cols: usize,
    orientation: GridOrientation,
}

#[cfg(feature = "serde")]
impl TryFrom<RawPageGrid> for PageGrid {
    type Error = LayoutError;

    fn try_from(raw: RawPageGrid) -> Result<Self> {
        PageGrid::new(raw.rows, raw.cols, raw.orientation)
    }
}

impl PageGrid {
    /// Create a grid; both dimensions must be at least 1.
    pub fn new(rows: usize, cols: usize, orientation: GridOrientation) -> Result<Self> {
        if rows == 0 || cols == 0 {
            return Err(LayoutError::InvalidConfiguration(format!(
                "Page grid needs at least one row and one column, got {}x{}",
                rows, cols
            )));
        }
        Ok(Self::new_unchecked(rows, cols, orientation))
    }

    pub(crate) const fn new_unchecked(
        rows: usize,
        cols: usize,
        orientation: GridOrientation,
    ) -> Self {
        Self {
            rows,
            cols,
            orientation,
        }
    }

    /// Number of pages stacked vertically
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of pages side by side
    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn orientation(&self) -> GridOrientation {
        self.orientation
    }

    pub fn pages_per_sheet(&self) -> usize {
        self.rows * self.cols
    }

    /// A non-square grid of portrait pages is itself landscape, so it has
    /// to be turned 90° to fit a portrait sheet.
    pub fn natural_rotation(&self) -> Rotation {
        if self.rows != self.cols {
            Rotation::Clockwise90
        } else {
            Rotation::None
        }
    }

    /// Grid cell for `slot` on a sheet rotated by `rotation`.
    ///
    /// Diagrams for a 4×2 grid (`v` = rows, `h` = cols):
    ///
    /// ```text
    ///  +------+ Rotate: 0           +------+ Rotate: 0
    ///  | 0  1 | Horiz               | 0  4 | Vert
    ///  | 2  3 |                     | 1  5 |
    ///  | 4  5 | r = i / h           | 2  6 | r = i % v
    ///  | 6  7 | c = i % h           | 3  7 | c = i / v
    ///  +------+                     +------+
    ///
    ///  +------+ Rotate: 90          +------+ Rotate: 90
    ///  | 3  7 | Horiz               | 6  7 | Vert
    ///  | 2  6 |                     | 4  5 |
    ///  | 1  5 | r = (v-1) - i % v   | 2  3 | r = (v-1) - i / h
    ///  | 0  4 | c = i / v           | 0  1 | c = i % h
    ///  +------+                     +------+
    ///
    ///  +------+ Rotate: 180         +------+ Rotate: 180
    ///  | 7  6 | Horiz               | 7  3 | Vert
    ///  | 5  4 |                     | 6  2 |
    ///  | 3  2 | 0° mirrored         | 5  1 | 0° mirrored
    ///  | 1  0 |                     | 4  0 |
    ///  +------+                     +------+
    ///
    ///  +------+ Rotate: 270         +------+ Rotate: 270
    ///  | 4  0 | Horiz               | 1  0 | Vert
    ///  | 5  1 |                     | 3  2 |
    ///  | 6  2 | 90° mirrored        | 5  4 | 90° mirrored
    ///  | 7  3 |                     | 7  6 |
    ///  +------+                     +------+
    /// ```
    pub fn page_position(&self, rotation: Rotation, slot: usize) -> PagePosition {
        let (v, h) = (self.rows, self.cols);

        let mut pos = match (rotation.is_landscape(), self.orientation) {
            (false, GridOrientation::Horizontal) => PagePosition::new(slot / h, slot % h),
            (false, GridOrientation::Vertical) => PagePosition::new(slot % v, slot / v),
            (true, GridOrientation::Horizontal) => PagePosition::new((v - 1) - slot % v, slot / v),
            (true, GridOrientation::Vertical) => PagePosition::new((v - 1) - slot / h, slot % h),
        };

        if matches!(rotation, Rotation::Clockwise180 | Rotation::Clockwise270) {
            pos.row = (v - 1) - pos.row;
            pos.col = (h - 1) - pos.col;
        }

        pos
    }

    /// Size of one cell when `printable` is split into the grid with
    /// `margin` points between neighbouring cells.
    pub fn cell_size(&self, printable: Size, margin: f32) -> Size {
        let cols = self.cols as f32;
        let rows = self.rows as f32;
        Size::new(
            (printable.width - margin * (cols - 1.0)) / cols,
            (printable.height - margin * (rows - 1.0)) / rows,
        )
    }

    /// Center point of the cell at `pos`
    pub fn cell_center(&self, printable: &Rect, margin: f32, pos: PagePosition) -> (f32, f32) {
        let cell = self.cell_size(printable.size(), margin);
        let col = pos.col as f32;
        let row = pos.row as f32;
        //        top-left of area | margins passed | full cells passed | half of this cell
        let x = printable.x + margin * col + cell.width * col + cell.width * 0.5;
        let y = printable.y + margin * row + cell.height * row + cell.height * 0.5;
        (x, y)
    }
}

// =============================================================================
// Tests
// =============================================================================
