//! Geometry types for sheet layout
//!
//! All coordinates are in points on a portrait sheet, with the origin at the
//! top-left corner and y growing downward. Sheet rotation is applied later by
//! whoever renders the layout.

use crate::types::Rotation;

/// Width and height in points
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Swap width and height
    pub fn transposed(self) -> Self {
        Self {
            width: self.height,
            height: self.width,
        }
    }

    pub fn is_landscape(&self) -> bool {
        self.width > self.height
    }
}

/// A rectangular area in points
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    /// X position (left edge)
    pub x: f32,
    /// Y position (top edge)
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// A rect of the given size centered on `(center_x, center_y)`
    pub fn centered_at(center_x: f32, center_y: f32, size: Size) -> Self {
        Self::new(
            center_x - size.width / 2.0,
            center_y - size.height / 2.0,
            size.width,
            size.height,
        )
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Right edge x coordinate
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Bottom edge y coordinate
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    pub fn center_x(&self) -> f32 {
        self.x + self.width / 2.0
    }

    pub fn center_y(&self) -> f32 {
        self.y + self.height / 2.0
    }
}

/// Position of a slot within the page grid (row, column), row 0 is top
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PagePosition {
    pub row: usize,
    pub col: usize,
}

impl PagePosition {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// Where and how one page is drawn on its sheet
///
/// This is derived from the sheet, the slot and the printer geometry and is
/// never stored.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TransformSpec {
    /// Area covered by the scaled (and possibly rotated) page
    pub rect: Rect,
    /// Rotation to apply to the page content
    pub rotation: Rotation,
    /// Uniform scale factor applied to the page
    pub scale: f32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transposed() {
        let size = Size::new(612.0, 792.0);
        assert_eq!(size.transposed(), Size::new(792.0, 612.0));
        assert!(!size.is_landscape());
        assert!(size.transposed().is_landscape());
    }

    #[test]
    fn test_centered_at() {
        let rect = Rect::centered_at(100.0, 50.0, Size::new(40.0, 20.0));
        assert_eq!(rect, Rect::new(80.0, 40.0, 40.0, 20.0));
        assert_eq!(rect.center_x(), 100.0);
        assert_eq!(rect.center_y(), 50.0);
        assert_eq!(rect.right(), 120.0);
        assert_eq!(rect.bottom(), 60.0);
    }
}
