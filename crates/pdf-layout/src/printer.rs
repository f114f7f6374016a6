//! Printer and paper geometry consumed by the transform calculation

use crate::constants::{DEFAULT_INTERNAL_MARGIN_MM, mm_to_pt};
use crate::layout::Rect;
use crate::types::{LayoutError, Orientation, PaperSize, Result, SheetMargins};

/// Geometry of the physical sheet a layout is printed on
///
/// All values are in points, in the portrait sheet frame (origin top-left).
pub trait PrinterGeometry {
    /// The whole sheet of paper
    fn paper_rect(&self) -> Rect;

    /// The part of the paper the printer can actually reach
    fn printable_rect(&self) -> Rect;

    /// Gap left between neighbouring cells of the page grid
    fn internal_margin(&self) -> f32;
}

/// Printer description built from a paper size and millimeter margins
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Printer {
    paper_size: PaperSize,
    orientation: Orientation,
    margins: SheetMargins,
    internal_margin_mm: f32,
}

impl Default for Printer {
    fn default() -> Self {
        Self::new(PaperSize::A4)
    }
}

impl Printer {
    pub fn new(paper_size: PaperSize) -> Self {
        Self {
            paper_size,
            orientation: Orientation::Portrait,
            margins: SheetMargins::default(),
            internal_margin_mm: DEFAULT_INTERNAL_MARGIN_MM,
        }
    }

    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    pub fn with_margins(mut self, margins: SheetMargins) -> Self {
        self.margins = margins;
        self
    }

    pub fn with_internal_margin_mm(mut self, internal_margin_mm: f32) -> Self {
        self.internal_margin_mm = internal_margin_mm;
        self
    }

    /// Check that the margins leave a printable area on the paper
    pub fn validate(&self) -> Result<()> {
        let (width_mm, height_mm) = self.paper_size.dimensions_mm();
        if !(width_mm > 0.0 && height_mm > 0.0) {
            return Err(LayoutError::InvalidConfiguration(format!(
                "Paper size must be positive, got {}x{} mm",
                width_mm, height_mm
            )));
        }

        if !self.margins.is_valid() {
            return Err(LayoutError::InvalidConfiguration(
                "Sheet margins must be non-negative".to_string(),
            ));
        }

        if !(self.internal_margin_mm.is_finite() && self.internal_margin_mm >= 0.0) {
            return Err(LayoutError::InvalidConfiguration(
                "Internal margin must be non-negative".to_string(),
            ));
        }

        let printable = self.printable_rect();
        if printable.width <= 0.0 || printable.height <= 0.0 {
            return Err(LayoutError::InvalidConfiguration(
                "Sheet margins leave no printable area".to_string(),
            ));
        }

        Ok(())
    }
}

impl PrinterGeometry for Printer {
    fn paper_rect(&self) -> Rect {
        let (width_mm, height_mm) = self
            .paper_size
            .dimensions_with_orientation(self.orientation);
        Rect::new(0.0, 0.0, mm_to_pt(width_mm), mm_to_pt(height_mm))
    }

    fn printable_rect(&self) -> Rect {
        let paper = self.paper_rect();
        let left = mm_to_pt(self.margins.left_mm);
        let right = mm_to_pt(self.margins.right_mm);
        let top = mm_to_pt(self.margins.top_mm);
        let bottom = mm_to_pt(self.margins.bottom_mm);

        Rect::new(
            paper.x + left,
            paper.y + top,
            paper.width - left - right,
            paper.height - top - bottom,
        )
    }

    fn internal_margin(&self) -> f32 {
        mm_to_pt(self.internal_margin_mm)
    }
}
