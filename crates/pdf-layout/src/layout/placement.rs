//! Page placement within grid cells
//!
//! This module computes where a page is drawn on its sheet:
//! - The cell it occupies (from the slot and the sheet rotation)
//! - The rotation applied to its content
//! - A uniform scale that fits the page inside the cell

use crate::printer::PrinterGeometry;
use crate::sheet::Sheet;

use super::{PageGrid, Rect, Size, TransformSpec};

/// Calculate the placement of the page in `slot` of `sheet`.
///
/// The page is scaled uniformly to fit its cell and centered in it. A blank
/// slot is sized as if it held a page as large as the paper.
///
/// # Panics
/// Panics if `slot >= sheet.count()`.
pub fn calculate_transform(
    grid: &PageGrid,
    sheet: &Sheet,
    slot: usize,
    printer: &dyn PrinterGeometry,
) -> TransformSpec {
    let printable = printer.printable_rect();
    let margin = printer.internal_margin();

    let cell = grid.cell_size(printable.size(), margin);
    let pos = grid.page_position(sheet.rotation(), slot);

    let (page_size, rotation) = match sheet.page(slot) {
        Some(page) => (page.size, sheet.rotation() - page.rotation),
        None => (printer.paper_rect().size(), sheet.rotation()),
    };

    // A quarter turn swaps the page's footprint on the sheet
    let page_size = if rotation.is_landscape() {
        page_size.transposed()
    } else {
        page_size
    };

    let scale = fit_scale(page_size, cell);
    let (center_x, center_y) = grid.cell_center(&printable, margin, pos);

    TransformSpec {
        rect: Rect::centered_at(
            center_x,
            center_y,
            Size::new(page_size.width * scale, page_size.height * scale),
        ),
        rotation,
        scale,
    }
}

/// Largest uniform scale at which `page` still fits inside `cell`
pub fn fit_scale(page: Size, cell: Size) -> f32 {
    let scale_w = cell.width / page.width;
    let scale_h = cell.height / page.height;
    scale_w.min(scale_h)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{BookletLayout, Layout, NUpLayout};
    use crate::source::{LogicalPage, PageList};
    use crate::types::{GridOrientation, Rotation};

    /// 600×800 paper, 10pt border, 20pt between cells
    struct TestPrinter;

    impl PrinterGeometry for TestPrinter {
        fn paper_rect(&self) -> Rect {
            Rect::new(0.0, 0.0, 600.0, 800.0)
        }

        fn printable_rect(&self) -> Rect {
            Rect::new(10.0, 10.0, 580.0, 780.0)
        }

        fn internal_margin(&self) -> f32 {
            20.0
        }
    }

    fn assert_close(actual: f32, expected: f32) {
        assert!(
            (actual - expected).abs() < 0.01,
            "expected {}, got {}",
            expected,
            actual
        );
    }

    #[test]
    fn test_fit_scale() {
        // Width-limited
        assert_close(fit_scale(Size::new(800.0, 600.0), Size::new(400.0, 400.0)), 0.5);
        // Height-limited
        assert_close(fit_scale(Size::new(400.0, 800.0), Size::new(400.0, 400.0)), 0.5);
    }

    #[test]
    fn test_two_up_rotated_sheet() {
        let layout = NUpLayout::new(2, 1, GridOrientation::Horizontal).unwrap();
        let source = PageList::uniform(2, Size::new(600.0, 800.0));
        let sheets = layout.fill_final_sheets(&source);
        let sheet = &sheets[0];
        assert_eq!(sheet.rotation(), Rotation::Clockwise90);

        // cell: 580 wide, (780 - 20) / 2 = 380 high
        // page turned a quarter: 800×600, scale = min(580/800, 380/600)
        let spec = layout.transform_spec(sheet, 0, &TestPrinter);
        assert_eq!(spec.rotation, Rotation::Clockwise90);
        assert_close(spec.scale, 380.0 / 600.0);
        assert_close(spec.rect.height, 380.0);
        assert_close(spec.rect.width, 800.0 * 380.0 / 600.0);

        // Slot 0 lands in the bottom row on a 90° sheet
        assert_close(spec.rect.center_x(), 300.0);
        assert_close(spec.rect.center_y(), 10.0 + 20.0 + 380.0 + 190.0);

        let spec = layout.transform_spec(sheet, 1, &TestPrinter);
        assert_close(spec.rect.center_y(), 10.0 + 190.0);
    }

    #[test]
    fn test_blank_slot_uses_paper_size() {
        let layout = NUpLayout::new(2, 2, GridOrientation::Horizontal).unwrap();
        let source = PageList::uniform(1, Size::new(300.0, 400.0));
        let sheets = layout.fill_final_sheets(&source);

        // cell: (580 - 20) / 2 = 280 by (780 - 20) / 2 = 380
        let spec = layout.transform_spec(&sheets[0], 3, &TestPrinter);
        assert_eq!(spec.rotation, Rotation::None);
        assert_close(spec.scale, (280.0f32 / 600.0).min(380.0 / 800.0));
        assert_close(spec.rect.center_x(), 10.0 + 20.0 + 280.0 + 140.0);
        assert_close(spec.rect.center_y(), 10.0 + 20.0 + 380.0 + 190.0);
    }

    #[test]
    fn test_page_rotation_is_compensated() {
        let layout = BookletLayout::new();
        let source = PageList::new(vec![
            LogicalPage::new(Size::new(600.0, 800.0), Rotation::Clockwise90),
            LogicalPage::upright(600.0, 800.0),
        ]);
        let sheets = layout.fill_final_sheets(&source);

        // First sheet holds page 0 (rotated 90°): the sheet needs no turn
        assert_eq!(sheets[0].rotation(), Rotation::None);
        let spec = layout.transform_spec(&sheets[0], 1, &TestPrinter);
        assert_eq!(spec.rotation, Rotation::Clockwise270);
        // Effective rotation is landscape, so the footprint is 800×600
        assert!(spec.rect.width > spec.rect.height);
    }

    #[test]
    fn test_transform_is_repeatable() {
        let layout = NUpLayout::new(4, 2, GridOrientation::Vertical).unwrap();
        let source = PageList::uniform(11, Size::new(612.0, 792.0));
        let sheets = layout.fill_final_sheets(&source);

        for sheet in &sheets {
            for slot in 0..sheet.count() {
                let first = layout.transform_spec(sheet, slot, &TestPrinter);
                let second = layout.transform_spec(sheet, slot, &TestPrinter);
                assert_eq!(first, second);
            }
        }
    }
}
