//! Sheets: one physical side of paper holding a fixed number of page slots

use crate::layout::Size;
use crate::types::Rotation;

/// Lightweight handle to a logical page placed on a sheet
///
/// Carries the page's index in the document source together with a copy of
/// the metadata the layout needs, so sheets never borrow from the source.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PageRef {
    /// Global index of the page in the document source
    pub index: usize,
    /// Page size in points, before any rotation
    pub size: Size,
    /// Rotation the page already carries
    pub rotation: Rotation,
}

/// Rendering hints attached to a sheet
///
/// These only matter to whoever draws the sheet; the layout itself never
/// reads them back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SheetHints {
    /// Draw a fold line down the middle of the sheet
    pub draw_fold: bool,
    /// Only the left half of the sheet carries a page
    pub only_left: bool,
    /// Only the right half of the sheet carries a page
    pub only_right: bool,
}

impl SheetHints {
    pub fn fold() -> Self {
        Self {
            draw_fold: true,
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Sheet {
    sheet_num: usize,
    slots: Vec<Option<PageRef>>,
    rotation: Rotation,
    hints: SheetHints,
}

impl Sheet {
    pub(crate) fn new(capacity: usize, sheet_num: usize) -> Self {
        Self {
            sheet_num,
            slots: vec![None; capacity],
            rotation: Rotation::None,
            hints: SheetHints::default(),
        }
    }

    /// Zero-based position of this sheet in the sequence it was produced in
    pub fn sheet_num(&self) -> usize {
        self.sheet_num
    }

    /// Number of slots, filled or not
    pub fn count(&self) -> usize {
        self.slots.len()
    }

    /// Page in `slot`, or `None` for a blank slot
    ///
    /// # Panics
    /// Panics if `slot >= self.count()`.
    pub fn page(&self, slot: usize) -> Option<&PageRef> {
        self.slots[slot].as_ref()
    }

    pub fn slots(&self) -> &[Option<PageRef>] {
        &self.slots
    }

    /// Source page index for every slot, in slot order
    pub fn page_indices(&self) -> Vec<Option<usize>> {
        self.slots.iter().map(|s| s.map(|p| p.index)).collect()
    }

    /// First non-blank slot's page
    pub fn first_page(&self) -> Option<&PageRef> {
        self.slots.iter().flatten().next()
    }

    pub fn is_blank(&self) -> bool {
        self.first_page().is_none()
    }

    pub fn rotation(&self) -> Rotation {
        self.rotation
    }

    pub fn hints(&self) -> SheetHints {
        self.hints
    }

    pub(crate) fn set_page(&mut self, slot: usize, page: PageRef) {
        self.slots[slot] = Some(page);
    }

    pub(crate) fn set_rotation(&mut self, rotation: Rotation) {
        self.rotation = rotation;
    }

    pub(crate) fn set_hints(&mut self, hints: SheetHints) {
        self.hints = hints;
    }

    pub(crate) fn hints_mut(&mut self) -> &mut SheetHints {
        &mut self.hints
    }

    /// Rotation that makes this sheet's content upright under a layout whose
    /// natural rotation is `natural`.
    ///
    /// The first page on the sheet is the reference: its own rotation is
    /// subtracted from the layout's. A blank sheet keeps `natural`.
    pub fn compensating_rotation(&self, natural: Rotation) -> Rotation {
        match self.first_page() {
            Some(page) => natural - page.rotation,
            None => natural,
        }
    }
}
