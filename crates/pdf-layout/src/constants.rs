//! Shared constants for sheet layout
//!
//! Unit conversions and fallback values used by the printer description
//! and the PDF page source.

// =============================================================================
// Unit Conversion
// =============================================================================

/// Points per millimeter (1 inch = 72 points, 1 inch = 25.4mm)
pub const POINTS_PER_MM: f32 = 72.0 / 25.4; // ≈ 2.83465

/// Convert millimeters to points
#[inline]
pub fn mm_to_pt(mm: f32) -> f32 {
    mm * POINTS_PER_MM
}

/// Convert points to millimeters
#[inline]
pub fn pt_to_mm(pt: f32) -> f32 {
    pt / POINTS_PER_MM
}

// =============================================================================
// Default Page Dimensions
// =============================================================================

/// Default page width in points (US Letter: 8.5" × 11")
pub const DEFAULT_PAGE_WIDTH_PT: f32 = 612.0;

/// Default page height in points (US Letter)
pub const DEFAULT_PAGE_HEIGHT_PT: f32 = 792.0;

// =============================================================================
// Printer
// =============================================================================

/// Default gap between neighbouring cells of an N-up grid (millimeters)
pub const DEFAULT_INTERNAL_MARGIN_MM: f32 = 4.0;

// =============================================================================
// PDF Page Tree
// =============================================================================

/// How many `/Parent` links are followed when looking up inherited page
/// attributes before the tree is considered malformed.
pub const MAX_PAGE_TREE_DEPTH: usize = 64;
