use std::ops::{Add, Sub};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LayoutError {
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
    #[error("PDF error: {0}")]
    Pdf(#[from] lopdf::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Task join error: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),
    #[error("Invalid page {index}: {reason}")]
    InvalidPage { index: usize, reason: String },
}

pub type Result<T> = std::result::Result<T, LayoutError>;

/// Rotation of a page or sheet, always a multiple of 90 degrees.
///
/// Rotations compose with `+` and `-` and wrap around modulo 360.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Rotation {
    #[default]
    None,
    Clockwise90,
    Clockwise180,
    Clockwise270,
}

impl Rotation {
    pub fn degrees(self) -> i32 {
        match self {
            Rotation::None => 0,
            Rotation::Clockwise90 => 90,
            Rotation::Clockwise180 => 180,
            Rotation::Clockwise270 => 270,
        }
    }

    /// Build a rotation from any whole number of degrees.
    ///
    /// Negative and oversized values wrap (`-90` is `Clockwise270`, `450` is
    /// `Clockwise90`). Returns `None` when `degrees` is not a right angle.
    pub fn from_degrees(degrees: i32) -> Option<Self> {
        if degrees % 90 != 0 {
            return None;
        }
        Some(Self::from_quarter_turns(degrees / 90))
    }

    /// 90° and 270° turn a portrait page into a landscape one.
    pub fn is_landscape(self) -> bool {
        matches!(self, Rotation::Clockwise90 | Rotation::Clockwise270)
    }

    fn quarter_turns(self) -> i32 {
        self.degrees() / 90
    }

    fn from_quarter_turns(turns: i32) -> Self {
        match turns.rem_euclid(4) {
            0 => Rotation::None,
            1 => Rotation::Clockwise90,
            2 => Rotation::Clockwise180,
            _ => Rotation::Clockwise270,
        }
    }
}

impl Add for Rotation {
    type Output = Rotation;

    fn add(self, rhs: Rotation) -> Rotation {
        Rotation::from_quarter_turns(self.quarter_turns() + rhs.quarter_turns())
    }
}

impl Sub for Rotation {
    type Output = Rotation;

    fn sub(self, rhs: Rotation) -> Rotation {
        Rotation::from_quarter_turns(self.quarter_turns() - rhs.quarter_turns())
    }
}

/// Order in which sequential pages fill the cells of an N-up grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GridOrientation {
    /// Row by row, left to right
    #[default]
    Horizontal,
    /// Column by column, top to bottom
    Vertical,
}

/// Paper orientation
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    /// Portrait: height > width (default for most paper sizes)
    #[default]
    Portrait,
    /// Landscape: width > height
    Landscape,
}

/// Standard paper sizes
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PaperSize {
    A3,
    A4,
    A5,
    Letter,
    Legal,
    Tabloid,
    Custom { width_mm: f32, height_mm: f32 },
}

impl PaperSize {
    /// Get base dimensions (always portrait: width < height for standard sizes)
    pub fn dimensions_mm(self) -> (f32, f32) {
        match self {
            PaperSize::A3 => (297.0, 420.0),
            PaperSize::A4 => (210.0, 297.0),
            PaperSize::A5 => (148.0, 210.0),
            PaperSize::Letter => (215.9, 279.4),
            PaperSize::Legal => (215.9, 355.6),
            PaperSize::Tabloid => (279.4, 431.8),
            PaperSize::Custom {
                width_mm,
                height_mm,
            } => (width_mm, height_mm),
        }
    }

    /// Get dimensions with orientation applied
    pub fn dimensions_with_orientation(self, orientation: Orientation) -> (f32, f32) {
        let (w, h) = self.dimensions_mm();
        match orientation {
            Orientation::Portrait => (w, h),
            Orientation::Landscape => (h, w),
        }
    }
}

/// Sheet margins: the unprintable border the printer leaves around the paper.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SheetMargins {
    pub top_mm: f32,
    pub bottom_mm: f32,
    pub left_mm: f32,
    pub right_mm: f32,
}

impl Default for SheetMargins {
    fn default() -> Self {
        Self::uniform(5.0)
    }
}

impl SheetMargins {
    /// Create uniform margins on all sides
    pub fn uniform(margin_mm: f32) -> Self {
        Self {
            top_mm: margin_mm,
            bottom_mm: margin_mm,
            left_mm: margin_mm,
            right_mm: margin_mm,
        }
    }

    fn all(&self) -> [f32; 4] {
        [self.top_mm, self.bottom_mm, self.left_mm, self.right_mm]
    }

    pub(crate) fn is_valid(&self) -> bool {
        self.all().iter().all(|m| m.is_finite() && *m >= 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Rotation; 4] = [
        Rotation::None,
        Rotation::Clockwise90,
        Rotation::Clockwise180,
        Rotation::Clockwise270,
    ];

    #[test]
    fn test_from_degrees_wraps() {
        assert_eq!(Rotation::from_degrees(0), Some(Rotation::None));
        assert_eq!(Rotation::from_degrees(360), Some(Rotation::None));
        assert_eq!(Rotation::from_degrees(450), Some(Rotation::Clockwise90));
        assert_eq!(Rotation::from_degrees(-90), Some(Rotation::Clockwise270));
        assert_eq!(Rotation::from_degrees(-180), Some(Rotation::Clockwise180));
        assert_eq!(Rotation::from_degrees(45), None);
    }

    #[test]
    fn test_rotation_arithmetic() {
        assert_eq!(
            Rotation::Clockwise90 + Rotation::Clockwise270,
            Rotation::None
        );
        assert_eq!(
            Rotation::Clockwise90 - Rotation::Clockwise180,
            Rotation::Clockwise270
        );
        assert_eq!(Rotation::None - Rotation::Clockwise90, Rotation::Clockwise270);

        for a in ALL {
            assert_eq!(a + Rotation::None, a);
            assert_eq!(a - Rotation::None, a);
            for b in ALL {
                assert_eq!((a + b) - b, a);
                assert_eq!((a + b).degrees(), (a.degrees() + b.degrees()) % 360);
            }
        }
    }

    #[test]
    fn test_landscape() {
        assert!(!Rotation::None.is_landscape());
        assert!(Rotation::Clockwise90.is_landscape());
        assert!(!Rotation::Clockwise180.is_landscape());
        assert!(Rotation::Clockwise270.is_landscape());
    }

    #[test]
    fn test_paper_orientation() {
        assert_eq!(
            PaperSize::A4.dimensions_with_orientation(Orientation::Landscape),
            (297.0, 210.0)
        );
        assert_eq!(
            PaperSize::A4.dimensions_with_orientation(Orientation::Portrait),
            (210.0, 297.0)
        );
    }

    #[test]
    fn test_margin_validation() {
        assert!(SheetMargins::default().is_valid());
        assert!(SheetMargins::uniform(0.0).is_valid());
        assert!(
            !SheetMargins {
                left_mm: -1.0,
                ..Default::default()
            }
            .is_valid()
        );
        assert!(!SheetMargins::uniform(f32::NAN).is_valid());
    }
}
