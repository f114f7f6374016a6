use crate::constants::DEFAULT_INTERNAL_MARGIN_MM;
use crate::layout::{Layout, LayoutKind, PageGrid};
use crate::printer::{Printer, PrinterGeometry};
use crate::types::*;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Layout and paper configuration
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LayoutOptions {
    // Page arrangement
    pub layout: LayoutKind,

    // Paper
    pub paper_size: PaperSize,
    pub paper_orientation: Orientation,

    // Margins
    pub margins: SheetMargins,
    pub internal_margin_mm: f32,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            layout: LayoutKind::default(),
            paper_size: PaperSize::A4,
            paper_orientation: Orientation::Portrait,
            margins: SheetMargins::default(),
            internal_margin_mm: DEFAULT_INTERNAL_MARGIN_MM,
        }
    }
}

impl LayoutOptions {
    /// Load options from JSON file
    #[cfg(feature = "serde")]
    pub async fn load(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let bytes = tokio::fs::read(path).await?;
        let options = serde_json::from_slice(&bytes).map_err(|e| {
            LayoutError::InvalidConfiguration(format!("Failed to parse config: {}", e))
        })?;
        Ok(options)
    }

    /// Save options to JSON file
    #[cfg(feature = "serde")]
    pub async fn save(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self).map_err(|e| {
            LayoutError::InvalidConfiguration(format!("Failed to serialize config: {}", e))
        })?;
        tokio::fs::write(path, json).await?;
        Ok(())
    }

    /// Validate the options
    pub fn validate(&self) -> Result<()> {
        let printer = self.printer();
        printer.validate()?;

        let grid = self.grid()?;

        // Internal margins must leave room for the cells themselves
        let cell = grid.cell_size(printer.printable_rect().size(), printer.internal_margin());
        if cell.width <= 0.0 || cell.height <= 0.0 {
            return Err(LayoutError::InvalidConfiguration(format!(
                "Internal margin of {} mm leaves no room for a {}x{} grid",
                self.internal_margin_mm,
                grid.rows(),
                grid.cols()
            )));
        }

        Ok(())
    }

    /// Printer description for these options
    pub fn printer(&self) -> Printer {
        Printer::new(self.paper_size)
            .with_orientation(self.paper_orientation)
            .with_margins(self.margins)
            .with_internal_margin_mm(self.internal_margin_mm)
    }

    /// Validate and construct the configured layout
    pub fn build_layout(&self) -> Result<Box<dyn Layout>> {
        self.validate()?;
        self.layout.build()
    }

    fn grid(&self) -> Result<PageGrid> {
        Ok(*self.layout.build()?.grid())
    }
}
