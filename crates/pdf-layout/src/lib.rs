pub mod constants;
pub mod layout;
mod options;
mod pdf;
mod printer;
mod sheet;
mod source;
mod stats;
mod types;

pub use layout::{
    BookletLayout, Layout, LayoutKind, NUpLayout, PageGrid, PagePosition, Rect, Size,
    TransformSpec, layout_from_id, standard_layouts,
};
pub use options::*;
pub use pdf::{PdfPages, load_multiple_pdfs, load_pdf};
pub use printer::{Printer, PrinterGeometry};
pub use sheet::{PageRef, Sheet, SheetHints};
pub use source::{BookRange, DocumentSource, LogicalPage, PageList};
pub use stats::{LayoutStatistics, calculate_statistics};
pub use types::*;
