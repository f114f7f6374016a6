mod logger;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use pdf_layout::{
    Layout, LayoutKind, LayoutOptions, PdfPages, Printer, Sheet, SheetMargins, TransformSpec,
};
use serde::Serialize;
use std::path::PathBuf;

use crate::logger::StderrLogger;

#[derive(Parser)]
#[command(name = "pdfl", about = "Inspect how PDF pages are laid out on sheets", version)]
struct Cli {
    /// Log more (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the standard layouts
    Layouts,

    /// Print the sheets a layout produces
    Sheets {
        #[command(flatten)]
        layout: LayoutArgs,

        /// Reading order instead of press order
        #[arg(long)]
        preview: bool,

        /// Include where each page is drawn
        #[arg(long)]
        transforms: bool,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Show layout statistics
    Stats {
        #[command(flatten)]
        layout: LayoutArgs,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

#[derive(Args)]
struct LayoutArgs {
    /// Input PDF file(s); each file becomes its own book
    #[arg(short, long, required = true, num_args = 1..)]
    input: Vec<PathBuf>,

    /// JSON options file; the flags below override it
    #[arg(long)]
    config: Option<PathBuf>,

    /// Layout id, see `pdfl layouts`
    #[arg(short, long)]
    layout: Option<String>,

    /// Paper size
    #[arg(long, value_enum)]
    paper: Option<PaperArg>,

    /// Paper orientation
    #[arg(long, value_enum)]
    orientation: Option<OrientationArg>,

    /// Sheet margin in mm (uniform on all sides)
    #[arg(long)]
    margin: Option<f32>,

    /// Gap between grid cells in mm
    #[arg(long)]
    internal_margin: Option<f32>,
}

#[derive(Clone, Copy, ValueEnum)]
enum PaperArg {
    A3,
    A4,
    A5,
    Letter,
    Legal,
    Tabloid,
}

#[derive(Clone, Copy, ValueEnum)]
enum OrientationArg {
    Portrait,
    Landscape,
}

impl From<PaperArg> for pdf_layout::PaperSize {
    fn from(arg: PaperArg) -> Self {
        match arg {
            PaperArg::A3 => Self::A3,
            PaperArg::A4 => Self::A4,
            PaperArg::A5 => Self::A5,
            PaperArg::Letter => Self::Letter,
            PaperArg::Legal => Self::Legal,
            PaperArg::Tabloid => Self::Tabloid,
        }
    }
}

impl From<OrientationArg> for pdf_layout::Orientation {
    fn from(arg: OrientationArg) -> Self {
        match arg {
            OrientationArg::Portrait => Self::Portrait,
            OrientationArg::Landscape => Self::Landscape,
        }
    }
}

impl LayoutArgs {
    /// Options from the config file (or defaults) with flag overrides applied
    async fn options(&self) -> Result<LayoutOptions> {
        let mut options = match &self.config {
            Some(path) => LayoutOptions::load(path)
                .await
                .with_context(|| format!("Failed to load {}", path.display()))?,
            None => LayoutOptions::default(),
        };

        if let Some(id) = &self.layout {
            options.layout = LayoutKind::from_id(id)?;
        }
        if let Some(paper) = self.paper {
            options.paper_size = paper.into();
        }
        if let Some(orientation) = self.orientation {
            options.paper_orientation = orientation.into();
        }
        if let Some(margin) = self.margin {
            options.margins = SheetMargins::uniform(margin);
        }
        if let Some(internal_margin) = self.internal_margin {
            options.internal_margin_mm = internal_margin;
        }

        Ok(options)
    }

    /// Load the inputs and build the configured layout
    async fn load(&self) -> Result<(PdfPages, Box<dyn Layout>, Printer)> {
        let options = self.options().await?;
        let layout = options.build_layout()?;
        let printer = options.printer();

        let documents = pdf_layout::load_multiple_pdfs(&self.input).await?;
        let source = PdfPages::from_documents(&documents)?;
        log::info!(
            "Loaded {} pages from {} file(s) for layout '{}'",
            source.pages().len(),
            documents.len(),
            layout.id()
        );

        Ok((source, layout, printer))
    }
}

/// One sheet as printed by `pdfl sheets --json`
#[derive(Serialize)]
struct SheetReport<'a> {
    #[serde(flatten)]
    sheet: &'a Sheet,
    #[serde(skip_serializing_if = "Option::is_none")]
    transforms: Option<Vec<TransformSpec>>,
}

fn transforms(layout: &dyn Layout, sheet: &Sheet, printer: &Printer) -> Vec<TransformSpec> {
    (0..sheet.count())
        .map(|slot| layout.transform_spec(sheet, slot, printer))
        .collect()
}

fn print_sheet(sheet: &Sheet, transforms: Option<&[TransformSpec]>) {
    let hints = sheet.hints();
    let mut flags = Vec::new();
    if hints.draw_fold {
        flags.push("fold");
    }
    if hints.only_left {
        flags.push("left only");
    }
    if hints.only_right {
        flags.push("right only");
    }

    print!(
        "Sheet {} (rotation {}°)",
        sheet.sheet_num(),
        sheet.rotation().degrees()
    );
    if !flags.is_empty() {
        print!(" [{}]", flags.join(", "));
    }
    println!();

    for (slot, page) in sheet.slots().iter().enumerate() {
        let content = match page {
            Some(page) => format!("page {}", page.index + 1),
            None => "blank".to_string(),
        };
        match transforms.map(|specs| &specs[slot]) {
            Some(spec) => println!(
                "  slot {}: {:<9} at ({:.1}, {:.1}) {:.1}×{:.1} pt, rotated {}°, scale {:.3}",
                slot,
                content,
                spec.rect.x,
                spec.rect.y,
                spec.rect.width,
                spec.rect.height,
                spec.rotation.degrees(),
                spec.scale
            ),
            None => println!("  slot {}: {}", slot, content),
        }
    }
}

fn list_layouts() {
    println!("Standard layouts:");
    for layout in pdf_layout::standard_layouts() {
        let grid = layout.grid();
        println!(
            "  {:<8} {}×{} grid, {} page(s) per sheet, rotated {}°",
            layout.id(),
            grid.rows(),
            grid.cols(),
            layout.pages_per_sheet(),
            layout.rotation().degrees()
        );
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    StderrLogger::from_verbosity(cli.verbose).init()?;

    match cli.command {
        Commands::Layouts => list_layouts(),

        Commands::Sheets {
            layout,
            preview,
            transforms: with_transforms,
            json,
        } => {
            let (source, layout, printer) = layout.load().await?;
            let sheets = if preview {
                layout.fill_preview_sheets(&source)
            } else {
                layout.fill_final_sheets(&source)
            };

            let reports: Vec<SheetReport> = sheets
                .iter()
                .map(|sheet| SheetReport {
                    sheet,
                    transforms: with_transforms
                        .then(|| transforms(layout.as_ref(), sheet, &printer)),
                })
                .collect();

            if json {
                println!("{}", serde_json::to_string_pretty(&reports)?);
            } else {
                for report in &reports {
                    print_sheet(report.sheet, report.transforms.as_deref());
                }
            }
        }

        Commands::Stats { layout, json } => {
            let (source, layout, _) = layout.load().await?;
            let stats = pdf_layout::calculate_statistics(layout.as_ref(), &source);

            if json {
                println!("{}", serde_json::to_string_pretty(&stats)?);
            } else {
                println!("Layout Statistics ({}):", layout.id());
                println!("  Source pages: {}", stats.source_pages);
                println!("  Books: {}", stats.books);
                println!("  Output sheets: {}", stats.output_sheets);
                println!("  Preview sheets: {}", stats.preview_sheets);
                println!("  Slots: {}", stats.slots);
                println!("  Blank slots: {}", stats.blank_slots);
            }
        }
    }

    Ok(())
}
