use pdf_layout::*;

#[test]
fn test_default_options_are_valid() {
    let options = LayoutOptions::default();
    assert!(options.validate().is_ok());
    assert_eq!(options.build_layout().unwrap().id(), "1up");
}

#[test]
fn test_validation_zero_grid() {
    let options = LayoutOptions {
        layout: LayoutKind::NUp {
            rows: 2,
            cols: 0,
            orientation: GridOrientation::Horizontal,
        },
        ..Default::default()
    };
    match options.validate() {
        Err(LayoutError::InvalidConfiguration(msg)) => assert!(msg.contains("2x0")),
        other => panic!("Expected InvalidConfiguration, got {:?}", other),
    }
    assert!(options.build_layout().is_err());
}

#[test]
fn test_validation_margins() {
    let mut options = LayoutOptions::default();

    options.margins = SheetMargins::uniform(-1.0);
    assert!(options.validate().is_err());

    options.margins = SheetMargins::uniform(200.0);
    assert!(options.validate().is_err());

    options.margins = SheetMargins::default();
    options.internal_margin_mm = -2.0;
    assert!(options.validate().is_err());
}

#[test]
fn test_validation_internal_margin_too_wide() {
    let options = LayoutOptions {
        layout: LayoutKind::from_id("8up").unwrap(),
        paper_size: PaperSize::A5,
        internal_margin_mm: 100.0,
        ..Default::default()
    };
    assert!(options.validate().is_err());
}

#[test]
fn test_printer_follows_options() {
    let options = LayoutOptions {
        paper_size: PaperSize::Letter,
        paper_orientation: Orientation::Landscape,
        margins: SheetMargins::uniform(0.0),
        internal_margin_mm: 0.0,
        ..Default::default()
    };
    let printer = options.printer();
    assert_eq!(printer.paper_rect(), printer.printable_rect());
    assert!(printer.paper_rect().size().is_landscape());
    assert_eq!(printer.internal_margin(), 0.0);
}

#[test]
fn test_layout_kind_from_id() {
    assert_eq!(LayoutKind::from_id("booklet").unwrap(), LayoutKind::Booklet);
    assert_eq!(
        LayoutKind::from_id("4upV").unwrap(),
        LayoutKind::NUp {
            rows: 2,
            cols: 2,
            orientation: GridOrientation::Vertical,
        }
    );
    assert!(LayoutKind::from_id("16up").is_err());
}

#[cfg(feature = "serde")]
#[tokio::test]
async fn test_save_and_load_options() {
    use tempfile::NamedTempFile;

    let options = LayoutOptions {
        layout: LayoutKind::Booklet,
        paper_size: PaperSize::Custom {
            width_mm: 200.0,
            height_mm: 250.0,
        },
        paper_orientation: Orientation::Landscape,
        margins: SheetMargins::uniform(7.5),
        internal_margin_mm: 3.0,
    };

    let temp_file = NamedTempFile::new().unwrap();
    let path = temp_file.path();

    options.save(path).await.unwrap();
    let loaded = LayoutOptions::load(path).await.unwrap();

    assert_eq!(loaded, options);
}

#[cfg(feature = "serde")]
#[tokio::test]
async fn test_load_invalid_json() {
    use tempfile::NamedTempFile;

    let temp_file = NamedTempFile::new().unwrap();
    std::fs::write(temp_file.path(), b"{ not json").unwrap();

    match LayoutOptions::load(temp_file.path()).await {
        Err(LayoutError::InvalidConfiguration(msg)) => assert!(msg.contains("Failed to parse")),
        other => panic!("Expected InvalidConfiguration, got {:?}", other),
    }
}
