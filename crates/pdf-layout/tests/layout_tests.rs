use pdf_layout::*;

fn pages(count: usize) -> PageList {
    PageList::uniform(count, Size::new(612.0, 792.0))
}

fn indices(sheets: &[Sheet]) -> Vec<Vec<Option<usize>>> {
    sheets.iter().map(|s| s.page_indices()).collect()
}

#[test]
fn test_nup_covers_every_page_in_order() {
    let layout = NUpLayout::new(4, 2, GridOrientation::Horizontal).unwrap();
    let sheets = layout.fill_final_sheets(&pages(21));

    assert_eq!(sheets.len(), 3);
    assert!(sheets.iter().all(|s| s.count() == 8));

    let placed: Vec<usize> = sheets
        .iter()
        .flat_map(|s| s.page_indices())
        .flatten()
        .collect();
    assert_eq!(placed, (0..21).collect::<Vec<_>>());

    // Trailing slots of the last sheet stay blank
    assert_eq!(
        sheets[2].page_indices(),
        vec![Some(16), Some(17), Some(18), Some(19), Some(20), None, None, None]
    );
}

#[test]
fn test_booklet_press_and_preview_orders_differ() {
    let layout = BookletLayout::new();
    let source = pages(8);

    let press = layout.fill_final_sheets(&source);
    let preview = layout.fill_preview_sheets(&source);

    assert_eq!(
        indices(&press),
        vec![
            vec![Some(7), Some(0)],
            vec![Some(1), Some(6)],
            vec![Some(5), Some(2)],
            vec![Some(3), Some(4)],
        ]
    );
    assert_eq!(
        indices(&preview),
        vec![
            vec![None, Some(0)],
            vec![Some(1), Some(2)],
            vec![Some(3), Some(4)],
            vec![Some(5), Some(6)],
            vec![Some(7), None],
        ]
    );
}

#[test]
fn test_booklet_fold_symmetry() {
    // Every press sheet of a full book holds a page pair summing to cnt - 1
    let sheets = BookletLayout::new().fill_final_sheets(&pages(16));
    assert_eq!(sheets.len(), 8);
    for sheet in &sheets {
        let pair = sheet.page_indices();
        assert_eq!(pair[0].unwrap() + pair[1].unwrap(), 15);
    }
}

#[test]
fn test_booklet_padding_slots_are_blank() {
    for length in 1..=13 {
        let sheets = BookletLayout::new().fill_final_sheets(&pages(length));
        let slots: usize = sheets.iter().map(|s| s.count()).sum();
        assert_eq!(slots, length.div_ceil(4) * 4, "length {}", length);

        let mut placed: Vec<usize> = sheets
            .iter()
            .flat_map(|s| s.page_indices())
            .flatten()
            .collect();
        placed.sort_unstable();
        assert_eq!(placed, (0..length).collect::<Vec<_>>(), "length {}", length);
    }
}

#[test]
fn test_booklet_preview_per_book_edges() {
    let mut source = PageList::default();
    source.push_book(vec![LogicalPage::upright(612.0, 792.0); 4]);
    source.push_book(vec![LogicalPage::upright(612.0, 792.0); 4]);

    let preview = BookletLayout::new().fill_preview_sheets(&source);
    // Each 4-page book previews as cover, one spread, back cover
    assert_eq!(preview.len(), 6);
    assert_eq!(
        indices(&preview),
        vec![
            vec![None, Some(0)],
            vec![Some(1), Some(2)],
            vec![Some(3), None],
            vec![None, Some(4)],
            vec![Some(5), Some(6)],
            vec![Some(7), None],
        ]
    );

    for book_start in [0, 3] {
        assert!(preview[book_start].hints().only_right);
        assert!(!preview[book_start].hints().draw_fold);
        assert!(preview[book_start + 1].hints().draw_fold);
        assert!(preview[book_start + 2].hints().only_left);
        assert!(!preview[book_start + 2].hints().draw_fold);
    }
}

#[test]
fn test_layout_rotation() {
    assert_eq!(layout_from_id("1up").unwrap().rotation(), Rotation::None);
    assert_eq!(layout_from_id("2up").unwrap().rotation(), Rotation::Clockwise90);
    assert_eq!(layout_from_id("4upV").unwrap().rotation(), Rotation::None);
    assert_eq!(layout_from_id("8up").unwrap().rotation(), Rotation::Clockwise90);
    assert_eq!(
        layout_from_id("booklet").unwrap().rotation(),
        Rotation::Clockwise90
    );
}

#[test]
fn test_zero_grid_is_configuration_error() {
    let result = NUpLayout::new(0, 1, GridOrientation::Horizontal);
    match result {
        Err(LayoutError::InvalidConfiguration(msg)) => assert!(msg.contains("0x1")),
        other => panic!("Expected InvalidConfiguration, got {:?}", other),
    }
}

#[test]
fn test_transforms_stay_inside_printable_area() {
    let printer = Printer::new(PaperSize::A4);
    let printable = printer.printable_rect();
    let source = PageList::new(vec![
        LogicalPage::upright(612.0, 792.0),
        LogicalPage::new(Size::new(842.0, 595.0), Rotation::Clockwise90),
        LogicalPage::upright(420.0, 595.0),
    ]);

    for layout in standard_layouts() {
        for sheet in layout.fill_final_sheets(&source) {
            for slot in 0..sheet.count() {
                let spec = layout.transform_spec(&sheet, slot, &printer);
                assert!(spec.rect.x >= printable.x - 0.01, "{}", layout.id());
                assert!(spec.rect.y >= printable.y - 0.01, "{}", layout.id());
                assert!(spec.rect.right() <= printable.right() + 0.01, "{}", layout.id());
                assert!(spec.rect.bottom() <= printable.bottom() + 0.01, "{}", layout.id());
            }
        }
    }
}
