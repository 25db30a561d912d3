use pretty_assertions::assert_eq;
use table_core::{Cell, CellTag, InsertRowOptions, Row, RowLocation, SectionName, Table};

fn td(content: &str) -> Cell {
    Cell::new(CellTag::Td).with_content(content)
}

fn th(content: &str) -> Cell {
    Cell::new(CellTag::Th).with_content(content)
}

fn row(cells: Vec<Cell>) -> Row {
    Row::new(cells)
}

/// 2x2 body where the last cell has content.
fn table_with_content() -> Table {
    Table {
        body: Some(vec![
            row(vec![td(""), td("")]),
            row(vec![td(""), td("test")]),
        ]),
        ..Table::default()
    }
}

/// Head-only table with one `th` cell.
fn table_with_head() -> Table {
    Table {
        head: Some(vec![row(vec![th("test")])]),
        ..Table::default()
    }
}

#[test]
fn test_create_table() {
    let expected = Table {
        body: Some(vec![row(vec![td(""), td("")]), row(vec![td(""), td("")])]),
        ..Table::default()
    };

    assert_eq!(Table::new(2, 2), expected);
}

#[test]
fn test_create_table_with_zero_rows() {
    let table = Table::new(0, 3);
    assert_eq!(table.section(SectionName::Body), Some(&vec![]));
}

#[test]
fn test_insert_row_uses_the_first_row_cell_count() {
    let table = table_with_content().insert_row(&InsertRowOptions {
        section_name: SectionName::Body,
        row_index: 2,
        column_count: None,
    });

    let expected = Table {
        body: Some(vec![
            row(vec![td(""), td("")]),
            row(vec![td(""), td("test")]),
            row(vec![td(""), td("")]),
        ]),
        ..Table::default()
    };
    assert_eq!(table, expected);
}

#[test]
fn test_insert_row_with_an_explicit_column_count() {
    let table = table_with_content().insert_row(&InsertRowOptions {
        section_name: SectionName::Body,
        row_index: 2,
        column_count: Some(4),
    });

    let body = table.section(SectionName::Body).unwrap();
    assert_eq!(body.len(), 3);
    assert_eq!(body[2], row(vec![td(""), td(""), td(""), td("")]));
}

#[test]
fn test_insert_row_inherits_align_from_the_first_row() {
    let table = Table {
        body: Some(vec![row(vec![
            th("test").with_attr("align", "right"),
            th(""),
        ])]),
        ..Table::default()
    };

    let table = table.insert_row(&InsertRowOptions {
        section_name: SectionName::Body,
        row_index: 1,
        column_count: None,
    });

    let expected = Table {
        body: Some(vec![
            row(vec![th("test").with_attr("align", "right"), th("")]),
            row(vec![td("").with_attr("align", "right"), td("")]),
        ]),
        ..Table::default()
    };
    assert_eq!(table, expected);
}

#[test]
fn test_insert_row_adds_th_cells_to_the_head() {
    let table = table_with_head().insert_row(&InsertRowOptions {
        section_name: SectionName::Head,
        row_index: 1,
        column_count: None,
    });

    let expected = Table {
        head: Some(vec![row(vec![th("test")]), row(vec![th("")])]),
        ..Table::default()
    };
    assert_eq!(table, expected);
}

#[test]
fn test_insert_row_is_a_no_op_without_rows_or_a_column_count() {
    let table = Table {
        body: Some(vec![]),
        foot: Some(vec![row(vec![td("keep")])]),
        ..Table::default()
    };
    let foot_cells = table.foot.as_ref().unwrap()[0].cells.as_ptr();

    let table = table.insert_row(&InsertRowOptions {
        section_name: SectionName::Body,
        row_index: 0,
        column_count: None,
    });

    // Nothing was rebuilt: the same allocations come back.
    assert_eq!(table.section(SectionName::Body), Some(&vec![]));
    assert_eq!(table.foot.as_ref().unwrap()[0].cells.as_ptr(), foot_cells);
}

#[test]
fn test_insert_row_is_a_no_op_when_column_count_is_zero() {
    let table = table_with_head();
    let head_cells = table.head.as_ref().unwrap()[0].cells.as_ptr();

    let table = table.insert_row(&InsertRowOptions {
        section_name: SectionName::Head,
        row_index: 1,
        column_count: Some(0),
    });

    assert_eq!(table, table_with_head());
    assert_eq!(table.head.as_ref().unwrap()[0].cells.as_ptr(), head_cells);
}

#[test]
fn test_insert_column_before_existing_content_by_default() {
    let table = table_with_head().insert_column(0);

    let expected = Table {
        head: Some(vec![row(vec![th(""), th("test")])]),
        ..Table::default()
    };
    assert_eq!(table, expected);
}

#[test]
fn test_insert_column_appends_at_the_row_end() {
    let table = table_with_content().insert_column(2);

    let expected = Table {
        body: Some(vec![
            row(vec![td(""), td(""), td("")]),
            row(vec![td(""), td("test"), td("")]),
        ]),
        ..Table::default()
    };
    assert_eq!(table, expected);
}

#[test]
fn test_insert_column_adds_th_cells_to_the_head() {
    let table = table_with_head().insert_column(1);

    let expected = Table {
        head: Some(vec![row(vec![th("test"), th("")])]),
        ..Table::default()
    };
    assert_eq!(table, expected);
}

#[test]
fn test_insert_column_avoids_adding_cells_to_empty_rows() {
    let table = Table {
        head: Some(vec![row(vec![th("")]), row(vec![])]),
        ..Table::default()
    };

    let table = table.insert_column(0);

    let expected = Table {
        head: Some(vec![row(vec![th(""), th("")]), row(vec![])]),
        ..Table::default()
    };
    assert_eq!(table, expected);
}

#[test]
fn test_insert_column_spans_all_sections_with_rows() {
    let table = Table {
        head: Some(vec![row(vec![th("")])]),
        body: Some(vec![row(vec![td("")])]),
        foot: Some(vec![row(vec![td("")])]),
    };

    let table = table.insert_column(1);

    let expected = Table {
        head: Some(vec![row(vec![th(""), th("")])]),
        body: Some(vec![row(vec![td(""), td("")])]),
        foot: Some(vec![row(vec![td(""), td("")])]),
    };
    assert_eq!(table, expected);
}

#[test]
fn test_insert_column_skips_rows_that_are_too_short() {
    let table = Table {
        head: Some(vec![row(vec![th("0")])]),
        body: Some(vec![row(vec![td("0"), td("1"), td("2")])]),
        foot: Some(vec![row(vec![td("0")])]),
    };

    let table = table.insert_column(3);

    // Only the body row has three cells, so only it grows.
    let expected = Table {
        head: Some(vec![row(vec![th("0")])]),
        body: Some(vec![row(vec![td("0"), td("1"), td("2"), td("")])]),
        foot: Some(vec![row(vec![td("0")])]),
    };
    assert_eq!(table, expected);
}

#[test]
fn test_delete_row() {
    let table = table_with_content().delete_row(&RowLocation::new(SectionName::Body, 0));

    let expected = Table {
        body: Some(vec![row(vec![td(""), td("test")])]),
        ..Table::default()
    };
    assert_eq!(table, expected);
}

#[test]
fn test_delete_row_leaves_the_section_present_but_empty() {
    let table = table_with_head().delete_row(&RowLocation::new(SectionName::Head, 0));
    assert_eq!(table.section(SectionName::Head), Some(&vec![]));
}

#[test]
fn test_delete_column() {
    let table = table_with_content().delete_column(0);

    let expected = Table {
        body: Some(vec![row(vec![td("")]), row(vec![td("test")])]),
        ..Table::default()
    };
    assert_eq!(table, expected);
}

#[test]
fn test_delete_column_collapses_a_single_column_section() {
    let table = Table {
        body: Some(vec![row(vec![td("")]), row(vec![td("test")])]),
        ..Table::default()
    };

    let table = table.delete_column(0);

    // The rows go away entirely, not just their cells.
    assert_eq!(table.section(SectionName::Body), Some(&vec![]));
}

#[test]
fn test_delete_column_spans_all_sections() {
    let table = Table {
        head: Some(vec![row(vec![th("")])]),
        body: Some(vec![row(vec![td("")]), row(vec![td("test")])]),
        foot: Some(vec![row(vec![td("")])]),
    };

    let table = table.delete_column(0);

    let expected = Table {
        head: Some(vec![]),
        body: Some(vec![]),
        foot: Some(vec![]),
    };
    assert_eq!(table, expected);
}

#[test]
fn test_delete_column_tolerates_missing_columns() {
    let table = Table {
        head: Some(vec![row(vec![th(""), th("")])]),
        body: Some(vec![row(vec![td("")])]),
        foot: Some(vec![row(vec![td(""), td("")])]),
    };

    let table = table.delete_column(1);

    let expected = Table {
        head: Some(vec![row(vec![th("")])]),
        body: Some(vec![row(vec![td("")])]),
        foot: Some(vec![row(vec![td("")])]),
    };
    assert_eq!(table, expected);
}

#[test]
fn test_toggle_section_clears_existing_rows() {
    let table = table_with_head().toggle_section(SectionName::Head);
    assert_eq!(table.section(SectionName::Head), Some(&vec![]));
}

#[test]
fn test_toggle_section_adds_a_single_row_to_an_empty_section() {
    let table = Table {
        head: Some(vec![]),
        ..Table::default()
    };

    let table = table.toggle_section(SectionName::Head);

    let expected = Table {
        head: Some(vec![row(vec![th("")])]),
        ..Table::default()
    };
    assert_eq!(table, expected);
}

#[test]
fn test_toggle_section_sizes_the_new_row_to_the_body() {
    let table = Table {
        head: Some(vec![]),
        body: Some(vec![row(vec![td(""), td(""), td("")])]),
        ..Table::default()
    };

    let table = table.toggle_section(SectionName::Head);

    assert_eq!(
        table.section(SectionName::Head),
        Some(&vec![row(vec![th(""), th(""), th("")])])
    );
}

#[test]
fn test_toggle_section_uses_td_cells_outside_the_head() {
    let table = Table::new(1, 2).toggle_section(SectionName::Foot);

    assert_eq!(
        table.section(SectionName::Foot),
        Some(&vec![row(vec![td(""), td("")])])
    );
}

#[test]
fn test_toggle_section_round_trip() {
    let table = Table::new(2, 2)
        .toggle_section(SectionName::Head)
        .toggle_section(SectionName::Head);

    // On, then off: the section stays present with no rows.
    assert_eq!(table.section(SectionName::Head), Some(&vec![]));

    let table = table.toggle_section(SectionName::Head);
    assert_eq!(
        table.section(SectionName::Head),
        Some(&vec![row(vec![th(""), th("")])])
    );
}
