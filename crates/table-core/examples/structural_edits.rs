//! Structural edits example
//!
//! Walks a table through the edits a block editor's table toolbar performs:
//! toggling the header, inserting and deleting rows and columns, and a
//! column-scoped attribute update.

use table_core::{CellPatch, InsertRowOptions, RowLocation, SectionName, Selection, Table};

fn main() {
    let table = Table::new(2, 3);
    println!("1. Fresh 2x3 table:");
    print_table(&table);

    let table = table.toggle_section(SectionName::Head);
    println!("\n2. Header toggled on (sized to the body):");
    print_table(&table);

    let table = table.insert_row(&InsertRowOptions {
        section_name: SectionName::Body,
        row_index: 1,
        column_count: None,
    });
    println!("\n3. Row inserted in the middle of the body:");
    print_table(&table);

    let table = table.insert_column(0);
    println!("\n4. Column inserted at the start:");
    print_table(&table);

    let table = table.update_selected_cells(Some(&Selection::Column { column_index: 0 }), |_| {
        CellPatch::new().with_attr("align", "right")
    });
    println!("\n5. First column right-aligned:");
    print_table(&table);

    let table = table
        .delete_row(&RowLocation::new(SectionName::Body, 2))
        .delete_column(1);
    println!("\n6. Last body row and second column deleted:");
    print_table(&table);
}

fn print_table(table: &Table) {
    for (name, section) in table.sections() {
        println!("  {name}:");
        for row in section {
            let cells: Vec<String> = row
                .cells
                .iter()
                .map(|cell| {
                    let align = cell
                        .attribute("align")
                        .map(|value| format!(" align={value}"))
                        .unwrap_or_default();
                    format!("<{tag}{align}>{content}</{tag}>", tag = cell.tag, content = cell.content)
                })
                .collect();
            println!("    {}", cells.join(" "));
        }
    }
}
