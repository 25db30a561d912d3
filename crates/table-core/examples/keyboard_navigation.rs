//! Keyboard navigation example
//!
//! Uses the location queries the way an editor maps arrow/Home/End keys:
//! starting from the table's first cell, walk down a column and across a row.

use table_core::{SectionName, Table};

fn main() {
    let table = Table::new(3, 4)
        .toggle_section(SectionName::Head)
        .toggle_section(SectionName::Foot);

    let mut location = table.first_cell_location().expect("table has cells");
    println!("Start (Ctrl+Home): {location:?}");

    // Arrow down until the bottom of the column.
    while let Some(below) = table.cell_below(location) {
        location = below;
        println!("Down: {location:?}");
    }

    // End: jump to the last cell of the current row.
    if let Some(end_of_row) = table.last_cell_in_row(location) {
        location = end_of_row;
        println!("End:  {location:?}");
    }

    // Arrow up until the top of that column.
    while let Some(above) = table.cell_above(location) {
        location = above;
        println!("Up:   {location:?}");
    }

    println!(
        "Last cell of the table (Ctrl+End): {:?}",
        table.last_cell_location()
    );
}
