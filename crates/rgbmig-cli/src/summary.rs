//! Human-readable output tables for the derivation subcommands.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, ContentArrangement, Table};

use rgbmig_model::{FlagCorrelation, FlagDifference, MapCorrelation, MapDifference};

pub fn print_flag_diff(old_branch: &str, new_branch: &str, missing: &[FlagDifference]) {
    println!("Events in {old_branch} but not in {new_branch}:");
    if missing.is_empty() {
        println!("(none)");
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![header_cell("Index"), header_cell("Name")]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    for entry in missing {
        table.add_row(vec![Cell::new(entry.index), Cell::new(&entry.name)]);
    }
    println!("{table}");
}

pub fn print_map_diff(old_branch: &str, new_branch: &str, missing: &[MapDifference]) {
    println!("Maps in {old_branch} but not in {new_branch}:");
    if missing.is_empty() {
        println!("(none)");
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Group"),
        header_cell("Map"),
        header_cell("Name"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    align_column(&mut table, 1, CellAlignment::Right);
    for entry in missing {
        table.add_row(vec![
            Cell::new(entry.id.group),
            Cell::new(entry.id.map),
            Cell::new(&entry.name),
        ]);
    }
    println!("{table}");
}

pub fn print_flag_mapping(mapping: &[FlagCorrelation]) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Old"),
        header_cell("New"),
        header_cell("Name"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    align_column(&mut table, 1, CellAlignment::Right);
    for entry in mapping {
        table.add_row(vec![
            Cell::new(entry.source),
            Cell::new(entry.target),
            Cell::new(&entry.name),
        ]);
    }
    println!("{table}");
}

pub fn print_map_mapping(mapping: &[MapCorrelation]) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Old (group, map)"),
        header_cell("New (group, map)"),
        header_cell("Name"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    align_column(&mut table, 1, CellAlignment::Right);
    for entry in mapping {
        table.add_row(vec![
            Cell::new(format!("({}, {})", entry.source.group, entry.source.map)),
            Cell::new(format!("({}, {})", entry.target.group, entry.target.map)),
            Cell::new(&entry.name),
        ]);
    }
    println!("{table}");
}

pub fn print_unused_listing(branch: &str, unused: &[u32]) {
    println!("Unused event indexes in {branch}:");
    if unused.is_empty() {
        println!("(none)");
        return;
    }
    let values: Vec<String> = unused.iter().map(|value| value.to_string()).collect();
    println!("{}", values.join(", "));
}

pub fn print_filter_summary(total: usize, retained: usize, literals: usize) {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Lines"), header_cell("Count")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    table.add_row(vec![Cell::new("Input"), Cell::new(total)]);
    table.add_row(vec![Cell::new("Retained"), Cell::new(retained)]);
    table.add_row(vec![Cell::new("Dropped"), Cell::new(total - retained)]);
    table.add_row(vec![Cell::new("Source literals"), Cell::new(literals)]);
    println!("{table}");
}

fn header_cell(text: &str) -> Cell {
    Cell::new(text).add_attribute(Attribute::Bold)
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}
