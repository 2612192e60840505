use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use iftar_cli::commands::ExportResult;
use iftar_ingest::SanitizeReport;
use iftar_report::{FooterValue, ReportBundle, SummarySheet};

pub fn print_summary(bundle: &ReportBundle) {
    for sheet in bundle.summaries() {
        print_sheet(sheet);
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Order Sheet"),
        header_cell("Rows"),
        header_cell("Total"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    for sheet in &bundle.order_sheets {
        table.add_row(vec![
            Cell::new(&sheet.title).fg(Color::Cyan),
            Cell::new(sheet.rows.len()),
            Cell::new(sheet.total).add_attribute(Attribute::Bold),
        ]);
    }
    println!("{table}");
}

fn print_sheet(sheet: &SummarySheet) {
    println!("{}", sheet.title);
    let mut table = Table::new();
    table.set_header(
        sheet
            .columns
            .iter()
            .map(|column| header_cell(&column.header))
            .collect::<Vec<_>>(),
    );
    apply_summary_table_style(&mut table);
    let height = sheet
        .columns
        .iter()
        .map(|column| column.lines.len())
        .max()
        .unwrap_or(0);
    for row in 0..height {
        table.add_row(
            sheet
                .columns
                .iter()
                .map(|column| Cell::new(column.lines.get(row).map_or("", String::as_str)))
                .collect::<Vec<_>>(),
        );
    }
    if height == 0 {
        table.add_row(sheet.columns.iter().map(|_| dim_cell("-")).collect::<Vec<_>>());
    }
    println!("{table}");

    let mut footer = Table::new();
    apply_table_style(&mut footer);
    align_column(&mut footer, 1, CellAlignment::Right);
    for entry in &sheet.footer {
        let value = match entry.value {
            FooterValue::Count(count) => Cell::new(count).add_attribute(Attribute::Bold),
            FooterValue::Blank => dim_cell("-"),
        };
        footer.add_row(vec![Cell::new(&entry.label), value]);
    }
    println!("{footer}");
    println!();
}

pub fn print_export(result: &ExportResult) {
    let verb = if result.dry_run { "Would write" } else { "Wrote" };
    println!("Output: {}", result.output_dir.display());
    let mut table = Table::new();
    table.set_header(vec![header_cell(verb)]);
    apply_table_style(&mut table);
    for path in &result.files {
        let name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        table.add_row(vec![Cell::new(name)]);
    }
    println!("{table}");
    if let Some(report) = &result.sanitize {
        print_sanitize(report);
    }
}

pub fn print_sanitize(report: &SanitizeReport) {
    if report.is_empty() {
        println!("No sensitive columns found.");
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![header_cell("Column"), header_cell("Header")]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Center);
    for column in &report.cleared {
        table.add_row(vec![
            Cell::new(&column.letters).fg(Color::Yellow),
            Cell::new(&column.header),
        ]);
    }
    println!("Cleared {} columns across {} rows:", report.cleared.len(), report.rows);
    println!("{table}");
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label).add_attribute(Attribute::Bold)
}

fn dim_cell(value: &str) -> Cell {
    Cell::new(value).add_attribute(Attribute::Dim)
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::DynamicFullWidth)
        .set_width(140);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}
