use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use crm_ingest::{CONTACT_COVERAGE_MIN, QualityStatus};
use crm_model::{CleaningStep, Severity};
use crm_validate::IssueGroup;

use crate::types::{ImportResult, ProfileResult};

/// Row numbers listed per issue before eliding the rest.
const MAX_LISTED_ROWS: usize = 10;

pub fn print_import_summary(result: &ImportResult) {
    println!("Source: {}", result.source);
    println!(
        "Owners: contact={}, account={}",
        result.owners.contact().unwrap_or("-"),
        result.owners.account().unwrap_or("-")
    );
    if !result.profile.is_clean() {
        println!("Data quality:");
        for issue in &result.profile.issues {
            println!("- {issue}");
        }
    }
    print_cleaning_table(result);
    print_population_table(result);
    print_validation_table(result);
    print_issue_table(result);

    let outputs = &result.outputs;
    if result.dry_run {
        println!("Dry run: {} records would be written", outputs.rows);
    } else if let Some(path) = &outputs.import_file {
        println!("Import file: {} ({} records)", path.display(), outputs.rows);
    } else {
        eprintln!("No valid records to import");
    }
    if let Some(path) = &outputs.report_file {
        println!("Run report: {}", path.display());
    }
}

fn print_cleaning_table(result: &ImportResult) {
    let groups = result.transformed.log.groups();
    if groups.is_empty() {
        println!("No cleaning operations were needed");
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Field"),
        header_cell("Operations"),
        header_cell("Example"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for group in &groups {
        let example = group.steps.first().map(|step| describe_step(step));
        table.add_row(vec![
            Cell::new(group.field.label()),
            Cell::new(group.steps.len()),
            example.map_or_else(|| dim_cell("-"), Cell::new),
        ]);
    }
    println!("{table}");
}

fn describe_step(step: &CleaningStep) -> String {
    let record = match &step.record {
        Some(tag) => format!("Record {} ({}): ", tag.index + 1, tag.name),
        None => String::new(),
    };
    match &step.cleaned {
        Some(cleaned) => format!("{record}{} → {cleaned} [{}]", step.original, step.action),
        None => format!("{record}{} [{}]", step.original, step.action),
    }
}

fn print_population_table(result: &ImportResult) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Reevo Field"),
        header_cell("Requirement"),
        header_cell("Filled"),
        header_cell("Fill Rate"),
        header_cell("Status"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);
    align_column(&mut table, 4, CellAlignment::Center);
    for field in &result.population {
        let status = if field.needs_attention() {
            Cell::new("⚠").fg(Color::Yellow)
        } else {
            Cell::new("✓").fg(Color::Green)
        };
        table.add_row(vec![
            Cell::new(field.field.as_str()),
            Cell::new(field.requirement.label()),
            Cell::new(format!("{}/{}", field.filled, field.total)),
            Cell::new(format!("{:.1}%", field.fill_rate)),
            status,
        ]);
    }
    println!("{table}");
}

fn print_validation_table(result: &ImportResult) {
    let validation = &result.validation;
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Total"),
        header_cell("Valid"),
        header_cell("Invalid"),
        header_cell("Warnings"),
        header_cell("Success Rate"),
    ]);
    apply_summary_table_style(&mut table);
    for index in 0..5 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    table.add_row(vec![
        Cell::new(validation.total()).add_attribute(Attribute::Bold),
        count_cell(validation.valid_count(), Color::Green),
        count_cell(validation.invalid_count(), Color::Red),
        count_cell(validation.warning_count(), Color::Yellow),
        Cell::new(format!("{:.1}%", validation.success_rate())),
    ]);
    println!("{table}");
}

fn print_issue_table(result: &ImportResult) {
    let errors = result.validation.error_groups();
    let warnings = result.validation.warning_groups();
    if errors.is_empty() && warnings.is_empty() {
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Severity"),
        header_cell("Issue"),
        header_cell("Records"),
        header_cell("Rows"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    for group in errors.iter().chain(&warnings) {
        let severity = group
            .issues
            .first()
            .map_or(Severity::Error, |issue| issue.severity());
        table.add_row(vec![
            severity_cell(severity),
            Cell::new(group.kind.description()),
            Cell::new(group.issues.len()),
            dim_cell(row_list(group)),
        ]);
    }
    println!("{table}");
}

fn row_list(group: &IssueGroup<'_>) -> String {
    let mut rows: Vec<String> = group
        .issues
        .iter()
        .take(MAX_LISTED_ROWS)
        .map(|issue| (issue.row() + 1).to_string())
        .collect();
    if group.issues.len() > MAX_LISTED_ROWS {
        rows.push(format!("+{} more", group.issues.len() - MAX_LISTED_ROWS));
    }
    rows.join(", ")
}

pub fn print_profile(result: &ProfileResult) {
    let profile = &result.profile;
    println!("Source: {}", result.source);
    println!(
        "Records: {}  Columns: {}",
        profile.total_records, profile.total_columns
    );

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Field"),
        header_cell("Filled"),
        header_cell("Empty"),
        header_cell("Fill Rate"),
        header_cell("Status"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);
    for field in &profile.fields {
        table.add_row(vec![
            Cell::new(field.field),
            Cell::new(field.filled),
            Cell::new(field.empty),
            Cell::new(format!("{:.1}%", field.fill_rate)),
            quality_cell(field.status),
        ]);
    }
    println!("{table}");

    let coverage = format!("{:.1}%", profile.contact_coverage);
    if profile.contact_coverage >= CONTACT_COVERAGE_MIN {
        println!("Contact coverage (email or phone): {coverage}");
    } else {
        println!("Contact coverage (email or phone): {coverage} (below {CONTACT_COVERAGE_MIN:.0}%)");
    }
    if profile.is_clean() {
        println!("No data quality issues found");
    } else {
        for issue in &profile.issues {
            println!("- {issue}");
        }
    }

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("HubSpot Field"),
        header_cell("Reevo Field"),
        header_cell("Filled"),
        header_cell("Samples"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    for mapping in &result.overview.mappings {
        let source = if mapping.available {
            Cell::new(mapping.source)
        } else {
            Cell::new(format!("{} (missing)", mapping.source)).fg(Color::Red)
        };
        table.add_row(vec![
            source,
            Cell::new(mapping.destination.as_str()),
            Cell::new(mapping.filled),
            dim_cell(mapping.samples.join(", ")),
        ]);
    }
    for phone in &result.overview.phones {
        let source = format!("{}. {}", phone.priority, phone.field);
        let source = if phone.available {
            Cell::new(source)
        } else {
            Cell::new(format!("{source} (missing)")).fg(Color::Red)
        };
        table.add_row(vec![
            source,
            Cell::new("contact_primary_phone_number"),
            Cell::new(phone.filled),
            dim_cell(phone.samples.join(", ")),
        ]);
    }
    println!("{table}");
}

fn quality_cell(status: QualityStatus) -> Cell {
    let color = match status {
        QualityStatus::Good => Color::Green,
        QualityStatus::NeedsReview => Color::Yellow,
        QualityStatus::Poor | QualityStatus::Missing => Color::Red,
    };
    Cell::new(status.label()).fg(color)
}

fn severity_cell(severity: Severity) -> Cell {
    let color = match severity {
        Severity::Error => Color::Red,
        Severity::Warning => Color::Yellow,
    };
    Cell::new(severity.label())
        .fg(color)
        .add_attribute(Attribute::Bold)
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

pub fn apply_table_style(table: &mut Table) {
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
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
