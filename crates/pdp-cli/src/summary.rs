use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use pdp_model::{IssueSeverity, ValidationReport};
use pdp_output::BenchmarkSummary;

use pdp_cli::types::{CheckResult, SportRun};

const DIGEST_PREFIX_LEN: usize = 12;

pub fn print_summary(runs: &[SportRun]) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Sport"),
        header_cell("Output"),
        header_cell("Records"),
        header_cell("SHA-256"),
        header_cell("Written"),
        header_cell("Errors"),
        header_cell("Warnings"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 4, CellAlignment::Center);
    align_column(&mut table, 5, CellAlignment::Right);
    align_column(&mut table, 6, CellAlignment::Right);

    let mut total_records = 0usize;
    for run in runs {
        total_records += run.export.records;
        table.add_row(vec![
            Cell::new(run.sport.display_name())
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            Cell::new(run.export.path.display()),
            Cell::new(run.export.records),
            dim_cell(short_digest(&run.export.sha256)),
            written_cell(run),
            count_cell(run.validation.error_count(), Color::Red),
            count_cell(run.validation.warning_count(), Color::Yellow),
        ]);
    }
    if runs.len() > 1 {
        table.add_row(vec![
            Cell::new("TOTAL")
                .fg(Color::Cyan)
                .add_attribute(Attribute::Bold),
            dim_cell("-"),
            Cell::new(total_records).add_attribute(Attribute::Bold),
            dim_cell("-"),
            dim_cell("-"),
            dim_cell("-"),
            dim_cell("-"),
        ]);
    }
    println!("{table}");

    for run in runs {
        println!();
        println!("{} breakdown:", run.sport.display_name());
        println!("{}", breakdown_table(&run.export.counts));
        print_issue_table(&run.validation);
    }
}

pub fn print_check(result: &CheckResult) {
    println!("File: {}", result.path.display());
    println!(
        "Records: {}  Errors: {}  Warnings: {}",
        result.report.records,
        result.report.error_count(),
        result.report.warning_count()
    );
    print_issue_table(&result.report);
}

/// Counts by age group, level and event group as one table.
pub fn breakdown_table(counts: &BenchmarkSummary) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Dimension"),
        header_cell("Value"),
        header_cell("Records"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    for (age_group, count) in &counts.by_age_group {
        table.add_row(vec![
            dim_cell("Age group"),
            Cell::new(age_group.as_str()),
            Cell::new(count),
        ]);
    }
    for (level, count) in &counts.by_level {
        table.add_row(vec![dim_cell("Level"), Cell::new(level), Cell::new(count)]);
    }
    for (event_group, count) in &counts.by_event_group {
        table.add_row(vec![
            dim_cell("Event group"),
            Cell::new(event_group.as_str()),
            Cell::new(count),
        ]);
    }
    table
}

fn print_issue_table(report: &ValidationReport) {
    if report.is_clean() {
        return;
    }
    let mut issues: Vec<_> = report.issues.iter().collect();
    issues.sort_by(|a, b| {
        a.severity
            .cmp(&b.severity)
            .then_with(|| a.code.cmp(&b.code))
            .then_with(|| a.record_index.cmp(&b.record_index))
    });
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Severity"),
        header_cell("Code"),
        header_cell("Record"),
        header_cell("Skill"),
        header_cell("Message"),
    ]);
    apply_issue_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Center);
    align_column(&mut table, 2, CellAlignment::Right);
    for issue in issues {
        table.add_row(vec![
            severity_cell(issue.severity),
            Cell::new(&issue.code),
            issue
                .record_index
                .map_or_else(|| dim_cell("-"), Cell::new),
            issue
                .skill_name
                .as_deref()
                .map_or_else(|| dim_cell("-"), Cell::new),
            Cell::new(&issue.message),
        ]);
    }
    println!();
    println!("Issues:");
    println!("{table}");
}

fn short_digest(digest: &str) -> &str {
    digest.get(..DIGEST_PREFIX_LEN).unwrap_or(digest)
}

fn written_cell(run: &SportRun) -> Cell {
    if run.blocked {
        Cell::new("blocked")
            .fg(Color::Red)
            .add_attribute(Attribute::Bold)
    } else if run.export.dry_run {
        dim_cell("dry run")
    } else {
        Cell::new("✓")
            .fg(Color::Green)
            .add_attribute(Attribute::Bold)
    }
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
        .set_width(140);
}

fn apply_issue_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::DynamicFullWidth)
        .set_width(160);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn severity_cell(severity: IssueSeverity) -> Cell {
    match severity {
        IssueSeverity::Error => Cell::new("ERROR").fg(Color::Red),
        IssueSeverity::Warning => Cell::new("WARN").fg(Color::Yellow),
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

#[cfg(test)]
mod tests {
    use pdp_model::{AgeGroup, EventGroup};

    use super::*;

    #[test]
    fn digest_is_shortened() {
        assert_eq!(short_digest("0123456789abcdef"), "0123456789ab");
        assert_eq!(short_digest("abc"), "abc");
    }

    #[test]
    fn breakdown_has_one_row_per_count() {
        let mut counts = BenchmarkSummary::default();
        counts.by_age_group.insert(AgeGroup::U10, 50);
        counts.by_age_group.insert(AgeGroup::U12, 104);
        counts.by_level.push(("Developmental", 154));
        counts.by_event_group.insert(EventGroup::General, 154);
        assert_eq!(breakdown_table(&counts).row_iter().count(), 4);
    }
}
