use anyhow::{Context, Result, anyhow};
use comfy_table::{Cell, CellAlignment, Table};
use tracing::info;

use pdp_core::default_registry;
use pdp_model::Sport;

use pdp_cli::pipeline::{check_file, run_generator};
use pdp_cli::types::{CheckResult, GenerateOptions, SportRun};

use crate::cli::{CheckArgs, SportArgs};
use crate::summary::apply_table_style;

pub fn run_sport(sport: Sport, args: &SportArgs, options: &GenerateOptions) -> Result<SportRun> {
    let generator = default_registry()
        .get(sport)
        .ok_or_else(|| anyhow!("no generator registered for {}", sport.code()))?;
    let options = GenerateOptions {
        output_file: args.output.clone(),
        ..options.clone()
    };
    run_generator(generator, &options)
}

pub fn run_all(options: &GenerateOptions) -> Result<Vec<SportRun>> {
    let registry = default_registry();
    let mut runs = Vec::with_capacity(registry.len());
    for sport in registry.sports() {
        let generator = registry
            .get(sport)
            .ok_or_else(|| anyhow!("no generator registered for {}", sport.code()))?;
        let run = run_generator(generator, options)
            .with_context(|| format!("generate {}", sport.display_name()))?;
        runs.push(run);
    }
    info!(
        sports = runs.len(),
        records = runs.iter().map(|run| run.export.records).sum::<usize>(),
        "all sports complete"
    );
    Ok(runs)
}

pub fn run_sports() -> Result<()> {
    let registry = default_registry();
    let mut table = Table::new();
    table.set_header(vec!["Code", "Sport", "Description", "Records", "Default file"]);
    apply_table_style(&mut table);
    if let Some(column) = table.column_mut(3) {
        column.set_cell_alignment(CellAlignment::Right);
    }
    for sport in registry.sports() {
        let Some(generator) = registry.get(sport) else {
            continue;
        };
        table.add_row(vec![
            Cell::new(sport.code()),
            Cell::new(sport.display_name()),
            Cell::new(generator.description()),
            Cell::new(generator.generate().len()),
            Cell::new(generator.default_file_name()),
        ]);
    }
    println!("{table}");
    Ok(())
}

pub fn run_check(args: &CheckArgs) -> Result<CheckResult> {
    check_file(&args.file)
}
