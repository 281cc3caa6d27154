use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use chrono::Local;
use comfy_table::Table;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{info, info_span};

use crm_cli::config::RunConfig;
use crm_cli::pipeline::{OutputConfig, ingest, output, transform, validate};
use crm_ingest::{mapping_overview, profile_table, read_csv_table};
use crm_model::{FIELD_MAPPING, OwnerAssignment, PHONE_PRIORITY};
use crm_validate::field_population;

use crate::cli::{ImportArgs, ProfileArgs};
use crate::summary::apply_table_style;
use crate::types::{ImportResult, ProfileResult};

pub fn run_mapping() -> Result<()> {
    let mut table = Table::new();
    table.set_header(vec!["HubSpot Field", "Reevo Field"]);
    apply_table_style(&mut table);
    for mapping in FIELD_MAPPING {
        table.add_row(vec![mapping.source, mapping.destination.as_str()]);
    }
    table.add_row(vec![
        format!("{} (first available)", PHONE_PRIORITY.join(" > ")),
        "contact_primary_phone_number".to_string(),
    ]);
    table.add_row(vec!["--contact-owner", "contact_owner_id"]);
    table.add_row(vec!["--account-owner", "account_owner_id"]);
    println!("{table}");
    Ok(())
}

pub fn run_profile(args: &ProfileArgs) -> Result<ProfileResult> {
    let table =
        read_csv_table(&args.input).with_context(|| format!("load {}", args.input.display()))?;
    Ok(ProfileResult {
        source: table.source_name.clone(),
        profile: profile_table(&table),
        overview: mapping_overview(&table),
    })
}

pub fn run_import(args: &ImportArgs) -> Result<ImportResult> {
    let input = &args.input;
    let import_span = info_span!("import", input = %input.display());
    let _import_guard = import_span.enter();

    let config = match &args.config {
        Some(path) => RunConfig::load(path)?,
        None => RunConfig::default(),
    };
    let owners = OwnerAssignment::new(args.contact_owner.clone(), args.account_owner.clone())
        .or(config.owners());
    let output_dir = args
        .output_dir
        .clone()
        .or_else(|| config.output_dir.clone())
        .unwrap_or_else(|| input_dir(input));

    // =========================================================================
    // Stage 1: Ingest
    // =========================================================================
    let ingest_start = Instant::now();
    let ingested = info_span!("ingest").in_scope(|| ingest(input))?;
    info!(
        records = ingested.records.len(),
        columns = ingested.table.column_count(),
        duration_ms = ingest_start.elapsed().as_millis(),
        "ingest complete"
    );

    // =========================================================================
    // Stage 2: Transform
    // =========================================================================
    let transform_start = Instant::now();
    let progress = create_progress_bar(ingested.records.len(), !args.no_progress);
    progress.set_message("transforming");
    let transformed = info_span!("transform").in_scope(|| {
        transform(&ingested.records, &owners, |done| progress.set_position(done as u64))
    });
    progress.finish_and_clear();
    info!(
        records = transformed.records.len(),
        cleaning_steps = transformed.log.len(),
        duration_ms = transform_start.elapsed().as_millis(),
        "transform complete"
    );

    // =========================================================================
    // Stage 3: Validate
    // =========================================================================
    let validate_start = Instant::now();
    let validation = info_span!("validate").in_scope(|| validate(&transformed));
    let population = field_population(&transformed.records);
    info!(
        valid = validation.valid_count(),
        invalid = validation.invalid_count(),
        warnings = validation.warning_count(),
        duration_ms = validate_start.elapsed().as_millis(),
        "validate complete"
    );

    // =========================================================================
    // Stage 4: Output
    // =========================================================================
    let output_config = OutputConfig {
        output_dir,
        timestamp: Local::now().naive_local(),
        write_report: args.report,
        dry_run: args.dry_run,
    };
    let outputs = info_span!("output").in_scope(|| {
        output(
            &output_config,
            &ingested.table.source_name,
            &owners,
            &transformed,
            &validation,
        )
    })?;
    info!(rows = outputs.rows, dry_run = args.dry_run, "output complete");

    Ok(ImportResult {
        source: ingested.table.source_name,
        owners,
        profile: ingested.profile,
        transformed,
        population,
        validation,
        outputs,
        dry_run: args.dry_run,
    })
}

fn input_dir(input: &Path) -> PathBuf {
    match input.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

fn create_progress_bar(total: usize, enabled: bool) -> ProgressBar {
    if !enabled {
        return ProgressBar::hidden();
    }
    let bar = ProgressBar::new(total as u64);
    match ProgressStyle::default_bar()
        .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")
    {
        Ok(style) => bar.set_style(style.progress_chars("█▓▒░ ")),
        Err(error) => tracing::debug!(%error, "invalid progress template"),
    }
    bar
}
