use crate::infra::{apply_weight_overrides, build_catalog};
use chrono::{Local, NaiveDate};
use clap::Args;
use datanext::catalog::{
    write_csv, CatalogStatsSummary, CriteriaSet, CriterionId, MigrationSummary, ReportCatalog,
};
use datanext::config::AppConfig;
use datanext::error::AppError;
use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

/// Options shared by every command that builds a catalog.
#[derive(Args, Debug, Default)]
pub(crate) struct CatalogSourceArgs {
    /// Number of reports to generate (defaults to CATALOG_SIZE or 250)
    #[arg(long)]
    pub(crate) size: Option<usize>,
    /// Seed for reproducible catalogs (defaults to CATALOG_SEED)
    #[arg(long)]
    pub(crate) seed: Option<u64>,
    /// Override a criterion weight, e.g. `--weight 2=25`. Repeatable.
    #[arg(long = "weight", value_parser = crate::infra::parse_weight_override)]
    pub(crate) weights: Vec<(CriterionId, u8)>,
    /// Catalog date used for last-used calculations (defaults to today)
    #[arg(long, value_parser = crate::infra::parse_date)]
    pub(crate) as_of: Option<NaiveDate>,
}

#[derive(Args, Debug, Default)]
pub(crate) struct CatalogReportArgs {
    #[command(flatten)]
    pub(crate) source: CatalogSourceArgs,
    /// Include a per-report listing in the output
    #[arg(long)]
    pub(crate) list_reports: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct CatalogExportArgs {
    #[command(flatten)]
    pub(crate) source: CatalogSourceArgs,
    /// Destination CSV file. Writes to stdout when omitted.
    #[arg(long)]
    pub(crate) output: Option<PathBuf>,
}

#[derive(Args, Debug, Default)]
pub(crate) struct CriteriaArgs {
    /// Override a criterion weight, e.g. `--weight 2=25`. Repeatable.
    #[arg(long = "weight", value_parser = crate::infra::parse_weight_override)]
    pub(crate) weights: Vec<(CriterionId, u8)>,
}

struct LoadedCatalog {
    catalog: ReportCatalog,
    ignored_weights: Vec<CriterionId>,
}

fn load_catalog(source: CatalogSourceArgs) -> Result<LoadedCatalog, AppError> {
    let CatalogSourceArgs {
        size,
        seed,
        weights,
        as_of,
    } = source;

    let mut catalog_config = AppConfig::load()?.catalog;
    if let Some(size) = size {
        catalog_config.size = size;
    }
    if seed.is_some() {
        catalog_config.seed = seed;
    }

    let (criteria, ignored_weights) = apply_weight_overrides(&CriteriaSet::standard(), weights);
    let generated_on = as_of.unwrap_or_else(|| Local::now().date_naive());
    let catalog = build_catalog(&catalog_config, criteria, generated_on)?;

    Ok(LoadedCatalog {
        catalog,
        ignored_weights,
    })
}

pub(crate) fn run_catalog_report(args: CatalogReportArgs) -> Result<(), AppError> {
    let CatalogReportArgs {
        source,
        list_reports,
    } = args;

    let LoadedCatalog {
        catalog,
        ignored_weights,
    } = load_catalog(source)?;

    let stats = catalog.stats();
    render_catalog_report(
        &catalog,
        &stats.summary(),
        &stats.migration_summary(catalog.criteria().len()),
        &ignored_weights,
        list_reports,
    );

    Ok(())
}

pub(crate) fn run_catalog_export(args: CatalogExportArgs) -> Result<(), AppError> {
    let CatalogExportArgs { source, output } = args;
    let LoadedCatalog {
        catalog,
        ignored_weights,
    } = load_catalog(source)?;

    render_weight_notes(catalog.criteria(), &ignored_weights, true);

    match output {
        Some(path) => {
            let file = File::create(&path)?;
            write_csv(catalog.reports(), BufWriter::new(file))?;
            eprintln!(
                "Exported {} reports to {}",
                catalog.len(),
                path.display()
            );
        }
        None => write_csv(catalog.reports(), std::io::stdout().lock())?,
    }

    Ok(())
}

pub(crate) fn run_criteria(args: CriteriaArgs) -> Result<(), AppError> {
    let (criteria, ignored_weights) =
        apply_weight_overrides(&CriteriaSet::standard(), args.weights);

    println!("Decision criteria");
    for criterion in criteria.iter() {
        println!(
            "- {}. {} ({}) weight {}%",
            criterion.id, criterion.name, criterion.short_name, criterion.weight
        );
        println!("    {}", criterion.description);
        println!("    options: {}", criterion.options.join(" | "));
    }
    println!("\nTotal weight: {}%", criteria.total_weight());
    render_weight_notes(&criteria, &ignored_weights, false);

    Ok(())
}

fn render_catalog_report(
    catalog: &ReportCatalog,
    summary: &CatalogStatsSummary,
    migration: &MigrationSummary,
    ignored_weights: &[CriterionId],
    list_reports: bool,
) {
    println!("Report rationalization summary");
    println!(
        "Catalog date: {} ({} reports)",
        catalog.generated_on(),
        summary.total
    );

    println!("\nStatus");
    for entry in &summary.status_counts {
        println!("- {}: {}", entry.status_label, entry.count);
    }

    println!("\nSource systems");
    for entry in &summary.source_counts {
        println!("- {}: {}", entry.source_label, entry.count);
    }

    println!("\nRecommended migration paths");
    for entry in &summary.path_counts {
        println!("- {}: {}", entry.path_label, entry.count);
    }

    println!("\nSource to target matrix");
    for row in &summary.migration_matrix {
        let cells = row
            .cells
            .iter()
            .map(|cell| format!("{} {}", cell.path_label, cell.count))
            .collect::<Vec<_>>()
            .join(", ");
        println!("- {} ({} total): {}", row.source_label, row.total, cells);
    }

    println!("\n{}", migration.message);
    render_weight_notes(catalog.criteria(), ignored_weights, false);

    if list_reports {
        println!("\nReports");
        for report in catalog.reports() {
            println!(
                "- {} {} [{}] score {} -> {} ({})",
                report.id,
                report.name,
                report.source_type.label(),
                report.classification.composite_score,
                report.migration_path().label(),
                report.status().label()
            );
        }
    }
}

fn render_weight_notes(criteria: &CriteriaSet, ignored_weights: &[CriterionId], to_stderr: bool) {
    let mut notes = Vec::new();
    if let Some(imbalance) = criteria.weight_imbalance() {
        notes.push(format!("Warning: {}", imbalance.message()));
    }
    for id in ignored_weights {
        notes.push(format!("Ignored weight override for unknown criterion {id}"));
    }

    for note in notes {
        if to_stderr {
            eprintln!("{note}");
        } else {
            println!("\n{note}");
        }
    }
}
