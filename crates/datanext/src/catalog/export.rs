use super::criteria::CriterionId;
use super::report::Report;
use serde::Serialize;
use std::io::Write;

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("failed to write catalog export: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to encode catalog row: {0}")]
    Csv(#[from] csv::Error),
}

#[derive(Debug, Serialize)]
struct ReportRow<'a> {
    id: &'a str,
    name: &'a str,
    source_type: &'static str,
    functional_area: &'static str,
    category: &'static str,
    business_owner: &'static str,
    refresh_frequency: &'static str,
    data_sources: String,
    kpi_examples: String,
    last_used_days: u16,
    active_users: u8,
    created_year: u16,
    complexity: &'static str,
    has_external_data: bool,
    c1: Option<u8>,
    c2: Option<u8>,
    c3: Option<u8>,
    c4: Option<u8>,
    c5: Option<u8>,
    c6: Option<u8>,
    c7: Option<u8>,
    c8: Option<u8>,
    composite_score: String,
    migration_path: &'static str,
    status: &'static str,
    confidence: u8,
    rationale: &'a str,
}

impl<'a> ReportRow<'a> {
    fn from_report(report: &'a Report) -> Self {
        let score = |id: CriterionId| report.criteria_scores.get(id);

        Self {
            id: report.id.as_str(),
            name: &report.name,
            source_type: report.source_type.label(),
            functional_area: report.functional_area.label(),
            category: report.category.label(),
            business_owner: report.business_owner.label(),
            refresh_frequency: report.refresh_frequency.label(),
            data_sources: report.data_sources.join("; "),
            kpi_examples: report.kpi_examples.join("; "),
            last_used_days: report.last_used_days,
            active_users: report.active_users,
            created_year: report.created_year,
            complexity: report.complexity.label(),
            has_external_data: report.has_external_data,
            c1: score(CriterionId::STRATEGIC_OBJECTIVES),
            c2: score(CriterionId::BUSINESS_VALUE),
            c3: score(CriterionId::DATA_COMPLEXITY),
            c4: score(CriterionId::HISTORICAL_DEPTH),
            c5: score(CriterionId::REAL_TIME),
            c6: score(CriterionId::REUSE_POTENTIAL),
            c7: score(CriterionId::EFFORT_VS_VALUE),
            c8: score(CriterionId::AI_READINESS),
            composite_score: report.classification.composite_score.to_string(),
            migration_path: report.migration_path().label(),
            status: report.status().label(),
            confidence: report.confidence,
            rationale: &report.classification.rationale,
        }
    }
}

/// Writes one CSV row per report, header first.
pub fn write_csv<W: Write>(reports: &[Report], writer: W) -> Result<(), ExportError> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for report in reports {
        csv_writer.serialize(ReportRow::from_report(report))?;
    }
    csv_writer.flush()?;
    Ok(())
}
