use super::classification::ClassificationError;
use super::criteria::{CriteriaSet, WeightImbalance};
use super::domain::ReportId;
use super::generator::ReportGenerator;
use super::report::Report;
use super::stats::CatalogStats;
use chrono::NaiveDate;
use serde::Serialize;
use tracing::warn;

/// A report that kept its previous classification because re-scoring failed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedReport {
    pub report_id: ReportId,
    pub reason: String,
    #[serde(skip)]
    pub error: ClassificationError,
}

/// Result of re-scoring a catalog against a new weight snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ReclassificationOutcome {
    pub reclassified: usize,
    pub skipped: Vec<SkippedReport>,
    pub weight_imbalance: Option<WeightImbalance>,
}

/// The generated report catalog and the weight snapshot its classifications reflect.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportCatalog {
    generated_on: NaiveDate,
    criteria: CriteriaSet,
    reports: Vec<Report>,
}

impl ReportCatalog {
    pub fn generate(
        generator: &mut ReportGenerator,
        count: usize,
        criteria: CriteriaSet,
        generated_on: NaiveDate,
    ) -> Result<Self, ClassificationError> {
        let reports = generator.generate(count, &criteria)?;
        Ok(Self::from_reports(reports, criteria, generated_on))
    }

    pub fn from_reports(
        reports: Vec<Report>,
        criteria: CriteriaSet,
        generated_on: NaiveDate,
    ) -> Self {
        Self {
            generated_on,
            criteria,
            reports,
        }
    }

    pub fn generated_on(&self) -> NaiveDate {
        self.generated_on
    }

    pub fn criteria(&self) -> &CriteriaSet {
        &self.criteria
    }

    pub fn reports(&self) -> &[Report] {
        &self.reports
    }

    pub fn len(&self) -> usize {
        self.reports.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reports.is_empty()
    }

    pub fn get(&self, id: &ReportId) -> Option<&Report> {
        self.reports.iter().find(|report| &report.id == id)
    }

    pub fn stats(&self) -> CatalogStats {
        CatalogStats::compute(&self.reports)
    }

    /// Re-scores every report under `criteria`. Reports that cannot be classified keep
    /// their previous recommendation and are listed in the outcome.
    pub fn reclassify(&mut self, criteria: &CriteriaSet) -> ReclassificationOutcome {
        let weight_imbalance = criteria.weight_imbalance();
        if let Some(imbalance) = &weight_imbalance {
            warn!(
                total = imbalance.total,
                "reclassifying with unbalanced criteria weights"
            );
        }

        let mut outcome = ReclassificationOutcome {
            weight_imbalance,
            ..ReclassificationOutcome::default()
        };

        for report in &mut self.reports {
            match report.reclassify(criteria) {
                Ok(()) => outcome.reclassified += 1,
                Err(error) => {
                    warn!(report = %report.id, %error, "skipping report during reclassification");
                    outcome.skipped.push(SkippedReport {
                        report_id: report.id.clone(),
                        reason: error.to_string(),
                        error,
                    });
                }
            }
        }

        self.criteria = criteria.clone();
        outcome
    }

    /// Pure variant of [`ReportCatalog::reclassify`].
    pub fn reclassified(&self, criteria: &CriteriaSet) -> (Self, ReclassificationOutcome) {
        let mut catalog = self.clone();
        let outcome = catalog.reclassify(criteria);
        (catalog, outcome)
    }
}
