use super::classification::{classify, Classification, ClassificationError};
use super::criteria::{CriteriaScores, CriteriaSet};
use super::domain::{
    BusinessOwner, Complexity, FunctionalArea, MigrationPath, RefreshFrequency, ReportCategory,
    ReportId, ReportStatus, SourceType,
};
use chrono::{Duration, NaiveDate};
use serde::Serialize;

/// One legacy reporting artifact together with its current recommendation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub id: ReportId,
    pub name: String,
    pub source_type: SourceType,
    pub functional_area: FunctionalArea,
    pub category: ReportCategory,
    pub data_sources: Vec<&'static str>,
    pub business_owner: BusinessOwner,
    pub refresh_frequency: RefreshFrequency,
    pub kpi_examples: [&'static str; 4],
    pub last_used_days: u16,
    pub active_users: u8,
    pub created_year: u16,
    pub complexity: Complexity,
    pub has_external_data: bool,
    pub criteria_scores: CriteriaScores,
    pub confidence: u8,
    pub classification: Classification,
}

impl Report {
    pub fn composite_score(&self) -> f64 {
        self.classification.composite_score.value()
    }

    pub fn migration_path(&self) -> MigrationPath {
        self.classification.migration_path
    }

    pub fn status(&self) -> ReportStatus {
        self.classification.status
    }

    pub fn last_used_on(&self, as_of: NaiveDate) -> NaiveDate {
        as_of - Duration::days(i64::from(self.last_used_days))
    }

    /// Recomputes the classification under `criteria`. On error the previous
    /// classification is kept.
    pub fn reclassify(&mut self, criteria: &CriteriaSet) -> Result<(), ClassificationError> {
        self.classification = classify(self, criteria)?;
        Ok(())
    }
}
