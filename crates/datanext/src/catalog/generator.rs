use super::classification::{ClassificationEngine, ClassificationError};
use super::criteria::{CriteriaScores, CriteriaSet, CriterionId};
use super::domain::{
    BusinessOwner, Complexity, FunctionalArea, RefreshFrequency, ReportCategory, ReportId,
    SourceType,
};
use super::report::Report;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

const REPORT_NAMES: [&str; 24] = [
    "Revenue Analysis",
    "Cost Center Report",
    "Inventory Status",
    "Sales Pipeline",
    "Budget Variance",
    "Headcount Report",
    "Procurement Spend",
    "Customer Insights",
    "Product Profitability",
    "Cash Flow Analysis",
    "Order Fulfillment",
    "Vendor Performance",
    "Employee Turnover",
    "Campaign ROI",
    "Logistics Tracking",
    "Quality Metrics",
    "Margin Analysis",
    "Working Capital",
    "DSO Tracking",
    "Forecast Accuracy",
    "Production Efficiency",
    "Supplier Scorecard",
    "Territory Performance",
    "Churn Analysis",
];

const MAX_DATA_SOURCES: usize = 3;
const EXTERNAL_DATA_PROBABILITY: f64 = 0.3;

/// Synthetic stand-in for a catalog ingestion feed.
///
/// Descriptive attributes rotate deterministically with the report position; scores,
/// usage metadata and confidence are drawn from the generator's RNG, so a seeded
/// generator always reproduces the same catalog.
pub struct ReportGenerator {
    rng: StdRng,
}

impl ReportGenerator {
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    pub fn generate(
        &mut self,
        count: usize,
        criteria: &CriteriaSet,
    ) -> Result<Vec<Report>, ClassificationError> {
        let engine = ClassificationEngine::new(criteria);
        let reports = (0..count)
            .map(|index| self.next_report(index, &engine))
            .collect::<Result<Vec<_>, _>>()?;

        debug!(count = reports.len(), "generated report catalog");
        Ok(reports)
    }

    fn next_report(
        &mut self,
        index: usize,
        engine: &ClassificationEngine<'_>,
    ) -> Result<Report, ClassificationError> {
        let source_type = rotate(&SourceType::ordered(), index);
        let functional_area = rotate(&FunctionalArea::ordered(), index);
        let category = rotate(&ReportCategory::ordered(), index);
        let business_owner = rotate(&BusinessOwner::ordered(), index);

        let source_table = source_type.data_sources();
        let source_count = self
            .rng
            .gen_range(1..=MAX_DATA_SOURCES.min(source_table.len()));
        let data_sources = source_table[..source_count].to_vec();

        let refresh_frequency = self.pick(&RefreshFrequency::ordered());
        let last_used_days = self.rng.gen_range(0..365);
        let active_users = self.rng.gen_range(1..=50);
        let created_year = self.rng.gen_range(2015..=2022);
        let complexity = self.pick(&Complexity::ordered());
        let has_external_data = self.rng.gen_bool(EXTERNAL_DATA_PROBABILITY);

        let criteria_scores: CriteriaScores = CriterionId::ordered()
            .into_iter()
            .map(|id| {
                let score = self
                    .rng
                    .gen_range(CriteriaScores::MIN_SCORE..=CriteriaScores::MAX_SCORE);
                (id, score)
            })
            .collect();

        let classification = engine.classify(source_type, &criteria_scores)?;
        let confidence = self.rng.gen_range(80..=99);

        Ok(Report {
            id: ReportId::for_position(index),
            name: format!(
                "{} {}",
                REPORT_NAMES[index % REPORT_NAMES.len()],
                index / REPORT_NAMES.len() + 1
            ),
            source_type,
            functional_area,
            category,
            data_sources,
            business_owner,
            refresh_frequency,
            kpi_examples: functional_area.kpi_examples(),
            last_used_days,
            active_users,
            created_year,
            complexity,
            has_external_data,
            criteria_scores,
            confidence,
            classification,
        })
    }

    fn pick<T: Copy>(&mut self, options: &[T]) -> T {
        options[self.rng.gen_range(0..options.len())]
    }
}

fn rotate<T: Copy>(table: &[T], index: usize) -> T {
    table[index % table.len()]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::classification::classify;

    #[test]
    fn same_seed_reproduces_the_catalog() {
        let criteria = CriteriaSet::standard();
        let first = ReportGenerator::seeded(42)
            .generate(60, &criteria)
            .expect("generates");
        let second = ReportGenerator::seeded(42)
            .generate(60, &criteria)
            .expect("generates");
        assert_eq!(first, second);
    }

    #[test]
    fn descriptive_attributes_rotate_with_position() {
        let reports = ReportGenerator::seeded(7)
            .generate(30, &CriteriaSet::standard())
            .expect("generates");

        assert_eq!(reports[0].id.as_str(), "RPT-0001");
        assert_eq!(reports[0].name, "Revenue Analysis 1");
        assert_eq!(reports[0].source_type, SourceType::SapAbap);
        assert_eq!(reports[1].source_type, SourceType::SapBw);
        assert_eq!(reports[2].source_type, SourceType::Databricks);
        assert_eq!(reports[3].source_type, SourceType::SapAbap);
        assert_eq!(reports[8].functional_area, FunctionalArea::Finance);
        assert_eq!(reports[6].category, ReportCategory::OperationalDashboard);
        assert_eq!(reports[7].business_owner, BusinessOwner::Cio);
        assert_eq!(reports[24].name, "Revenue Analysis 2");
        assert_eq!(reports[29].id.as_str(), "RPT-0030");
    }

    #[test]
    fn drawn_values_stay_in_range() {
        let criteria = CriteriaSet::standard();
        let reports = ReportGenerator::seeded(99)
            .generate(250, &criteria)
            .expect("generates");

        for report in &reports {
            let table = report.source_type.data_sources();
            assert!((1..=3).contains(&report.data_sources.len()));
            assert_eq!(report.data_sources[..], table[..report.data_sources.len()]);
            assert!(report.last_used_days < 365);
            assert!((1..=50).contains(&report.active_users));
            assert!((2015..=2022).contains(&report.created_year));
            assert!((80..=99).contains(&report.confidence));
            assert_eq!(report.criteria_scores.len(), 8);
            assert!(report
                .criteria_scores
                .iter()
                .all(|(_, score)| (1..=5).contains(&score)));
            assert_eq!(
                classify(report, &criteria).expect("classifies"),
                report.classification
            );
        }
    }
}
