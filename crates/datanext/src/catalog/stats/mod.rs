mod summary;
pub mod views;

use super::domain::{MigrationPath, ReportStatus, SourceType};
use super::report::Report;
use serde::Serialize;
use std::collections::BTreeMap;

/// Frequency tallies over a report collection. Every key is present, zero or not.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogStats {
    pub total: usize,
    pub by_status: BTreeMap<ReportStatus, usize>,
    pub by_source_type: BTreeMap<SourceType, usize>,
    pub by_migration_path: BTreeMap<MigrationPath, usize>,
    pub migration_matrix: BTreeMap<SourceType, BTreeMap<MigrationPath, usize>>,
}

impl CatalogStats {
    pub fn compute(reports: &[Report]) -> Self {
        let mut stats = Self::empty();

        for report in reports {
            let path = report.migration_path();
            stats.total += 1;
            *stats.by_status.entry(report.status()).or_default() += 1;
            *stats.by_source_type.entry(report.source_type).or_default() += 1;
            *stats.by_migration_path.entry(path).or_default() += 1;
            *stats
                .migration_matrix
                .entry(report.source_type)
                .or_default()
                .entry(path)
                .or_default() += 1;
        }

        stats
    }

    fn empty() -> Self {
        let paths = || {
            MigrationPath::ordered()
                .into_iter()
                .map(|path| (path, 0))
                .collect::<BTreeMap<_, _>>()
        };

        Self {
            total: 0,
            by_status: ReportStatus::ordered()
                .into_iter()
                .map(|status| (status, 0))
                .collect(),
            by_source_type: SourceType::ordered()
                .into_iter()
                .map(|source| (source, 0))
                .collect(),
            by_migration_path: paths(),
            migration_matrix: SourceType::ordered()
                .into_iter()
                .map(|source| (source, paths()))
                .collect(),
        }
    }

    pub fn status_count(&self, status: ReportStatus) -> usize {
        self.by_status.get(&status).copied().unwrap_or(0)
    }

    pub fn source_count(&self, source: SourceType) -> usize {
        self.by_source_type.get(&source).copied().unwrap_or(0)
    }

    pub fn path_count(&self, path: MigrationPath) -> usize {
        self.by_migration_path.get(&path).copied().unwrap_or(0)
    }

    pub fn matrix_count(&self, source: SourceType, path: MigrationPath) -> usize {
        self.migration_matrix
            .get(&source)
            .and_then(|row| row.get(&path))
            .copied()
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_collection_still_lists_every_key() {
        let stats = CatalogStats::compute(&[]);
        assert_eq!(stats.total, 0);
        assert_eq!(stats.by_status.len(), 3);
        assert_eq!(stats.by_source_type.len(), 3);
        assert_eq!(stats.by_migration_path.len(), 5);
        assert!(stats
            .migration_matrix
            .values()
            .all(|row| row.len() == 5 && row.values().all(|count| *count == 0)));

        let summary = stats.summary();
        assert_eq!(summary.path_counts.len(), 5);
        assert_eq!(summary.migration_matrix.len(), 3);
        assert_eq!(
            stats.migration_summary(8).message,
            "Based on the 8 decision criteria: 0 reports recommended for Datasphere greenfield, \
             0 for Data Lake migration, 0 for Embedded Analytics, and 0 candidates for retirement."
        );
    }
}
