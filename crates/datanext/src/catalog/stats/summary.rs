use super::super::domain::{MigrationPath, ReportStatus, SourceType};
use super::views::{
    CatalogStatsSummary, MatrixRowEntry, MigrationSummary, PathCountEntry, SourceCountEntry,
    StatusCountEntry,
};
use super::CatalogStats;

impl CatalogStats {
    /// Ordered, labelled rows ready for presentation.
    pub fn summary(&self) -> CatalogStatsSummary {
        let status_counts = ReportStatus::ordered()
            .into_iter()
            .map(|status| StatusCountEntry {
                status,
                status_label: status.label().to_string(),
                count: self.status_count(status),
            })
            .collect();

        let source_counts = SourceType::ordered()
            .into_iter()
            .map(|source_type| SourceCountEntry {
                source_type,
                source_label: source_type.label().to_string(),
                count: self.source_count(source_type),
            })
            .collect();

        let path_counts = MigrationPath::ordered()
            .into_iter()
            .map(|path| path_entry(path, self.path_count(path)))
            .collect();

        let migration_matrix = SourceType::ordered()
            .into_iter()
            .map(|source_type| {
                let cells: Vec<PathCountEntry> = MigrationPath::ordered()
                    .into_iter()
                    .map(|path| path_entry(path, self.matrix_count(source_type, path)))
                    .collect();
                let total = cells.iter().map(|cell| cell.count).sum();
                MatrixRowEntry {
                    source_type,
                    source_label: source_type.label().to_string(),
                    cells,
                    total,
                }
            })
            .collect();

        CatalogStatsSummary {
            total: self.total,
            status_counts,
            source_counts,
            path_counts,
            migration_matrix,
        }
    }

    pub fn migration_summary(&self, criteria_count: usize) -> MigrationSummary {
        let datasphere = self.path_count(MigrationPath::DatasphereBdc);
        let data_lake = self.path_count(MigrationPath::DataLake);
        let embedded_analytics = self.path_count(MigrationPath::EmbeddedAnalytics);
        let retire = self.path_count(MigrationPath::Retire);

        MigrationSummary {
            datasphere,
            data_lake,
            embedded_analytics,
            retain: self.path_count(MigrationPath::Retain),
            retire,
            message: format!(
                "Based on the {criteria_count} decision criteria: {datasphere} reports recommended \
                 for Datasphere greenfield, {data_lake} for Data Lake migration, \
                 {embedded_analytics} for Embedded Analytics, and {retire} candidates for retirement."
            ),
        }
    }
}

fn path_entry(migration_path: MigrationPath, count: usize) -> PathCountEntry {
    PathCountEntry {
        migration_path,
        path_label: migration_path.label().to_string(),
        count,
    }
}
