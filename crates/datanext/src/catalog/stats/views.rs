use super::super::domain::{MigrationPath, ReportStatus, SourceType};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusCountEntry {
    pub status: ReportStatus,
    pub status_label: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SourceCountEntry {
    pub source_type: SourceType,
    pub source_label: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PathCountEntry {
    pub migration_path: MigrationPath,
    pub path_label: String,
    pub count: usize,
}

/// One source-system row of the source to target matrix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatrixRowEntry {
    pub source_type: SourceType,
    pub source_label: String,
    pub cells: Vec<PathCountEntry>,
    pub total: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogStatsSummary {
    pub total: usize,
    pub status_counts: Vec<StatusCountEntry>,
    pub source_counts: Vec<SourceCountEntry>,
    pub path_counts: Vec<PathCountEntry>,
    pub migration_matrix: Vec<MatrixRowEntry>,
}

/// Headline sentence describing where the catalog is heading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MigrationSummary {
    pub datasphere: usize,
    pub data_lake: usize,
    pub embedded_analytics: usize,
    pub retain: usize,
    pub retire: usize,
    pub message: String,
}
