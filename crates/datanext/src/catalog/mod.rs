//! Report catalog rationalization: criteria registry, synthetic catalog generation,
//! weighted classification into migration paths, and corpus statistics.

pub mod classification;
pub mod criteria;
pub mod domain;
pub mod export;
mod generator;
mod inventory;
mod report;
pub mod stats;

pub use classification::{
    classify, Assessment, Classification, ClassificationEngine, ClassificationError,
    CompositeScore, MigrationRuleId, ScoreComponent,
};
pub use criteria::{
    CriteriaError, CriteriaScores, CriteriaSet, Criterion, CriterionId, WeightImbalance,
};
pub use domain::{
    BusinessOwner, Complexity, FunctionalArea, MigrationPath, RefreshFrequency, ReportCategory,
    ReportId, ReportStatus, SourceType,
};
pub use export::{write_csv, ExportError};
pub use generator::ReportGenerator;
pub use inventory::{ReclassificationOutcome, ReportCatalog, SkippedReport};
pub use report::Report;
pub use stats::views::{CatalogStatsSummary, MigrationSummary};
pub use stats::CatalogStats;
