mod policy;
pub mod rules;
mod scoring;

pub use rules::{MigrationRule, MigrationRuleId, RuleSignals, DEFAULT_RULE, MIGRATION_RULES};
pub use scoring::{CompositeScore, ScoreComponent};

use super::criteria::{CriteriaScores, CriteriaSet, CriterionId};
use super::domain::{MigrationPath, ReportStatus, SourceType};
use super::report::Report;
use serde::Serialize;

/// Failure to classify a single report. Never fatal for a batch.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClassificationError {
    #[error("report has no score for criterion {criterion}")]
    MissingCriterionScore { criterion: CriterionId },
    #[error("score {score} for criterion {criterion} is outside the 1-5 scale")]
    ScoreOutOfRange { criterion: CriterionId, score: u8 },
}

/// Derived recommendation for one report under one weight snapshot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Classification {
    pub composite_score: CompositeScore,
    pub migration_path: MigrationPath,
    pub status: ReportStatus,
    pub rationale: String,
    pub rule: MigrationRuleId,
}

/// Classification plus the audit trail behind it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Assessment {
    pub classification: Classification,
    pub components: Vec<ScoreComponent>,
    pub narrative: String,
}

/// Stateless classifier bound to one explicit weight snapshot.
pub struct ClassificationEngine<'a> {
    criteria: &'a CriteriaSet,
}

impl<'a> ClassificationEngine<'a> {
    pub fn new(criteria: &'a CriteriaSet) -> Self {
        Self { criteria }
    }

    pub fn criteria(&self) -> &CriteriaSet {
        self.criteria
    }

    pub fn classify(
        &self,
        source_type: SourceType,
        scores: &CriteriaScores,
    ) -> Result<Classification, ClassificationError> {
        self.assess(source_type, scores)
            .map(|assessment| assessment.classification)
    }

    pub fn assess(
        &self,
        source_type: SourceType,
        scores: &CriteriaScores,
    ) -> Result<Assessment, ClassificationError> {
        let (components, composite_score) = scoring::score_components(scores, self.criteria)?;
        let signals = RuleSignals::collect(scores, composite_score, source_type)?;
        let rule = rules::first_match(&signals);

        let classification = Classification {
            composite_score,
            migration_path: rule.path,
            status: rule.status,
            rationale: policy::rationale(scores, self.criteria),
            rule: rule.id,
        };
        let narrative =
            policy::recommendation_narrative(&classification, scores, self.criteria.len());

        Ok(Assessment {
            classification,
            components,
            narrative,
        })
    }
}

/// Classifies `report` against the given weights without touching the report.
pub fn classify(
    report: &Report,
    criteria: &CriteriaSet,
) -> Result<Classification, ClassificationError> {
    ClassificationEngine::new(criteria).classify(report.source_type, &report.criteria_scores)
}
