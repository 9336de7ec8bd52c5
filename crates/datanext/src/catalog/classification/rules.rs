use super::super::criteria::{CriteriaScores, CriterionId};
use super::super::domain::{MigrationPath, ReportStatus, SourceType};
use super::scoring::{require_score, CompositeScore};
use super::ClassificationError;
use serde::{Deserialize, Serialize};

/// Inputs the migration cascade reads: five raw criterion scores, the composite and the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleSignals {
    pub business_value: u8,
    pub data_complexity: u8,
    pub real_time: u8,
    pub reuse_potential: u8,
    pub ai_readiness: u8,
    pub composite: CompositeScore,
    pub source_type: SourceType,
}

impl RuleSignals {
    pub fn collect(
        scores: &CriteriaScores,
        composite: CompositeScore,
        source_type: SourceType,
    ) -> Result<Self, ClassificationError> {
        Ok(Self {
            business_value: require_score(scores, CriterionId::BUSINESS_VALUE)?,
            data_complexity: require_score(scores, CriterionId::DATA_COMPLEXITY)?,
            real_time: require_score(scores, CriterionId::REAL_TIME)?,
            reuse_potential: require_score(scores, CriterionId::REUSE_POTENTIAL)?,
            ai_readiness: require_score(scores, CriterionId::AI_READINESS)?,
            composite,
            source_type,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MigrationRuleId {
    LowValueRetirement,
    RedundantWithReuse,
    EmbeddedOperational,
    DataLakeAdvanced,
    RetainInPlace,
    DatasphereDefault,
}

impl MigrationRuleId {
    pub const fn label(self) -> &'static str {
        match self {
            Self::LowValueRetirement => "Low value, low composite",
            Self::RedundantWithReuse => "Redundant with reusable model",
            Self::EmbeddedOperational => "Simple operational SAP report",
            Self::DataLakeAdvanced => "Advanced analytics or complex data",
            Self::RetainInPlace => "Low reuse potential",
            Self::DatasphereDefault => "Default rebuild",
        }
    }
}

/// One row of the migration decision table.
#[derive(Debug, Clone, Copy)]
pub struct MigrationRule {
    pub id: MigrationRuleId,
    pub path: MigrationPath,
    pub status: ReportStatus,
    condition: fn(&RuleSignals) -> bool,
}

impl MigrationRule {
    pub fn matches(&self, signals: &RuleSignals) -> bool {
        (self.condition)(signals)
    }
}

const RETIRE_BELOW_COMPOSITE: u32 = 200;

/// Conditional rules in evaluation order. They overlap, so order decides the outcome.
pub static MIGRATION_RULES: [MigrationRule; 5] = [
    MigrationRule {
        id: MigrationRuleId::LowValueRetirement,
        path: MigrationPath::Retire,
        status: ReportStatus::Deprecated,
        condition: |s: &RuleSignals| {
            s.business_value <= 2 && s.composite.hundredths() < RETIRE_BELOW_COMPOSITE
        },
    },
    MigrationRule {
        id: MigrationRuleId::RedundantWithReuse,
        path: MigrationPath::Retire,
        status: ReportStatus::Redundant,
        condition: |s: &RuleSignals| s.business_value <= 3 && s.reuse_potential >= 4,
    },
    MigrationRule {
        id: MigrationRuleId::EmbeddedOperational,
        path: MigrationPath::EmbeddedAnalytics,
        status: ReportStatus::Needed,
        condition: |s: &RuleSignals| {
            s.real_time <= 2 && s.data_complexity <= 2 && s.source_type != SourceType::Databricks
        },
    },
    MigrationRule {
        id: MigrationRuleId::DataLakeAdvanced,
        path: MigrationPath::DataLake,
        status: ReportStatus::Needed,
        condition: |s: &RuleSignals| s.ai_readiness <= 2 || s.data_complexity >= 4,
    },
    MigrationRule {
        id: MigrationRuleId::RetainInPlace,
        path: MigrationPath::Retain,
        status: ReportStatus::Needed,
        condition: |s: &RuleSignals| s.reuse_potential <= 2,
    },
];

/// Applied when no conditional rule matches.
pub static DEFAULT_RULE: MigrationRule = MigrationRule {
    id: MigrationRuleId::DatasphereDefault,
    path: MigrationPath::DatasphereBdc,
    status: ReportStatus::Needed,
    condition: |_: &RuleSignals| true,
};

/// First-match-wins evaluation of the decision table.
pub fn first_match(signals: &RuleSignals) -> &'static MigrationRule {
    MIGRATION_RULES
        .iter()
        .find(|rule| rule.matches(signals))
        .unwrap_or(&DEFAULT_RULE)
}

/// Every conditional rule whose predicate holds, in table order.
pub fn matching_rules(signals: &RuleSignals) -> Vec<MigrationRuleId> {
    MIGRATION_RULES
        .iter()
        .filter(|rule| rule.matches(signals))
        .map(|rule| rule.id)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn signals() -> RuleSignals {
        RuleSignals {
            business_value: 4,
            data_complexity: 3,
            real_time: 3,
            reuse_potential: 3,
            ai_readiness: 3,
            composite: CompositeScore::from_hundredths(340),
            source_type: SourceType::SapBw,
        }
    }

    #[test]
    fn neutral_signals_fall_through_to_default() {
        let rule = first_match(&signals());
        assert_eq!(rule.id, MigrationRuleId::DatasphereDefault);
        assert_eq!(rule.path, MigrationPath::DatasphereBdc);
        assert_eq!(rule.status, ReportStatus::Needed);
        assert!(matching_rules(&signals()).is_empty());
    }

    #[test]
    fn deprecation_needs_both_low_value_and_low_composite() {
        let low = RuleSignals {
            business_value: 2,
            composite: CompositeScore::from_hundredths(199),
            ..signals()
        };
        assert_eq!(first_match(&low).id, MigrationRuleId::LowValueRetirement);

        let at_threshold = RuleSignals {
            composite: CompositeScore::from_hundredths(200),
            ..low
        };
        assert_ne!(
            first_match(&at_threshold).id,
            MigrationRuleId::LowValueRetirement
        );
    }

    #[test]
    fn earlier_rules_shadow_later_matches() {
        // Redundant, embedded and data lake conditions all hold here.
        let overlapping = RuleSignals {
            business_value: 3,
            reuse_potential: 5,
            real_time: 1,
            data_complexity: 1,
            ai_readiness: 1,
            ..signals()
        };
        assert_eq!(
            matching_rules(&overlapping),
            vec![
                MigrationRuleId::RedundantWithReuse,
                MigrationRuleId::EmbeddedOperational,
                MigrationRuleId::DataLakeAdvanced,
            ]
        );
        let rule = first_match(&overlapping);
        assert_eq!(rule.path, MigrationPath::Retire);
        assert_eq!(rule.status, ReportStatus::Redundant);
    }

    #[test]
    fn databricks_never_lands_in_embedded_analytics() {
        let operational = RuleSignals {
            real_time: 1,
            data_complexity: 2,
            ..signals()
        };
        assert_eq!(
            first_match(&operational).path,
            MigrationPath::EmbeddedAnalytics
        );

        let databricks = RuleSignals {
            source_type: SourceType::Databricks,
            ..operational
        };
        assert_eq!(first_match(&databricks).path, MigrationPath::DatasphereBdc);
    }

    #[test]
    fn unrelated_scores_do_not_move_the_match() {
        let base = RuleSignals {
            reuse_potential: 2,
            ..signals()
        };
        assert_eq!(first_match(&base).id, MigrationRuleId::RetainInPlace);

        for composite in [150, 250, 480] {
            let varied = RuleSignals {
                composite: CompositeScore::from_hundredths(composite),
                ..base
            };
            assert_eq!(first_match(&varied).id, MigrationRuleId::RetainInPlace);
        }
    }
}
