use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use tracing::warn;

/// Stable identifier of a decision criterion, used as the key into report scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CriterionId(pub u8);

impl CriterionId {
    pub const STRATEGIC_OBJECTIVES: Self = Self(1);
    pub const BUSINESS_VALUE: Self = Self(2);
    pub const DATA_COMPLEXITY: Self = Self(3);
    pub const HISTORICAL_DEPTH: Self = Self(4);
    pub const REAL_TIME: Self = Self(5);
    pub const REUSE_POTENTIAL: Self = Self(6);
    pub const EFFORT_VS_VALUE: Self = Self(7);
    pub const AI_READINESS: Self = Self(8);

    pub const fn ordered() -> [Self; 8] {
        [
            Self::STRATEGIC_OBJECTIVES,
            Self::BUSINESS_VALUE,
            Self::DATA_COMPLEXITY,
            Self::HISTORICAL_DEPTH,
            Self::REAL_TIME,
            Self::REUSE_POTENTIAL,
            Self::EFFORT_VS_VALUE,
            Self::AI_READINESS,
        ]
    }
}

impl fmt::Display for CriterionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One weighted dimension used to evaluate a report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Criterion {
    pub id: CriterionId,
    pub name: &'static str,
    pub short_name: &'static str,
    pub description: &'static str,
    /// Percentage share of the composite score.
    pub weight: u8,
    pub options: [&'static str; 5],
}

/// Raised when a weight update names a criterion the registry does not hold.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CriteriaError {
    #[error("criterion {0} is not registered")]
    UnknownCriterionId(CriterionId),
}

/// Advisory raised when active weights do not add up to 100%.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WeightImbalance {
    pub total: u32,
    pub expected: u32,
}

impl WeightImbalance {
    pub fn delta(&self) -> i64 {
        i64::from(self.total) - i64::from(self.expected)
    }

    pub fn message(&self) -> String {
        format!(
            "criteria weights total {}% (expected {}%)",
            self.total, self.expected
        )
    }
}

/// The decision criteria registry together with their active weights.
///
/// Values are treated as immutable snapshots: classification borrows one set for a
/// whole run, and weight edits produce a new set through [`CriteriaSet::with_weight`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CriteriaSet {
    criteria: Vec<Criterion>,
}

impl Default for CriteriaSet {
    fn default() -> Self {
        Self::standard()
    }
}

impl CriteriaSet {
    pub const EXPECTED_TOTAL_WEIGHT: u32 = 100;

    pub fn standard() -> Self {
        let criteria = vec![
            Criterion {
                id: CriterionId::STRATEGIC_OBJECTIVES,
                name: "Strategic Objectives",
                short_name: "S/4HANA Alignment",
                description: "Based on the functions e.g. Reimagine Finance",
                weight: 15,
                options: [
                    "Core Finance",
                    "Supply Chain",
                    "Sales & Distribution",
                    "HR",
                    "Manufacturing",
                ],
            },
            Criterion {
                id: CriterionId::BUSINESS_VALUE,
                name: "Business Value",
                short_name: "Strategic Importance",
                description:
                    "How critical the reporting is for decision-making, competitive advantage",
                weight: 20,
                options: ["Mission Critical", "High", "Medium", "Low", "Minimal"],
            },
            Criterion {
                id: CriterionId::DATA_COMPLEXITY,
                name: "Data Complexity",
                short_name: "Heterogeneity",
                description:
                    "Mix of SAP sources, non-SAP (e.g., Kinaxis, Salesforce) and transformations",
                weight: 10,
                options: [
                    "SAP Only",
                    "SAP + 1 External",
                    "Multi-Source",
                    "Complex Transformations",
                    "Highly Complex",
                ],
            },
            Criterion {
                id: CriterionId::HISTORICAL_DEPTH,
                name: "Historical Depth",
                short_name: "Archival/Analytics",
                description:
                    "Historical data requirement for past several years, planning, advanced analytics",
                weight: 10,
                options: [
                    "Current Only",
                    "1 Year",
                    "3 Years",
                    "5+ Years",
                    "Full History",
                ],
            },
            Criterion {
                id: CriterionId::REAL_TIME,
                name: "Real-time Requirement",
                short_name: "Operational Need",
                description: "Business need for near-real-time, batch or transactional speed",
                weight: 15,
                options: [
                    "Real-time",
                    "Near Real-time",
                    "Hourly",
                    "Daily Batch",
                    "Weekly/Monthly",
                ],
            },
            Criterion {
                id: CriterionId::REUSE_POTENTIAL,
                name: "Legacy Reuse Potential",
                short_name: "Model Reusability",
                description: "Existing BW reports/models can be reused or must be re-designed",
                weight: 10,
                options: [
                    "Direct Reuse",
                    "Minor Changes",
                    "Moderate Redesign",
                    "Major Redesign",
                    "Full Rebuild",
                ],
            },
            Criterion {
                id: CriterionId::EFFORT_VS_VALUE,
                name: "Effort vs Value",
                short_name: "Cost/Time to Value",
                description:
                    "Effort of migration versus expected value; availability of business/user readiness",
                weight: 10,
                options: [
                    "Quick Win",
                    "Low Effort/High Value",
                    "Balanced",
                    "High Effort/High Value",
                    "High Effort/Low Value",
                ],
            },
            Criterion {
                id: CriterionId::AI_READINESS,
                name: "Innovation/AI Readiness",
                short_name: "Advanced Analytics",
                description:
                    "Need for advanced analytics, ML, combining with external data (social, IoT)",
                weight: 10,
                options: [
                    "AI/ML Required",
                    "Predictive Analytics",
                    "Advanced Reporting",
                    "Standard Analytics",
                    "Basic Reporting",
                ],
            },
        ];

        Self { criteria }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Criterion> {
        self.criteria.iter()
    }

    pub fn len(&self) -> usize {
        self.criteria.len()
    }

    pub fn is_empty(&self) -> bool {
        self.criteria.is_empty()
    }

    pub fn get(&self, id: CriterionId) -> Option<&Criterion> {
        self.criteria.iter().find(|criterion| criterion.id == id)
    }

    /// Replaces the weight of criterion `id` in place; other fields never change.
    pub fn set_weight(&mut self, id: CriterionId, weight: u8) -> Result<(), CriteriaError> {
        let criterion = self
            .criteria
            .iter_mut()
            .find(|criterion| criterion.id == id)
            .ok_or(CriteriaError::UnknownCriterionId(id))?;
        criterion.weight = weight;
        Ok(())
    }

    /// Returns a copy with criterion `id` reweighted. Unknown ids leave the copy unchanged.
    pub fn with_weight(&self, id: CriterionId, weight: u8) -> Self {
        let mut updated = self.clone();
        if let Err(err) = updated.set_weight(id, weight) {
            warn!(criterion = %id, weight, "ignoring weight update: {err}");
        }
        updated
    }

    pub fn with_weights<I>(&self, overrides: I) -> Self
    where
        I: IntoIterator<Item = (CriterionId, u8)>,
    {
        overrides
            .into_iter()
            .fold(self.clone(), |criteria, (id, weight)| {
                criteria.with_weight(id, weight)
            })
    }

    pub fn weights(&self) -> BTreeMap<CriterionId, u8> {
        self.criteria
            .iter()
            .map(|criterion| (criterion.id, criterion.weight))
            .collect()
    }

    pub fn total_weight(&self) -> u32 {
        self.criteria
            .iter()
            .map(|criterion| u32::from(criterion.weight))
            .sum()
    }

    pub fn weight_imbalance(&self) -> Option<WeightImbalance> {
        let total = self.total_weight();
        if total == Self::EXPECTED_TOTAL_WEIGHT {
            None
        } else {
            Some(WeightImbalance {
                total,
                expected: Self::EXPECTED_TOTAL_WEIGHT,
            })
        }
    }
}

/// Per-criterion scores on the 1-5 scale, keyed by criterion id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CriteriaScores(BTreeMap<CriterionId, u8>);

impl CriteriaScores {
    pub const MIN_SCORE: u8 = 1;
    pub const MAX_SCORE: u8 = 5;

    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, id: CriterionId) -> Option<u8> {
        self.0.get(&id).copied()
    }

    pub fn insert(&mut self, id: CriterionId, score: u8) -> Option<u8> {
        self.0.insert(id, score)
    }

    pub fn remove(&mut self, id: CriterionId) -> Option<u8> {
        self.0.remove(&id)
    }

    pub fn iter(&self) -> impl Iterator<Item = (CriterionId, u8)> + '_ {
        self.0.iter().map(|(id, score)| (*id, *score))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(CriterionId, u8)> for CriteriaScores {
    fn from_iter<T: IntoIterator<Item = (CriterionId, u8)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<const N: usize> From<[(u8, u8); N]> for CriteriaScores {
    fn from(pairs: [(u8, u8); N]) -> Self {
        pairs
            .into_iter()
            .map(|(id, score)| (CriterionId(id), score))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_registry_is_balanced() {
        let criteria = CriteriaSet::standard();
        assert_eq!(criteria.len(), 8);
        assert_eq!(criteria.total_weight(), 100);
        assert!(criteria.weight_imbalance().is_none());
        let ids: Vec<_> = criteria.iter().map(|criterion| criterion.id).collect();
        assert_eq!(ids, CriterionId::ordered().to_vec());
    }

    #[test]
    fn with_weight_only_touches_the_target_criterion() {
        let original = CriteriaSet::standard();
        let updated = original.with_weight(CriterionId::DATA_COMPLEXITY, 25);

        for (before, after) in original.iter().zip(updated.iter()) {
            if before.id == CriterionId::DATA_COMPLEXITY {
                assert_eq!(after.weight, 25);
                assert_eq!(after.options, before.options);
                assert_eq!(after.name, before.name);
            } else {
                assert_eq!(after, before);
            }
        }
        assert_eq!(
            original
                .get(CriterionId::DATA_COMPLEXITY)
                .map(|criterion| criterion.weight),
            Some(10),
            "source snapshot is untouched"
        );
    }

    #[test]
    fn unknown_ids_are_a_no_op() {
        let original = CriteriaSet::standard();
        assert_eq!(original.with_weight(CriterionId(9), 40), original);

        let mut in_place = original.clone();
        let err = in_place
            .set_weight(CriterionId(0), 5)
            .expect_err("id 0 is not registered");
        assert_eq!(err, CriteriaError::UnknownCriterionId(CriterionId(0)));
        assert_eq!(in_place, original);
    }

    #[test]
    fn imbalance_is_reported_but_not_enforced() {
        let criteria = CriteriaSet::standard().with_weights([
            (CriterionId::BUSINESS_VALUE, 30),
            (CriterionId::REAL_TIME, 5),
            (CriterionId::AI_READINESS, 15),
        ]);
        let imbalance = criteria.weight_imbalance().expect("total drifts to 105");
        assert_eq!(imbalance.total, 105);
        assert_eq!(imbalance.delta(), 5);
        assert_eq!(
            imbalance.message(),
            "criteria weights total 105% (expected 100%)"
        );
    }

    #[test]
    fn scores_deserialize_from_string_keys() {
        let scores: CriteriaScores =
            serde_json::from_str(r#"{"1":3,"2":2,"8":4}"#).expect("scores parse");
        assert_eq!(scores.get(CriterionId::BUSINESS_VALUE), Some(2));
        assert_eq!(scores.get(CriterionId::REAL_TIME), None);
        assert_eq!(scores.len(), 3);
    }
}
