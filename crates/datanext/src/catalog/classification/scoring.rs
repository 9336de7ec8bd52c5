use super::super::criteria::{CriteriaScores, CriteriaSet, CriterionId};
use super::ClassificationError;
use serde::{Serialize, Serializer};
use std::fmt;

/// Weighted 1-5 average, held in hundredths so it is rounded to 2 decimals by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct CompositeScore(u32);

impl CompositeScore {
    pub const fn from_hundredths(hundredths: u32) -> Self {
        Self(hundredths)
    }

    pub const fn hundredths(self) -> u32 {
        self.0
    }

    pub fn value(self) -> f64 {
        f64::from(self.0) / 100.0
    }
}

impl fmt::Display for CompositeScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.0 / 100, self.0 % 100)
    }
}

impl Serialize for CompositeScore {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.value())
    }
}

/// Contribution of a single criterion to the composite, kept for audit trails.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreComponent {
    pub criterion: CriterionId,
    pub criterion_name: &'static str,
    pub score: u8,
    pub weight: u8,
    pub contribution: f64,
}

pub(crate) fn require_score(
    scores: &CriteriaScores,
    criterion: CriterionId,
) -> Result<u8, ClassificationError> {
    let score = scores
        .get(criterion)
        .ok_or(ClassificationError::MissingCriterionScore { criterion })?;

    if !(CriteriaScores::MIN_SCORE..=CriteriaScores::MAX_SCORE).contains(&score) {
        return Err(ClassificationError::ScoreOutOfRange { criterion, score });
    }

    Ok(score)
}

/// Sums `score * weight` over every active criterion; dividing by 100 yields the composite.
pub(crate) fn score_components(
    scores: &CriteriaScores,
    criteria: &CriteriaSet,
) -> Result<(Vec<ScoreComponent>, CompositeScore), ClassificationError> {
    let mut components = Vec::with_capacity(criteria.len());
    let mut weighted_total: u32 = 0;

    for criterion in criteria.iter() {
        let score = require_score(scores, criterion.id)?;
        let weighted = u32::from(score) * u32::from(criterion.weight);
        weighted_total += weighted;
        components.push(ScoreComponent {
            criterion: criterion.id,
            criterion_name: criterion.name,
            score,
            weight: criterion.weight,
            contribution: f64::from(weighted) / 100.0,
        });
    }

    Ok((components, CompositeScore::from_hundredths(weighted_total)))
}
