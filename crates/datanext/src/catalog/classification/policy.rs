use super::super::criteria::{CriteriaScores, CriteriaSet, CriterionId};
use super::Classification;

/// Names the criterion that drove the recommendation: business value when it scores
/// above 3, otherwise the effort/value trade-off.
pub(crate) fn rationale(scores: &CriteriaScores, criteria: &CriteriaSet) -> String {
    let driver = if high_business_value(scores) {
        CriterionId::BUSINESS_VALUE
    } else {
        CriterionId::EFFORT_VS_VALUE
    };

    let name = criteria
        .get(driver)
        .map(|criterion| criterion.name.to_string())
        .unwrap_or_else(|| format!("criterion {driver}"));

    format!("Based on {name} assessment")
}

pub(crate) fn recommendation_narrative(
    classification: &Classification,
    scores: &CriteriaScores,
    criteria_count: usize,
) -> String {
    let driver = if high_business_value(scores) {
        "high business value"
    } else {
        "optimization potential"
    };

    let real_time = scores
        .get(CriterionId::REAL_TIME)
        .map(|score| score <= 2)
        .unwrap_or(false);

    format!(
        "Based on the weighted analysis of all {} decision criteria, this report scores {}/5.0. \
         The {} path is recommended due to {}{}.",
        criteria_count,
        classification.composite_score,
        classification.migration_path.label(),
        driver,
        if real_time {
            " and real-time requirements"
        } else {
            ""
        }
    )
}

fn high_business_value(scores: &CriteriaScores) -> bool {
    scores
        .get(CriterionId::BUSINESS_VALUE)
        .map(|score| score > 3)
        .unwrap_or(false)
}
