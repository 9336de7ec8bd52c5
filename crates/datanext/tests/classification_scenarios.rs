use datanext::catalog::{
    classify, ClassificationEngine, CriteriaScores, CriteriaSet, CriterionId, MigrationPath,
    MigrationRuleId, ReportGenerator, ReportStatus, SourceType,
};

fn scores(pairs: [(u8, u8); 8]) -> CriteriaScores {
    CriteriaScores::from(pairs)
}

#[test]
fn documented_scenarios_resolve_to_expected_paths() {
    let criteria = CriteriaSet::standard();
    let engine = ClassificationEngine::new(&criteria);

    let embedded = engine
        .classify(
            SourceType::SapAbap,
            &scores([(1, 3), (2, 2), (3, 1), (4, 2), (5, 1), (6, 3), (7, 2), (8, 4)]),
        )
        .expect("classifies");
    assert_eq!(embedded.composite_score.to_string(), "2.20");
    assert_eq!(embedded.migration_path, MigrationPath::EmbeddedAnalytics);
    assert_eq!(embedded.status, ReportStatus::Needed);

    let all_fives: CriteriaScores = CriterionId::ordered()
        .into_iter()
        .map(|id| (id, 5))
        .collect();
    let rebalanced = criteria.with_weights([
        (CriterionId::STRATEGIC_OBJECTIVES, 10),
        (CriterionId::BUSINESS_VALUE, 25),
    ]);
    for weights in [&criteria, &rebalanced] {
        let lake = ClassificationEngine::new(weights)
            .classify(SourceType::Databricks, &all_fives)
            .expect("classifies");
        assert_eq!(lake.composite_score.to_string(), "5.00");
        assert_eq!(lake.migration_path, MigrationPath::DataLake);
        assert_eq!(lake.status, ReportStatus::Needed);
    }

    // 2*15 + 1*20 + 1*10 + 1*10 + 1*15 + 2*10 + 2*10 + 2*10 = 145 -> 1.45
    let deprecated = engine
        .classify(
            SourceType::SapBw,
            &scores([(1, 2), (2, 1), (3, 1), (4, 1), (5, 1), (6, 2), (7, 2), (8, 2)]),
        )
        .expect("classifies");
    assert_eq!(deprecated.composite_score.to_string(), "1.45");
    assert_eq!(deprecated.migration_path, MigrationPath::Retire);
    assert_eq!(deprecated.status, ReportStatus::Deprecated);
    assert_eq!(deprecated.rule, MigrationRuleId::LowValueRetirement);
}

#[test]
fn composite_equals_independent_weighted_sum() {
    let criteria = CriteriaSet::standard().with_weight(CriterionId::HISTORICAL_DEPTH, 18);
    let reports = ReportGenerator::seeded(11)
        .generate(200, &criteria)
        .expect("generates");

    for report in &reports {
        let expected: f64 = criteria
            .iter()
            .map(|criterion| {
                let score = report.criteria_scores.get(criterion.id).unwrap_or(0);
                f64::from(score) * f64::from(criterion.weight) / 100.0
            })
            .sum();
        let rounded = (expected * 100.0).round() / 100.0;
        assert!(
            (report.composite_score() - rounded).abs() < 1e-9,
            "{}: {} vs {}",
            report.id,
            report.composite_score(),
            rounded
        );
    }
}

#[test]
fn unrelated_score_changes_keep_the_matched_rule() {
    let criteria = CriteriaSet::standard();
    let reports = ReportGenerator::seeded(5)
        .generate(150, &criteria)
        .expect("generates");

    // Criteria 1, 4 and 7 only feed the composite, which only the first rule reads.
    for report in reports
        .iter()
        .filter(|report| report.criteria_scores.get(CriterionId::BUSINESS_VALUE) > Some(2))
    {
        for score in 1..=5 {
            let mut varied = report.clone();
            varied
                .criteria_scores
                .insert(CriterionId::STRATEGIC_OBJECTIVES, score);
            varied
                .criteria_scores
                .insert(CriterionId::HISTORICAL_DEPTH, 6 - score);
            varied.criteria_scores.insert(CriterionId::EFFORT_VS_VALUE, score);

            let classification = classify(&varied, &criteria).expect("classifies");
            assert_eq!(classification.rule, report.classification.rule);
            assert_eq!(
                classification.migration_path,
                report.classification.migration_path
            );
        }
    }
}

#[test]
fn classify_is_idempotent_over_a_catalog() {
    let criteria = CriteriaSet::standard();
    let reports = ReportGenerator::seeded(3)
        .generate(50, &criteria)
        .expect("generates");

    for report in &reports {
        let first = classify(report, &criteria).expect("classifies");
        let second = classify(report, &criteria).expect("classifies");
        assert_eq!(first, second);
        assert_eq!(first, report.classification);
    }
}
