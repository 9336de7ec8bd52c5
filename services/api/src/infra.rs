use chrono::NaiveDate;
use datanext::catalog::{
    ClassificationError, CriteriaError, CriteriaSet, CriterionId, ReportCatalog, ReportGenerator,
};
use datanext::config::CatalogConfig;
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use tracing::warn;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
    pub(crate) catalog: Arc<ReportCatalog>,
}

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}

/// Parses a `ID=PERCENT` weight override such as `2=25`.
pub(crate) fn parse_weight_override(raw: &str) -> Result<(CriterionId, u8), String> {
    let (id, weight) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected ID=PERCENT, got '{raw}'"))?;
    let id = id
        .trim()
        .parse::<u8>()
        .map_err(|err| format!("invalid criterion id in '{raw}' ({err})"))?;
    let weight = weight
        .trim()
        .parse::<u8>()
        .map_err(|err| format!("invalid weight in '{raw}' ({err})"))?;
    Ok((CriterionId(id), weight))
}

/// Applies overrides in order. Unknown ids leave the set untouched and are returned
/// so callers can surface them.
pub(crate) fn apply_weight_overrides<I>(
    base: &CriteriaSet,
    overrides: I,
) -> (CriteriaSet, Vec<CriterionId>)
where
    I: IntoIterator<Item = (CriterionId, u8)>,
{
    let mut criteria = base.clone();
    let mut ignored = Vec::new();

    for (id, weight) in overrides {
        if let Err(CriteriaError::UnknownCriterionId(unknown)) = criteria.set_weight(id, weight) {
            warn!(criterion = %unknown, weight, "ignoring weight override for unknown criterion");
            ignored.push(unknown);
        }
    }

    (criteria, ignored)
}

pub(crate) fn build_catalog(
    config: &CatalogConfig,
    criteria: CriteriaSet,
    generated_on: NaiveDate,
) -> Result<ReportCatalog, ClassificationError> {
    let mut generator = match config.seed {
        Some(seed) => ReportGenerator::seeded(seed),
        None => ReportGenerator::from_entropy(),
    };
    ReportCatalog::generate(&mut generator, config.size, criteria, generated_on)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weight_override_requires_id_and_percent() {
        assert_eq!(
            parse_weight_override(" 3 = 25 "),
            Ok((CriterionId::DATA_COMPLEXITY, 25))
        );
        assert!(parse_weight_override("3").is_err());
        assert!(parse_weight_override("x=10").is_err());
        assert!(parse_weight_override("3=300").is_err());
    }

    #[test]
    fn unknown_overrides_are_reported_not_applied() {
        let base = CriteriaSet::standard();
        let (criteria, ignored) = apply_weight_overrides(
            &base,
            [(CriterionId::REAL_TIME, 20), (CriterionId(12), 30)],
        );
        assert_eq!(ignored, vec![CriterionId(12)]);
        assert_eq!(criteria, base.with_weight(CriterionId::REAL_TIME, 20));
        assert_eq!(criteria.total_weight(), 105);
    }

    #[test]
    fn seeded_config_builds_reproducible_catalogs() {
        let config = CatalogConfig {
            size: 12,
            seed: Some(21),
        };
        let today = NaiveDate::from_ymd_opt(2025, 1, 15).expect("valid date");
        let first = build_catalog(&config, CriteriaSet::standard(), today).expect("builds");
        let second = build_catalog(&config, CriteriaSet::standard(), today).expect("builds");
        assert_eq!(first.len(), 12);
        assert_eq!(first, second);
    }
}
