use crate::cli::ServeArgs;
use crate::infra::{build_catalog, AppState};
use crate::routes::catalog_router;
use axum_prometheus::PrometheusMetricLayer;
use chrono::Local;
use datanext::catalog::CriteriaSet;
use datanext::config::AppConfig;
use datanext::error::AppError;
use datanext::telemetry;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::{info, warn};

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let criteria = CriteriaSet::standard();
    if let Some(imbalance) = criteria.weight_imbalance() {
        warn!(total = imbalance.total, "{}", imbalance.message());
    }

    let catalog = build_catalog(&config.catalog, criteria, Local::now().date_naive())?;
    info!(
        reports = catalog.len(),
        seed = ?config.catalog.seed,
        "report catalog generated"
    );

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
        catalog: Arc::new(catalog),
    };

    let app = catalog_router(app_state).layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "report rationalization service ready");

    axum::serve(listener, app).await?;
    Ok(())
}
