use crate::cli::ServeArgs;
use crate::infra::{AppState, ConfiguredLeadGateway};
use crate::routes::with_landing_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use ev_landing::analytics::TracingAnalyticsSink;
use ev_landing::api::LandingService;
use ev_landing::campaigns::CampaignRegistry;
use ev_landing::catalog::Catalog;
use ev_landing::config::AppConfig;
use ev_landing::error::AppError;
use ev_landing::telemetry;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::info;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let catalog = Arc::new(Catalog::standard()?);
    let campaigns = Arc::new(CampaignRegistry::standard());
    let leads = Arc::new(ConfiguredLeadGateway::from_config(&config.leads)?);
    info!(
        models = catalog.models().len(),
        campaigns = campaigns.len(),
        lead_gateway = leads.label(),
        "landing data loaded"
    );

    let landing_service = Arc::new(LandingService::new(
        catalog,
        campaigns,
        leads,
        Arc::new(TracingAnalyticsSink),
        config.contact.whatsapp_number.clone(),
    ));

    let app = with_landing_routes(landing_service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "ev landing api ready");

    axum::serve(listener, app).await?;
    Ok(())
}
