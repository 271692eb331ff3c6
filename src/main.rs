use limbic::api::{self, app_state::AppState};
use limbic::classifier::{EmotionClassifier, create_classifier};
use limbic::config::config::AppConfig;
use limbic::config::loader::{ConfigLoader, config_exists};
use limbic::observability::{ObservabilityState, create_observability_router, init_tracing};
use limbic::services::diary::{DiaryService, DiaryStore};
use limbic::services::{create_analysis_service, create_diary_service};
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing("limbic");

    info!("Starting Limbic...");

    let config = if config_exists() {
        ConfigLoader::load()?
    } else {
        AppConfig::development()
    };
    ConfigLoader::validate(&config)?;
    info!("Configuration loaded successfully (environment: {})", config.environment);

    let classifier: Arc<dyn EmotionClassifier> = Arc::from(create_classifier(&config.classifier)?);
    info!(
        "Classifier initialized: {} (backend: {})",
        classifier.model_name(),
        config.classifier.backend
    );

    let store = DiaryStore::new();
    let diary_service = create_diary_service(store.clone());
    let diary_for_analysis: Arc<dyn DiaryService> = Arc::from(create_diary_service(store));
    info!("Diary store initialized");

    let analysis_service = create_analysis_service(
        classifier.clone(),
        diary_for_analysis,
        config.analysis.detection_threshold,
        config.is_development(),
    );
    info!(
        "Analysis service initialized (detection threshold: {})",
        config.analysis.detection_threshold
    );

    let observability_state = Arc::new(ObservabilityState::new(
        env!("CARGO_PKG_VERSION").to_string(),
        classifier.model_name().to_string(),
    ));

    let app_state = AppState::new(
        analysis_service,
        diary_service,
        observability_state.metrics.clone(),
        classifier.model_name().to_string(),
        config.analysis.top_k,
    );
    info!("Application state created");

    let api_router = api::create_router(app_state);
    let router = create_observability_router(observability_state).merge(api_router);
    info!("API router created with observability endpoints");

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Server listening on {}", addr);

    axum::serve(listener, router).await?;

    Ok(())
}
