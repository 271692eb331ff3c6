use crate::observability::AppMetrics;
use crate::services::analysis::AnalysisService;
use crate::services::diary::DiaryService;
use std::sync::Arc;

/// Application state containing all shared services
#[derive(Clone)]
pub struct AppState {
    /// Analysis service orchestrating classify + rank + append
    pub analysis_service: Arc<dyn AnalysisService>,
    /// Diary service for per-session entry access
    pub diary_service: Arc<dyn DiaryService>,
    /// Shared application metrics
    pub metrics: Arc<AppMetrics>,
    /// Loaded classifier model name
    pub model_name: String,
    /// Number of detected emotions to include in responses (0 = unlimited)
    pub top_k: usize,
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("analysis_service", &"Arc<dyn AnalysisService>")
            .field("diary_service", &"Arc<dyn DiaryService>")
            .field("metrics", &"Arc<AppMetrics>")
            .field("model_name", &self.model_name)
            .field("top_k", &self.top_k)
            .finish()
    }
}

impl AppState {
    /// Create new application state
    pub fn new(
        analysis_service: Box<dyn AnalysisService>,
        diary_service: Box<dyn DiaryService>,
        metrics: Arc<AppMetrics>,
        model_name: String,
        top_k: usize,
    ) -> Self {
        Self {
            analysis_service: Arc::from(analysis_service),
            diary_service: Arc::from(diary_service),
            metrics,
            model_name,
            top_k,
        }
    }
}
