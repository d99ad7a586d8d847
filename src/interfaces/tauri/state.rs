use crate::application::AnalyzeUseCase;
use crate::domain::llm_config::LLMConfig;
use crate::domain::triz::TrizData;
use crate::infrastructure::config::ConfigService;
use crate::infrastructure::llm_clients::LLMClient;
use crate::interfaces::logging::SharedLogs;
use std::sync::{Arc, Mutex};

pub struct AppState {
    pub analyze_use_case: AnalyzeUseCase,
    pub config_service: ConfigService,
    pub llm_client: Arc<dyn LLMClient + Send + Sync>,
    pub triz_data: Arc<TrizData>,
    /// Last config synced from the frontend; the fallback when a command
    /// is invoked without an explicit config.
    pub last_config: Mutex<LLMConfig>,
    pub logs: SharedLogs,
}
