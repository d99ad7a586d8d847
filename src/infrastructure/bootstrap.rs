use std::error::Error;
use std::sync::atomic::AtomicU64;
use std::sync::{Arc, Mutex};

use tauri::Manager;
use tracing::error;

use crate::application::AnalyzeUseCase;
use crate::infrastructure::config::{ConfigService, Settings};
use crate::infrastructure::llm_clients::{GeminiClient, LLMClient};
use crate::infrastructure::reference;
use crate::interfaces::logging::{add_log, SharedLogs};
use crate::interfaces::tauri::AppState;

pub fn setup(app: &mut tauri::App) -> Result<(), Box<dyn Error>> {
    let logs: SharedLogs = Arc::new(Mutex::new(Vec::new()));

    let settings = Settings::load().map_err(|err| {
        error!(error = %err, "Failed to load settings");
        err
    })?;

    let triz_data = reference::triz_data().map_err(|err| {
        error!(error = %err, "Failed to load TRIZ reference data");
        err
    })?;

    add_log(
        &logs,
        "INFO",
        "System",
        &format!(
            "Reference data loaded: {} parameters, {} principles",
            triz_data.parameters.len(),
            triz_data.inventive_principles.len()
        ),
    );

    let llm_client: Arc<dyn LLMClient + Send + Sync> = Arc::new(GeminiClient::new());
    let generation = Arc::new(AtomicU64::new(0));
    let analyze_use_case =
        AnalyzeUseCase::new(llm_client.clone(), triz_data.clone(), generation);

    let state = AppState {
        analyze_use_case,
        config_service: ConfigService::new(),
        llm_client,
        triz_data,
        last_config: Mutex::new(settings.into_llm_config()),
        logs: logs.clone(),
    };

    app.manage(Arc::new(state));

    add_log(&logs, "INFO", "System", "Backend initialized");

    Ok(())
}
