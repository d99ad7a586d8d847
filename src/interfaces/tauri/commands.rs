use crate::domain::analysis::AnalysisReport;
use crate::domain::error::{AppError, Result};
use crate::domain::llm_config::LLMConfig;
use crate::domain::triz::TrizData;
use crate::interfaces::logging::{add_log, LogEntry};
use crate::interfaces::tauri::AppState;
use std::path::Path;
use std::sync::Arc;
use tauri::State;
use validator::Validate;

fn effective_config(state: &AppState, config: Option<LLMConfig>) -> LLMConfig {
    config.unwrap_or_else(|| state.last_config.lock().unwrap().clone())
}

/// Run the full pipeline for one picked file. Ingestion failures fail the
/// command; later failures come back inside the report so the frontend can
/// still show counts and raw data.
#[tauri::command]
pub async fn analyze_file(
    state: State<'_, Arc<AppState>>,
    config: Option<LLMConfig>,
    path: String,
) -> Result<AnalysisReport> {
    let filename = Path::new(&path)
        .file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_else(|| path.clone());

    add_log(
        &state.logs,
        "INFO",
        "Analyze",
        &format!("Analyzing {}", filename),
    );

    let bytes = std::fs::read(&path)
        .map_err(|e| AppError::IoError(format!("Failed to read {}: {}", path, e)))?;

    let config = effective_config(&state, config);
    let result = state
        .analyze_use_case
        .execute(&config, &bytes, &filename)
        .await;

    match &result {
        Ok(report) if report.error.is_some() => add_log(
            &state.logs,
            "WARN",
            "Analyze",
            &format!(
                "Partial result for {}: {}",
                filename,
                report.error.as_deref().unwrap_or_default()
            ),
        ),
        Ok(report) => add_log(
            &state.logs,
            "INFO",
            "Analyze",
            &format!(
                "Analysis complete for {}: {} rows, {} columns, {} suggestions",
                filename,
                report.row_count,
                report.column_count,
                report.suggestions.as_ref().map(|s| s.len()).unwrap_or(0)
            ),
        ),
        Err(err) => add_log(
            &state.logs,
            "ERROR",
            "Analyze",
            &format!("Analysis failed for {}: {}", filename, err),
        ),
    }

    result
}

#[tauri::command]
pub async fn get_llm_models(
    state: State<'_, Arc<AppState>>,
    config: Option<LLMConfig>,
) -> Result<Vec<String>> {
    let config = effective_config(&state, config);
    state.llm_client.list_models(&config).await
}

#[tauri::command]
pub fn sync_config(state: State<'_, Arc<AppState>>, config: LLMConfig) -> Result<()> {
    config
        .validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    add_log(
        &state.logs,
        "INFO",
        "Config",
        &format!("Config synced: base_url={} model={}", config.base_url, config.model),
    );

    *state.last_config.lock().unwrap() = config;
    Ok(())
}

#[tauri::command]
pub fn save_api_key(state: State<'_, Arc<AppState>>, provider: String, key: String) -> Result<()> {
    state.config_service.save_api_key(&provider, &key)
}

#[tauri::command]
pub fn get_api_key(state: State<'_, Arc<AppState>>, provider: String) -> Result<String> {
    state.config_service.get_api_key(&provider)
}

#[tauri::command]
pub fn delete_api_key(state: State<'_, Arc<AppState>>, provider: String) -> Result<()> {
    state.config_service.delete_api_key(&provider)
}

/// The full reference dataset, for the frontend's principle browser.
#[tauri::command]
pub fn get_triz_data(state: State<'_, Arc<AppState>>) -> TrizData {
    (*state.triz_data).clone()
}

#[tauri::command]
pub fn get_logs(state: State<'_, Arc<AppState>>) -> Vec<LogEntry> {
    state.logs.lock().unwrap().clone()
}

#[tauri::command]
pub fn add_log_message(
    state: State<'_, Arc<AppState>>,
    level: String,
    source: String,
    message: String,
) {
    add_log(&state.logs, &level, &source, &message);
}
