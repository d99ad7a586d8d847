mod application;
mod domain;
mod infrastructure;
mod interfaces;

use crate::interfaces::tauri::commands;

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    let _ = dotenvy::dotenv();
    let _ = tracing_subscriber::fmt().with_env_filter("info").try_init();

    tauri::Builder::default()
        .plugin(tauri_plugin_opener::init())
        .plugin(tauri_plugin_dialog::init())
        .setup(|app| crate::infrastructure::bootstrap::setup(app))
        .invoke_handler(tauri::generate_handler![
            commands::analyze_file,
            commands::get_llm_models,
            commands::sync_config,
            commands::save_api_key,
            commands::get_api_key,
            commands::delete_api_key,
            commands::get_triz_data,
            commands::get_logs,
            commands::add_log_message
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
