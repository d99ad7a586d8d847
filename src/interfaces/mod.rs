pub mod logging;
pub mod tauri;
