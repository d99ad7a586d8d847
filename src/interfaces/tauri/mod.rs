pub mod commands;
pub(crate) mod state;

pub use commands::*;
pub use state::AppState;
