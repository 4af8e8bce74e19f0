pub mod app_state;
pub mod clients;
pub mod repositories;
pub mod services;

pub use app_state::{AppState, DbPool};
