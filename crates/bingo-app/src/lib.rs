// Application layer - use cases over the domain and its stores
pub mod application;
pub mod presentation;

pub use presentation::bootstrap::{build_app_state, default_data_dir};
pub use presentation::state::AppState;
