pub mod cache;
pub mod dtos;
pub mod queries;
pub mod services;
pub mod session;
pub mod utils;

pub use utils::ResultExt;
