//! Web layer for the climate API.
//!
//! Maps each HTTP route onto one store query and shapes the result as JSON.

mod dto;
mod routes;
mod state;
pub mod templates;


pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
pub use templates::*;
