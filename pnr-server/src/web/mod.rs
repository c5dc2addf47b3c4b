//! Web layer for the PNR converter.
//!
//! Provides the HTTP endpoint that turns pasted PNR text into JSON.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
