// SECOM quality agent server: configuration, HTTP surface and startup

pub mod api; // HTTP handlers
pub mod error; // Response error codes
pub mod model; // Configuration, TLS and response types
pub mod startup; // Logging, servers and shutdown
pub mod state; // Shared application state

pub use model::{ConfigArgs, Configuration};
pub use state::AppState;
