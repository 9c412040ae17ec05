// secom-quality-client: HTTP client for the SECOM MES Quality REST API

pub mod client;
pub mod config;
pub mod constants;
pub mod error;
pub mod http;
pub mod model;

pub use client::QualityClient;
pub use config::QualityClientConfig;
pub use error::{QualityError, Result};
