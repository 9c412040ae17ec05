pub mod config;
pub mod constants;
pub mod response;
pub mod tls;

pub use config::{ConfigArgs, Configuration, Secret, ValidationReport};
pub use response::{ErrorResult, RestResult};
pub use tls::TlsSettings;
