//! Application startup utilities

mod http;
mod logging;
mod shutdown;

pub use http::{http_server, https_server};
pub use logging::{LogRotation, LoggingConfig, LoggingGuard, init_logging};
pub use shutdown::{ShutdownSignal, stop_servers, wait_for_shutdown_signal};
