pub mod config;
pub mod error;
pub mod logging;
pub mod result;

pub use config::PacerConfig;
pub use error::PacerError;
pub use logging::init_tracing;
pub use result::PacerResult;
