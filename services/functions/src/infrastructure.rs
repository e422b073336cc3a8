// Infrastructure layer modules
pub mod function_config;
pub mod logging;

// Re-exports
pub use function_config::{FunctionConfig, FunctionConfigError};
#[cfg(test)]
pub use logging::init_test_logging;
pub use logging::init_logging;
