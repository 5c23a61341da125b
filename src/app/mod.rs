pub mod cli;
pub mod error;

// Re-export commonly used types
pub use cli::{Command, parse_args, run};
pub use error::AppError;
