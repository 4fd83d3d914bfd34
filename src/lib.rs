pub mod classifier;
pub mod cli;
pub mod config;
pub mod error;
pub mod generator;
pub mod llm;
pub mod server;
pub mod types;

// Re-export commonly used types
pub use config::Config;
pub use error::{ErrorKind, LearnPathError};
pub use generator::AppContext;
