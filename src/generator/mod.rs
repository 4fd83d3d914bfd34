pub mod context;
pub mod fallback;
pub mod orchestrator;
pub mod path_service;
pub mod prompts;
pub mod validation;

#[cfg(test)]
pub(crate) mod testing;

pub use context::AppContext;
pub use fallback::FallbackSubstitute;
pub use orchestrator::PathOrchestrator;
pub use path_service::GenerativePathService;
