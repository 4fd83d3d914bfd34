pub mod backend;
pub mod client;

pub use backend::{GenerativeBackend, ResponseFormat};
pub use client::LLMClient;
