pub mod client;
pub mod config;
pub mod prompts;
pub mod template;

pub use client::{LanguageModel, OllamaClient, SamplingParams};
pub use config::LlmConfig;
