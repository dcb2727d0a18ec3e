mod client;
pub mod prompts;
mod service;

pub use client::{
    API_KEY_ENV, AssistantConfig, BASE_URL_ENV, CompletionClient, HttpCompletionClient, MODEL_ENV,
};
pub use service::AssistService;
