mod chat_model;
mod client_utils;
mod errors;
pub mod openai;
pub mod openrouter;
pub mod testing;
mod types;

pub use chat_model::ChatModel;
pub use errors::*;
pub use types::*;
